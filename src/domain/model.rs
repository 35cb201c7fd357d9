use serde::{Deserialize, Serialize};
use std::fmt;

/// Form fields in declaration order. Error lists are always reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Fullname,
    Email,
    Username,
    Password,
    Confirm,
    Phone,
    Age,
    Terms,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Fullname,
        Field::Email,
        Field::Username,
        Field::Password,
        Field::Confirm,
        Field::Phone,
        Field::Age,
        Field::Terms,
    ];

    /// Identifier used on the wire and for inline error slots.
    pub fn id(self) -> &'static str {
        match self {
            Field::Fullname => "fullname",
            Field::Email => "email",
            Field::Username => "username",
            Field::Password => "password",
            Field::Confirm => "confirm",
            Field::Phone => "phone",
            Field::Age => "age",
            Field::Terms => "terms",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The checkbox listens to toggles, every other field to value changes.
    pub fn is_checkbox(self) -> bool {
        matches!(self, Field::Terms)
    }

    /// Passwords are validated exactly as typed.
    pub fn is_trimmed(self) -> bool {
        !matches!(self, Field::Password | Field::Confirm | Field::Terms)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raw values of one form-fill cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub fullname: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm: String,
    pub phone: String,
    pub age: String,
    pub terms: bool,
}

impl SignupForm {
    /// Text value of a field, `None` for the checkbox.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Fullname => Some(&self.fullname),
            Field::Email => Some(&self.email),
            Field::Username => Some(&self.username),
            Field::Password => Some(&self.password),
            Field::Confirm => Some(&self.confirm),
            Field::Phone => Some(&self.phone),
            Field::Age => Some(&self.age),
            Field::Terms => None,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Fullname => Some(&mut self.fullname),
            Field::Email => Some(&mut self.email),
            Field::Username => Some(&mut self.username),
            Field::Password => Some(&mut self.password),
            Field::Confirm => Some(&mut self.confirm),
            Field::Phone => Some(&mut self.phone),
            Field::Age => Some(&mut self.age),
            Field::Terms => None,
        }
    }

    /// Value a validator sees: trimmed for ordinary text, raw for passwords.
    pub fn validated_text(&self, field: Field) -> Option<&str> {
        self.text(field)
            .map(|v| if field.is_trimmed() { v.trim() } else { v })
    }

    pub fn payload(&self) -> SignupPayload {
        SignupPayload {
            fullname: self.fullname.trim().to_string(),
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
        }
    }
}

/// Age as supplied by a document: a number or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(f64),
    Text(String),
}

impl AgeInput {
    /// Text the age validator sees. `30.0` renders as `"30"`.
    pub fn into_form_value(self) -> String {
        match self {
            AgeInput::Number(n) => n.to_string(),
            AgeInput::Text(text) => text,
        }
    }
}

/// Body the client posts to the signup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupPayload {
    pub fullname: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: &str) -> Self {
        Self {
            field: field.id().to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupAck {
    pub ok: bool,
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRejection {
    pub ok: bool,
    pub errors: Vec<FieldError>,
}
