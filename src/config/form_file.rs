use crate::core::controller::FormEvent;
use crate::domain::model::{AgeInput, Field};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Form values read from a TOML document. Absent keys are simply not typed.
///
/// ```toml
/// fullname = "Ada Lovelace"
/// email = "ada@example.com"
/// username = "ada_l"
/// password = "Abcdef1!"
/// confirm = "Abcdef1!"
/// age = 36
/// terms = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormFile {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm: Option<String>,
    pub phone: Option<String>,
    pub age: Option<AgeInput>,
    pub terms: Option<bool>,
}

impl FormFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Values in `other` win over values in `self`.
    pub fn merge(self, other: FormFile) -> FormFile {
        FormFile {
            fullname: other.fullname.or(self.fullname),
            email: other.email.or(self.email),
            username: other.username.or(self.username),
            password: other.password.or(self.password),
            confirm: other.confirm.or(self.confirm),
            phone: other.phone.or(self.phone),
            age: other.age.or(self.age),
            terms: other.terms.or(self.terms),
        }
    }

    /// The input events a user would produce filling the form top to bottom.
    pub fn events(self) -> Vec<FormEvent> {
        let texts = [
            (Field::Fullname, self.fullname),
            (Field::Email, self.email),
            (Field::Username, self.username),
            (Field::Password, self.password),
            (Field::Confirm, self.confirm),
            (Field::Phone, self.phone),
            (Field::Age, self.age.map(AgeInput::into_form_value)),
        ];

        let mut events: Vec<FormEvent> = texts
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| FormEvent::Input(field, v)))
            .collect();
        if let Some(checked) = self.terms {
            events.push(FormEvent::Toggle(checked));
        }
        events
    }
}
