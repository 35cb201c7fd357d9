//! Signup endpoint handlers.
//!
//! The endpoint re-runs the client rule table over the posted body and reports every
//! failing field at once. Nothing is stored; a repeated request gets the same answer.

use crate::core::rules::validate_fields;
use crate::domain::model::{Field, FieldError, SignupAck, SignupForm, SignupRejection};
use actix_web::{error, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;

pub const ACK_MESSAGE: &str = "User validated and (mock) created.";
pub const LIVENESS_MESSAGE: &str = "Server running";

/// Fields present in the request body. The confirmation never leaves the client.
pub const ENDPOINT_FIELDS: [Field; 7] = [
    Field::Fullname,
    Field::Email,
    Field::Username,
    Field::Password,
    Field::Phone,
    Field::Age,
    Field::Terms,
];

/// Request body as posted. Values stay untyped so a wrong JSON type is reported against
/// its own field instead of failing the whole body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SignupRequest {
    pub fullname: Option<Value>,
    pub email: Option<Value>,
    pub username: Option<Value>,
    pub password: Option<Value>,
    pub phone: Option<Value>,
    pub age: Option<Value>,
    pub terms: Option<Value>,
}

/// Message for a value whose JSON type the field cannot hold.
pub fn type_message(field: Field) -> &'static str {
    match field {
        Field::Age => "Age must be a number.",
        Field::Terms => "Terms must be true or false.",
        _ => "Must be a string.",
    }
}

fn text_value(value: Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => Some(String::new()),
        Some(Value::String(text)) => Some(text),
        Some(_) => None,
    }
}

fn age_value(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::Number(n)) => Some(n.to_string()),
        other => text_value(other),
    }
}

fn terms_value(value: Option<Value>) -> Option<bool> {
    match value {
        None | Some(Value::Null) => Some(false),
        Some(Value::Bool(checked)) => Some(checked),
        Some(_) => None,
    }
}

impl SignupRequest {
    /// Missing or null values become the empty form value, so required fields fail
    /// with their "required" message and optional ones stay valid. Fields holding the
    /// wrong JSON type are returned separately and left empty in the form.
    pub fn into_form(self) -> (SignupForm, Vec<Field>) {
        let mut form = SignupForm::default();
        let mut mistyped = Vec::new();

        let texts = [
            (Field::Fullname, text_value(self.fullname)),
            (Field::Email, text_value(self.email)),
            (Field::Username, text_value(self.username)),
            (Field::Password, text_value(self.password)),
            (Field::Phone, text_value(self.phone)),
            (Field::Age, age_value(self.age)),
        ];
        for (field, value) in texts {
            match (value, form.text_mut(field)) {
                (Some(text), Some(slot)) => *slot = text,
                _ => mistyped.push(field),
            }
        }

        match terms_value(self.terms) {
            Some(checked) => form.terms = checked,
            None => mistyped.push(Field::Terms),
        }

        (form, mistyped)
    }
}

/// One entry per failing field in declaration order. A mistyped field reports its type
/// message, every other field goes through the rule table.
pub fn collect_errors(form: &SignupForm, mistyped: &[Field]) -> Vec<FieldError> {
    let checked: Vec<Field> = ENDPOINT_FIELDS
        .into_iter()
        .filter(|field| !mistyped.contains(field))
        .collect();
    let mut validated = validate_fields(form, &checked).into_iter().peekable();

    ENDPOINT_FIELDS
        .iter()
        .filter_map(|&field| {
            if mistyped.contains(&field) {
                Some(FieldError::new(field, type_message(field)))
            } else {
                validated.next_if(|e| e.field == field.id())
            }
        })
        .collect()
}

#[post("/api/signup")]
pub async fn signup(body: web::Json<SignupRequest>) -> HttpResponse {
    let (form, mistyped) = body.into_inner().into_form();
    let errors = collect_errors(&form, &mistyped);

    if !errors.is_empty() {
        tracing::info!(
            failing = errors.len(),
            fields = %errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>().join(","),
            "Signup rejected"
        );
        return HttpResponse::BadRequest().json(SignupRejection { ok: false, errors });
    }

    tracing::info!(username = %form.username.trim(), "Signup validated");
    HttpResponse::Ok().json(SignupAck {
        ok: true,
        msg: ACK_MESSAGE.to_string(),
    })
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

/// Bodies that are not a JSON object are answered in the same shape as validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, req| {
            let message = format!("Invalid request body: {}", err);
            tracing::warn!(path = %req.path(), "{}", message);
            let response = HttpResponse::BadRequest().json(SignupRejection {
                ok: false,
                errors: vec![FieldError {
                    field: "body".to_string(),
                    message,
                }],
            });
            error::InternalError::from_response(err, response).into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(index).service(signup);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(json: &str) -> (SignupForm, Vec<Field>) {
        serde_json::from_str::<SignupRequest>(json).unwrap().into_form()
    }

    #[test]
    fn test_missing_fields_become_empty_values() {
        let (form, mistyped) = SignupRequest::default().into_form();
        assert_eq!(form, SignupForm::default());
        assert!(mistyped.is_empty());
    }

    #[test]
    fn test_age_accepts_numbers_and_text() {
        assert_eq!(read(r#"{"age": 30}"#).0.age, "30");
        assert_eq!(read(r#"{"age": "30"}"#).0.age, "30");
        assert_eq!(read(r#"{"age": 30.5}"#).0.age, "30.5");

        let (form, mistyped) = read(r#"{"age": null, "phone": null}"#);
        assert_eq!(form.age, "");
        assert_eq!(form.phone, "");
        assert!(mistyped.is_empty());
    }

    #[test]
    fn test_wrong_types_are_reported_per_field() {
        let (form, mistyped) =
            read(r#"{"fullname": "Ada Lovelace", "phone": 1234567890, "age": [30], "terms": "true"}"#);
        assert_eq!(mistyped, vec![Field::Phone, Field::Age, Field::Terms]);
        assert_eq!(form.fullname, "Ada Lovelace");
        assert_eq!(form.phone, "");
        assert!(!form.terms);
    }

    #[test]
    fn test_collect_errors_merges_type_and_rule_failures_in_order() {
        let (form, mistyped) = read(
            r#"{"fullname": "", "email": "a@b", "username": "ab", "password": "x", "phone": 1234567890, "terms": true}"#,
        );
        let errors = collect_errors(&form, &mistyped);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["fullname", "email", "username", "password", "phone"]);
        assert_eq!(errors[4].message, type_message(Field::Phone));
    }

    #[test]
    fn test_endpoint_skips_confirmation() {
        assert!(!ENDPOINT_FIELDS.contains(&Field::Confirm));
        assert_eq!(ENDPOINT_FIELDS.len(), Field::ALL.len() - 1);
    }
}
