pub mod controller;
pub mod render;
pub mod rules;

pub use crate::domain::model::{Field, FieldError, SignupForm, SignupPayload};
pub use crate::domain::ports::SignupGateway;
pub use crate::utils::error::Result;
