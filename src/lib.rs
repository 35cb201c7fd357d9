pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{ClientConfig, ServerConfig};

pub use crate::adapters::HttpSignupGateway;
pub use config::FormFile;
pub use crate::core::controller::{FormController, FormEvent, FormState, SubmitOutcome};
pub use domain::model::{Field, FieldError, SignupForm, SignupPayload};
pub use utils::error::{Result, SignupError};
