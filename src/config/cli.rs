use crate::config::form_file::FormFile;
use crate::domain::model::AgeInput;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/api/signup";

#[derive(Debug, Clone, Parser)]
#[command(name = "signup-form")]
#[command(about = "Signup validation endpoint")]
pub struct ServerConfig {
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "signup_client")]
#[command(about = "Fill in the signup form and submit it")]
pub struct ClientConfig {
    #[arg(long, env = "SIGNUP_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "TOML file with form values")]
    pub form: Option<PathBuf>,

    #[arg(long)]
    pub fullname: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long = "confirm-password")]
    pub confirm: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub age: Option<String>,

    #[arg(long, help = "Tick the terms checkbox")]
    pub accept_terms: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ClientConfig {
    /// Values given as flags, layered over the optional form file.
    pub fn form_values(&self) -> Result<FormFile> {
        let base = match &self.form {
            Some(path) => FormFile::from_file(path)?,
            None => FormFile::default(),
        };
        let flags = FormFile {
            fullname: self.fullname.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            confirm: self.confirm.clone(),
            phone: self.phone.clone(),
            age: self.age.clone().map(AgeInput::Text),
            terms: self.accept_terms.then_some(true),
        };
        Ok(base.merge(flags))
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::parse_from(["signup-form"]);
        // PORT may be set in the environment running the tests
        if std::env::var("PORT").is_err() {
            assert_eq!(config.port, 4000);
        }
        assert!(!config.verbose);
    }

    #[test]
    fn test_server_rejects_port_zero() {
        let config = ServerConfig::parse_from(["signup-form", "--port", "0", "--host", "127.0.0.1"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_flags_override_form_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "fullname = \"Ada Lovelace\"\nemail = \"old@example.com\"").unwrap();

        let config = ClientConfig::parse_from([
            "signup_client",
            "--endpoint",
            "http://localhost:4000/api/signup",
            "--form",
            file.path().to_str().unwrap(),
            "--email",
            "ada@example.com",
            "--accept-terms",
        ]);
        assert!(config.validate().is_ok());

        let values = config.form_values().unwrap();
        assert_eq!(values.fullname.as_deref(), Some("Ada Lovelace"));
        assert_eq!(values.email.as_deref(), Some("ada@example.com"));
        assert_eq!(values.terms, Some(true));
    }

    #[test]
    fn test_client_rejects_bad_endpoint() {
        let config = ClientConfig::parse_from(["signup_client", "--endpoint", "not a url"]);
        assert!(config.validate().is_err());
    }
}
