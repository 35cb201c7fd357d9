//! Field rule table shared by the form controller and the signup endpoint.
//!
//! Each field owns an ordered list of checks. The first failing check decides the
//! message, so a field never reports more than one problem at a time. Optional fields
//! short-circuit to valid when left empty.

use crate::domain::model::{Field, FieldError, SignupForm};
use regex::Regex;
use std::sync::LazyLock;

static FULLNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{3,80}$").expect("fullname pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]{3,20}$").expect("username pattern"));
static UPPERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern"));
// ASCII only, `\d` would also accept other Unicode digits.
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("digit pattern"));
static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[!@#$%^&*()_\-+=\[\]{};:"\\|,.<>/?]"#).expect("symbol pattern")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MIN_AGE: i64 = 13;
pub const MAX_AGE: i64 = 120;

#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Non-empty text, or a checked box.
    Required,
    Pattern(&'static LazyLock<Regex>),
    MinChars(usize),
    /// Exact equality with the password as typed.
    MatchesPassword,
    IntegerInRange { min: i64, max: i64 },
    Accepted,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

#[derive(Debug)]
pub struct FieldRules {
    pub field: Field,
    pub optional: bool,
    pub rules: &'static [Rule],
}

const fn rule(check: Check, message: &'static str) -> Rule {
    Rule { check, message }
}

pub static RULE_TABLE: [FieldRules; 8] = [
    FieldRules {
        field: Field::Fullname,
        optional: false,
        rules: &[
            rule(Check::Required, "Full name is required."),
            rule(
                Check::Pattern(&FULLNAME_RE),
                "Use only letters and spaces (3-80 chars).",
            ),
        ],
    },
    FieldRules {
        field: Field::Email,
        optional: false,
        rules: &[
            rule(Check::Required, "Email is required."),
            rule(Check::Pattern(&EMAIL_RE), "Enter a valid email."),
        ],
    },
    FieldRules {
        field: Field::Username,
        optional: false,
        rules: &[
            rule(Check::Required, "Username required."),
            rule(
                Check::Pattern(&USERNAME_RE),
                "3-20 chars: letters, numbers, . _ -",
            ),
        ],
    },
    FieldRules {
        field: Field::Password,
        optional: false,
        rules: &[
            rule(Check::Required, "Password required."),
            rule(
                Check::MinChars(MIN_PASSWORD_CHARS),
                "Password must be at least 8 characters.",
            ),
            rule(
                Check::Pattern(&UPPERCASE_RE),
                "Include at least one uppercase letter.",
            ),
            rule(Check::Pattern(&DIGIT_RE), "Include at least one number."),
            rule(
                Check::Pattern(&SYMBOL_RE),
                "Include at least one special character.",
            ),
        ],
    },
    FieldRules {
        field: Field::Confirm,
        optional: false,
        rules: &[
            rule(Check::Required, "Please confirm your password."),
            rule(Check::MatchesPassword, "Passwords do not match."),
        ],
    },
    FieldRules {
        field: Field::Phone,
        optional: true,
        rules: &[rule(Check::Pattern(&PHONE_RE), "Phone must be 10 digits.")],
    },
    FieldRules {
        field: Field::Age,
        optional: true,
        rules: &[rule(
            Check::IntegerInRange {
                min: MIN_AGE,
                max: MAX_AGE,
            },
            "Enter a valid age (13-120).",
        )],
    },
    FieldRules {
        field: Field::Terms,
        optional: false,
        rules: &[rule(Check::Accepted, "You must accept terms.")],
    },
];

/// What a validator receives for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Checked(bool),
}

impl FieldValue<'_> {
    fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(v) => v.is_empty(),
            FieldValue::Checked(checked) => !checked,
        }
    }
}

pub fn rules_for(field: Field) -> &'static FieldRules {
    &RULE_TABLE[field.index()]
}

const RADIX_PREFIXES: [(&str, u32); 6] = [
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];

/// Numeric text that denotes a whole number. Accepts forms like `"30"`, `"30.0"`, `"3e1"`
/// and unsigned radix literals such as `"0x1E"` or `"0b11110"`.
fn parse_integer(v: &str) -> Option<i64> {
    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = v.strip_prefix(prefix) {
            // from_str_radix would also take a sign after the prefix
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return i64::from_str_radix(digits, radix).ok();
        }
    }
    let n: f64 = v.parse().ok()?;
    if !n.is_finite() || n.fract() != 0.0 {
        return None;
    }
    Some(n as i64)
}

fn passes(check: Check, value: FieldValue<'_>, password: &str) -> bool {
    match (check, value) {
        (Check::Required, v) => !v.is_empty(),
        (Check::Accepted, FieldValue::Checked(checked)) => checked,
        (Check::Pattern(re), FieldValue::Text(v)) => re.is_match(v),
        (Check::MinChars(min), FieldValue::Text(v)) => v.chars().count() >= min,
        (Check::MatchesPassword, FieldValue::Text(v)) => v == password,
        (Check::IntegerInRange { min, max }, FieldValue::Text(v)) => {
            parse_integer(v).is_some_and(|n| (min..=max).contains(&n))
        }
        // a text check never passes a checkbox value and vice versa
        _ => false,
    }
}

/// Runs a field's checks in order and returns the first failing message.
///
/// `password` is only consulted by the confirm field.
pub fn evaluate(field: Field, value: FieldValue<'_>, password: &str) -> Option<&'static str> {
    let rules = rules_for(field);
    if rules.optional && value.is_empty() {
        return None;
    }
    rules
        .rules
        .iter()
        .find(|r| !passes(r.check, value, password))
        .map(|r| r.message)
}

pub fn validate_fullname(v: &str) -> Option<&'static str> {
    evaluate(Field::Fullname, FieldValue::Text(v), "")
}

pub fn validate_email(v: &str) -> Option<&'static str> {
    evaluate(Field::Email, FieldValue::Text(v), "")
}

pub fn validate_username(v: &str) -> Option<&'static str> {
    evaluate(Field::Username, FieldValue::Text(v), "")
}

pub fn validate_password(v: &str) -> Option<&'static str> {
    evaluate(Field::Password, FieldValue::Text(v), "")
}

pub fn validate_confirm(password: &str, confirm: &str) -> Option<&'static str> {
    evaluate(Field::Confirm, FieldValue::Text(confirm), password)
}

pub fn validate_phone(v: &str) -> Option<&'static str> {
    evaluate(Field::Phone, FieldValue::Text(v), "")
}

pub fn validate_age(v: &str) -> Option<&'static str> {
    evaluate(Field::Age, FieldValue::Text(v), "")
}

pub fn validate_terms(checked: bool) -> Option<&'static str> {
    evaluate(Field::Terms, FieldValue::Checked(checked), "")
}

/// Validates one field of a form, reading the value the way the field is displayed.
pub fn validate_form_field(form: &SignupForm, field: Field) -> Option<&'static str> {
    let value = match form.validated_text(field) {
        Some(text) => FieldValue::Text(text),
        None => FieldValue::Checked(form.terms),
    };
    evaluate(field, value, &form.password)
}

/// Gathers every failing field among `fields`, keeping their order.
pub fn validate_fields(form: &SignupForm, fields: &[Field]) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|&field| validate_form_field(form, field).map(|msg| FieldError::new(field, msg)))
        .collect()
}
