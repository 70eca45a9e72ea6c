//! Quote request model and the validation rules shared with the quote service.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Characters JavaScript's `\s` matches, as a regex class body.
const JS_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

lazy_static! {
    static ref EMAIL_PATTERN: Regex = {
        let part = format!("[^@{JS_WHITESPACE_CLASS}]+");
        Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
    };
}

/// Whether JavaScript treats `c` as whitespace (`trim`, `\s`).
///
/// Unicode `White_Space` plus U+FEFF, without U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// `value` trimmed the way `String.prototype.trim` trims it.
pub fn js_trim(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// Length of a field value as the browser and the quote service count it.
///
/// Both sides measure JavaScript string length, i.e. UTF-16 code units.
pub fn character_count(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whether `email` has the `local@domain.tld` shape the service accepts.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// A field of the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    /// Id of the input element and key in the submitted payload.
    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    /// Id of the element that displays this field's validation message.
    pub fn error_slot_id(self) -> String {
        format!("{}Error", self.id())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    FirstNameRequired,
    EmailRequired,
    EmailInvalid,
    MessageTooLong { max: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::FirstNameRequired => f.write_str("First name is required"),
            FieldError::EmailRequired => f.write_str("Email address is required"),
            FieldError::EmailInvalid => f.write_str("Please enter a valid email address"),
            FieldError::MessageTooLong { max } => {
                write!(f, "Message must be {max} characters or less")
            }
        }
    }
}

/// Every violation found in one draft, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(Field, FieldError)>,
}

impl ValidationErrors {
    fn push(&mut self, field: Field, error: FieldError) {
        self.errors.push((field, error));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error reported for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, error)| error)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Limits applied while validating a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteLimits {
    pub message_max_length: usize,
}

impl Default for QuoteLimits {
    fn default() -> Self {
        Self {
            message_max_length: 500,
        }
    }
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl QuoteDraft {
    /// Trim and check every field, collecting all violations.
    pub fn validate(&self, limits: QuoteLimits) -> Result<QuoteRequest, ValidationErrors> {
        let first_name = js_trim(&self.first_name);
        let email = js_trim(&self.email);
        let message = js_trim(&self.message);

        let mut errors = ValidationErrors::default();

        if first_name.is_empty() {
            errors.push(Field::FirstName, FieldError::FirstNameRequired);
        }

        if email.is_empty() {
            errors.push(Field::Email, FieldError::EmailRequired);
        } else if !is_valid_email(email) {
            errors.push(Field::Email, FieldError::EmailInvalid);
        }

        if character_count(message) > limits.message_max_length {
            errors.push(
                Field::Message,
                FieldError::MessageTooLong {
                    max: limits.message_max_length,
                },
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(QuoteRequest {
            first_name: first_name.to_owned(),
            last_name: non_empty(&self.last_name),
            email: email.to_owned(),
            phone: non_empty(&self.phone),
            service: non_empty(&self.service),
            message: non_empty(message),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = js_trim(value);
    (!value.is_empty()).then(|| value.to_owned())
}

/// The payload posted to the quote service.
///
/// Optional fields left blank are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QuoteRequest {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
