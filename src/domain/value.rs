use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Brevo API key, sent as the `api-key` request header.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by Brevo (`api-key`).
    pub const HEADER: &'static str = "api-key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// An email address, used both as a recipient and as a sender identity.
///
/// Invariant: non-empty after trimming, with a `@` separating a non-empty
/// local part and domain. Full RFC 5321 validation is left to the provider.
pub struct EmailAddress(String);

impl EmailAddress {
    /// JSON field name used by Brevo in sender/recipient objects (`email`).
    pub const FIELD: &'static str = "email";

    /// Create a validated [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(ValidationError::InvalidEmailAddress {
                input: trimmed.to_owned(),
            }),
        }
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A display name for a sender identity (email `sender.name` or SMS sender).
///
/// Invariant: non-empty after trimming. Brevo additionally caps SMS sender
/// names at 11 alphanumeric characters server-side; that limit is not
/// enforced here.
pub struct SenderName(String);

impl SenderName {
    /// JSON field name used by Brevo in the email sender object (`name`).
    pub const FIELD: &'static str = "name";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// An email subject line.
///
/// Invariant: must contain at least one non-whitespace character. The value
/// is preserved as provided (no trimming).
pub struct Subject(String);

impl Subject {
    /// JSON field name used by Brevo (`subject`).
    pub const FIELD: &'static str = "subject";

    /// Create a validated [`Subject`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the subject as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// The HTML body of an email.
///
/// Invariant: must contain at least one non-whitespace character. The value
/// is preserved as provided (no trimming).
pub struct HtmlBody(String);

impl HtmlBody {
    /// JSON field name used by Brevo (`htmlContent`).
    pub const FIELD: &'static str = "htmlContent";

    /// Create a validated [`HtmlBody`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the body as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// An SMS recipient phone number, passed through to Brevo as-is.
///
/// Invariant: non-empty after trimming. Brevo accepts international formats
/// with or without a leading `+`; no E.164 parsing is done client-side.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// JSON field name used by Brevo (`recipient`).
    pub const FIELD: &'static str = "recipient";

    /// Create a validated [`PhoneNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// The text content of an SMS.
///
/// Invariant: must contain at least one non-whitespace character. The value
/// is preserved as provided (no trimming).
pub struct SmsText(String);

impl SmsText {
    /// JSON field name used by Brevo (`content`).
    pub const FIELD: &'static str = "content";

    /// Create a validated [`SmsText`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
