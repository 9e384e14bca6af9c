use crate::domain::validation::ValidationError;
use crate::domain::value::{EmailAddress, HtmlBody, PhoneNumber, SmsText, Subject};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A transactional email to send through `smtp/email`.
pub struct SendEmail {
    to: EmailAddress,
    subject: Subject,
    html: HtmlBody,
}

impl SendEmail {
    /// Assemble a request from already-validated parts.
    pub fn new(to: EmailAddress, subject: Subject, html: HtmlBody) -> Self {
        Self { to, subject, html }
    }

    /// Validate raw strings and assemble a request in one step.
    pub fn from_parts(
        to: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            to: EmailAddress::new(to)?,
            subject: Subject::new(subject)?,
            html: HtmlBody::new(html)?,
        })
    }

    pub fn to(&self) -> &EmailAddress {
        &self.to
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn html(&self) -> &HtmlBody {
        &self.html
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A transactional SMS to send through `transactionalSMS/sms`.
pub struct SendSms {
    to: PhoneNumber,
    text: SmsText,
}

impl SendSms {
    /// Assemble a request from already-validated parts.
    pub fn new(to: PhoneNumber, text: SmsText) -> Self {
        Self { to, text }
    }

    /// Validate raw strings and assemble a request in one step.
    pub fn from_parts(
        to: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            to: PhoneNumber::new(to)?,
            text: SmsText::new(text)?,
        })
    }

    pub fn to(&self) -> &PhoneNumber {
        &self.to
    }

    pub fn text(&self) -> &SmsText {
        &self.text
    }
}
