//! Typed Rust client for the Brevo transactional email/SMS HTTP API.
//!
//! The design follows a small layered shape: a domain layer of strong types,
//! a transport layer for the provider's wire format, and a client layer
//! orchestrating requests. Every operation is a single authenticated POST;
//! the result pairs the raw HTTP response with a loggable projection of
//! `{status, status_text, data}`.
//!
//! ```rust,no_run
//! use brevo::{ApiKey, BrevoClient, SendEmail};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), brevo::BrevoError> {
//!     let client = BrevoClient::new(ApiKey::new("xkeysib-...")?);
//!     let request = SendEmail::from_parts("a@b.com", "Hello", "<p>Hi!</p>")?;
//!     let response = client.send_email(request).await?;
//!     println!("{}", response.loggable.status);
//!     Ok(())
//! }
//! ```
//!
//! For tests, build the client with `.mock(true)`: calls return a canned 200
//! envelope and never touch the network.
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{BrevoClient, BrevoClientBuilder, BrevoError};
pub use domain::{
    ApiKey, EmailAddress, HtmlBody, LoggableResponse, PhoneNumber, RawResponse, ResponseEnvelope,
    SendEmail, SendSms, SenderName, SmsText, Subject, ValidationError,
};
