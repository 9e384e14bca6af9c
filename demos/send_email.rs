use std::io;

use brevo::{ApiKey, BrevoClient, SendEmail};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("BREVO_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BREVO_API_KEY environment variable is required",
        )
    })?;
    let to = std::env::var("BREVO_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BREVO_TO environment variable is required",
        )
    })?;
    let subject =
        std::env::var("BREVO_SUBJECT").unwrap_or_else(|_| "Hello from the brevo demo".to_owned());
    let html = std::env::var("BREVO_HTML")
        .unwrap_or_else(|_| "<p>Hello from the brevo demo.</p>".to_owned());

    let client = BrevoClient::new(ApiKey::new(api_key)?);
    let request = SendEmail::from_parts(to, subject, html)?;

    let response = client.send_email(request).await?;
    println!(
        "status: {} {}, data: {}",
        response.loggable.status, response.loggable.status_text, response.loggable.data
    );

    Ok(())
}
