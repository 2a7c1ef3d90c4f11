use std::io;

use smspartner::{ClientConfig, MessageId, SmsPartnerClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let message_id: u64 = std::env::var("SMSPARTNER_MESSAGE_ID")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "SMSPARTNER_MESSAGE_ID environment variable must be a message id",
            )
        })?;

    let client = SmsPartnerClient::new(ClientConfig::from_env())?;
    let response = client.bulk_sms_status(MessageId::new(message_id)).await?;

    for status in &response.statuses {
        println!(
            "{}: {} (stop: {})",
            status.phone_number.as_deref().unwrap_or("?"),
            status.status.as_deref().unwrap_or("unknown"),
            status.stop_sms
        );
    }

    Ok(())
}
