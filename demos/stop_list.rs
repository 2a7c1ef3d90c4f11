use smspartner::{ClientConfig, RawPhoneNumber, SmsPartnerClient};
use tracing_subscriber::EnvFilter;

/// List the stop list; with `SMSPARTNER_STOP_ADD` set, add that number first.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = SmsPartnerClient::new(ClientConfig::from_env())?;

    if let Ok(raw) = std::env::var("SMSPARTNER_STOP_ADD") {
        let added = client.add_to_stops(&RawPhoneNumber::new(raw)?).await?;
        println!("added: {}, {:?}", added.success, added.message);
    }

    let response = client.list_stops().await?;
    println!("{} stopped number(s)", response.total.unwrap_or(0));
    for entry in &response.entries {
        println!(
            "{:?} {} {}",
            entry.id,
            entry.phone_number.as_deref().unwrap_or("?"),
            entry.created_at.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
