use smspartner::{ClientConfig, SmsPartnerClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = SmsPartnerClient::new(ClientConfig::from_env())?;
    let response = client.check_credits().await?;

    if let Some(user) = &response.user {
        println!("account: {}", user.username);
    }
    if let Some(credits) = &response.credits {
        println!(
            "sms credits: {:?}, low cost: {:?}, balance: {:?} {:?}",
            credits.credit_sms, credits.credit_sms_low_cost, credits.solde, credits.currency
        );
    }

    Ok(())
}
