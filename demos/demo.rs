use postmark_client::{Client, Email, QueryOptions};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("postmark_client=debug")),
        )
        .init();

    let server_token = env::var("POSTMARK_SERVER_TOKEN")?;
    let account_token = env::var("POSTMARK_ACCOUNT_TOKEN").unwrap_or_default();
    let client = Client::new(server_token, account_token)?;

    let server = client.get_current_server().await?;
    println!("Server: {} (#{})", server.name, server.id);

    let stats = client.get_delivery_stats().await?;
    println!("Inactive addresses: {}", stats.inactive_mails);
    for bounce_type in &stats.bounces {
        println!("  {:<20} {}", bounce_type.name, bounce_type.count);
    }

    let bounces = client.get_bounces(10, 0, &QueryOptions::new()).await?;
    println!("Bounces ({} total):", bounces.total_count);
    for bounce in &bounces.bounces {
        println!("  {} {} {}", bounce.id, bounce.email, bounce.kind);
    }

    if let (Ok(from), Ok(to)) = (env::var("POSTMARK_FROM"), env::var("POSTMARK_TO")) {
        let sent = client
            .send_email(&Email {
                from,
                to,
                subject: "Postmark client demo".into(),
                text_body: "Hello from postmark-client.".into(),
                ..Default::default()
            })
            .await?;
        println!("Sent {} at {:?}", sent.message_id, sent.submitted_at);
    }

    Ok(())
}
