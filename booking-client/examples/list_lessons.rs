//! Fetch and print the lesson catalog from a running backend.
//!
//! Usage: `cargo run --example list_lessons -- http://localhost:3000`

use booking_client::{ClientConfig, LessonsApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000".to_string());

    let client = ClientConfig::new(base_url).with_timeout(10).build_http_client();
    let lessons = client.fetch_lessons().await?;

    for lesson in &lessons {
        println!(
            "#{} {} ({}) @ {} - {:.2}, {} spaces left",
            lesson.id, lesson.topic, lesson.subject, lesson.location, lesson.price, lesson.space
        );
    }

    Ok(())
}
