//! Trivia: JSON question bank and quiz API.

use marquee_api::server::{self, Service};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(Service::Trivia).await
}
