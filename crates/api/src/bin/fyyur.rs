//! Fyyur: venue, artist and show listings.

use marquee_api::server::{self, Service};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(Service::Fyyur).await
}
