use anyhow::Result;
use bizbot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
