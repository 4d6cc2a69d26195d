/*
 * Responsibility
 * - tokio runtime entry point
 * - calls app::run() and nothing else
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    library_api::app::run().await
}
