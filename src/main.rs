use anyhow::Context;
use cart_discount_rust::config::Config;
use cart_discount_rust::discount::read_request;
use cart_discount_rust::output::format_totals;
use cart_discount_rust::pipeline;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the totals
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let request = read_request(std::io::stdin().lock()).context("reading discount request")?;
    let totals = pipeline::run(&request, &config)
        .await
        .with_context(|| format!("pricing cart {}", request.id))?;

    println!("{}", format_totals(&totals)?);
    Ok(())
}
