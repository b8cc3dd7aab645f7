use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sale_core::{CustomerId, PriceResolver, ProductId};
use sale_http::{HttpPriceResolver, HttpResolverConfig, StaticTokenProvider};

/// One-shot price lookup against a live pricing backend.
///
/// Resolves a contract price when --customer is given, otherwise the
/// catalog price. Prints the resolved amount with two decimals.
#[derive(Parser, Debug)]
#[command(name = "price-lookup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL the pricing endpoints hang off, e.g. https://erp.example/pricing
    #[arg(short, long)]
    base_url: String,

    /// Product identifier to price
    #[arg(short, long)]
    product: String,

    /// Customer identifier, for a contract price
    #[arg(short, long)]
    customer: Option<String>,

    /// Request-forgery token for the session
    #[arg(short, long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let tokens = match args.token {
        Some(token) => StaticTokenProvider::new(token),
        None => StaticTokenProvider::none(),
    };
    let resolver = HttpPriceResolver::new(
        HttpResolverConfig::for_base(&args.base_url),
        Arc::new(tokens),
    );

    let product_id = ProductId::new(args.product);
    let quote = match &args.customer {
        Some(customer) => {
            let customer_id = CustomerId::new(customer.clone());
            println!(
                "Looking up contract price for customer {customer_id}, product {product_id}..."
            );
            resolver.contract_price(&customer_id, &product_id).await
        }
        None => {
            println!("Looking up catalog price for product {product_id}...");
            resolver.catalog_price(&product_id).await
        }
    };

    let price = quote.context("price lookup did not produce a usable quote")?;
    println!("{price:.2}");

    Ok(())
}
