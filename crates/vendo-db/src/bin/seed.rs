//! # Seed Data Generator
//!
//! Populates the database with development data: one demo customer and a
//! small product catalog. Safe to run repeatedly; existing rows are kept.
//!
//! ## Usage
//! ```bash
//! cargo run -p vendo-db --bin seed
//!
//! # Specify database path
//! cargo run -p vendo-db --bin seed -- --db ./data/vendo.db
//! ```

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use vendo_core::{NewCustomer, NewProduct};
use vendo_db::{Database, DbConfig};

const DEFAULT_DB_PATH: &str = "./data/vendo.db";

/// (name, price_cents, quantity)
const PRODUCTS: &[(&str, i64, i64)] = &[
    ("Mechanical Keyboard", 12900, 25),
    ("Wireless Mouse", 4900, 40),
    ("27\" Monitor", 32900, 10),
    ("USB-C Hub", 5900, 30),
    ("Laptop Stand", 3900, 15),
    ("Webcam 1080p", 8900, 20),
    ("Noise-Cancelling Headphones", 24900, 12),
    ("Desk Mat", 1900, 50),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db_path = parse_db_path().unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    info!(path = %db_path, "Seeding database");

    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = Database::new(DbConfig::new(&db_path)).await?;

    let customers = db.customers();
    let demo_email = "demo@vendo.dev";
    if customers.get_by_email(demo_email).await?.is_none() {
        let customer = customers
            .insert(NewCustomer {
                name: "Demo Customer".to_string(),
                email: demo_email.to_string(),
            })
            .await?;
        info!(customer_id = %customer.id, "Seeded demo customer");
    }

    let products = db.products();
    let mut created = 0;
    for &(name, price_cents, quantity) in PRODUCTS {
        if products.get_by_name(name).await?.is_none() {
            products
                .insert(NewProduct {
                    name: name.to_string(),
                    price_cents,
                    quantity,
                })
                .await?;
            created += 1;
        }
    }

    let total = products.count().await?;
    info!(created, total, "Seed complete");

    Ok(())
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
