//! # Seed Data Generator
//!
//! Populates the marketplace database with demo products and accounts for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed with defaults
//! cargo run -p marketplace-db --bin seed
//!
//! # Custom amount and database path
//! cargo run -p marketplace-db --bin seed -- --count 100 --db ./marketplace.db
//! ```
//!
//! ## Generated Data
//! Products across a handful of demo sellers, each with a name, a short
//! description, and a deterministic price. Two accounts are created:
//! `admin` / `admin123` (Admin) and `shopper` / `shopper123` (User).

use std::env;

use marketplace_core::{NewProduct, NewUser, Role};
use marketplace_db::{Store, StoreConfig};
use tracing_subscriber::EnvFilter;

/// Demo sellers and their product lines.
const SELLERS: &[(&str, &[&str])] = &[
    (
        "PhoneStore",
        &[
            "Phone",
            "Phone Pro",
            "Phone Mini",
            "Wireless Earbuds",
            "Phone Case",
            "Screen Protector",
            "Car Charger",
            "Power Bank",
        ],
    ),
    (
        "CompuMart",
        &[
            "Laptop",
            "Gaming Laptop",
            "Mechanical Keyboard",
            "Wireless Mouse",
            "USB-C Hub",
            "External SSD",
            "Webcam",
            "Monitor 27in",
        ],
    ),
    (
        "HomeGoods",
        &[
            "Desk Lamp",
            "Coffee Maker",
            "Electric Kettle",
            "Toaster",
            "Blender",
            "Vacuum Cleaner",
            "Air Purifier",
            "Space Heater",
        ],
    ),
    (
        "FurniturePlus",
        &[
            "Desk",
            "Office Chair",
            "Bookshelf",
            "Standing Desk",
            "Sofa",
            "Coffee Table",
            "Bed Frame",
            "Nightstand",
        ],
    ),
];

/// Deterministic demo price for a product index: $9.99 to $309.99.
fn demo_price(index: usize) -> f64 {
    9.99 + (index % 31) as f64 * 10.0
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 32;
    let mut db_path = String::from("./marketplace.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(32);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Marketplace Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 32)");
                println!("  -d, --db <PATH>    Database file path (default: ./marketplace.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Marketplace Seed Data Generator");
    println!("==================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    // Open the store (creates file and schema if absent)
    let store = Store::new(StoreConfig::new(&db_path)).await?;

    println!("✓ Store opened");

    // Check existing products
    let existing = store.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Demo accounts. The storefront's sign-up flow creates every new
    // account as Admin; the shopper account exists so the privilege check
    // has something to deny.
    if store.users().count().await? == 0 {
        store
            .users()
            .insert(
                &NewUser::new("admin", "admin@marketplace.local", Role::Admin),
                "admin123",
            )
            .await?;
        store
            .users()
            .insert(
                &NewUser::new("shopper", "shopper@marketplace.local", Role::User),
                "shopper123",
            )
            .await?;
        println!("✓ Created accounts: admin / shopper");
    }

    // Generate products
    println!();
    println!("Generating products...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    'outer: for (seller, names) in SELLERS {
        for name in *names {
            if generated >= count {
                break 'outer;
            }

            let product = NewProduct::new(
                *name,
                Some(format!("{} sold by {}", name, seller)),
                demo_price(generated),
                *seller,
                None,
            );
            store.products().insert(&product).await?;
            generated += 1;
        }
    }

    println!(
        "✓ Inserted {} products in {:.2}s",
        generated,
        start.elapsed().as_secs_f64()
    );

    store.close().await;
    Ok(())
}
