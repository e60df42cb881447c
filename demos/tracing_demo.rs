//! Demonstrates tracing integration with effect hooks
//!
//! Run with: cargo run --example tracing_demo --features tracing

use ripple::effect::tracing::{run_traced, traced};

#[derive(Debug)]
struct Invoice {
    number: u32,
    total_cents: u64,
}

fn load_invoice(number: u32) -> Result<Invoice, String> {
    if number % 2 == 0 {
        Ok(Invoice {
            number,
            total_cents: 1299 * u64::from(number),
        })
    } else {
        Err(format!("invoice {} is archived", number))
    }
}

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    // One-off traced computation
    let sum = run_traced("sum", || Ok::<_, String>(19 + 23));
    tracing::info!("sum = {:?}", sum);

    // A reusable wrapper, shared by every invoice lookup
    let invoices = traced("load_invoice");
    for number in 1..=4 {
        match invoices.run(|| load_invoice(number)) {
            Ok(invoice) => tracing::info!(
                number = invoice.number,
                total_cents = invoice.total_cents,
                "invoice ready"
            ),
            Err(e) => tracing::error!("Lookup failed: {}", e),
        }
    }
}
