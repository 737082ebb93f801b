use anyhow::Result;
use verifly::{AccountStats, Classification, Source};

use crate::args::OutputFormat;

pub fn print_classification(c: &Classification, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => print_human(c),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(c)?),
    }
    Ok(())
}

fn print_human(c: &Classification) {
    println!("Email:  {}", c.email);
    println!("Status: {}", c.status);
    if c.disposable {
        println!("! Disposable email detected");
    }
    if c.role {
        println!("! Role account (info@, admin@, etc.)");
    }
    if let Some(detail) = &c.detail {
        println!("Detail: {detail}");
    }
    if c.source == Source::Offline {
        println!("(Offline validation - use API for full check)");
    }
}

pub fn print_key_tip() {
    println!();
    println!("Tip: set an API key for full verification:");
    println!("  verifly config --key YOUR_API_KEY");
}

pub fn print_stats(stats: &AccountStats) {
    println!("Account Statistics:");
    println!("  Used this month: {}", stats.used);
    println!(
        "  Remaining: {}",
        stats
            .remaining
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    );
    println!("  Plan: {}", stats.plan.as_deref().unwrap_or("Free"));
}
