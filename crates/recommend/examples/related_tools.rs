//! Example: Recommend tools related to a catalog entry
//!
//! Run with: cargo run --package recommend --example related_tools -- 12

use catalog::CatalogSnapshot;
use chrono::{Duration, Utc};
use recommend::{RelatedEntries, Spotlight};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .init();

    let reference_id: u64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(1);

    println!("Loading catalog...");
    let snapshot = CatalogSnapshot::load_from_file(Path::new("data/catalog.json"))?;
    println!("Loaded {} entries\n", snapshot.len());

    let now = Utc::now();
    let Some(reference) = snapshot.get(reference_id) else {
        println!("No entry with id {reference_id}");
        return Ok(());
    };

    println!("Related to: {} ({})", reference.name, reference.category);
    let engine = RelatedEntries::new();
    for (rank, rec) in engine
        .recommend(Some(reference), snapshot.entries(), now)
        .iter()
        .enumerate()
    {
        println!(
            "  {}. {} ({}) - score {:.2}",
            rank + 1,
            rec.entry.name,
            rec.entry.category,
            rec.score
        );
    }

    let spotlight = Spotlight::compute(snapshot.entries(), now, Duration::days(30));
    println!();
    if let Some(entry) = spotlight.product_of_the_day {
        println!("Product of the day: {}", entry.name);
    }
    if let Some(entry) = spotlight.daily_pick {
        println!("Today's pick: {}", entry.name);
    }
    println!("New this month: {}", spotlight.new_this_month.len());

    Ok(())
}
