use catalog::CatalogSnapshot;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/catalog.json");

    println!("Loading tool catalog...\n");

    let start = Instant::now();
    let snapshot = CatalogSnapshot::load_from_file(path)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Entries: {}", snapshot.len());
    println!("Featured: {}", snapshot.entries().iter().filter(|e| e.featured).count());
    println!("Undated: {}", snapshot.entries().iter().filter(|e| e.created_at.is_none()).count());

    println!("\nCategories:");
    for category in snapshot.categories() {
        println!("  {:<24} {:<24} {}", category.name, category.slug, category.entry_count);
    }
}
