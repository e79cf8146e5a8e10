use anyhow::{bail, Context, Result};
use catalog::{Entry, EntryId};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use discovery::{filter, rank, FilterState, PricingTier, SortMode};
use rand::Rng;
use session::{DiscoveryConfig, DiscoveryQuery, DiscoverySession, PageView};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// toolscout - browse and discover AI tools
#[derive(Parser)]
#[command(name = "toolscout")]
#[command(about = "Search, filter and page through a tool directory", long_about = None)]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(short, long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    /// Simulated delay for each "load more", in milliseconds
    #[arg(long, default_value = "800")]
    load_delay_ms: u64,

    /// Entries per page
    #[arg(long, default_value = "20")]
    page_size: usize,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and page through the catalog
    Browse {
        /// Free-text search over name, description and category
        #[arg(long)]
        search: Option<String>,

        /// Category slug, e.g. "developer-tools"
        #[arg(long)]
        category: Option<String>,

        /// Pricing tag: free, paid or freemium (repeatable)
        #[arg(long)]
        pricing: Vec<PricingTier>,

        /// Minimum popularity score
        #[arg(long)]
        min_rating: Option<f64>,

        /// Category tag, matched as a substring (repeatable)
        #[arg(long)]
        tag: Vec<String>,

        /// Only entries added in the last 30 days
        #[arg(long)]
        recent: bool,

        /// Sort order: popularity, alphabetical or newest
        #[arg(long, default_value = "popularity")]
        sort: SortMode,

        /// Number of pages to load
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// Show entries related to one entry
    Recommend {
        /// Entry ID to find related entries for
        #[arg(long)]
        id: EntryId,
    },

    /// Show the product of the day, today's pick and new entries
    Spotlight,

    /// List categories with their slugs and entry counts
    Categories,

    /// Time random queries through filter and rank
    Benchmark {
        /// Number of queries to run
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = DiscoveryConfig::default()
        .with_page_size(cli.page_size)
        .with_load_delay(Duration::from_millis(cli.load_delay_ms));

    let start = Instant::now();
    let session = DiscoverySession::open(&cli.catalog, config)
        .with_context(|| format!("Failed to open catalog {}", cli.catalog.display()))?;
    if !cli.json {
        println!(
            "{} Loaded {} tools in {:?}",
            "✓".green(),
            session.snapshot().len(),
            start.elapsed()
        );
    }

    match cli.command {
        Commands::Browse {
            search,
            category,
            pricing,
            min_rating,
            tag,
            recent,
            sort,
            pages,
        } => {
            let mut filters = FilterState::new().with_recent_only(recent);
            for tier in pricing {
                filters = filters.with_pricing(tier);
            }
            for t in tag {
                filters = filters.with_category_tag(t);
            }
            filters.min_rating = min_rating;

            let query = DiscoveryQuery {
                search: search.unwrap_or_default(),
                category,
                filters,
                sort,
            };
            handle_browse(&session, &query, pages, cli.json).await?
        }
        Commands::Recommend { id } => handle_recommend(&session, id, cli.json)?,
        Commands::Spotlight => handle_spotlight(&session, cli.json)?,
        Commands::Categories => handle_categories(&session, cli.json)?,
        Commands::Benchmark { iterations } => handle_benchmark(&session, iterations)?,
    }

    Ok(())
}

/// Handle the 'browse' command
async fn handle_browse(
    session: &DiscoverySession,
    query: &DiscoveryQuery,
    pages: usize,
    json: bool,
) -> Result<()> {
    let total = session.apply(query, Utc::now()).await;
    info!("{} tools match", total);

    for _ in 1..pages.max(1) {
        if !session.load_more().await {
            break;
        }
    }

    let view = session.view().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_page(&view, query);
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(session: &DiscoverySession, id: EntryId, json: bool) -> Result<()> {
    let related = session
        .recommend_for(id, Utc::now())
        .with_context(|| format!("Cannot recommend for tool {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&related)?);
        return Ok(());
    }

    // recommend_for already resolved the id
    if let Some(reference) = session.snapshot().get(id) {
        println!(
            "{}",
            format!("Related to {} ({}):", reference.name, reference.category)
                .bold()
                .blue()
        );
    }
    if related.is_empty() {
        println!("  {}", "No related tools".dimmed());
    }
    for (i, rec) in related.iter().enumerate() {
        println!(
            "{}. {} [{}] - Score: {:.2}",
            (i + 1).to_string().green(),
            rec.entry.name,
            rec.entry.category,
            rec.score
        );
    }
    Ok(())
}

/// Handle the 'spotlight' command
fn handle_spotlight(session: &DiscoverySession, json: bool) -> Result<()> {
    let spotlight = session.spotlight(Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&spotlight)?);
        return Ok(());
    }

    println!("{}", "Spotlight".bold().blue());
    match spotlight.product_of_the_day {
        Some(entry) => println!("{}Product of the day: {}", "• ".green(), describe(entry)),
        None => println!("{}Product of the day: -", "• ".green()),
    }
    match spotlight.daily_pick {
        Some(entry) => println!("{}Today's pick: {}", "• ".green(), describe(entry)),
        None => println!("{}Today's pick: -", "• ".green()),
    }
    println!(
        "{}New this month: {}",
        "• ".cyan(),
        spotlight.new_this_month.len()
    );
    for entry in &spotlight.new_this_month {
        println!("  - {}", describe(entry));
    }
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(session: &DiscoverySession, json: bool) -> Result<()> {
    let categories = session.snapshot().categories();

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    println!("{}", "Categories:".bold().blue());
    for category in &categories {
        println!(
            "  {:<24} {:<24} {}",
            category.name,
            category.slug.dimmed(),
            category.entry_count
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(session: &DiscoverySession, iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("Benchmark needs at least one iteration");
    }

    let entries = session.snapshot().entries();
    let slugs: Vec<String> = session
        .snapshot()
        .categories()
        .into_iter()
        .map(|c| c.slug)
        .collect();
    let words = ["ai", "video", "free", "code", "writing", "image", ""];

    let mut rng = rand::rng();
    let mut timings = Vec::with_capacity(iterations);
    let total_start = Instant::now();

    for _ in 0..iterations {
        let search = words[rng.random_range(0..words.len())];
        let category = if !slugs.is_empty() && rng.random_bool(0.3) {
            Some(slugs[rng.random_range(0..slugs.len())].as_str())
        } else {
            None
        };
        let mut state = FilterState::new().with_recent_only(rng.random_bool(0.2));
        if rng.random_bool(0.4) {
            state = state.with_pricing(PricingTier::ALL[rng.random_range(0..PricingTier::ALL.len())]);
        }
        if rng.random_bool(0.3) {
            state = state.with_min_rating(rng.random_range(0.0..10.0));
        }
        let mode = SortMode::ALL[rng.random_range(0..SortMode::ALL.len())];

        let start = Instant::now();
        let ranked = rank(filter(entries, search, category, &state, Utc::now()), mode);
        std::hint::black_box(ranked);
        timings.push(start.elapsed());
    }

    let total_time = total_start.elapsed();
    let busy: Duration = timings.iter().sum();
    let avg_latency = busy / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];

    println!("{}", "Benchmark results:".bold().blue());
    println!("Queries: {}", iterations);
    println!("Catalog size: {}", entries.len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!(
        "Throughput: {:.2} queries/second",
        iterations as f64 / total_time.as_secs_f64()
    );

    Ok(())
}

fn describe(entry: &Entry) -> String {
    format!(
        "{} [{}] {:.1}",
        entry.name,
        entry.category,
        entry.popularity()
    )
}

/// Helper function to format and print a page of results
fn print_page(view: &PageView, query: &DiscoveryQuery) {
    let mut header = format!("{} tools", view.total);
    if query.is_filtered() {
        header.push_str(&format!(
            " (filtered, {} advanced filters)",
            query.active_filter_count()
        ));
    }
    header.push_str(&format!(", sorted by {}", query.sort));
    println!("{}", header.bold().blue());

    for (i, entry) in view.entries.iter().enumerate() {
        let marker = if entry.featured { "★".yellow() } else { " ".normal() };
        println!(
            "{:>3}. {} {} [{}] {:.1}",
            (i + 1).to_string().green(),
            marker,
            entry.name.bold(),
            entry.category,
            entry.popularity()
        );
        if !entry.description.is_empty() {
            println!("       {}", entry.description.dimmed());
        }
    }

    let footer = format!(
        "Showing {} of {} (page {})",
        view.entries.len(),
        view.total,
        view.current_page
    );
    if view.has_more {
        println!("{} - use --pages {} for more", footer, view.current_page + 1);
    } else {
        println!("{}", footer);
    }
}
