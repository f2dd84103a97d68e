use clap::Parser;

use tallymap::config::Config;
use tallymap::core::api::HttpQuantityStore;
use tallymap::core::auth::{AuthSnapshot, LocalAuthStore};
use tallymap::core::{countries, view};

#[derive(Parser)]
#[command(name = "tallymap")]
#[command(about = "Track per-country quantities against a shared backend")]
struct Cli {
    /// Base URL of the quantity backend (overrides TALLYMAP_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Sign in as this user for the session; omit to browse as a guest
    #[arg(long, value_name = "NAME")]
    user: Option<String>,

    /// Print a one-shot quantity summary instead of opening the dashboard
    #[arg(long)]
    summary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "tallymap=debug"
    } else {
        "tallymap=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::from_env();
    if let Some(url) = args.api_url {
        config.api_url = url;
    }

    let auth = match args.user {
        Some(name) => LocalAuthStore::new(AuthSnapshot::signed_in(name)),
        None => LocalAuthStore::default(),
    };

    if args.summary {
        print_summary(&config)
    } else {
        run_app(config, auth)
    }
}

#[cfg(feature = "gui")]
fn run_app(config: Config, auth: LocalAuthStore) -> anyhow::Result<()> {
    tallymap::gui::run(config, Box::new(auth))
}

/// Without the GUI feature the binary only supports the summary mode.
#[cfg(not(feature = "gui"))]
fn run_app(config: Config, _auth: LocalAuthStore) -> anyhow::Result<()> {
    print_summary(&config)
}

fn print_summary(config: &Config) -> anyhow::Result<()> {
    let catalog = countries::load_catalog()?;
    let store = HttpQuantityStore::new(config.api_url.as_str());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let merged = runtime.block_on(view::refresh(&store, &catalog))?;

    println!("=== Country Quantity Summary ===");
    println!("Total quantity: {}", view::total_quantity(&merged));
    match view::max_quantity_country(&merged) {
        Some(leader) => println!("Top country: {} ({})", leader.name, leader.quantity),
        None => println!("No country has a recorded quantity yet."),
    }
    for country in merged.iter().filter(|country| country.quantity > 0) {
        println!("  {} - {}", country.name, country.quantity);
    }

    Ok(())
}
