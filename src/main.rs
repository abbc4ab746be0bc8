use anyhow::{Context, Result};
use caribbean_realty::config::Config;
use caribbean_realty::content::ContentStore;
use caribbean_realty::models::{Listing, PropertyType};
use caribbean_realty::repository::{ListingRepository, LocalListingStore, RestListingRepository};
use caribbean_realty::search::{filter_listings, ListingFilter, SiteSearch, SortOrder};
use caribbean_realty::session::AdminSession;
use caribbean_realty::storage::{FileStore, KeyValueStore};
use caribbean_realty::submissions::SubmissionStore;
use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "realty", about = "Caribbean Realty site content and search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search listings, pages and services
    Search { query: Vec<String> },
    /// List properties with optional filters
    Listings {
        #[arg(long = "type")]
        property_type: Option<String>,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        min_beds: Option<f64>,
        #[arg(long, value_enum, default_value_t = SortArg::Newest)]
        sort: SortArg,
    },
    /// Read or edit page copy
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Show contact form submissions
    Submissions,
    /// Admin session flag
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum ContentAction {
    /// Print the effective content
    Show,
    /// Print one field, falling back to the default when blank
    Get {
        page: String,
        /// Section name; use "" for service pages
        section: String,
        field: String,
    },
    /// Change one field
    Set {
        page: String,
        section: String,
        field: String,
        value: String,
    },
    /// Drop all edits
    Reset,
    /// Print the shipped defaults
    Export,
}

#[derive(Subcommand)]
enum SessionAction {
    Status,
    Start,
    End,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Newest,
    PriceAsc,
    PriceDesc,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Newest => SortOrder::Newest,
            SortArg::PriceAsc => SortOrder::PriceLowToHigh,
            SortArg::PriceDesc => SortOrder::PriceHighToLow,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let storage: Arc<dyn KeyValueStore> = Arc::new(
        FileStore::open(&config.data_file)
            .with_context(|| format!("Failed to open {}", config.data_file.display()))?,
    );

    match cli.command {
        Command::Search { query } => {
            let repository = repository(&config, storage)?;
            let listings = repository.list().await?;
            let result = SiteSearch::new(listings).search(&query.join(" "));

            println!("{} results", result.total);
            for listing in &result.properties {
                print_listing(listing);
            }
            for page in &result.pages {
                println!("page     {} ({})", page.title, page.url);
            }
            for service in &result.services {
                println!("service  {} ({})", service.title, service.url);
            }
        }
        Command::Listings {
            property_type,
            min_price,
            max_price,
            min_beds,
            sort,
        } => {
            let repository = repository(&config, storage)?;
            let listings = repository.list().await?;
            let filter = ListingFilter {
                query: None,
                property_type: property_type.map(PropertyType::from),
                min_price,
                max_price,
                min_beds,
            };

            let matched = filter_listings(&listings, &filter, sort.into());
            info!("{} of {} listings match", matched.len(), listings.len());
            for listing in &matched {
                print_listing(listing);
            }
        }
        Command::Content { action } => run_content(ContentStore::with_site_defaults(storage), action)?,
        Command::Submissions => {
            let submissions = SubmissionStore::new(storage).list()?;
            for s in &submissions {
                let marker = if s.read { " " } else { "*" };
                println!("{} #{} {} <{}> {}", marker, s.id, s.name, s.email, s.created_at.format("%Y-%m-%d"));
                println!("    {}", s.message);
            }
        }
        Command::Session { action } => {
            let session = AdminSession::new(storage);
            match action {
                SessionAction::Status => println!("active: {}", session.is_active()?),
                SessionAction::Start => session.begin()?,
                SessionAction::End => session.end()?,
            }
        }
    }

    Ok(())
}

fn repository(config: &Config, storage: Arc<dyn KeyValueStore>) -> Result<Box<dyn ListingRepository>> {
    let repository: Box<dyn ListingRepository> = match &config.remote {
        Some(remote) => Box::new(RestListingRepository::new(
            &remote.url,
            &remote.api_key,
            config.http_timeout,
        )?),
        None => Box::new(LocalListingStore::new(storage)),
    };

    info!("Reading listings from {} store", repository.source_name());
    Ok(repository)
}

fn run_content(store: ContentStore, action: ContentAction) -> Result<()> {
    match action {
        ContentAction::Show => println!("{}", serde_json::to_string_pretty(&store.get_all())?),
        ContentAction::Export => println!("{}", serde_json::to_string_pretty(&store.export_snapshot())?),
        ContentAction::Get { page, section, field } => {
            println!("{}", store.resolve(&page, &section, &field));
        }
        ContentAction::Set {
            page,
            section,
            field,
            value,
        } => {
            let _subscription = store.subscribe(|| info!("Content updated"));

            let mut tree = store.get_all();
            tree.set(page, section, field, value);
            if !store.save(&tree) {
                anyhow::bail!("Save failed, try again");
            }
        }
        ContentAction::Reset => {
            if !store.reset() {
                anyhow::bail!("Reset failed, try again");
            }
        }
    }

    Ok(())
}

fn print_listing(listing: &Listing) {
    let f = &listing.fields;
    println!("{}. {} ({} USD)", listing.id, f.title, f.price);
    println!("   {} · {}", f.property_type, f.location);
    if let Some(beds) = f.beds {
        println!("   {} beds", beds);
    }
    if !f.features.is_empty() {
        println!("   Features: {}", f.features.join(", "));
    }
}

