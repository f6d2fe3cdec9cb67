use bookvibe_cli::admin::{PromoteOutcome, promote_admin};
use bookvibe_cli::seeder::{self, SeedConfig};
use bookvibe_config::DatabaseConfig;
use bookvibe_db::DocumentStore;
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "bookvibe-cli")]
#[command(about = "Book Vibe CLI - Administrative tools for the Book Vibe store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grant the admin role to a user, creating the user if needed
    PromoteAdmin {
        /// Email address (prompted if not provided)
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Seed the catalog with fake books, upcoming releases and reviews
    Seed {
        /// Number of books to create
        #[arg(short = 'b', long, default_value = "50")]
        books: usize,

        /// Number of upcoming releases to create
        #[arg(short = 'u', long, default_value = "10")]
        upcoming: usize,

        /// Number of reviews to create
        #[arg(short = 'r', long, default_value = "20")]
        reviews: usize,
    },
    /// Delete all books, upcoming releases and reviews (keeps users and carts)
    ClearCatalog {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let store = match DocumentStore::connect(&DatabaseConfig::from_env()).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = store.migrate().await {
        eprintln!("❌ Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Commands::PromoteAdmin { email } => handle_promote_admin(&store, email).await,
        Commands::Seed {
            books,
            upcoming,
            reviews,
        } => {
            let config = SeedConfig::new(books)
                .with_upcoming(upcoming)
                .with_reviews(reviews);
            handle_seed(&store, config).await
        }
        Commands::ClearCatalog { yes } => handle_clear_catalog(&store, yes).await,
    }
}

async fn handle_promote_admin(store: &DocumentStore, email: Option<String>) {
    let email = match email {
        Some(email) => email,
        None => match Input::<String>::new()
            .with_prompt("Email address")
            .interact_text()
        {
            Ok(email) => email,
            Err(e) => {
                eprintln!("❌ Failed to read email: {}", e);
                std::process::exit(1);
            }
        },
    };

    match promote_admin(store, email.trim()).await {
        Ok(PromoteOutcome::Created(id)) => {
            println!("\n✅ Created admin user");
            println!("   Email: {}", email.trim());
            println!("   Id: {}", id);
        }
        Ok(PromoteOutcome::Promoted(id)) => {
            println!("\n✅ Promoted {} ({}) to admin", email.trim(), id);
        }
        Ok(PromoteOutcome::AlreadyAdmin(_)) => {
            println!("ℹ️  {} is already an admin", email.trim());
        }
        Err(e) => {
            eprintln!("\n❌ Error promoting admin: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(store: &DocumentStore, config: SeedConfig) {
    if let Err(e) = seeder::seed_all(store, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_catalog(store: &DocumentStore, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete every book, upcoming release and review?")
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmed {
            println!("Aborted.");
            return;
        }
    }

    match seeder::clear_catalog(store).await {
        Ok(deleted) => println!("✅ Deleted {} documents", deleted),
        Err(e) => {
            eprintln!("\n❌ Error clearing catalog: {}", e);
            std::process::exit(1);
        }
    }
}
