//! CLI entry point for mystudy

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mystudy::content::Category;

#[derive(Parser)]
#[command(name = "mystudy")]
#[command(version)]
#[command(about = "Load and query a markdown study-notes blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only list one category
        #[arg(long, value_enum)]
        category: Option<Category>,
    },

    /// Show a single post
    Show {
        /// Slug of the post
        slug: String,
    },

    /// List series, or the posts of one series
    Series {
        /// Series name or URL slug
        name: Option<String>,
    },

    /// Search titles and bodies
    Search {
        /// Text to look for (case-insensitive)
        query: String,

        /// Only search one category
        #[arg(long, value_enum)]
        category: Option<Category>,
    },

    /// Show the TIL archive by month
    Til,

    /// Export posts and series as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mystudy=debug,info"
    } else {
        "mystudy=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::List { category } => {
            let blog = mystudy::Blog::new(&base_dir)?;
            mystudy::commands::list::run(&blog, category)?;
        }

        Commands::Show { slug } => {
            let blog = mystudy::Blog::new(&base_dir)?;
            mystudy::commands::show::run(&blog, &slug)?;
        }

        Commands::Series { name } => {
            let blog = mystudy::Blog::new(&base_dir)?;
            mystudy::commands::series::run(&blog, name.as_deref())?;
        }

        Commands::Search { query, category } => {
            let blog = mystudy::Blog::new(&base_dir)?;
            mystudy::commands::search::run(&blog, &query, category)?;
        }

        Commands::Til => {
            let blog = mystudy::Blog::new(&base_dir)?;
            mystudy::commands::til::run(&blog)?;
        }

        Commands::Export { output } => {
            let blog = mystudy::Blog::new(&base_dir)?;
            tracing::info!("Exporting content from {:?}", blog.content_dir);
            mystudy::commands::export::run(&blog, output.as_deref())?;
        }

        Commands::Version => {
            println!("mystudy version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
