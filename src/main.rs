//! CLI entry point for mdsite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version)]
#[command(about = "A minimal static site generator for Markdown content", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Without a subcommand, a full build runs
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site into the output directory
    #[command(alias = "b")]
    Build,

    /// Delete the output directory
    Clean,

    /// Scaffold a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post or page
    New {
        /// Kind of content to create (post, page)
        #[arg(short, long, default_value = "post")]
        kind: String,

        /// Title of the new content file
        title: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdsite=debug,info"
    } else {
        "mdsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine the site directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            let site = mdsite::Site::new(&base_dir)?;
            tracing::info!("Building site...");
            let summary = site.build()?;
            println!("Build complete: {}", summary);
        }

        Commands::Clean => {
            let site = mdsite::Site::new(&base_dir)?;
            tracing::info!("Cleaning output directory...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            mdsite::commands::init::init_site(&target_dir)?;
            println!("Initialized new site in {:?}", target_dir);
        }

        Commands::New { kind, title } => {
            let site = mdsite::Site::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", kind, title);
            mdsite::commands::new::create(&site, &title, &kind)?;
        }
    }

    Ok(())
}
