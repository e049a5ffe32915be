//! CLI entry point for blogkit

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogkit")]
#[command(version)]
#[command(about = "Build a searchable JSON index from a directory of markdown posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the post index
    #[command(alias = "g")]
    Generate {
        /// Rebuild whenever a post changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Search the generated index
    Search {
        /// Text to look for in titles, excerpts and tags
        #[arg(default_value = "")]
        term: String,

        /// Only show posts with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Render a single post page as HTML
    Show {
        /// Slug of the post
        slug: String,
    },

    /// List posts or tags
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Delete the generated index
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogkit=debug,info"
    } else {
        "blogkit=info"
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
        None => std::env::current_dir()?,
    };
    let blog = blogkit::Blog::new(&base_dir)?;

    match cli.command.unwrap_or(Commands::Generate { watch: false }) {
        Commands::Generate { watch } => {
            let report = blog.generate()?;
            println!(
                "Generated {} posts into {}",
                report.posts.len(),
                report.output.display()
            );

            if watch {
                blogkit::commands::generate::watch(&blog).await?;
            }
        }

        Commands::New { title } => {
            let path = blog.new_post(&title)?;
            println!("Created: {}", path.display());
        }

        Commands::Search { term, tag } => {
            blogkit::commands::search::run(&blog, &term, tag.as_deref()).await?;
        }

        Commands::Show { slug } => {
            blogkit::commands::show::run(&blog, &slug).await?;
        }

        Commands::List { r#type } => {
            blogkit::commands::list::run(&blog, &r#type)?;
        }

        Commands::Clean => {
            blog.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
