mod commands;
mod output;
mod xml;

use anyhow::Result;
use clap::{Parser, Subcommand};
use devblog_lib::{CachedClient, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "devblog")]
#[command(about = "Browse and author posts on the Devblog platform")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Override the backend API origin (defaults to $DEVBLOG_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, or show one by slug
    Posts(commands::posts::PostsArgs),
    /// List tags, or show one with its published posts
    Tags(commands::tags::TagsArgs),
    /// Show an author and their published posts
    Authors(commands::authors::AuthorsArgs),
    /// Account and session flows
    Auth(commands::auth::AuthArgs),
    /// Print the sitemap
    Sitemap(commands::sitemap::SitemapArgs),
    /// Upload a file and print its public URL
    Upload(commands::upload::UploadArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("devblog=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let mut config = Config::from_env();
    if let Some(api_url) = cli.api_url.clone() {
        config.api_base_url = api_url;
    }
    let client = CachedClient::new(&config)?;

    match &cli.command {
        Commands::Posts(args) => commands::posts::run(args, &client, &format).await?,
        Commands::Tags(args) => commands::tags::run(args, &client, &format).await?,
        Commands::Authors(args) => commands::authors::run(args, &client, &format).await?,
        Commands::Auth(args) => commands::auth::run(args, &client, &format).await?,
        Commands::Sitemap(args) => commands::sitemap::run(args, &client, &config, &format).await?,
        Commands::Upload(args) => commands::upload::run(args, &client).await?,
    }

    Ok(())
}
