//! The `sitemap` subcommand: prints the urlset for every canonical page.

use anyhow::Result;
use clap::Args;
use devblog_lib::{sitemap, CachedClient, Config};

use crate::output::{print_json, OutputFormat};
use crate::xml;

#[derive(Args)]
pub struct SitemapArgs {
    /// Canonical site origin (defaults to $DEVBLOG_SITE_URL)
    #[arg(long)]
    pub site_url: Option<String>,
}

pub async fn run(
    args: &SitemapArgs,
    client: &CachedClient,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let site_url = args.site_url.as_deref().unwrap_or(&config.site_url);
    let entries = sitemap::build_sitemap(client, site_url).await;

    match format {
        OutputFormat::Table => print!("{}", xml::sitemap_xml(&entries)?),
        OutputFormat::Json => print_json(&entries)?,
    }

    Ok(())
}
