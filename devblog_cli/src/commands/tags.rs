//! The `tags` subcommand: lists tags, or shows one with its published posts.

use anyhow::{bail, Result};
use clap::Args;
use devblog_lib::types::PostStatus;
use devblog_lib::{CachedClient, PostQuery, Query};

use crate::output::{print_json, print_posts_table, print_tags_table, OutputFormat};

/// Listing limit matching the tag page's grid.
const TAG_POSTS_LIMIT: i64 = 100;

#[derive(Args)]
pub struct TagsArgs {
    /// Show a single tag by slug instead of listing
    pub slug: Option<String>,
}

pub async fn run(args: &TagsArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let Some(slug) = &args.slug else {
        let resp = client.get_tags().await?;
        match format {
            OutputFormat::Table => print_tags_table(&resp.tags),
            OutputFormat::Json => print_json(&resp.tags)?,
        }
        return Ok(());
    };

    let Some(tag) = client.get_tag(slug).await? else {
        bail!("tag '{slug}' not found");
    };
    let posts = client
        .get_posts(
            &PostQuery::default()
                .with_tag_slug(slug)
                .with_status(PostStatus::Published)
                .with_limit(TAG_POSTS_LIMIT),
        )
        .await?;

    match format {
        OutputFormat::Table => {
            println!("{}", tag.name);
            if let Some(description) = tag.description.as_deref().filter(|d| !d.is_empty()) {
                println!("{description}");
            }
            let count = posts.posts.len();
            println!(
                "{} {}",
                count,
                if count == 1 { "article" } else { "articles" }
            );
            if count > 0 {
                println!();
                print_posts_table(&posts.posts);
            } else {
                println!("No published posts found with this tag.");
            }
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "tag": tag,
            "posts": posts.posts,
        }))?,
    }

    Ok(())
}
