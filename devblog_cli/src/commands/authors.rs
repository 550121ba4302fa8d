//! The `authors` subcommand: shows an author profile and their posts.

use anyhow::{bail, Result};
use clap::Args;
use devblog_lib::types::PostStatus;
use devblog_lib::{CachedClient, PostQuery, Query};

use crate::output::{print_json, print_posts_table, OutputFormat};

/// Listing limit matching the author page's grid.
const AUTHOR_POSTS_LIMIT: i64 = 100;

#[derive(Args)]
pub struct AuthorsArgs {
    /// Author id
    pub id: String,
}

pub async fn run(args: &AuthorsArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let Some(author) = client.get_user(&args.id).await? else {
        bail!("author '{}' not found", args.id);
    };
    let posts = client
        .get_posts(
            &PostQuery::default()
                .with_author_id(&args.id)
                .with_status(PostStatus::Published)
                .with_limit(AUTHOR_POSTS_LIMIT),
        )
        .await?;

    match format {
        OutputFormat::Table => {
            println!("{}", author.name.as_deref().unwrap_or("Author"));
            if let Some(bio) = author
                .profile
                .as_ref()
                .and_then(|p| p.bio.as_deref())
                .filter(|b| !b.is_empty())
            {
                println!("{bio}");
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
            }
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "author": author,
            "posts": posts.posts,
        }))?,
    }

    Ok(())
}
