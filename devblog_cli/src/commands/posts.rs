//! The `posts` subcommand: lists posts with filters, or shows one by slug.

use anyhow::{bail, Result};
use clap::Args;
use devblog_lib::types::PostStatus;
use devblog_lib::{CachedClient, PostQuery, Query};

use crate::output::{
    print_comments_table, print_json, print_post_detail, print_posts_table, OutputFormat,
};

#[derive(Args)]
pub struct PostsArgs {
    /// Show a single post by slug instead of listing
    pub slug: Option<String>,

    /// Filter by tag slug
    #[arg(long)]
    pub tag: Option<String>,

    /// Filter by author id
    #[arg(long)]
    pub author: Option<String>,

    /// Filter by status: draft, published, archived
    #[arg(long)]
    pub status: Option<String>,

    /// Search posts by title or content
    #[arg(long)]
    pub search: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub limit: i64,

    /// Include comments when showing a single post
    #[arg(long)]
    pub comments: bool,
}

pub async fn run(args: &PostsArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    if let Some(slug) = &args.slug {
        return show(slug, args.comments, client, format).await;
    }

    let mut query = PostQuery::default()
        .with_page(args.page)
        .with_limit(args.limit);
    if let Some(tag) = &args.tag {
        query = query.with_tag_slug(tag);
    }
    if let Some(author) = &args.author {
        query = query.with_author_id(author);
    }
    if let Some(status) = &args.status {
        let Ok(parsed) = status.parse::<PostStatus>() else {
            bail!("unknown status '{status}'. Valid values: draft, published, archived");
        };
        query = query.with_status(parsed);
    }
    if let Some(search) = &args.search {
        query = query.with_search(search);
    }

    let resp = client.get_posts(&query).await?;
    eprintln!("Page {} ({} total posts)", resp.page, resp.total);

    match format {
        OutputFormat::Table => print_posts_table(&resp.posts),
        OutputFormat::Json => print_json(&resp.posts)?,
    }

    Ok(())
}

async fn show(
    slug: &str,
    with_comments: bool,
    client: &CachedClient,
    format: &OutputFormat,
) -> Result<()> {
    let Some(post) = client.get_post(slug).await? else {
        bail!("post '{slug}' not found");
    };

    match format {
        OutputFormat::Table => {
            print_post_detail(&post);
            if with_comments {
                let comments = client.get_post_comments(&post.id).await?;
                println!();
                print_comments_table(&comments.comments);
            }
        }
        OutputFormat::Json => print_json(&post)?,
    }

    Ok(())
}
