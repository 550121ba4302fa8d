use anyhow::Result;
use devblog_lib::date::format_date;
use devblog_lib::types::{Comment, Post, Tag};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct PostRow {
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Author")]
    #[serde(rename = "Author")]
    author: String,
    #[tabled(rename = "Tags")]
    #[serde(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
}

#[derive(Tabled, Serialize)]
struct TagRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Updated")]
    #[serde(rename = "Updated")]
    updated: String,
}

#[derive(Tabled, Serialize)]
struct CommentRow {
    #[tabled(rename = "Author")]
    #[serde(rename = "Author")]
    author: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Comment")]
    #[serde(rename = "Comment")]
    comment: String,
}

// -- Row builders --

fn build_post_rows(posts: &[Post]) -> Vec<PostRow> {
    posts
        .iter()
        .map(|p| PostRow {
            title: p.title.clone(),
            slug: p.slug.clone(),
            author: p.author.name.clone(),
            tags: p
                .tags
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            status: p.status.to_string(),
            published: p
                .published_at
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_tag_rows(tags: &[Tag]) -> Vec<TagRow> {
    tags.iter()
        .map(|t| TagRow {
            name: t.name.clone(),
            slug: t.slug.clone(),
            description: t.description.clone().unwrap_or_default(),
            updated: format_date(t.updated_at),
        })
        .collect()
}

fn build_comment_rows(comments: &[Comment]) -> Vec<CommentRow> {
    comments
        .iter()
        .map(|c| CommentRow {
            author: c.author.name.clone(),
            date: format_date(c.created_at),
            comment: c.content.clone(),
        })
        .collect()
}

// -- Table output --

pub fn print_posts_table(posts: &[Post]) {
    println!("{}", Table::new(build_post_rows(posts)));
}

pub fn print_tags_table(tags: &[Tag]) {
    println!("{}", Table::new(build_tag_rows(tags)));
}

pub fn print_comments_table(comments: &[Comment]) {
    println!("{}", Table::new(build_comment_rows(comments)));
}

/// Full-text view of a single post.
pub fn print_post_detail(post: &Post) {
    println!("{}", post.title);
    println!(
        "by {} | {} | {}",
        post.author.name,
        format_date(post.published_at.unwrap_or(post.created_at)),
        post.status
    );
    if !post.tags.is_empty() {
        println!(
            "tags: {}",
            post.tags
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    if let Some(excerpt) = post.excerpt.as_deref().filter(|e| !e.is_empty()) {
        println!("\n{excerpt}");
    }
    println!("\n{}", post.content);
}

// -- JSON output --

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
