pub mod auth;
pub mod authors;
pub mod posts;
pub mod sitemap;
pub mod tags;
pub mod upload;
