mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::ApiError;
pub use self::query::{PostQuery, Query, QueryCommon};

pub use reqwest::multipart;
