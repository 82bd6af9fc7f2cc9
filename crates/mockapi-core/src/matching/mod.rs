//! Request matching utilities.

mod query;
mod url;

pub use query::{parse_query_string, query_matches};
pub use url::UrlPattern;
