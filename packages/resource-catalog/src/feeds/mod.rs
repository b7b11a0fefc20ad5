//! Resource feed implementations.
//!
//! - [`FileFeed`] - JSON file on disk
//! - [`HttpFeed`] - JSON served over HTTP
//!
//! Use [`feed_for`] to pick one from a location string.

pub mod file;
pub mod http;

pub use file::FileFeed;
pub use http::HttpFeed;

use crate::traits::feed::ResourceFeed;

/// Build a feed from a path or `http(s)://` URL.
pub fn feed_for(location: &str) -> Box<dyn ResourceFeed> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpFeed::new(location))
    } else {
        Box::new(FileFeed::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_for_picks_by_scheme() {
        assert_eq!(
            feed_for("https://example.org/resources.json").name(),
            "https://example.org/resources.json"
        );
        assert_eq!(
            feed_for("assets/data/resources.json").name(),
            "assets/data/resources.json"
        );
    }
}
