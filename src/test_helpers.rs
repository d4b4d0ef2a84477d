//! Shared test utilities for the schoolhouse test suite.

use tempfile::TempDir;

use crate::store::SiteStore;
use crate::types::BlogPost;

/// A store backed by a fresh temp directory (no stored document, so it
/// starts from the default document). The `TempDir` must be kept alive for
/// the duration of the test.
pub fn temp_store() -> (TempDir, SiteStore) {
    let tmp = TempDir::new().unwrap();
    let store = SiteStore::load(tmp.path());
    (tmp, store)
}

/// A fully-formed post with the given id and a recognizable title.
pub fn sample_post(id: &str) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: format!("Sample Post {id}"),
        excerpt: "An excerpt.".to_string(),
        content: "Body text.".to_string(),
        author: "Admin".to_string(),
        date: "2024-06-01".to_string(),
        image_url: "https://picsum.photos/800/600".to_string(),
        category: "News".to_string(),
    }
}
