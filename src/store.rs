//! The site store: single owner of the editable site document.
//!
//! One [`SiteStore`] is constructed at startup and handed to whatever needs
//! the document — CLI commands mutate through it, the renderer reads through
//! it. Nothing else touches `site.json`.
//!
//! ## Persistence
//!
//! The whole document lives in one pretty-printed JSON file under the data
//! directory. Every mutating operation serializes and writes the full
//! document before it returns; there is no batching and no partial write.
//! Each operation builds the new document from the current one, persists it,
//! and only then publishes it as the current state — a failed write leaves
//! the in-memory document at the last durably saved value and surfaces a
//! [`StoreError`] so the caller knows the edit was not saved.
//!
//! Loading never fails: a missing file means first run, a corrupt file is
//! warned about on stderr, and both fall back to the built-in default
//! document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::patch::{ConfigPatch, ContentPatch, ThemePatch};
use crate::types::{BlogPost, SiteData};

/// File name of the stored document inside the data directory.
pub const DATA_FILE: &str = "site.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("changes not saved: could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("changes not saved: could not serialize site data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Owner of the site document and the only writer of its storage file.
#[derive(Debug)]
pub struct SiteStore {
    data: SiteData,
    path: PathBuf,
}

impl SiteStore {
    /// Load the document from `data_dir/site.json`, falling back to the
    /// built-in defaults when the file is absent or unreadable.
    ///
    /// Corruption is recovered locally, not surfaced as an error: the site
    /// must always come up. The broken file is left in place and will be
    /// overwritten by the next successful edit.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(DATA_FILE);
        let data = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(err) => {
                    eprintln!(
                        "warning: {} is not a valid site document ({err}); using defaults",
                        path.display()
                    );
                    SiteData::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => SiteData::default(),
            Err(err) => {
                eprintln!(
                    "warning: could not read {} ({err}); using defaults",
                    path.display()
                );
                SiteData::default()
            }
        };
        Self { data, path }
    }

    /// Read-only view of the current document.
    pub fn data(&self) -> &SiteData {
        &self.data
    }

    /// Path of the storage file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge the given fields into the config section.
    pub fn update_config(&mut self, patch: ConfigPatch) -> Result<(), StoreError> {
        let mut next = self.data.clone();
        patch.apply(&mut next.config);
        self.commit(next)
    }

    /// Merge the given fields into the theme section.
    ///
    /// The presentation variables (colors, mode, font stack) are derived
    /// from the stored theme by [`crate::theme::theme_css`], so they pick up
    /// the new values on the next render with no further bookkeeping here.
    pub fn update_theme(&mut self, patch: ThemePatch) -> Result<(), StoreError> {
        let mut next = self.data.clone();
        patch.apply(&mut next.theme);
        self.commit(next)
    }

    /// Merge the given fields into one page's content, leaving the other
    /// pages untouched. The target page is part of the patch type, so there
    /// is no unknown-page case to handle.
    pub fn update_content(&mut self, patch: ContentPatch) -> Result<(), StoreError> {
        let mut next = self.data.clone();
        match patch {
            ContentPatch::Home(p) => p.apply(&mut next.content.home),
            ContentPatch::About(p) => p.apply(&mut next.content.about),
            ContentPatch::Contact(p) => p.apply(&mut next.content.contact),
        }
        self.commit(next)
    }

    /// Prepend a post (the list is newest-first). The caller supplies the
    /// complete post, id included; ids are not checked for uniqueness.
    pub fn add_post(&mut self, post: BlogPost) -> Result<(), StoreError> {
        let mut next = self.data.clone();
        next.posts.insert(0, post);
        self.commit(next)
    }

    /// Replace the post whose id matches `post.id`.
    ///
    /// When no post matches, the list is left exactly as it was: no error,
    /// no insertion. Callers that care should check [`Self::find_post`]
    /// first.
    pub fn update_post(&mut self, post: BlogPost) -> Result<(), StoreError> {
        let mut next = self.data.clone();
        if let Some(existing) = next.posts.iter_mut().find(|p| p.id == post.id) {
            *existing = post;
        }
        self.commit(next)
    }

    /// Remove the first post with the given id; no-op when absent.
    pub fn delete_post(&mut self, id: &str) -> Result<(), StoreError> {
        let mut next = self.data.clone();
        if let Some(pos) = next.posts.iter().position(|p| p.id == id) {
            next.posts.remove(pos);
        }
        self.commit(next)
    }

    pub fn find_post(&self, id: &str) -> Option<&BlogPost> {
        self.data.posts.iter().find(|p| p.id == id)
    }

    /// Replace the whole document with the built-in defaults.
    ///
    /// Unconditional: the destructive-action confirmation is the calling
    /// layer's job, not the store's.
    pub fn reset_to_defaults(&mut self) -> Result<(), StoreError> {
        self.commit(SiteData::default())
    }

    /// Persist `next` and, only on success, adopt it as the current state.
    fn commit(&mut self, next: SiteData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&next)?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.data = next;
        Ok(())
    }
}

static POST_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh post id: millisecond timestamp plus a process-wide
/// counter. The counter keeps ids distinct even when several posts are
/// created within the same clock tick.
pub fn next_post_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = POST_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{AboutPatch, HomePatch, SeoPatch, SocialsPatch};
    use crate::test_helpers::{sample_post, temp_store};
    use crate::types::ThemeMode;
    use std::collections::HashSet;

    #[test]
    fn load_without_file_uses_defaults() {
        let (_tmp, store) = temp_store();
        assert_eq!(store.data(), &SiteData::default());
    }

    #[test]
    fn load_with_corrupt_file_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join(DATA_FILE), "{not json at all").unwrap();
        let store = SiteStore::load(tmp.path());
        assert_eq!(store.data(), &SiteData::default());
    }

    #[test]
    fn mutation_persists_and_reloads() {
        let (tmp, mut store) = temp_store();
        store
            .update_config(ConfigPatch {
                name: Some("Hillside Academy".to_string()),
                ..Default::default()
            })
            .unwrap();

        let reloaded = SiteStore::load(tmp.path());
        assert_eq!(reloaded.data(), store.data());
        assert_eq!(reloaded.data().config.name, "Hillside Academy");
    }

    #[test]
    fn update_config_leaves_other_sections_untouched() {
        let (_tmp, mut store) = temp_store();
        let before = store.data().clone();
        store
            .update_config(ConfigPatch {
                phone: Some("+44 20 7946 0000".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.data().theme, before.theme);
        assert_eq!(store.data().content, before.content);
        assert_eq!(store.data().posts, before.posts);
        assert_eq!(store.data().config.name, before.config.name);
    }

    #[test]
    fn nested_socials_merge_preserves_siblings() {
        let (_tmp, mut store) = temp_store();
        store
            .update_config(ConfigPatch {
                socials: Some(SocialsPatch {
                    facebook: Some("https://facebook.com".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .unwrap();
        store
            .update_config(ConfigPatch {
                socials: Some(SocialsPatch {
                    whatsapp: Some("https://wa.me/999".to_string()),
                    ..Default::default()
                }),
                seo: Some(SeoPatch {
                    meta_title: Some("Edited".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .unwrap();

        let socials = &store.data().config.socials;
        assert_eq!(socials.whatsapp, "https://wa.me/999");
        assert_eq!(socials.facebook, "https://facebook.com");
        assert_eq!(store.data().config.seo.meta_title, "Edited");
        // Sibling seo field untouched
        assert_eq!(
            store.data().config.seo.meta_description,
            SiteData::default().config.seo.meta_description
        );
    }

    #[test]
    fn update_theme_is_idempotent() {
        let (_tmp, mut store) = temp_store();
        let dark = || ThemePatch {
            mode: Some(ThemeMode::Dark),
            ..Default::default()
        };
        store.update_theme(dark()).unwrap();
        let once = store.data().clone();
        store.update_theme(dark()).unwrap();
        assert_eq!(store.data(), &once);
        assert_eq!(store.data().theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn update_content_touches_one_page_only() {
        let (_tmp, mut store) = temp_store();
        let before = store.data().content.clone();
        store
            .update_content(ContentPatch::Home(HomePatch {
                hero_title: Some("Welcome Back".to_string()),
                ..Default::default()
            }))
            .unwrap();

        assert_eq!(store.data().content.home.hero_title, "Welcome Back");
        assert_eq!(store.data().content.about, before.about);
        assert_eq!(store.data().content.contact, before.contact);
        // Other home fields untouched
        assert_eq!(
            store.data().content.home.welcome_text,
            before.home.welcome_text
        );
    }

    #[test]
    fn update_content_about_page() {
        let (_tmp, mut store) = temp_store();
        store
            .update_content(ContentPatch::About(AboutPatch {
                principal_message: Some("A new year begins.".to_string()),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(
            store.data().content.about.principal_message,
            "A new year begins."
        );
    }

    #[test]
    fn add_post_prepends() {
        let (_tmp, mut store) = temp_store();
        let default_len = store.data().posts.len();

        let post = BlogPost {
            id: "abc".to_string(),
            title: "T".to_string(),
            excerpt: "E".to_string(),
            content: String::new(),
            author: "A".to_string(),
            date: "2024-01-01".to_string(),
            image_url: String::new(),
            category: "News".to_string(),
        };
        store.add_post(post.clone()).unwrap();

        assert_eq!(store.data().posts.len(), default_len + 1);
        assert_eq!(store.data().posts[0], post);
    }

    #[test]
    fn update_post_replaces_matching_id() {
        let (_tmp, mut store) = temp_store();
        store.add_post(sample_post("abc")).unwrap();

        let mut edited = sample_post("abc");
        edited.title = "Edited Title".to_string();
        store.update_post(edited).unwrap();

        assert_eq!(store.find_post("abc").unwrap().title, "Edited Title");
    }

    #[test]
    fn update_post_with_unknown_id_changes_nothing() {
        let (_tmp, mut store) = temp_store();
        let before = store.data().posts.clone();

        store.update_post(sample_post("no-such-id")).unwrap();

        // Unchanged in both length and contents, and nothing was inserted.
        assert_eq!(store.data().posts, before);
    }

    #[test]
    fn delete_post_twice_is_a_no_op_the_second_time() {
        let (_tmp, mut store) = temp_store();
        store.add_post(sample_post("abc")).unwrap();
        let len_with_post = store.data().posts.len();

        store.delete_post("abc").unwrap();
        assert_eq!(store.data().posts.len(), len_with_post - 1);

        store.delete_post("abc").unwrap();
        assert_eq!(store.data().posts.len(), len_with_post - 1);
    }

    #[test]
    fn delete_post_removes_first_match_only() {
        let (_tmp, mut store) = temp_store();
        store.add_post(sample_post("dup")).unwrap();
        store.add_post(sample_post("dup")).unwrap();
        let len = store.data().posts.len();

        store.delete_post("dup").unwrap();
        assert_eq!(store.data().posts.len(), len - 1);
        assert!(store.find_post("dup").is_some());
    }

    #[test]
    fn reset_restores_the_exact_default_document() {
        let (_tmp, mut store) = temp_store();
        store
            .update_config(ConfigPatch {
                name: Some("Changed".to_string()),
                ..Default::default()
            })
            .unwrap();
        store.add_post(sample_post("x")).unwrap();

        store.reset_to_defaults().unwrap();
        assert_eq!(store.data(), &SiteData::default());
    }

    #[test]
    fn failed_write_surfaces_error_and_keeps_state() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut store = SiteStore::load(tmp.path());
        // Make the storage path unwritable by turning it into a directory.
        fs::create_dir(tmp.path().join(DATA_FILE)).unwrap();

        let result = store.update_config(ConfigPatch {
            name: Some("Changed".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(StoreError::Write { .. })));
        // The unpersisted edit was not published.
        assert_eq!(store.data().config.name, "Best School");
    }

    #[test]
    fn post_ids_are_unique_within_a_tick() {
        let ids: HashSet<String> = (0..100).map(|_| next_post_id()).collect();
        assert_eq!(ids.len(), 100);
    }
}
