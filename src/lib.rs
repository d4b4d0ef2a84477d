//! # Schoolhouse
//!
//! A single-binary content manager and static site generator for small
//! school websites. All editable content — identity and contact details,
//! theme, page copy, and blog posts — lives in one JSON document under a
//! local data directory; the CLI edits it and renders it to plain HTML.
//!
//! # Architecture: One Document, One Store
//!
//! ```text
//! edit commands  →  SiteStore (mutate + persist)  →  site.json
//! build command  →  SiteStore (read)              →  dist/*.html
//! ```
//!
//! The whole site is a single [`types::SiteData`] document. A [`store::SiteStore`]
//! is constructed once in `main` and owns it: every edit command maps its
//! flags to a typed partial update ([`patch`]), applies it through exactly one
//! store operation, and the store persists the full document before the
//! operation returns. The renderer never writes to the document; the store
//! never renders.
//!
//! This separation exists for three reasons:
//!
//! - **Durability**: every edit is its own complete write — there is no
//!   in-memory state that can drift ahead of what is on disk.
//! - **Compatibility**: the stored JSON is the site's interchange format;
//!   its field names are stable across versions.
//! - **Testability**: the store and the renderer are both plain functions
//!   over `SiteData`, so the whole pipeline is exercised without a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The site document and the built-in default content |
//! | [`patch`] | Typed partial updates, one per document section |
//! | [`store`] | Document ownership, persistence, and every mutation |
//! | [`theme`] | CSS custom properties generated from the stored theme |
//! | [`render`] | Maud templates producing the five-page static site |
//! | [`output`] | CLI display formatting — summaries, post tables, build reports |
//!
//! # Design Decisions
//!
//! ## Typed Patches Over Generic Merging
//!
//! Partial updates are concrete structs with one `Option` per editable
//! field, not a generic deep-merge of loose key/value maps. A misspelled
//! field cannot be silently dropped: it fails at the CLI parser or does not
//! compile. Nested records (social links, SEO) merge field-by-field so
//! editing one link never clears its neighbors.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked templates, auto-escaped interpolation, and no template files to
//! ship or get out of sync.
//!
//! ## Storage Format Is the Legacy Format
//!
//! The document serializes with its historical camelCase field names
//! (`logoText`, `heroTitle`, `imageUrl`, ...). Existing data directories
//! keep working across versions; compatibility outranks Rust naming taste
//! on the wire.
//!
//! ## Corruption Falls Back, Writes Fail Loudly
//!
//! A missing or corrupt `site.json` can always be replaced by the built-in
//! default document, so loading never errors. A failed *write* is the
//! opposite case — the user's edit would be lost — so every mutation
//! surfaces write errors instead of swallowing them.

pub mod output;
pub mod patch;
pub mod render;
pub mod store;
pub mod theme;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
