//! CLI output formatting.
//!
//! Each display has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout. Output is
//! information-centric: the document summary reads as a content inventory,
//! the post list as a table keyed by id.

use crate::types::{BlogPost, SiteData};

/// Format the document summary shown by `show`.
pub fn format_summary(data: &SiteData) -> Vec<String> {
    let socials = [
        &data.config.socials.facebook,
        &data.config.socials.instagram,
        &data.config.socials.youtube,
        &data.config.socials.linkedin,
        &data.config.socials.whatsapp,
    ]
    .iter()
    .filter(|url| !url.is_empty())
    .count();

    let theme = &data.theme;
    vec![
        format!("{} — {}", data.config.name, data.config.tagline),
        format!("    Email:   {}", data.config.email),
        format!("    Phone:   {}", data.config.phone),
        format!("    Address: {}", data.config.address),
        format!("    Socials: {socials} link(s) set"),
        format!(
            "Theme: {} / {} (primary {}, secondary {})",
            theme.mode.as_str(),
            theme.font_family.as_str(),
            theme.primary_color,
            theme.secondary_color,
        ),
        format!("Posts: {}", data.posts.len()),
    ]
}

/// Format the post table shown by `post list`.
pub fn format_post_list(posts: &[BlogPost]) -> Vec<String> {
    if posts.is_empty() {
        return vec!["No posts.".to_string()];
    }
    let mut lines = Vec::with_capacity(posts.len() + 1);
    let id_width = posts.iter().map(|p| p.id.len()).max().unwrap_or(2).max(2);
    lines.push(format!(
        "{:<id_width$}  {:<10}  {:<12}  TITLE",
        "ID", "DATE", "CATEGORY"
    ));
    for post in posts {
        lines.push(format!(
            "{:<id_width$}  {:<10}  {:<12}  {}",
            post.id, post.date, post.category, post.title
        ));
    }
    lines
}

/// Format the file list written by `build`.
pub fn format_build_output(files: &[String], output_dir: &std::path::Path) -> Vec<String> {
    let mut lines: Vec<String> = files
        .iter()
        .map(|f| format!("Generated {f}"))
        .collect();
    lines.push(format!(
        "Site generated at {} ({} pages)",
        output_dir.display(),
        files.len()
    ));
    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
