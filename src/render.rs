//! Static HTML rendering of the site document.
//!
//! The `build` command turns the current document into five pages: home,
//! about, gallery, blog, and contact, each a complete HTML file with the
//! shared chrome (top bar, navbar, footer) and the theme CSS inlined. Maud
//! keeps the templates type-checked and auto-escaped; the only raw HTML is
//! the markdown-rendered post body.
//!
//! Everything editable comes from the document. The rest — feature cards,
//! the curriculum list, accreditations, the gallery placeholders — is fixed
//! copy, rendered here rather than stored.

use std::fs;
use std::path::Path;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use thiserror::Error;

use crate::theme;
use crate::types::{SiteConfig, SiteData, SocialLinks};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// The five public pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Gallery,
    Blog,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Gallery,
        Page::Blog,
        Page::Contact,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::About => "about.html",
            Page::Gallery => "gallery.html",
            Page::Blog => "blog.html",
            Page::Contact => "contact.html",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Gallery => "Gallery",
            Page::Blog => "Blog",
            Page::Contact => "Contact",
        }
    }

    fn title_label(self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::About => Some("About Us"),
            Page::Gallery => Some("Gallery"),
            Page::Blog => Some("Blog & News"),
            Page::Contact => Some("Contact Us"),
        }
    }
}

/// Render all pages into `output_dir`. Returns the file names written.
pub fn render_site(data: &SiteData, output_dir: &Path) -> Result<Vec<String>, RenderError> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();
    for page in Page::ALL {
        let markup = render_page(data, page);
        fs::write(output_dir.join(page.file_name()), markup.into_string())?;
        written.push(page.file_name().to_string());
    }
    Ok(written)
}

/// Render a single page to markup.
pub fn render_page(data: &SiteData, page: Page) -> Markup {
    let content = match page {
        Page::Home => home_page(data),
        Page::About => about_page(data),
        Page::Gallery => gallery_page(),
        Page::Blog => blog_page(data),
        Page::Contact => contact_page(data),
    };
    base_document(data, page, content)
}

/// Page `<title>`: the SEO meta title on the home page, `"<Page> | <name>"`
/// elsewhere.
fn page_title(data: &SiteData, page: Page) -> String {
    match page.title_label() {
        None => data.config.seo.meta_title.clone(),
        Some(label) => format!("{} | {}", label, data.config.name),
    }
}

// ============================================================================
// Document shell
// ============================================================================

fn base_document(data: &SiteData, page: Page, content: Markup) -> Markup {
    let title = page_title(data, page);
    let description = &data.config.seo.meta_description;
    let css = format!("{}\n\n{}", theme::theme_css(&data.theme), CSS_STATIC);

    html! {
        (DOCTYPE)
        html lang="en" class=[theme::mode_class(&data.theme)] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                style { (css) }
            }
            body {
                (site_header(&data.config, page))
                main { (content) }
                (site_footer(&data.config))
            }
        }
    }
}

fn site_header(config: &SiteConfig, current: Page) -> Markup {
    html! {
        header.site-header {
            div.top-bar {
                div.top-bar-contact {
                    span { (config.phone) }
                    span { (config.email) }
                }
                (social_links(&config.socials))
            }
            nav.navbar {
                a.brand href="index.html" {
                    span.brand-name { (config.name) }
                    span.brand-logo-text { (config.logo_text) }
                }
                ul.nav-links {
                    @for page in Page::ALL {
                        li class=[(page == current).then_some("current")] {
                            a href=(page.file_name()) { (page.nav_label()) }
                        }
                    }
                }
                a.button href="contact.html" { "Admissions" }
            }
        }
    }
}

/// Social links, rendered only for non-empty URLs.
fn social_links(socials: &SocialLinks) -> Markup {
    let entries = [
        ("Facebook", &socials.facebook),
        ("Instagram", &socials.instagram),
        ("YouTube", &socials.youtube),
        ("LinkedIn", &socials.linkedin),
        ("WhatsApp", &socials.whatsapp),
    ];
    html! {
        div.social-links {
            @for (label, url) in entries {
                @if !url.is_empty() {
                    a href=(url) target="_blank" rel="noopener noreferrer" { (label) }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    let year = chrono::Local::now().format("%Y").to_string();
    html! {
        footer.site-footer {
            div.footer-grid {
                div {
                    h3 { (config.name) }
                    p.footer-tagline { (config.tagline) }
                    (social_links(&config.socials))
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { a href="about.html" { "About Us" } }
                        li { a href="gallery.html" { "Campus Gallery" } }
                        li { a href="blog.html" { "News & Events" } }
                        li { a href="contact.html" { "Contact Us" } }
                    }
                }
                div {
                    h4 { "Academics" }
                    ul {
                        li { "Early Years" }
                        li { "Primary School" }
                        li { "Secondary School" }
                        li { "IB Diploma" }
                    }
                }
                div {
                    h4 { "Contact Info" }
                    ul.footer-contact {
                        li { (config.address) }
                        li { (config.phone) }
                        li { (config.email) }
                    }
                }
            }
            p.copyright { "© " (year) " " (config.name) ". All rights reserved." }
        }
    }
}

// ============================================================================
// Page renderers
// ============================================================================

const FEATURES: [(&str, &str); 4] = [
    (
        "World-Class Curriculum",
        "Offering Cambridge and IB curriculums tailored for global success.",
    ),
    (
        "Expert Faculty",
        "Dedicated educators from over 20 different countries inspiring young minds.",
    ),
    (
        "Global Perspective",
        "A diverse community represented by students from 45+ nationalities.",
    ),
    (
        "Holistic Development",
        "Focusing on academic excellence, arts, sports, and leadership.",
    ),
];

const CURRICULUM: [&str; 4] = [
    "Early Childhood Education (Ages 3-5)",
    "Primary Years Programme (Ages 5-11)",
    "Middle Years Programme (Ages 11-16)",
    "Diploma Programme (Ages 16-18)",
];

fn home_page(data: &SiteData) -> Markup {
    let home = &data.content.home;
    html! {
        section.hero style={"background-image: url('" (home.hero_image) "')"} {
            div.hero-overlay {
                h1 { (home.hero_title) }
                p.hero-subtitle { (home.hero_subtitle) }
                div.hero-actions {
                    a.button href="contact.html" { "Apply Now" }
                    a.button.button-outline href="about.html" { "Learn More" }
                }
            }
        }
        section.welcome {
            h2 { (home.welcome_title) }
            p { (home.welcome_text) }
            div.feature-grid {
                @for (title, desc) in FEATURES {
                    div.feature-card {
                        h3 { (title) }
                        p { (desc) }
                    }
                }
            }
        }
        section.stats {
            @for stat in &home.stats {
                div.stat {
                    div.stat-value { (stat.value) }
                    div.stat-label { (stat.label) }
                }
            }
        }
        section.programs {
            h2 { (home.programs_title) }
            p { (home.programs_text) }
            ul.curriculum {
                @for item in CURRICULUM {
                    li { (item) }
                }
            }
            a.button href="about.html" { "View Full Curriculum" }
        }
        section.latest-news {
            h2 { "Latest News" }
            p.section-intro { "Updates from our community" }
            div.post-grid {
                @for post in data.posts.iter().take(3) {
                    a.post-card href="blog.html" {
                        img src=(post.image_url) alt=(post.title) loading="lazy";
                        div.post-card-body {
                            span.post-category { (post.category) }
                            h3 { (post.title) }
                            p { (post.excerpt) }
                            span.post-date { (post.date) }
                        }
                    }
                }
            }
            a.view-all href="blog.html" { "View All News →" }
        }
    }
}

fn about_page(data: &SiteData) -> Markup {
    let about = &data.content.about;
    html! {
        section.page-header {
            h1 { "About Our School" }
            p { "Discover our rich history, our dedication to excellence, and our vision for the future." }
        }
        section.principal {
            img src=(about.principal_image) alt="Principal";
            div.principal-message {
                h2 { "A Message from the Principal" }
                blockquote { "\u{201c}" (about.principal_message) "\u{201d}" }
                p.principal-name { "Dr. Eleanor Rigby" br; span { "Principal" } }
            }
        }
        section.pillars {
            div.pillar {
                h3 { "Our Mission" }
                p { (about.mission) }
            }
            div.pillar {
                h3 { "Our Vision" }
                p { (about.vision) }
            }
            div.pillar {
                h3 { "Our Philosophy" }
                p { (about.philosophy) }
            }
        }
        section.accreditations {
            h2 { "Accreditations & Memberships" }
            div.accreditation-row {
                span { "CIS" }
                span { "WASC" }
                span { "IB World School" }
                span { "Cambridge" }
            }
        }
    }
}

/// The gallery is not stored content: twelve seeded placeholder images, as
/// the site has always shipped.
fn gallery_page() -> Markup {
    html! {
        section.page-header {
            h1 { "Campus Life" }
            p { "A glimpse into our vibrant community" }
        }
        div.gallery-grid {
            @for i in 0..12usize {
                figure.gallery-item {
                    img src={"https://picsum.photos/seed/school" (i) "/800/600"}
                        alt={"Gallery Image " (i + 1)} loading="lazy";
                }
            }
        }
    }
}

const BLOG_CATEGORIES: [&str; 6] = [
    "Academics",
    "Sports",
    "Arts",
    "Community",
    "Events",
    "Admissions",
];

fn blog_page(data: &SiteData) -> Markup {
    html! {
        section.page-header {
            h1 { "News & Events" }
            p { "Stay up to date with the latest happenings" }
        }
        div.blog-layout {
            div.blog-posts {
                @if data.posts.is_empty() {
                    p.no-posts { "No posts found." }
                }
                @for post in &data.posts {
                    article.post {
                        img src=(post.image_url) alt=(post.title);
                        div.post-body {
                            div.post-meta {
                                span { (post.date) }
                                span { (post.author) }
                                span.post-category { (post.category) }
                            }
                            h2 { (post.title) }
                            p.post-excerpt { (post.excerpt) }
                            @if !post.content.is_empty() {
                                details.post-content {
                                    summary { "Read Full Story" }
                                    (markdown(&post.content))
                                }
                            }
                        }
                    }
                }
            }
            aside.blog-sidebar {
                div.sidebar-box {
                    h3 { "Categories" }
                    ul {
                        @for cat in BLOG_CATEGORIES {
                            li { (cat) }
                        }
                    }
                }
                div.sidebar-box.newsletter {
                    h3 { "Subscribe" }
                    p { "Get the latest news directly to your inbox." }
                    input type="email" placeholder="Your email address";
                    button { "Sign Up" }
                }
            }
        }
    }
}

fn contact_page(data: &SiteData) -> Markup {
    let config = &data.config;
    let contact = &data.content.contact;
    html! {
        section.page-header {
            h1 { "Contact Us" }
            p { "We'd love to hear from you" }
        }
        div.contact-layout {
            div.contact-info {
                h2 { "Get In Touch" }
                p { "Whether you are looking for admissions information or general queries, our team is ready to assist you." }
                dl {
                    dt { "Visit Us" }
                    dd { (config.address) }
                    dt { "Call Us" }
                    dd { (config.phone) }
                    dt { "Email Us" }
                    dd { (config.email) }
                    dt { "Office Hours" }
                    dd { "Mon - Fri: 8:00 AM - 4:00 PM" }
                }
            }
            // The form is decorative: nothing is ever transmitted anywhere.
            div.contact-form {
                h2 { (contact.form_title) }
                form {
                    label { "First Name" input type="text" name="first-name" required; }
                    label { "Last Name" input type="text" name="last-name" required; }
                    label { "Email Address" input type="email" name="email" required; }
                    label { "Subject"
                        select name="subject" {
                            option { "General Inquiry" }
                            option { "Admissions" }
                            option { "Careers" }
                            option { "Other" }
                        }
                    }
                    label { "Message" textarea name="message" rows="4" required {} }
                    button.button type="submit" { "Send Message" }
                }
                p.form-success hidden { (contact.form_success_message) }
            }
        }
        div.map-embed {
            iframe src=(config.map_embed_url) title="School Location"
                width="100%" height="400" loading="lazy" allowfullscreen {}
        }
    }
}

fn markdown(src: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(src));
    PreEscaped(out)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_post;
    use crate::types::ThemeMode;

    #[test]
    fn home_title_is_the_seo_meta_title() {
        let data = SiteData::default();
        let html = render_page(&data, Page::Home).into_string();
        assert!(html.contains("<title>Best School - Excellence in Education</title>"));
    }

    #[test]
    fn inner_pages_title_pattern() {
        let data = SiteData::default();
        let html = render_page(&data, Page::About).into_string();
        assert!(html.contains("<title>About Us | Best School</title>"));
    }

    #[test]
    fn meta_description_from_document() {
        let data = SiteData::default();
        let html = render_page(&data, Page::Home).into_string();
        assert!(html.contains("Providing top-tier international education"));
        assert!(html.contains(r#"property="og:title""#));
    }

    #[test]
    fn dark_mode_sets_root_class() {
        let mut data = SiteData::default();
        let light = render_page(&data, Page::Home).into_string();
        assert!(!light.contains(r#"<html lang="en" class="dark">"#));

        data.theme.mode = ThemeMode::Dark;
        let dark = render_page(&data, Page::Home).into_string();
        assert!(dark.contains(r#"<html lang="en" class="dark">"#));
    }

    #[test]
    fn theme_colors_are_inlined_in_every_page() {
        let data = SiteData::default();
        for page in Page::ALL {
            let html = render_page(&data, page).into_string();
            assert!(
                html.contains("--color-primary: #1e40af"),
                "{} missing theme css",
                page.file_name()
            );
        }
    }

    #[test]
    fn nav_marks_the_current_page() {
        let data = SiteData::default();
        let html = render_page(&data, Page::Blog).into_string();
        assert!(html.contains(r#"<li class="current"><a href="blog.html">Blog</a>"#));
    }

    #[test]
    fn empty_social_links_are_omitted() {
        let mut data = SiteData::default();
        data.config.socials.youtube = String::new();
        let html = render_page(&data, Page::Home).into_string();
        assert!(!html.contains(">YouTube<"));
        assert!(html.contains(">Facebook<"));
    }

    #[test]
    fn home_renders_stats_and_latest_three_posts() {
        let mut data = SiteData::default();
        data.posts.insert(0, sample_post("newest"));
        let html = render_page(&data, Page::Home).into_string();

        assert!(html.contains("1200+"));
        assert!(html.contains("Nationalities"));
        // Four seed+new posts, but only three shown
        assert!(html.contains(&sample_post("newest").title));
        assert!(!html.contains("Sports Day Highlights"));
    }

    #[test]
    fn blog_renders_markdown_post_content() {
        let mut data = SiteData::default();
        let mut post = sample_post("md");
        post.content = "Some **bold** news.".to_string();
        data.posts.insert(0, post);

        let html = render_page(&data, Page::Blog).into_string();
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("Read Full Story"));
    }

    #[test]
    fn blog_handles_no_posts() {
        let mut data = SiteData::default();
        data.posts.clear();
        let html = render_page(&data, Page::Blog).into_string();
        assert!(html.contains("No posts found."));
    }

    #[test]
    fn contact_page_uses_config_and_content() {
        let data = SiteData::default();
        let html = render_page(&data, Page::Contact).into_string();
        assert!(html.contains("123 Academic Avenue"));
        assert!(html.contains("Get in Touch"));
        assert!(html.contains("maps/embed"));
    }

    #[test]
    fn gallery_renders_twelve_placeholders() {
        let data = SiteData::default();
        let html = render_page(&data, Page::Gallery).into_string();
        assert_eq!(html.matches("picsum.photos/seed/school").count(), 12);
    }

    #[test]
    fn post_titles_are_escaped() {
        let mut data = SiteData::default();
        let mut post = sample_post("xss");
        post.title = "<script>alert('x')</script>".to_string();
        data.posts.insert(0, post);

        let html = render_page(&data, Page::Blog).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn render_site_writes_all_five_pages() {
        let tmp = tempfile::TempDir::new().unwrap();
        let written = render_site(&SiteData::default(), tmp.path()).unwrap();
        assert_eq!(written.len(), 5);
        for page in Page::ALL {
            assert!(tmp.path().join(page.file_name()).exists());
        }
    }
}
