//! The site document: the single aggregate every other module reads or edits.
//!
//! `SiteData` is serialized as-is to `site.json`, so field names and nesting
//! are part of the storage format. Structs use camelCase wire names
//! (`logoText`, `mapEmbedUrl`, ...) to stay compatible with documents written
//! by earlier versions of the tool. Renaming a field here is a breaking
//! change to every existing data directory.
//!
//! `SiteData::default()` is the built-in seed document: a complete,
//! fully-populated site that `load` falls back to when no stored document
//! exists (or the stored one is corrupt), and that `reset` restores.

use serde::{Deserialize, Serialize};

/// The aggregate root: everything editable about the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    pub config: SiteConfig,
    pub theme: ThemeConfig,
    pub content: PageContent,
    /// Ordered newest-first by convention (mutations prepend).
    pub posts: Vec<BlogPost>,
}

/// Site identity, contact details, social links, and SEO metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub logo_text: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub map_embed_url: String,
    pub socials: SocialLinks,
    pub seo: SeoConfig,
}

/// Fixed set of social-network URLs. Empty string means "not shown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub youtube: String,
    pub linkedin: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    pub meta_title: String,
    pub meta_description: String,
}

/// Theme settings: display mode, font family, and the two brand colors.
///
/// Colors are stored as hex strings and are not validated — they pass
/// straight through to CSS custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub font_family: FontFamily,
    pub primary_color: String,
    pub secondary_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// The wire/display name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    Serif,
    Display,
}

impl FontFamily {
    /// The wire/display name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Sans => "sans",
            FontFamily::Serif => "serif",
            FontFamily::Display => "display",
        }
    }
}

/// Editable text for the three fixed site pages.
///
/// The page set is closed: gallery and blog render from other parts of the
/// document (or from nothing), so only these three carry editable copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub home: HomeContent,
    pub about: AboutContent,
    pub contact: ContactContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: String,
    pub welcome_title: String,
    pub welcome_text: String,
    pub programs_title: String,
    pub programs_text: String,
    /// Ordered stat pairs shown in the home page stats band.
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub mission: String,
    pub vision: String,
    pub philosophy: String,
    pub principal_message: String,
    pub principal_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub form_title: String,
    pub form_success_message: String,
}

/// A blog post. All fields are caller-supplied, including the id; the store
/// does not validate uniqueness or date format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    /// Display date, conventionally `YYYY-MM-DD`. Not parsed anywhere.
    pub date: String,
    pub image_url: String,
    /// Free text, not a closed list.
    pub category: String,
}

// =============================================================================
// Built-in default document
// =============================================================================

impl Default for SiteData {
    fn default() -> Self {
        Self {
            config: SiteConfig::default(),
            theme: ThemeConfig::default(),
            content: PageContent::default(),
            posts: default_posts(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Best School".to_string(),
            tagline: "Shaping Global Minds for a Brighter Future".to_string(),
            logo_text: "Best".to_string(),
            email: "admissions@bestschool.edu".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Academic Avenue, Knowledge City, Global 90210".to_string(),
            map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3151.835434509374!2d144.9537353153169!3d-37.81720997975195!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x6ad642af0f11fd81%3A0xf577d33267b29780!2sMelbourne%20VIC%2C%20Australia!5e0!3m2!1sen!2sus!4v1611816557671!5m2!1sen!2sus".to_string(),
            socials: SocialLinks::default(),
            seo: SeoConfig::default(),
        }
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            facebook: "https://facebook.com".to_string(),
            instagram: "https://instagram.com".to_string(),
            youtube: "https://youtube.com".to_string(),
            linkedin: "https://linkedin.com".to_string(),
            whatsapp: "https://wa.me/15551234567".to_string(),
        }
    }
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            meta_title: "Best School - Excellence in Education".to_string(),
            meta_description:
                "Providing top-tier international education for the leaders of tomorrow."
                    .to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            font_family: FontFamily::Sans,
            primary_color: "#1e40af".to_string(),
            secondary_color: "#f59e0b".to_string(),
        }
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            home: HomeContent::default(),
            about: AboutContent::default(),
            contact: ContactContent::default(),
        }
    }
}

impl Default for HomeContent {
    fn default() -> Self {
        Self {
            hero_title: "Best School".to_string(),
            hero_subtitle: "Shaping Global Minds for a Brighter Future".to_string(),
            hero_image: "https://picsum.photos/id/433/1920/1080".to_string(),
            welcome_title: "Welcome to Excellence".to_string(),
            welcome_text: "At Best School, we believe in nurturing the whole child. Our curriculum is designed to challenge students academically while fostering their social and emotional growth. We prepare students not just for university, but for life.".to_string(),
            programs_title: "Our Programs".to_string(),
            programs_text: "From Early Years to High School, we offer a continuum of education that meets international standards.".to_string(),
            stats: vec![
                Stat { label: "Students".to_string(), value: "1200+".to_string() },
                Stat { label: "Nationalities".to_string(), value: "45".to_string() },
                Stat { label: "Teachers".to_string(), value: "150".to_string() },
                Stat { label: "Universities".to_string(), value: "100%".to_string() },
            ],
        }
    }
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            mission: "To inspire and empower students to become lifelong learners and responsible global citizens.".to_string(),
            vision: "To be a leading international school recognized for academic excellence and holistic development.".to_string(),
            philosophy: "We believe every child is unique and capable of extraordinary things. Our learner-centered approach ensures personalized attention.".to_string(),
            principal_message: "Welcome to our vibrant community. We are dedicated to providing a safe, nurturing, and stimulating environment.".to_string(),
            principal_image: "https://picsum.photos/id/64/800/800".to_string(),
        }
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            form_title: "Get in Touch".to_string(),
            form_success_message:
                "Thank you for your inquiry. Our admissions team will contact you shortly."
                    .to_string(),
        }
    }
}

fn default_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "Science Fair Success".to_string(),
            excerpt: "Our students showcased incredible innovation at this year's Annual Science Fair.".to_string(),
            content: "The annual science fair was a resounding success...".to_string(),
            author: "Dr. Smith".to_string(),
            date: "2023-10-15".to_string(),
            image_url: "https://picsum.photos/id/20/800/600".to_string(),
            category: "Events".to_string(),
        },
        BlogPost {
            id: "2".to_string(),
            title: "Admissions Open for 2024".to_string(),
            excerpt: "We are now accepting applications for the upcoming academic year.".to_string(),
            content: "Join our diverse community...".to_string(),
            author: "Admissions Team".to_string(),
            date: "2023-11-01".to_string(),
            image_url: "https://picsum.photos/id/24/800/600".to_string(),
            category: "News".to_string(),
        },
        BlogPost {
            id: "3".to_string(),
            title: "Sports Day Highlights".to_string(),
            excerpt: "A day filled with energy, teamwork, and school spirit.".to_string(),
            content: "Red house took the trophy this year...".to_string(),
            author: "Coach Carter".to_string(),
            date: "2023-09-20".to_string(),
            image_url: "https://picsum.photos/id/73/800/600".to_string(),
            category: "Sports".to_string(),
        },
    ]
}
