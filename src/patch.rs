//! Partial updates for each section of the site document.
//!
//! Every editable section gets its own patch type with one `Option` per
//! field: `None` keeps the current value, `Some` replaces it. Nested records
//! (socials, seo) carry their own patch types and merge field-by-field, so
//! editing one social link never erases its siblings.
//!
//! The patch types are the whole write surface of the store. There is no
//! dynamic "merge arbitrary keys into a section" path: a typo'd field name is
//! a compile error here and a clap error at the CLI, never a silent no-op.
//! For page content the section itself is chosen by [`ContentPatch`], a
//! closed enum over the three known pages, so an unknown page key is
//! unrepresentable.

use crate::types::{
    AboutContent, ContactContent, FontFamily, HomeContent, SeoConfig, SiteConfig, SocialLinks,
    Stat, ThemeConfig, ThemeMode,
};

/// Partial update for [`SiteConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub logo_text: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub map_embed_url: Option<String>,
    pub socials: Option<SocialsPatch>,
    pub seo: Option<SeoPatch>,
}

#[derive(Debug, Clone, Default)]
pub struct SocialsPatch {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SeoPatch {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

/// Partial update for [`ThemeConfig`].
#[derive(Debug, Clone, Default)]
pub struct ThemePatch {
    pub mode: Option<ThemeMode>,
    pub font_family: Option<FontFamily>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

/// A content update aimed at exactly one of the three fixed pages.
#[derive(Debug, Clone)]
pub enum ContentPatch {
    Home(HomePatch),
    About(AboutPatch),
    Contact(ContactPatch),
}

#[derive(Debug, Clone, Default)]
pub struct HomePatch {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_image: Option<String>,
    pub welcome_title: Option<String>,
    pub welcome_text: Option<String>,
    pub programs_title: Option<String>,
    pub programs_text: Option<String>,
    /// Replaces the whole stats list when present. Stats are a small ordered
    /// list, not a keyed record, so per-entry merging has no meaning.
    pub stats: Option<Vec<Stat>>,
}

#[derive(Debug, Clone, Default)]
pub struct AboutPatch {
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub philosophy: Option<String>,
    pub principal_message: Option<String>,
    pub principal_image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub form_title: Option<String>,
    pub form_success_message: Option<String>,
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

impl ConfigPatch {
    pub fn apply(self, config: &mut SiteConfig) {
        set(&mut config.name, self.name);
        set(&mut config.tagline, self.tagline);
        set(&mut config.logo_text, self.logo_text);
        set(&mut config.email, self.email);
        set(&mut config.phone, self.phone);
        set(&mut config.address, self.address);
        set(&mut config.map_embed_url, self.map_embed_url);
        if let Some(socials) = self.socials {
            socials.apply(&mut config.socials);
        }
        if let Some(seo) = self.seo {
            seo.apply(&mut config.seo);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.tagline.is_none()
            && self.logo_text.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.map_embed_url.is_none()
            && self.socials.is_none()
            && self.seo.is_none()
    }
}

impl SocialsPatch {
    pub fn apply(self, socials: &mut SocialLinks) {
        set(&mut socials.facebook, self.facebook);
        set(&mut socials.instagram, self.instagram);
        set(&mut socials.youtube, self.youtube);
        set(&mut socials.linkedin, self.linkedin);
        set(&mut socials.whatsapp, self.whatsapp);
    }

    pub fn is_empty(&self) -> bool {
        self.facebook.is_none()
            && self.instagram.is_none()
            && self.youtube.is_none()
            && self.linkedin.is_none()
            && self.whatsapp.is_none()
    }
}

impl SeoPatch {
    pub fn apply(self, seo: &mut SeoConfig) {
        set(&mut seo.meta_title, self.meta_title);
        set(&mut seo.meta_description, self.meta_description);
    }

    pub fn is_empty(&self) -> bool {
        self.meta_title.is_none() && self.meta_description.is_none()
    }
}

impl ThemePatch {
    pub fn apply(self, theme: &mut ThemeConfig) {
        set(&mut theme.mode, self.mode);
        set(&mut theme.font_family, self.font_family);
        set(&mut theme.primary_color, self.primary_color);
        set(&mut theme.secondary_color, self.secondary_color);
    }
}

impl HomePatch {
    pub fn apply(self, home: &mut HomeContent) {
        set(&mut home.hero_title, self.hero_title);
        set(&mut home.hero_subtitle, self.hero_subtitle);
        set(&mut home.hero_image, self.hero_image);
        set(&mut home.welcome_title, self.welcome_title);
        set(&mut home.welcome_text, self.welcome_text);
        set(&mut home.programs_title, self.programs_title);
        set(&mut home.programs_text, self.programs_text);
        set(&mut home.stats, self.stats);
    }
}

impl AboutPatch {
    pub fn apply(self, about: &mut AboutContent) {
        set(&mut about.mission, self.mission);
        set(&mut about.vision, self.vision);
        set(&mut about.philosophy, self.philosophy);
        set(&mut about.principal_message, self.principal_message);
        set(&mut about.principal_image, self.principal_image);
    }
}

impl ContactPatch {
    pub fn apply(self, contact: &mut ContactContent) {
        set(&mut contact.form_title, self.form_title);
        set(&mut contact.form_success_message, self.form_success_message);
    }
}
