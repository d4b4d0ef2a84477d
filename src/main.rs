use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use schoolhouse::patch::{
    AboutPatch, ConfigPatch, ContactPatch, ContentPatch, HomePatch, SeoPatch, SocialsPatch,
    ThemePatch,
};
use schoolhouse::store::{self, SiteStore};
use schoolhouse::types::{BlogPost, FontFamily, Stat, ThemeMode};
use schoolhouse::{output, render};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "schoolhouse")]
#[command(about = "Content manager and static site generator for school websites")]
#[command(long_about = "\
Content manager and static site generator for school websites

All site content lives in a single JSON document in the data directory.
Edit commands change one section of it at a time and save immediately;
'build' renders the current document to a five-page static site.

Document layout:

  site.json
  ├── config      # identity, contact details, social links, SEO
  ├── theme       # light/dark mode, font family, brand colors
  ├── content     # per-page copy: home, about, contact
  └── posts       # blog posts, newest first

Every edit flag maps to one field; anything you don't pass keeps its
current value. Social links and SEO fields merge the same way — setting
--whatsapp never touches --facebook.

The first run starts from the built-in sample site. 'reset' brings it
back (and asks first, because that throws your edits away).")]
#[command(version = version_string())]
struct Cli {
    /// Data directory holding the site document
    #[arg(long, default_value = ".schoolhouse", global = true)]
    data_dir: PathBuf,

    /// Output directory for the generated site
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a summary of the current site document
    Show {
        /// Print the full document as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Edit identity, contact details, social links, and SEO
    Config(ConfigArgs),
    /// Edit theme mode, font, and brand colors
    Theme(ThemeArgs),
    /// Edit the copy of one page
    #[command(subcommand)]
    Content(ContentCommand),
    /// Manage blog posts
    #[command(subcommand)]
    Post(PostCommand),
    /// Replace everything with the built-in sample site
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Render the site to static HTML
    Build,
}

#[derive(clap::Args)]
struct ConfigArgs {
    /// School name
    #[arg(long)]
    name: Option<String>,
    /// Tagline shown under the name
    #[arg(long)]
    tagline: Option<String>,
    /// Short logo text
    #[arg(long)]
    logo_text: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
    /// Map embed URL for the contact page
    #[arg(long)]
    map_embed_url: Option<String>,
    #[arg(long)]
    facebook: Option<String>,
    #[arg(long)]
    instagram: Option<String>,
    #[arg(long)]
    youtube: Option<String>,
    #[arg(long)]
    linkedin: Option<String>,
    #[arg(long)]
    whatsapp: Option<String>,
    /// SEO meta title (used as the home page <title>)
    #[arg(long)]
    meta_title: Option<String>,
    /// SEO meta description
    #[arg(long)]
    meta_description: Option<String>,
}

impl ConfigArgs {
    fn into_patch(self) -> ConfigPatch {
        let socials = SocialsPatch {
            facebook: self.facebook,
            instagram: self.instagram,
            youtube: self.youtube,
            linkedin: self.linkedin,
            whatsapp: self.whatsapp,
        };
        let seo = SeoPatch {
            meta_title: self.meta_title,
            meta_description: self.meta_description,
        };
        ConfigPatch {
            name: self.name,
            tagline: self.tagline,
            logo_text: self.logo_text,
            email: self.email,
            phone: self.phone,
            address: self.address,
            map_embed_url: self.map_embed_url,
            socials: (!socials.is_empty()).then_some(socials),
            seo: (!seo.is_empty()).then_some(seo),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for ThemeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Light => ThemeMode::Light,
            ModeArg::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FontArg {
    Sans,
    Serif,
    Display,
}

impl From<FontArg> for FontFamily {
    fn from(font: FontArg) -> Self {
        match font {
            FontArg::Sans => FontFamily::Sans,
            FontArg::Serif => FontFamily::Serif,
            FontArg::Display => FontFamily::Display,
        }
    }
}

#[derive(clap::Args)]
struct ThemeArgs {
    /// Display mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Font family
    #[arg(long, value_enum)]
    font: Option<FontArg>,
    /// Primary brand color (hex)
    #[arg(long)]
    primary: Option<String>,
    /// Secondary brand color (hex)
    #[arg(long)]
    secondary: Option<String>,
}

#[derive(Subcommand)]
enum ContentCommand {
    /// Home page copy
    Home(HomeArgs),
    /// About page copy
    About(AboutArgs),
    /// Contact page copy
    Contact(ContactArgs),
}

#[derive(clap::Args)]
struct HomeArgs {
    #[arg(long)]
    hero_title: Option<String>,
    #[arg(long)]
    hero_subtitle: Option<String>,
    #[arg(long)]
    hero_image: Option<String>,
    #[arg(long)]
    welcome_title: Option<String>,
    #[arg(long)]
    welcome_text: Option<String>,
    #[arg(long)]
    programs_title: Option<String>,
    #[arg(long)]
    programs_text: Option<String>,
    /// Stat as "Label=Value"; repeat to replace the whole stats list
    #[arg(long = "stat", value_name = "LABEL=VALUE")]
    stats: Vec<String>,
}

#[derive(clap::Args)]
struct AboutArgs {
    #[arg(long)]
    mission: Option<String>,
    #[arg(long)]
    vision: Option<String>,
    #[arg(long)]
    philosophy: Option<String>,
    #[arg(long)]
    principal_message: Option<String>,
    #[arg(long)]
    principal_image: Option<String>,
}

#[derive(clap::Args)]
struct ContactArgs {
    #[arg(long)]
    form_title: Option<String>,
    #[arg(long)]
    form_success_message: Option<String>,
}

#[derive(Subcommand)]
enum PostCommand {
    /// List all posts, newest first
    List,
    /// Add a new post (prepended to the list)
    Add(AddPostArgs),
    /// Edit an existing post by id
    Edit(EditPostArgs),
    /// Delete a post by id
    Delete { id: String },
}

#[derive(clap::Args)]
struct AddPostArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    excerpt: String,
    /// Post body (markdown)
    #[arg(long, default_value = "")]
    content: String,
    #[arg(long, default_value = "Admin")]
    author: String,
    /// Display date; defaults to today
    #[arg(long)]
    date: Option<String>,
    #[arg(long, default_value = "https://picsum.photos/800/600")]
    image_url: String,
    #[arg(long, default_value = "News")]
    category: String,
}

#[derive(clap::Args)]
struct EditPostArgs {
    id: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    excerpt: Option<String>,
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    category: Option<String>,
}

/// Parse a `--stat` value of the form `Label=Value`.
fn parse_stat(raw: &str) -> Result<Stat, String> {
    match raw.split_once('=') {
        Some((label, value)) if !label.is_empty() => Ok(Stat {
            label: label.to_string(),
            value: value.to_string(),
        }),
        _ => Err(format!("invalid stat '{raw}': expected LABEL=VALUE")),
    }
}

/// Whether a typed answer counts as consent. Anything but y/yes declines,
/// including an empty line — destructive actions must be opted into.
fn affirmed(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask a yes/no question on the terminal.
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(affirmed(&answer))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut site = SiteStore::load(&cli.data_dir);

    match cli.command {
        Command::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(site.data())?);
            } else {
                output::print_lines(&output::format_summary(site.data()));
            }
        }
        Command::Config(args) => {
            site.update_config(args.into_patch())?;
            println!("Saved {}", site.path().display());
        }
        Command::Theme(args) => {
            site.update_theme(ThemePatch {
                mode: args.mode.map(Into::into),
                font_family: args.font.map(Into::into),
                primary_color: args.primary,
                secondary_color: args.secondary,
            })?;
            println!("Saved {}", site.path().display());
        }
        Command::Content(command) => {
            let patch = match command {
                ContentCommand::Home(args) => {
                    let stats = if args.stats.is_empty() {
                        None
                    } else {
                        Some(
                            args.stats
                                .iter()
                                .map(|s| parse_stat(s))
                                .collect::<Result<Vec<_>, _>>()?,
                        )
                    };
                    ContentPatch::Home(HomePatch {
                        hero_title: args.hero_title,
                        hero_subtitle: args.hero_subtitle,
                        hero_image: args.hero_image,
                        welcome_title: args.welcome_title,
                        welcome_text: args.welcome_text,
                        programs_title: args.programs_title,
                        programs_text: args.programs_text,
                        stats,
                    })
                }
                ContentCommand::About(args) => ContentPatch::About(AboutPatch {
                    mission: args.mission,
                    vision: args.vision,
                    philosophy: args.philosophy,
                    principal_message: args.principal_message,
                    principal_image: args.principal_image,
                }),
                ContentCommand::Contact(args) => ContentPatch::Contact(ContactPatch {
                    form_title: args.form_title,
                    form_success_message: args.form_success_message,
                }),
            };
            site.update_content(patch)?;
            println!("Saved {}", site.path().display());
        }
        Command::Post(command) => match command {
            PostCommand::List => {
                output::print_lines(&output::format_post_list(&site.data().posts));
            }
            PostCommand::Add(args) => {
                let post = BlogPost {
                    id: store::next_post_id(),
                    title: args.title,
                    excerpt: args.excerpt,
                    content: args.content,
                    author: args.author,
                    date: args
                        .date
                        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
                    image_url: args.image_url,
                    category: args.category,
                };
                let id = post.id.clone();
                site.add_post(post)?;
                println!("Added post {id}");
            }
            PostCommand::Edit(args) => {
                let Some(existing) = site.find_post(&args.id) else {
                    return Err(format!("no post with id '{}'", args.id).into());
                };
                let mut post = existing.clone();
                if let Some(title) = args.title {
                    post.title = title;
                }
                if let Some(excerpt) = args.excerpt {
                    post.excerpt = excerpt;
                }
                if let Some(content) = args.content {
                    post.content = content;
                }
                if let Some(author) = args.author {
                    post.author = author;
                }
                if let Some(date) = args.date {
                    post.date = date;
                }
                if let Some(image_url) = args.image_url {
                    post.image_url = image_url;
                }
                if let Some(category) = args.category {
                    post.category = category;
                }
                site.update_post(post)?;
                println!("Updated post {}", args.id);
            }
            PostCommand::Delete { id } => {
                if site.find_post(&id).is_none() {
                    println!("No post with id '{id}'; nothing to delete.");
                } else {
                    site.delete_post(&id)?;
                    println!("Deleted post {id}");
                }
            }
        },
        Command::Reset { yes } => {
            let confirmed = yes
                || confirm("Reset all site data to the built-in defaults? This cannot be undone.")?;
            if confirmed {
                site.reset_to_defaults()?;
                println!("Site data reset to defaults.");
            } else {
                println!("Reset cancelled.");
            }
        }
        Command::Build => {
            let written = render::render_site(site.data(), &cli.output)?;
            output::print_lines(&output::format_build_output(&written, &cli.output));
        }
    }

    Ok(())
}
