use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod about;
pub mod contact;
pub mod gallery;
pub mod news;
pub mod staff;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use about::{AboutCard, Stat};
use contact::{ContactInfo, MapConfig};
use gallery::GalleryItem;
use news::NewsItem;
use staff::StaffMember;

// the site content shipped with the webapp
//
// the interactive layer consumes these records directly instead of reading labels back out
// of rendered markup, so everything that a filter or lightbox needs lives here
pub const EMBEDDED_SITE: &str = include_str!("../site.toml");

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct History {
    pub title: String,
    pub text: String,
    pub image: String,
}

// site configuration
//
// this struct is deserialized from site.toml; each section of the page reads
// the part it renders and nothing else
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub logo: String,
    pub hero: Hero,
    pub nav: Vec<NavLink>,

    pub stats: Vec<Stat>,
    pub about: Vec<AboutCard>,
    pub history: History,

    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,

    pub contact: ContactInfo,
    pub map: MapConfig,
}

impl SiteConfig {
    pub fn parse(doc: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(doc)?;

        debug!(
            news = config.news.len(),
            gallery = config.gallery.len(),
            staff = config.staff.len(),
            "parsed site configuration"
        );

        Ok(config)
    }

    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_SITE)
    }
}

// capitalize the first character, leaving the rest as written
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
