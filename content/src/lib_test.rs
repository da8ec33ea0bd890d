use super::*;
use crate::{news::NewsCategory, staff::StaffRole};

#[test]
fn embedded_site_parses() {
    let site = SiteConfig::embedded().expect("embedded site.toml should parse");

    assert_eq!(site.nav.len(), 6);
    assert!(!site.news.is_empty());
    assert!(!site.gallery.is_empty());
    assert!(!site.staff.is_empty());
    assert_eq!(site.map.zoom, 15);
}

#[test]
fn embedded_site_covers_every_filter_category() {
    let site = SiteConfig::embedded().expect("embedded site.toml should parse");

    for category in NewsCategory::all() {
        assert!(site.news.iter().any(|n| n.category == category), "no news for {category}");
    }
    for role in StaffRole::all() {
        assert!(site.staff.iter().any(|s| s.role() == role), "no staff for {role}");
    }
}

#[test]
fn nested_stat_attaches_to_its_card() {
    let site = SiteConfig::embedded().expect("embedded site.toml should parse");

    let stat = site.about[0].stat.as_ref().expect("first card has a stat");
    assert_eq!(stat.value, "250+");
    assert!(site.about[2].stat.is_none());
}

#[test]
fn missing_sections_default_to_empty() {
    let doc = r#"
name = "S"
tagline = "T"
logo = "l.png"
nav = []
stats = []
about = []

[hero]
title = "h"
subtitle = "s"
image = "h.jpg"

[history]
title = "h"
text = "t"
image = "h.jpg"

[contact]
address = []
phone = "1"
email = "a@b.c"
hours = "always"

[map]
lat = 0.0
lng = 0.0
title = "here"
"#;

    let site = SiteConfig::parse(doc).expect("minimal config should parse");
    assert!(site.news.is_empty());
    assert!(site.gallery.is_empty());
    assert!(site.staff.is_empty());
    assert_eq!(site.map.zoom, 15);
}

#[test]
fn malformed_config_is_an_error() {
    assert!(SiteConfig::parse("name = ").is_err());
}

#[test]
fn title_case_only_touches_first_char() {
    assert_eq!(title_case("event"), "Event");
    assert_eq!(title_case("sports day"), "Sports day");
    assert_eq!(title_case(""), "");
}
