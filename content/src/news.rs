use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Event,
    Announcement,
    Achievement,
}

impl NewsCategory {
    pub fn all() -> [Self; 3] {
        [Self::Event, Self::Announcement, Self::Achievement]
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Announcement => "announcement",
            Self::Achievement => "achievement",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Event => "Events",
            Self::Announcement => "Announcements",
            Self::Achievement => "Achievements",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Event => "fas fa-calendar-alt",
            Self::Announcement => "fas fa-bullhorn",
            Self::Achievement => "fas fa-trophy",
        }
    }

    // badge colour used on the card and in the lightbox
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Event => "bg-primary/80",
            Self::Announcement => "bg-accent/80",
            Self::Achievement => "bg-secondary/80",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_lowercase().as_str() {
            "event" | "events" => Some(Self::Event),
            "announcement" | "announcements" => Some(Self::Announcement),
            "achievement" | "achievements" => Some(Self::Achievement),
            _ => None,
        }
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// unknown categories fall back to the event colour
pub fn badge_class_for(category: &str) -> &'static str {
    NewsCategory::from_slug(category)
        .map(NewsCategory::badge_class)
        .unwrap_or("bg-primary/80")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub image: String,
    pub date: NaiveDate,
    pub category: NewsCategory,
}

impl NewsItem {
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}
