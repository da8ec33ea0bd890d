//! State of the single page-wide lightbox overlay.

use tracing::debug;

use crate::transition::{Generation, GenerationCounter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: String,
}

// what the overlay shows
//
// media covers news, gallery and the about history image (whose text may be empty); a
// profile is a staff member's card blown up
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightboxContent {
    Media {
        image: String,
        title: String,
        description: String,
        badge: Option<Badge>,
    },
    Profile {
        name: String,
        role: String,
        image: String,
        qualification: String,
        description: String,
    },
}

impl LightboxContent {
    pub fn title(&self) -> &str {
        match self {
            LightboxContent::Media { title, .. } => title,
            LightboxContent::Profile { name, .. } => name,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    // in the document but still transparent and scaled down
    Entering,
    Shown,
    // animating out; removed after the close delay
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub content: LightboxContent,
    pub phase: Phase,
}

impl Overlay {
    pub fn style(&self) -> &'static str {
        match self.phase {
            Phase::Shown => "opacity: 1;",
            Phase::Entering | Phase::Leaving => "opacity: 0;",
        }
    }

    pub fn panel_style(&self) -> &'static str {
        match self.phase {
            Phase::Shown => "transform: scale(1);",
            Phase::Entering | Phase::Leaving => "transform: scale(0.95);",
        }
    }
}

// Lightbox
//
// there is at most one overlay.  opening while one is already up swaps its content in place.
// the deferred reveal and the deferred removal are both stamped with a generation, so a
// removal scheduled by an earlier close() can never take down an overlay opened after it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lightbox {
    overlay: Option<Overlay>,
    generation: GenerationCounter,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.overlay,
            Some(Overlay {
                phase: Phase::Entering | Phase::Shown,
                ..
            })
        )
    }

    // page scrolling stays locked for as long as an overlay is in the document
    pub fn scroll_locked(&self) -> bool {
        self.overlay.is_some()
    }

    // the returned generation must be passed to reveal() after the open delay
    pub fn open(&mut self, content: LightboxContent) -> Generation {
        let generation = self.generation.advance();
        debug!(title = content.title(), generation = generation.value(), "opening lightbox");

        self.overlay = Some(Overlay {
            content,
            phase: Phase::Entering,
        });

        generation
    }

    pub fn reveal(&mut self, generation: Generation) -> bool {
        if !self.generation.is_current(generation) {
            return false;
        }

        match self.overlay.as_mut() {
            Some(overlay) if overlay.phase == Phase::Entering => {
                overlay.phase = Phase::Shown;
                true
            }
            _ => false,
        }
    }

    // returns None when there is nothing to close; otherwise the generation to pass to
    // remove() after the close delay
    pub fn close(&mut self) -> Option<Generation> {
        let overlay = self.overlay.as_mut()?;
        if overlay.phase == Phase::Leaving {
            return None;
        }

        overlay.phase = Phase::Leaving;
        let generation = self.generation.advance();
        debug!(generation = generation.value(), "closing lightbox");

        Some(generation)
    }

    pub fn remove(&mut self, generation: Generation) -> bool {
        if !self.generation.is_current(generation) {
            return false;
        }

        match self.overlay {
            Some(Overlay {
                phase: Phase::Leaving,
                ..
            }) => {
                self.overlay = None;
                true
            }
            _ => false,
        }
    }
}

// focusable triggers open the overlay on Enter and Space, the same as a click
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate_triggers() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("a"));
    }

    fn media(title: &str) -> LightboxContent {
        LightboxContent::Media {
            image: format!("{title}.jpg"),
            title: title.to_owned(),
            description: String::from("desc"),
            badge: None,
        }
    }

    #[test]
    fn open_then_close_round_trip() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.scroll_locked());

        let opened = lightbox.open(media("a"));
        assert!(lightbox.is_open());
        assert!(lightbox.scroll_locked());
        assert_eq!(lightbox.overlay().map(|o| o.phase), Some(Phase::Entering));

        assert!(lightbox.reveal(opened));
        assert_eq!(lightbox.overlay().map(|o| o.style()), Some("opacity: 1;"));

        let closing = lightbox.close().expect("overlay is open");
        assert!(!lightbox.is_open());
        assert!(lightbox.scroll_locked());

        assert!(lightbox.remove(closing));
        assert!(lightbox.overlay().is_none());
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn close_without_overlay_is_a_noop() {
        let mut lightbox = Lightbox::new();
        assert!(lightbox.close().is_none());
    }

    #[test]
    fn double_close_schedules_one_removal() {
        let mut lightbox = Lightbox::new();
        lightbox.open(media("a"));

        assert!(lightbox.close().is_some());
        assert!(lightbox.close().is_none());
    }

    #[test]
    fn reopening_during_close_survives_the_stale_removal() {
        let mut lightbox = Lightbox::new();
        let first = lightbox.open(media("a"));
        lightbox.reveal(first);
        let closing = lightbox.close().expect("open");

        let second = lightbox.open(media("b"));
        assert!(!lightbox.remove(closing));
        assert!(lightbox.reveal(second));
        assert_eq!(lightbox.overlay().map(|o| o.content.title()), Some("b"));
    }

    #[test]
    fn opening_twice_replaces_content_in_place() {
        let mut lightbox = Lightbox::new();
        let first = lightbox.open(media("a"));
        lightbox.open(LightboxContent::Profile {
            name: String::from("Mr. P"),
            role: String::from("Principal"),
            image: String::from("p.jpg"),
            qualification: String::from("M.Ed"),
            description: String::new(),
        });

        assert!(!lightbox.reveal(first));
        assert_eq!(lightbox.overlay().map(|o| o.content.title()), Some("Mr. P"));
    }
}
