//! Viewport geometry and one-shot reveal tracking.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

// "mostly visible": the top edge has come up past `ratio` of the viewport height and the
// bottom edge has not yet left through the top
pub fn is_mostly_visible(rect: &Rect, viewport_height: f64, ratio: f64) -> bool {
    rect.top <= viewport_height * ratio && rect.bottom() >= 0.0
}

// whether a section is anywhere near the viewport, used to gate scroll parallax
pub fn section_in_range(scroll_y: f64, section_top: f64, section_height: f64, viewport_height: f64) -> bool {
    scroll_y > section_top - viewport_height && scroll_y < section_top + section_height
}

// Reveal
//
// how an element enters: the visibility ratio it waits for, and the delay it waits after
// that, which grows with the element's index so that siblings cascade
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub ratio: f64,
    pub base_delay_ms: u32,
    pub stagger_ms: u32,
}

impl Reveal {
    pub const DEFAULT: Reveal = Reveal::new(0.9);
    pub const ABOUT: Reveal = Reveal::new(0.8).with_stagger(150);
    pub const NEWS: Reveal = Reveal::new(0.9).with_stagger(100);
    pub const STAFF: Reveal = Reveal::new(0.9).with_stagger(100);
    pub const CONTACT: Reveal = Reveal::new(0.9).with_stagger(100).with_base_delay(200);

    pub const fn new(ratio: f64) -> Self {
        Reveal {
            ratio,
            base_delay_ms: 0,
            stagger_ms: 0,
        }
    }

    pub const fn with_stagger(self, stagger_ms: u32) -> Self {
        Reveal { stagger_ms, ..self }
    }

    pub const fn with_base_delay(self, base_delay_ms: u32) -> Self {
        Reveal {
            base_delay_ms,
            ..self
        }
    }

    pub fn delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay_ms
            .saturating_add(self.stagger_ms.saturating_mul(index))
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Reveal::DEFAULT
    }
}

// RevealState
//
// fires once: the first poll that sees the element mostly visible returns its delay, and
// every poll after that returns None.  revealed elements never hide again
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    reveal: Reveal,
    index: usize,
    fired: bool,
}

impl RevealState {
    pub fn new(reveal: Reveal, index: usize) -> Self {
        RevealState {
            reveal,
            index,
            fired: false,
        }
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    pub fn poll(&mut self, rect: &Rect, viewport_height: f64) -> Option<u32> {
        if self.fired || !is_mostly_visible(rect, viewport_height, self.reveal.ratio) {
            return None;
        }

        self.fired = true;
        Some(self.reveal.delay_ms(self.index))
    }
}

pub fn reveal_style(revealed: bool) -> &'static str {
    if revealed {
        "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_uses_ratio_of_viewport() {
        let vh = 1000.0;

        assert!(is_mostly_visible(&Rect::new(0.0, 850.0, 10.0, 100.0), vh, 0.9));
        assert!(!is_mostly_visible(&Rect::new(0.0, 850.0, 10.0, 100.0), vh, 0.8));
        assert!(is_mostly_visible(&Rect::new(0.0, -90.0, 10.0, 100.0), vh, 0.9));
        assert!(!is_mostly_visible(&Rect::new(0.0, -110.0, 10.0, 100.0), vh, 0.9));
    }

    #[test]
    fn reveal_fires_once_with_staggered_delay() {
        let mut state = RevealState::new(Reveal::ABOUT, 3);
        let below = Rect::new(0.0, 2000.0, 10.0, 100.0);
        let inside = Rect::new(0.0, 100.0, 10.0, 100.0);

        assert_eq!(state.poll(&below, 1000.0), None);
        assert_eq!(state.poll(&inside, 1000.0), Some(450));
        assert!(state.fired());

        // scrolling back out and in again does nothing
        assert_eq!(state.poll(&below, 1000.0), None);
        assert_eq!(state.poll(&inside, 1000.0), None);
    }

    #[test]
    fn contact_delays_include_base() {
        assert_eq!(Reveal::CONTACT.delay_ms(0), 200);
        assert_eq!(Reveal::CONTACT.delay_ms(2), 400);
        assert_eq!(Reveal::DEFAULT.delay_ms(5), 0);
    }

    #[test]
    fn section_range_brackets_the_section() {
        // section spans 2000..2500, viewport is 800 tall
        assert!(!section_in_range(1200.0, 2000.0, 500.0, 800.0));
        assert!(section_in_range(1201.0, 2000.0, 500.0, 800.0));
        assert!(section_in_range(2499.0, 2000.0, 500.0, 800.0));
        assert!(!section_in_range(2500.0, 2000.0, 500.0, 800.0));
    }
}
