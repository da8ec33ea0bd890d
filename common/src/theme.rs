use tracing::{error, info};

use crate::preference::{PreferenceStore, Preferences};

// the class added to the document root in dark mode
pub const DARK_CLASS: &str = "dark";
// scoped to the body while colours change
pub const TRANSITION_CLASSES: [&str; 2] = ["transition-colors", "duration-500"];

const HEADER_LIGHT: [&str; 2] = ["from-primary/90", "to-red-600/90"];
const MENU_LIGHT: [&str; 2] = ["from-primary/90", "to-red-700/90"];
const SURFACE_DARK: [&str; 2] = ["from-gray-800/95", "to-gray-900/95"];

// Theme
//
// the single owner of every class that depends on dark mode.  the header, the mobile menu
// and both toggle buttons render from these instead of flipping classes on their own
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Theme {
            dark: prefs.dark_mode,
        }
    }

    pub fn load(store: &impl PreferenceStore) -> Self {
        Self::from_preferences(&Preferences::load(store))
    }

    pub fn toggled(self) -> Self {
        Theme { dark: !self.dark }
    }

    pub fn icon_class(self) -> &'static str {
        if self.dark { "fas fa-sun" } else { "fas fa-moon" }
    }

    // the title and aria label describe what clicking will do
    pub fn toggle_label(self) -> &'static str {
        if self.dark {
            "Switch to Light Mode"
        } else {
            "Switch to Dark Mode"
        }
    }

    pub fn toggle_tint(self) -> &'static str {
        if self.dark {
            "bg-yellow-400/20"
        } else {
            "bg-indigo-600/20"
        }
    }

    pub fn header_gradient(self) -> [&'static str; 2] {
        if self.dark { SURFACE_DARK } else { HEADER_LIGHT }
    }

    pub fn menu_gradient(self) -> [&'static str; 2] {
        if self.dark { SURFACE_DARK } else { MENU_LIGHT }
    }

    pub fn header_class(self) -> String {
        self.header_gradient().join(" ")
    }

    pub fn menu_class(self) -> String {
        self.menu_gradient().join(" ")
    }
}

// flip the theme and persist it
//
// a failed write is logged and the flipped theme is still returned, so the page follows the
// click even when storage is unavailable
pub fn toggle(current: Theme, store: &mut impl PreferenceStore) -> Theme {
    let next = current.toggled();

    match Preferences::with_dark_mode(next.dark).save(store) {
        Ok(()) => info!(dark = next.dark, "saved theme"),
        Err(err) => error!(%err, "failed to save theme"),
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::{DARK_MODE_KEY, MemoryStore};

    #[test]
    fn toggling_twice_restores_and_writes_each_time() {
        let mut store = MemoryStore::new();
        let start = Theme::load(&store);

        let once = toggle(start, &mut store);
        assert!(once.dark);
        assert_eq!(store.writes(), 1);
        assert!(Theme::load(&store).dark);

        let twice = toggle(once, &mut store);
        assert_eq!(twice, start);
        assert_eq!(store.writes(), 2);
        assert!(!Theme::load(&store).dark);
    }

    #[test]
    fn legacy_value_loads_as_dark() {
        let store = MemoryStore::with(DARK_MODE_KEY, "true");
        assert!(Theme::load(&store).dark);
    }

    #[test]
    fn classes_swap_between_modes() {
        let light = Theme::default();
        let dark = light.toggled();

        assert_eq!(light.icon_class(), "fas fa-moon");
        assert_eq!(dark.icon_class(), "fas fa-sun");
        assert_eq!(light.toggle_label(), "Switch to Dark Mode");
        assert_eq!(dark.toggle_tint(), "bg-yellow-400/20");
        assert_eq!(light.header_class(), "from-primary/90 to-red-600/90");
        assert_eq!(light.menu_class(), "from-primary/90 to-red-700/90");
        assert_eq!(dark.header_class(), dark.menu_class());
    }
}
