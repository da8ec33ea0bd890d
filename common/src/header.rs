// scrolled further than this, the header condenses
pub const CONDENSE_AFTER_PX: f64 = 50.0;

pub fn is_condensed(scroll_y: f64) -> bool {
    scroll_y > CONDENSE_AFTER_PX
}

pub fn padding_class(scroll_y: f64) -> &'static str {
    if is_condensed(scroll_y) {
        "py-2 shadow-xl"
    } else {
        "py-4"
    }
}

// where a click landed relative to the mobile menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    MenuButton,
    MenuItem,
    InsideMenu,
    Outside,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn class(&self) -> &'static str {
        if self.open { "" } else { "hidden" }
    }

    // the menu button toggles; following a link or clicking anywhere else closes
    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::MenuButton => self.open = !self.open,
            ClickTarget::MenuItem | ClickTarget::Outside => self.open = false,
            ClickTarget::InsideMenu => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_condenses_past_threshold() {
        assert_eq!(padding_class(0.0), "py-4");
        assert_eq!(padding_class(50.0), "py-4");
        assert_eq!(padding_class(51.0), "py-2 shadow-xl");
    }

    #[test]
    fn menu_starts_hidden_and_toggles() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.class(), "hidden");

        menu.click(ClickTarget::MenuButton);
        assert!(menu.is_open());

        menu.click(ClickTarget::InsideMenu);
        assert!(menu.is_open());

        menu.click(ClickTarget::MenuButton);
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_and_item_click_close() {
        for target in [ClickTarget::Outside, ClickTarget::MenuItem] {
            let mut menu = MobileMenu::default();
            menu.click(ClickTarget::MenuButton);
            menu.click(target);
            assert!(!menu.is_open(), "{target:?}");
        }
    }
}
