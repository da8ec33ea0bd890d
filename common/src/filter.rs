//! Category filtering for card grids.
//!
//! The news, gallery and staff sections all show a row of mutually exclusive category
//! buttons above a grid of cards.  [`FilterController`] owns which category is active and
//! what each card looks like, and turns a selection into a plan of timed steps that the
//! caller runs on its own timers.

use std::fmt;

use tracing::debug;

use crate::{
    FILTER_HIDE_SHOW_GAP_MS, FILTER_STAGGER_MS,
    transition::{Generation, GenerationCounter, Scheduled},
    viewport::reveal_style,
};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

// Filter
//
// `All` is the sentinel that matches every card
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq> Filter<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => c == category,
        }
    }
}

impl<C: fmt::Display> Filter<C> {
    pub fn key(&self) -> String {
        match self {
            Filter::All => String::from("all"),
            Filter::Only(c) => c.to_string(),
        }
    }
}

// what a single card currently looks like
//
// a card is laid out when `displayed` and drawn at full opacity when `opaque`; the fade
// transition itself is left to css
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView {
    pub displayed: bool,
    pub opaque: bool,
}

impl CardView {
    pub const SHOWN: CardView = CardView {
        displayed: true,
        opaque: true,
    };

    pub fn is_visible(&self) -> bool {
        self.displayed && self.opaque
    }

    pub fn style(&self) -> &'static str {
        match (self.displayed, self.opaque) {
            (false, _) => "display: none; opacity: 0; transform: translateY(20px);",
            (true, false) => "opacity: 0; transform: translateY(20px);",
            (true, true) => "opacity: 1; transform: translateY(0);",
        }
    }

    // a filtered-out card leaves the layout even before it has been revealed; a displayed
    // card keeps its entrance offset until the reveal fires
    pub fn style_with_reveal(&self, revealed: bool) -> &'static str {
        if revealed || !self.displayed {
            self.style()
        } else {
            reveal_style(false)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Hide,
    Display,
    FadeIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStep {
    pub card: usize,
    pub action: CardAction,
}

pub type FilterStep = Scheduled<CardStep>;

// FilterController
//
// cards keep the order they were given in; `categories[i]` is the category of card i
#[derive(Clone, Debug, PartialEq)]
pub struct FilterController<C> {
    categories: Vec<C>,
    views: Vec<CardView>,
    active: Filter<C>,
    generation: GenerationCounter,
}

impl<C: Clone + PartialEq + fmt::Debug> FilterController<C> {
    pub fn new(categories: Vec<C>) -> Self {
        let views = vec![CardView::SHOWN; categories.len()];

        FilterController {
            categories,
            views,
            active: Filter::All,
            generation: GenerationCounter::new(),
        }
    }

    pub fn active(&self) -> &Filter<C> {
        &self.active
    }

    pub fn is_active(&self, filter: &Filter<C>) -> bool {
        &self.active == filter
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn view(&self, card: usize) -> CardView {
        self.views.get(card).copied().unwrap_or(CardView::SHOWN)
    }

    pub fn visible(&self) -> Vec<usize> {
        (0..self.views.len())
            .filter(|&i| self.views[i].is_visible())
            .collect()
    }

    // the set of cards a filter should leave visible once its transition has finished
    pub fn matching(&self, filter: &Filter<C>) -> Vec<usize> {
        (0..self.categories.len())
            .filter(|&i| filter.matches(&self.categories[i]))
            .collect()
    }

    // activate a filter
    //
    // every card fades out immediately.  after the hide/show gap the cards that do not match
    // are taken out of the layout and the matching ones are laid out again, each fading back
    // in one stagger step after the previous match.  the returned steps must be applied with
    // apply() once their delay has elapsed; steps from an earlier select() are ignored
    pub fn select(&mut self, filter: Filter<C>) -> Vec<FilterStep> {
        let generation = self.generation.advance();
        debug!(?filter, generation = generation.value(), "selecting filter");

        for view in self.views.iter_mut() {
            view.opaque = false;
        }

        let mut steps = Vec::with_capacity(self.categories.len() * 2);
        let mut rank = 0;

        for (card, category) in self.categories.iter().enumerate() {
            if filter.matches(category) {
                steps.push(Scheduled::new(
                    FILTER_HIDE_SHOW_GAP_MS,
                    generation,
                    CardStep {
                        card,
                        action: CardAction::Display,
                    },
                ));
                steps.push(Scheduled::new(
                    FILTER_HIDE_SHOW_GAP_MS + FILTER_STAGGER_MS * rank,
                    generation,
                    CardStep {
                        card,
                        action: CardAction::FadeIn,
                    },
                ));
                rank += 1;
            } else {
                steps.push(Scheduled::new(
                    FILTER_HIDE_SHOW_GAP_MS,
                    generation,
                    CardStep {
                        card,
                        action: CardAction::Hide,
                    },
                ));
            }
        }

        self.active = filter;
        steps.sort_by_key(|s| s.delay_ms);
        steps
    }

    // returns false for stale steps, which leave the cards untouched
    pub fn apply(&mut self, step: &FilterStep) -> bool {
        if !self.generation.is_current(step.generation) {
            return false;
        }

        let Some(view) = self.views.get_mut(step.action.card) else {
            return false;
        };

        match step.action.action {
            CardAction::Hide => {
                view.displayed = false;
                view.opaque = false;
            }
            CardAction::Display => view.displayed = true,
            CardAction::FadeIn => {
                view.displayed = true;
                view.opaque = true;
            }
        }

        true
    }

    pub fn generation(&self) -> Generation {
        self.generation.current()
    }
}

// Announcer
//
// text for the polite live region that tells screen readers which filter is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Announcer {
    News,
    Gallery,
    Staff,
}

impl Announcer {
    pub fn message<C: fmt::Display>(self, filter: &Filter<C>) -> String {
        match (self, filter) {
            (Announcer::News, Filter::All) => String::from("Filtered to show all news"),
            (Announcer::News, Filter::Only(c)) => format!("Filtered to show {c}"),
            (Announcer::Gallery, Filter::All) => String::from("Showing all photos"),
            (Announcer::Gallery, Filter::Only(c)) => format!("Showing {c} photos"),
            (Announcer::Staff, Filter::All) => String::from("Showing all staff"),
            (Announcer::Staff, Filter::Only(c)) => format!("Showing {c} staff"),
        }
    }

    // the news region is emptied again after a second; the others keep their text
    pub fn clear_after_ms(self) -> Option<u32> {
        match self {
            Announcer::News => Some(crate::ANNOUNCE_CLEAR_MS),
            Announcer::Gallery | Announcer::Staff => None,
        }
    }
}
