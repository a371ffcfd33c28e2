//! Portfolio category filter.
//!
//! DESIGN
//! ======
//! Buttons and cards are bound once at install. Selecting a button is
//! synchronous and idempotent; nothing is persisted, so a reload starts
//! from [`Filter::All`].

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::cell::RefCell;

/// Sentinel filter value that matches every card.
pub const ALL: &str = "all";

/// Active filter selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL { Self::All } else { Self::Category(raw.to_owned()) }
    }

    /// Whether a card tagged `category` stays visible under this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category,
        }
    }
}

/// A filter button.
pub trait FilterButton {
    fn set_active(&self, active: bool);
}

/// A project card with its category tag (empty when untagged).
pub trait ProjectCard {
    fn category(&self) -> String;
    fn set_hidden(&self, hidden: bool);
}

/// Filter buttons bound to the card gallery.
///
/// A button bound without a filter only carries the active marker: it is
/// deactivated like the others but cannot be selected.
pub struct PortfolioFilter<B, C> {
    buttons: Vec<(Option<Filter>, B)>,
    cards: Vec<C>,
    active: RefCell<Filter>,
}

impl<B: FilterButton, C: ProjectCard> PortfolioFilter<B, C> {
    /// Bind buttons (with the filter each selects, if any) to the cards.
    pub fn new(buttons: Vec<(Option<Filter>, B)>, cards: Vec<C>) -> Self {
        Self { buttons, cards, active: RefCell::new(Filter::All) }
    }

    pub fn active(&self) -> Filter {
        self.active.borrow().clone()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Whether the button at `index` selects a filter.
    pub fn is_selectable(&self, index: usize) -> bool {
        matches!(self.buttons.get(index), Some((Some(_), _)))
    }

    /// Activate the button at `index` and apply its filter to every card.
    ///
    /// Returns `false` when no such button is bound or it has no filter.
    pub fn select(&self, index: usize) -> bool {
        let Some((Some(filter), _)) = self.buttons.get(index) else {
            return false;
        };
        for (i, (_, button)) in self.buttons.iter().enumerate() {
            button.set_active(i == index);
        }
        let mut shown = 0usize;
        for card in &self.cards {
            let visible = filter.matches(&card.category());
            card.set_hidden(!visible);
            shown += usize::from(visible);
        }
        log::debug!("filter selected: {filter:?}, {shown}/{} cards shown", self.cards.len());
        *self.active.borrow_mut() = filter.clone();
        true
    }
}
