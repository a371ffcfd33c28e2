use super::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct FakeButton(Rc<Cell<bool>>);

impl FilterButton for FakeButton {
    fn set_active(&self, active: bool) {
        self.0.set(active);
    }
}

#[derive(Clone)]
struct FakeCard {
    category: String,
    hidden: Rc<Cell<bool>>,
}

impl FakeCard {
    fn tagged(category: &str) -> Self {
        Self { category: category.to_owned(), hidden: Rc::new(Cell::new(false)) }
    }
}

impl ProjectCard for FakeCard {
    fn category(&self) -> String {
        self.category.clone()
    }

    fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
    }
}

fn gallery() -> (Vec<FakeButton>, Vec<FakeCard>, PortfolioFilter<FakeButton, FakeCard>) {
    let buttons: Vec<FakeButton> = (0..3).map(|_| FakeButton::default()).collect();
    let cards = vec![FakeCard::tagged("web"), FakeCard::tagged("brand"), FakeCard::tagged("web"), FakeCard::tagged("")];
    let bound = vec![
        (Some(Filter::parse("all")), buttons[0].clone()),
        (Some(Filter::parse("web")), buttons[1].clone()),
        (Some(Filter::parse("brand")), buttons[2].clone()),
    ];
    let filter = PortfolioFilter::new(bound, cards.clone());
    (buttons, cards, filter)
}

// =============================================================
// Filter
// =============================================================

#[test]
fn parse_recognizes_all_sentinel() {
    assert_eq!(Filter::parse("all"), Filter::All);
    assert_eq!(Filter::parse("web"), Filter::Category("web".to_owned()));
}

#[test]
fn all_matches_untagged_cards() {
    assert!(Filter::All.matches(""));
    assert!(!Filter::parse("web").matches(""));
}

// =============================================================
// PortfolioFilter::select
// =============================================================

#[test]
fn starts_on_all() {
    let (_, _, filter) = gallery();
    assert_eq!(filter.active(), Filter::All);
    assert_eq!(filter.button_count(), 3);
}

#[test]
fn selecting_category_hides_other_cards() {
    let (_, cards, filter) = gallery();
    assert!(filter.select(1));
    for card in &cards {
        assert_eq!(card.hidden.get(), card.category != "web", "card {}", card.category);
    }
    assert_eq!(filter.active(), Filter::Category("web".to_owned()));
}

#[test]
fn selecting_all_shows_every_card() {
    let (_, cards, filter) = gallery();
    filter.select(2);
    filter.select(0);
    assert!(cards.iter().all(|c| !c.hidden.get()));
}

#[test]
fn only_selected_button_is_active() {
    let (buttons, _, filter) = gallery();
    filter.select(2);
    let active: Vec<bool> = buttons.iter().map(|b| b.0.get()).collect();
    assert_eq!(active, [false, false, true]);
}

#[test]
fn selecting_same_button_twice_is_idempotent() {
    let (_, cards, filter) = gallery();
    filter.select(1);
    let first: Vec<bool> = cards.iter().map(|c| c.hidden.get()).collect();
    filter.select(1);
    let second: Vec<bool> = cards.iter().map(|c| c.hidden.get()).collect();
    assert_eq!(first, second);
}

#[test]
fn out_of_range_index_changes_nothing() {
    let (buttons, cards, filter) = gallery();
    assert!(!filter.select(9));
    assert!(buttons.iter().all(|b| !b.0.get()));
    assert!(cards.iter().all(|c| !c.hidden.get()));
}

#[test]
fn marker_only_button_is_deactivated_but_not_selectable() {
    let buttons: Vec<FakeButton> = (0..2).map(|_| FakeButton::default()).collect();
    let cards = vec![FakeCard::tagged("web")];
    buttons[1].0.set(true);
    let filter = PortfolioFilter::new(
        vec![(Some(Filter::parse("web")), buttons[0].clone()), (None, buttons[1].clone())],
        cards.clone(),
    );

    assert!(filter.is_selectable(0));
    assert!(!filter.is_selectable(1));
    assert!(!filter.select(1));
    assert!(!cards[0].hidden.get());

    assert!(filter.select(0));
    assert!(buttons[0].0.get());
    assert!(!buttons[1].0.get());
}
