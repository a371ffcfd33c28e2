use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct MemoryStore(Rc<RefCell<Option<String>>>);

impl MemoryStore {
    fn with(value: &str) -> Self {
        Self(Rc::new(RefCell::new(Some(value.to_owned()))))
    }

    fn value(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.0.borrow_mut() = Some(value.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[derive(Clone, Default)]
struct RecordingSurface {
    applied: Rc<RefCell<Vec<Theme>>>,
    label: Rc<RefCell<String>>,
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }

    fn set_label(&self, text: &str) {
        *self.label.borrow_mut() = text.to_owned();
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_accepts_only_exact_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn label_names_the_other_theme() {
    assert_eq!(Theme::Dark.toggle_label(), "Light");
    assert_eq!(Theme::Light.toggle_label(), "Dark");
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// ThemeController::init
// =============================================================

#[test]
fn init_without_preference_follows_dark_environment() {
    let surface = RecordingSurface::default();
    let controller = ThemeController::init(MemoryStore::default(), surface.clone(), true);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(*surface.applied.borrow(), [Theme::Dark]);
    assert_eq!(*surface.label.borrow(), "Light");
}

#[test]
fn init_with_stored_light_ignores_environment() {
    let controller = ThemeController::init(MemoryStore::with("light"), RecordingSurface::default(), true);
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn init_treats_invalid_stored_value_as_absent() {
    let controller = ThemeController::init(MemoryStore::with("purple"), RecordingSurface::default(), true);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.stored(), None);
}

#[test]
fn init_without_anything_defaults_to_light() {
    let controller = ThemeController::init(MemoryStore::default(), RecordingSurface::default(), false);
    assert_eq!(controller.current(), Theme::Light);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_persists_and_relabels() {
    let store = MemoryStore::default();
    let surface = RecordingSurface::default();
    let controller = ThemeController::init(store.clone(), surface.clone(), false);

    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(store.value().as_deref(), Some("dark"));
    assert_eq!(*surface.label.borrow(), "Light");
}

#[test]
fn toggle_twice_round_trips_and_persists_final_theme() {
    let store = MemoryStore::default();
    let controller = ThemeController::init(store.clone(), RecordingSurface::default(), true);
    let original = controller.current();

    controller.toggle();
    controller.toggle();

    assert_eq!(controller.current(), original);
    assert_eq!(store.value().as_deref(), Some(original.as_str()));
}

// =============================================================
// Environment changes
// =============================================================

#[test]
fn environment_change_applies_without_stored_choice() {
    let surface = RecordingSurface::default();
    let controller = ThemeController::init(MemoryStore::default(), surface.clone(), false);
    assert!(controller.on_environment_change(true));
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(*surface.label.borrow(), "Light");
}

#[test]
fn environment_change_ignored_after_toggle() {
    let controller = ThemeController::init(MemoryStore::default(), RecordingSurface::default(), false);
    controller.toggle();
    assert!(!controller.on_environment_change(false));
    assert_eq!(controller.current(), Theme::Dark);
}

#[test]
fn clear_preference_resumes_following_environment() {
    let store = MemoryStore::with("dark");
    let controller = ThemeController::init(store.clone(), RecordingSurface::default(), false);
    assert_eq!(controller.current(), Theme::Dark);

    assert_eq!(controller.clear_preference(false), Theme::Light);
    assert_eq!(store.value(), None);
    assert!(controller.on_environment_change(true));
    assert_eq!(controller.current(), Theme::Dark);
}
