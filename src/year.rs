//! Footer year stamp.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// Element whose text can be replaced.
pub trait TextSlot {
    fn set_text(&self, text: &str);
}

/// Write `year` into the placeholder.
pub fn stamp<T: TextSlot>(slot: &T, year: u32) {
    slot.set_text(&year.to_string());
}

/// Calendar year of the visitor's clock.
#[cfg(feature = "hydrate")]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
