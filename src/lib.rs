//! # folio
//!
//! Client-side behavior for the portfolio site, compiled to WebAssembly.
//! Theme switching, scroll reveal, the portfolio category filter, the footer
//! year, navigation highlighting, and the newsletter/contact forms.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Stored/environment theme resolution and toggle |
//! | [`reveal`] | Fire-once reveal marker per observed section |
//! | [`filter`] | Category filter over project cards |
//! | [`nav`] | Home/blog link highlight from the URL fragment |
//! | [`year`] | Footer year stamp |
//! | [`forms`] | Demo forms and the live contact submission |
//! | [`config`] | Element identifiers, copy, and feature switches |
//! | [`error`] | Error types |
//! | `web` | `web-sys` adapters and page bootstrap (`hydrate` only) |
//!
//! Behavior modules never touch the DOM directly: each is built from the
//! elements it needs through small port traits, so everything outside `web`
//! runs under plain `cargo test`.

pub mod config;
pub mod error;
pub mod filter;
pub mod forms;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod year;

#[cfg(feature = "hydrate")]
pub mod web;

/// WASM entry point: install logging and bind the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        // Another logger is already installed; it receives this line.
        log::warn!("folio: console logger not installed: {err}");
    }
    if let Err(err) = web::boot::boot() {
        log::warn!("folio: boot aborted: {err}");
    }
}
