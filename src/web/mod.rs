//! Browser bindings (hydrate only).
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` adapts `web-sys` elements to the behavior ports, `net` provides the
//! `fetch` transport, and `boot` binds every configured behavior to the page
//! it finds.

pub mod boot;
pub mod dom;
pub mod net;
