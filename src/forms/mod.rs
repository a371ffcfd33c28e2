//! Form submission behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! `demo` covers placeholder forms that acknowledge and reset without any
//! network call. `contact` is the live submission state machine. Both
//! intercept the native submit; the glue layer cancels default navigation
//! before handing control here.

pub mod contact;
pub mod demo;

/// Named string fields of a form, in document order.
pub type FormFields = Vec<(String, String)>;
