//! Behavior of the TriCity Builders marketing site, independent of the browser.
//!
//! The quote form flow, toast notifications and navigation state live here
//! behind small traits; `tricity_web` implements those traits against the DOM.
#![allow(missing_docs)]

pub mod config;
pub mod console;
pub mod form;
pub mod navigation;
pub mod notify;
pub mod prelude;
pub mod quote;
pub mod signal;
pub mod submit;

pub use signal::Signal;
