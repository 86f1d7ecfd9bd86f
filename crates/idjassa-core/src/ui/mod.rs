//! Presentation helpers shared by every page.
//!
//! - `badge`: trust tier pills
//! - `toast`: the single notification element and its hide timer
//! - `nav`: guest / signed-in navbar toggle
//! - `dom`: the minimal page abstraction the helpers write to
//! - `styles`: colours, display values and escaping

pub mod badge;
pub mod dom;
pub mod nav;
pub mod styles;
pub mod toast;

pub use badge::{badge_html, BadgeTier};
pub use dom::{Dom, Element, MemoryDom};
pub use nav::init_nav;
pub use toast::{Severity, ToastElement, Toaster, TOAST_DURATION};
