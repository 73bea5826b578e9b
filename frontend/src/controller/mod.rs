//! Page state that doesn't touch the DOM: which section is active, which
//! headline word is showing, and where the contact form submission stands.
//!
//! Browser access goes through the small capability traits defined here
//! (`LayoutQuery`, `ScrollSource`, `Scheduler`, `FormRelay`, `Notifier`);
//! `crate::dom` and `crate::components::toaster` implement them.

pub mod contact;
pub mod events;
pub mod navigation;
pub mod rotation;
pub mod toast;
