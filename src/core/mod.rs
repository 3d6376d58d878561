//! Framework-free logic for the landing page: static content, the motion
//! model and the transient interaction state

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod interaction;
pub mod motion;

pub use contact::{ContactField, ContactForm, ContactFormError, ContactSubmission};
pub use interaction::{Accordion, ChatFeed, ModalEvent, NavState, Selection};
