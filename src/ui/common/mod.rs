//! Reusable UI components shared by several sections

pub mod form;
pub mod heading;
pub mod modal;

pub use form::{FormField, TextAreaField};
pub use heading::SectionHeading;
pub use modal::DetailModal;
