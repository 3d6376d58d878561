//! Routed pages: the landing page and the 404 fallback

mod landing;
mod not_found;

pub use landing::{LandingPage, LandingSections};
pub use not_found::NotFoundPage;
