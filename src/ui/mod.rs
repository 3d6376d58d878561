pub mod common;
pub mod icon;
pub mod motion;
pub mod pages;
pub mod sections;

pub use icon::{Icon, icons};
pub use motion::{provide_motion_context, use_motion_config};
