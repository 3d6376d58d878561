//! Landing page sections, top to bottom.
//!
//! Each section owns its reveal triggers and any interactive state; nothing
//! is shared between them except the motion config from context.

mod automation;
mod case_studies;
mod companies;
mod contact;
mod faq;
mod final_cta;
mod footer;
mod hero;
mod navigation;
mod pricing;
mod process;
mod solutions;
mod stats;
mod team;
mod testimonials;

pub use automation::Automation;
pub use case_studies::CaseStudies;
pub use companies::Companies;
pub use contact::Contact;
pub use faq::Faq;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use hero::{Hero, ParticleBackdrop, headline_timeline};
pub use navigation::Navigation;
pub use pricing::Pricing;
pub use process::Process;
pub use solutions::Solutions;
pub use stats::Stats;
pub use team::Team;
pub use testimonials::Testimonials;
