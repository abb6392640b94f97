//! Hero record and its view models

mod hero;
mod patch;
mod views;

pub use hero::Hero;
pub use patch::Patch;
pub use views::{HeroCreate, HeroPublic, HeroUpdate};
