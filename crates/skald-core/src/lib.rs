pub mod ids;
pub mod pattern;
pub mod persona;
pub mod story;
pub mod timefmt;
pub mod types;

pub use types::*;
