//! Commit-history narrative synthesis: normalize -> persona -> patterns ->
//! achievements -> render -> story. Every stage is a pure function over
//! immutable inputs; the engine holds no state between calls.

pub mod achievements;
pub mod assemble;
pub mod config;
pub mod detect;
pub mod normalize;
pub mod persona;
pub mod render;
pub mod stats;

pub use assemble::assemble;
pub use config::EngineConfig;
