//! Saved connection profile.

pub mod storage;
mod types;

pub use types::Profile;
