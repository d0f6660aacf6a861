//! Pure value utilities shared across the workspace

pub mod duration;
