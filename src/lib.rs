//! Perceptual contrast resolution: derive fill/stroke color pairs that are
//! visually distinguishable under one of several interchangeable models.
//!
//! Given two base colors (a territory color and a border color, say), a
//! [`Strategy`] produces a [`ColorPair`] of rendered color strings. The
//! Standard and Dark strategies apply fixed lightness offsets; the Contrast
//! strategy classifies candidate pairs by WCAG contrast ratio; the Lab
//! strategy runs a bounded iterative search in Lab space and fails with a
//! typed [`EngineError::NonConvergence`] rather than returning an
//! inadequate pair.
//!
//! All operations are synchronous, pure value transforms with no shared
//! state; [`engine::resolve_all`] fans a batch out over Rayon.

pub mod color;
pub mod engine;
pub mod error;
pub mod math;
pub mod strategy;
pub mod types;

pub use color::Color;
pub use engine::{orient, resolve, resolve_all};
pub use error::EngineError;
pub use strategy::Strategy;
pub use types::{ColorPair, Resolution, ResolveRequest};
