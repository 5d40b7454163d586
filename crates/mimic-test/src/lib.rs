//! Mimic Test Harness
//!
//! This crate provides:
//! - Seeded synthetic skeletons and capture windows
//! - Tracker-shaped flat frames for boundary testing
//! - End-to-end integration tests across core, scoring and game

pub mod generator;
pub mod integration;

pub use generator::*;
