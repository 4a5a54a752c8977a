//! Test fixtures for directions-polyline.
//!
//! Provides:
//! - Encoded polyline reference vectors with their decoded points
//! - Canned Directions API response bodies

pub mod directions_responses;

pub use directions_responses::*;
