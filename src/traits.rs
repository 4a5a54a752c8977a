//! Core domain types and traits for route geometry.
//!
//! These are intentionally minimal. The map surface and the directions
//! service talk to the crate through them.

use serde::{Deserialize, Serialize};

use crate::directions::Route;
use crate::error::DirectionsError;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both axes are finite and within the geographic range.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}

/// Provides driving routes between two coordinates.
///
/// Implementations return every alternative the service offers, best first.
pub trait DirectionsProvider {
    fn routes(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<Route>, DirectionsError>;

    /// The preferred route between `origin` and `destination`.
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, DirectionsError> {
        self.routes(origin, destination)?
            .into_iter()
            .next()
            .ok_or(DirectionsError::NoRoute)
    }
}
