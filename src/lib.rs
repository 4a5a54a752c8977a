//! directions-polyline
//!
//! Decodes the encoded route geometry returned by directions services into
//! coordinates a map can draw, plus a blocking Google Directions adapter.

pub mod traits;
pub mod polyline;
pub mod haversine;
pub mod directions;
pub mod config;
pub mod error;
pub mod telemetry;

pub use directions::{DirectionsClient, DirectionsResponse, Distance, Route, TravelTime};
pub use error::DirectionsError;
pub use polyline::{Bounds, DecodeError, Polyline, decode, encode};
pub use traits::{Coordinate, DirectionsProvider};
