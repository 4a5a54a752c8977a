//! Google Directions HTTP adapter.
//!
//! Fetches driving routes between two coordinates and decodes each route's
//! overview polyline. Requests are blocking and never retried.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::haversine::format_km;
use crate::polyline::{Polyline, decode};
use crate::traits::{Coordinate, DirectionsProvider};

/// Road distance as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Human-readable text, e.g. "12.3 km".
    pub text: String,
    pub meters: u64,
}

/// Travel time as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelTime {
    pub text: String,
    pub seconds: u64,
}

/// A decoded route ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Polyline,
    pub distance: Option<Distance>,
    pub travel_time: Option<TravelTime>,
    pub summary: String,
}

impl Route {
    pub fn new(
        path: Polyline,
        distance: Option<Distance>,
        travel_time: Option<TravelTime>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            path,
            distance,
            travel_time,
            summary: summary.into(),
        }
    }

    /// Distance text from the service, or a great-circle estimate of the
    /// path when the service did not report one.
    pub fn distance_text(&self) -> String {
        match &self.distance {
            Some(distance) => distance.text.clone(),
            None => format_km(self.path.length_km()),
        }
    }
}

/// Body of a Directions API JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRoute {
    pub overview_polyline: EncodedPolyline,
    #[serde(default)]
    pub legs: Vec<RawLeg>,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLeg {
    #[serde(default)]
    pub distance: Option<TextValue>,
    #[serde(default)]
    pub duration: Option<TextValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}

impl DirectionsResponse {
    /// Decodes every route in the response, preserving service order.
    pub fn into_routes(self) -> Result<Vec<Route>, DirectionsError> {
        match self.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" | "NOT_FOUND" => return Err(DirectionsError::NoRoute),
            _ => {
                let message = self.error_message.unwrap_or_default();
                warn!(status = %self.status, %message, "directions request rejected");
                return Err(DirectionsError::Status {
                    status: self.status,
                    message,
                });
            }
        }

        if self.routes.is_empty() {
            return Err(DirectionsError::NoRoute);
        }

        self.routes
            .into_par_iter()
            .map(Route::try_from)
            .collect()
    }

    /// The first (preferred) route in the response.
    pub fn into_route(self) -> Result<Route, DirectionsError> {
        self.into_routes()?
            .into_iter()
            .next()
            .ok_or(DirectionsError::NoRoute)
    }
}

impl TryFrom<RawRoute> for Route {
    type Error = DirectionsError;

    fn try_from(raw: RawRoute) -> Result<Self, Self::Error> {
        let path = decode(&raw.overview_polyline.points).inspect_err(|err| {
            warn!(error = %err, summary = %raw.summary, "failed to decode route polyline");
        })?;

        let leg = raw.legs.into_iter().next();
        let (distance, travel_time) = match leg {
            Some(leg) => (
                leg.distance.map(|d| Distance {
                    text: d.text,
                    meters: d.value,
                }),
                leg.duration.map(|d| TravelTime {
                    text: d.text,
                    seconds: d.value,
                }),
            ),
            None => (None, None),
        };

        Ok(Route::new(path, distance, travel_time, raw.summary))
    }
}

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    config: DirectionsConfig,
    client: reqwest::blocking::Client,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &DirectionsConfig {
        &self.config
    }

    fn query(&self, origin: Coordinate, destination: Coordinate) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("origin", format_coordinate(origin)),
            ("destination", format_coordinate(destination)),
            ("mode", self.config.mode.clone()),
        ];
        if self.config.alternatives {
            query.push(("alternatives", "true".to_string()));
        }
        query.push(("key", self.config.api_key.clone()));
        query
    }
}

impl DirectionsProvider for DirectionsClient {
    fn routes(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<Route>, DirectionsError> {
        debug!(
            ?origin,
            ?destination,
            mode = %self.config.mode,
            alternatives = self.config.alternatives,
            "requesting directions"
        );

        let body = self
            .client
            .get(&self.config.base_url)
            .query(&self.query(origin, destination))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<DirectionsResponse>())
            .map_err(|err| err.without_url())?;

        let routes = body.into_routes()?;
        if let Some(route) = routes.first() {
            info!(
                alternatives = routes.len(),
                points = route.path.len(),
                distance = %route.distance_text(),
                "decoded directions route"
            );
        }
        Ok(routes)
    }
}

fn format_coordinate(coordinate: Coordinate) -> String {
    format!("{:.6},{:.6}", coordinate.latitude, coordinate.longitude)
}
