use thiserror::Error;

use crate::polyline::DecodeError;

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("directions request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directions service returned {status}: {message}")]
    Status { status: String, message: String },

    #[error("no route found between the selected points")]
    NoRoute,

    #[error("route geometry could not be decoded: {0}")]
    Decode(#[from] DecodeError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<envy::Error> for DirectionsError {
    fn from(err: envy::Error) -> Self {
        DirectionsError::Config(err.to_string())
    }
}
