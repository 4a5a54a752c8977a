//! Polyline representation for route geometries.
//!
//! Directions services ship route shapes in Google's encoded polyline
//! format: each point is a pair of fixed-point deltas against the previous
//! point, zig-zag encoded, split into 5-bit chunks and offset into printable
//! ASCII. This module decodes that format into a [`Polyline`] and encodes it
//! back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::haversine::path_length_km;
use crate::traits::Coordinate;

/// Fixed-point precision (decimal digits) used by Google Directions.
pub const DEFAULT_PRECISION: u32 = 5;

/// Highest precision accepted by the decoder and the encoder.
pub const MAX_PRECISION: u32 = 10;

const CHAR_OFFSET: u8 = 63;
const LAST_CHAR: u8 = b'~';
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u8 = 0x1f;
const CONTINUATION: u8 = 0x20;

/// Why an encoded polyline could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("encoded polyline ends inside a value at byte {position}")]
    Truncated { position: usize },
    #[error("invalid character {character:?} at byte {position}")]
    InvalidCharacter { position: usize, character: char },
    #[error("value starting at byte {position} does not fit in 64 bits")]
    Overflow { position: usize },
    #[error("unsupported precision {0}, at most {max} digits", max = MAX_PRECISION)]
    Precision(u32),
}

/// A polyline representing a route geometry as decoded coordinates.
///
/// Points keep the order they were encoded in. Repeated points are valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    /// Smallest box containing every point, `None` for an empty polyline.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points.iter().copied())
    }

    /// Great-circle length of the path in kilometers.
    pub fn length_km(&self) -> f64 {
        path_length_km(&self.points)
    }

    /// Encodes the points at the default precision.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

impl FromStr for Polyline {
    type Err = DecodeError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        decode(encoded)
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Axis-aligned latitude/longitude box.
///
/// Does not handle paths crossing the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    pub fn from_point(point: Coordinate) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = Self::from_point(points.next()?);
        for point in points {
            bounds.include(point);
        }
        Some(bounds)
    }

    /// Grows the box so it contains `point`.
    pub fn include(&mut self, point: Coordinate) {
        self.south_west.latitude = self.south_west.latitude.min(point.latitude);
        self.south_west.longitude = self.south_west.longitude.min(point.longitude);
        self.north_east.latitude = self.north_east.latitude.max(point.latitude);
        self.north_east.longitude = self.north_east.longitude.max(point.longitude);
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }
}

/// Decodes a Google encoded polyline with 5 digits of precision.
///
/// Fails on truncated input or characters outside `'?'..='~'`; a partial
/// result is never returned.
pub fn decode(encoded: &str) -> Result<Polyline, DecodeError> {
    decode_with_precision(encoded, DEFAULT_PRECISION)
}

/// Decodes an encoded polyline whose values carry `precision` decimal digits
/// (5 for Google, 6 for OSRM/Valhalla `polyline6`).
pub fn decode_with_precision(encoded: &str, precision: u32) -> Result<Polyline, DecodeError> {
    if precision > MAX_PRECISION {
        return Err(DecodeError::Precision(precision));
    }
    let factor = 10f64.powi(precision as i32);

    let mut cursor = Cursor::new(encoded);
    // Each point consumes at least two characters.
    let mut points = Vec::with_capacity(encoded.len() / 2);
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while !cursor.at_end() {
        lat = cursor.accumulate(lat)?;
        lng = cursor.accumulate(lng)?;
        points.push(Coordinate::new(lat as f64 / factor, lng as f64 / factor));
    }

    Ok(Polyline::new(points))
}

/// Encodes points as a Google polyline with 5 digits of precision.
pub fn encode(points: &[Coordinate]) -> String {
    encode_fixed(points, DEFAULT_PRECISION)
}

/// Encodes points with `precision` decimal digits.
///
/// Values are rounded to the nearest fixed-point unit; coordinates are
/// expected to be finite. Rejects the same precisions the decoder rejects.
pub fn encode_with_precision(points: &[Coordinate], precision: u32) -> Result<String, DecodeError> {
    if precision > MAX_PRECISION {
        return Err(DecodeError::Precision(precision));
    }
    Ok(encode_fixed(points, precision))
}

fn encode_fixed(points: &[Coordinate], precision: u32) -> String {
    let factor = 10f64.powi(precision as i32);
    let mut encoded = String::with_capacity(points.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = (point.latitude * factor).round() as i64;
        let lng = (point.longitude * factor).round() as i64;
        push_value(&mut encoded, lat.wrapping_sub(prev_lat));
        push_value(&mut encoded, lng.wrapping_sub(prev_lng));
        prev_lat = lat;
        prev_lng = lng;
    }

    encoded
}

fn push_value(encoded: &mut String, value: i64) {
    let mut zigzag = (value.wrapping_shl(1) ^ (value >> 63)) as u64;
    while zigzag >= u64::from(CONTINUATION) {
        let chunk = (zigzag as u8 & CHUNK_MASK) | CONTINUATION;
        encoded.push(char::from(chunk + CHAR_OFFSET));
        zigzag >>= CHUNK_BITS;
    }
    encoded.push(char::from(zigzag as u8 + CHAR_OFFSET));
}

struct Cursor<'a> {
    source: &'a str,
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            position: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Reads one delta and adds it to `total`.
    fn accumulate(&mut self, total: i64) -> Result<i64, DecodeError> {
        let start = self.position;
        let delta = self.next_delta()?;
        total
            .checked_add(delta)
            .ok_or(DecodeError::Overflow { position: start })
    }

    fn next_delta(&mut self) -> Result<i64, DecodeError> {
        let start = self.position;
        let mut result: u64 = 0;
        let mut shift: u32 = 0;

        loop {
            let Some(&raw) = self.bytes.get(self.position) else {
                tracing::trace!(position = self.position, "polyline truncated");
                return Err(DecodeError::Truncated {
                    position: self.position,
                });
            };
            if !(CHAR_OFFSET..=LAST_CHAR).contains(&raw) {
                return Err(self.invalid_character());
            }

            let byte = raw - CHAR_OFFSET;
            let bits = u64::from(byte & CHUNK_MASK);
            if shift >= u64::BITS || (bits << shift) >> shift != bits {
                return Err(DecodeError::Overflow { position: start });
            }
            result |= bits << shift;
            shift += CHUNK_BITS;
            self.position += 1;

            if byte < CONTINUATION {
                break;
            }
        }

        // result >> 1 always fits in an i64.
        let magnitude = (result >> 1) as i64;
        Ok(if result & 1 == 1 { !magnitude } else { magnitude })
    }

    fn invalid_character(&self) -> DecodeError {
        // Every byte before `position` was ASCII, so it is a char boundary.
        let character = self.source[self.position..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        tracing::trace!(position = self.position, ?character, "invalid polyline character");
        DecodeError::InvalidCharacter {
            position: self.position,
            character,
        }
    }
}
