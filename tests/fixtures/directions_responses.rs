//! Directions API bodies and polyline vectors.

#![allow(dead_code)]

/// Google's published example polyline.
pub const REFERENCE_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

pub const REFERENCE_POINTS: [(f64, f64); 3] =
    [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];

/// Bengaluru to Chennai with a repeated point in the middle.
pub const BENGALURU_CHENNAI_POLYLINE: &str = "oodnAgerxMoAoA??{rTcriO";

pub const BENGALURU_CHENNAI_POINTS: [(f64, f64); 4] = [
    (12.9716, 77.5946),
    (12.972, 77.595),
    (12.972, 77.595),
    (13.0827, 80.2707),
];

/// Sydney followed by both corners of the coordinate range.
pub const EXTREMES_POLYLINE: &str = "`yumEwt{y[ap@wO~ysuInmpd~@_gsia@_ogtcA";

pub const EXTREMES_POINTS: [(f64, f64); 4] = [
    (-33.86785, 151.20732),
    (-33.86, 151.21),
    (-90.0, -180.0),
    (90.0, 180.0),
];

/// Center of India, the route screen's initial region.
pub const SINGLE_POINT_POLYLINE: &str = "seu|Bcm}`N";

pub const OK_RESPONSE: &str = r#"{
  "geocoded_waypoints": [
    { "geocoder_status": "OK", "place_id": "ChIJbU60yXAWrjsR4E9-UejD3_g" },
    { "geocoder_status": "OK", "place_id": "ChIJYTN9T-plUjoRM9RjaAunYW4" }
  ],
  "routes": [
    {
      "bounds": {
        "northeast": { "lat": 13.0827, "lng": 80.2707 },
        "southwest": { "lat": 12.9716, "lng": 77.5946 }
      },
      "legs": [
        {
          "distance": { "text": "346 km", "value": 346012 },
          "duration": { "text": "6 hours 5 mins", "value": 21900 },
          "end_address": "Chennai, Tamil Nadu, India",
          "start_address": "Bengaluru, Karnataka, India",
          "steps": []
        }
      ],
      "overview_polyline": { "points": "oodnAgerxMoAoA??{rTcriO" },
      "summary": "NH 48",
      "warnings": [],
      "waypoint_order": []
    }
  ],
  "status": "OK"
}"#;

pub const ALTERNATIVES_RESPONSE: &str = r#"{
  "routes": [
    {
      "legs": [{ "distance": { "text": "346 km", "value": 346012 } }],
      "overview_polyline": { "points": "oodnAgerxMoAoA??{rTcriO" },
      "summary": "NH 48"
    },
    {
      "legs": [{ "distance": { "text": "372 km", "value": 371840 } }],
      "overview_polyline": { "points": "seu|Bcm}`N" },
      "summary": "NH 75"
    }
  ],
  "status": "OK"
}"#;

pub const ZERO_RESULTS_RESPONSE: &str = r#"{ "geocoded_waypoints": [], "routes": [], "status": "ZERO_RESULTS" }"#;

pub const DENIED_RESPONSE: &str = r#"{
  "error_message": "The provided API key is invalid.",
  "routes": [],
  "status": "REQUEST_DENIED"
}"#;

pub const BROKEN_POLYLINE_RESPONSE: &str = r#"{
  "routes": [
    {
      "legs": [],
      "overview_polyline": { "points": "oodnAgerxMoAoA??{rT" },
      "summary": "NH 48"
    }
  ],
  "status": "OK"
}"#;
