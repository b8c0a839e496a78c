//! # Distance Calculator
//!
//! Great-circle distances between coordinate pairs (haversine on a spherical Earth) and the
//! labels shown next to each shop. Coordinates arrive as `"lat, lon"` text from the geocoder
//! and are parsed with [`Coordinates::from_str`](std::str::FromStr).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Sort key for shops whose distance cannot be computed. Larger than any real distance.
pub const UNKNOWN_DISTANCE_KM: f64 = 99_999.0;

/// Great-circle distance in kilometres between two points given in decimal degrees.
///
/// Total over finite inputs, symmetric, and zero for identical points.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Renders a distance: whole metres below 1 km, kilometres with one decimal otherwise.
///
/// ```
/// use shop_dispatch::geo::format_distance;
/// assert_eq!(format_distance(0.45), "450 m");
/// assert_eq!(format_distance(3.27), "3.3 km");
/// ```
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1} km", km)
    }
}

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Text that does not match `-?digits(.digits)?,\s*-?digits(.digits)?`, or a point outside
/// ±90° latitude / ±180° longitude.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid coordinates: {0:?}")]
pub struct CoordinateParseError(pub String);

impl FromStr for Coordinates {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordinateParseError(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let lon = lon.trim_start_matches(|c: char| c.is_whitespace());
        match (parse_decimal(lat), parse_decimal(lon)) {
            (Some(latitude), Some(longitude)) if latitude.abs() <= 90.0 && longitude.abs() <= 180.0 => {
                Ok(Self::new(latitude, longitude))
            }
            _ => Err(invalid()),
        }
    }
}

/// Parses `-?digits(.digits)?` exactly. No exponent, no leading `+`, no surrounding spaces.
fn parse_decimal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !fraction.map_or(true, all_digits) {
        return None;
    }
    text.parse().ok().filter(|value: &f64| value.is_finite())
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Distance from the customer to a shop, or `Unknown` when either side has no coordinates
/// or the distance is not a finite number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Known(f64),
    Unknown,
}

impl Distance {
    pub fn between(from: Option<&Coordinates>, to: Option<&Coordinates>) -> Self {
        match (from, to) {
            (Some(a), Some(b)) => {
                let km = a.distance_to(b);
                if km.is_finite() {
                    Distance::Known(km)
                } else {
                    Distance::Unknown
                }
            }
            _ => Distance::Unknown,
        }
    }

    /// Kilometres, with unknown distances mapped to [`UNKNOWN_DISTANCE_KM`].
    pub fn sort_key(&self) -> f64 {
        match self {
            Distance::Known(km) => *km,
            Distance::Unknown => UNKNOWN_DISTANCE_KM,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Distance::Known(km) => format_distance(*km),
            Distance::Unknown => "Unknown".to_string(),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Serde adapter storing `Option<Coordinates>` as its `"lat, lon"` text.
///
/// Absent coordinates serialize as `""`; text that does not parse reads back as `None`.
pub mod coordinate_text {
    use super::Coordinates;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Coordinates>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(coordinates) => serializer.collect_str(coordinates),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Coordinates>, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.and_then(|t| t.parse().ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUNE: Coordinates = Coordinates {
        latitude: 18.5204,
        longitude: 73.8567,
    };
    const MUMBAI: Coordinates = Coordinates {
        latitude: 19.0760,
        longitude: 72.8777,
    };

    #[test]
    fn distance_is_symmetric() {
        let ab = PUNE.distance_to(&MUMBAI);
        let ba = MUMBAI.distance_to(&PUNE);
        assert!((ab - ba).abs() < 1e-9);
        // Roughly 120 km apart.
        assert!((115.0..125.0).contains(&ab), "got {ab}");
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance(12.5, -45.25, 12.5, -45.25), 0.0);
    }

    #[test]
    fn formats_metres_and_kilometres() {
        assert_eq!(format_distance(0.45), "450 m");
        assert_eq!(format_distance(3.27), "3.3 km");
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(1.0), "1.0 km");
        assert_eq!(Distance::Unknown.label(), "Unknown");
    }

    #[test]
    fn parses_geocoder_text() {
        assert_eq!("18.5204, 73.8567".parse::<Coordinates>().unwrap(), PUNE);
        assert_eq!(
            "-33,151.2".parse::<Coordinates>().unwrap(),
            Coordinates::new(-33.0, 151.2)
        );
        assert_eq!(PUNE.to_string(), "18.5204, 73.8567");
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "18.5", "abc, def", "18.5 ,73.8", "+18.5, 73.8", "18., 73.8", "1e3, 2", " 18.5, 73.8"] {
            assert!(text.parse::<Coordinates>().is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn rejects_overflowing_and_out_of_range_points() {
        let huge = format!("{}, 1", "9".repeat(400));
        for text in [huge.as_str(), "91, 0", "-90.5, 0", "0, 180.01", "45, -200"] {
            assert!(text.parse::<Coordinates>().is_err(), "{text:?} should not parse");
        }
        assert!("90, -180".parse::<Coordinates>().is_ok());
    }

    #[test]
    fn non_finite_distance_is_unknown() {
        let broken = Coordinates::new(f64::INFINITY, 1.0);
        let distance = Distance::between(Some(&PUNE), Some(&broken));
        assert_eq!(distance, Distance::Unknown);
        assert_eq!(distance.label(), "Unknown");
    }

    #[test]
    fn unknown_sorts_after_any_real_distance() {
        let unknown = Distance::between(None, Some(&PUNE));
        assert_eq!(unknown, Distance::Unknown);
        assert!(unknown.sort_key() > Distance::between(Some(&PUNE), Some(&MUMBAI)).sort_key());
    }
}
