//! Stadium lookup and distance.

use crate::catalog::Stadium;
use tracing::{debug, instrument};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Shortest term that produces suggestions.
pub const MIN_SUGGESTION_LEN: usize = 2;

/// Stadiums whose name contains `term`, ignoring case.
///
/// Blank terms and terms shorter than [`MIN_SUGGESTION_LEN`] characters
/// suggest nothing.
#[instrument(skip(stadiums), fields(stadiums = stadiums.len()))]
pub fn suggestions<'a>(stadiums: &'a [Stadium], term: &str) -> Vec<&'a Stadium> {
    let term = term.trim().to_lowercase();
    if term.chars().count() < MIN_SUGGESTION_LEN {
        return Vec::new();
    }
    let found: Vec<&Stadium> = stadiums
        .iter()
        .filter(|stadium| stadium.stadium_name().to_lowercase().contains(&term))
        .collect();
    debug!(found = found.len(), "Stadium suggestions");
    found
}

/// The stadium whose name equals `term`, ignoring case and surrounding space.
#[instrument(skip(stadiums), fields(stadiums = stadiums.len()))]
pub fn find_exact<'a>(stadiums: &'a [Stadium], term: &str) -> Option<&'a Stadium> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return None;
    }
    stadiums
        .iter()
        .find(|stadium| stadium.stadium_name().to_lowercase() == term)
}

/// Great-circle distance between two stadiums in kilometres.
///
/// `None` if either stadium has no coordinates.
#[instrument(skip_all, fields(from = %a.stadium_name(), to = %b.stadium_name()))]
pub fn distance_km(a: &Stadium, b: &Stadium) -> Option<f64> {
    let from = a.coordinates()?;
    let to = b.coordinates()?;
    Some(haversine_km(from, to))
}

/// Haversine distance between two `(lat, lon)` points in degrees.
pub fn haversine_km((lat1, lon1): (f64, f64), (lat2, lon2): (f64, f64)) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(haversine_km((40.45, -3.69), (40.45, -3.69)), 0.0);
    }

    #[test]
    fn test_quarter_meridian() {
        let d = haversine_km((0.0, 0.0), (90.0, 0.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((d - expected).abs() < 1e-6);
    }
}
