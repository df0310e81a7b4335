//! Location capabilities for the terminal frontend.
//!
//! A terminal has no GPS, so the position comes from the environment
//! (`CLUTCH_LAT` / `CLUTCH_LNG`) or from a pinned configuration value. When
//! neither is available the interface keeps the default coordinates.

use async_trait::async_trait;

use clutch_app::{Coordinates, LocationError, LocationProvider};

/// Environment variable holding the latitude reading.
pub const ENV_LAT: &str = "CLUTCH_LAT";

/// Environment variable holding the longitude reading.
pub const ENV_LNG: &str = "CLUTCH_LNG";

/// Parses optional latitude/longitude readings into coordinates.
///
/// Both readings must be present, parse as `f64` and fall inside the valid
/// degree ranges. NaN never passes the range checks.
pub fn parse_coordinates(
    lat: Option<&str>,
    lng: Option<&str>,
) -> Result<Coordinates, LocationError> {
    let lat = lat.ok_or_else(|| LocationError::unavailable("no latitude reading"))?;
    let lng = lng.ok_or_else(|| LocationError::unavailable("no longitude reading"))?;

    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| LocationError::invalid_reading("latitude", lat))?;
    let longitude: f64 = lng
        .trim()
        .parse()
        .map_err(|_| LocationError::invalid_reading("longitude", lng))?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(LocationError::invalid_reading("latitude", lat));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(LocationError::invalid_reading("longitude", lng));
    }
    Ok(Coordinates {
        latitude,
        longitude,
    })
}

/// Reads the position from `CLUTCH_LAT` / `CLUTCH_LNG`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvLocationProvider;

#[async_trait]
impl LocationProvider for EnvLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let lat = std::env::var(ENV_LAT).ok();
        let lng = std::env::var(ENV_LNG).ok();
        parse_coordinates(lat.as_deref(), lng.as_deref())
    }
}

/// Serves a position pinned in configuration.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    coordinates: Coordinates,
}

impl FixedLocationProvider {
    /// Creates a provider that always reports `coordinates`.
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coordinates)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn both_readings_parse() {
        let coords = parse_coordinates(Some("51.5074"), Some("-0.1278")).unwrap();
        assert!((coords.latitude - 51.5074).abs() < f64::EPSILON);
        assert!((coords.longitude + 0.1278).abs() < f64::EPSILON);
    }

    #[test]
    fn readings_are_trimmed() {
        let coords = parse_coordinates(Some(" 10.0 "), Some("\t20.0")).unwrap();
        assert!((coords.latitude - 10.0).abs() < f64::EPSILON);
        assert!((coords.longitude - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_readings_are_unavailable() {
        assert!(matches!(
            parse_coordinates(None, Some("0")),
            Err(LocationError::Unavailable { .. })
        ));
        assert!(matches!(
            parse_coordinates(Some("0"), None),
            Err(LocationError::Unavailable { .. })
        ));
    }

    #[test]
    fn garbage_readings_are_invalid() {
        let err = parse_coordinates(Some("north"), Some("0")).unwrap_err();
        assert_eq!(err, LocationError::invalid_reading("latitude", "north"));
    }

    #[test]
    fn out_of_range_readings_are_invalid() {
        assert!(parse_coordinates(Some("90.5"), Some("0")).is_err());
        assert!(parse_coordinates(Some("0"), Some("-180.5")).is_err());
        assert!(parse_coordinates(Some("NaN"), Some("0")).is_err());
    }

    #[tokio::test]
    async fn fixed_provider_reports_its_coordinates() {
        let fix = Coordinates {
            latitude: 35.6762,
            longitude: 139.6503,
        };
        let provider = FixedLocationProvider::new(fix);
        assert_eq!(provider.current_position().await.unwrap(), fix);
    }

    proptest! {
        #[test]
        fn in_range_readings_always_parse(
            lat in -90.0f64..=90.0,
            lng in -180.0f64..=180.0,
        ) {
            let coords =
                parse_coordinates(Some(&lat.to_string()), Some(&lng.to_string())).unwrap();
            prop_assert!((coords.latitude - lat).abs() < 1e-9);
            prop_assert!((coords.longitude - lng).abs() < 1e-9);
        }
    }
}
