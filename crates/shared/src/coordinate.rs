use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> crate::Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(crate::Error::InvalidCoordinate(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(crate::Error::InvalidCoordinate(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Renders as `lat,lon`, the shape the `location` request header expects.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat, lon)) = s.split_once(',') else {
            return Err(crate::Error::InvalidCoordinate(format!(
                "expected `lat,lon`, got `{s}`"
            )));
        };

        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|e| crate::Error::InvalidCoordinate(format!("`{value}`: {e}")))
        };

        Self::new(parse(lat)?, parse(lon)?)
    }
}
