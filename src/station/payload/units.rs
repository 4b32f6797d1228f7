// Coded values found in Tempest observations

use super::info::PrecipitationType;
use crate::error::{DecodeError, Result};

const PRECIPITATION_TYPE: &str = "precipitation type";

/// Translates the SKY module precipitation code (0 = none, 1 = rain, 2 = hail).
pub fn precipitation_type(code: i64) -> Result<PrecipitationType> {
    match code {
        0 => Ok(PrecipitationType::None),
        1 => Ok(PrecipitationType::Rain),
        2 => Ok(PrecipitationType::Hail),
        _ => Err(DecodeError::UnknownEnumValue {
            field: PRECIPITATION_TYPE,
            value: code,
        }),
    }
}

/// Translates the Tempest device precipitation code, which adds 3 = rain + hail.
pub fn station_precipitation_type(code: i64) -> Result<PrecipitationType> {
    match code {
        3 => Ok(PrecipitationType::RainAndHail),
        _ => precipitation_type(code),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Octant {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Octant {
    pub fn long_name(&self) -> &'static str {
        match self {
            Octant::North => "North",
            Octant::Northeast => "Northeast",
            Octant::East => "East",
            Octant::Southeast => "Southeast",
            Octant::South => "South",
            Octant::Southwest => "Southwest",
            Octant::West => "West",
            Octant::Northwest => "Northwest",
        }
    }

    pub fn short_code(&self) -> &'static str {
        match self {
            Octant::North => "N",
            Octant::Northeast => "NE",
            Octant::East => "E",
            Octant::Southeast => "SE",
            Octant::South => "S",
            Octant::Southwest => "SW",
            Octant::West => "W",
            Octant::Northwest => "NW",
        }
    }
}

/// Compass sector for a wind direction in degrees.
///
/// Sectors are 45 degrees wide and centered on the cardinal and intercardinal
/// points, North wrapping across 0/360. The input is not range checked:
/// negative values land in North, and a value no sector accepts
/// (NaN, or exactly 337.5) gives `None`. There is no error or placeholder
/// sector for those; callers decide how to show a missing octant.
pub fn compass_octant(degrees: f64) -> Option<Octant> {
    if degrees < 22.5 || degrees > 337.5 {
        Some(Octant::North)
    } else if degrees >= 22.5 && degrees < 67.5 {
        Some(Octant::Northeast)
    } else if degrees >= 67.5 && degrees < 112.5 {
        Some(Octant::East)
    } else if degrees >= 112.5 && degrees < 157.5 {
        Some(Octant::Southeast)
    } else if degrees >= 157.5 && degrees < 202.5 {
        Some(Octant::South)
    } else if degrees >= 202.5 && degrees < 247.5 {
        Some(Octant::Southwest)
    } else if degrees >= 247.5 && degrees < 292.5 {
        Some(Octant::West)
    } else if degrees >= 292.5 && degrees < 337.5 {
        Some(Octant::Northwest)
    } else {
        None
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_precipitation_codes() {
        assert_eq!(precipitation_type(0), Ok(PrecipitationType::None));
        assert_eq!(precipitation_type(1), Ok(PrecipitationType::Rain));
        assert_eq!(precipitation_type(2), Ok(PrecipitationType::Hail));
        assert_eq!(
            precipitation_type(3),
            Err(DecodeError::UnknownEnumValue {
                field: PRECIPITATION_TYPE,
                value: 3
            })
        );
        assert!(precipitation_type(-1).is_err());
    }

    #[test]
    fn station_precipitation_accepts_rain_and_hail() {
        assert_eq!(
            station_precipitation_type(3),
            Ok(PrecipitationType::RainAndHail)
        );
        assert_eq!(station_precipitation_type(1), Ok(PrecipitationType::Rain));
        assert!(station_precipitation_type(4).is_err());
    }

    #[test]
    fn octant_sectors() {
        assert_eq!(compass_octant(0.0), Some(Octant::North));
        assert_eq!(compass_octant(22.4), Some(Octant::North));
        assert_eq!(compass_octant(22.5), Some(Octant::Northeast));
        assert_eq!(compass_octant(90.0), Some(Octant::East));
        assert_eq!(compass_octant(128.0), Some(Octant::Southeast));
        assert_eq!(compass_octant(187.0), Some(Octant::South));
        assert_eq!(compass_octant(202.5), Some(Octant::Southwest));
        assert_eq!(compass_octant(270.0), Some(Octant::West));
        assert_eq!(compass_octant(300.0), Some(Octant::Northwest));
        assert_eq!(compass_octant(337.6), Some(Octant::North));
        assert_eq!(compass_octant(360.0), Some(Octant::North));
    }

    #[test]
    fn octant_out_of_range() {
        assert_eq!(compass_octant(-10.0), Some(Octant::North));
        assert_eq!(compass_octant(725.0), Some(Octant::North));
        assert_eq!(compass_octant(337.5), None);
        assert_eq!(compass_octant(f64::NAN), None);
    }

    #[test]
    fn octant_names() {
        let octant = compass_octant(45.0).unwrap();
        assert_eq!(octant.long_name(), "Northeast");
        assert_eq!(octant.short_code(), "NE");
    }

    #[test]
    fn fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }
}
