use std::ops::Deref;
use std::str::FromStr;

use serde::Serialize;

use crate::AprsError;

/// Latitude in decimal degrees, south negative.
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy, Serialize)]
pub struct Latitude(f64);

/// Longitude in decimal degrees, west negative.
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy, Serialize)]
pub struct Longitude(f64);

impl Deref for Latitude {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Longitude {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Latitude {
    /// Apply the third decimal of the minutes sent in a `!Wab!` token.
    pub fn enhanced(self, digit: u8) -> Self {
        Latitude(enhance(self.0, digit))
    }
}

impl Longitude {
    /// Apply the third decimal of the minutes sent in a `!Wab!` token.
    pub fn enhanced(self, digit: u8) -> Self {
        Longitude(enhance(self.0, digit))
    }
}

fn enhance(value: f64, digit: u8) -> f64 {
    let delta = f64::from(digit) / 1000.0 / 60.0;
    value + delta.copysign(value)
}

/// Parse `DDMM.mm` / `DDDMM.mm` into decimal degrees.
fn degrees_minutes(s: &str, degree_digits: usize) -> Option<f64> {
    let b = s.as_bytes();
    if b.len() != degree_digits + 5 || b[degree_digits + 2] != b'.' {
        return None;
    }
    let digits_ok = b
        .iter()
        .enumerate()
        .all(|(i, c)| i == degree_digits + 2 || c.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let deg = s[..degree_digits].parse::<f64>().ok()?;
    let min = s[degree_digits..].parse::<f64>().ok()?;
    if min >= 60.0 {
        return None;
    }

    Some(deg + min / 60.0)
}

impl FromStr for Latitude {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.is_char_boundary(7) {
            return Err(AprsError::InvalidLatitude(s.to_owned()));
        }

        let value = degrees_minutes(&s[..7], 2)
            .filter(|value| *value <= 90.0)
            .ok_or_else(|| AprsError::InvalidLatitude(s.to_owned()))?;

        match &s[7..] {
            "N" => Ok(Latitude(value)),
            "S" => Ok(Latitude(-value)),
            _ => Err(AprsError::InvalidLatitude(s.to_owned())),
        }
    }
}

impl FromStr for Longitude {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 9 || !s.is_char_boundary(8) {
            return Err(AprsError::InvalidLongitude(s.to_owned()));
        }

        let value = degrees_minutes(&s[..8], 3)
            .filter(|value| *value <= 180.0)
            .ok_or_else(|| AprsError::InvalidLongitude(s.to_owned()))?;

        match &s[8..] {
            "E" => Ok(Longitude(value)),
            "W" => Ok(Longitude(-value)),
            _ => Err(AprsError::InvalidLongitude(s.to_owned())),
        }
    }
}
