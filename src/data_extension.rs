use std::str::FromStr;

use crate::AprsError;

/// Course (degrees) and speed (knots) from a `CCC/SSS` data extension.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct CourseSpeed {
    pub course: u16,
    pub speed: u16,
}

impl FromStr for CourseSpeed {
    type Err = AprsError;

    fn from_str(input: &str) -> Result<Self, <Self as FromStr>::Err> {
        let b = input.as_bytes();
        if b.len() != 7
            || b[3] != b'/'
            || !b[..3].iter().all(u8::is_ascii_digit)
            || !b[4..].iter().all(u8::is_ascii_digit)
        {
            return Err(AprsError::InvalidCourseSpeed(input.to_owned()));
        }

        let course = input[0..3]
            .parse::<u16>()
            .map_err(|_| AprsError::InvalidCourseSpeed(input.to_owned()))?;
        if course > 360 {
            return Err(AprsError::InvalidCourseSpeed(input.to_owned()));
        }
        let speed = input[4..7]
            .parse::<u16>()
            .map_err(|_| AprsError::InvalidCourseSpeed(input.to_owned()))?;

        Ok(CourseSpeed { course, speed })
    }
}

/// Altitude in feet from a `/A=AAAAAA` comment field. Negative
/// altitudes are sent as `/A=-NNNNN`.
pub fn parse_altitude(input: &str) -> Result<i32, AprsError> {
    let digits = input
        .strip_prefix("/A=")
        .filter(|digits| digits.len() == 6)
        .ok_or_else(|| AprsError::InvalidAltitude(input.to_owned()))?;

    let (negative, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits),
    };
    if !magnitude.bytes().all(|c| c.is_ascii_digit()) {
        return Err(AprsError::InvalidAltitude(input.to_owned()));
    }

    let value = magnitude
        .parse::<i32>()
        .map_err(|_| AprsError::InvalidAltitude(input.to_owned()))?;
    Ok(if negative { -value } else { value })
}
