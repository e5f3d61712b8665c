use crate::data_extension::{parse_altitude, CourseSpeed};
use crate::lonlat::{Latitude, Longitude};
use crate::Timestamp;

/// The fixed-width block at the start of a position report body, read
/// left to right. Every piece is optional; a piece that does not match
/// is left out and the next one is tried at the same offset.
#[derive(PartialEq, Debug, Clone)]
pub(crate) struct AprsPosition<'a> {
    pub timestamp: Option<Timestamp>,
    pub latitude: Option<Latitude>,
    pub longitude: Option<Longitude>,
    pub symbol_table: Option<char>,
    pub symbol_code: Option<char>,
    pub course_speed: Option<CourseSpeed>,
    pub altitude: Option<i32>,
    pub comment: &'a str,
}

struct Location {
    latitude: Latitude,
    longitude: Longitude,
    symbol_table: char,
    symbol_code: char,
}

impl<'a> AprsPosition<'a> {
    pub fn parse(s: &'a str) -> Self {
        let mut rest = s;

        let timestamp = take(&mut rest, 7, |t| t.parse::<Timestamp>().ok());
        let location = take(&mut rest, 19, parse_location);
        let course_speed = take(&mut rest, 7, |cs| cs.parse::<CourseSpeed>().ok());
        let altitude = take(&mut rest, 9, |a| parse_altitude(a).ok());

        let mut latitude = location.as_ref().map(|l| l.latitude);
        let mut longitude = location.as_ref().map(|l| l.longitude);

        // precision enhancement, `!Wab!`
        let mut comment = rest.trim();
        if let Some((lat_digit, lon_digit, tail)) = precision_enhancement(comment) {
            latitude = latitude.map(|lat| lat.enhanced(lat_digit));
            longitude = longitude.map(|lon| lon.enhanced(lon_digit));
            comment = tail.trim_start();
        }

        AprsPosition {
            timestamp,
            latitude,
            longitude,
            symbol_table: location.as_ref().map(|l| l.symbol_table),
            symbol_code: location.as_ref().map(|l| l.symbol_code),
            course_speed,
            altitude,
            comment,
        }
    }
}

/// Consume `len` bytes from the front of `rest` if `parse` accepts them.
fn take<'a, T>(rest: &mut &'a str, len: usize, parse: impl FnOnce(&'a str) -> Option<T>) -> Option<T> {
    let head = rest.get(..len)?;
    let value = parse(head)?;
    *rest = &rest[len..];
    Some(value)
}

fn parse_location(s: &str) -> Option<Location> {
    let latitude = s.get(0..8)?.parse().ok()?;
    let symbol_table = s.get(8..9)?.chars().next()?;
    let longitude = s.get(9..18)?.parse().ok()?;
    let symbol_code = s.get(18..19)?.chars().next()?;

    // '/' = primary table, '\' = alternate table, otherwise an overlay
    let table_ok = symbol_table == '/'
        || symbol_table == '\\'
        || symbol_table.is_ascii_uppercase()
        || symbol_table.is_ascii_digit();
    if !table_ok {
        return None;
    }

    Some(Location {
        latitude,
        longitude,
        symbol_table,
        symbol_code,
    })
}

fn precision_enhancement(s: &str) -> Option<(u8, u8, &str)> {
    let b = s.as_bytes();
    if b.len() < 5 || &b[..2] != b"!W" || b[4] != b'!' {
        return None;
    }
    if !b[2].is_ascii_digit() || !b[3].is_ascii_digit() {
        return None;
    }
    if b.get(5).is_some_and(|c| !c.is_ascii_whitespace()) {
        return None;
    }
    Some((b[2] - b'0', b[3] - b'0', &s[5..]))
}
