//! Small decoders for the unit-suffixed tokens OGN appends to its
//! beacons (`+020fpm`, `55.2dB`, `gps4x6`, ...).

use std::str::FromStr;

/// Parse a plain decimal number with an optional sign. Exponents,
/// `inf` and `NaN` are rejected even though `f64::from_str` takes them.
pub(crate) fn number<T: FromStr>(s: &str) -> Option<T> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    let well_formed = !digits.is_empty()
        && digits.bytes().any(|c| c.is_ascii_digit())
        && digits.bytes().all(|c| c.is_ascii_digit() || c == b'.');
    if !well_formed {
        return None;
    }
    s.parse().ok()
}

/// `with_unit("55.2dB", "dB") == Some(55.2)`
pub(crate) fn with_unit<T: FromStr>(token: &str, unit: &str) -> Option<T> {
    token.strip_suffix(unit).and_then(number)
}

/// `with_prefix("CPU:0.4", "CPU:") == Some(0.4)`
pub(crate) fn with_prefix<T: FromStr>(token: &str, prefix: &str) -> Option<T> {
    token.strip_prefix(prefix).and_then(number)
}

/// `pair("4x6", 'x') == Some((4, 6))`
pub(crate) fn pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let (first, second) = s.split_once(separator)?;
    Some((number(first)?, number(second)?))
}

/// The tail of `token` after `prefix` when it is a non-empty run of hex
/// digits.
pub(crate) fn hex_tail<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    token
        .strip_prefix(prefix)
        .filter(|tail| !tail.is_empty() && tail.bytes().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(number::<f64>("+0.0"), Some(0.0));
        assert_eq!(number::<f64>("-6.2"), Some(-6.2));
        assert_eq!(number::<i32>("+020"), Some(20));
        assert_eq!(number::<f64>("NaN"), None);
        assert_eq!(number::<f64>("inf"), None);
        assert_eq!(number::<f64>("1e5"), None);
        assert_eq!(number::<f64>("+"), None);
        assert_eq!(number::<f64>("."), None);
    }

    #[test]
    fn units() {
        assert_eq!(with_unit::<f64>("55.2dB", "dB"), Some(55.2));
        assert_eq!(with_unit::<f64>("-6.2kHz", "kHz"), Some(-6.2));
        assert_eq!(with_unit::<u32>("0e", "e"), Some(0));
        assert_eq!(with_unit::<f64>("55.2dB", "kHz"), None);
        assert_eq!(with_unit::<f64>("dB", "dB"), None);
    }

    #[test]
    fn prefixes() {
        assert_eq!(with_prefix::<f64>("FL001.03", "FL"), Some(1.03));
        assert_eq!(with_prefix::<f64>("FLARM", "FL"), None);
    }

    #[test]
    fn pairs() {
        assert_eq!(pair::<u32>("4x6", 'x'), Some((4, 6)));
        assert_eq!(pair::<f64>("755.4/970.8", '/'), Some((755.4, 970.8)));
        assert_eq!(pair::<u32>("4x", 'x'), None);
        assert_eq!(pair::<u32>("46", 'x'), None);
    }

    #[test]
    fn hex_tails() {
        assert_eq!(hex_tail("id06DF0A52", "id"), Some("06DF0A52"));
        assert_eq!(hex_tail("hearD7EA", "hear"), Some("D7EA"));
        assert_eq!(hex_tail("idle", "id"), None);
        assert_eq!(hex_tail("id", "id"), None);
    }
}
