use std::str::FromStr;

use serde::Serialize;

use crate::AprsError;

#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize)]
pub enum Timestamp {
    /// Day of month, Hour and Minute in UTC
    DDHHMM(u8, u8, u8),
    /// Hour, Minute and Second in UTC
    HHMMSS(u8, u8, u8),
}

impl FromStr for Timestamp {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let b = s.as_bytes();

        if b.len() != 7 || !b[..6].iter().all(u8::is_ascii_digit) {
            return Err(AprsError::InvalidTimestamp(s.to_owned()));
        }

        let one = (b[0] - b'0') * 10 + (b[1] - b'0');
        let two = (b[2] - b'0') * 10 + (b[3] - b'0');
        let three = (b[4] - b'0') * 10 + (b[5] - b'0');

        Ok(match b[6] {
            b'z' | b'/' if (1..=31).contains(&one) && two < 24 && three < 60 => {
                Timestamp::DDHHMM(one, two, three)
            }
            b'h' if one < 24 && two < 60 && three < 60 => Timestamp::HHMMSS(one, two, three),
            _ => return Err(AprsError::InvalidTimestamp(s.to_owned())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ddhhmm() {
        assert_eq!("122345z".parse(), Ok(Timestamp::DDHHMM(12, 23, 45)));
        assert_eq!("122345/".parse(), Ok(Timestamp::DDHHMM(12, 23, 45)));
    }

    #[test]
    fn parse_hhmmss() {
        assert_eq!("220132h".parse(), Ok(Timestamp::HHMMSS(22, 1, 32)));
    }

    #[test]
    fn parse_out_of_range() {
        assert_eq!(
            "250000h".parse::<Timestamp>(),
            Err(AprsError::InvalidTimestamp("250000h".to_owned()))
        );
    }

    #[test]
    fn invalid_timestamp() {
        assert_eq!(
            "1234567".parse::<Timestamp>(),
            Err(AprsError::InvalidTimestamp("1234567".to_owned()))
        );
    }

    #[test]
    fn invalid_timestamp2() {
        assert_eq!(
            "1a3456z".parse::<Timestamp>(),
            Err(AprsError::InvalidTimestamp("1a3456z".to_owned()))
        );
    }
}
