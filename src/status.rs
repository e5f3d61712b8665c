use crate::Timestamp;

/// Body of a `>` status report: an optional timestamp followed by text.
#[derive(PartialEq, Debug, Clone)]
pub(crate) struct AprsStatus<'a> {
    pub timestamp: Option<Timestamp>,
    pub comment: &'a str,
}

impl<'a> AprsStatus<'a> {
    pub fn parse(s: &'a str) -> Self {
        let timestamp = s.get(0..7).and_then(|t| t.parse::<Timestamp>().ok());

        let comment = match timestamp {
            Some(_) => &s[7..],
            None => s,
        };

        AprsStatus {
            timestamp,
            comment: comment.trim(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let result = AprsStatus::parse("194847h v0.2.5.ARM CPU:0.4");
        assert_eq!(result.timestamp, Some(Timestamp::HHMMSS(19, 48, 47)));
        assert_eq!(result.comment, "v0.2.5.ARM CPU:0.4");
    }

    #[test]
    fn parse_without_timestamp() {
        let result = AprsStatus::parse("Antenna on the hangar roof");
        assert_eq!(result.timestamp, None);
        assert_eq!(result.comment, "Antenna on the hangar roof");
    }
}
