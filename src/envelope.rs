use std::str::FromStr;

use serde::Serialize;

use crate::lonlat::{Latitude, Longitude};
use crate::position::AprsPosition;
use crate::status::AprsStatus;
use crate::{AprsError, Callsign, Timestamp};

/// Fields shared by every beacon-style message: the APRS header and the
/// fixed-width position block. Anything the line did not carry is `None`.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct Report {
    pub sender: Callsign,
    pub destination: Callsign,
    pub path: Vec<Callsign>,
    pub timestamp: Option<Timestamp>,
    pub latitude: Option<Latitude>,
    pub longitude: Option<Longitude>,
    pub symbol_table: Option<char>,
    pub symbol_code: Option<char>,
    /// Degrees
    pub course: Option<u16>,
    /// Knots
    pub speed: Option<u16>,
    /// Feet
    pub altitude: Option<i32>,
}

impl Report {
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// A raw line split into its common fields and the comment tokens that
/// the per-message extractors consume.
#[derive(PartialEq, Debug, Clone)]
pub(crate) struct Envelope<'a> {
    pub report: Report,
    pub comment: &'a str,
    pub tokens: Vec<&'a str>,
}

impl<'a> Envelope<'a> {
    pub fn parse(s: &'a str) -> Result<Self, AprsError> {
        // split message into header and body
        let (header, body) = s
            .split_once(':')
            .ok_or_else(|| AprsError::InvalidEnvelope(s.to_owned()))?;

        // parse header
        let (from, to_and_via) = header
            .split_once('>')
            .ok_or_else(|| AprsError::InvalidEnvelope(s.to_owned()))?;
        let invalid = |_| AprsError::InvalidEnvelope(s.to_owned());
        let sender = Callsign::from_str(from).map_err(invalid)?;

        let mut to_and_via = to_and_via.split(',');
        let destination = to_and_via
            .next()
            .ok_or_else(|| AprsError::InvalidEnvelope(s.to_owned()))?;
        let destination = Callsign::from_str(destination).map_err(invalid)?;

        let path = to_and_via
            .map(Callsign::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;

        // parse body
        let mut chars = body.chars();
        let message_type = chars
            .next()
            .ok_or_else(|| AprsError::InvalidEnvelope(s.to_owned()))?;
        let body = chars.as_str();

        let mut report = Report {
            sender,
            destination,
            path,
            timestamp: None,
            latitude: None,
            longitude: None,
            symbol_table: None,
            symbol_code: None,
            course: None,
            speed: None,
            altitude: None,
        };

        let comment = match message_type {
            '/' | '@' | '!' | '=' => {
                let position = AprsPosition::parse(body);
                report.timestamp = position.timestamp;
                report.latitude = position.latitude;
                report.longitude = position.longitude;
                report.symbol_table = position.symbol_table;
                report.symbol_code = position.symbol_code;
                report.course = position.course_speed.map(|cs| cs.course);
                report.speed = position.course_speed.map(|cs| cs.speed);
                report.altitude = position.altitude;
                position.comment
            }
            '>' => {
                let status = AprsStatus::parse(body);
                report.timestamp = status.timestamp;
                status.comment
            }
            _ => body.trim(),
        };

        Ok(Envelope {
            report,
            comment,
            tokens: comment.split_whitespace().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_position() {
        let result = Envelope::parse(r"ICA3D17F2>APRS,qAS,dl4mea:/074849h4821.61N\01224.49E^322/103/A=003054 !W09! id213D17F2 -039fpm +0.0rot 2.5dB 3e -0.0kHz gps1x1").unwrap();
        let report = &result.report;
        assert_eq!(report.sender, Callsign::new("ICA3D17F2", None));
        assert_eq!(report.destination, Callsign::new("APRS", None));
        assert_eq!(
            report.path,
            vec![Callsign::new("qAS", None), Callsign::new("dl4mea", None)]
        );
        assert_eq!(report.timestamp, Some(Timestamp::HHMMSS(7, 48, 49)));
        assert_relative_eq!(*report.latitude.unwrap(), 48.3601666, epsilon = 1e-6);
        assert_relative_eq!(*report.longitude.unwrap(), 12.4083166, epsilon = 1e-6);
        assert_eq!(report.course, Some(322));
        assert_eq!(report.speed, Some(103));
        assert_eq!(report.altitude, Some(3054));
        assert_eq!(
            result.tokens,
            vec!["id213D17F2", "-039fpm", "+0.0rot", "2.5dB", "3e", "-0.0kHz", "gps1x1"]
        );
    }

    #[test]
    fn parse_status() {
        let result = Envelope::parse(r"Cordoba>APRS,TCPIP*,qAC,GLIDERN3:>194847h v0.2.5.ARM CPU:0.4 RAM:755.4/970.8MB").unwrap();
        assert_eq!(result.report.sender, Callsign::new("Cordoba", None));
        assert_eq!(
            result.report.path,
            vec![
                Callsign::new("TCPIP*", None),
                Callsign::new("qAC", None),
                Callsign::new("GLIDERN3", None),
            ]
        );
        assert_eq!(result.report.timestamp, Some(Timestamp::HHMMSS(19, 48, 47)));
        assert!(!result.report.has_position());
        assert_eq!(result.comment, "v0.2.5.ARM CPU:0.4 RAM:755.4/970.8MB");
        assert_eq!(result.tokens, vec!["v0.2.5.ARM", "CPU:0.4", "RAM:755.4/970.8MB"]);
    }

    #[test]
    fn parse_free_text() {
        let result = Envelope::parse("LFNX>APRS,TCPIP*:)hello  world").unwrap();
        assert_eq!(result.report.timestamp, None);
        assert_eq!(result.comment, "hello  world");
        assert_eq!(result.tokens, vec!["hello", "world"]);
    }

    #[test]
    fn missing_separator() {
        assert_eq!(
            Envelope::parse("FLRDF0A52>APRS,qAS,LSTB"),
            Err(AprsError::InvalidEnvelope("FLRDF0A52>APRS,qAS,LSTB".to_owned()))
        );
    }

    #[test]
    fn missing_sender_separator() {
        assert_eq!(
            Envelope::parse("FLRDF0A52:/220132h"),
            Err(AprsError::InvalidEnvelope("FLRDF0A52:/220132h".to_owned()))
        );
    }

    #[test]
    fn empty_payload() {
        assert_eq!(
            Envelope::parse("FLRDF0A52>APRS,qAS,LSTB:"),
            Err(AprsError::InvalidEnvelope("FLRDF0A52>APRS,qAS,LSTB:".to_owned()))
        );
    }

    #[test]
    fn empty_sender() {
        assert_eq!(
            Envelope::parse(">APRS:/220132h"),
            Err(AprsError::InvalidEnvelope(">APRS:/220132h".to_owned()))
        );
    }
}
