use serde::Serialize;

use crate::envelope::{Envelope, Report};

/// Position beacon of a ground receiver.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct ReceiverBeacon {
    pub raw: String,
    pub report: Report,
    /// Free text following the position, e.g. an antenna description
    pub text: Option<String>,
}

impl ReceiverBeacon {
    pub(crate) fn extract(raw: &str, envelope: Envelope) -> ReceiverBeacon {
        ReceiverBeacon {
            raw: raw.to_owned(),
            report: envelope.report,
            text: Some(envelope.comment)
                .filter(|text| !text.is_empty())
                .map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Callsign, OgnMessage};

    fn receiver_beacon(raw: &str) -> ReceiverBeacon {
        match parse(raw) {
            Ok(OgnMessage::ReceiverBeacon(beacon)) => beacon,
            other => panic!("expected a receiver beacon, got {other:?}"),
        }
    }

    #[test]
    fn parse_beacon() {
        let raw = "LFNX>APRS,TCPIP*,qAC,GLIDERN1:/152345h4327.43NI00546.54E&/A=000505";
        let subject = receiver_beacon(raw);
        assert_eq!(subject.raw, raw);
        assert_eq!(subject.report.sender, Callsign::new("LFNX", None));
        assert_relative_eq!(*subject.report.latitude.unwrap(), 43.457166, epsilon = 1e-6);
        assert_relative_eq!(*subject.report.longitude.unwrap(), 5.775666, epsilon = 1e-6);
        assert_eq!(subject.report.symbol_table, Some('I'));
        assert_eq!(subject.report.altitude, Some(505));
        assert_eq!(subject.text, None);
    }

    #[test]
    fn parse_beacon_with_description() {
        let raw = "Saleve>APRS,TCPIP*,qAC,GLIDERN1:/094312h4608.14NI00609.59E&/A=004429 Antenna: chinese, on a pylon, 20 meter above ground";
        let subject = receiver_beacon(raw);
        assert_eq!(
            subject.text.as_deref(),
            Some("Antenna: chinese, on a pylon, 20 meter above ground")
        );
    }
}
