//! [APRS] message parser for the [Open Glider Network]
//!
//! Decodes one raw line from the OGN APRS-IS feed into a typed message:
//! an aircraft beacon, a receiver beacon, a receiver status or a comment.
//!
//! [APRS]: http://www.aprs.org/
//! [Open Glider Network]: http://wiki.glidernet.org/
//!
//! # Example
//!
//! ```rust
//! use ogn_aprs_parser::OgnMessage;
//!
//! let result = ogn_aprs_parser::parse(
//!     r"FLRDF0A52>APRS,qAS,LSTB:/220132h4658.70N/00707.72Ez090/054/A=001424 !W37! id06DF0A52 +020fpm +0.0rot 55.2dB 0e -6.2kHz gps4x6"
//! );
//!
//! match result {
//!     Ok(OgnMessage::Sender(sender)) => {
//!         assert_eq!(sender.id, "DF0A52");
//!         assert_eq!(sender.gps_accuracy, Some((4, 6)));
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

#[cfg(test)]
#[macro_use]
extern crate approx;

mod callsign;
mod classifier;
mod comment;
mod data_extension;
mod envelope;
mod error;
mod lonlat;
mod message;
mod position;
mod receiver_beacon;
mod receiver_status;
mod sender;
mod status;
mod timestamp;
mod tokens;

pub use callsign::Callsign;
pub use classifier::MessageKind;
pub use comment::Comment;
pub use envelope::Report;
pub use error::AprsError;
pub use lonlat::{Latitude, Longitude};
pub use message::OgnMessage;
pub use receiver_beacon::ReceiverBeacon;
pub use receiver_status::ReceiverStatus;
pub use sender::{AddressType, Sender, SenderType};
pub use timestamp::Timestamp;

/// Decode one newline-stripped APRS line into a message.
pub fn parse(s: &str) -> Result<OgnMessage, AprsError> {
    s.parse()
}

/// Decode one APRS line and serialize the message as JSON tagged by `"type"`.
pub fn parse_to_json(s: &str) -> Result<String, AprsError> {
    let message = parse(s)?;
    serde_json::to_string(&message).map_err(|err| AprsError::Json(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_tagged_by_type() {
        let json = parse_to_json(
            "FLRDF0A52>APRS,qAS,LSTB:/220132h4658.70N/00707.72Ez090/054/A=001424 id06DF0A52 +020fpm gps4x6",
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "sender");
        assert_eq!(value["sender_type"], "glider");
        assert_eq!(value["address_type"], "flarm");
        assert_eq!(value["id"], "DF0A52");
        assert_eq!(value["climb_rate"], 0.1);
        assert_eq!(value["gps_accuracy"], serde_json::json!([4, 6]));
        assert_eq!(value["proximity"], serde_json::Value::Null);
        assert_eq!(value["report"]["altitude"], 1424);
        assert_eq!(value["report"]["sender"]["call"], "FLRDF0A52");
    }

    #[test]
    fn json_propagates_errors() {
        assert_eq!(
            parse_to_json("garbage"),
            Err(AprsError::InvalidEnvelope("garbage".to_owned()))
        );
    }
}
