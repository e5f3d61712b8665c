use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AprsError {
    #[error("Invalid APRS envelope: {0}")]
    InvalidEnvelope(String),
    #[error("Unrecognized message: {0}")]
    UnrecognizedMessage(String),
    #[error("Malformed sender beacon: {0}")]
    MalformedSender(String),
    #[error("Invalid Callsign: {0}")]
    InvalidCallsign(String),
    #[error("Invalid Timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Invalid Latitude: {0}")]
    InvalidLatitude(String),
    #[error("Invalid Longitude: {0}")]
    InvalidLongitude(String),
    #[error("Invalid Course/Speed: {0}")]
    InvalidCourseSpeed(String),
    #[error("Invalid Altitude: {0}")]
    InvalidAltitude(String),
    #[error("JSON serialization failed: {0}")]
    Json(String),
}
