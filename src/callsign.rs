use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::AprsError;

/// Prefixes OGN uses for callsigns derived from a device address
/// (e.g. `FLRDF0A52`, `ICA3D17F2`).
const DEVICE_PREFIXES: [&str; 11] = [
    "FLR", "ICA", "OGN", "FNT", "PAW", "SKY", "NAV", "RND", "MTK", "FMT", "XCG",
];

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Callsign {
    pub call: String,
    pub ssid: Option<String>,
}

impl Callsign {
    pub fn new<T: Into<String>>(call: T, ssid: Option<T>) -> Callsign {
        Callsign {
            call: call.into(),
            ssid: ssid.map(|ssid| ssid.into()),
        }
    }

    /// Whether the callsign is an aircraft device address: a known
    /// prefix followed by six hex digits.
    pub fn is_device_address(&self) -> bool {
        let call = self.call.as_str();
        call.len() == 9
            && call.is_char_boundary(3)
            && DEVICE_PREFIXES.contains(&&call[..3])
            && call[3..].chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Receivers register 3 to 9 alphanumeric characters without an SSID.
    pub fn is_receiver_name(&self) -> bool {
        self.ssid.is_none()
            && (3..=9).contains(&self.call.len())
            && self.call.chars().all(|c| c.is_ascii_alphanumeric())
            && !self.is_device_address()
    }
}

impl FromStr for Callsign {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let mut parts = s.splitn(2, '-');

        let call = parts.next().unwrap_or_default();
        if call.is_empty() || call.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AprsError::InvalidCallsign(s.to_owned()));
        }

        let ssid = match parts.next() {
            Some("") => return Err(AprsError::InvalidCallsign(s.to_owned())),
            Some(ssid) => Some(ssid),
            None => None,
        };

        Ok(Callsign::new(call, ssid))
    }
}

impl fmt::Display for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.ssid {
            Some(ssid) => write!(f, "{}-{}", self.call, ssid),
            None => write!(f, "{}", self.call),
        }
    }
}
