use serde::Serialize;

use crate::envelope::{Envelope, Report};
use crate::tokens::{hex_tail, pair, with_prefix, with_unit};
use crate::AprsError;

/// Feet per minute in one metre per second.
const FPM_PER_MPS: f64 = 196.85;

/// Aircraft category from bits 5..2 of the `id` flags byte.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderType {
    Unknown,
    Glider,
    TowPlane,
    Helicopter,
    Parachute,
    DropPlane,
    HangGlider,
    Paraglider,
    PoweredAircraft,
    JetAircraft,
    Ufo,
    Balloon,
    Airship,
    Uav,
    Reserved,
    StaticObject,
}

impl From<u8> for SenderType {
    fn from(v: u8) -> Self {
        match v & 0x0F {
            0x0 => SenderType::Unknown,
            0x1 => SenderType::Glider,
            0x2 => SenderType::TowPlane,
            0x3 => SenderType::Helicopter,
            0x4 => SenderType::Parachute,
            0x5 => SenderType::DropPlane,
            0x6 => SenderType::HangGlider,
            0x7 => SenderType::Paraglider,
            0x8 => SenderType::PoweredAircraft,
            0x9 => SenderType::JetAircraft,
            0xA => SenderType::Ufo,
            0xB => SenderType::Balloon,
            0xC => SenderType::Airship,
            0xD => SenderType::Uav,
            0xE => SenderType::Reserved,
            _ => SenderType::StaticObject,
        }
    }
}

/// Origin of the 24 bit address, bits 1..0 of the `id` flags byte.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    Unknown,
    Icao,
    Flarm,
    OgnTracker,
}

impl From<u8> for AddressType {
    fn from(v: u8) -> Self {
        match v & 0x03 {
            0b00 => AddressType::Unknown,
            0b01 => AddressType::Icao,
            0b10 => AddressType::Flarm,
            _ => AddressType::OgnTracker,
        }
    }
}

/// Aircraft beacon.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct Sender {
    pub raw: String,
    pub report: Report,
    pub stealth_mode: bool,
    pub no_tracking: bool,
    pub sender_type: SenderType,
    pub address_type: AddressType,
    /// 24 bit address, six hex digits as sent
    pub id: String,
    /// m/s
    pub climb_rate: Option<f64>,
    pub turn_rate: Option<f64>,
    pub flight_level: Option<f64>,
    /// dB
    pub signal: Option<f64>,
    pub errors: Option<u32>,
    /// kHz
    pub frequency_offset: Option<f64>,
    /// Horizontal and vertical accuracy in metres
    pub gps_accuracy: Option<(u32, u32)>,
    /// Suffixes of the `hearXXXX` tokens, in order
    pub proximity: Option<Vec<String>>,
}

/// Tokens an aircraft beacon may carry after its `id` token.
#[derive(PartialEq, Debug, Clone)]
enum SenderToken<'a> {
    ClimbRate(f64),
    TurnRate(f64),
    FlightLevel(f64),
    Signal(f64),
    Errors(u32),
    FrequencyOffset(f64),
    GpsAccuracy(u32, u32),
    Proximity(&'a str),
}

impl<'a> SenderToken<'a> {
    fn recognize(token: &'a str) -> Option<Self> {
        if let Some(heard) = hex_tail(token, "hear").filter(|tail| tail.len() == 4) {
            return Some(SenderToken::Proximity(heard));
        }
        if let Some((horizontal, vertical)) = token.strip_prefix("gps").and_then(|t| pair(t, 'x')) {
            return Some(SenderToken::GpsAccuracy(horizontal, vertical));
        }
        if let Some(level) = with_prefix(token, "FL") {
            return Some(SenderToken::FlightLevel(level));
        }
        if let Some(fpm) = with_unit::<f64>(token, "fpm") {
            return Some(SenderToken::ClimbRate((fpm / FPM_PER_MPS * 10.0).round() / 10.0));
        }
        if let Some(rot) = with_unit(token, "rot") {
            return Some(SenderToken::TurnRate(rot));
        }
        if let Some(khz) = with_unit(token, "kHz") {
            return Some(SenderToken::FrequencyOffset(khz));
        }
        if let Some(db) = with_unit(token, "dB") {
            return Some(SenderToken::Signal(db));
        }
        with_unit(token, "e").map(SenderToken::Errors)
    }
}

/// Whether `token` belongs to the aircraft beacon vocabulary.
pub(crate) fn is_sender_token(token: &str) -> bool {
    id_candidate(token).is_some() || SenderToken::recognize(token).is_some()
}

/// Tail of a token meant as a sender id: `id` followed by a digit or an
/// uppercase hex letter, then alphanumerics. Words like `idea` or `idle`
/// stay text. Whether the id is well formed is checked on extraction.
fn id_candidate(token: &str) -> Option<&str> {
    token.strip_prefix("id").filter(|tail| {
        tail.starts_with(|c: char| c.is_ascii_digit() || ('A'..='F').contains(&c))
            && tail.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

pub(crate) fn find_id_token<'a>(tokens: &[&'a str]) -> Option<&'a str> {
    tokens.iter().copied().find(|t| id_candidate(t).is_some())
}

impl Sender {
    pub(crate) fn extract(raw: &str, envelope: Envelope) -> Result<Sender, AprsError> {
        let id_token = find_id_token(&envelope.tokens)
            .ok_or_else(|| AprsError::UnrecognizedMessage(raw.to_owned()))?;
        let tail = id_candidate(id_token)
            .filter(|tail| tail.len() == 8 && tail.bytes().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| AprsError::MalformedSender(id_token.to_owned()))?;

        let flags = u8::from_str_radix(&tail[..2], 16)
            .map_err(|_| AprsError::MalformedSender(id_token.to_owned()))?;

        // STttttaa
        let stealth_mode = flags & 0b1000_0000 != 0;
        let no_tracking = flags & 0b0100_0000 != 0;
        let sender_type = SenderType::from((flags >> 2) & 0x0F);
        let address_type = AddressType::from(flags & 0x03);

        let mut sender = Sender {
            raw: raw.to_owned(),
            report: envelope.report,
            stealth_mode,
            no_tracking,
            sender_type,
            address_type,
            id: tail[2..].to_owned(),
            climb_rate: None,
            turn_rate: None,
            flight_level: None,
            signal: None,
            errors: None,
            frequency_offset: None,
            gps_accuracy: None,
            proximity: None,
        };

        for token in envelope.tokens.iter().copied().filter(|t| *t != id_token) {
            // the first occurrence of a field wins
            match SenderToken::recognize(token) {
                Some(SenderToken::ClimbRate(v)) => sender.climb_rate = sender.climb_rate.or(Some(v)),
                Some(SenderToken::TurnRate(v)) => sender.turn_rate = sender.turn_rate.or(Some(v)),
                Some(SenderToken::FlightLevel(v)) => {
                    sender.flight_level = sender.flight_level.or(Some(v))
                }
                Some(SenderToken::Signal(v)) => sender.signal = sender.signal.or(Some(v)),
                Some(SenderToken::Errors(v)) => sender.errors = sender.errors.or(Some(v)),
                Some(SenderToken::FrequencyOffset(v)) => {
                    sender.frequency_offset = sender.frequency_offset.or(Some(v))
                }
                Some(SenderToken::GpsAccuracy(h, v)) => {
                    sender.gps_accuracy = sender.gps_accuracy.or(Some((h, v)))
                }
                Some(SenderToken::Proximity(heard)) => sender
                    .proximity
                    .get_or_insert_with(Vec::new)
                    .push(heard.to_owned()),
                None => {}
            }
        }

        Ok(sender)
    }
}
