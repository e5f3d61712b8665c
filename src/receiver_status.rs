use serde::Serialize;

use crate::envelope::{Envelope, Report};
use crate::tokens::{number, pair, with_prefix, with_unit};

/// Periodic status report of a ground receiver.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct ReceiverStatus {
    pub raw: String,
    pub report: Report,
    pub version: Option<String>,
    pub platform: Option<String>,
    pub cpu_load: Option<f64>,
    /// MB
    pub ram_free: Option<f64>,
    /// MB
    pub ram_total: Option<f64>,
    /// ms
    pub ntp_offset: Option<f64>,
    /// ppm
    pub ntp_correction: Option<f64>,
    pub voltage: Option<f64>,
    pub amperage: Option<f64>,
    /// Celsius
    pub cpu_temperature: Option<f64>,
    pub visible_senders: Option<u32>,
    pub senders: Option<u32>,
    /// s
    pub latency: Option<f64>,
    /// ppm
    pub rf_correction_manual: Option<i32>,
    /// ppm
    pub rf_correction_automatic: Option<f64>,
    /// dB
    pub noise: Option<f64>,
    /// dB@10km
    pub senders_signal_quality: Option<f64>,
    pub senders_messages: Option<u32>,
    /// dB@10km
    pub good_senders_signal_quality: Option<f64>,
    pub good_senders: Option<u32>,
    pub good_and_bad_senders: Option<u32>,
}

/// `RF:+48+18.3ppm/+3.45dB/+0.4dB@10km[71]/+0.4dB@10km[1/1]`, everything
/// after the correction pair is optional.
#[derive(PartialEq, Debug, Clone, Default)]
struct RadioFrequency {
    correction_manual: i32,
    correction_automatic: f64,
    noise: Option<f64>,
    senders_signal_quality: Option<f64>,
    senders_messages: Option<u32>,
    good_senders_signal_quality: Option<f64>,
    good_senders: Option<u32>,
    good_and_bad_senders: Option<u32>,
}

#[derive(PartialEq, Debug, Clone)]
enum StatusToken<'a> {
    Version {
        version: String,
        platform: Option<&'a str>,
    },
    CpuLoad(f64),
    Ram(f64, f64),
    Ntp(f64, f64),
    Voltage(f64),
    Amperage(f64),
    CpuTemperature(f64),
    Senders(u32, u32),
    Latency(f64),
    RadioFrequency(RadioFrequency),
}

impl<'a> StatusToken<'a> {
    fn recognize(token: &'a str) -> Option<Self> {
        if let Some(cpu) = with_prefix(token, "CPU:") {
            return Some(StatusToken::CpuLoad(cpu));
        }
        if let Some((free, total)) = token
            .strip_prefix("RAM:")
            .and_then(|t| t.strip_suffix("MB"))
            .and_then(|t| pair(t, '/'))
        {
            return Some(StatusToken::Ram(free, total));
        }
        if let Some(ntp) = token.strip_prefix("NTP:") {
            let (offset, correction) = ntp.split_once('/')?;
            return Some(StatusToken::Ntp(
                with_unit(offset, "ms")?,
                with_unit(correction, "ppm")?,
            ));
        }
        if let Some(latency) = token
            .strip_prefix("Lat:")
            .and_then(|t| with_unit(t, "s"))
        {
            return Some(StatusToken::Latency(latency));
        }
        if let Some(rf) = token.strip_prefix("RF:") {
            return radio_frequency(rf).map(StatusToken::RadioFrequency);
        }
        if let Some((visible, total)) = token
            .split_once("Acfts")
            .and_then(|(senders, _)| pair(senders, '/'))
        {
            return Some(StatusToken::Senders(visible, total));
        }
        if let Some(version) = version(token) {
            return Some(version);
        }
        if let Some(volts) = with_unit(token, "V") {
            return Some(StatusToken::Voltage(volts));
        }
        if let Some(amps) = with_unit(token, "A") {
            return Some(StatusToken::Amperage(amps));
        }
        with_unit(token, "C").map(StatusToken::CpuTemperature)
    }

    /// Tokens that on their own mark a line as a receiver status.
    fn is_marker(&self) -> bool {
        matches!(
            self,
            StatusToken::Version { .. } | StatusToken::CpuLoad(_) | StatusToken::Ram(..)
        )
    }
}

/// `v0.2.5.ARM`: leading numeric components (at least two) are the
/// version, the rest names the platform.
fn version(token: &str) -> Option<StatusToken<'_>> {
    let rest = token.strip_prefix('v')?;
    if !rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let numeric: Vec<usize> = rest
        .split('.')
        .take_while(|part| !part.is_empty() && part.bytes().all(|c| c.is_ascii_digit()))
        .map(|part| part.len() + 1)
        .collect();
    // at least major.minor
    if numeric.len() < 2 {
        return None;
    }
    let numeric_end = numeric.iter().sum::<usize>();

    let (version, platform) = if numeric_end > rest.len() {
        (rest, None)
    } else {
        (&rest[..numeric_end - 1], Some(&rest[numeric_end..]))
    };

    Some(StatusToken::Version {
        version: version.to_owned(),
        platform: platform.filter(|p| !p.is_empty()),
    })
}

fn radio_frequency(s: &str) -> Option<RadioFrequency> {
    let mut segments = s.splitn(4, '/');

    // +48+18.3ppm
    let corrections = segments.next()?.strip_suffix("ppm")?;
    let split = corrections
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '+' || *c == '-')
        .map(|(i, _)| i)?;
    let mut rf = RadioFrequency {
        correction_manual: number(&corrections[..split])?,
        correction_automatic: number(&corrections[split..])?,
        ..Default::default()
    };

    rf.noise = segments.next().and_then(|noise| with_unit(noise, "dB"));

    // +0.4dB@10km[71]
    if let Some((quality, messages)) = segments.next().and_then(signal_quality) {
        rf.senders_signal_quality = Some(quality);
        rf.senders_messages = number(messages);
    }

    // +0.4dB@10km[1/1]
    if let Some((quality, senders)) = segments.next().and_then(signal_quality) {
        rf.good_senders_signal_quality = Some(quality);
        if let Some((good, all)) = pair(senders, '/') {
            rf.good_senders = Some(good);
            rf.good_and_bad_senders = Some(all);
        }
    }

    Some(rf)
}

/// Split `+0.4dB@10km[71]` into the quality and the bracketed text.
fn signal_quality(s: &str) -> Option<(f64, &str)> {
    let (quality, rest) = s.split_once("dB@10km[")?;
    Some((number(quality)?, rest.strip_suffix(']')?))
}

/// Whether `token` belongs to the receiver status vocabulary.
pub(crate) fn is_status_token(token: &str) -> bool {
    StatusToken::recognize(token).is_some()
}

/// Whether `token` alone identifies a receiver status line.
pub(crate) fn is_status_marker(token: &str) -> bool {
    StatusToken::recognize(token).is_some_and(|t| t.is_marker())
}

impl ReceiverStatus {
    pub(crate) fn extract(raw: &str, envelope: Envelope) -> ReceiverStatus {
        let mut status = ReceiverStatus {
            raw: raw.to_owned(),
            report: envelope.report,
            version: None,
            platform: None,
            cpu_load: None,
            ram_free: None,
            ram_total: None,
            ntp_offset: None,
            ntp_correction: None,
            voltage: None,
            amperage: None,
            cpu_temperature: None,
            visible_senders: None,
            senders: None,
            latency: None,
            rf_correction_manual: None,
            rf_correction_automatic: None,
            noise: None,
            senders_signal_quality: None,
            senders_messages: None,
            good_senders_signal_quality: None,
            good_senders: None,
            good_and_bad_senders: None,
        };

        for token in envelope.tokens.iter().copied() {
            match StatusToken::recognize(token) {
                Some(StatusToken::Version { version, platform }) => {
                    status.version = Some(version);
                    status.platform = platform.map(str::to_owned);
                }
                Some(StatusToken::CpuLoad(load)) => status.cpu_load = Some(load),
                Some(StatusToken::Ram(free, total)) => {
                    status.ram_free = Some(free);
                    status.ram_total = Some(total);
                }
                Some(StatusToken::Ntp(offset, correction)) => {
                    status.ntp_offset = Some(offset);
                    status.ntp_correction = Some(correction);
                }
                Some(StatusToken::Voltage(volts)) => status.voltage = Some(volts),
                Some(StatusToken::Amperage(amps)) => status.amperage = Some(amps),
                Some(StatusToken::CpuTemperature(celsius)) => status.cpu_temperature = Some(celsius),
                Some(StatusToken::Senders(visible, total)) => {
                    status.visible_senders = Some(visible);
                    status.senders = Some(total);
                }
                Some(StatusToken::Latency(seconds)) => status.latency = Some(seconds),
                Some(StatusToken::RadioFrequency(rf)) => {
                    status.rf_correction_manual = Some(rf.correction_manual);
                    status.rf_correction_automatic = Some(rf.correction_automatic);
                    status.noise = rf.noise;
                    status.senders_signal_quality = rf.senders_signal_quality;
                    status.senders_messages = rf.senders_messages;
                    status.good_senders_signal_quality = rf.good_senders_signal_quality;
                    status.good_senders = rf.good_senders;
                    status.good_and_bad_senders = rf.good_and_bad_senders;
                }
                None => {}
            }
        }

        status
    }
}
