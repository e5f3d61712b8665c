use serde::Serialize;

use crate::envelope::Envelope;
use crate::receiver_status::{is_status_marker, is_status_token};
use crate::sender::{find_id_token, is_sender_token};
use crate::AprsError;

/// The kinds of message an OGN line can decode to.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Sender,
    ReceiverBeacon,
    ReceiverStatus,
    Comment,
}

/// Pick the message kind for an envelope. The rules are tried in order
/// and the first one that applies wins.
pub(crate) fn classify(raw: &str, envelope: &Envelope) -> Result<MessageKind, AprsError> {
    let tokens = &envelope.tokens;
    let report = &envelope.report;

    if find_id_token(tokens).is_some() {
        return Ok(MessageKind::Sender);
    }

    if tokens.iter().any(|t| is_status_marker(t)) {
        return Ok(MessageKind::ReceiverStatus);
    }

    if report.sender.is_receiver_name() && report.has_position() {
        return Ok(MessageKind::ReceiverBeacon);
    }

    if !tokens.iter().any(|t| is_sender_token(t) || is_status_token(t)) {
        return Ok(MessageKind::Comment);
    }

    Err(AprsError::UnrecognizedMessage(raw.to_owned()))
}
