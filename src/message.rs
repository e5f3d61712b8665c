use std::str::FromStr;

use serde::Serialize;

use crate::classifier::{classify, MessageKind};
use crate::envelope::{Envelope, Report};
use crate::{AprsError, Comment, ReceiverBeacon, ReceiverStatus, Sender};

#[derive(PartialEq, Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OgnMessage {
    Sender(Sender),
    ReceiverBeacon(ReceiverBeacon),
    ReceiverStatus(ReceiverStatus),
    Comment(Comment),
}

impl OgnMessage {
    /// The line this message was decoded from, verbatim.
    pub fn raw(&self) -> &str {
        match self {
            OgnMessage::Sender(sender) => &sender.raw,
            OgnMessage::ReceiverBeacon(beacon) => &beacon.raw,
            OgnMessage::ReceiverStatus(status) => &status.raw,
            OgnMessage::Comment(comment) => &comment.raw,
        }
    }

    /// Header and position fields; absent only for server comments.
    pub fn report(&self) -> Option<&Report> {
        match self {
            OgnMessage::Sender(sender) => Some(&sender.report),
            OgnMessage::ReceiverBeacon(beacon) => Some(&beacon.report),
            OgnMessage::ReceiverStatus(status) => Some(&status.report),
            OgnMessage::Comment(comment) => comment.report.as_ref(),
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            OgnMessage::Sender(_) => MessageKind::Sender,
            OgnMessage::ReceiverBeacon(_) => MessageKind::ReceiverBeacon,
            OgnMessage::ReceiverStatus(_) => MessageKind::ReceiverStatus,
            OgnMessage::Comment(_) => MessageKind::Comment,
        }
    }
}

impl FromStr for OgnMessage {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        if let Some(comment) = Comment::from_server_line(s) {
            return Ok(OgnMessage::Comment(comment));
        }

        let envelope = Envelope::parse(s)?;

        Ok(match classify(s, &envelope)? {
            MessageKind::Sender => OgnMessage::Sender(Sender::extract(s, envelope)?),
            MessageKind::ReceiverBeacon => {
                OgnMessage::ReceiverBeacon(ReceiverBeacon::extract(s, envelope))
            }
            MessageKind::ReceiverStatus => {
                OgnMessage::ReceiverStatus(ReceiverStatus::extract(s, envelope))
            }
            MessageKind::Comment => OgnMessage::Comment(Comment::extract(s, envelope)),
        })
    }
}
