use serde::Serialize;

use crate::envelope::{Envelope, Report};

/// Free text: either an APRS line without any recognized OGN fields, or a
/// `#` comment from the APRS-IS server (banner, keep-alive) which has no
/// report.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct Comment {
    pub raw: String,
    pub report: Option<Report>,
    pub text: String,
}

impl Comment {
    pub(crate) fn extract(raw: &str, envelope: Envelope) -> Comment {
        Comment {
            raw: raw.to_owned(),
            report: Some(envelope.report),
            text: envelope.comment.to_owned(),
        }
    }

    /// `None` unless `raw` is a server comment line.
    pub(crate) fn from_server_line(raw: &str) -> Option<Comment> {
        let text = raw.strip_prefix('#')?;
        Some(Comment {
            raw: raw.to_owned(),
            report: None,
            text: text.trim().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Callsign, OgnMessage};

    fn comment(raw: &str) -> Comment {
        match parse(raw) {
            Ok(OgnMessage::Comment(comment)) => comment,
            other => panic!("expected a comment, got {other:?}"),
        }
    }

    #[test]
    fn parse_server_comment() {
        let raw = "# aprsc 2.1.4-g408ed49 17 Mar 2018 09:30:36 GMT GLIDERN1 37.187.40.234:10152";
        let subject = comment(raw);
        assert_eq!(subject.raw, raw);
        assert_eq!(subject.report, None);
        assert_eq!(
            subject.text,
            "aprsc 2.1.4-g408ed49 17 Mar 2018 09:30:36 GMT GLIDERN1 37.187.40.234:10152"
        );
    }

    #[test]
    fn parse_free_text_status() {
        let raw = "FLRDDA5BA>APRS,qAS,LFMX:>101010h Fly safe";
        let subject = comment(raw);
        assert_eq!(subject.text, "Fly safe");
        let report = subject.report.expect("report");
        assert_eq!(report.sender, Callsign::new("FLRDDA5BA", None));
    }

    #[test]
    fn parse_words_resembling_ogn_fields() {
        let subject = comment("FLRDDA5BA>APRS,qAS,LFMX:>101010h Not heard today");
        assert_eq!(subject.text, "Not heard today");

        let subject = comment("FLRDDA5BA>APRS,qAS,LFMX:>101010h firmware v7");
        assert_eq!(subject.text, "firmware v7");

        let subject = comment("FLRDDA5BA>APRS,qAS,LFMX:>101010h good idea");
        assert_eq!(subject.text, "good idea");
    }

    #[test]
    fn parse_position_without_ogn_fields() {
        let raw = "FLRDDA5BA>APRS,qAS,LFMX:/160829h4415.41N/00600.03E'342/049/A=005524";
        let subject = comment(raw);
        assert_eq!(subject.text, "");
        let report = subject.report.expect("report");
        assert_eq!(report.course, Some(342));
        assert_eq!(report.speed, Some(49));
    }
}
