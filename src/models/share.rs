//! Outbound share targets. The engine only produces strings: a share
//! message, a canonical URL, and per-platform outputs built from the
//! pair. Fire-and-forget — nothing here performs network calls.

use super::checkin::CheckIn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    Instagram,
    Copy,
}

impl ShareTarget {
    pub fn code(&self) -> &str {
        match self {
            ShareTarget::Facebook => "facebook",
            ShareTarget::Twitter => "twitter",
            ShareTarget::Instagram => "instagram",
            ShareTarget::Copy => "copy",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "facebook" => Some(ShareTarget::Facebook),
            "twitter" => Some(ShareTarget::Twitter),
            "instagram" => Some(ShareTarget::Instagram),
            "copy" => Some(ShareTarget::Copy),
            _ => None,
        }
    }
}

/// The text/URL pair every target is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_check_in(check_in: &CheckIn, host: &str) -> Self {
        let text = match &check_in.event {
            Some(ev) => format!("I'm at {} for {}!", check_in.venue_name, ev.name),
            None => format!("I'm at {}!", check_in.venue_name),
        };
        let url = format!("https://{}/checkin/{}", host, check_in.id);
        Self { text, url }
    }

    /// The string handed to the caller for a given target: a platform
    /// share URL, or plain text for clipboard-style targets.
    pub fn render(&self, target: ShareTarget) -> String {
        match target {
            ShareTarget::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                encode_component(&self.url),
                encode_component(&self.text)
            ),
            ShareTarget::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                encode_component(&self.text),
                encode_component(&self.url)
            ),
            // Instagram has no web share target; hand back the copy text
            // with the same advice the app would show.
            ShareTarget::Instagram => format!(
                "{} {} (Instagram does not support link sharing; post a screenshot from the app)",
                self.text, self.url
            ),
            ShareTarget::Copy => format!("{} {}", self.text, self.url),
        }
    }
}

/// Percent-encode a URL query component (RFC 3986 unreserved set).
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::visibility::Visibility;

    fn record(event_name: Option<&str>) -> CheckIn {
        CheckIn {
            id: "checkin-abc".into(),
            user_id: "user-1".into(),
            venue_id: "v1".into(),
            venue_name: "Ruth Eckerd Hall".into(),
            created_at_ms: 0,
            location: None,
            note: None,
            mood: None,
            visibility: Visibility::Public,
            event: event_name.map(|name| crate::models::EventRef {
                id: "e1".into(),
                venue_id: "v1".into(),
                venue_name: "Ruth Eckerd Hall".into(),
                name: name.into(),
                date: "2026-08-28".into(),
                time: "20:00".into(),
                image_url: None,
                ticket_id: None,
                calendar_event_id: None,
            }),
            active: true,
        }
    }

    #[test]
    fn message_without_event() {
        let p = SharePayload::for_check_in(&record(None), "whensthefun.com");
        assert_eq!(p.text, "I'm at Ruth Eckerd Hall!");
        assert_eq!(p.url, "https://whensthefun.com/checkin/checkin-abc");
    }

    #[test]
    fn message_with_event_details() {
        let p = SharePayload::for_check_in(&record(Some("Jazz Night")), "whensthefun.com");
        assert_eq!(p.text, "I'm at Ruth Eckerd Hall for Jazz Night!");
    }

    #[test]
    fn copy_target_concatenates_text_and_url() {
        let p = SharePayload::for_check_in(&record(None), "whensthefun.com");
        assert_eq!(
            p.render(ShareTarget::Copy),
            "I'm at Ruth Eckerd Hall! https://whensthefun.com/checkin/checkin-abc"
        );
    }

    #[test]
    fn platform_urls_are_percent_encoded() {
        let p = SharePayload::for_check_in(&record(None), "whensthefun.com");
        let fb = p.render(ShareTarget::Facebook);
        assert!(fb.starts_with("https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2F"));
        assert!(fb.contains("quote=I%27m%20at%20Ruth%20Eckerd%20Hall%21"));

        let tw = p.render(ShareTarget::Twitter);
        assert!(tw.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(tw.contains("url=https%3A%2F%2Fwhensthefun.com%2Fcheckin%2Fcheckin-abc"));
    }

    #[test]
    fn target_codes_round_trip() {
        for t in [
            ShareTarget::Facebook,
            ShareTarget::Twitter,
            ShareTarget::Instagram,
            ShareTarget::Copy,
        ] {
            assert_eq!(ShareTarget::from_code(t.code()), Some(t));
        }
        assert_eq!(ShareTarget::from_code("myspace"), None);
    }
}
