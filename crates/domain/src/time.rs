//! Timestamps carried by status events.
//!
//! Events are stamped in UTC and serialized as RFC 3339 strings, which is
//! the form SSE clients receive.

use chrono::{DateTime, Utc};

/// UTC timestamp attached to status events.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_as_rfc3339_utc_string() {
        let ts = now();

        let json = serde_json::to_value(ts).unwrap();
        let text = json.as_str().unwrap();

        assert!(text.ends_with('Z'));
        assert_eq!(DateTime::parse_from_rfc3339(text).unwrap(), ts);
    }

    #[test]
    fn should_never_go_backwards_between_stamps() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }
}
