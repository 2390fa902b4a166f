use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub const CONSENT_COOKIE: &str = "cookie_consent";

const COOKIE_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

fn always_true() -> bool {
    true
}

/// Per-category cookie consent, persisted as url-encoded JSON in the
/// `cookie_consent` cookie. `necessary` is not user-editable and is forced
/// back to `true` whenever a stored record is decoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    #[serde(default = "always_true")]
    pub necessary: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
    #[serde(default)]
    pub preferences: bool,
    #[serde(default)]
    pub timestamp: i64,
}

impl ConsentRecord {
    /// Everything but the necessary category declined.
    pub fn denied() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
            preferences: false,
            timestamp: 0,
        }
    }

    pub fn accept_all(timestamp: i64) -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
            preferences: true,
            timestamp,
        }
    }
}

/// Decodes a raw cookie value. Anything that is not a JSON object with our
/// shape counts as "no consent yet".
pub fn parse(raw: &str) -> Option<ConsentRecord> {
    let decoded = urlencoding::decode(raw).ok()?;
    let mut record: ConsentRecord = serde_json::from_str(&decoded).ok()?;
    record.necessary = true;
    Some(record)
}

/// The full `Set-Cookie`-style assignment string for `document.cookie`.
pub fn cookie_string(record: &ConsentRecord) -> String {
    let json = serde_json::to_string(record).unwrap_or_default();
    format!(
        "{}={}; path=/; max-age={}; SameSite=Lax",
        CONSENT_COOKIE,
        urlencoding::encode(&json),
        COOKIE_MAX_AGE_SECS,
    )
}

/// Finds a cookie's raw value in a `document.cookie` header string.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

fn cookie_jar() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Reads the stored record from the browser cookie jar, if any.
pub fn load() -> Option<ConsentRecord> {
    let header = cookie_jar()?.cookie().ok()?;
    parse(find_cookie(&header, CONSENT_COOKIE)?)
}

pub fn store(record: &ConsentRecord) {
    if let Some(jar) = cookie_jar() {
        let _ = jar.set_cookie(&cookie_string(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_malformed_values_are_no_consent() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("not json"), None);
        assert_eq!(parse("%7Bbroken"), None);
        assert_eq!(parse("42"), None);
        assert_eq!(parse("%22just%20a%20string%22"), None);
    }

    #[test]
    fn accept_all_grants_every_category() {
        let record = ConsentRecord::accept_all(1_700_000_000_000);
        assert!(record.necessary);
        assert!(record.analytics);
        assert!(record.marketing);
        assert!(record.preferences);
        assert_eq!(record.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn saved_preferences_round_trip_exactly() {
        let record = ConsentRecord {
            analytics: false,
            marketing: true,
            preferences: false,
            timestamp: 1_699_999_999_123,
            ..ConsentRecord::denied()
        };
        let cookie = cookie_string(&record);
        let raw = find_cookie(&cookie, CONSENT_COOKIE).expect("value present");
        assert_eq!(parse(raw), Some(record));
    }

    #[test]
    fn analytics_toggled_off_stays_off() {
        let mut record = ConsentRecord::accept_all(1);
        record.analytics = false;
        let cookie = cookie_string(&record);
        let restored = parse(find_cookie(&cookie, CONSENT_COOKIE).unwrap()).unwrap();
        assert!(!restored.analytics);
        assert!(restored.marketing);
    }

    #[test]
    fn necessary_cannot_be_stored_away() {
        let raw = urlencoding::encode(r#"{"necessary":false,"analytics":true}"#).into_owned();
        let record = parse(&raw).unwrap();
        assert!(record.necessary);
        assert!(record.analytics);
    }

    #[test]
    fn cookie_attributes_carry_path_and_expiry() {
        let cookie = cookie_string(&ConsentRecord::denied());
        assert!(cookie.starts_with("cookie_consent="));
        assert!(cookie.contains("path=/"));
        assert!(cookie.contains("max-age=31536000"));
    }

    #[test]
    fn find_cookie_picks_the_right_pair() {
        let header = "theme=dark; cookie_consent=abc; other=1";
        assert_eq!(find_cookie(header, CONSENT_COOKIE), Some("abc"));
        assert_eq!(find_cookie(header, "missing"), None);
    }
}
