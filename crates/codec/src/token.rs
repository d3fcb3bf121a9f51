use std::borrow::Cow;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Error, LinkRecord, StoryRecord};

/// URL-safe alphabet, unpadded on encode. Decoding also accepts padded
/// tokens so links minted with a standard `btoa`-style encoder keep working.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A payload that can travel inside a share token.
pub trait Record: Serialize + DeserializeOwned {
    /// Checked before encoding and after decoding.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl Record for StoryRecord {}

impl Record for LinkRecord {
    fn validate(&self) -> Result<(), Error> {
        if self.video_id.trim().is_empty() {
            return Err(Error::MissingField("videoId"));
        }
        if self.chortle.template().is_empty() {
            return Err(Error::MissingField("template"));
        }
        Ok(())
    }
}

/// Record → JSON → UTF-8 bytes → base64url. The token only contains
/// `[A-Za-z0-9_-]`, so it can sit in a URL fragment unescaped.
pub fn encode<R: Record>(record: &R) -> Result<String, Error> {
    record.validate()?;
    let json = serde_json::to_string(record)?;
    Ok(ENGINE.encode(json.as_bytes()))
}

/// Inverse of [`encode`]. Any malformed input is an `Err`.
pub fn decode<R: Record>(token: &str) -> Result<R, Error> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::EmptyToken);
    }

    let token = if token.contains(['+', '/']) {
        Cow::Owned(token.replace('+', "-").replace('/', "_"))
    } else {
        Cow::Borrowed(token)
    };

    let bytes = ENGINE.decode(token.as_bytes())?;
    let json = String::from_utf8(bytes)?;
    let record: R = serde_json::from_str(&json)?;
    record.validate()?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldValue;

    use base64::engine::general_purpose::STANDARD;
    use quickcheck::{Arbitrary, Gen};

    #[test]
    fn unicode_story_round_trips() {
        let record = StoryRecord::new("silly-story")
            .with("name", "José 🎉")
            .with("number", 42i64);

        let token = encode(&record).unwrap();
        let decoded: StoryRecord = decode(&token).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn combining_marks_and_astral_characters_survive() {
        // decomposed é, a ZWJ family emoji, and a CJK extension B ideograph
        let tricky = "Jose\u{301} 👨\u{200d}👩\u{200d}👧 \u{20000}";
        let record = StoryRecord::new("t").with("who", tricky);

        let decoded: StoryRecord = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(decoded.get("who").and_then(FieldValue::as_text), Some(tricky));
    }

    #[test]
    fn token_is_fragment_safe() {
        let record = StoryRecord::new("t")
            .with("a", "& # = ? / + spaces\ttabs\nnewlines")
            .with("b", "ünïcödé ✨");

        let token = encode(&record).unwrap();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "unexpected character in {token}"
        );
    }

    #[test]
    fn corrupt_tokens_are_errors() {
        assert!(decode::<StoryRecord>("not-a-valid-token!!").is_err());
        assert!(decode::<StoryRecord>("").is_err());
        assert!(decode::<StoryRecord>("   ").is_err());
        assert!(decode::<StoryRecord>("a").is_err());
    }

    #[test]
    fn truncated_token_is_an_error() {
        let token = encode(&StoryRecord::new("t").with("x", "y")).unwrap();
        let truncated = &token[..token.len() / 2];
        assert!(decode::<StoryRecord>(truncated).is_err());
    }

    #[test]
    fn non_object_payload_is_an_error() {
        let token = ENGINE.encode(b"[1,2,3]");
        assert!(matches!(decode::<StoryRecord>(&token), Err(Error::Json(_))));
    }

    #[test]
    fn invalid_utf8_payload_is_an_error() {
        let token = ENGINE.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(decode::<StoryRecord>(&token), Err(Error::Utf8(_))));
    }

    #[test]
    fn padded_standard_alphabet_tokens_decode() {
        let json = r#"{"template":"t","q":"??>>?"}"#;
        let legacy = STANDARD.encode(json);
        assert!(legacy.ends_with("==") && legacy.contains('+'));

        let decoded: StoryRecord = decode(&legacy).unwrap();
        assert_eq!(decoded.get("q"), Some(&FieldValue::from("??>>?")));
    }

    #[test]
    fn decode_tolerates_extra_and_unsupported_keys() {
        let token = ENGINE.encode(r#"{"template":"t","old":"kept","gone":false}"#);
        let decoded: StoryRecord = decode(&token).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.get("old"), Some(&FieldValue::from("kept")));
    }

    #[test]
    fn link_record_round_trips() {
        let link = LinkRecord::new(
            "vid-9",
            StoryRecord::new("space-trip").with("planet", "Zörp"),
            1_700_000_000_123,
        );
        let decoded: LinkRecord = decode(&encode(&link).unwrap()).unwrap();
        assert_eq!(decoded, link);
    }

    #[test]
    fn link_record_without_video_fails_both_ways() {
        let link = LinkRecord::new("  ", StoryRecord::new("t"), 0);
        assert!(matches!(encode(&link), Err(Error::MissingField("videoId"))));

        let token = ENGINE.encode(r#"{"chortle":{"template":"t"},"uploadTime":1}"#);
        assert!(decode::<LinkRecord>(&token).is_err());
    }

    #[derive(Debug, Clone)]
    struct ArbitraryStory(StoryRecord);

    impl Arbitrary for ArbitraryStory {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut record = StoryRecord::new(String::arbitrary(g));
            let count = usize::arbitrary(g) % 6;
            for _ in 0..count {
                let name = String::arbitrary(g);
                if bool::arbitrary(g) {
                    record.insert(name, String::arbitrary(g));
                } else {
                    let n = f64::arbitrary(g);
                    record.insert(name, if n.is_finite() { n } else { 0.0 });
                }
            }
            Self(record)
        }
    }

    #[quickcheck_macros::quickcheck]
    fn prop_story_round_trip(story: ArbitraryStory) -> bool {
        let token = encode(&story.0).unwrap();
        decode::<StoryRecord>(&token).ok() == Some(story.0)
    }

    #[quickcheck_macros::quickcheck]
    fn prop_decode_never_panics(input: String) -> bool {
        let _ = decode::<StoryRecord>(&input);
        let _ = decode::<LinkRecord>(&input);
        true
    }
}
