//! Response payloads for the Kakao skill protocol.
//!
//! Two shapes leave this service: the immediate callback acknowledgement
//! returned from every accepted request, and the simple-text envelope that is
//! POSTed to the callback address once a task finishes.

use serde::{Serialize, Serializer};
use serde_json::{Value, json};

pub const SKILL_VERSION: &str = "2.0";

/// Outbound message, serialized as a skill response with a single
/// `simpleText` output.
///
/// # Examples
///
/// ```
/// use kakaobot::kakao::response_builder::OutboundEnvelope;
///
/// let envelope = OutboundEnvelope::new("안녕하세요");
/// let wire = serde_json::to_value(&envelope).unwrap();
/// assert_eq!(wire["template"]["outputs"][0]["simpleText"]["text"], "안녕하세요");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEnvelope {
    text: String,
}

impl OutboundEnvelope {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Serialize)]
struct SkillResponse<'a> {
    version: &'a str,
    template: SkillTemplate<'a>,
}

#[derive(Serialize)]
struct SkillTemplate<'a> {
    outputs: [SkillOutput<'a>; 1],
}

#[derive(Serialize)]
struct SkillOutput<'a> {
    #[serde(rename = "simpleText")]
    simple_text: SimpleText<'a>,
}

#[derive(Serialize)]
struct SimpleText<'a> {
    text: &'a str,
}

impl Serialize for OutboundEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SkillResponse {
            version: SKILL_VERSION,
            template: SkillTemplate {
                outputs: [SkillOutput {
                    simple_text: SimpleText { text: &self.text },
                }],
            },
        }
        .serialize(serializer)
    }
}

/// Build the envelope for a result string. Empty strings pass through.
#[must_use]
pub fn format_result(text: &str) -> OutboundEnvelope {
    OutboundEnvelope::new(text)
}

/// The acknowledgement telling the platform to wait for a callback.
#[must_use]
pub fn create_callback_ack() -> Value {
    json!({
        "version": SKILL_VERSION,
        "useCallback": true
    })
}
