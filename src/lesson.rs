// 🎓 Lessons - request in, rendered lesson out
// Validates the request, resolves locale facts and renders the template

use crate::error::{LessonError, LessonResult};
use crate::localize::{is_recognized_topic, resolve};
use crate::region::RegionCode;
use crate::template::LessonTemplate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const NAME_MIN_CHARS: usize = 1;
pub const TOPIC_MIN_CHARS: usize = 2;

// ============================================================================
// REQUEST / RESPONSE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRequest {
    /// User's name for personalization
    pub name: String,

    /// Region code: US, IN, KE
    pub region: RegionCode,

    /// Financial topic, e.g. "credit score", "savings", "fixed deposit"
    pub topic: String,
}

impl LessonRequest {
    pub fn new(name: impl Into<String>, region: RegionCode, topic: impl Into<String>) -> Self {
        LessonRequest {
            name: name.into(),
            region,
            topic: topic.into(),
        }
    }

    /// Length checks, counted in characters
    pub fn validate(&self) -> LessonResult<()> {
        if self.name.chars().count() < NAME_MIN_CHARS {
            return Err(LessonError::invalid_request(
                "name",
                format!("must be at least {} character", NAME_MIN_CHARS),
            ));
        }

        if self.topic.chars().count() < TOPIC_MIN_CHARS {
            return Err(LessonError::invalid_request(
                "topic",
                format!("must be at least {} characters", TOPIC_MIN_CHARS),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonResponse {
    pub lesson: String,
}

impl From<LessonText> for LessonResponse {
    fn from(text: LessonText) -> Self {
        LessonResponse {
            lesson: text.into_string(),
        }
    }
}

// ============================================================================
// LESSON TEXT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonText(String);

impl LessonText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// SHA-256 of the lesson bytes, hex encoded. Stable because rendering is pure.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Display for LessonText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// EDUCATE
// ============================================================================

/// Produce the lesson for a request using the baseline template
pub fn educate(request: &LessonRequest) -> LessonResult<LessonText> {
    educate_with(LessonTemplate::Baseline, request)
}

pub fn educate_with(template: LessonTemplate, request: &LessonRequest) -> LessonResult<LessonText> {
    request.validate()?;

    if !is_recognized_topic(request.region, &request.topic) {
        log::debug!(
            "topic '{}' not recognized for {}, using default entry",
            request.topic,
            request.region
        );
    }

    let fields = resolve(request.region, &request.topic);
    let text = template.render(&fields, &request.name, &request.topic)?;

    Ok(LessonText(text))
}

// ============================================================================
// TESTS
// ============================================================================
