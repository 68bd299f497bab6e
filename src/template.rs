// 📝 Lesson Renderer
// Single-pass {placeholder} substitution over a fixed prose template

use crate::error::{LessonError, LessonResult};
use crate::locales::LocaleFields;
use serde::{Deserialize, Serialize};

const BASELINE: &str = "\
Hi {name}, let's talk about {topic} in {region} ({language}).

🌍 Why this matters in your region:
• In {region}, people often deal with {local_context}.
• Common pitfalls include: {pitfalls}

📘 Quick Explanation:
{explainer}

💰 Real-Life Examples (in {currency}):
{examples}

✅ Recommended next steps:
1. {step1}
2. {step2}
3. {step3}

You're taking a smart step toward financial confidence. Keep going, you've got this!
";

// ============================================================================
// TEMPLATE TYPE
// ============================================================================

/// Lesson layouts. Only the baseline layout exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonTemplate {
    #[default]
    Baseline,
}

impl LessonTemplate {
    pub fn text(&self) -> &'static str {
        match self {
            LessonTemplate::Baseline => BASELINE,
        }
    }

    /// Distinct placeholder names in order of first appearance
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for segment in segments(self.text()) {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute `name`, `topic` and the locale fields into the template.
    ///
    /// Fails with `MissingField` on the first placeholder that has no value.
    /// Substituted values are never rescanned.
    pub fn render(&self, fields: &LocaleFields, name: &str, topic: &str) -> LessonResult<String> {
        let text = self.text();
        let mut out = String::with_capacity(text.len() + 512);

        for segment in segments(text) {
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Placeholder(placeholder) => {
                    let value = match placeholder {
                        "name" => Some(name),
                        "topic" => Some(topic),
                        other => fields.get(other),
                    };
                    match value {
                        Some(value) => out.push_str(value),
                        None => return Err(LessonError::missing_field(placeholder)),
                    }
                }
            }
        }

        Ok(out)
    }
}

/// Render with the baseline template
pub fn render(fields: &LocaleFields, name: &str, topic: &str) -> LessonResult<String> {
    LessonTemplate::Baseline.render(fields, name, topic)
}

// ============================================================================
// TEMPLATE SCANNING
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Split a template into literal runs and `{name}` tokens.
/// An unterminated `{` is kept as literal text.
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };

        if open > 0 {
            result.push(Segment::Literal(&rest[..open]));
        }
        result.push(Segment::Placeholder(&rest[open + 1..open + close]));
        rest = &rest[open + close + 1..];
    }

    if !rest.is_empty() {
        result.push(Segment::Literal(rest));
    }

    result
}

// ============================================================================
// TESTS
// ============================================================================
