// 🗺️ Locale Tables - static, per-region lesson facts
// One table per region: recognized topics map to a field set, everything else
// falls through to the region's default entry.

pub mod india;
pub mod kenya;
pub mod us;

use crate::region::RegionCode;
use serde::Serialize;

// ============================================================================
// LOCALE FIELDS
// ============================================================================

/// The ten named facts a lesson is rendered from.
///
/// An empty string means the table never supplied the field. Rendering
/// treats that as a missing placeholder value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleFields {
    pub region: &'static str,
    pub language: &'static str,
    pub currency: &'static str,
    pub local_context: &'static str,
    pub pitfalls: &'static str,
    pub explainer: &'static str,
    pub examples: &'static str,
    pub step1: &'static str,
    pub step2: &'static str,
    pub step3: &'static str,
}

impl LocaleFields {
    pub const FIELD_NAMES: [&'static str; 10] = [
        "region",
        "language",
        "currency",
        "local_context",
        "pitfalls",
        "explainer",
        "examples",
        "step1",
        "step2",
        "step3",
    ];

    /// Look up a field by name. Unknown names and empty values are both `None`.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        let value = match name {
            "region" => self.region,
            "language" => self.language,
            "currency" => self.currency,
            "local_context" => self.local_context,
            "pitfalls" => self.pitfalls,
            "explainer" => self.explainer,
            "examples" => self.examples,
            "step1" => self.step1,
            "step2" => self.step2,
            "step3" => self.step3,
            _ => return None,
        };

        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Names of fields with no value, in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELD_NAMES
            .iter()
            .copied()
            .filter(|name| self.get(name).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

// ============================================================================
// REGION TABLE
// ============================================================================

/// A field set shared by one or more exact-match topic strings
#[derive(Debug)]
pub struct TopicEntry {
    pub topics: &'static [&'static str],
    pub fields: LocaleFields,
}

#[derive(Debug)]
pub struct RegionTable {
    pub code: RegionCode,
    pub entries: &'static [TopicEntry],
    pub default: LocaleFields,
}

impl RegionTable {
    /// Case-sensitive, untrimmed topic match
    pub fn lookup(&self, topic: &str) -> Option<&TopicEntry> {
        self.entries
            .iter()
            .find(|entry| entry.topics.iter().any(|t| *t == topic))
    }

    /// Fields for `topic`, or the region default when it is not recognized
    pub fn fields_for(&self, topic: &str) -> &LocaleFields {
        self.lookup(topic)
            .map(|entry| &entry.fields)
            .unwrap_or(&self.default)
    }

    /// Every recognized topic string in table order
    pub fn recognized_topics(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.topics.iter().copied())
            .collect()
    }
}

/// The data table for a region. Total over the closed region set.
pub fn table(region: RegionCode) -> &'static RegionTable {
    match region {
        RegionCode::US => &us::TABLE,
        RegionCode::IN => &india::TABLE,
        RegionCode::KE => &kenya::TABLE,
    }
}

// ============================================================================
// COMPLETENESS AUDIT
// ============================================================================

/// One field a table entry fails to supply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefect {
    pub region: RegionCode,
    /// Topic strings of the entry, joined with " / ", or "default"
    pub entry: String,
    pub field: &'static str,
}

impl std::fmt::Display for FieldDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: missing '{}'", self.region, self.entry, self.field)
    }
}

/// Check every entry of every region table for empty fields.
///
/// The tables are reported as-is; content is never patched here.
pub fn audit() -> Vec<FieldDefect> {
    let mut defects = Vec::new();

    for region in RegionCode::ALL {
        let region_table = table(region);

        for entry in region_table.entries {
            let label = entry.topics.join(" / ");
            for field in entry.fields.missing_fields() {
                defects.push(FieldDefect {
                    region,
                    entry: label.clone(),
                    field,
                });
            }
        }

        for field in region_table.default.missing_fields() {
            defects.push(FieldDefect {
                region,
                entry: "default".to_string(),
                field,
            });
        }
    }

    defects
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup_by_name() {
        let fields = &table(RegionCode::KE).default;

        assert_eq!(fields.get("currency"), Some("KES"));
        assert_eq!(fields.get("region"), Some("Kenya"));
        assert_eq!(fields.get("name"), None);
        assert_eq!(fields.get("unknown"), None);
    }

    #[test]
    fn test_table_codes_match_region() {
        for region in RegionCode::ALL {
            assert_eq!(table(region).code, region);
        }
    }

    #[test]
    fn test_recognized_topics() {
        assert_eq!(table(RegionCode::US).recognized_topics(), vec!["credit score"]);
        assert_eq!(
            table(RegionCode::IN).recognized_topics(),
            vec!["fixed deposit", "savings"]
        );
        assert_eq!(
            table(RegionCode::KE).recognized_topics(),
            vec!["mobile money", "mpesa"]
        );
    }

    #[test]
    fn test_audit_finds_only_us_credit_score_explainer() {
        let defects = audit();

        assert_eq!(
            defects,
            vec![FieldDefect {
                region: RegionCode::US,
                entry: "credit score".to_string(),
                field: "explainer",
            }]
        );
        assert_eq!(
            defects[0].to_string(),
            "[US] credit score: missing 'explainer'"
        );
    }

    #[test]
    fn test_default_entries_are_complete() {
        for region in RegionCode::ALL {
            assert!(table(region).default.is_complete(), "{} default incomplete", region);
        }
    }
}
