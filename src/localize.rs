// 🧭 Locale Resolver
// region + topic → fixed field set. Never fails: unrecognized topics get the
// region's default entry, and the region type is closed so every code has a table.

use crate::locales::{self, LocaleFields};
use crate::region::RegionCode;

/// Resolve the lesson facts for a region and topic.
///
/// Topic matching is exact and case-sensitive, with no trimming.
pub fn resolve(region: RegionCode, topic: &str) -> LocaleFields {
    *locales::table(region).fields_for(topic)
}

/// Whether `topic` hits one of the region's recognized entries
pub fn is_recognized_topic(region: RegionCode, topic: &str) -> bool {
    locales::table(region).lookup(topic).is_some()
}
