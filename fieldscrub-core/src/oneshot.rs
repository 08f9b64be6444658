// fieldscrub-core/src/oneshot.rs

//! `oneshot.rs`
//! Convenience wrapper for one-shot, plain-function use of the engine.
//! Builds a sanitiser with the shipped capabilities per call, for callers
//! that do not need custom rules or capability overrides.

use anyhow::Result;

use crate::engine::FieldSanitizer;
use crate::policy::FieldPolicy;
use crate::value::{CleanedFields, RawFields};

/// Cleans `raw` against `policy` in a single call.
///
/// Uses the shipped capabilities (ammonia purification, variant-based upload
/// inspection) and no custom rules. Callers needing either should construct
/// a [`FieldSanitizer`] directly.
pub fn clean_fields(raw: &RawFields, policy: FieldPolicy) -> Result<CleanedFields> {
    FieldSanitizer::new(policy).clean(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Category;
    use crate::value::FieldValue;

    #[test]
    fn one_shot_clean_applies_the_policy() {
        let mut policy = FieldPolicy::new(vec!["name".to_string(), "age".to_string()]);
        policy.assign(Category::PlainString, ["name"]);
        policy.assign(Category::Integer, ["age"]);

        let raw: RawFields = [
            ("name".to_string(), FieldValue::text(" <i>Grace</i> ")),
            ("age".to_string(), FieldValue::text("47 years")),
        ]
        .into_iter()
        .collect();

        let cleaned = clean_fields(&raw, policy).unwrap();
        assert_eq!(cleaned.get("name"), Some(&FieldValue::text("Grace")));
        assert_eq!(cleaned.get("age"), Some(&FieldValue::Int(47)));
    }

    #[test]
    fn one_shot_clean_drops_unallowed_fields() {
        let policy = FieldPolicy::new(vec!["kept".to_string()]);
        let raw: RawFields = [
            ("kept".to_string(), FieldValue::text("x")),
            ("dropped".to_string(), FieldValue::text("y")),
        ]
        .into_iter()
        .collect();

        let cleaned = clean_fields(&raw, policy).unwrap();
        assert_eq!(cleaned.len(), 1);
        assert!(cleaned.contains_key("kept"));
        assert!(!cleaned.contains_key("dropped"));
    }
}
