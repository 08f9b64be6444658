// fieldscrub-core/src/engine.rs
//! The field-sanitisation engine: rule dispatch over the fixed categories,
//! with per-field custom rules applied last.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;

use crate::capabilities::{AmmoniaPurifier, HandleInspector, HtmlPurifier, UploadInspector};
use crate::custom::CustomRules;
use crate::policy::{Category, FieldPolicy};
use crate::transforms;
use crate::value::{CleanedFields, FieldValue, RawFields};

/// Applies a [`FieldPolicy`] to raw field mappings.
///
/// The sanitiser holds no state between calls: [`FieldSanitizer::clean`] is
/// a pure function of the raw input, the policy, and the injected
/// capabilities. Construct one per policy and reuse it freely.
pub struct FieldSanitizer {
    policy: FieldPolicy,
    custom: CustomRules,
    purifier: Box<dyn HtmlPurifier>,
    uploads: Box<dyn UploadInspector>,
}

impl FieldSanitizer {
    /// Builds a sanitiser with the shipped capabilities and no custom rules.
    pub fn new(policy: FieldPolicy) -> Self {
        Self {
            policy,
            custom: CustomRules::new(),
            purifier: Box::new(AmmoniaPurifier),
            uploads: Box::new(HandleInspector),
        }
    }

    /// Installs per-field custom rules, replacing any previous registry.
    pub fn with_custom_rules(mut self, custom: CustomRules) -> Self {
        self.custom = custom;
        self
    }

    /// Swaps in an alternative HTML purifier.
    pub fn with_purifier(mut self, purifier: impl HtmlPurifier + 'static) -> Self {
        self.purifier = Box::new(purifier);
        self
    }

    /// Swaps in an alternative upload inspector.
    pub fn with_upload_inspector(mut self, inspector: impl UploadInspector + 'static) -> Self {
        self.uploads = Box::new(inspector);
        self
    }

    pub fn policy(&self) -> &FieldPolicy {
        &self.policy
    }

    /// Cleans `raw` against the policy.
    ///
    /// For each allowed field present in the input, member-category
    /// transforms run in [`Category::ORDER`], the field's custom rule (if
    /// registered) runs last, and the result lands in the output under the
    /// field's name. Allowed fields absent from the input produce no entry;
    /// input fields outside the allowed list are dropped entirely.
    ///
    /// The only error path is a failing [`HtmlPurifier`] capability.
    pub fn clean(&self, raw: &RawFields) -> Result<CleanedFields> {
        let mut cleaned = CleanedFields::new();

        for field in &self.policy.allowed {
            let Some(original) = raw.get(field) else {
                debug!("Field '{}' is allowed but absent from the input; skipping.", field);
                continue;
            };

            let mut value = original.clone();
            for category in self.policy.categories_for(field) {
                value = self.apply_category(category, field, value)?;
            }

            if let Some(rule) = self.custom.get(field) {
                debug!("Applying custom rule for field '{}'.", field);
                value = rule(value);
            }

            cleaned.insert(field.clone(), value);
        }

        Ok(cleaned)
    }

    fn apply_category(
        &self,
        category: Category,
        field: &str,
        value: FieldValue,
    ) -> Result<FieldValue> {
        let result = match category {
            Category::PlainString => match value.render_text() {
                Some(text) => FieldValue::Text(transforms::sanitise_string(&text)),
                None => self.pass_through(category, field, value),
            },
            Category::Boolean => FieldValue::Bool(transforms::sanitise_boolean(&value)),
            Category::Integer => FieldValue::Int(transforms::sanitise_integer(&value)),
            Category::Url => match value.render_text() {
                Some(text) => FieldValue::Text(transforms::sanitise_url(&text)),
                None => self.pass_through(category, field, value),
            },
            Category::NotBlank => {
                if value.is_empty_like() {
                    FieldValue::Null
                } else {
                    value
                }
            }
            Category::Html => match value.render_text() {
                Some(text) => {
                    let safe = self
                        .purifier
                        .purify(&text)
                        .with_context(|| format!("HTML purification failed for field '{}'", field))?;
                    FieldValue::Text(safe)
                }
                None => self.pass_through(category, field, value),
            },
            Category::Upload => self.filter_uploads(value),
        };

        Ok(result)
    }

    // Lists and uploads have no textual rendering; the string-shaped
    // transforms leave them untouched.
    fn pass_through(&self, category: Category, field: &str, value: FieldValue) -> FieldValue {
        debug!(
            "Field '{}' has no textual rendering; category '{}' left it untouched.",
            field,
            category.as_str()
        );
        value
    }

    /// Upload filtering: a genuine handle passes, a list keeps its genuine
    /// handles in order (an empty result list is valid), anything else
    /// becomes null.
    fn filter_uploads(&self, value: FieldValue) -> FieldValue {
        match value {
            FieldValue::List(items) => FieldValue::List(
                items
                    .into_iter()
                    .filter(|item| self.uploads.is_uploaded_file(item))
                    .collect(),
            ),
            other => {
                if self.uploads.is_uploaded_file(&other) {
                    other
                } else {
                    FieldValue::Null
                }
            }
        }
    }
}
