// fieldscrub-core/src/custom.rs
//! Per-field custom rule registry.
//!
//! A custom rule is an override transform for a single field, applied after
//! every category transform and free to replace their result entirely.
//! Rules are registered explicitly by field name; a field without a rule
//! simply skips the step.

use std::collections::HashMap;
use std::fmt;

use crate::value::FieldValue;

/// Boxed override transform for a single field.
pub type CustomRule = Box<dyn Fn(FieldValue) -> FieldValue + Send + Sync>;

/// Registry of per-field override rules, keyed by field name.
#[derive(Default)]
pub struct CustomRules {
    rules: HashMap<String, CustomRule>,
}

impl CustomRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` for `field`, replacing any earlier rule for it.
    pub fn register<F>(&mut self, field: impl Into<String>, rule: F)
    where
        F: Fn(FieldValue) -> FieldValue + Send + Sync + 'static,
    {
        self.rules.insert(field.into(), Box::new(rule));
    }

    pub fn get(&self, field: &str) -> Option<&CustomRule> {
        self.rules.get(field)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for CustomRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        fields.sort_unstable();
        f.debug_struct("CustomRules").field("fields", &fields).finish()
    }
}
