//! Policy management for `fieldscrub-core`.
//!
//! This module defines the core data structures for sanitisation policies:
//! the fixed category set, the allowed-field list, and per-category
//! membership. It handles serialization/deserialization of YAML policies and
//! provides utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::FieldscrubError;

/// The fixed sanitisation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    PlainString,
    Boolean,
    Integer,
    Url,
    NotBlank,
    Html,
    Upload,
}

impl Category {
    /// Canonical application order. Transforms are not commutative —
    /// `notBlank` must see the post-string-sanitised value — so this order
    /// is fixed and the engine never deviates from it.
    pub const ORDER: [Category; 7] = [
        Category::PlainString,
        Category::Boolean,
        Category::Integer,
        Category::Url,
        Category::NotBlank,
        Category::Html,
        Category::Upload,
    ];

    /// The category's name as it appears in policy files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::PlainString => "plainString",
            Category::Boolean => "boolean",
            Category::Integer => "integer",
            Category::Url => "url",
            Category::NotBlank => "notBlank",
            Category::Html => "html",
            Category::Upload => "upload",
        }
    }
}

/// Declarative sanitisation policy for one entity's fields.
///
/// `allowed` is the whitelist restricting which input fields are ever
/// processed or emitted, in output order. The category sets assign member
/// fields their transforms; a field may belong to zero, one, or several
/// categories, and membership outside `allowed` is inert.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldPolicy {
    /// Field names the engine may process, in output order.
    pub allowed: Vec<String>,
    pub plain_string: HashSet<String>,
    pub boolean: HashSet<String>,
    pub integer: HashSet<String>,
    pub url: HashSet<String>,
    pub not_blank: HashSet<String>,
    pub html: HashSet<String>,
    pub upload: HashSet<String>,
}

impl FieldPolicy {
    /// Builds a policy allowing `allowed` with no category memberships.
    pub fn new(allowed: Vec<String>) -> Self {
        Self {
            allowed,
            ..Self::default()
        }
    }

    /// Adds `fields` to `category`.
    pub fn assign<I, S>(&mut self, category: Category, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members_mut(category)
            .extend(fields.into_iter().map(Into::into));
    }

    /// The member set of `category`.
    pub fn members(&self, category: Category) -> &HashSet<String> {
        match category {
            Category::PlainString => &self.plain_string,
            Category::Boolean => &self.boolean,
            Category::Integer => &self.integer,
            Category::Url => &self.url,
            Category::NotBlank => &self.not_blank,
            Category::Html => &self.html,
            Category::Upload => &self.upload,
        }
    }

    fn members_mut(&mut self, category: Category) -> &mut HashSet<String> {
        match category {
            Category::PlainString => &mut self.plain_string,
            Category::Boolean => &mut self.boolean,
            Category::Integer => &mut self.integer,
            Category::Url => &mut self.url,
            Category::NotBlank => &mut self.not_blank,
            Category::Html => &mut self.html,
            Category::Upload => &mut self.upload,
        }
    }

    /// The categories `field` belongs to, in canonical application order.
    pub fn categories_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = Category> + 'a {
        Category::ORDER
            .into_iter()
            .filter(move |category| self.members(*category).contains(field))
    }

    /// Loads a policy from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading policy from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read policy file {}", path.display()))?;
        let policy: FieldPolicy = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse policy file {}", path.display()))?;

        policy.validate()?;
        info!(
            "Loaded policy with {} allowed field(s) from {}.",
            policy.allowed.len(),
            path.display()
        );

        Ok(policy)
    }

    /// Validates policy integrity.
    ///
    /// Empty field names and duplicate `allowed` entries are errors,
    /// collected and reported together. Category members missing from
    /// `allowed` can never run and are logged as warnings, not errors.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut errors = Vec::new();

        for field in &self.allowed {
            if field.trim().is_empty() {
                errors.push("The allowed list contains an empty field name.".to_string());
            } else if !seen.insert(field.as_str()) {
                errors.push(format!("Duplicate allowed field found: '{}'.", field));
            }
        }

        for category in Category::ORDER {
            for member in self.members(category) {
                if member.trim().is_empty() {
                    errors.push(format!(
                        "Category '{}' contains an empty field name.",
                        category.as_str()
                    ));
                } else if !seen.contains(member.as_str()) {
                    warn!(
                        "Field '{}' in category '{}' is not in the allowed list and will never be sanitised.",
                        member,
                        category.as_str()
                    );
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldscrubError::PolicyValidation(errors.join("\n")).into())
        }
    }

    /// Narrows `allowed` from CLI-style enable/disable lists.
    ///
    /// A non-empty `only` keeps just those fields (in their original order);
    /// `drop` removes fields unconditionally. Names that do not exist are
    /// warned about and otherwise ignored.
    pub fn restrict(&mut self, only: &[String], drop: &[String]) {
        let only_set: HashSet<&str> = only.iter().map(String::as_str).collect();
        let drop_set: HashSet<&str> = drop.iter().map(String::as_str).collect();

        debug!("Allowed count before restriction: {}", self.allowed.len());

        let known: HashSet<&str> = self.allowed.iter().map(String::as_str).collect();
        for name in only_set.difference(&known) {
            warn!("Field '{}' in the `only` list does not exist.", name);
        }
        for name in drop_set.difference(&known) {
            warn!("Field '{}' in the `drop` list does not exist.", name);
        }

        self.allowed.retain(|field| {
            let name = field.as_str();
            !drop_set.contains(name) && (only_set.is_empty() || only_set.contains(name))
        });

        debug!("Allowed count after restriction: {}", self.allowed.len());
    }
}

/// Merges an overlay policy into a base policy.
///
/// Overlay `allowed` entries are appended after the base's (first occurrence
/// wins for order); category sets are unioned. Commonly used to extend a
/// shared per-entity base policy with caller-specific additions.
pub fn merge_policies(base: FieldPolicy, overlay: Option<FieldPolicy>) -> FieldPolicy {
    debug!(
        "merge_policies called. Base allowed count: {}",
        base.allowed.len()
    );

    let mut merged = base;

    if let Some(overlay) = overlay {
        debug!(
            "Overlay provided. Merging {} allowed field(s).",
            overlay.allowed.len()
        );
        for field in &overlay.allowed {
            if !merged.allowed.contains(field) {
                merged.allowed.push(field.clone());
            }
        }

        for category in Category::ORDER {
            let additions: Vec<String> = overlay.members(category).iter().cloned().collect();
            merged.members_mut(category).extend(additions);
        }
    }

    debug!(
        "Final allowed count after merge: {}",
        merged.allowed.len()
    );
    merged
}
