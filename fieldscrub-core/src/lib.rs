// fieldscrub-core/src/lib.rs
//! # Fieldscrub Core Library
//!
//! `fieldscrub-core` provides the fundamental, platform-independent logic for
//! declarative field sanitisation. Given a raw mapping of field names to
//! arbitrary input values and a policy declaring the allowed fields plus
//! their category memberships, it produces a cleaned mapping by applying
//! type-specific normalisation rules and optional per-field custom rules.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input data based on the declared policy, without
//! concerns for I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `policy`: Defines `FieldPolicy` and the fixed `Category` set, plus
//!   loading, merging, and validation.
//! * `value`: The value universe (`FieldValue`, `UploadHandle`) and the
//!   ordered `CleanedFields` accumulator.
//! * `transforms`: The independently callable single-value sanitisers.
//! * `capabilities`: The injected collaborator seams (`HtmlPurifier`,
//!   `UploadInspector`) and their shipped implementations.
//! * `custom`: The per-field custom rule registry, applied after all
//!   category transforms.
//! * `engine`: The `FieldSanitizer` dispatch engine.
//! * `oneshot`: Convenience wrapper for one-shot, plain-function use.
//!
//! ## Usage Example
//!
//! ```rust
//! use fieldscrub_core::{clean_fields, Category, FieldPolicy, FieldValue, RawFields};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Declare the policy: which fields are allowed, and what each one is.
//!     let mut policy = FieldPolicy::new(vec![
//!         "name".to_string(),
//!         "age".to_string(),
//!         "homepage".to_string(),
//!     ]);
//!     policy.assign(Category::PlainString, ["name"]);
//!     policy.assign(Category::Integer, ["age"]);
//!     policy.assign(Category::Url, ["homepage"]);
//!
//!     // 2. Prepare some raw input, e.g. a parsed request body.
//!     let raw: RawFields = [
//!         ("name".to_string(), FieldValue::text("  <b>Ada</b> ")),
//!         ("age".to_string(), FieldValue::text("36 years")),
//!         ("homepage".to_string(), FieldValue::text("not a url")),
//!     ]
//!     .into_iter()
//!     .collect();
//!
//!     // 3. Clean it in a single call.
//!     let cleaned = clean_fields(&raw, policy)?;
//!     assert_eq!(cleaned.get("name"), Some(&FieldValue::text("Ada")));
//!     assert_eq!(cleaned.get("age"), Some(&FieldValue::Int(36)));
//!     assert_eq!(cleaned.get("homepage"), Some(&FieldValue::text("")));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Sanitisation never fails the request: every transform degrades to a safe
//! default (0, empty string, null, dropped element) rather than raise. The
//! only engine error path is a failing `HtmlPurifier` capability, which
//! propagates untouched. Policy loading and validation use `anyhow::Error`
//! with the specific `FieldscrubError` type underneath for programmatic
//! matching.
//!
//! ## Design Principles
//!
//! * **Injected Capabilities:** HTML purification and upload inspection sit
//!   behind traits, so they can be substituted or mocked in tests.
//! * **Stateless:** A sanitiser is a pure function of its inputs plus the
//!   injected capabilities; nothing is carried between calls.
//! * **Explicit Configuration:** Policies and custom rules are plain data
//!   passed in, never discovered by convention or reflection.
//! * **Fixed Composition Order:** Category transforms compose in one
//!   canonical order, because they are not commutative.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod capabilities;
pub mod custom;
pub mod engine;
pub mod errors;
pub mod oneshot;
pub mod policy;
pub mod transforms;
pub mod value;

/// Re-exports the public policy types and functions.
pub use policy::{merge_policies, Category, FieldPolicy};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FieldscrubError;

/// Re-exports the value model.
pub use value::{raw_fields_from_json, CleanedFields, FieldValue, RawFields, UploadHandle};

/// Re-exports the dispatch engine.
pub use engine::FieldSanitizer;

/// Re-exports the injected capability seams and their shipped implementations.
pub use capabilities::{AmmoniaPurifier, HandleInspector, HtmlPurifier, UploadInspector};

/// Re-exports the per-field custom rule registry.
pub use custom::{CustomRule, CustomRules};

/// Re-exports the one-shot convenience wrapper.
pub use oneshot::clean_fields;
