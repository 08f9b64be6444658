// fieldscrub-core/src/capabilities.rs
//! Defines the injected collaborator capabilities: HTML purification and
//! upload-handle inspection.
//!
//! Both collaborators sit behind traits so they can be substituted or mocked
//! in tests, keeping the engine free of globals. The shipped implementations
//! cover the common case; callers with their own purifier or upload
//! plumbing swap theirs in at engine construction.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::value::FieldValue;

/// Allow-list HTML purification.
///
/// Implementations must strip any markup or attributes not in their
/// allow-list and degrade malformed input to best-effort stripped output.
/// Returning an error is reserved for purifiers with genuine failure modes;
/// the engine propagates such errors to the caller untouched and adds no
/// error paths of its own.
pub trait HtmlPurifier: Send + Sync {
    fn purify(&self, raw_html: &str) -> Result<String>;
}

/// The shipped [`HtmlPurifier`], backed by `ammonia`'s default allow-list.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmmoniaPurifier;

impl HtmlPurifier for AmmoniaPurifier {
    fn purify(&self, raw_html: &str) -> Result<String> {
        Ok(ammonia::clean(raw_html))
    }
}

/// Distinguishes genuine upload handles from arbitrary data.
pub trait UploadInspector: Send + Sync {
    fn is_uploaded_file(&self, value: &FieldValue) -> bool;
}

/// The shipped [`UploadInspector`]: any [`FieldValue::Upload`] variant
/// counts as a genuine handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct HandleInspector;

impl UploadInspector for HandleInspector {
    fn is_uploaded_file(&self, value: &FieldValue) -> bool {
        matches!(value, FieldValue::Upload(_))
    }
}
