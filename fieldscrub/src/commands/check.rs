//! Check command implementation: validate a policy file and summarise it.

use anyhow::{Context, Result};
use std::path::PathBuf;

use fieldscrub_core::{Category, FieldPolicy};

/// Options for the check operation.
pub struct CheckOptions {
    pub policy: PathBuf,
}

/// Loads and validates a policy, printing a per-category summary.
/// Validation failures propagate, producing a non-zero exit.
pub fn run_check(opts: CheckOptions) -> Result<()> {
    let policy = FieldPolicy::load_from_file(&opts.policy)
        .with_context(|| format!("Policy file {} is not usable", opts.policy.display()))?;

    println!("Policy OK: {} allowed field(s).", policy.allowed.len());
    for category in Category::ORDER {
        let members = policy.members(category);
        if members.is_empty() {
            continue;
        }
        let mut names: Vec<&str> = members.iter().map(String::as_str).collect();
        names.sort_unstable();
        println!("  {:<12} {}", category.as_str(), names.join(", "));
    }

    Ok(())
}
