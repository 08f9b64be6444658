// fieldscrub-core/tests/policy_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use fieldscrub_core::policy::{self, Category, FieldPolicy};

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
allowed: [name, email, age, active, website, nickname, bio, avatar]
plainString: [name]
boolean: [active]
integer: [age]
url: [website]
notBlank: [nickname]
html: [bio]
upload: [avatar]
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let policy = FieldPolicy::load_from_file(file.path())?;
    assert_eq!(
        policy.allowed,
        vec!["name", "email", "age", "active", "website", "nickname", "bio", "avatar"]
    );
    assert!(policy.members(Category::PlainString).contains("name"));
    assert!(policy.members(Category::Boolean).contains("active"));
    assert!(policy.members(Category::Upload).contains("avatar"));
    // "email" belongs to no category and just passes through.
    assert_eq!(policy.categories_for("email").count(), 0);
    Ok(())
}

#[test]
fn test_load_from_file_category_defaults() -> Result<()> {
    let yaml_content = "allowed: [name]\n";
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let policy = FieldPolicy::load_from_file(file.path())?;
    assert_eq!(policy.allowed, vec!["name"]);
    for category in Category::ORDER {
        assert!(policy.members(category).is_empty());
    }
    Ok(())
}

#[test]
fn test_load_rejects_duplicate_allowed_fields() -> Result<()> {
    let yaml_content = "allowed: [name, name]\n";
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let err = FieldPolicy::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Duplicate allowed field"));
    Ok(())
}

#[test]
fn test_load_rejects_empty_field_names() -> Result<()> {
    let yaml_content = "allowed: [\"\", name]\n";
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let err = FieldPolicy::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("empty field name"));
    Ok(())
}

#[test]
fn test_category_member_outside_allowed_is_not_an_error() -> Result<()> {
    // The member can never run, which is warned about, but the policy loads.
    let yaml_content = "allowed: [name]\ninteger: [age]\n";
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let policy = FieldPolicy::load_from_file(file.path())?;
    assert!(policy.members(Category::Integer).contains("age"));
    assert!(!policy.allowed.contains(&"age".to_string()));
    Ok(())
}

#[test]
fn test_merge_policies_no_overlay() {
    let mut base = FieldPolicy::new(vec!["name".to_string(), "age".to_string()]);
    base.assign(Category::Integer, ["age"]);

    let merged = policy::merge_policies(base.clone(), None);
    assert_eq!(merged, base);
}

#[test]
fn test_merge_policies_appends_and_unions() {
    let mut base = FieldPolicy::new(vec!["name".to_string(), "age".to_string()]);
    base.assign(Category::Integer, ["age"]);

    let mut overlay = FieldPolicy::new(vec!["age".to_string(), "bio".to_string()]);
    overlay.assign(Category::Html, ["bio"]);
    overlay.assign(Category::NotBlank, ["age"]);

    let merged = policy::merge_policies(base, Some(overlay));
    // Base order wins; overlay-only fields are appended.
    assert_eq!(merged.allowed, vec!["name", "age", "bio"]);
    assert!(merged.members(Category::Integer).contains("age"));
    assert!(merged.members(Category::NotBlank).contains("age"));
    assert!(merged.members(Category::Html).contains("bio"));
}

#[test]
fn test_restrict_with_only_list() {
    let mut policy = FieldPolicy::new(vec![
        "name".to_string(),
        "age".to_string(),
        "bio".to_string(),
    ]);
    policy.restrict(&["bio".to_string(), "name".to_string()], &[]);
    // Original order is preserved, not the order of the `only` list.
    assert_eq!(policy.allowed, vec!["name", "bio"]);
}

#[test]
fn test_restrict_with_drop_list() {
    let mut policy = FieldPolicy::new(vec!["name".to_string(), "age".to_string()]);
    policy.restrict(&[], &["age".to_string(), "no_such_field".to_string()]);
    assert_eq!(policy.allowed, vec!["name"]);
}

#[test]
fn test_categories_apply_in_canonical_order() {
    let mut policy = FieldPolicy::new(vec!["nickname".to_string()]);
    // Registered in reverse of the canonical order on purpose.
    policy.assign(Category::NotBlank, ["nickname"]);
    policy.assign(Category::PlainString, ["nickname"]);

    let order: Vec<Category> = policy.categories_for("nickname").collect();
    assert_eq!(order, vec![Category::PlainString, Category::NotBlank]);
}
