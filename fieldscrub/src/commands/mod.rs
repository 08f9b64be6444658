//! Command implementations for the fieldscrub CLI.

pub mod check;
pub mod clean;
