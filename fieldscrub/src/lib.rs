// fieldscrub/src/lib.rs
//! # Fieldscrub CLI Application
//!
//! This crate provides the command-line interface for the fieldscrub
//! sanitisation engine: it reads raw fields as a JSON object, cleans them
//! against a YAML policy, and emits the cleaned mapping as JSON.

pub mod cli;
pub mod commands;
pub mod logger;
