// fieldscrub/src/logger.rs
//! Logger initialisation for the fieldscrub CLI.

use env_logger::Builder;
use log::LevelFilter;

/// Initialises the global logger.
///
/// With `level`, the fieldscrub crates are pinned to that level regardless
/// of `RUST_LOG`; without it, `RUST_LOG` applies as usual. Safe to call more
/// than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_module("fieldscrub", level);
        builder.filter_module("fieldscrub_core", level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
