//! File-backed logging.
//!
//! The terminal belongs to the UI, so records go to `fractree.log` in the
//! cache directory instead of stderr.

use std::fs::File;

use env_logger::{Env, Target};
use fractree_config::Config;

const LOG_FILE: &str = "fractree.log";

/// Install the global logger. Logging stays off if the file cannot be opened.
pub fn init() {
    let Some(dir) = Config::cache_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::options()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .init();
}
