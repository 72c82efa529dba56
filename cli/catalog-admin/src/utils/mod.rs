use std::io::Stderr;
use std::sync::{LazyLock, Mutex};

pub mod dialog;
pub mod logger;
pub mod message;

/// Serializes writes to stderr so prompts and log lines don't
/// interleave.
pub static TERMINAL_STDERR: LazyLock<Mutex<Stderr>> =
    LazyLock::new(|| Mutex::new(std::io::stderr()));
