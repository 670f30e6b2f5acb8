//! Purpose: Diagnostics for modules without touching the stdout contract.
//! Exports: `init`, `default_directive`.
//! Role: Installs a `tracing` fmt subscriber on stderr, sized by Ansible verbosity.
//! Invariants: Never writes to stdout; stdout carries only the response envelope.
//! Invariants: `RUST_LOG` wins over verbosity; a second `init` is a no-op.
//! Invariants: No ANSI escapes unless stderr is a terminal; Ansible captures it otherwise.
use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Filter directive for an `_ansible_verbosity` level (`-v` count).
pub fn default_directive(verbosity: u32) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u32) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
