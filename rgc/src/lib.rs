use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod opt;

/// Reference instant for all reported run times
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
