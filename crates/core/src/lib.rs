//! Core type aliases, traits, and constants for chipsplit.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the chipsplit workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and transfer amounts in big blinds.
pub type Blinds = f64;
/// Seat index around the table. Doubles as player identity.
pub type Position = usize;
/// Amounts converted out of blinds into a secondary display unit.
pub type Value = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SETTLEMENT PARAMETERS
// ============================================================================
/// Floor on the slack under which a net position or remainder counts as zero.
pub const TOLERANCE: Blinds = 1e-9;
/// Rounding slack per player per blind of table volume, in machine epsilons.
/// Scaled by seat count and total chip volume to bound summation error.
pub const ROUNDING: Blinds = 16. * Blinds::EPSILON;
/// Label prefix for players that were not given a name.
pub const PLAYER_PREFIX: &str = "Player";
/// Upper bound on table size when generating random sessions.
pub const MAX_PLAYERS: usize = 10;
/// Upper bound on a starting stack when generating random sessions.
pub const MAX_STACK: Blinds = 500.;

// ============================================================================
// SERVER PARAMETERS
// ============================================================================
/// Address the HTTP server binds to when BIND_ADDR is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8888";
/// Actix worker count when SERVER_WORKERS is unset.
pub const DEFAULT_WORKERS: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file: Box<dyn simplelog::SharedLogger> = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        quiet(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = terminal(log::LevelFilter::Info, simplelog::TerminalMode::Mixed);
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Terminal-only logging at WARN for short-lived command line runs,
/// which should leave nothing behind on disk.
#[cfg(feature = "server")]
pub fn tty() {
    let term = terminal(log::LevelFilter::Warn, simplelog::TerminalMode::Stderr);
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}

#[cfg(feature = "server")]
fn terminal(
    level: log::LevelFilter,
    mode: simplelog::TerminalMode,
) -> Box<dyn simplelog::SharedLogger> {
    simplelog::TermLogger::new(level, quiet(), mode, simplelog::ColorChoice::Auto)
}

/// Timestamps and levels only; no location, target, or thread columns.
#[cfg(feature = "server")]
fn quiet() -> simplelog::Config {
    simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build()
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

/// Read a configuration value from the environment, falling back to `default`
/// when the variable is unset or does not parse.
#[cfg(feature = "server")]
pub fn env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Err(_) => default,
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring malformed {}={:?}, using {}", key, raw, default);
            default
        }),
    }
}
