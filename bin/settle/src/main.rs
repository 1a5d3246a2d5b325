//! Settle Binary
//!
//! Usage: settle settle <START> <END> [--names a,b] [--unit 0.5] [--largest]
//!        settle net <START> <END>
//!
//! With no arguments, opens an interactive prompt.

fn main() -> anyhow::Result<()> {
    chip_core::tty();
    chip_cli::CLI::run()
}
