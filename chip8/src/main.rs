use std::path::PathBuf;

use clap::Parser;

mod keymap;
mod run;

/// Runs a Chip-8 ROM in an SDL2 window.
///
/// Keys: the hex keypad is mapped onto 1234/QWER/ASDF/ZXCV.
/// Escape quits, Backspace restarts the ROM and holding Space fast-forwards.
#[derive(Debug, Parser)]
#[command(name = "chip8", version)]
pub struct Args {
    /// Path to the ROM to run
    pub rom: PathBuf,

    /// Cycles per second [default: 60]
    #[arg(long)]
    pub hz: Option<u32>,

    /// Window pixels per Chip-8 pixel
    #[arg(long, default_value_t = 10)]
    pub scale: u32,

    /// Don't play a tone when the sound timer runs out
    #[arg(long)]
    pub mute: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run::run(&args) {
        tracing::error!("{err:#}");
        return Err(err);
    }
    Ok(())
}
