pub use audio::Beeper;
pub use display::Display;
pub use error::Error;

mod audio;
mod display;
mod error;
