use thiserror::Error;

/// SDL2 reports most failures as bare strings; they are kept as-is.
#[derive(Debug, Error)]
pub enum Error {
    #[error("sdl2 video: {0}")]
    Video(String),

    #[error("sdl2 audio: {0}")]
    Audio(String),
}
