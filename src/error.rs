use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum TextFitError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),
}
