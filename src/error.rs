use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid rule {0:?}, expected \"B<digits>/S<digits>\"")]
    InvalidRule(String),

    #[error("board size must be at least 1, got {0}")]
    Dimension(usize),

    #[error("malformed pattern at byte {at}: {reason}")]
    MalformedPattern { at: usize, reason: &'static str },

    #[error("pattern cell ({row}, {col}) is outside the {size}x{size} board")]
    PatternOutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
}
