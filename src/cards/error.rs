use super::card::Card;
use thiserror::Error;

/// Malformed input to the card codec, or an ill-posed hand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognized rank token {0:?}")]
    UnknownRank(String),
    #[error("truncated ten in {0:?}: a leading 1 must be followed by 0")]
    TruncatedTen(String),
    #[error("unrecognized suit token {0:?}")]
    UnknownSuit(String),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("hole must hold exactly 2 cards, got {0}")]
    InvalidHole(usize),
    #[error("board holds at most 5 cards, got {0}")]
    BoardTooLarge(usize),
    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(usize),
    #[error("at most {max} players are supported, got {got}")]
    TooManyPlayers { max: usize, got: usize },
    #[error("holdings and board share cards: {0}")]
    Overlap(String),
    #[error("simulation needs at least one round")]
    NoRounds,
}

pub type Result<T> = std::result::Result<T, Error>;
