pub mod card;
pub use card::*;

pub mod class;
pub use class::*;

pub mod deck;
pub use deck::*;

pub mod describe;

pub mod error;
pub use error::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;

pub mod tables;
pub use tables::*;

pub mod value;
pub use value::*;
