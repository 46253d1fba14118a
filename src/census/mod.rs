pub mod census;
pub use census::*;
