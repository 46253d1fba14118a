use super::class::Class;
use super::rank::Rank;

/// A fully-evaluated hand strength, packed into one ordered word.
///
/// ```text
/// xxxx cccc  1111 2222 3333 4444 5555
///  31    24    16   12    8    4    0
/// ```
///
/// `cccc` is the [`Class`]; slots `1..5` hold tie-break ranks, most
/// significant first. Slots a class does not use are zero. Comparing the raw
/// `u32` is comparing poker strength, so `Ord` is derived straight through.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandValue(u32);

impl HandValue {
    pub const CLASS_SHIFT: u32 = 24;
    pub const SLOT_WIDTH: u32 = 4;
    pub const SLOT_COUNT: usize = 5;
    pub const SLOT_MASK: u32 = 0xF;

    /// Bit offset of tie-break slot `index`, 0 being the most significant.
    pub const fn shift(index: usize) -> u32 {
        (Self::SLOT_COUNT - 1 - index) as u32 * Self::SLOT_WIDTH
    }
    /// A rank positioned in slot `index`, ready to be OR-ed into a value.
    pub const fn slot(index: usize, rank: u8) -> u32 {
        (rank as u32) << Self::shift(index)
    }

    /// Mask covering `n` consecutive slots starting at `from`.
    pub const fn slots(from: usize, n: usize) -> u32 {
        let mut mask = 0;
        let mut i = from;
        while i < from + n && i < Self::SLOT_COUNT {
            mask |= Self::SLOT_MASK << Self::shift(i);
            i += 1;
        }
        mask
    }

    pub const fn new(class: Class, slots: u32) -> Self {
        Self(((class as u32) << Self::CLASS_SHIFT) | slots)
    }

    pub fn class(&self) -> Class {
        Class::from((self.0 >> Self::CLASS_SHIFT) as u8)
    }
    /// Tie-break rank in slot `index`.
    pub fn rank(&self, index: usize) -> Rank {
        Rank::from(((self.0 >> Self::shift(index)) & Self::SLOT_MASK) as u8)
    }
    /// The meaningful tie-break ranks for this value's class.
    pub fn ranks(&self) -> Vec<Rank> {
        (0..self.class().n_ranks()).map(|i| self.rank(i)).collect()
    }
}

impl From<HandValue> for u32 {
    fn from(v: HandValue) -> Self {
        v.0
    }
}

/// (Class, ranks) construction, mostly for tests and callers building
/// reference values. ranks beyond the fifth are ignored.
impl From<(Class, &[Rank])> for HandValue {
    fn from((class, ranks): (Class, &[Rank])) -> Self {
        let slots = ranks
            .iter()
            .take(Self::SLOT_COUNT)
            .enumerate()
            .map(|(i, r)| Self::slot(i, u8::from(*r)))
            .fold(0, |a, b| a | b);
        Self::new(class, slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_layout() {
        assert_eq!(HandValue::shift(0), 16);
        assert_eq!(HandValue::shift(4), 0);
        let value = HandValue::from((Class::TwoPair, &[Rank::King, Rank::Queen, Rank::Ace][..]));
        assert_eq!(u32::from(value), 0x020B_AC00);
        assert_eq!(value.class(), Class::TwoPair);
        assert_eq!(value.ranks(), vec![Rank::King, Rank::Queen, Rank::Ace]);
    }

    #[test]
    fn class_dominates_ranks() {
        let pair = HandValue::from((Class::Pair, &[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack][..]));
        let twos = HandValue::from((Class::TwoPair, &[Rank::Three, Rank::Two, Rank::Four][..]));
        assert!(twos > pair);
    }

    #[test]
    fn kickers_break_ties() {
        let a = HandValue::from((Class::Pair, &[Rank::Ten, Rank::Ace, Rank::Nine, Rank::Two][..]));
        let b = HandValue::from((Class::Pair, &[Rank::Ten, Rank::King, Rank::Queen, Rank::Jack][..]));
        assert!(a > b);
    }
}
