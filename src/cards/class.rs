/// A poker hand's category.
///
/// Ordered weakest to strongest; the discriminant is what sits in the top
/// field of a packed [`HandValue`](super::value::HandValue).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Class {
    HighCard = 0,      // 5 ranks
    Pair = 1,          // pair + 3 kickers
    TwoPair = 2,       // hi, lo + 1 kicker
    Trips = 3,         // trips + 2 kickers
    Straight = 4,      // top card
    Flush = 5,         // 5 ranks
    FullHouse = 6,     // trips, pair
    FourOfAKind = 7,   // quads + 1 kicker
    StraightFlush = 8, // top card
}

impl Class {
    pub const COUNT: usize = 9;

    pub const fn all() -> [Self; Self::COUNT] {
        [
            Class::HighCard,
            Class::Pair,
            Class::TwoPair,
            Class::Trips,
            Class::Straight,
            Class::Flush,
            Class::FullHouse,
            Class::FourOfAKind,
            Class::StraightFlush,
        ]
    }

    /// Number of tie-break slots this class fills.
    pub const fn n_ranks(&self) -> usize {
        match self {
            Class::HighCard | Class::Flush => 5,
            Class::Pair => 4,
            Class::TwoPair | Class::Trips => 3,
            Class::FullHouse | Class::FourOfAKind => 2,
            Class::Straight | Class::StraightFlush => 1,
        }
    }
}

impl From<u8> for Class {
    fn from(n: u8) -> Self {
        match n {
            0 => Class::HighCard,
            1 => Class::Pair,
            2 => Class::TwoPair,
            3 => Class::Trips,
            4 => Class::Straight,
            5 => Class::Flush,
            6 => Class::FullHouse,
            7 => Class::FourOfAKind,
            8 => Class::StraightFlush,
            _ => panic!("invalid class u8: {}", n),
        }
    }
}
impl From<Class> for u8 {
    fn from(c: Class) -> u8 {
        c as u8
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Class::HighCard => "High card",
                Class::Pair => "One pair",
                Class::TwoPair => "Two pair",
                Class::Trips => "Three of a kind",
                Class::Straight => "Straight",
                Class::Flush => "Flush",
                Class::FullHouse => "Full house",
                Class::FourOfAKind => "Four of a kind",
                Class::StraightFlush => "Straight flush",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for class in Class::all() {
            assert_eq!(class, Class::from(u8::from(class)));
        }
    }

    #[test]
    fn ordered_by_strength() {
        assert!(Class::all().windows(2).all(|w| w[0] < w[1]));
    }
}
