use super::error::Error;

/// One of the four suits. The discriminant picks the 13-bit lane a suit
/// occupies inside a [`Hand`](super::hand::Hand).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    pub const COUNT: usize = 4;
    pub const MAX: Self = Suit::S;
    pub const MIN: Self = Suit::C;

    pub const fn all() -> [Self; Self::COUNT] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }

    /// bit offset of this suit's lane in the 52-bit hand
    pub const fn offset(&self) -> u32 {
        *self as u32 * 13
    }

    pub fn glyph(&self) -> char {
        match self {
            Suit::C => '♣',
            Suit::D => '♦',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
    pub fn letter(&self) -> char {
        match self {
            Suit::C => 'c',
            Suit::D => 'd',
            Suit::H => 'h',
            Suit::S => 's',
        }
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 lane mask: all 13 card bits belonging to this suit
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        (super::rank::Rank::MASK as u64) << s.offset()
    }
}

/// char parsing: a letter in either case, or the unicode glyph
impl TryFrom<char> for Suit {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' | 'C' | '♣' => Ok(Suit::C),
            'd' | 'D' | '♦' => Ok(Suit::D),
            'h' | 'H' | '♥' => Ok(Suit::H),
            's' | 'S' | '♠' => Ok(Suit::S),
            _ => Err(Error::UnknownSuit(c.to_string())),
        }
    }
}
impl TryFrom<&str> for Suit {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(Error::UnknownSuit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
