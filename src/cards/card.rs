use super::error::Error;
use super::error::Result;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank + suit * 13`. Cards of one suit therefore occupy a contiguous
/// 13-bit lane once lifted into a [`Hand`], which is what lets the
/// evaluator read a whole suit with one shift and mask.
///
/// # Parsing
///
/// A rank token (`2`-`9`, `10` or `T`, `J`, `Q`, `K`, `A`, any case) followed
/// by a suit token (`c d h s`, any case, or `♣ ♦ ♥ ♠`): `"As"`, `"10♠"`, `"td"`.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

/// How a card is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// rank only: `10`, `J`
    Compact,
    /// rank and suit glyph: `10♠`
    Full,
    /// rank and suit letter: `10s`
    Ascii,
}

impl Card {
    pub const COUNT: usize = Rank::COUNT * Suit::COUNT;

    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 13)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 13)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
    /// Parses whitespace-separated card tokens.
    pub fn parse_many(s: &str) -> Result<Vec<Self>> {
        s.split_whitespace().map(Self::try_from).collect()
    }

    pub fn format(&self, style: Style) -> String {
        match style {
            Style::Compact => format!("{}", self.rank()),
            Style::Full => format!("{}{}", self.rank(), self.suit().glyph()),
            Style::Ascii => format!("{}{}", self.rank(), self.suit().letter()),
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) + u8::from(s) * 13)
    }
}

/// u8 isomorphism
/// each card is mapped to its bit position in a Hand
/// Ts
/// 47
/// 0b00101111
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < Self::COUNT, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000100000000000000000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str parsing
///
/// The rank token is one character, or two for `10`. Everything after it is
/// the suit token, which must be exactly one recognised character.
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let s = s.trim();
        let split = match s.chars().next() {
            Some('1') if s[1..].starts_with('0') => 2,
            Some('1') => return Err(Error::TruncatedTen(s.to_string())),
            Some(c) => c.len_utf8(),
            None => return Err(Error::UnknownRank(String::new())),
        };
        let (rank, suit) = s.split_at(split);
        let rank = Rank::try_from(rank)?;
        let suit = Suit::try_from(suit)?;
        Ok(Card::from((rank, suit)))
    }
}
impl std::str::FromStr for Card {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
