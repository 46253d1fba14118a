use super::card::Card;
use super::error::Error;
use super::error::Result;
use super::suit::Suit;

/// Hand represents an unordered set of Cards, stored as a u64 of which only
/// the 52 LSBs are used. Each bit represents a unique card in the set, so a
/// Hand of any size is one word with no heap allocation.
///
/// Cards of a suit are contiguous: bits `13*s .. 13*s + 13` hold suit `s`,
/// ordered deuce to ace. [`Hand::lane`] extracts those 13 bits directly.
///
/// Because it is a set, adding a card that is already present is a no-op.
/// Constructors that take caller-provided cards ([`Hand::from_cards`],
/// `TryFrom<&str>`) reject repeats instead of collapsing them; the `From`
/// conversions assume the caller already guarantees uniqueness.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// Builds a hand from distinct cards, failing on the first repeat.
    pub fn from_cards(cards: &[Card]) -> Result<Self> {
        cards.iter().try_fold(Self::empty(), |hand, card| {
            if hand.contains(card) {
                Err(Error::DuplicateCard(*card))
            } else {
                Ok(Self(hand.0 | u64::from(*card)))
            }
        })
    }

    /// Union of two disjoint hands.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0, "overlapping hands {} and {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }

    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn overlaps(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    /// The 13-bit rank mask of this hand's cards in one suit.
    pub fn lane(&self, suit: Suit) -> u16 {
        ((self.0 >> suit.offset()) as u16) & super::rank::Rank::MASK
    }
    /// The cards of this hand belonging to one suit.
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }

    pub fn remove(&mut self, card: Card) {
        let card = u8::from(card);
        let mask = !(1 << card);
        self.0 &= mask;
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            let card = Card::from(card);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000110000000000000000000000000000000000001000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|c| u64::from(c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// str parsing
/// whitespace-separated card tokens, repeats rejected
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        Self::from_cards(&Card::parse_many(s)?)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = Vec::<Card>::from(*self)
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn bijective_u64() {
        let hand = Hand::try_from("2c 3d Kh 5s 8d Js Qd").unwrap();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Card::parse("2c").ok());
        assert_eq!(iter.next(), Card::parse("Jc").ok());
        assert_eq!(iter.next(), Card::parse("Ts").ok());
        assert_eq!(iter.next(), Card::parse("Js").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn constructors_agree() {
        let player = Card::parse_many("2c 3d").unwrap();
        let table = Card::parse_many("Kh 5s 8d Js Qd").unwrap();
        let a = Hand::add(Hand::from(player.clone()), Hand::from(table.clone()));
        let b = Hand::from_cards(&[player, table].concat()).unwrap();
        let c = Hand::try_from("2c 3d kh 5s 8d js qd").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c.size(), 7);
    }

    #[test]
    fn duplicates_rejected() {
        let ace = Card::from((Rank::Ace, Suit::S));
        assert_eq!(
            Hand::from_cards(&[ace, Card::from((Rank::Two, Suit::C)), ace]),
            Err(Error::DuplicateCard(ace))
        );
        assert_eq!(Hand::try_from("As as"), Err(Error::DuplicateCard(ace)));
    }

    #[test]
    fn duplicates_collapse_when_trusted() {
        let ace = Card::from((Rank::Ace, Suit::S));
        assert_eq!(Hand::from(vec![ace, ace]).size(), 1);
    }

    #[test]
    #[should_panic]
    fn overlapping_add_panics() {
        let hand = Hand::try_from("As Kd").unwrap();
        Hand::add(hand, Hand::try_from("As").unwrap());
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(hand.lane(Suit::C), 0b_1000100010001); // 2c 6c Tc Ac
        assert_eq!(hand.lane(Suit::D), 0b_0001000100010); // 3d 7d Jd
        assert_eq!(hand.lane(Suit::H), 0b_0010001000100); // 4h 8h Qh
        assert_eq!(hand.lane(Suit::S), 0b_0100010001000); // 5s 9s Ks
        assert_eq!(hand.of(&Suit::S).size(), 3);
    }

    #[test]
    fn complement_is_the_rest_of_the_deck() {
        let hand = Hand::try_from("As Kd").unwrap();
        assert_eq!(hand.complement().size(), 50);
        assert!(!hand.complement().overlaps(&hand));
    }

    #[test]
    fn display_lists_cards() {
        assert_eq!(Hand::try_from("Ts 2c").unwrap().to_string(), "2♣ 10♠");
    }
}
