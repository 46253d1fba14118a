use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// A set of undealt cards supporting uniform random draws.
///
/// Wraps a [`Hand`] of the remaining cards. Used for Monte Carlo sampling:
/// random hands for benchmarks and census samples, random board runouts
/// for equity simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rng.random_range(0..n);
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck = deck & (deck - 1);
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Draws `n` cards as one hand.
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
