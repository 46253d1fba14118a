use crate::cards::Card;
use crate::cards::Class;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::HandIterator;
use crate::cards::HandValue;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// How many hands fell into each Class.
///
/// Exhaustive enumeration is embarrassingly parallel: hands are partitioned
/// by their highest card, each partition tallies its own Census, and the
/// partial counts are summed. No partition order is assumed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Census([u64; Class::COUNT]);

impl Census {
    /// Evaluates every hand of `n` cards drawn from the full deck.
    pub fn exhaust(n: usize) -> Self {
        assert!((1..=7).contains(&n), "census covers 1 to 7 cards, got {}", n);
        log::info!("{:<32}{:<32}", "exhausting hands of size", n);
        let start = std::time::Instant::now();
        let census = (n - 1..Card::COUNT)
            .into_par_iter()
            .map(|top| Card::from(top as u8))
            .map(|top| Self::partition(n, top))
            .reduce(Self::default, Self::merge);
        log::info!(
            "{:<32}{:<32}",
            "exhausted hands",
            format!("{} in {:.2?}", census.total(), start.elapsed())
        );
        census
    }

    /// Evaluates `count` uniformly random hands of `n` cards.
    pub fn sample(n: usize, count: usize) -> Self {
        assert!((1..=7).contains(&n), "census covers 1 to 7 cards, got {}", n);
        log::info!("{:<32}{:<32}", "sampling hands of size", n);
        (0..count)
            .into_par_iter()
            .map_init(
                || SmallRng::from_rng(&mut rand::rng()),
                |rng, _| Deck::new().deal(n, rng),
            )
            .map(HandValue::from)
            .fold(Self::default, Self::witness)
            .reduce(Self::default, Self::merge)
    }

    pub fn count(&self, class: Class) -> u64 {
        self.0[class as usize]
    }
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// all hands of size n whose highest card is `top`
    fn partition(n: usize, top: Card) -> Self {
        let census = HandIterator::below(n - 1, top, Hand::empty())
            .map(|rest| Hand::add(rest, Hand::from(top)))
            .map(HandValue::from)
            .fold(Self::default(), Self::witness);
        log::debug!("{:<32}{:<32}", "finished partition", top);
        census
    }
    fn witness(mut self, value: HandValue) -> Self {
        self.0[value.class() as usize] += 1;
        self
    }
    fn merge(mut self, other: Self) -> Self {
        self.0
            .iter_mut()
            .zip(other.0)
            .for_each(|(a, b)| *a += b);
        self
    }
}

impl std::ops::Index<Class> for Census {
    type Output = u64;
    fn index(&self, class: Class) -> &Self::Output {
        &self.0[class as usize]
    }
}

impl std::fmt::Display for Census {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let total = self.total().max(1) as f64;
        for class in Class::all().into_iter().rev() {
            writeln!(
                f,
                "{:<18}{:>14}{:>10.4}%",
                class.to_string(),
                self.count(class),
                100. * self.count(class) as f64 / total
            )?;
        }
        write!(f, "{:<18}{:>14}", "Total", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_card_hands() {
        let census = Census::exhaust(5);
        assert_eq!(census.total(), 2_598_960);
        assert_eq!(census[Class::HighCard], 1_302_540);
        assert_eq!(census[Class::Pair], 1_098_240);
        assert_eq!(census[Class::TwoPair], 123_552);
        assert_eq!(census[Class::Trips], 54_912);
        assert_eq!(census[Class::Straight], 10_200);
        assert_eq!(census[Class::Flush], 5_108);
        assert_eq!(census[Class::FullHouse], 3_744);
        assert_eq!(census[Class::FourOfAKind], 624);
        assert_eq!(census[Class::StraightFlush], 40);
    }

    /// 133,784,560 evaluations: run with `cargo test --release -- --ignored`
    #[test]
    #[ignore]
    fn seven_card_hands() {
        let census = Census::exhaust(7);
        assert_eq!(census.total(), 133_784_560);
        assert_eq!(census[Class::HighCard], 23_294_460);
        assert_eq!(census[Class::Pair], 58_627_800);
        assert_eq!(census[Class::TwoPair], 31_433_400);
        assert_eq!(census[Class::Trips], 6_461_620);
        assert_eq!(census[Class::Straight], 6_180_020);
        assert_eq!(census[Class::Flush], 4_047_644);
        assert_eq!(census[Class::FullHouse], 3_473_184);
        assert_eq!(census[Class::FourOfAKind], 224_848);
        assert_eq!(census[Class::StraightFlush], 41_584);
    }

    #[test]
    fn two_card_hands() {
        let census = Census::exhaust(2);
        assert_eq!(census.total(), 1_326);
        assert_eq!(census[Class::Pair], 78);
        assert_eq!(census[Class::HighCard], 1_248);
    }

    #[test]
    fn samples_are_counted() {
        let census = Census::sample(7, 1_000);
        assert_eq!(census.total(), 1_000);
        assert!(census[Class::Pair] > 0);
    }
}
