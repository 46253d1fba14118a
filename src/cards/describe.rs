use super::class::Class;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::suit::Suit;
use super::value::HandValue;

impl HandValue {
    /// Human-readable description, e.g. `"Two pair: Kings and Queens with Ace kicker"`.
    pub fn describe(&self) -> String {
        self.describe_in(None)
    }

    fn describe_in(&self, suit: Option<Suit>) -> String {
        let top = self.rank(0);
        let next = self.rank(1);
        let suited = |name: Class| match suit {
            Some(suit) => format!("{} ({}) with {} high", name, suit.glyph(), top.name()),
            None => format!("{} with {} high", name, top.name()),
        };
        match self.class() {
            Class::HighCard => format!("{}: {}", Class::HighCard, top.name()),
            Class::Pair => format!("{}: {}", Class::Pair, top.plural()),
            Class::TwoPair => format!(
                "{}: {} and {} with {} kicker",
                Class::TwoPair,
                top.plural(),
                next.plural(),
                self.rank(2).name()
            ),
            Class::Trips => format!("{}: {}", Class::Trips, top.plural()),
            Class::Straight => format!("{} with {} high", Class::Straight, top.name()),
            Class::Flush => suited(Class::Flush),
            Class::FullHouse => format!("{}: {} and {}", Class::FullHouse, top.plural(), next.plural()),
            Class::FourOfAKind => format!("{}: {}", Class::FourOfAKind, top.plural()),
            Class::StraightFlush => suited(Class::StraightFlush),
        }
    }
}

impl std::fmt::Display for HandValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl Hand {
    /// Evaluates the hand and describes it, naming the suit of a flush.
    pub fn classify(&self) -> (HandValue, String) {
        let evaluator = Evaluator::from(*self);
        let value = evaluator.evaluate();
        let suit = match value.class() {
            Class::Flush | Class::StraightFlush => evaluator
                .find_suit()
                .filter(|(_, flush)| *flush == value)
                .map(|(suit, _)| suit),
            _ => None,
        };
        (value, value.describe_in(suit))
    }
}
