use super::class::Class;
use super::hand::Hand;
use super::suit::Suit;
use super::tables::Tables;
use super::value::HandValue;

/// Evaluates a Hand into a HandValue.
pub fn evaluate(hand: Hand) -> HandValue {
    Evaluator::from(hand).evaluate()
}

/// A table-driven evaluator for a hand's strength.
///
/// The hand is split into four 13-bit suit lanes. Everything after that is
/// lane arithmetic plus [`Tables`] lookups: no sorting, no per-card loop, and
/// a fixed number of steps whatever the cards are.
///
/// `n_dups` (cards minus distinct ranks) drives classification. Zero means
/// five distinct ranks at best, one means exactly one pair, two means two
/// pair or trips, three or more leaves quads, full house or three pair.
/// Straights and flushes need five distinct ranks, which with seven cards
/// leaves at most two duplicates, so they can only lose to a paired hand
/// when `n_dups >= 3`.
pub struct Evaluator {
    lanes: [u16; Suit::COUNT],
    values: u16,
    n_cards: u32,
    n_values: u32,
    tables: &'static Tables,
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let tables = Tables::get();
        let lanes = Suit::all().map(|suit| hand.lane(suit));
        let values = lanes[0] | lanes[1] | lanes[2] | lanes[3];
        Self {
            lanes,
            values,
            n_cards: hand.size() as u32,
            n_values: tables.count(values),
            tables,
        }
    }
}

impl Evaluator {
    pub fn evaluate(&self) -> HandValue {
        let candidate = self.find_flush_or_straight();
        match candidate {
            Some(value) if self.n_dups() < 3 => value,
            _ => {
                let paired = self.find_paired();
                candidate.map_or(paired, |value| value.max(paired))
            }
        }
    }

    /// The best flushing suit, with the flush or straight flush it makes.
    pub fn find_suit(&self) -> Option<(Suit, HandValue)> {
        Suit::all()
            .into_iter()
            .filter(|suit| self.tables.count(self.lane(*suit)) >= 5)
            .map(|suit| (suit, self.suited(self.lane(suit))))
            .max_by_key(|(_, value)| *value)
    }

    fn n_dups(&self) -> u32 {
        self.n_cards - self.n_values
    }
    fn lane(&self, suit: Suit) -> u16 {
        self.lanes[suit as usize]
    }

    fn find_flush_or_straight(&self) -> Option<HandValue> {
        if self.n_values < 5 {
            None
        } else {
            self.find_suit()
                .map(|(_, value)| value)
                .or_else(|| self.find_straight())
        }
    }
    fn find_straight(&self) -> Option<HandValue> {
        match self.tables.straight(self.values) {
            Tables::NO_STRAIGHT => None,
            top => Some(HandValue::new(Class::Straight, HandValue::slot(0, top))),
        }
    }
    fn suited(&self, lane: u16) -> HandValue {
        match self.tables.straight(lane) {
            Tables::NO_STRAIGHT => HandValue::new(Class::Flush, self.tables.five(lane)),
            top => HandValue::new(Class::StraightFlush, HandValue::slot(0, top)),
        }
    }

    fn find_paired(&self) -> HandValue {
        match self.n_dups() {
            0 => self.find_high_card(),
            1 => self.find_one_pair(),
            2 => self
                .find_two_pair()
                .unwrap_or_else(|| self.find_three_oak()),
            _ => self
                .find_four_oak()
                .or_else(|| self.find_full_house())
                .unwrap_or_else(|| self.find_best_two_pair()),
        }
    }

    fn find_high_card(&self) -> HandValue {
        HandValue::new(Class::HighCard, self.tables.five(self.values))
    }
    fn find_one_pair(&self) -> HandValue {
        let pairs = self.pairs();
        let pair = self.tables.top(pairs);
        let kicks = self.kickers(self.values ^ pairs, 1, 3);
        HandValue::new(Class::Pair, HandValue::slot(0, pair) | kicks)
    }
    fn find_two_pair(&self) -> Option<HandValue> {
        match self.pairs() {
            0 => None,
            pairs => {
                let both = self.tables.five(pairs) & HandValue::slots(0, 2);
                let kick = self.kickers(self.values ^ pairs, 2, 1);
                Some(HandValue::new(Class::TwoPair, both | kick))
            }
        }
    }
    fn find_three_oak(&self) -> HandValue {
        let threes = self.threes();
        let trips = self.tables.top(threes);
        let kicks = self.kickers(self.values ^ threes, 1, 2);
        HandValue::new(Class::Trips, HandValue::slot(0, trips) | kicks)
    }
    fn find_four_oak(&self) -> Option<HandValue> {
        match self.quads() {
            0 => None,
            quads => {
                let quad = self.tables.top(quads);
                let kick = self.kickers(self.values ^ bit(quad), 1, 1);
                Some(HandValue::new(
                    Class::FourOfAKind,
                    HandValue::slot(0, quad) | kick,
                ))
            }
        }
    }
    fn find_full_house(&self) -> Option<HandValue> {
        match self.threes() {
            0 => None,
            threes => {
                let trips = self.tables.top(threes);
                let pair = self.tables.top((threes | self.pairs()) ^ bit(trips));
                Some(HandValue::new(
                    Class::FullHouse,
                    HandValue::slot(0, trips) | HandValue::slot(1, pair),
                ))
            }
        }
    }
    /// three (or more) pairs and nothing better: the two highest play
    fn find_best_two_pair(&self) -> HandValue {
        let pairs = self.pairs();
        let hi = self.tables.top(pairs);
        let lo = self.tables.top(pairs ^ bit(hi));
        let kick = self.kickers(self.values ^ bit(hi) ^ bit(lo), 2, 1);
        HandValue::new(
            Class::TwoPair,
            HandValue::slot(0, hi) | HandValue::slot(1, lo) | kick,
        )
    }

    /// the `n` highest ranks of `mask`, placed from slot `from` onwards
    fn kickers(&self, mask: u16, from: usize, n: usize) -> u32 {
        (self.tables.five(mask) >> (HandValue::SLOT_WIDTH * from as u32))
            & HandValue::slots(from, n)
    }

    /// ranks held in an even number of suits, i.e. pairs (and quads)
    fn pairs(&self) -> u16 {
        let [c, d, h, s] = self.lanes;
        self.values ^ (c ^ d ^ h ^ s)
    }
    /// ranks held in at least three suits
    fn threes(&self) -> u16 {
        let [c, d, h, s] = self.lanes;
        ((c & d) | (h & s)) & ((c & h) | (d & s))
    }
    fn quads(&self) -> u16 {
        let [c, d, h, s] = self.lanes;
        c & d & h & s
    }
}

#[inline(always)]
fn bit(rank: u8) -> u16 {
    1 << rank
}

impl From<Hand> for HandValue {
    fn from(hand: Hand) -> Self {
        evaluate(hand)
    }
}

impl Hand {
    pub fn evaluate(&self) -> HandValue {
        evaluate(*self)
    }
}
