//! Lookup tables over 13-bit rank masks.
//!
//! Every question the evaluator asks about a set of ranks (how many, which is
//! highest, what are the best five, is there a straight) is answered by
//! indexing one of these arrays. They are a pure function of the index,
//! computed once per process and shared read-only by every thread.
use super::rank::Rank;
use super::value::HandValue;
use std::sync::OnceLock;

/// one entry per subset of the 13 ranks
pub const MASKS: usize = 1 << Rank::COUNT;

/// A-2-3-4-5, the only straight that is not 5 adjacent bits
const WHEEL: u16 = 0b_1000000001111;
/// 5 adjacent ranks, slid from 2-6 up to T-A
const RUN: u16 = 0b_11111;

static TABLES: OnceLock<Tables> = OnceLock::new();

pub struct Tables {
    count: Box<[u8; MASKS]>,
    top: Box<[u8; MASKS]>,
    five: Box<[u32; MASKS]>,
    straight: Box<[u8; MASKS]>,
}

impl Tables {
    /// Returned by [`Tables::straight`] when no 5 ranks run together.
    /// Five is the lowest possible straight top, so rank 0 is free.
    pub const NO_STRAIGHT: u8 = 0;

    /// The process-wide tables, built on first use.
    pub fn get() -> &'static Self {
        TABLES.get_or_init(Self::build)
    }

    fn build() -> Self {
        let tables = Self {
            count: Self::tabulate(|m| m.count_ones() as u8),
            top: Self::tabulate(Self::highest),
            five: Self::tabulate(Self::best_five),
            straight: Self::tabulate(Self::best_straight),
        };
        log::debug!("{:<32}{:<32}", "built rank tables", MASKS);
        tables
    }

    fn tabulate<T: Copy + Default>(f: impl Fn(u16) -> T) -> Box<[T; MASKS]> {
        let mut table = Box::new([T::default(); MASKS]);
        table
            .iter_mut()
            .enumerate()
            .for_each(|(mask, entry)| *entry = f(mask as u16));
        table
    }

    #[inline(always)]
    fn index(mask: u16) -> usize {
        (mask & Rank::MASK) as usize
    }

    /// Number of ranks present.
    #[inline(always)]
    pub fn count(&self, mask: u16) -> u32 {
        self.count[Self::index(mask)] as u32
    }
    /// Highest rank present, as its bit index. 0 for the empty mask.
    #[inline(always)]
    pub fn top(&self, mask: u16) -> u8 {
        self.top[Self::index(mask)]
    }
    /// The five highest ranks present, packed into HandValue slots 0..5.
    #[inline(always)]
    pub fn five(&self, mask: u16) -> u32 {
        self.five[Self::index(mask)]
    }
    /// Top rank of the best straight present, or [`Tables::NO_STRAIGHT`].
    #[inline(always)]
    pub fn straight(&self, mask: u16) -> u8 {
        self.straight[Self::index(mask)]
    }

    fn highest(mask: u16) -> u8 {
        match mask {
            0 => 0,
            m => (15 - m.leading_zeros()) as u8,
        }
    }

    fn best_five(mask: u16) -> u32 {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| mask & u16::from(*r) != 0)
            .take(HandValue::SLOT_COUNT)
            .enumerate()
            .map(|(i, r)| HandValue::slot(i, u8::from(r)))
            .fold(0, |a, b| a | b)
    }

    fn best_straight(mask: u16) -> u8 {
        (u8::from(Rank::Six)..=u8::from(Rank::Ace))
            .rev()
            .find(|top| {
                let run = RUN << (top - u8::from(Rank::Six));
                mask & run == run
            })
            .or_else(|| (mask & WHEEL == WHEEL).then_some(u8::from(Rank::Five)))
            .unwrap_or(Self::NO_STRAIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(ranks: &[Rank]) -> u16 {
        ranks.iter().map(|r| u16::from(*r)).fold(0, |a, b| a | b)
    }

    #[test]
    fn counts_match_popcount() {
        let tables = Tables::get();
        assert!((0..MASKS as u16).all(|m| tables.count(m) == m.count_ones()));
    }

    #[test]
    fn top_is_highest_bit() {
        let tables = Tables::get();
        assert_eq!(tables.top(0b1), u8::from(Rank::Two));
        assert_eq!(tables.top(0b_1000000000001), u8::from(Rank::Ace));
        assert_eq!(tables.top(0b_0000100110000), u8::from(Rank::Ten));
    }

    #[test]
    fn five_keeps_the_best_five() {
        let tables = Tables::get();
        let m = mask(&[Rank::Ace, Rank::King, Rank::Nine, Rank::Seven, Rank::Four, Rank::Three, Rank::Two]);
        let expected = HandValue::slot(0, 12)
            | HandValue::slot(1, 11)
            | HandValue::slot(2, 7)
            | HandValue::slot(3, 5)
            | HandValue::slot(4, 2);
        assert_eq!(tables.five(m), expected);
    }

    #[test]
    fn five_leaves_missing_slots_empty() {
        let tables = Tables::get();
        let m = mask(&[Rank::Queen, Rank::Eight]);
        assert_eq!(tables.five(m), HandValue::slot(0, 10) | HandValue::slot(1, 6));
        assert_eq!(tables.five(0), 0);
    }

    #[test]
    fn straights() {
        let tables = Tables::get();
        let broadway = mask(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);
        let wheel = mask(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        let six_high = wheel | u16::from(Rank::Six);
        let gapped = mask(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Seven]);
        assert_eq!(tables.straight(broadway), u8::from(Rank::Ace));
        assert_eq!(tables.straight(wheel), u8::from(Rank::Five));
        assert_eq!(tables.straight(six_high), u8::from(Rank::Six));
        assert_eq!(tables.straight(gapped), Tables::NO_STRAIGHT);
        assert_eq!(tables.straight(Rank::MASK), u8::from(Rank::Ace));
    }

    #[test]
    fn ten_windows_plus_wheel() {
        let tables = Tables::get();
        let hits = (0..MASKS as u16)
            .filter(|m| m.count_ones() == 5)
            .filter(|m| tables.straight(*m) != Tables::NO_STRAIGHT)
            .count();
        assert_eq!(hits, 10);
    }

    #[test]
    fn shared_across_threads() {
        let here = Tables::get() as *const Tables as usize;
        let there = std::thread::spawn(|| Tables::get() as *const Tables as usize)
            .join()
            .unwrap();
        assert_eq!(here, there);
    }
}
