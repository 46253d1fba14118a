use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Error;
use crate::cards::Hand;
use crate::cards::HandIterator;
use crate::cards::HandValue;
use crate::cards::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// Most seats at one table.
pub const MAX_PLAYERS: usize = 9;
/// Cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// One player's share of the pot over all runouts considered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equity {
    win: f64,
    tie: f64,
}

impl Equity {
    /// Exact equity, enumerating every completion of the board.
    pub fn enumerate(holes: &[Hand], board: Hand) -> Result<Vec<Self>> {
        let showdown = Showdown::try_from((holes, board))?;
        let missing = BOARD_SIZE - board.size();
        log::info!("{:<32}{:<32}", "enumerating runouts", missing);
        let tally = match missing {
            0 => Tally::default().witness(&showdown, Hand::empty()),
            _ => (0..Card::COUNT)
                .into_par_iter()
                .map(|top| Card::from(top as u8))
                .filter(|top| !showdown.dead.contains(top))
                .map(|top| {
                    HandIterator::below(missing - 1, top, showdown.dead)
                        .map(|rest| Hand::add(rest, Hand::from(top)))
                        .fold(Tally::default(), |tally, runout| {
                            tally.witness(&showdown, runout)
                        })
                })
                .reduce(Tally::default, Tally::merge),
        };
        log::debug!("{:<32}{:<32}", "evaluated runouts", tally.total);
        Ok(tally.equities(holes.len()))
    }

    /// Approximate equity from `rounds` uniformly sampled board completions.
    pub fn simulate(holes: &[Hand], board: Hand, rounds: usize) -> Result<Vec<Self>> {
        let showdown = Showdown::try_from((holes, board))?;
        if rounds == 0 {
            return Err(Error::NoRounds);
        }
        let missing = BOARD_SIZE - board.size();
        log::info!("{:<32}{:<32}", "simulating runouts", rounds);
        let tally = (0..rounds)
            .into_par_iter()
            .map_init(
                || SmallRng::from_rng(&mut rand::rng()),
                |rng, _| Deck::from(showdown.dead.complement()).deal(missing, rng),
            )
            .fold(Tally::default, |tally, runout| tally.witness(&showdown, runout))
            .reduce(Tally::default, Tally::merge);
        Ok(tally.equities(holes.len()))
    }

    /// Fraction of runouts won outright.
    pub fn win(&self) -> f64 {
        self.win
    }
    /// Fraction of the pot collected from split runouts.
    pub fn tie(&self) -> f64 {
        self.tie
    }
    pub fn equity(&self) -> f64 {
        self.win + self.tie
    }
}

impl std::fmt::Display for Equity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "equity={:6.2}% win={:6.2}% tie={:6.2}%",
            self.equity() * 100.,
            self.win() * 100.,
            self.tie() * 100.
        )
    }
}

/// Validated holdings and board, plus every card they use.
struct Showdown {
    holes: [Hand; MAX_PLAYERS],
    n: usize,
    board: Hand,
    dead: Hand,
}

impl TryFrom<(&[Hand], Hand)> for Showdown {
    type Error = Error;
    fn try_from((holes, board): (&[Hand], Hand)) -> Result<Self> {
        if holes.len() < 2 {
            return Err(Error::TooFewPlayers(holes.len()));
        }
        if holes.len() > MAX_PLAYERS {
            return Err(Error::TooManyPlayers {
                max: MAX_PLAYERS,
                got: holes.len(),
            });
        }
        if board.size() > BOARD_SIZE {
            return Err(Error::BoardTooLarge(board.size()));
        }
        if let Some(hole) = holes.iter().find(|h| h.size() != 2) {
            return Err(Error::InvalidHole(hole.size()));
        }
        let mut dead = board;
        for hole in holes {
            if dead.overlaps(hole) {
                return Err(Error::Overlap(hole.to_string()));
            }
            dead = Hand::add(dead, *hole);
        }
        let mut padded = [Hand::empty(); MAX_PLAYERS];
        padded[..holes.len()].copy_from_slice(holes);
        Ok(Self {
            holes: padded,
            n: holes.len(),
            board,
            dead,
        })
    }
}

/// Running win counts and split-pot shares, one slot per seat.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    total: u64,
    wins: [u64; MAX_PLAYERS],
    ties: [f64; MAX_PLAYERS],
}

impl Tally {
    fn witness(mut self, showdown: &Showdown, runout: Hand) -> Self {
        let board = Hand::add(showdown.board, runout);
        let mut values = [HandValue::default(); MAX_PLAYERS];
        for (value, hole) in values.iter_mut().zip(&showdown.holes[..showdown.n]) {
            *value = HandValue::from(Hand::add(board, *hole));
        }
        let values = &values[..showdown.n];
        let best = values.iter().copied().max().unwrap_or_default();
        let winners = values.iter().filter(|v| **v == best).count();
        for (i, _) in values.iter().enumerate().filter(|(_, v)| **v == best) {
            match winners {
                1 => self.wins[i] += 1,
                k => self.ties[i] += 1. / k as f64,
            }
        }
        self.total += 1;
        self
    }
    fn merge(mut self, other: Self) -> Self {
        self.total += other.total;
        for i in 0..MAX_PLAYERS {
            self.wins[i] += other.wins[i];
            self.ties[i] += other.ties[i];
        }
        self
    }
    fn equities(&self, n: usize) -> Vec<Equity> {
        let total = self.total.max(1) as f64;
        (0..n)
            .map(|i| Equity {
                win: self.wins[i] as f64 / total,
                tie: self.ties[i] / total,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn complete_board_is_one_showdown() {
        let holes = [hand("As Ah"), hand("Ks Kh")];
        let board = hand("2c 7d 9h Jc 3s");
        let equities = Equity::enumerate(&holes, board).unwrap();
        assert_eq!(equities[0].win(), 1.);
        assert_eq!(equities[1].equity(), 0.);
    }

    #[test]
    fn board_plays_for_everyone() {
        let holes = [hand("2c 3d"), hand("2d 3c")];
        let board = hand("Ts Js Qs Ks As");
        let equities = Equity::enumerate(&holes, board).unwrap();
        assert_eq!(equities[0].tie(), 0.5);
        assert_eq!(equities[1].tie(), 0.5);
        assert_eq!(equities[0].win(), 0.);
    }

    #[test]
    fn river_to_come() {
        // 44 rivers; the flush comes on 9 of them
        let holes = [hand("Ah Kh"), hand("Qs Qc")];
        let board = hand("2h 7h Jd 4c");
        let equities = Equity::enumerate(&holes, board).unwrap();
        let aces = equities[0].equity();
        assert!((aces - 15. / 44.).abs() < 1e-9, "{}", aces);
        assert!((equities[0].equity() + equities[1].equity() - 1.).abs() < 1e-9);
    }

    #[test]
    fn aces_over_kings_preflop() {
        let holes = [hand("As Ah"), hand("Kd Kc")];
        let equities = Equity::enumerate(&holes, Hand::empty()).unwrap();
        assert!(equities[0].equity() > 0.80 && equities[0].equity() < 0.84);
        assert!((equities[0].equity() + equities[1].equity() - 1.).abs() < 1e-9);
    }

    #[test]
    fn simulation_is_close_to_enumeration() {
        let holes = [hand("Ah Kh"), hand("Qs Qc")];
        let board = hand("2h 7h Jd");
        let exact = Equity::enumerate(&holes, board).unwrap();
        let noisy = Equity::simulate(&holes, board, 20_000).unwrap();
        assert!((exact[0].equity() - noisy[0].equity()).abs() < 0.03);
    }

    #[test]
    fn invalid_inputs() {
        let board = Hand::empty();
        assert_eq!(
            Equity::enumerate(&[hand("As Ah")], board),
            Err(Error::TooFewPlayers(1))
        );
        assert_eq!(
            Equity::enumerate(&[hand("As Ah Ad"), hand("Ks Kh")], board),
            Err(Error::InvalidHole(3))
        );
        assert_eq!(
            Equity::enumerate(&[hand("As Ah"), hand("As Kh")], board),
            Err(Error::Overlap(hand("As Kh").to_string()))
        );
        assert_eq!(
            Equity::enumerate(&[hand("As Ah"), hand("Ks Kh")], hand("2c 3c 4c 5c 6c 7c")),
            Err(Error::BoardTooLarge(6))
        );
        assert_eq!(
            Equity::simulate(&[hand("As Ah"), hand("Ks Kh")], board, 0),
            Err(Error::NoRounds)
        );
    }
}
