use super::card::Card;
use super::hand::Hand;

/// HandIterator walks every n-card subset of the deck, lowest bitstring first.
///
/// It holds only the current bitstring, a mask of blocked cards, and the
/// number of low bits in play, so iteration never allocates. Successors come
/// from Gosper's hack; blocked cards are skipped by advancing past them.
///
/// Bounding the universe with [`HandIterator::below`] enumerates only
/// subsets of the cards beneath a given one, which is how enumeration is
/// partitioned by highest card.
pub struct HandIterator {
    next: u64,
    mask: u64,
    bits: u32,
}

impl HandIterator {
    /// n-card subsets of the cards strictly below `card`, avoiding the blocked cards.
    pub fn below(n: usize, card: Card, blocked: Hand) -> Self {
        Self::start(n, u64::from(blocked), u8::from(card) as u32)
    }

    pub fn combinations(&self) -> usize {
        let n = self.bits as usize - Hand::from(self.mask & Self::universe(self.bits)).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn start(n: usize, mask: u64, bits: u32) -> Self {
        let mut this = Self {
            next: (1 << n) - 1,
            mask,
            bits,
        };
        while this.next & this.mask > 0 && !this.exhausted() {
            this.next = this.permute();
        }
        this
    }

    const fn universe(bits: u32) -> u64 {
        (1 << bits) - 1
    }

    fn exhausted(&self) -> bool {
        self.next & !Self::universe(self.bits) != 0
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn advance(&mut self) {
        // the empty set is the only 0-card subset
        if self.next == 0 {
            self.next = !0;
            return;
        }
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted() {
            (0, Some(0))
        } else {
            (0, Some(self.combinations()))
        }
    }
}

/// n-card subsets of the whole deck that avoid the blocked cards
impl From<(usize, Hand)> for HandIterator {
    fn from((n, blocked): (usize, Hand)) -> Self {
        Self::start(n, u64::from(blocked), Card::COUNT as u32)
    }
}
