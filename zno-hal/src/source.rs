use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;

/// Seeded ChaCha8 stream used to draw reproducible parameter sets.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn branch(&mut self) -> ([u8; 32], Self) {
        let seed: [u8; 32] = self.new_seed();
        (seed, Source::new(seed))
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.fill_bytes(&mut seed);
        seed
    }

    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    /// Uniform draw in `[lo, hi]`.
    pub fn next_u32_between(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "empty range [{lo}, {hi}]");
        let span: u64 = u64::from(hi - lo) + 1;
        lo + self.next_u64n(span, span.next_power_of_two() - 1) as u32
    }

    /// Uniform pick from a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "cannot choose from an empty slice");
        let len: u64 = items.len() as u64;
        &items[self.next_u64n(len, len.next_power_of_two() - 1) as usize]
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Source::new([7u8; 32]);
        let mut b = Source::new([7u8; 32]);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn draws_stay_in_range() {
        let mut source = Source::new([1u8; 32]);
        for _ in 0..1000 {
            let x: u32 = source.next_u32_between(3, 9);
            assert!((3..=9).contains(&x));
        }
        assert_eq!(source.next_u32_between(5, 5), 5);
        let items: [u32; 3] = [2, 3, 5];
        for _ in 0..100 {
            assert!(items.contains(source.choose(&items)));
        }
    }

    #[test]
    fn branches_diverge() {
        let mut root = Source::new([0u8; 32]);
        let (seed_a, mut a) = root.branch();
        let (seed_b, mut b) = root.branch();
        assert_ne!(seed_a, seed_b);
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
