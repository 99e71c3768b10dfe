//! Injected randomness for paddle bounces
//!
//! The simulation never owns a global RNG. Each tick receives a
//! [`SignSource`]; the host keeps a seeded [`GameRng`] for real play and
//! tests pass a scripted source.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Produces a uniformly chosen direction sign: -1 or +1
pub trait SignSource {
    fn next_sign(&mut self) -> i32;
}

/// Seeded PCG32 sign source
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SignSource for GameRng {
    fn next_sign(&mut self) -> i32 {
        if self.rng.random_bool(0.5) { -1 } else { 1 }
    }
}

/// Adapts a closure into a [`SignSource`]
pub struct SignFn<F>(pub F);

impl<F: FnMut() -> i32> SignSource for SignFn<F> {
    fn next_sign(&mut self) -> i32 {
        if (self.0)() < 0 { -1 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signs_are_unit() {
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let s = rng.next_sign();
            assert!(s == -1 || s == 1, "unexpected sign {s}");
        }
    }

    #[test]
    fn test_both_signs_appear() {
        let mut rng = GameRng::new(42);
        let signs: Vec<i32> = (0..64).map(|_| rng.next_sign()).collect();
        assert!(signs.contains(&-1));
        assert!(signs.contains(&1));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(12345);
        let mut b = GameRng::new(12345);
        for _ in 0..32 {
            assert_eq!(a.next_sign(), b.next_sign());
        }
    }

    #[test]
    fn test_sign_fn_normalizes() {
        let mut src = SignFn(|| -7);
        assert_eq!(src.next_sign(), -1);
        let mut src = SignFn(|| 3);
        assert_eq!(src.next_sign(), 1);
        let mut src = SignFn(|| 0);
        assert_eq!(src.next_sign(), 1);
    }
}
