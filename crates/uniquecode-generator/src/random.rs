use crate::Generator;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use uniquecode_core::error::{CoreError, Result};
use uniquecode_core::{Clock, SystemClock, UniqueCode, ALPHABET, MAX_LENGTH, MIN_LENGTH};

/// Spreads the per-process sequence across all 64 seed bits.
const SEED_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

static SEED_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Draws every character independently and uniformly from [`ALPHABET`].
///
/// The entropy source is owned by the generator and guarded by a mutex, so a
/// single instance can serve concurrent requests. Build it with
/// [`RandomCodeGenerator::new`] in production and
/// [`RandomCodeGenerator::with_seed`] where output must be reproducible.
pub struct RandomCodeGenerator {
    rng: Mutex<StdRng>,
}

impl RandomCodeGenerator {
    /// Creates a generator seeded from the system clock.
    pub fn new() -> Self {
        Self::from_clock(&SystemClock)
    }

    /// Creates a generator seeded from the given clock's current time.
    ///
    /// The reading is mixed with a per-process sequence, so generators
    /// created within the same clock tick still start from different seeds.
    pub fn from_clock<C: Clock>(clock: &C) -> Self {
        let nanos = clock.now().as_nanosecond() as u64;
        let sequence = SEED_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self::with_seed(nanos ^ sequence.wrapping_mul(SEED_SPREAD))
    }

    /// Creates a generator with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RandomCodeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomCodeGenerator").finish_non_exhaustive()
    }
}

impl Generator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> Result<UniqueCode> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(CoreError::InvalidLength(
                i64::try_from(length).unwrap_or(i64::MAX),
            ));
        }

        let mut rng = self.rng.lock();
        let code: String = (0..length)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();

        Ok(UniqueCode::new_unchecked(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use std::collections::HashSet;
    use std::sync::Arc;
    use uniquecode_core::FixedClock;

    fn assert_in_alphabet(code: &UniqueCode) {
        assert!(
            code.as_str().bytes().all(|b| ALPHABET.contains(&b)),
            "unexpected symbol in {code}"
        );
    }

    #[test]
    fn generates_requested_length_for_every_valid_length() {
        let generator = RandomCodeGenerator::with_seed(7);

        for length in 1..=255 {
            let code = generator.generate(length).unwrap();
            assert_eq!(code.len(), length);
            assert_in_alphabet(&code);
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        let generator = RandomCodeGenerator::with_seed(7);
        assert_eq!(generator.generate(0), Err(CoreError::InvalidLength(0)));
    }

    #[test]
    fn lengths_above_255_are_rejected() {
        let generator = RandomCodeGenerator::with_seed(7);
        assert_eq!(generator.generate(256), Err(CoreError::InvalidLength(256)));
        assert_eq!(generator.generate(300), Err(CoreError::InvalidLength(300)));
    }

    #[test]
    fn generated_codes_pass_validation() {
        let generator = RandomCodeGenerator::new();
        let code = generator.generate(12).unwrap();
        assert_eq!(UniqueCode::new(code.as_str()), Ok(code));
    }

    #[test]
    fn same_seed_reproduces_the_same_codes() {
        let first = RandomCodeGenerator::with_seed(20_240_301);
        let second = RandomCodeGenerator::with_seed(20_240_301);

        for length in [1, 8, 12, 255] {
            assert_eq!(
                first.generate(length).unwrap(),
                second.generate(length).unwrap()
            );
        }
    }

    #[test]
    fn seeded_generator_matches_known_output() {
        // Pinned so a change in the seeding or sampling path shows up here.
        let code = RandomCodeGenerator::with_seed(42).generate(12).unwrap();
        assert_eq!(code.as_str(), "TB0A7SOFAX4S");

        let code = RandomCodeGenerator::with_seed(20_240_301).generate(12).unwrap();
        assert_eq!(code.as_str(), "CL6WS6NO526E");
    }

    #[test]
    fn different_seeds_diverge() {
        let first = RandomCodeGenerator::with_seed(1).generate(16).unwrap();
        let second = RandomCodeGenerator::with_seed(2).generate(16).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn time_seeded_generators_are_not_predictable() {
        let first = RandomCodeGenerator::new().generate(12).unwrap();
        let second = RandomCodeGenerator::new().generate(12).unwrap();
        assert_ne!(first, second, "time-seeded generators produced the same code");
    }

    #[test]
    fn generators_built_in_the_same_tick_diverge() {
        let clock = FixedClock::new(Timestamp::from_second(1_700_000_000).unwrap());

        let first = RandomCodeGenerator::from_clock(&clock).generate(12).unwrap();
        let second = RandomCodeGenerator::from_clock(&clock).generate(12).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn every_symbol_shows_up() {
        let generator = RandomCodeGenerator::with_seed(99);
        let code = generator.generate(MAX_LENGTH).unwrap();
        let more = generator.generate(MAX_LENGTH).unwrap();

        let seen: HashSet<u8> = code.as_str().bytes().chain(more.as_str().bytes()).collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn shared_generator_serves_concurrent_callers() {
        let generator = Arc::new(RandomCodeGenerator::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || {
                    (0..100)
                        .map(|_| generator.generate(8).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let codes: Vec<UniqueCode> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(codes.len(), 800);
        codes.iter().for_each(assert_in_alphabet);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomCodeGenerator>();
    }
}
