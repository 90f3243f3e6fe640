//! Seed resolution for requests that may or may not carry an explicit seed.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Provided(u32),
    Generated(u32),
}

impl SeedChoice {
    pub fn value(self) -> u32 {
        match self {
            Self::Provided(seed) | Self::Generated(seed) => seed,
        }
    }

    pub fn was_generated(self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

pub fn resolve_seed(requested: Option<u32>) -> SeedChoice {
    match requested {
        Some(seed) => SeedChoice::Provided(seed),
        None => SeedChoice::Generated(generate_runtime_seed()),
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Draw a fresh 32-bit seed from the clock, the process id and a call counter.
pub fn generate_runtime_seed() -> u32 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    fold_to_u32(mix_seed(entropy))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

fn fold_to_u32(value: u64) -> u32 {
    ((value >> 32) ^ (value & 0xFFFF_FFFF)) as u32
}
