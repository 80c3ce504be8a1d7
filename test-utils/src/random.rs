use core::{num::ParseIntError, ops::RangeBounds, str::FromStr};

pub use rand::{CryptoRng, Rng, RngCore, SeedableRng, distr::Alphanumeric};
use rand_chacha::ChaChaRng;
use rstest::fixture;

/// Env var to reproduce a failed run: the seed is printed by every test
/// that uses [`random_seed`].
pub const SEED_ENV_VAR: &str = "TOKENSIG_TEST_SEED";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Seed(pub u64);

impl Seed {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_os_rng().next_u64())
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl FromStr for Seed {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for Seed {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[derive(Debug, Clone)]
pub struct TestRng(ChaChaRng);

impl TestRng {
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self(ChaChaRng::seed_from_u64(seed.as_u64()))
    }
}

impl RngCore for TestRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}

impl CryptoRng for TestRng {}

#[must_use]
pub fn make_seedable_rng(seed: Seed) -> impl Rng + CryptoRng {
    TestRng::new(seed)
}

fn range_to_random_size(rng: &mut impl Rng, size: impl RangeBounds<usize>) -> usize {
    let start = match size.start_bound() {
        core::ops::Bound::Included(&n) => n,
        core::ops::Bound::Excluded(&n) => n + 1,
        core::ops::Bound::Unbounded => 0,
    };
    let end = match size.end_bound() {
        core::ops::Bound::Included(&n) => n + 1,
        core::ops::Bound::Excluded(&n) => n,
        core::ops::Bound::Unbounded => usize::MAX,
    };
    rng.random_range(start..end)
}

pub fn gen_random_bytes(rng: &mut impl Rng, size: impl RangeBounds<usize>) -> Vec<u8> {
    let mut bytes = vec![0; range_to_random_size(rng, size)];
    rng.fill_bytes(&mut bytes);
    bytes
}

pub fn gen_random_string(rng: &mut impl Rng, size: impl RangeBounds<usize>) -> String {
    let size = range_to_random_size(rng, size);
    rng.sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/// Random 32-byte digest
pub fn gen_random_hash(rng: &mut impl Rng) -> [u8; 32] {
    rng.random()
}

/// Random NEAR sub-account of `parent`, e.g. `k3x9q.test.near`
pub fn gen_random_account_name(rng: &mut impl Rng, parent: &str) -> String {
    format!(
        "{}.{parent}",
        gen_random_string(rng, 5..=16).to_ascii_lowercase()
    )
}

/// Seed taken from [`SEED_ENV_VAR`] if set, random otherwise.
#[fixture]
pub fn random_seed() -> Seed {
    let seed = std::env::var(SEED_ENV_VAR)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(Seed::from_entropy);
    println!("{SEED_ENV_VAR}={}", seed.as_u64());
    seed
}

#[fixture]
pub fn rng(random_seed: Seed) -> impl Rng + CryptoRng {
    make_seedable_rng(random_seed)
}
