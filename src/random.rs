//! Seedable random streams.
//!
//! Every optimizer invocation owns exactly one stream, created here at entry
//! from the configured seed. Nothing in the crate keeps ambient RNG state.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic random stream from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
