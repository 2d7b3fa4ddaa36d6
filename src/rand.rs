use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source used by the data generators.
///
/// A fixed seed gives reproducible inputs; without one the generator is
/// seeded from the operating system and every run sees different data.
pub fn benchmark_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
