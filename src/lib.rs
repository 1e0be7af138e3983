use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::internal_util::square_distance;

pub mod error;
mod internal_util;

pub use error::ParameterError;

/// Number of candidate points generated around the current active point
/// before it is retired from the active list.
pub const CANDIDATES_PER_ROUND: u32 = 30;

/// A sample position on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate the point, e.g. to move a sampled set into a canvas region.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (square_distance(self, other) as f64).sqrt()
    }

    pub fn distance_squared(&self, other: &Self) -> i64 {
        square_distance(self, other)
    }
}

/// Parameters of one sampling run over the square domain
/// `[0, size) x [0, size)`.
///
/// Instances only exist with positive `min_distance` and `size`; `new`
/// rejects anything else, and deserialization runs through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedSampleParameters")
)]
pub struct SampleParameters {
    seed: u64,
    min_distance: i32,
    size: i32,
}

#[cfg(feature = "serialize")]
#[derive(serde::Deserialize)]
struct UncheckedSampleParameters {
    seed: u64,
    min_distance: i32,
    size: i32,
}

#[cfg(feature = "serialize")]
impl TryFrom<UncheckedSampleParameters> for SampleParameters {
    type Error = ParameterError;

    fn try_from(raw: UncheckedSampleParameters) -> Result<Self, Self::Error> {
        Self::new(raw.seed, raw.min_distance, raw.size)
    }
}

impl SampleParameters {
    pub fn new(seed: u64, min_distance: i32, size: i32) -> Result<Self, ParameterError> {
        if min_distance <= 0 {
            return Err(ParameterError::NonPositiveDistance(min_distance));
        }
        if size <= 0 {
            return Err(ParameterError::NonPositiveSize(size));
        }
        Ok(Self {
            seed,
            min_distance,
            size,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn min_distance(&self) -> i32 {
        self.min_distance
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Run the sampling with the default generator, seeded from `self.seed`.
    pub fn sample(&self) -> Vec<Point> {
        self.sample_with_rng(&mut StdRng::seed_from_u64(self.seed))
    }

    /// Run the sampling, drawing every random value from `rng`.
    ///
    /// The generator must be exclusively owned by this call; the output is a
    /// pure function of the generator state and the parameters. `self.seed`
    /// is not consulted on this path.
    pub fn sample_with_rng<R: Rng>(&self, rng: &mut R) -> Vec<Point> {
        let min_distance = self.min_distance;
        let size = self.size;
        let min_square = (min_distance as i64).pow(2);

        let first = Point::new(rng.gen_range(0..size), rng.gen_range(0..size));
        let mut samples = vec![first];
        let mut active = vec![first];

        while !active.is_empty() {
            // Uniform choice over the active list; the chosen point is swapped
            // to the back so a fruitless round removes it by truncation
            // without disturbing later uniform choices.
            let index = rng.gen_range(0..active.len());
            let last = active.len() - 1;
            active.swap(index, last);
            let current = active[last];

            let mut found = false;
            // All 30 candidates are tried even after an acceptance, so one
            // round may spawn several points. Breaking early would change the
            // draw order and break seeded reproducibility.
            for _ in 0..CANDIDATES_PER_ROUND {
                let angle = rng.gen_range(0.0..std::f64::consts::TAU);
                let radius = min_distance as i64 + rng.gen_range(0..min_distance) as i64;

                // Offset components are truncated before the add, keeping
                // candidates on the integer grid of the domain. The add runs
                // in i64 so radii near the i32 ceiling cannot overflow.
                let cx = current.x as i64 + (radius as f64 * angle.cos()) as i64;
                let cy = current.y as i64 + (radius as f64 * angle.sin()) as i64;

                let domain = 0..size as i64;
                if !domain.contains(&cx) || !domain.contains(&cy) {
                    continue;
                }
                let candidate = Point::new(cx as i32, cy as i32);

                let separated = samples
                    .iter()
                    .all(|sample| square_distance(sample, &candidate) > min_square);
                if separated {
                    samples.push(candidate);
                    active.push(candidate);
                    found = true;
                }
            }

            if !found {
                active.truncate(last);
            }
        }

        samples
    }
}

/// Generate a blue-noise point set inside `[0, size) x [0, size)` where no
/// two points lie within `min_distance` of each other.
///
/// The result is insertion-ordered with the initial random point first, and
/// is identical across calls with the same arguments.
pub fn sample(seed: u64, min_distance: i32, size: i32) -> Result<Vec<Point>, ParameterError> {
    Ok(SampleParameters::new(seed, min_distance, size)?.sample())
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_separated(samples: &[Point], min_distance: i32) {
        let min_square = (min_distance as i64).pow(2);
        for (i, p) in samples.iter().enumerate() {
            for q in samples.iter().skip(i + 1) {
                assert!(
                    p.distance_squared(q) > min_square,
                    "{:?} and {:?} are closer than {}",
                    p,
                    q,
                    min_distance
                );
            }
        }
    }

    fn assert_in_bounds(samples: &[Point], size: i32) {
        for p in samples {
            assert!((0..size).contains(&p.x), "{:?} outside [0, {})", p, size);
            assert!((0..size).contains(&p.y), "{:?} outside [0, {})", p, size);
        }
    }

    #[test]
    fn test_separation_and_bounds() {
        let samples = sample(1, 5, 50).unwrap();
        assert!(!samples.is_empty());
        assert_separated(&samples, 5);
        assert_in_bounds(&samples, 50);
    }

    #[test]
    fn test_domain_fills_up() {
        let samples = sample(1, 5, 100).unwrap();
        assert!(samples.len() >= 50, "only {} samples", samples.len());
        assert_separated(&samples, 5);
        assert_in_bounds(&samples, 100);
    }

    #[test]
    fn test_determinism() {
        let first = sample(7, 10, 100).unwrap();
        let second = sample(7, 10, 100).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_with_rng_matches_default_path() {
        let params = SampleParameters::new(42, 8, 64).unwrap();
        assert_eq!(
            (params.seed(), params.min_distance(), params.size()),
            (42, 8, 64)
        );
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(params.sample(), params.sample_with_rng(&mut rng));
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_deserialize_revalidates() {
        #[derive(serde::Serialize)]
        struct Raw {
            seed: u64,
            min_distance: i32,
            size: i32,
        }

        let bytes = serde_cbor::to_vec(&Raw {
            seed: 1,
            min_distance: 0,
            size: 50,
        })
        .unwrap();
        assert!(serde_cbor::from_slice::<SampleParameters>(&bytes).is_err());

        let bytes = serde_cbor::to_vec(&Raw {
            seed: 1,
            min_distance: 5,
            size: 50,
        })
        .unwrap();
        let params = serde_cbor::from_slice::<SampleParameters>(&bytes).unwrap();
        assert_eq!(params, SampleParameters::new(1, 5, 50).unwrap());
    }

    #[test]
    fn test_distance_larger_than_domain() {
        for seed in 0..16 {
            let samples = sample(seed, 60, 50).unwrap();
            assert_eq!(samples.len(), 1);
            assert_in_bounds(&samples, 50);
        }
    }

    #[test]
    fn test_distance_near_integer_ceiling() {
        let samples = sample(1, 2_000_000_000, 50).unwrap();
        assert_eq!(samples.len(), 1);
        assert_in_bounds(&samples, 50);

        let samples = sample(3, i32::MAX, 1000).unwrap();
        assert_eq!(samples.len(), 1);
        assert_in_bounds(&samples, 1000);
    }

    #[test]
    fn test_seed_sensitivity() {
        let reference = sample(0, 10, 100).unwrap();
        let differing = (1..64)
            .filter(|&seed| sample(seed, 10, 100).unwrap() != reference)
            .count();
        assert!(differing >= 60, "only {} of 63 seeds differed", differing);
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            SampleParameters::new(0, 0, 50),
            Err(ParameterError::NonPositiveDistance(0))
        );
        assert_eq!(
            SampleParameters::new(0, -3, 50),
            Err(ParameterError::NonPositiveDistance(-3))
        );
        assert_eq!(
            SampleParameters::new(0, 5, 0),
            Err(ParameterError::NonPositiveSize(0))
        );
        assert!(sample(0, 5, -1).is_err());
    }

    #[test]
    fn test_point_offset() {
        let p = Point::new(3, 4).offset(10, -2);
        assert_eq!(p, Point::new(13, 2));
        assert_eq!(Point::new(0, 0).distance(&Point::new(3, 4)), 5.0);
    }
}
