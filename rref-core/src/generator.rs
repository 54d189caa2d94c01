//! Random practice matrix generation
//!
//! The random source is always passed in by the caller so that generation
//! is reproducible under a seeded RNG.

use rand::distributions::Uniform;
use rand::Rng;

use crate::{Difficulty, Matrix};

/// Smallest generated cell value
pub const CELL_MIN: u8 = 0;

/// Largest generated cell value (inclusive)
pub const CELL_MAX: u8 = 9;

/// Generator of practice matrices
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixGenerator;

impl MatrixGenerator {
    /// Pick one of the difficulty's shapes uniformly at random
    pub fn pick_shape<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> (usize, usize) {
        let shapes = difficulty.shapes();
        shapes[rng.gen_range(0..shapes.len())]
    }

    /// Generate a matrix for `difficulty` with integer cells in `[0, 9]`
    pub fn generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Matrix {
        let (nrows, ncols) = Self::pick_shape(difficulty, rng);
        let cells = Uniform::new_inclusive(CELL_MIN, CELL_MAX);
        Matrix::from_fn(nrows, ncols, |_, _| {
            let value: u8 = rng.sample(&cells);
            f64::from(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_cells_in_range(matrix: &Matrix) {
        for &v in matrix.cells() {
            assert_eq!(v, f64::from(v as u8), "cell {v} is not an integer");
            assert!((CELL_MIN as f64..=CELL_MAX as f64).contains(&v));
        }
    }

    #[test]
    fn test_easy_is_always_2x2() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let m = MatrixGenerator::generate(Difficulty::Easy, &mut rng);
            assert_eq!(m.dimensions(), (2, 2));
            assert_cells_in_range(&m);
        }
    }

    #[test]
    fn test_shapes_follow_difficulty() {
        let mut rng = StdRng::seed_from_u64(42);
        for difficulty in Difficulty::ALL {
            let mut seen = [false; 2];
            for _ in 0..200 {
                let m = MatrixGenerator::generate(difficulty, &mut rng);
                let idx = difficulty
                    .shapes()
                    .iter()
                    .position(|&shape| shape == m.dimensions())
                    .expect("shape not allowed for difficulty");
                seen[idx] = true;
                assert_cells_in_range(&m);
            }
            // Both orientations show up for medium and hard
            assert!(seen[..difficulty.shapes().len()].iter().all(|s| *s));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = MatrixGenerator::generate(Difficulty::Hard, &mut StdRng::seed_from_u64(3));
        let b = MatrixGenerator::generate(Difficulty::Hard, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_cells_cover_full_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 10];
        for _ in 0..100 {
            let m = MatrixGenerator::generate(Difficulty::Hard, &mut rng);
            for &v in m.cells() {
                seen[v as usize] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
