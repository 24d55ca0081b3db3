//! Uniform shuffle shared by every step of the draw.

use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly shuffled copy of `items`.
///
/// Fisher–Yates: for `i` from the last index down to 1, swap `i` with a uniform index in `[0, i]`.
/// The input slice is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
