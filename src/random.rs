//! Sampling without replacement over caller-owned generators.
//!
//! Every sampler takes `&mut R: Rng`. The crate never holds a shared
//! generator, so concurrent callers each bring their own and draws are
//! never interleaved behind their backs. [`shuffle_thread_rng`] is the one
//! exception and borrows the calling thread's generator.
//!
//! Seed a generator with [`create_rng`] to replay the same permutation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Builds a [`SmallRng`] from `seed`.
///
/// Two generators built from the same seed yield the same permutations on
/// the same platform, which is what the tests rely on.
///
/// # Examples
/// ```
/// use u_seqkit::random::{create_rng, shuffle};
/// let a = shuffle(vec![1, 2, 3, 4, 5, 6], &mut create_rng(9));
/// let b = shuffle(vec![1, 2, 3, 4, 5, 6], &mut create_rng(9));
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Returns a uniformly random permutation of `seq`.
///
/// # Algorithm
/// Rejection sampling over positions: draw an index uniformly from
/// `[0, n)`; if that position has not been placed yet, move its element to
/// the next output slot, otherwise discard the draw. Stops once all `n`
/// positions have been placed.
///
/// # Complexity
/// Expected O(n log n) draws (coupon collector). Not bounded in the worst
/// case. Space: O(n).
///
/// # Examples
/// ```
/// use u_seqkit::random::{create_rng, shuffle};
/// let mut rng = create_rng(42);
/// let mut v = shuffle(vec![1, 2, 3, 4, 5], &mut rng);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng>(seq: Vec<T>, rng: &mut R) -> Vec<T> {
    let n = seq.len();
    if n <= 1 {
        return seq;
    }

    let mut slots: Vec<Option<T>> = seq.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(n);
    let mut draws = 0_usize;
    while out.len() < n {
        let idx = rng.random_range(0..n);
        draws += 1;
        if let Some(item) = slots[idx].take() {
            out.push(item);
        }
    }

    tracing::trace!(len = n, draws, rejected = draws - n, "shuffle complete");
    out
}

/// Shuffles `seq` with the calling thread's generator.
///
/// Same algorithm as [`shuffle`]. Use it when reproducibility does not
/// matter; tests should prefer [`shuffle`] with [`create_rng`].
pub fn shuffle_thread_rng<T>(seq: Vec<T>) -> Vec<T> {
    let mut rng = rand::rng();
    shuffle(seq, &mut rng)
}

/// Returns a random permutation of the indices `[0, n)`.
///
/// Useful when you need to visit data in random order without moving it.
///
/// # Examples
/// ```
/// use u_seqkit::random::{create_rng, shuffled_indices};
/// let mut rng = create_rng(42);
/// let indices = shuffled_indices(5, &mut rng);
/// assert_eq!(indices.len(), 5);
/// let mut sorted = indices.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn shuffled_indices<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    shuffle((0..n).collect(), rng)
}

// ============================================================================
// Tests
// ============================================================================
