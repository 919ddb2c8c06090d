//! Next-question selection for the trivia quiz.
//!
//! The random source is injected through [`QuestionPicker`] so the HTTP
//! layer can use thread-local randomness while tests pin the outcome with
//! a seeded generator.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::DbId;

/// Category id meaning "questions from every category".
pub const ALL_CATEGORIES: DbId = 0;

/// Something identified by a database id.
pub trait Identified {
    fn id(&self) -> DbId;
}

/// Chooses one index out of `len` candidates.
///
/// Implementations must return a value in `0..len`; callers never ask
/// with `len == 0`.
pub trait QuestionPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl QuestionPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Uniform choice from a seeded generator; repeatable across runs.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl QuestionPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..len)
    }
}

/// Drop every candidate whose id appears in `previous`, keeping order.
pub fn remaining_candidates<T: Identified>(candidates: Vec<T>, previous: &[DbId]) -> Vec<T> {
    let seen: HashSet<DbId> = previous.iter().copied().collect();
    candidates
        .into_iter()
        .filter(|c| !seen.contains(&c.id()))
        .collect()
}

/// Pick the next quiz question, never one already asked.
///
/// Returns `None` once every candidate has been served, which the API
/// reports as a completed quiz.
pub fn next_question<T: Identified>(
    candidates: Vec<T>,
    previous: &[DbId],
    picker: &dyn QuestionPicker,
) -> Option<T> {
    let mut pool = remaining_candidates(candidates, previous);
    if pool.is_empty() {
        return None;
    }
    let index = picker.pick(pool.len()).min(pool.len() - 1);
    Some(pool.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Q(DbId);

    impl Identified for Q {
        fn id(&self) -> DbId {
            self.0
        }
    }

    /// Always answers with the same index.
    struct FixedPicker(usize);

    impl QuestionPicker for FixedPicker {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    fn pool(ids: &[DbId]) -> Vec<Q> {
        ids.iter().copied().map(Q).collect()
    }

    #[test]
    fn single_remaining_candidate_is_always_chosen() {
        let picker = SeededPicker::new(7);
        for _ in 0..50 {
            let next = next_question(pool(&[10, 11]), &[10], &picker);
            assert_eq!(next, Some(Q(11)));
        }
    }

    #[test]
    fn exhausted_pool_completes_the_quiz() {
        let next = next_question(pool(&[1, 2, 3]), &[3, 1, 2], &ThreadRngPicker);
        assert_eq!(next, None);
    }

    #[test]
    fn empty_pool_completes_the_quiz() {
        let next = next_question(Vec::<Q>::new(), &[], &ThreadRngPicker);
        assert_eq!(next, None);
    }

    #[test]
    fn never_returns_a_previous_question() {
        let picker = SeededPicker::new(42);
        let previous = [2, 4, 6, 8];
        for _ in 0..200 {
            let next = next_question(pool(&[1, 2, 3, 4, 5, 6, 7, 8]), &previous, &picker)
                .expect("candidates remain");
            assert!(!previous.contains(&next.0));
        }
    }

    #[test]
    fn picker_index_selects_among_remaining() {
        let next = next_question(pool(&[1, 2, 3, 4]), &[1, 3], &FixedPicker(1));
        assert_eq!(next, Some(Q(4)));
    }

    #[test]
    fn out_of_range_pick_is_clamped() {
        let next = next_question(pool(&[5, 6]), &[], &FixedPicker(99));
        assert_eq!(next, Some(Q(6)));
    }

    #[test]
    fn seeded_pickers_repeat() {
        let a = SeededPicker::new(3);
        let b = SeededPicker::new(3);
        let left: Vec<usize> = (0..20).map(|_| a.pick(10)).collect();
        let right: Vec<usize> = (0..20).map(|_| b.pick(10)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|i| *i < 10));
    }

    #[test]
    fn remaining_keeps_input_order() {
        let rest = remaining_candidates(pool(&[9, 8, 7, 6]), &[8]);
        assert_eq!(rest, pool(&[9, 7, 6]));
    }
}
