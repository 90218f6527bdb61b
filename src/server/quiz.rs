use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// Picks the next quiz question uniformly at random among questions whose
/// id has not been served yet. Returns `None` once every id in the pool has
/// been served (an empty pool counts as exhausted).
///
/// Exhaustion is decided by id membership, so duplicate or out-of-pool ids
/// in `previous` cannot make the draw spin or starve.
pub fn draw<'a>(
    pool: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut impl Rng,
) -> Option<&'a Question> {
    let unseen: Vec<&Question> = pool
        .iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();
    unseen.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category: 1,
            difficulty: 2,
        }
    }

    #[test]
    fn never_returns_a_served_id() {
        let pool: Vec<Question> = (1..=5).map(question).collect();
        let previous: HashSet<i64> = [1, 2, 4].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let drawn = draw(&pool, &previous, &mut rng).expect("unseen questions remain");
            assert!(!previous.contains(&drawn.id));
        }
    }

    #[test]
    fn every_unseen_question_is_reachable() {
        let pool: Vec<Question> = (1..=6).map(question).collect();
        let previous: HashSet<i64> = [2, 5].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen: HashSet<i64> = HashSet::new();
        for _ in 0..200 {
            seen.insert(draw(&pool, &previous, &mut rng).unwrap().id);
        }
        assert_eq!(seen, [1, 3, 4, 6].into_iter().collect());
    }

    #[test]
    fn exhausted_when_all_ids_served() {
        let pool: Vec<Question> = (1..=3).map(question).collect();
        let previous: HashSet<i64> = [1, 2, 3].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(draw(&pool, &previous, &mut rng).is_none());
    }

    #[test]
    fn stray_ids_do_not_fake_exhaustion() {
        // three served ids, but only one belongs to the pool
        let pool: Vec<Question> = (1..=2).map(question).collect();
        let previous: HashSet<i64> = [1, 90, 91].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(draw(&pool, &previous, &mut rng).unwrap().id, 2);
    }

    #[test]
    fn empty_pool_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(draw(&[], &HashSet::new(), &mut rng).is_none());
    }
}
