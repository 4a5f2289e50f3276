use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::db::Question;

/// Which questions a quiz round draws from. Category id `0` on the wire means
/// every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(i64),
}

impl CategoryFilter {
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => question.category == *id,
        }
    }

    pub fn category_id(&self) -> Option<i64> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(id) => Some(*id),
        }
    }

    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "all".to_owned(),
            CategoryFilter::Only(id) => id.to_string(),
        }
    }
}

impl From<i64> for CategoryFilter {
    fn from(id: i64) -> Self {
        if id == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }
}

/// Questions of `pool` that pass `filter` and were not asked yet.
pub fn eligible<'a>(
    filter: CategoryFilter,
    excluded: &HashSet<i64>,
    pool: &'a [Question],
) -> Vec<&'a Question> {
    pool.iter()
        .filter(|q| filter.matches(q) && !excluded.contains(&q.id))
        .collect()
}

/// Picks one eligible question uniformly at random, or `None` once the round
/// has used up every question.
pub fn next_question<'a, R: Rng + ?Sized>(
    filter: CategoryFilter,
    excluded: &HashSet<i64>,
    pool: &'a [Question],
    rng: &mut R,
) -> Option<&'a Question> {
    eligible(filter, excluded, pool).choose(rng).copied()
}

/// Random source shared by every request handler.
#[derive(Clone)]
pub struct QuestionPicker {
    rng: Arc<Mutex<StdRng>>,
}

impl QuestionPicker {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        QuestionPicker {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn pick<'a>(
        &self,
        filter: CategoryFilter,
        excluded: &HashSet<i64>,
        pool: &'a [Question],
    ) -> Option<&'a Question> {
        let mut rng = self.rng.lock();
        next_question(filter, excluded, pool, &mut *rng)
    }
}

impl Default for QuestionPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}
