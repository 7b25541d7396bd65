use chrono::Utc;
use movie_board_models::MovieId;

/// Hands out millisecond-timestamp ids.
///
/// Ids are strictly increasing within one generator, and any candidate the
/// caller reports as taken is skipped, so two adds in the same millisecond
/// (or a clash with an id loaded from storage) still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, is_taken: impl Fn(&MovieId) -> bool) -> MovieId {
        let mut candidate = Utc::now().timestamp_millis().max(self.last + 1);
        let mut id = MovieId::new(candidate.to_string());
        while is_taken(&id) {
            candidate += 1;
            id = MovieId::new(candidate.to_string());
        }
        self.last = candidate;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = IdGenerator::new();
        let mut seen = HashSet::new();
        let mut previous = 0i64;
        for _ in 0..500 {
            let id = ids.next_id(|_| false);
            let value: i64 = id.as_str().parse().unwrap();
            assert!(value > previous);
            previous = value;
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn test_taken_ids_are_skipped() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id(|_| false);
        let blocked: i64 = first.as_str().parse::<i64>().unwrap() + 1;
        let blocked_id = MovieId::new(blocked.to_string());

        let next = ids.next_id(|id| id == &blocked_id);
        assert_ne!(next, blocked_id);
        assert!(next.as_str().parse::<i64>().unwrap() > blocked);
    }
}
