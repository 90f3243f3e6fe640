//! Which room types a maze asks for, before any placement happens.

use log::warn;

use crate::catalog::{RoomFilter, RoomType};
use crate::rng::RandomSource;

/// Counts at or above this take distinct types when the pool cannot cover them all.
pub(super) const DISTINCT_SELECTION_THRESHOLD: usize = 7;

/// Shuffle the eligible pool, then:
/// - `count >= pool`: every type once, the rest sampled with replacement;
/// - `count >= 7`: the first `count` shuffled types;
/// - otherwise: `count` samples with replacement.
pub(super) fn select_room_types(
    filter: &RoomFilter,
    count: usize,
    rng: &mut RandomSource,
) -> Vec<RoomType> {
    if count == 0 {
        return Vec::new();
    }
    let mut pool: Vec<RoomType> = filter.iter().collect();
    if pool.is_empty() {
        warn!(target: "maze_core::mapgen", "room filter selects no room types; placing none");
        return Vec::new();
    }
    rng.shuffle(&mut pool);

    if count >= pool.len() {
        let extra = rng.sample_with_replacement(&pool, count - pool.len());
        pool.extend(extra);
        pool
    } else if count >= DISTINCT_SELECTION_THRESHOLD {
        pool.truncate(count);
        pool
    } else {
        rng.sample_with_replacement(&pool, count)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn distinct(types: &[RoomType]) -> usize {
        types.iter().collect::<BTreeSet<_>>().len()
    }

    #[test]
    fn large_counts_include_every_eligible_type() {
        let filter = RoomFilter::from_bits(0b0000_0111);
        let mut rng = RandomSource::new(3);
        let selected = select_room_types(&filter, 9, &mut rng);
        assert_eq!(selected.len(), 9);
        assert_eq!(distinct(&selected[..3]), 3);
        assert!(selected.iter().all(|room_type| filter.contains(*room_type)));
    }

    #[test]
    fn counts_from_seven_up_are_distinct() {
        let mut rng = RandomSource::new(11);
        for count in 7..10 {
            let selected = select_room_types(&RoomFilter::all(), count, &mut rng);
            assert_eq!(selected.len(), count);
            assert_eq!(distinct(&selected), count);
        }
    }

    #[test]
    fn small_counts_may_repeat_types() {
        let filter: RoomFilter = [RoomType::Armory, RoomType::Library, RoomType::TrapRoom]
            .into_iter()
            .collect();
        let repeated = (0..50_u32).any(|seed| {
            let mut rng = RandomSource::new(seed);
            let selected = select_room_types(&filter, 2, &mut rng);
            distinct(&selected) < selected.len()
        });
        assert!(repeated, "sampling with replacement should repeat for some seed");
    }

    #[test]
    fn empty_filter_or_zero_count_selects_nothing() {
        let mut rng = RandomSource::new(1);
        assert!(select_room_types(&RoomFilter::none(), 5, &mut rng).is_empty());
        assert!(select_room_types(&RoomFilter::all(), 0, &mut rng).is_empty());
    }
}
