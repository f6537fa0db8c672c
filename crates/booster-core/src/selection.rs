use std::collections::HashSet;

use crate::booster::Booster;
use crate::catalog::Catalog;

/// Pick the next booster to present, if any.
///
/// Eligible boosters are those not in `viewed`; with `dev_mode` on every
/// booster is eligible and `viewed` is ignored. Among eligible boosters the
/// highest priority wins, and equal priorities resolve to the earliest entry
/// in catalog order. Returns `None` when nothing is eligible.
///
/// Query-only: marking a booster as viewed is a separate step.
pub fn select_next<'a>(
    catalog: &'a Catalog,
    viewed: &HashSet<String>,
    dev_mode: bool,
) -> Option<&'a Booster> {
    // Not max_by_key: that returns the last of equal maxima.
    catalog
        .iter()
        .filter(|b| dev_mode || !viewed.contains(&b.id))
        .fold(None, |best: Option<&Booster>, candidate| match best {
            Some(current) if current.priority >= candidate.priority => Some(current),
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn booster(id: &str, priority: i64) -> Booster {
        Booster::new(id, id, "", "star", "Go", priority)
    }

    fn catalog(entries: &[(&str, i64)]) -> Catalog {
        Catalog::new(entries.iter().map(|(id, p)| booster(id, *p)).collect()).unwrap()
    }

    fn viewed(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_unseen_booster() {
        let c = catalog(&[("a", 10)]);
        assert_eq!(select_next(&c, &viewed(&[]), false).unwrap().id, "a");
    }

    #[test]
    fn test_single_seen_booster() {
        let c = catalog(&[("a", 10)]);
        assert!(select_next(&c, &viewed(&["a"]), false).is_none());
    }

    #[test]
    fn test_dev_mode_ignores_viewed() {
        let c = catalog(&[("a", 10)]);
        assert_eq!(select_next(&c, &viewed(&["a"]), true).unwrap().id, "a");
    }

    #[test]
    fn test_highest_priority_wins() {
        let c = catalog(&[("low", 1), ("high", 10), ("mid", 5)]);
        assert_eq!(select_next(&c, &viewed(&[]), false).unwrap().id, "high");
    }

    #[test]
    fn test_falls_through_to_next_priority() {
        let c = catalog(&[("low", 1), ("high", 10), ("mid", 5)]);
        assert_eq!(select_next(&c, &viewed(&["high"]), false).unwrap().id, "mid");
    }

    #[test]
    fn test_tie_breaks_on_catalog_order() {
        let c = catalog(&[("first", 7), ("second", 7), ("third", 7)]);
        assert_eq!(select_next(&c, &viewed(&[]), false).unwrap().id, "first");
        assert_eq!(
            select_next(&c, &viewed(&["first"]), false).unwrap().id,
            "second"
        );
    }

    #[test]
    fn test_negative_priorities() {
        let c = catalog(&[("a", -5), ("b", -1)]);
        assert_eq!(select_next(&c, &viewed(&[]), false).unwrap().id, "b");
    }

    #[test]
    fn test_empty_catalog() {
        let c = Catalog::default();
        assert!(select_next(&c, &viewed(&[]), false).is_none());
        assert!(select_next(&c, &viewed(&[]), true).is_none());
    }

    #[test]
    fn test_unknown_viewed_ids_are_harmless() {
        let c = catalog(&[("a", 1)]);
        assert_eq!(
            select_next(&c, &viewed(&["zzz", "other"]), false).unwrap().id,
            "a"
        );
    }

    fn arb_catalog() -> impl Strategy<Value = (Catalog, HashSet<String>)> {
        prop::collection::vec((-20i64..20, any::<bool>()), 0..12).prop_map(|entries| {
            let mut seen = HashSet::new();
            let boosters = entries
                .iter()
                .enumerate()
                .map(|(i, (priority, was_viewed))| {
                    let id = format!("b{i}");
                    if *was_viewed {
                        seen.insert(id.clone());
                    }
                    booster(&id, *priority)
                })
                .collect();
            (Catalog::new(boosters).unwrap(), seen)
        })
    }

    proptest! {
        #[test]
        fn prop_selects_max_priority_unseen((catalog, seen) in arb_catalog()) {
            let eligible: Vec<&Booster> =
                catalog.iter().filter(|b| !seen.contains(&b.id)).collect();

            match select_next(&catalog, &seen, false) {
                None => prop_assert!(eligible.is_empty()),
                Some(chosen) => {
                    prop_assert!(!seen.contains(&chosen.id));
                    let max = eligible.iter().map(|b| b.priority).max().unwrap();
                    prop_assert_eq!(chosen.priority, max);
                    let first = eligible.iter().find(|b| b.priority == max).unwrap();
                    prop_assert_eq!(&chosen.id, &first.id);
                }
            }
        }

        #[test]
        fn prop_dev_mode_depends_only_on_catalog((catalog, seen) in arb_catalog()) {
            let with_seen = select_next(&catalog, &seen, true).map(|b| b.id.clone());
            let without = select_next(&catalog, &HashSet::new(), true).map(|b| b.id.clone());
            prop_assert_eq!(with_seen, without);
        }
    }
}
