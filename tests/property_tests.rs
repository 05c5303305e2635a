//! Property-based tests for the enrollment engine and pricing rules.

use course_storefront::domain::model::Money;
use course_storefront::{compute_quote, Catalog, EnrollmentEngine, MemoryStore};
use proptest::prelude::*;
use std::collections::HashMap;

const COURSES: [&str; 7] = [
    "First Aid",
    "Sewing",
    "Life Skills",
    "Landscaping",
    "Child Minding",
    "Cooking",
    "Garden Maintaining",
];

fn course_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(COURSES.to_vec())
}

proptest! {
    /// Toggling leaves exactly the names toggled an odd number of times, without duplicates.
    #[test]
    fn toggle_parity(toggles in prop::collection::vec(course_strategy(), 0..40)) {
        let selection = tokio_test::block_on(async {
            let engine = EnrollmentEngine::new(MemoryStore::new());
            for course in &toggles {
                engine.toggle_enrollment(course).await.expect("toggle");
            }
            engine.selection().await.expect("selection")
        });

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for course in &toggles {
            *counts.entry(*course).or_default() += 1;
        }

        let mut deduped = selection.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), selection.len());

        for course in COURSES {
            let odd = counts.get(course).copied().unwrap_or(0) % 2 == 1;
            prop_assert_eq!(selection.iter().any(|c| c == course), odd);
        }
    }

    /// Quotes are deterministic and the discount never exceeds 15% of the subtotal.
    #[test]
    fn quote_is_deterministic(selection in prop::sample::subsequence(COURSES.to_vec(), 0..=7)) {
        let first = compute_quote(&Catalog, &selection).expect("catalog names");
        let second = compute_quote(&Catalog, &selection).expect("catalog names");
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(first.total, first.subtotal - first.discount_amount);
        prop_assert!(first.discount_amount.cents() * 100 <= first.subtotal.cents() * 15);
        prop_assert!(first.total >= Money::ZERO);
    }

    /// Removing a course twice gives the same selection as removing it once.
    #[test]
    fn remove_is_idempotent(
        selection in prop::sample::subsequence(COURSES.to_vec(), 0..=7),
        target in course_strategy(),
    ) {
        let (once, twice) = tokio_test::block_on(async {
            let engine = EnrollmentEngine::new(MemoryStore::new());
            for course in &selection {
                engine.toggle_enrollment(course).await.expect("toggle");
            }
            let once = engine.remove_course(target).await.expect("remove");
            let twice = engine.remove_course(target).await.expect("remove");
            (once, twice)
        });

        prop_assert!(!once.iter().any(|c| c == target));
        prop_assert_eq!(once, twice);
    }
}
