//! Property tests for credit derivation and search.

use proptest::prelude::*;

use course_model::{Course, CourseCategory, CourseId, CreditBounds, CreditStatus};
use course_registration::RegistrationState;

const NAMES: &[&str] = &[
    "Database Systems",
    "Data Mining",
    "Software Engineering",
    "Computer Networks",
    "Operating Systems",
];

const LECTURERS: &[&str] = &["Dr. Siti Aminah", "Prof. Ahmad Zaki", "Dr. Nurul Huda"];

fn catalog_strategy() -> impl Strategy<Value = Vec<(u32, usize, usize, bool)>> {
    prop::collection::vec(
        (1u32..=6, 0..NAMES.len(), 0..LECTURERS.len(), any::<bool>()),
        0..20,
    )
}

fn build_courses(specs: &[(u32, usize, usize, bool)]) -> Vec<Course> {
    specs
        .iter()
        .enumerate()
        .map(|(index, &(credits, name, lecturer, _))| {
            Course::new(
                CourseId::new(format!("C{index:03}-01")).unwrap(),
                format!("C{index:03}"),
                NAMES[name],
                LECTURERS[lecturer],
                "TBA",
                credits,
                CourseCategory::Elective,
            )
            .unwrap()
        })
        .collect()
}

fn bounds_strategy() -> impl Strategy<Value = CreditBounds> {
    (0u32..30, 0u32..30).prop_map(|(a, b)| CreditBounds::new(a.min(b), a.max(b)).unwrap())
}

fn selected_state(specs: &[(u32, usize, usize, bool)], bounds: CreditBounds) -> RegistrationState {
    let mut state = RegistrationState::new(build_courses(specs), bounds);
    for (index, &(_, _, _, pick)) in specs.iter().enumerate() {
        if pick {
            state.toggle_selection(&format!("C{index:03}-01"));
        }
    }
    state
}

proptest! {
    #[test]
    fn totals_match_selected_subset(specs in catalog_strategy(), bounds in bounds_strategy()) {
        let state = selected_state(&specs, bounds);
        let expected_total: u32 = specs.iter().filter(|s| s.3).map(|s| s.0).sum();
        let expected_count = specs.iter().filter(|s| s.3).count();
        prop_assert_eq!(state.total_credits(), expected_total);
        prop_assert_eq!(state.selected_count(), expected_count);
    }

    #[test]
    fn can_register_iff_within_bounds(specs in catalog_strategy(), bounds in bounds_strategy()) {
        let state = selected_state(&specs, bounds);
        let total = state.total_credits();
        let expected = total > 0 && bounds.min() <= total && total <= bounds.max();
        prop_assert_eq!(state.can_register(), expected);
    }

    #[test]
    fn exactly_one_status_holds(total in 0u32..60, bounds in bounds_strategy()) {
        let status = CreditStatus::evaluate(total, bounds);
        let empty = total == 0;
        let below = !empty && total < bounds.min();
        let above = !empty && !below && total > bounds.max();
        let within = !empty && !below && !above;
        prop_assert_eq!(
            [empty, below, above, within].iter().filter(|held| **held).count(),
            1
        );
        let matched = match status {
            CreditStatus::Empty => empty,
            CreditStatus::BelowMinimum { .. } => below,
            CreditStatus::AboveMaximum { .. } => above,
            CreditStatus::WithinRange => within,
        };
        prop_assert!(matched);
    }

    #[test]
    fn search_is_an_ordered_subsequence(
        specs in catalog_strategy(),
        query in prop::sample::select(vec!["", "Data", "Systems", "Dr.", "C00", "Zaki", "zzz"]),
    ) {
        let state = selected_state(&specs, CreditBounds::default());
        let all: Vec<&str> = state.search("").map(|c| c.id.as_str()).collect();
        let catalog: Vec<&str> = state.courses().iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(&all, &catalog);

        let hits: Vec<&str> = state.search(query).map(|c| c.id.as_str()).collect();
        let mut remaining = all.iter();
        for hit in &hits {
            prop_assert!(remaining.any(|id| id == hit));
        }
    }

    #[test]
    fn recompute_twice_is_stable(specs in catalog_strategy(), bounds in bounds_strategy()) {
        let mut state = selected_state(&specs, bounds);
        let first = state.recompute().clone();
        let second = state.recompute().clone();
        prop_assert_eq!(first, second);
    }
}
