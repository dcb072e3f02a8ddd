//! Pure matching logic between chosen skills and job postings.

use indexmap::IndexSet;

use crate::domain::models::JobPosting;

/// Returns the postings whose required skills overlap `chosen_skills`.
///
/// At-least-one-match semantics: a posting qualifies as soon as any one
/// of its required skills is chosen. The input order of `postings` is
/// preserved; there is no ranking, so a posting matching five skills
/// sits next to one matching a single skill.
///
/// An empty `chosen_skills` matches nothing.
pub fn matching_jobs<'a>(
    chosen_skills: &IndexSet<&'static str>,
    postings: &'a [JobPosting],
) -> Vec<&'a JobPosting> {
    postings
        .iter()
        .filter(|posting| {
            posting
                .required_skills
                .iter()
                .any(|skill| chosen_skills.contains(skill))
        })
        .collect()
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::domain::catalog::{job_postings, skills_for};
    use crate::domain::models::ALL_LEVELS;
    use proptest::prelude::*;

    fn all_skills() -> Vec<&'static str> {
        ALL_LEVELS
            .iter()
            .flat_map(|level| skills_for(*level))
            .copied()
            .collect()
    }

    fn arb_chosen() -> impl Strategy<Value = IndexSet<&'static str>> {
        proptest::sample::subsequence(all_skills(), 0..=6)
            .prop_map(|skills| skills.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_result_is_stable_subsequence(chosen in arb_chosen()) {
            let postings = job_postings();
            let result = matching_jobs(&chosen, postings);
            let mut last_index = 0;
            for posting in result {
                let index = postings
                    .iter()
                    .position(|p| std::ptr::eq(p, posting))
                    .unwrap();
                prop_assert!(index >= last_index);
                last_index = index;
            }
        }

        #[test]
        fn prop_every_match_shares_a_skill(chosen in arb_chosen()) {
            for posting in matching_jobs(&chosen, job_postings()) {
                prop_assert!(
                    posting.required_skills.iter().any(|s| chosen.contains(s)),
                    "{} matched without overlap",
                    posting.role
                );
            }
        }

        #[test]
        fn prop_no_overlap_means_excluded(chosen in arb_chosen()) {
            let result = matching_jobs(&chosen, job_postings());
            for posting in job_postings() {
                let overlaps = posting.required_skills.iter().any(|s| chosen.contains(s));
                let included = result.iter().any(|p| std::ptr::eq(*p, posting));
                prop_assert_eq!(overlaps, included, "{}", posting.role);
            }
        }
    }
}
