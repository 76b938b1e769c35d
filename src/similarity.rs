// src/similarity.rs
//! Heuristic relatedness between a focus course and another course.
//!
//! Direct prerequisite links dominate; a shared cluster or department is a
//! secondary signal; shared individual prerequisites are a weak, capped
//! signal. The score is additive and unbounded above.

use std::collections::HashSet;

use crate::catalog::CourseRecord;
use crate::config::SimilarityWeights;
use crate::ids::normalize;

/// Scores `other` relative to `focus`.
///
/// Zero if either record is absent or both name the same course.
#[must_use]
pub fn score(focus: Option<&CourseRecord>, other: Option<&CourseRecord>, weights: &SimilarityWeights) -> f64 {
    let (Some(focus), Some(other)) = (focus, other) else {
        return 0.0;
    };
    let focus_id = normalize(&focus.id);
    let other_id = normalize(&other.id);
    if focus_id == other_id {
        return 0.0;
    }

    let mut total = 0.0;

    if tags_match(focus.cluster_tag(), other.cluster_tag()) {
        total += weights.cluster;
    }
    if tags_match(focus.department_tag(), other.department_tag()) {
        total += weights.department;
    }

    let focus_prereqs = canonical_set(&focus.prerequisites);
    let other_prereqs = canonical_set(&other.prerequisites);

    let overlap = shared_prerequisites(&focus_prereqs, &other_prereqs);
    if overlap > 0 {
        #[allow(clippy::cast_precision_loss)]
        let shared = weights.shared_prereq_step * overlap as f64;
        total += shared.min(weights.shared_prereq_cap);
    }

    if focus_prereqs.contains(&other_id) || other_prereqs.contains(&focus_id) {
        total += weights.direct_prereq;
    }

    total
}

/// Number of distinct prerequisites both courses list.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn shared_prerequisites(a: &HashSet<String>, b: &HashSet<String>) -> usize {
    a.intersection(b).count()
}

fn tags_match(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

fn canonical_set(ids: &[String]) -> HashSet<String> {
    ids.iter()
        .map(|id| normalize(id))
        .filter(|id| !id.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w() -> SimilarityWeights {
        SimilarityWeights::default()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_absent_or_same_is_zero() {
        let a = CourseRecord::new("CSC 172").with_cluster("Core");
        assert!(close(score(None, Some(&a), &w()), 0.0));
        assert!(close(score(Some(&a), None, &w()), 0.0));
        assert!(close(score(Some(&a), Some(&a), &w()), 0.0));
        let same = CourseRecord::new("csc172").with_cluster("Core");
        assert!(close(score(Some(&a), Some(&same), &w()), 0.0));
    }

    #[test]
    fn test_cluster_and_department() {
        let a = CourseRecord::new("CSC 172").with_cluster("Core").with_department("CSC");
        let b = CourseRecord::new("CSC 173").with_cluster("Core").with_department("CSC");
        assert!(close(score(Some(&a), Some(&b), &w()), 2.6));

        let c = CourseRecord::new("CSC 174").with_cluster("Writing").with_department("CSC");
        assert!(close(score(Some(&a), Some(&c), &w()), 1.0));

        let blank = CourseRecord::new("X").with_cluster("").with_department("");
        let blank2 = CourseRecord::new("Y").with_cluster("").with_department("");
        assert!(close(score(Some(&blank), Some(&blank2), &w()), 0.0));
    }

    #[test]
    fn test_shared_prerequisites_capped() {
        let a = CourseRecord::new("A").with_prerequisites(["P1", "P2", "P3", "P4"]);
        let one = CourseRecord::new("B").with_prerequisites(["p1"]);
        let many = CourseRecord::new("C").with_prerequisites(["P1", "P2", "P3", "P4"]);
        assert!(close(score(Some(&a), Some(&one), &w()), 0.5));
        assert!(close(score(Some(&a), Some(&many), &w()), 1.2));
    }

    #[test]
    fn test_direct_prerequisite_both_directions() {
        let a = CourseRecord::new("A");
        let b = CourseRecord::new("B").with_prerequisites(["A"]);
        assert!(close(score(Some(&a), Some(&b), &w()), 2.5));
        assert!(close(score(Some(&b), Some(&a), &w()), 2.5));
    }

    #[test]
    fn test_terms_add_without_cap() {
        let a = CourseRecord::new("CSC 172")
            .with_cluster("Core")
            .with_department("CSC")
            .with_prerequisites(["CSC 171", "MATH 141"]);
        let b = CourseRecord::new("CSC 173")
            .with_cluster("Core")
            .with_department("CSC")
            .with_prerequisites(["CSC 172", "CSC 171", "MATH 141"]);
        // 1.6 + 1.0 + min(1.2, 1.0) + 2.5
        assert!(close(score(Some(&a), Some(&b), &w()), 6.1));
    }
}
