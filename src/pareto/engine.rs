//! Non-dominated sorting over solution batches.

use std::collections::HashSet;

use crate::domain::Solution;

/// A solution annotated with its Pareto front index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedSolution {
    /// The ranked solution.
    pub solution: Solution,
    /// 1-based front index; rank 1 is the Pareto frontier.
    pub rank: u32,
}

/// Returns the non-dominated subset of a batch.
///
/// A solution is on the frontier iff no other batch member dominates it.
/// The result preserves input order, is a subset of the input, and is
/// non-empty whenever the input is non-empty. An empty batch yields an
/// empty result, not an error.
///
/// Naive pairwise comparison, O(n²); batches are routes under final
/// consideration, not raw transport-graph edges.
///
/// # Panics
///
/// Panics if two solutions in the batch share an identifier — duplicate
/// identifiers within one batch are a programmer error.
///
/// # Examples
///
/// ```
/// use route_eval::domain::Solution;
/// use route_eval::pareto::find_pareto_frontier;
///
/// let batch = vec![
///     Solution::new("cheap_slow", 100.0, 500.0, 100.0, 0.5).unwrap(),
///     Solution::new("mid", 300.0, 300.0, 100.0, 0.5).unwrap(),
///     Solution::new("expensive_fast", 500.0, 100.0, 100.0, 0.5).unwrap(),
/// ];
///
/// // Pure cost/time trade-off: all three are non-dominated.
/// assert_eq!(find_pareto_frontier(&batch).len(), 3);
/// ```
pub fn find_pareto_frontier(solutions: &[Solution]) -> Vec<Solution> {
    assert_unique_ids(solutions);

    solutions
        .iter()
        .filter(|candidate| {
            !solutions
                .iter()
                .any(|other| other.id() != candidate.id() && other.dominates(candidate))
        })
        .cloned()
        .collect()
}

/// Assigns a 1-based Pareto rank to every solution in a batch.
///
/// Rank 1 is the frontier of the whole batch, rank 2 the frontier of the
/// remainder, and so on until every solution is ranked. Results are
/// grouped by front, rank 1 first.
///
/// Implemented as fast non-dominated sorting (Deb et al., 2002):
/// dominance is computed once per unordered pair, then fronts are peeled
/// off via domination counts. This produces exactly the same fronts as
/// repeatedly calling [`find_pareto_frontier`] on the shrinking
/// remainder, in O(n²) comparisons instead of O(n³).
///
/// Guarantee: if solution A has a strictly lower rank than solution B,
/// then B does not dominate A.
///
/// # Panics
///
/// Panics if two solutions in the batch share an identifier.
pub fn pareto_rank(solutions: &[Solution]) -> Vec<RankedSolution> {
    assert_unique_ids(solutions);

    let n = solutions.len();
    if n == 0 {
        return Vec::new();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(&solutions[i], &solutions[j]) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        // All pairs involving i have been seen once the inner loop ends.
        if domination_count[i] == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = vec![front_0];
    loop {
        let current = fronts
            .last()
            .expect("fronts is initialized with front_0; never empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    let mut ranked = Vec::with_capacity(n);
    for (front_idx, front) in fronts.iter().enumerate() {
        for &i in front {
            ranked.push(RankedSolution {
                solution: solutions[i].clone(),
                rank: (front_idx + 1) as u32,
            });
        }
    }
    ranked
}

/// Three-way dominance comparison.
#[derive(Debug, PartialEq)]
enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

fn dominance_cmp(a: &Solution, b: &Solution) -> Dominance {
    // Asymmetry of the relation rules out (true, true).
    match (a.dominates(b), b.dominates(a)) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

fn assert_unique_ids(solutions: &[Solution]) {
    let mut seen = HashSet::with_capacity(solutions.len());
    for solution in solutions {
        assert!(
            seen.insert(solution.id()),
            "duplicate solution id in batch: {}",
            solution.id()
        );
    }
}
