//! Pareto frontier extraction and front ranking.
//!
//! Operates on [`crate::domain::Solution`] batches: candidate whole
//! routes reduced to their objective values. Batch sizes are the number
//! of routes under final consideration (tens, not thousands), so the
//! O(n²) pairwise comparison is the right trade-off against algorithmic
//! complexity.
//!
//! # Key Functions
//!
//! - [`find_pareto_frontier`]: the non-dominated subset of a batch
//! - [`pareto_rank`]: a full front ordering (rank 1 = frontier, rank 2 =
//!   frontier of the remainder, ...)
//!
//! Both are pure and stateless: a fresh result per call, no caching, no
//! history.
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II*

mod engine;

pub use engine::{find_pareto_frontier, pareto_rank, RankedSolution};
