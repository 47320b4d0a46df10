//! Transitive closure of finite binary relations.
//!
//! The closure `R*` of a relation `R` is the smallest transitive relation containing `R`.
//!
//! # Algorithm Variants
//!
//! - **Warshall** (default): For each element `k`, relates `i` to `j` whenever `i` is related
//!   to `k` and `k` is related to `j`. The element loop must be the outermost one. Runs in
//!   `O(n^3)`.
//! - **Boolean powers**: Computes `M v M^2 v ... v M^n` directly from the definition.
//!   Runs in `O(n^4)` and is mostly useful as a reference model.
//!
//! Both variants are available as step-wise [`Computation`] objects that can be cancelled
//! (or, with the `serde` feature, serialized) between steps. For the common case, use
//! [`transitive_closure`].
//!
//! # Example
//!
//! ```
//! use relation_closure::closure::{WarshallClosure, transitive_closure};
//! use relation_closure::matrix::RelationMatrix;
//! use computation_process::Algorithm;
//!
//! let mut relation = RelationMatrix::new(3).unwrap();
//! relation.set(0, 1, true);
//! relation.set(1, 2, true);
//!
//! let closure = transitive_closure(&relation);
//! assert!(closure.get(0, 2));
//!
//! let stepwise = WarshallClosure::run(&relation, &relation).unwrap();
//! assert_eq!(closure, stepwise);
//! ```

use crate::log_matrix;
use crate::matrix::RelationMatrix;
use cancel_this::Cancellable;
use computation_process::{Algorithm, Computation};
use log::info;


mod boolean_powers;
mod closure_config;
mod warshall;

pub use boolean_powers::{BooleanPowersState, BooleanPowersStep};
pub use closure_config::ClosureConfig;
pub use warshall::{WarshallState, WarshallStep};

/// A helper alias which allows us to use [`ClosureComputation`] as shorthand for
/// `Computation<Context = ClosureConfig, Output = RelationMatrix>`.
pub type ClosureComputation<STATE, STEP> = Computation<ClosureConfig, STATE, RelationMatrix, STEP>;

/// A helper trait which allows us to use [`ClosureAlgorithm`] as shorthand for
/// `Algorithm<Context = ClosureConfig, Output = RelationMatrix>`.
pub trait ClosureAlgorithm<STATE>:
    Algorithm<ClosureConfig, STATE, RelationMatrix> + 'static
{
}
impl<STATE, T: Algorithm<ClosureConfig, STATE, RelationMatrix> + 'static> ClosureAlgorithm<STATE>
    for T
{
}

/// Warshall's algorithm, one intermediate element per step.
pub type WarshallClosure = ClosureComputation<WarshallState, WarshallStep>;

/// The closure as a union of boolean powers of the relation, one power per step.
pub type BooleanPowersClosure = ClosureComputation<BooleanPowersState, BooleanPowersStep>;

/// Compute the transitive closure of `relation` using Warshall's algorithm.
///
/// The input is not modified; the closure is a new matrix of the same size.
pub fn transitive_closure(relation: &RelationMatrix) -> RelationMatrix {
    let mut state = WarshallState::from(relation);
    while !state.is_done() {
        state.apply_hop();
    }
    state.into()
}

/// Selects the algorithm used to compute a closure.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClosureMethod {
    #[default]
    Warshall,
    BooleanPowers,
}

impl ClosureMethod {
    /// Compute the closure of `relation` using this method.
    pub fn run(&self, relation: &RelationMatrix) -> Cancellable<RelationMatrix> {
        self.run_with_config(ClosureConfig::from(relation))
    }

    /// Compute the closure of [`ClosureConfig::relation`] using this method.
    pub fn run_with_config(&self, config: ClosureConfig) -> Cancellable<RelationMatrix> {
        info!(
            "Computing {:?} closure of ({}).",
            self,
            log_matrix(&config.relation)
        );

        let relation = config.relation.clone();
        let closure = match self {
            ClosureMethod::Warshall => WarshallClosure::run(config, &relation)?,
            ClosureMethod::BooleanPowers => BooleanPowersClosure::run(config, &relation)?,
        };

        info!(
            "{:?} closure terminated with ({}).",
            self,
            log_matrix(&closure)
        );
        Ok(closure)
    }
}
