use crate::closure::ClosureConfig;
use crate::log_matrix;
use crate::matrix::RelationMatrix;
use cancel_this::{Cancelled, is_cancelled};
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::debug;

/// Intermediate state of Warshall's algorithm.
///
/// After `hop` iterations, `closure` contains `(i, j)` iff `j` can be reached from `i`
/// through intermediate elements drawn only from `{0, ..., hop - 1}`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarshallState {
    pub hop: usize,
    pub closure: RelationMatrix,
}

impl From<RelationMatrix> for WarshallState {
    fn from(value: RelationMatrix) -> Self {
        WarshallState {
            hop: 0,
            closure: value,
        }
    }
}

impl From<&RelationMatrix> for WarshallState {
    fn from(value: &RelationMatrix) -> Self {
        Self::from(value.clone())
    }
}

impl From<WarshallState> for RelationMatrix {
    fn from(value: WarshallState) -> Self {
        value.closure
    }
}

impl WarshallState {
    /// True once every element has been used as an intermediate hop.
    pub fn is_done(&self) -> bool {
        self.hop >= self.closure.size()
    }

    /// Allow paths through element `hop` and advance to the next element.
    ///
    /// Returns the number of newly related pairs.
    ///
    /// Row and column `hop` do not change during this iteration, so the update can be
    /// performed in place.
    pub fn apply_hop(&mut self) -> usize {
        let k = self.hop;
        let size = self.closure.size();
        let mut added = 0;
        for i in 0..size {
            for j in 0..size {
                let w_ij = self.closure.get(i, j);
                let w_ikj = self.closure.get(i, k) && self.closure.get(k, j);
                if !w_ij && w_ikj {
                    self.closure.set(i, j, true);
                    added += 1;
                }
            }
        }
        self.hop += 1;
        added
    }
}

/// Implementation of [`ComputationStep`] which performs one iteration of Warshall's
/// algorithm (one intermediate element) per step.
pub struct WarshallStep;

impl ComputationStep<ClosureConfig, WarshallState, RelationMatrix> for WarshallStep {
    fn step(context: &ClosureConfig, state: &mut WarshallState) -> Completable<RelationMatrix> {
        if state.is_done() {
            debug!(
                "[hop:{}] Warshall finished with ({}).",
                state.hop,
                log_matrix(&state.closure)
            );
            return Ok(state.closure.clone());
        }

        if state.hop >= context.max_iterations {
            debug!(
                "[hop:{}] Warshall canceled (exceeded iteration count).",
                state.hop
            );
            return Err(Cancelled::new("ClosureConfig::max_iterations").into());
        }

        is_cancelled!()?;
        let added = state.apply_hop();

        debug!(
            "[hop:{}] Warshall added {} pairs ({}).",
            state.hop,
            added,
            log_matrix(&state.closure)
        );

        Err(Suspended)
    }
}
