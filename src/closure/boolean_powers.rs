use crate::closure::ClosureConfig;
use crate::log_matrix;
use crate::matrix::RelationMatrix;
use cancel_this::{Cancelled, is_cancelled};
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::debug;

/// Intermediate state of the boolean powers closure.
///
/// `power` is `M^iteration` and `closure` is `M v M^2 v ... v M^iteration`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BooleanPowersState {
    pub iteration: usize,
    pub power: RelationMatrix,
    pub closure: RelationMatrix,
}

impl From<RelationMatrix> for BooleanPowersState {
    fn from(value: RelationMatrix) -> Self {
        BooleanPowersState {
            iteration: 1,
            power: value.clone(),
            closure: value,
        }
    }
}

impl From<&RelationMatrix> for BooleanPowersState {
    fn from(value: &RelationMatrix) -> Self {
        Self::from(value.clone())
    }
}

/// Implementation of [`ComputationStep`] which computes the next power of the relation
/// and adds it to the closure.
///
/// Paths longer than `n` never relate new pairs, so at most `n - 1` products are needed.
/// The computation also stops once a power contributes no new pair, since all higher
/// powers are then contained in the closure as well.
pub struct BooleanPowersStep;

impl ComputationStep<ClosureConfig, BooleanPowersState, RelationMatrix> for BooleanPowersStep {
    fn step(
        context: &ClosureConfig,
        state: &mut BooleanPowersState,
    ) -> Completable<RelationMatrix> {
        if state.iteration >= state.closure.size() {
            debug!(
                "[iteration:{}] BooleanPowers finished with ({}).",
                state.iteration,
                log_matrix(&state.closure)
            );
            return Ok(state.closure.clone());
        }

        if state.iteration > context.max_iterations {
            debug!(
                "[iteration:{}] BooleanPowers canceled (exceeded iteration count).",
                state.iteration
            );
            return Err(Cancelled::new("ClosureConfig::max_iterations").into());
        }

        is_cancelled!()?;
        let next = state.power.product(&context.relation);
        state.iteration += 1;

        if next.is_subset(&state.closure) {
            debug!(
                "[iteration:{}] BooleanPowers reached a fixed point ({}).",
                state.iteration,
                log_matrix(&state.closure)
            );
            return Ok(state.closure.clone());
        }

        state.closure = state.closure.union(&next);
        state.power = next;

        debug!(
            "[iteration:{}] BooleanPowers increased to ({}).",
            state.iteration,
            log_matrix(&state.closure)
        );

        Err(Suspended)
    }
}
