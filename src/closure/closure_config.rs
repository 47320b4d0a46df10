use crate::matrix::RelationMatrix;

/// A "flat" configuration object for transitive closure computations.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosureConfig {
    /// The relation whose closure is computed. The computation never modifies it.
    pub relation: RelationMatrix,
    /// Cancel the procedure if it exceeds the specified number of iterations (default:
    /// `usize::MAX`).
    ///
    /// An iteration is one intermediate element for [`crate::closure::WarshallClosure`] and
    /// one matrix product for [`crate::closure::BooleanPowersClosure`].
    pub max_iterations: usize,
}

impl From<RelationMatrix> for ClosureConfig {
    fn from(value: RelationMatrix) -> Self {
        ClosureConfig::new(value)
    }
}

impl From<&RelationMatrix> for ClosureConfig {
    fn from(value: &RelationMatrix) -> Self {
        ClosureConfig::new(value.clone())
    }
}

impl ClosureConfig {
    /// Create a new instance of [`ClosureConfig`] with no iteration limit.
    pub fn new(relation: RelationMatrix) -> ClosureConfig {
        ClosureConfig {
            relation,
            max_iterations: usize::MAX,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> ClosureConfig {
        self.max_iterations = max_iterations;
        self
    }
}
