//! Error types returned by neurons, synapses, nodes and storage.

use thiserror::Error;


/// Error set for rejected parameter assignments, the previous valid
/// configuration always stays in effect
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// Integration method name is not `"euler"` or `"rk4"`
    #[error("Wrong string provided as an integration method: {0}")]
    InvalidIntegrationMethod(String),
    /// Neither synaptic time constant is strictly positive
    #[error("At least one synaptic time constant must be positive, got ({0}, {1})")]
    InvalidTimeConstants(f64, f64),
    /// Synapse base kind is not `"current"` or `"conductance"`
    #[error("Wrong base of synapse, use 'conductance' or 'current': {0}")]
    InvalidSynapseBase(String),
    /// Timestep must be positive and finite
    #[error("Timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),
}

/// Error set for out of range indexing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Fewer synaptic weights were given than there are synapses
    #[error("Expected at least {expected} synaptic weights, found {found}")]
    NotEnoughWeights {
        /// Number of synapses in the node
        expected: usize,
        /// Number of weights provided
        found: usize,
    },
    /// Index is past the end of the collection
    #[error("Index {index} out of range for length {len}")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Current length
        len: usize,
    },
}

/// Error set for bounded storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Appending past the end of the fixed buffer
    #[error("Storage is full, buffer size is {0}")]
    CapacityExceeded(usize),
}

/// A set of errors that may occur when using the library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Errors related to parameter assignment
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),
    /// Errors related to indexing
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexError),
    /// Errors related to bounded storage
    #[error(transparent)]
    CapacityExceeded(#[from] StorageError),
}
