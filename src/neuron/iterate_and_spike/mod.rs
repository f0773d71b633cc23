//! Traits that neuron and synapse models implement so they can be plugged into a
//! [`Node`](super::Node), along with the [`SynapseBase`] descriptor used to turn a
//! synaptic conductance into a current.

use tracing::warn;
use crate::error::{ParameterError, SimulationError};
use crate::integrator::IntegrationMethod;


/// Gets and sets the membrane potential of a neuron (mV)
pub trait CurrentVoltage {
    fn get_current_voltage(&self) -> f64;
    fn set_current_voltage(&mut self, voltage: f64);
}

/// Handles the recorded spike times of a neuron
pub trait SpikeRecord {
    /// Gets every recorded spike time (ms) in the order they occurred
    fn get_spike_times(&self) -> &[f64];
    /// Gets the most recent spike time (`None` if the neuron has not fired yet)
    fn last_spike_time(&self) -> Option<f64> {
        self.get_spike_times().last().copied()
    }
}

/// Handles the constant stimulation current of a neuron
pub trait Stimulus {
    fn get_stimulus(&self) -> f64;
    fn set_stimulus(&mut self, stimulus: f64);
}

/// Handles changes in simulation timestep and clock information
pub trait Timestep {
    /// Retrieves timestep value (ms)
    fn get_dt(&self) -> f64;
    /// Updates timestep, fails with [`ParameterError::InvalidTimestep`] if `dt`
    /// is not positive and finite
    fn set_dt(&mut self, dt: f64) -> Result<(), SimulationError>;
    /// Retrieves the current simulated time (ms)
    fn get_time(&self) -> f64;
    /// Overwrites the current simulated time (ms)
    fn set_time(&mut self, time: f64);
}

/// Handles selection of the numerical scheme used to step a model
pub trait Integration {
    fn get_integration_method(&self) -> IntegrationMethod;
    fn set_integration_method(&mut self, method: IntegrationMethod);

    /// Selects the integration method by name (`"euler"` or `"rk4"`), any other
    /// name is rejected and the previous method stays active
    fn set_integration_method_by_name(&mut self, name: &str) -> Result<(), SimulationError> {
        match name.parse::<IntegrationMethod>() {
            Ok(method) => {
                self.set_integration_method(method);

                Ok(())
            },
            Err(err) => {
                warn!(method = name, "rejected integration method");

                Err(err.into())
            }
        }
    }
}

/// Handles dynamics of neurons that take in an input current, update their
/// membrane potential by one timestep and report spikes
///
/// Implementors advance their own clock by `dt` on every call to
/// [`iterate_and_spike`](IterateAndSpike::iterate_and_spike) and record each
/// spike time in the order it happened.
pub trait IterateAndSpike:
    Timestep + CurrentVoltage + SpikeRecord + Stimulus + Integration + Clone + Send + Sync
{
    /// Takes in an input current, advances the neuron by `dt` and returns
    /// whether this call recorded a spike at the new time
    fn iterate_and_spike(&mut self, input_current: f64) -> bool;
    /// Restores the resting state without clearing recorded spikes or time
    fn reset(&mut self);
    /// Clears recorded spikes
    fn flush(&mut self);
    /// Records a spike at the current time regardless of the membrane potential
    fn force_spike(&mut self);
}

/// Whether a synapse contributes a scaled current or a conductance driven by
/// the distance of the membrane potential from a reversal potential
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SynapseBase {
    /// Current based synapse, `scale` is the excitatory (positive) or
    /// inhibitory (negative) multiplier
    Current { scale: f64 },
    /// Conductance based synapse with the given reversal potential (mV)
    Conductance { reversal_potential: f64 },
}

impl Default for SynapseBase {
    fn default() -> Self {
        SynapseBase::Current { scale: 1. }
    }
}

impl SynapseBase {
    /// Builds a base from a kind name (`"current"` or `"conductance"`) and its
    /// scale or reversal potential
    pub fn from_kind(kind: &str, scale: f64) -> Result<Self, ParameterError> {
        match kind {
            "current" => Ok(SynapseBase::Current { scale }),
            "conductance" => Ok(SynapseBase::Conductance { reversal_potential: scale }),
            _ => Err(ParameterError::InvalidSynapseBase(kind.to_string())),
        }
    }

    /// Name of the kind of base
    pub fn kind(&self) -> &'static str {
        match self {
            SynapseBase::Current { .. } => "current",
            SynapseBase::Conductance { .. } => "conductance",
        }
    }

    /// Scale for current based synapses or reversal potential for
    /// conductance based synapses
    pub fn scale(&self) -> f64 {
        match self {
            SynapseBase::Current { scale } => *scale,
            SynapseBase::Conductance { reversal_potential } => *reversal_potential,
        }
    }

    /// Converts a conductance into a current given the postsynaptic membrane potential
    pub fn get_current(&self, conductance: f64, voltage: f64) -> f64 {
        match self {
            SynapseBase::Current { scale } => conductance * scale,
            SynapseBase::Conductance { reversal_potential } => conductance * (reversal_potential - voltage),
        }
    }
}

/// Handles dynamics of a synaptic conductance driven by weighted input events
pub trait SynapseKinetics: Timestep + Integration + Clone + Send + Sync {
    /// Injects `weight` as an impulse, advances the conductance by `dt`
    /// and returns the new conductance
    fn iterate(&mut self, weight: f64) -> f64;
    /// Zeroes the conductance state
    fn reset(&mut self);
    /// Gets the descriptor used to convert conductance to current
    fn get_base(&self) -> SynapseBase;
    /// Gets the current conductance
    fn get_conductance(&self) -> f64;
    /// Overwrites the current conductance
    fn set_conductance(&mut self, conductance: f64);
}
