//! A synapse that turns weighted input events into a conductance trace using an
//! exponential, alpha or double exponential kernel.

use tracing::{debug, warn};
use iterate_and_spike_traits::Timestep;
use super::iterate_and_spike::{Integration, SynapseBase, SynapseKinetics, Timestep};
use crate::error::{ParameterError, SimulationError};
use crate::integrator::IntegrationMethod;


/// Conductance kernel, fixed by the time constants when they are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynapseKernel {
    /// `tau * g' = -g`, weights are added to `g` directly
    Exponential,
    /// `tau^2 * g'' + 2 * tau * g' + g = 0`, weights are added to `g'`
    /// scaled by `1 / tau` giving `g = weight * t / tau * exp(-t / tau)`
    Alpha,
    /// `tau_0 * tau_1 * g'' + (tau_0 + tau_1) * g' + g = 0`, weights are added
    /// to `g'` giving `g = weight * tau_0 * tau_1 / (tau_0 - tau_1) * (exp(-t / tau_0) - exp(-t / tau_1))`
    DoubleExponential,
}

impl SynapseKernel {
    /// Selects a kernel from a pair of time constants and returns it with the time
    /// constants as they will be stored, a single positive time constant is always
    /// moved to the first slot and the second is set to `0`
    pub fn from_time_constants(tau: [f64; 2]) -> Result<(SynapseKernel, [f64; 2]), ParameterError> {
        match (tau[0] > 0., tau[1] > 0.) {
            (true, true) if tau[0] == tau[1] => Ok((SynapseKernel::Alpha, tau)),
            (true, true) => Ok((SynapseKernel::DoubleExponential, tau)),
            (true, false) => Ok((SynapseKernel::Exponential, [tau[0], 0.])),
            (false, true) => Ok((SynapseKernel::Exponential, [tau[1], 0.])),
            (false, false) => Err(ParameterError::InvalidTimeConstants(tau[0], tau[1])),
        }
    }

    /// Number of state variables the kernel integrates
    pub fn order(&self) -> usize {
        match self {
            SynapseKernel::Exponential => 1,
            SynapseKernel::Alpha | SynapseKernel::DoubleExponential => 2,
        }
    }
}

/// Synapse that can work as both a current based and a conductance based synapse,
/// no plasticity is included
///
/// The state `g` holds the conductance and its derivative, the derivative is
/// only used by second order kernels.
#[derive(Debug, Clone, Timestep)]
pub struct SimpleSynapse {
    tau: [f64; 2],
    kernel: SynapseKernel,
    /// Conductance and its time derivative
    pub g: [f64; 2],
    /// Whether the synapse is current or conductance based
    pub base: SynapseBase,
    /// Numerical scheme for the kernel
    pub integration_method: IntegrationMethod,
    dt: f64,
    time: f64,
}

impl Default for SimpleSynapse {
    fn default() -> Self {
        SimpleSynapse {
            tau: [3., 0.], // (ms)
            kernel: SynapseKernel::Exponential,
            g: [0., 0.],
            base: SynapseBase::default(),
            integration_method: IntegrationMethod::RungeKutta4,
            dt: 0.01, // (ms)
            time: 0.,
        }
    }
}

impl SimpleSynapse {
    /// Creates a synapse with the given time constants (ms) and base
    pub fn new(tau: [f64; 2], base: SynapseBase) -> Result<Self, SimulationError> {
        let mut synapse = SimpleSynapse {
            base,
            ..SimpleSynapse::default()
        };
        synapse.set_tau(tau)?;

        Ok(synapse)
    }

    /// Time constants (ms)
    pub fn get_tau(&self) -> [f64; 2] {
        self.tau
    }

    /// Sets the time constants (ms) and selects the matching kernel, if neither
    /// is positive the assignment is rejected and the old kernel is kept
    pub fn set_tau(&mut self, tau: [f64; 2]) -> Result<(), SimulationError> {
        match SynapseKernel::from_time_constants(tau) {
            Ok((kernel, tau)) => {
                self.kernel = kernel;
                self.tau = tau;

                Ok(())
            },
            Err(err) => {
                warn!(tau_0 = tau[0], tau_1 = tau[1], "rejected synaptic time constants");

                Err(err.into())
            }
        }
    }

    /// Kernel selected by the current time constants
    pub fn get_kernel(&self) -> SynapseKernel {
        self.kernel
    }

    /// Sets the base from a kind name (`"current"` or `"conductance"`) and a scale,
    /// any other kind is rejected and the old base is kept
    pub fn set_base_by_kind(&mut self, kind: &str, scale: f64) -> Result<(), SimulationError> {
        match SynapseBase::from_kind(kind, scale) {
            Ok(base) => {
                self.base = base;

                Ok(())
            },
            Err(err) => {
                warn!(kind, "rejected synapse base");

                Err(err.into())
            }
        }
    }

    fn integrate_exponential(&mut self) {
        let tau = self.tau[0];
        let [g] = self.integration_method.step(
            &[self.g[0]],
            self.time,
            self.dt,
            |_, state| [-state[0] / tau],
        );

        self.g[0] = g;
    }

    fn integrate_second_order(&mut self, damping: f64, stiffness: f64) {
        self.g = self.integration_method.step(
            &self.g,
            self.time,
            self.dt,
            |_, state| [state[1], -(damping * state[1] + state[0]) / stiffness],
        );
    }
}

impl Integration for SimpleSynapse {
    fn get_integration_method(&self) -> IntegrationMethod {
        self.integration_method
    }

    fn set_integration_method(&mut self, method: IntegrationMethod) {
        self.integration_method = method;
    }
}

impl SynapseKinetics for SimpleSynapse {
    fn iterate(&mut self, weight: f64) -> f64 {
        let [tau_0, tau_1] = self.tau;

        match self.kernel {
            SynapseKernel::Exponential => {
                self.g[0] += weight;
                self.integrate_exponential();
            },
            SynapseKernel::Alpha => {
                self.g[1] += weight / (tau_0 * tau_1).sqrt();
                self.integrate_second_order(2. * tau_0, tau_0 * tau_0);
            },
            SynapseKernel::DoubleExponential => {
                self.g[1] += weight;
                self.integrate_second_order(tau_0 + tau_1, tau_0 * tau_1);
            },
        }

        self.time += self.dt;

        self.g[0]
    }

    fn reset(&mut self) {
        self.g = [0., 0.];
        debug!(time = self.time, "simple synapse was reset");
    }

    fn get_base(&self) -> SynapseBase {
        self.base
    }

    fn get_conductance(&self) -> f64 {
        self.g[0]
    }

    fn set_conductance(&mut self, conductance: f64) {
        self.g[0] = conductance;
    }
}
