//! A leaky integrate and fire model that implements [`IterateAndSpike`], stepping
//! its membrane potential with the selected [`IntegrationMethod`] and holding it at
//! the reset potential for a refractory period after every spike.

use tracing::{debug, trace};
use iterate_and_spike_traits::{IterateAndSpikeBase, Timestep};
use super::iterate_and_spike::{
    CurrentVoltage, Integration, IterateAndSpike, SpikeRecord, Stimulus, Timestep,
};
use crate::integrator::IntegrationMethod;


// fraction of a timestep the clock may drift below the end of the refractory
// window and still count as having reached it
const REFRACTORY_TOLERANCE: f64 = 1e-6;

/// Whether the neuron is integrating input or held at its reset potential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefractoryState {
    /// Membrane potential follows the leaky integrator
    Integrating,
    /// Membrane potential is pinned at the reset value
    Refractory,
}

/// A leaky integrate and fire neuron
///
/// `dV/dt = (-(V - V_rest) + I * r_m) / tau_m`, when `V` reaches `v_th` the
/// neuron spikes, is set to `v_reset` and stays there for `tau_ref`.
#[derive(Debug, Clone, Timestep, IterateAndSpikeBase)]
pub struct LeakyIntegrateAndFireNeuron {
    /// Membrane potential (mV)
    pub current_voltage: f64,
    /// Resting potential (mV)
    pub v_rest: f64,
    /// Voltage reset value (mV)
    pub v_reset: f64,
    /// Voltage threshold (mV)
    pub v_th: f64,
    /// Membrane time constant (ms)
    pub tau_m: f64,
    /// Membrane resistance (GOhm)
    r_m: f64,
    /// Membrane capacitance (nF), kept equal to `tau_m / r_m`
    c_m: f64,
    /// Refractory period (ms)
    pub tau_ref: f64,
    /// Constant stimulation current (pA)
    pub stimulus: f64,
    /// Time of the last spike (ms)
    pub spike_time: f64,
    /// Numerical scheme for the membrane equation
    pub integration_method: IntegrationMethod,
    dt: f64,
    time: f64,
    spikes: Vec<f64>,
}

impl Default for LeakyIntegrateAndFireNeuron {
    fn default() -> Self {
        let tau_ref = 3.;

        LeakyIntegrateAndFireNeuron {
            current_voltage: 0.,
            v_rest: 0., // resting potential (mV)
            v_reset: 14.2, // reset potential (mV)
            v_th: 15., // spike threshold (mV)
            tau_m: 30., // membrane time constant (ms)
            r_m: 1., // membrane resistance (GOhm)
            c_m: 30., // membrane capacitance (nF)
            tau_ref, // refractory time (ms)
            stimulus: 0.,
            spike_time: -2. * tau_ref - 1.,
            integration_method: IntegrationMethod::RungeKutta4,
            dt: 0.01, // simulation time step (ms)
            time: 0.,
            spikes: vec![],
        }
    }
}

impl LeakyIntegrateAndFireNeuron {
    /// Membrane resistance (GOhm)
    pub fn get_r_m(&self) -> f64 {
        self.r_m
    }

    /// Sets membrane resistance and corrects capacitance so that `r_m * c_m = tau_m`
    pub fn set_r_m(&mut self, r_m: f64) {
        self.r_m = r_m;
        self.c_m = self.tau_m / r_m;
    }

    /// Membrane capacitance (nF)
    pub fn get_c_m(&self) -> f64 {
        self.c_m
    }

    /// Sets membrane capacitance and corrects resistance so that `r_m * c_m = tau_m`
    pub fn set_c_m(&mut self, c_m: f64) {
        self.c_m = c_m;
        self.r_m = self.tau_m / c_m;
    }

    /// Right hand side of the membrane equation at potential `v` given input `i`
    pub fn get_dv(&self, i: f64, v: f64) -> f64 {
        (-(v - self.v_rest) + i * self.r_m) / self.tau_m
    }

    /// Whether the refractory window has not yet elapsed at the current time
    pub fn is_refractory(&self) -> bool {
        self.time + REFRACTORY_TOLERANCE * self.dt < self.spike_time + self.tau_ref
    }

    /// Current state of the refractory state machine
    pub fn get_state(&self) -> RefractoryState {
        if self.is_refractory() {
            RefractoryState::Refractory
        } else {
            RefractoryState::Integrating
        }
    }

    fn integrate(&mut self, i: f64) {
        let [v] = self.integration_method.step(
            &[self.current_voltage],
            self.time,
            self.dt,
            |_, state| [self.get_dv(i, state[0])],
        );

        self.current_voltage = v;
    }
}

impl Integration for LeakyIntegrateAndFireNeuron {
    fn get_integration_method(&self) -> IntegrationMethod {
        self.integration_method
    }

    fn set_integration_method(&mut self, method: IntegrationMethod) {
        self.integration_method = method;
    }
}

impl IterateAndSpike for LeakyIntegrateAndFireNeuron {
    fn iterate_and_spike(&mut self, input_current: f64) -> bool {
        self.time += self.dt;

        if self.is_refractory() {
            self.current_voltage = self.v_reset;
        } else {
            self.integrate(input_current + self.stimulus);

            if self.current_voltage >= self.v_th {
                self.force_spike();
            }
        }

        self.time == self.spike_time
    }

    fn reset(&mut self) {
        self.current_voltage = self.v_rest;
        debug!(time = self.time, "leaky integrate and fire neuron was reset");
    }

    fn flush(&mut self) {
        self.time = 0.;
        self.spikes.clear();
        self.spike_time = -2. * self.tau_ref - 1.;
        debug!("leaky integrate and fire neuron was flushed");
    }

    fn force_spike(&mut self) {
        self.current_voltage = self.v_reset;
        self.spikes.push(self.time);
        self.spike_time = self.time;
        trace!(time = self.time, "leaky integrate and fire neuron spiked");
    }
}
