//! An implementation of the classical three channel Hodgkin Huxley neuron, the
//! membrane potential and the `m`, `h` and `n` gating variables are integrated
//! jointly every step and spikes are detected with a pair of thresholds

use tracing::{debug, trace};
use iterate_and_spike_traits::{IterateAndSpikeBase, Timestep};
use super::iterate_and_spike::{
    CurrentVoltage, Integration, IterateAndSpike, SpikeRecord, Stimulus, Timestep,
};
use crate::integrator::IntegrationMethod;


const FORCED_REFRACTORY_TOLERANCE: f64 = 1e-6;

/// Stepping mode of a [`HodgkinHuxleyNeuron`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HodgkinHuxleyMode {
    /// Membrane potential and gating variables are integrated every step
    Integrating,
    /// A spike was forced, steps are ignored until `tau_ref_force` has passed
    ForcedRefractory,
}

/// Hodgkin Huxley neuron as described in A. Hodgkin and A. Huxley, 'A quantitative
/// description of membrane current and its application to conduction and excitation
/// in nerve', J. Physiol, 117:500-544, 1952
///
/// Nernst potentials are relative to `v_rest` so moving the resting potential
/// shifts the whole model. A spike is recorded when the potential has risen above
/// `v_th` and then falls below `v_th_end`, at the time of the fall, so `v_th_end`
/// should not be above `v_th`.
#[derive(Debug, Clone, Timestep, IterateAndSpikeBase)]
pub struct HodgkinHuxleyNeuron {
    /// Membrane potential (mV)
    pub current_voltage: f64,
    /// Sodium activation gating variable
    pub m: f64,
    /// Sodium inactivation gating variable
    pub h: f64,
    /// Potassium activation gating variable
    pub n: f64,
    /// Maximum sodium conductance (mS/cm^2)
    pub g_na: f64,
    /// Sodium Nernst potential relative to rest (mV)
    pub e_na: f64,
    /// Maximum potassium conductance (mS/cm^2)
    pub g_k: f64,
    /// Potassium Nernst potential relative to rest (mV)
    pub e_k: f64,
    /// Leak conductance (mS/cm^2)
    pub g_l: f64,
    /// Leak Nernst potential relative to rest (mV)
    pub e_l: f64,
    /// Specific membrane capacitance (uF/cm^2)
    pub c_m: f64,
    /// Resting potential (mV)
    pub v_rest: f64,
    /// Voltage the potential must rise above to start a spike (mV)
    pub v_th: f64,
    /// Voltage the potential must fall below to end a spike (mV)
    pub v_th_end: f64,
    /// Duration of the refractory period after a forced spike (ms)
    pub tau_ref_force: f64,
    /// Constant stimulation current (uA/cm^2)
    pub stimulus: f64,
    /// Numerical scheme for the membrane and gating equations
    pub integration_method: IntegrationMethod,
    already_spiking: bool,
    mode: HodgkinHuxleyMode,
    dt: f64,
    time: f64,
    spikes: Vec<f64>,
}

impl Default for HodgkinHuxleyNeuron {
    fn default() -> Self {
        let mut neuron = HodgkinHuxleyNeuron {
            current_voltage: -70.,
            m: 0.,
            h: 0.,
            n: 0.,
            g_na: 120.,
            e_na: 115.,
            g_k: 36.,
            e_k: -12.,
            g_l: 0.3,
            e_l: 10.6,
            c_m: 1.,
            v_rest: -70.,
            v_th: 0.,
            v_th_end: -55.,
            tau_ref_force: 2.5,
            stimulus: 0.,
            integration_method: IntegrationMethod::RungeKutta4,
            already_spiking: false,
            mode: HodgkinHuxleyMode::Integrating,
            dt: 0.01,
            time: 0.,
            spikes: vec![],
        };
        neuron.reset();

        neuron
    }
}

// https://neuronaldynamics.epfl.ch/online/Ch2.S2.html
impl HodgkinHuxleyNeuron {
    /// Opening rate of `m`, at 25 mV above rest the removable singularity
    /// evaluates to its limit of `1`
    pub fn alpha_m(&self, voltage: f64) -> f64 {
        let u = voltage - self.v_rest;
        if u == 25. {
            return 1.;
        }

        0.1 * (25. - u) / (((25. - u) / 10.).exp() - 1.)
    }

    /// Closing rate of `m`
    pub fn beta_m(&self, voltage: f64) -> f64 {
        4. * (-(voltage - self.v_rest) / 18.).exp()
    }

    /// Opening rate of `h`
    pub fn alpha_h(&self, voltage: f64) -> f64 {
        0.07 * (-(voltage - self.v_rest) / 20.).exp()
    }

    /// Closing rate of `h`
    pub fn beta_h(&self, voltage: f64) -> f64 {
        1. / (((30. - (voltage - self.v_rest)) / 10.).exp() + 1.)
    }

    /// Opening rate of `n`, at 10 mV above rest the removable singularity
    /// evaluates to its limit of `0.1`
    pub fn alpha_n(&self, voltage: f64) -> f64 {
        let u = voltage - self.v_rest;
        if u == 10. {
            return 0.1;
        }

        0.01 * (10. - u) / (((10. - u) / 10.).exp() - 1.)
    }

    /// Closing rate of `n`
    pub fn beta_n(&self, voltage: f64) -> f64 {
        0.125 * (-(voltage - self.v_rest) / 80.).exp()
    }

    /// Steady state of `m` at the given potential
    pub fn m_inf(&self, voltage: f64) -> f64 {
        let alpha = self.alpha_m(voltage);
        alpha / (alpha + self.beta_m(voltage))
    }

    /// Steady state of `h` at the given potential
    pub fn h_inf(&self, voltage: f64) -> f64 {
        let alpha = self.alpha_h(voltage);
        alpha / (alpha + self.beta_h(voltage))
    }

    /// Steady state of `n` at the given potential
    pub fn n_inf(&self, voltage: f64) -> f64 {
        let alpha = self.alpha_n(voltage);
        alpha / (alpha + self.beta_n(voltage))
    }

    /// Sets every gating variable to its steady state at the current potential
    pub fn set_gating_variables(&mut self) {
        self.m = self.m_inf(self.current_voltage);
        self.h = self.h_inf(self.current_voltage);
        self.n = self.n_inf(self.current_voltage);
    }

    /// Whether the potential has crossed `v_th` and not yet fallen below `v_th_end`
    pub fn is_above_threshold(&self) -> bool {
        self.already_spiking
    }

    /// Current stepping mode
    pub fn get_mode(&self) -> HodgkinHuxleyMode {
        self.mode
    }

    /// Time derivatives of `[V, m, h, n]` given an input current
    pub fn get_derivatives(&self, i: f64, state: &[f64; 4]) -> [f64; 4] {
        let [v, m, h, n] = *state;
        let u = v - self.v_rest;

        let i_na = self.g_na * m.powi(3) * h * (u - self.e_na);
        let i_k = self.g_k * n.powi(4) * (u - self.e_k);
        let i_l = self.g_l * (u - self.e_l);

        [
            (i - i_na - i_k - i_l) / self.c_m,
            self.alpha_m(v) * (1. - m) - self.beta_m(v) * m,
            self.alpha_h(v) * (1. - h) - self.beta_h(v) * h,
            self.alpha_n(v) * (1. - n) - self.beta_n(v) * n,
        ]
    }

    fn integrate(&mut self, i: f64) {
        let [v, m, h, n] = self.integration_method.step(
            &[self.current_voltage, self.m, self.h, self.n],
            self.time,
            self.dt,
            |_, state| self.get_derivatives(i, state),
        );

        self.current_voltage = v;
        self.m = m;
        self.h = h;
        self.n = n;
    }

    fn forced_refractory_elapsed(&self) -> bool {
        match self.spikes.last() {
            Some(last) => self.time + FORCED_REFRACTORY_TOLERANCE * self.dt >= last + self.tau_ref_force,
            None => true,
        }
    }

    fn handle_spiking(&mut self) {
        if !self.already_spiking && self.current_voltage >= self.v_th {
            self.already_spiking = true;
        } else if self.already_spiking && self.current_voltage < self.v_th_end {
            self.already_spiking = false;
            self.spikes.push(self.time);
            trace!(time = self.time, "hodgkin huxley neuron spiked");
        }
    }
}

impl Integration for HodgkinHuxleyNeuron {
    fn get_integration_method(&self) -> IntegrationMethod {
        self.integration_method
    }

    fn set_integration_method(&mut self, method: IntegrationMethod) {
        self.integration_method = method;
    }
}

impl IterateAndSpike for HodgkinHuxleyNeuron {
    fn iterate_and_spike(&mut self, input_current: f64) -> bool {
        self.time += self.dt;

        match self.mode {
            HodgkinHuxleyMode::Integrating => self.integrate(input_current + self.stimulus),
            HodgkinHuxleyMode::ForcedRefractory => {
                if self.forced_refractory_elapsed() {
                    self.m = self.m_inf(self.v_rest);
                    self.h = self.h_inf(self.v_rest);
                    self.n = self.n_inf(self.v_rest);
                    self.mode = HodgkinHuxleyMode::Integrating;
                }
            },
        }

        self.handle_spiking();

        self.spikes.last().is_some_and(|last| *last == self.time)
    }

    fn reset(&mut self) {
        self.current_voltage = self.v_rest;
        self.set_gating_variables();
        self.already_spiking = false;
        debug!(time = self.time, "hodgkin huxley neuron was reset");
    }

    fn flush(&mut self) {
        self.time = 0.;
        self.spikes.clear();
        debug!("hodgkin huxley neuron was flushed");
    }

    fn force_spike(&mut self) {
        self.spikes.push(self.time);
        self.mode = HodgkinHuxleyMode::ForcedRefractory;
        trace!(time = self.time, "hodgkin huxley neuron spiked");
        self.reset();
    }
}
