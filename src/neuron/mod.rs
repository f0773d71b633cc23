//! Neuron models, synapse kernels and plasticity rules along with [`Node`], which
//! composes one neuron with an ordered list of synapses and drives both forward
//! one timestep at a time.
//!
//! Neurons implement [`IterateAndSpike`] and synapses implement [`SynapseKinetics`],
//! so any model can be swapped for another without rewriting the node.

use tracing::debug;
pub mod iterate_and_spike;
use iterate_and_spike::{
    CurrentVoltage, IterateAndSpike, SpikeRecord, Stimulus, SynapseKinetics, Timestep,
};
pub mod integrate_and_fire;
pub mod hodgkin_huxley;
pub mod synapse;
pub mod plasticity;
pub mod spike_train;
/// A set of macros to automatically derive traits necessary for the `IterateAndSpike` trait.
pub mod iterate_and_spike_traits {
    pub use iterate_and_spike_traits::*;
}
use integrate_and_fire::LeakyIntegrateAndFireNeuron;
use crate::error::{IndexError, ParameterError, SimulationError};


/// Takes in a static current as an input and iterates the given
/// neuron for a given number of steps, returns the voltages from
/// the neuron over time
pub fn run_static_input<T: IterateAndSpike>(
    cell: &mut T,
    input: f64,
    iterations: usize,
) -> Vec<f64> {
    let mut voltages: Vec<f64> = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let _is_spiking = cell.iterate_and_spike(input);
        voltages.push(cell.get_current_voltage());
    }

    voltages
}

/// Takes in a static current as an input and iterates the given neuron,
/// returns the recorded spike times from the run
pub fn run_static_input_spike_times<T: IterateAndSpike>(
    cell: &mut T,
    input: f64,
    iterations: usize,
) -> Vec<f64> {
    let start = cell.get_spike_times().len();
    for _ in 0..iterations {
        cell.iterate_and_spike(input);
    }

    cell.get_spike_times()[start..].to_vec()
}

/// A single neuron driven by an ordered list of synapses
///
/// Every call to [`Node::step`] passes `weights[i]` to synapse `i`, converts each
/// resulting conductance into a current with the synapse's
/// [`SynapseBase`](iterate_and_spike::SynapseBase) using the membrane potential
/// from before the step, sums the currents and advances the neuron once.
/// Timestep and clock changes made through the node reach every component.
#[derive(Debug, Clone)]
pub struct Node<N: IterateAndSpike, S: SynapseKinetics> {
    neuron: N,
    synapses: Vec<S>,
    synaptic_currents: Vec<f64>,
    /// Whether cached synaptic currents are zeroed after the neuron spikes
    pub flush_current_on_spike: bool,
}

impl<N: IterateAndSpike, S: SynapseKinetics> Node<N, S> {
    /// Creates a node, every synapse takes on the timestep and clock of the neuron
    pub fn new(neuron: N, synapses: Vec<S>) -> Result<Self, SimulationError> {
        let mut node = Node {
            neuron,
            synapses: Vec::with_capacity(synapses.len()),
            synaptic_currents: Vec::with_capacity(synapses.len()),
            flush_current_on_spike: false,
        };

        for synapse in synapses {
            node.add_synapse(synapse)?;
        }

        Ok(node)
    }

    /// Appends a synapse after synchronizing its timestep and clock with the neuron
    pub fn add_synapse(&mut self, mut synapse: S) -> Result<(), SimulationError> {
        synapse.set_dt(self.neuron.get_dt())?;
        synapse.set_time(self.neuron.get_time());

        self.synapses.push(synapse);
        self.synaptic_currents.push(0.);

        Ok(())
    }

    pub fn get_neuron(&self) -> &N {
        &self.neuron
    }

    /// Mutable access to the neuron, changing its timestep or clock directly
    /// desynchronizes it from the synapses, use [`Timestep`] on the node instead
    pub fn get_neuron_mut(&mut self) -> &mut N {
        &mut self.neuron
    }

    pub fn get_synapses(&self) -> &[S] {
        &self.synapses
    }

    /// Mutable access to a single synapse
    pub fn get_synapse_mut(&mut self, index: usize) -> Result<&mut S, SimulationError> {
        let len = self.synapses.len();

        self.synapses.get_mut(index)
            .ok_or(IndexError::OutOfRange { index, len }.into())
    }

    /// Number of synapses
    pub fn len(&self) -> usize {
        self.synapses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synapses.is_empty()
    }

    /// Advances every synapse with its weight and then the neuron with the summed
    /// synaptic current, returns whether the neuron spiked
    ///
    /// Fails with [`IndexError::NotEnoughWeights`] if fewer weights than synapses
    /// are given, in which case nothing is updated. Extra weights are ignored.
    pub fn step(&mut self, weights: &[f64]) -> Result<bool, SimulationError> {
        if weights.len() < self.synapses.len() {
            return Err(
                IndexError::NotEnoughWeights { expected: self.synapses.len(), found: weights.len() }.into()
            );
        }

        let voltage = self.neuron.get_current_voltage();
        self.synapses.iter_mut()
            .zip(self.synaptic_currents.iter_mut())
            .zip(weights)
            .for_each(|((synapse, current), weight)| {
                let conductance = synapse.iterate(*weight);
                *current = synapse.get_base().get_current(conductance, voltage);
            });

        let is_spiking = self.neuron.iterate_and_spike(self.synaptic_currents.iter().sum());

        if is_spiking && self.flush_current_on_spike {
            self.synaptic_currents.iter_mut().for_each(|i| *i = 0.);
        }

        Ok(is_spiking)
    }

    /// Resets the neuron and then every synapse
    pub fn reset(&mut self) {
        self.neuron.reset();
        self.synapses.iter_mut().for_each(|synapse| synapse.reset());
        debug!(time = self.neuron.get_time(), synapses = self.synapses.len(), "node was reset");
    }

    /// Zeroes the stimulus and every cached synaptic current
    pub fn clear(&mut self) {
        self.neuron.set_stimulus(0.);
        self.synaptic_currents.iter_mut().for_each(|i| *i = 0.);
        debug!("node currents were cleared");
    }

    /// Clears recorded spikes of the neuron and moves every synapse to the
    /// neuron's clock afterwards
    pub fn flush(&mut self) {
        self.neuron.flush();
        let time = self.neuron.get_time();
        self.synapses.iter_mut().for_each(|synapse| synapse.set_time(time));
    }

    /// Forces a spike on the neuron at the current time
    pub fn force_spike(&mut self) {
        self.neuron.force_spike();
    }

    /// Conductance of every synapse in order
    pub fn get_conductances(&self) -> Vec<f64> {
        self.synapses.iter().map(|synapse| synapse.get_conductance()).collect()
    }

    /// Overwrites the conductance of every synapse in order, fails with
    /// [`IndexError::NotEnoughWeights`] without changing anything if fewer
    /// values than synapses are given
    pub fn set_conductances(&mut self, conductances: &[f64]) -> Result<(), SimulationError> {
        if conductances.len() < self.synapses.len() {
            return Err(
                IndexError::NotEnoughWeights { expected: self.synapses.len(), found: conductances.len() }.into()
            );
        }

        self.synapses.iter_mut()
            .zip(conductances)
            .for_each(|(synapse, g)| synapse.set_conductance(*g));

        Ok(())
    }

    /// Currents computed by each synapse during the last step
    pub fn get_synaptic_currents(&self) -> &[f64] {
        &self.synaptic_currents
    }

    /// Sum of the cached synaptic currents and the stimulus
    pub fn get_total_current(&self) -> f64 {
        self.synaptic_currents.iter().sum::<f64>() + self.neuron.get_stimulus()
    }
}

impl<S: SynapseKinetics> Node<LeakyIntegrateAndFireNeuron, S> {
    /// Whether the neuron is still inside the refractory window of its last spike
    pub fn is_refractory(&self) -> bool {
        self.neuron.is_refractory()
    }
}

impl<N: IterateAndSpike, S: SynapseKinetics> CurrentVoltage for Node<N, S> {
    fn get_current_voltage(&self) -> f64 {
        self.neuron.get_current_voltage()
    }

    fn set_current_voltage(&mut self, voltage: f64) {
        self.neuron.set_current_voltage(voltage);
    }
}

impl<N: IterateAndSpike, S: SynapseKinetics> Stimulus for Node<N, S> {
    fn get_stimulus(&self) -> f64 {
        self.neuron.get_stimulus()
    }

    fn set_stimulus(&mut self, stimulus: f64) {
        self.neuron.set_stimulus(stimulus);
    }
}

impl<N: IterateAndSpike, S: SynapseKinetics> SpikeRecord for Node<N, S> {
    fn get_spike_times(&self) -> &[f64] {
        self.neuron.get_spike_times()
    }
}

impl<N: IterateAndSpike, S: SynapseKinetics> Timestep for Node<N, S> {
    fn get_dt(&self) -> f64 {
        self.neuron.get_dt()
    }

    /// Sets the timestep of the neuron and every synapse, an invalid timestep
    /// is rejected before any component is changed
    fn set_dt(&mut self, dt: f64) -> Result<(), SimulationError> {
        if !(dt > 0. && dt.is_finite()) {
            return Err(ParameterError::InvalidTimestep(dt).into());
        }

        self.neuron.set_dt(dt)?;
        for synapse in self.synapses.iter_mut() {
            synapse.set_dt(dt)?;
        }

        Ok(())
    }

    fn get_time(&self) -> f64 {
        self.neuron.get_time()
    }

    fn set_time(&mut self, time: f64) {
        self.neuron.set_time(time);
        self.synapses.iter_mut().for_each(|synapse| synapse.set_time(time));
    }
}
