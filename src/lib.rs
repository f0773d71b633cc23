//! # Simnode
//!
//! `simnode` is a small simulator that composes single compartment neuron models,
//! synaptic conductance kernels and synaptic plasticity rules into nodes that are
//! advanced through time with explicit numerical integration. Models are plugged
//! together through traits so a node works the same regardless of which neuron
//! or synapse it holds.
//!
//! - Neurons: leaky integrate and fire and Hodgkin Huxley, both implementing
//! [`IterateAndSpike`](neuron::iterate_and_spike::IterateAndSpike)
//! - Synapses: exponential, alpha and double exponential kernels used as current
//! or conductance based synapses
//! - Plasticity: spike time dependent plasticity and Tsodyks-Markram short term
//! plasticity, both driven by the caller at spike times
//! - Integration: forward Euler and fourth order Runge-Kutta, selectable per model
//!
//! ## Example Code
//!
//! ### Driving a node with a plastic synapse
//!
//! ```rust
//! use simnode::error::SimulationError;
//! use simnode::neuron::{
//!     Node,
//!     integrate_and_fire::LeakyIntegrateAndFireNeuron,
//!     iterate_and_spike::{SpikeRecord, SynapseBase, Timestep},
//!     plasticity::{Plasticity, STDP},
//!     synapse::SimpleSynapse,
//! };
//!
//! fn main() -> Result<(), SimulationError> {
//!     let excitatory = SimpleSynapse::new([5., 0.], SynapseBase::Current { scale: 1. })?;
//!     let inhibitory = SimpleSynapse::new(
//!         [5., 10.], SynapseBase::Conductance { reversal_potential: -10. }
//!     )?;
//!
//!     let mut node = Node::new(
//!         LeakyIntegrateAndFireNeuron::default(),
//!         vec![excitatory, inhibitory],
//!     )?;
//!     node.set_dt(0.1)?;
//!
//!     let mut stdp = STDP::default();
//!     let mut weight = stdp.get_signed_weight();
//!
//!     for step in 0..1000 {
//!         // presynaptic spike every 10 ms
//!         let weights = if step % 100 == 0 {
//!             weight = stdp.presynaptic_spike(node.get_time());
//!             [40. * weight, 0.5]
//!         } else {
//!             [0., 0.]
//!         };
//!
//!         if node.step(&weights)? {
//!             weight = stdp.postsynaptic_spike(node.get_time());
//!         }
//!     }
//!
//!     assert!((0. ..=1.).contains(&weight));
//!     println!("spikes: {:?}", node.get_spike_times());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Hodgkin Huxley neuron with static input
//!
//! ```rust
//! use simnode::neuron::{
//!     hodgkin_huxley::HodgkinHuxleyNeuron,
//!     iterate_and_spike::{Integration, SpikeRecord},
//!     run_static_input,
//! };
//!
//! let mut neuron = HodgkinHuxleyNeuron::default();
//! neuron.set_integration_method_by_name("euler").unwrap();
//!
//! // 100 ms at the default timestep of 0.01 ms
//! let voltages = run_static_input(&mut neuron, 10., 10_000);
//!
//! assert_eq!(voltages.len(), 10_000);
//! assert!(!neuron.get_spike_times().is_empty());
//! ```

pub mod distribution;
pub mod error;
pub mod integrator;
pub mod neuron;
pub mod storage;
