//! Input spike trains that can be used to decide when weights are delivered to a
//! node's synapses and when plasticity rules see presynaptic spikes.

use rand::Rng;
use iterate_and_spike_traits::Timestep;
use super::iterate_and_spike::{SpikeRecord, Timestep};
use crate::error::{ParameterError, SimulationError};


const GRID_TOLERANCE: f64 = 1e-6;

/// Handles spike train dynamics, every call to `iterate` advances the train
/// by `dt` and returns whether it spiked during that step
pub trait SpikeTrain: Timestep + SpikeRecord + Clone + Send + Sync {
    /// Updates spike train, randomness is drawn from `rng`
    fn iterate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool;
    /// Clears recorded spikes and restarts the clock at `0`
    fn flush(&mut self);
}

/// A Poisson spike train firing with a fixed probability every step
#[derive(Debug, Clone)]
pub struct PoissonSpikeTrain {
    /// Chance of firing at a given timestep
    pub chance_of_firing: f64,
    dt: f64,
    time: f64,
    spikes: Vec<f64>,
}

impl Default for PoissonSpikeTrain {
    fn default() -> Self {
        PoissonSpikeTrain {
            chance_of_firing: 0.,
            dt: 0.01,
            time: 0.,
            spikes: vec![],
        }
    }
}

impl PoissonSpikeTrain {
    /// Generates a spike train with a chance of firing that matches the given
    /// rate (Hz) at the given timestep (ms)
    pub fn from_firing_rate(hertz: f64, dt: f64) -> Self {
        PoissonSpikeTrain {
            chance_of_firing: hertz * dt / 1000.,
            dt,
            ..PoissonSpikeTrain::default()
        }
    }

    /// Firing rate (Hz) implied by the chance of firing
    pub fn get_firing_rate(&self) -> f64 {
        self.chance_of_firing * 1000. / self.dt
    }
}

impl Timestep for PoissonSpikeTrain {
    fn get_dt(&self) -> f64 {
        self.dt
    }

    fn set_dt(&mut self, dt: f64) -> Result<(), SimulationError> {
        if !(dt > 0. && dt.is_finite()) {
            return Err(ParameterError::InvalidTimestep(dt).into());
        }

        let scalar = dt / self.dt;
        self.chance_of_firing *= scalar;
        self.dt = dt;

        Ok(())
    }

    fn get_time(&self) -> f64 {
        self.time
    }

    fn set_time(&mut self, time: f64) {
        self.time = time;
    }
}

impl SpikeRecord for PoissonSpikeTrain {
    fn get_spike_times(&self) -> &[f64] {
        &self.spikes
    }
}

impl SpikeTrain for PoissonSpikeTrain {
    fn iterate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.time += self.dt;

        let is_spiking = rng.gen_range(0.0..1.0) < self.chance_of_firing;
        if is_spiking {
            self.spikes.push(self.time);
        }

        is_spiking
    }

    fn flush(&mut self) {
        self.time = 0.;
        self.spikes.clear();
    }
}

/// A preset spike train that fires once its clock reaches each of a sorted set
/// of firing times, several firing times inside one step produce a single spike
#[derive(Debug, Clone, Timestep)]
pub struct PresetSpikeTrain {
    firing_times: Vec<f64>,
    counter: usize,
    dt: f64,
    time: f64,
    spikes: Vec<f64>,
}

impl Default for PresetSpikeTrain {
    fn default() -> Self {
        PresetSpikeTrain {
            firing_times: vec![],
            counter: 0,
            dt: 0.01,
            time: 0.,
            spikes: vec![],
        }
    }
}

impl PresetSpikeTrain {
    /// Creates a spike train from firing times (ms), times are sorted on creation
    pub fn new(mut firing_times: Vec<f64>, dt: f64) -> Self {
        firing_times.sort_by(|a, b| a.total_cmp(b));

        PresetSpikeTrain {
            firing_times,
            dt,
            ..PresetSpikeTrain::default()
        }
    }

    /// Sorted firing times (ms)
    pub fn get_firing_times(&self) -> &[f64] {
        &self.firing_times
    }

    /// Whether every firing time has been reached
    pub fn is_exhausted(&self) -> bool {
        self.counter >= self.firing_times.len()
    }
}

impl SpikeRecord for PresetSpikeTrain {
    fn get_spike_times(&self) -> &[f64] {
        &self.spikes
    }
}

impl SpikeTrain for PresetSpikeTrain {
    fn iterate<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> bool {
        self.time += self.dt;

        let mut is_spiking = false;
        while self.counter < self.firing_times.len()
            && self.firing_times[self.counter] <= self.time + GRID_TOLERANCE * self.dt
        {
            self.counter += 1;
            is_spiking = true;
        }

        if is_spiking {
            self.spikes.push(self.time);
        }

        is_spiking
    }

    fn flush(&mut self) {
        self.time = 0.;
        self.counter = 0;
        self.spikes.clear();
    }
}

/// Draws `count` spike times uniformly from `[0, t_max)` (ms), snaps them to the
/// `dt` grid and returns them sorted, a non-positive `t_max` gives no spikes
pub fn uniform_spike_times<R: Rng + ?Sized>(rng: &mut R, count: usize, t_max: f64, dt: f64) -> Vec<f64> {
    if !(t_max > 0.) {
        return vec![];
    }

    let mut times: Vec<f64> = (0..count)
        .map(|_| (rng.gen_range(0.0..t_max) / dt).round() * dt)
        .collect();
    times.sort_by(|a, b| a.total_cmp(b));

    times
}
