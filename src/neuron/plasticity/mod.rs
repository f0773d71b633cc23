//! Event driven plasticity rules, long term spike timing dependent plasticity
//! and Tsodyks-Markram short term plasticity. Both only change at spike arrival
//! times and return the synaptic weight to feed into the next node step.

use rand::Rng;
use crate::distribution::regenerate_in_range;


/// Handles plasticity rules that are updated at pre- and postsynaptic spike times
pub trait Plasticity: Clone + Send + Sync {
    /// Processes a spike arriving at the synapse at `time` (ms), returns the
    /// resulting weight
    fn presynaptic_spike(&mut self, time: f64) -> f64;
    /// Processes a spike of the postsynaptic neuron at `time` (ms), returns the
    /// resulting weight
    fn postsynaptic_spike(&mut self, time: f64) -> f64;
    /// Restores the spike history to its initial state, tunable constants are kept
    fn reset(&mut self);
}

/// Trait for excitatory preset parameters
pub trait ExcitatoryDefault {
    fn excitatory_default() -> Self;
}

/// Trait for inhibitory preset parameters
pub trait InhibitoryDefault {
    fn inhibitory_default() -> Self;
}

/// Sign applied to the output weight of a synapse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PotentiationType {
    /// Positive weight
    #[default]
    Excitatory,
    /// Negative weight
    Inhibitory,
}

impl PotentiationType {
    pub fn sign(&self) -> f64 {
        match self {
            PotentiationType::Excitatory => 1.,
            PotentiationType::Inhibitory => -1.,
        }
    }
}

/// Which spike pairs trigger a spike timing dependent update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingScheme {
    /// Every spike is paired with the latest spike from the other side
    #[default]
    Standard,
    /// Only the nearest pair of opposite spikes updates the weight, each side
    /// may update once until a spike from the other side arrives
    NearestNeighbor,
}

// far enough in the past that no window contains it
const FAR_PAST: f64 = -1000.;

/// Spike time dependent plasticity rule
///
/// With `h = t_post - t_pre`, if `h` is in `[window[0], window[1]]` the weight is
/// potentiated by `w_plus * exp(-h / tau_plus)` and if `-h` is in that window
/// it is depressed by `w_minus * exp(h / tau_minus)`, the weight is kept
/// in `[weight_min, weight_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct STDP {
    /// Current weight
    pub weight: f64,
    /// Lowest allowed weight
    pub weight_min: f64,
    /// Highest allowed weight
    pub weight_max: f64,
    /// Potentiation amplitude
    pub w_plus: f64,
    /// Depression amplitude
    pub w_minus: f64,
    /// Potentiation decay (ms)
    pub tau_plus: f64,
    /// Depression decay (ms)
    pub tau_minus: f64,
    /// Spike time differences outside of this window do not change the weight (ms)
    pub working_time_window: [f64; 2],
    /// Sign of the returned weight
    pub potentiation_type: PotentiationType,
    /// Which spike pairs are used
    pub pairing: PairingScheme,
    /// Time of last presynaptic spike (ms)
    pub last_presynaptic_spike: f64,
    /// Time of last postsynaptic spike (ms)
    pub last_postsynaptic_spike: f64,
    can_depress: bool,
    can_potentiate: bool,
}

impl Default for STDP {
    fn default() -> Self {
        STDP {
            weight: 0.5,
            weight_min: 0.,
            weight_max: 1.,
            w_plus: 0.3,
            w_minus: 0.3105,
            tau_plus: 20.,
            tau_minus: 20.,
            working_time_window: [2., 60.],
            potentiation_type: PotentiationType::Excitatory,
            pairing: PairingScheme::Standard,
            last_presynaptic_spike: FAR_PAST,
            last_postsynaptic_spike: FAR_PAST,
            can_depress: true,
            can_potentiate: true,
        }
    }
}

impl ExcitatoryDefault for STDP {
    fn excitatory_default() -> Self {
        STDP::default()
    }
}

impl InhibitoryDefault for STDP {
    fn inhibitory_default() -> Self {
        STDP {
            potentiation_type: PotentiationType::Inhibitory,
            ..STDP::default()
        }
    }
}

impl STDP {
    /// Weight multiplied by the sign of the synapse
    pub fn get_signed_weight(&self) -> f64 {
        self.potentiation_type.sign() * self.weight
    }

    fn in_window(&self, h: f64) -> bool {
        self.working_time_window[0] <= h && h <= self.working_time_window[1]
    }

    fn depress(&mut self) {
        let h = self.last_postsynaptic_spike - self.last_presynaptic_spike;
        if self.w_minus > 0. && self.in_window(-h) {
            self.weight = self.weight_min.max(self.weight - self.w_minus * (h / self.tau_minus).exp());
            self.can_depress = false;
        }
    }

    fn potentiate(&mut self) {
        let h = self.last_postsynaptic_spike - self.last_presynaptic_spike;
        if self.w_plus > 0. && self.in_window(h) {
            self.weight = self.weight_max.min(self.weight + self.w_plus * (-h / self.tau_plus).exp());
            self.can_potentiate = false;
        }
    }
}

impl Plasticity for STDP {
    fn presynaptic_spike(&mut self, time: f64) -> f64 {
        self.last_presynaptic_spike = time;

        match self.pairing {
            PairingScheme::Standard => self.depress(),
            PairingScheme::NearestNeighbor => {
                if self.can_depress {
                    self.depress();
                }
                self.can_potentiate = true;
            },
        }

        self.get_signed_weight()
    }

    fn postsynaptic_spike(&mut self, time: f64) -> f64 {
        self.last_postsynaptic_spike = time;

        match self.pairing {
            PairingScheme::Standard => self.potentiate(),
            PairingScheme::NearestNeighbor => {
                if self.can_potentiate {
                    self.potentiate();
                }
                self.can_depress = true;
            },
        }

        self.get_signed_weight()
    }

    fn reset(&mut self) {
        self.last_presynaptic_spike = FAR_PAST;
        self.last_postsynaptic_spike = FAR_PAST;
        self.can_depress = true;
        self.can_potentiate = true;
    }
}

/// Tsodyks-Markram short term plasticity as described in Maass, W., & Markram, H.
/// (2002). Synapses as dynamic memory buffers. Neural Networks, 15, 155-161.
///
/// `U`, `u` and `r` are always kept in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TsodyksMarkram {
    big_u: f64,
    u: f64,
    r: f64,
    /// Depression recovery time constant (ms)
    pub d: f64,
    /// Facilitation time constant (ms)
    pub f: f64,
    /// Time of last presynaptic spike (ms)
    pub last_presynaptic_spike: f64,
}

macro_rules! impl_tsodyks_markram_default {
    ($trait:ident, $method:ident, $setter:ident, $big_u:expr, $d:expr, $f:expr) => {
        impl $trait for TsodyksMarkram {
            fn $method() -> Self {
                let mut synapse = TsodyksMarkram {
                    big_u: 0.,
                    u: 0.,
                    r: 1.,
                    d: 0.,
                    f: 0.,
                    last_presynaptic_spike: FAR_PAST,
                };
                synapse.$setter();
                synapse.reset();

                synapse
            }
        }

        impl TsodyksMarkram {
            /// Sets the preset `U`, `D` and `F` constants, state is left untouched
            pub fn $setter(&mut self) {
                self.set_big_u($big_u);
                self.d = $d;
                self.f = $f;
            }
        }
    };
}

impl_tsodyks_markram_default!(ExcitatoryDefault, excitatory_default, set_excitatory, 0.5, 1100., 50.);
impl_tsodyks_markram_default!(InhibitoryDefault, inhibitory_default, set_inhibitory, 0.25, 700., 20.);

impl Default for TsodyksMarkram {
    fn default() -> Self {
        TsodyksMarkram::excitatory_default()
    }
}

impl TsodyksMarkram {
    /// Utilization of synaptic efficacy `U`
    pub fn get_big_u(&self) -> f64 {
        self.big_u
    }

    pub fn set_big_u(&mut self, value: f64) {
        self.big_u = value.clamp(0., 1.);
    }

    /// Facilitation variable `u`, equal to `U` after a reset
    pub fn get_u(&self) -> f64 {
        self.u
    }

    pub fn set_u(&mut self, value: f64) {
        self.u = value.clamp(0., 1.);
    }

    /// Available fraction of synaptic resources `r`
    pub fn get_r(&self) -> f64 {
        self.r
    }

    pub fn set_r(&mut self, value: f64) {
        self.r = value.clamp(0., 1.);
    }

    /// Current effective weight `u * r`
    pub fn get_weight(&self) -> f64 {
        self.u * self.r
    }

    /// Redraws `U`, `D` and `F` from normal distributions centered at their
    /// current values with a standard deviation of a tenth of the value, resampling
    /// until `U` is in `[0, 1]` and `D`, `F` are in `[0, 10 * value]`
    pub fn shuffle_constants<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let big_u = regenerate_in_range(rng, self.big_u, self.big_u / 10., 0., 1., None);
        let d = regenerate_in_range(rng, self.d, self.d / 10., 0., 10. * self.d, None);
        let f = regenerate_in_range(rng, self.f, self.f / 10., 0., 10. * self.f, None);

        self.set_big_u(big_u);
        self.d = d;
        self.f = f;
    }
}

// a non-positive time constant recovers instantly
fn decay(h: f64, tau: f64) -> f64 {
    if tau > 0. {
        (-h / tau).exp()
    } else {
        0.
    }
}

impl Plasticity for TsodyksMarkram {
    fn presynaptic_spike(&mut self, time: f64) -> f64 {
        let h = time - self.last_presynaptic_spike;
        let (u, r) = (self.u, self.r);

        self.set_u(self.big_u + u * (1. - self.big_u) * decay(h, self.f));
        self.set_r(1. + (r - u * r - 1.) * decay(h, self.d));
        self.last_presynaptic_spike = time;

        self.get_weight()
    }

    fn postsynaptic_spike(&mut self, _time: f64) -> f64 {
        self.get_weight()
    }

    fn reset(&mut self) {
        self.last_presynaptic_spike = FAR_PAST;
        self.r = 1.;
        self.u = self.big_u;
    }
}
