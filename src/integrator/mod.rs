//! Explicit single step solvers for first order ODE systems, every model in the
//! crate advances its state through [`IntegrationMethod::step`] so Euler and
//! RK4 behave identically whether the state is a membrane potential, a
//! synaptic conductance pair or the four Hodgkin Huxley variables.

use std::{fmt, str::FromStr};
use crate::error::ParameterError;


/// Numerical scheme used to advance a state vector by one timestep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntegrationMethod {
    /// Forward Euler, one evaluation of the right hand side per step
    Euler,
    /// Classic fourth order Runge-Kutta, four evaluations per step
    #[default]
    RungeKutta4,
}

impl IntegrationMethod {
    /// Advances `state` at time `t` by `dt` given the right hand side
    /// `f(t, state) -> d(state)/dt`
    pub fn step<const N: usize, F>(&self, state: &[f64; N], t: f64, dt: f64, right_side: F) -> [f64; N]
    where
        F: Fn(f64, &[f64; N]) -> [f64; N],
    {
        match self {
            IntegrationMethod::Euler => euler(state, right_side, t, dt),
            IntegrationMethod::RungeKutta4 => runge_kutta4(state, right_side, t, dt),
        }
    }

    /// Name accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationMethod::Euler => "euler",
            IntegrationMethod::RungeKutta4 => "rk4",
        }
    }
}

impl FromStr for IntegrationMethod {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euler" => Ok(IntegrationMethod::Euler),
            "rk4" => Ok(IntegrationMethod::RungeKutta4),
            _ => Err(ParameterError::InvalidIntegrationMethod(s.to_string())),
        }
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn offset<const N: usize>(state: &[f64; N], slope: &[f64; N], scale: f64) -> [f64; N] {
    let mut shifted = *state;
    shifted.iter_mut()
        .zip(slope.iter())
        .for_each(|(x, k)| *x += scale * k);

    shifted
}

/// Forward Euler step, `state + dt * f(t, state)`
pub fn euler<const N: usize, F>(state: &[f64; N], right_side: F, t: f64, dt: f64) -> [f64; N]
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    let k = right_side(t, state);

    offset(state, &k, dt)
}

/// Fourth order Runge-Kutta step, `state + dt / 6 * (k1 + 2 k2 + 2 k3 + k4)`
pub fn runge_kutta4<const N: usize, F>(state: &[f64; N], right_side: F, t: f64, dt: f64) -> [f64; N]
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    let k1 = right_side(t, state);
    let k2 = right_side(t + dt / 2., &offset(state, &k1, dt / 2.));
    let k3 = right_side(t + dt / 2., &offset(state, &k2, dt / 2.));
    let k4 = right_side(t + dt, &offset(state, &k3, dt));

    let mut next = *state;
    next.iter_mut()
        .enumerate()
        .for_each(|(i, x)| *x += dt / 6. * (k1[i] + 2. * k2[i] + 2. * k3[i] + k4[i]));

    next
}
