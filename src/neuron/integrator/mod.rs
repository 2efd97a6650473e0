//! Fixed step integrators that advance any [`NeuronDynamics`] state by one step.
//!
//! The injected current is sampled once per step and held constant across every
//! stage of the step.

use std::fmt::Debug;
use crate::error::IntegrationError;
use super::{NeuronDynamics, fields::StateVector};


/// Checks that a step size is positive and finite
pub fn check_step_size(dt: f64) -> Result<(), IntegrationError> {
    if dt > 0. && dt.is_finite() {
        Ok(())
    } else {
        Err(IntegrationError::InvalidStepSize(dt))
    }
}

/// Advances a state by one fixed step without mutating it
pub trait Integrator: Debug + Clone + Copy + Default + Send + Sync {
    /// Returns the state after one step of size `dt` under a constant `input_current`,
    /// implementations validate `dt` with [`check_step_size`] themselves so they are
    /// safe to call outside of [`Neuron::step`](super::Neuron), which checks it again
    /// before consuming any pending input
    fn integrate<D: NeuronDynamics>(
        &self,
        dynamics: &D,
        state: &D::State,
        dt: f64,
        input_current: f64,
    ) -> Result<D::State, IntegrationError>;
}

/// Classical fourth order Runge-Kutta
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RungeKutta4;

impl Integrator for RungeKutta4 {
    fn integrate<D: NeuronDynamics>(
        &self,
        dynamics: &D,
        state: &D::State,
        dt: f64,
        input_current: f64,
    ) -> Result<D::State, IntegrationError> {
        check_step_size(dt)?;

        let k1 = dynamics.derivative(state, input_current);
        let k2 = dynamics.derivative(&state.add_scaled(&k1, dt / 2.), input_current);
        let k3 = dynamics.derivative(&state.add_scaled(&k2, dt / 2.), input_current);
        let k4 = dynamics.derivative(&state.add_scaled(&k3, dt), input_current);

        // k1 + 2 k2 + 2 k3 + k4
        let weighted = k1.zip_with(&k2, |a, b| a + 2. * b)
            .zip_with(&k3, |a, b| a + 2. * b)
            .zip_with(&k4, |a, b| a + b);

        Ok(state.add_scaled(&weighted, dt / 6.))
    }
}

/// Forward Euler, first order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn integrate<D: NeuronDynamics>(
        &self,
        dynamics: &D,
        state: &D::State,
        dt: f64,
        input_current: f64,
    ) -> Result<D::State, IntegrationError> {
        check_step_size(dt)?;

        let derivative = dynamics.derivative(state, input_current);

        Ok(state.add_scaled(&derivative, dt))
    }
}
