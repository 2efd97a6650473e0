//! An implementation of the Izhikevich model, a quadratic membrane equation with a
//! recovery variable and an after spike reset.

use super::{Neuron, NeuronDynamics, ModelFamily};
use super::fields::{NamedFields, StateVector};
use super::integrator::RungeKutta4;


/// Voltage (mV) at or above which a completed step triggers the reset
pub const IZHIKEVICH_SPIKE_THRESHOLD: f64 = 30.;

/// Izhikevich neuron integrated with `I`, defaults to [`RungeKutta4`]
pub type IzhikevichNeuron<I = RungeKutta4> = Neuron<IzhikevichParameters, I>;

/// State of an Izhikevich neuron
#[derive(Debug, Clone, Copy, PartialEq, NamedFields, StateVector)]
pub struct IzhikevichState {
    /// Membrane potential (mV)
    pub v: f64,
    /// Recovery variable
    pub u: f64,
}

impl Default for IzhikevichState {
    fn default() -> Self {
        IzhikevichState {
            v: -65.,
            u: -13.,
        }
    }
}

/// Parameters of an Izhikevich neuron, defaults describe a regular spiking cell
#[derive(Debug, Clone, Copy, PartialEq, NamedFields)]
pub struct IzhikevichParameters {
    /// Time scale of the recovery variable
    pub a: f64,
    /// Sensitivity of the recovery variable to voltage
    pub b: f64,
    /// After spike reset value for voltage (mV)
    pub c: f64,
    /// After spike increment of the recovery variable
    pub d: f64,
}

impl Default for IzhikevichParameters {
    fn default() -> Self {
        IzhikevichParameters {
            a: 0.02,
            b: 0.2,
            c: -65.,
            d: 8.,
        }
    }
}

impl IzhikevichParameters {
    /// Stable equilibrium under a constant injected current, the lower root of
    /// `0.04 v^2 + (5 - b) v + 140 + I = 0`, returns `None` when the current is
    /// large enough that no equilibrium exists (tonic firing)
    pub fn resting_state(&self, input_current: f64) -> Option<IzhikevichState> {
        let linear = 5. - self.b;
        let discriminant = linear.powi(2) - 4. * 0.04 * (140. + input_current);

        if discriminant < 0. {
            return None;
        }

        let v = (-linear - discriminant.sqrt()) / (2. * 0.04);

        Some(IzhikevichState { v, u: self.b * v })
    }
}

impl NeuronDynamics for IzhikevichParameters {
    type State = IzhikevichState;

    const FAMILY: ModelFamily = ModelFamily::Izhikevich;

    fn derivative(&self, state: &IzhikevichState, input_current: f64) -> IzhikevichState {
        IzhikevichState {
            v: 0.04 * state.v.powi(2) + 5. * state.v + 140. - state.u + input_current,
            u: self.a * (self.b * state.v - state.u),
        }
    }

    fn handle_spiking(&self, state: &mut IzhikevichState) -> bool {
        if state.v >= IZHIKEVICH_SPIKE_THRESHOLD {
            state.v = self.c;
            state.u += self.d;

            true
        } else {
            false
        }
    }
}
