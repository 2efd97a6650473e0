//! An implementation of the Hodgkin Huxley model with sodium, potassium and leak
//! conductances, voltages in mV and time in ms.

use super::{Neuron, NeuronDynamics, ModelFamily};
use super::fields::{NamedFields, StateVector};
use super::integrator::RungeKutta4;


/// Distance from a rate function singularity under which the series limit is used
const SINGULARITY_TOLERANCE: f64 = 1e-6;

/// Hodgkin Huxley neuron integrated with `I`, defaults to [`RungeKutta4`]
pub type HodgkinHuxleyNeuron<I = RungeKutta4> = Neuron<HodgkinHuxleyParameters, I>;

/// State of a Hodgkin Huxley neuron
#[derive(Debug, Clone, Copy, PartialEq, NamedFields, StateVector)]
pub struct HodgkinHuxleyState {
    /// Membrane potential (mV)
    pub v: f64,
    /// Sodium activation gate
    pub m: f64,
    /// Sodium inactivation gate
    pub h: f64,
    /// Potassium activation gate
    pub n: f64,
}

impl Default for HodgkinHuxleyState {
    fn default() -> Self {
        HodgkinHuxleyState {
            v: -65.,
            m: 0.0529,
            h: 0.5961,
            n: 0.3177,
        }
    }
}

/// Parameters of a Hodgkin Huxley neuron
#[derive(Debug, Clone, Copy, PartialEq, NamedFields)]
pub struct HodgkinHuxleyParameters {
    /// Membrane capacitance (uF/cm^2)
    pub cm: f64,
    /// Sodium reversal potential (mV)
    pub vna: f64,
    /// Potassium reversal potential (mV)
    pub vk: f64,
    /// Leak reversal potential (mV)
    pub vl: f64,
    /// Maximal sodium conductance (mS/cm^2)
    pub gna: f64,
    /// Maximal potassium conductance (mS/cm^2)
    pub gk: f64,
    /// Leak conductance (mS/cm^2)
    pub gl: f64,
}

impl Default for HodgkinHuxleyParameters {
    fn default() -> Self {
        HodgkinHuxleyParameters {
            cm: 1.,
            vna: 50.,
            vk: -77.,
            vl: -54.387,
            gna: 120.,
            gk: 36.,
            gl: 0.3,
        }
    }
}

// x / (1 - exp(-x / k)), removable singularity at x = 0 where the limit is k
fn linoid(x: f64, k: f64) -> f64 {
    if x.abs() < SINGULARITY_TOLERANCE {
        k * (1. + x / (2. * k))
    } else {
        x / (1. - (-x / k).exp())
    }
}

/// Sodium activation opening rate, finite at -40 mV where it equals `1.`
pub fn alpha_m(v: f64) -> f64 {
    0.1 * linoid(v + 40., 10.)
}

/// Sodium activation closing rate
pub fn beta_m(v: f64) -> f64 {
    4. * (-(v + 65.) / 18.).exp()
}

/// Sodium inactivation opening rate
pub fn alpha_h(v: f64) -> f64 {
    0.07 * (-(v + 65.) / 20.).exp()
}

/// Sodium inactivation closing rate
pub fn beta_h(v: f64) -> f64 {
    1. / (1. + (-(v + 35.) / 10.).exp())
}

/// Potassium activation opening rate, finite at -55 mV where it equals `0.1`
pub fn alpha_n(v: f64) -> f64 {
    0.01 * linoid(v + 55., 10.)
}

/// Potassium activation closing rate
pub fn beta_n(v: f64) -> f64 {
    0.125 * (-(v + 65.) / 80.).exp()
}

fn gate_steady_state(alpha: f64, beta: f64) -> f64 {
    alpha / (alpha + beta)
}

impl HodgkinHuxleyParameters {
    /// Total ionic current (uA/cm^2) flowing out of the cell in the given state
    pub fn ionic_current(&self, state: &HodgkinHuxleyState) -> f64 {
        let i_na = self.gna * state.m.powi(3) * state.h * (state.v - self.vna);
        let i_k = self.gk * state.n.powi(4) * (state.v - self.vk);
        let i_leak = self.gl * (state.v - self.vl);

        i_na + i_k + i_leak
    }

    /// State with every gate at its steady state value for the given voltage
    pub fn steady_state(&self, v: f64) -> HodgkinHuxleyState {
        HodgkinHuxleyState {
            v,
            m: gate_steady_state(alpha_m(v), beta_m(v)),
            h: gate_steady_state(alpha_h(v), beta_h(v)),
            n: gate_steady_state(alpha_n(v), beta_n(v)),
        }
    }

    /// Fixed point of the model without injected current, found by bisecting the
    /// steady state ionic current between -100 mV and -40 mV, returns `None` if
    /// the current does not change sign in that range
    pub fn resting_state(&self) -> Option<HodgkinHuxleyState> {
        let steady_current = |v: f64| self.ionic_current(&self.steady_state(v));

        let (mut low, mut high) = (-100., -40.);
        let low_sign = steady_current(low).signum();
        if low_sign == steady_current(high).signum() {
            return None;
        }

        for _ in 0..200 {
            let mid = 0.5 * (low + high);
            if steady_current(mid).signum() == low_sign {
                low = mid;
            } else {
                high = mid;
            }

            if high - low < 1e-12 {
                break;
            }
        }

        Some(self.steady_state(0.5 * (low + high)))
    }
}

impl NeuronDynamics for HodgkinHuxleyParameters {
    type State = HodgkinHuxleyState;

    const FAMILY: ModelFamily = ModelFamily::HodgkinHuxley;

    fn derivative(&self, state: &HodgkinHuxleyState, input_current: f64) -> HodgkinHuxleyState {
        let v = state.v;

        HodgkinHuxleyState {
            v: (input_current - self.ionic_current(state)) / self.cm,
            m: alpha_m(v) * (1. - state.m) - beta_m(v) * state.m,
            h: alpha_h(v) * (1. - state.h) - beta_h(v) * state.h,
            n: alpha_n(v) * (1. - state.n) - beta_n(v) * state.n,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;


    #[test]
    fn test_rates_at_singular_voltages() {
        assert_eq!(alpha_m(-40.), 1.);
        assert!((alpha_n(-55.) - 0.1).abs() < 1e-15);

        // continuous across the singularity
        for offset in [1e-9, 1e-7, 2e-6, 1e-4] {
            assert!((alpha_m(-40. + offset) - alpha_m(-40.)).abs() < 1e-4);
            assert!((alpha_m(-40. - offset) - alpha_m(-40.)).abs() < 1e-4);
            assert!((alpha_n(-55. + offset) - alpha_n(-55.)).abs() < 1e-5);
            assert!((alpha_n(-55. - offset) - alpha_n(-55.)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_derivative_finite_at_singular_voltages() {
        let params = HodgkinHuxleyParameters::default();

        for v in [-40., -55.] {
            let state = HodgkinHuxleyState { v, ..HodgkinHuxleyState::default() };
            let derivative = params.derivative(&state, 0.);

            assert!(derivative.is_finite());
        }
    }

    #[test]
    fn test_resting_state() {
        let params = HodgkinHuxleyParameters::default();
        let rest = params.resting_state().unwrap();

        assert!((rest.v + 65.).abs() < 0.01);
        assert!((rest.m - 0.0530).abs() < 1e-3);
        assert!((rest.h - 0.5960).abs() < 1e-3);
        assert!((rest.n - 0.3177).abs() < 1e-3);

        let derivative = params.derivative(&rest, 0.);
        for value in derivative.values() {
            assert!(value.abs() < 1e-9);
        }
    }

    #[test]
    fn test_no_resting_state_outside_search_range() {
        // depolarized leak dominates, rest lies above -40 mV
        let params = HodgkinHuxleyParameters { vl: -10., gl: 30., ..Default::default() };

        assert_eq!(params.resting_state(), None);
    }

    #[test]
    fn test_depolarizing_current() {
        let params = HodgkinHuxleyParameters::default();
        let rest = params.resting_state().unwrap();

        assert!(params.derivative(&rest, 10.).v > 0.);
        assert!(params.derivative(&rest, -10.).v < 0.);
    }
}
