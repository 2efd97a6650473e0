//! An implementation of the Hindmarsh Rose bursting model with a fast variable `x`,
//! a recovery variable `y` and a slow adaptation variable `z`.

use super::{Neuron, NeuronDynamics, ModelFamily};
use super::fields::{NamedFields, StateVector};
use super::integrator::RungeKutta4;


/// Hindmarsh Rose neuron integrated with `I`, defaults to [`RungeKutta4`]
pub type HindmarshRoseNeuron<I = RungeKutta4> = Neuron<HindmarshRoseParameters, I>;

/// State of a Hindmarsh Rose neuron
#[derive(Debug, Clone, Copy, PartialEq, NamedFields, StateVector)]
pub struct HindmarshRoseState {
    /// Membrane potential analogue
    pub x: f64,
    /// Fast recovery variable
    pub y: f64,
    /// Slow adaptation current
    pub z: f64,
}

impl Default for HindmarshRoseState {
    fn default() -> Self {
        HindmarshRoseState {
            x: -0.712841,
            y: -1.93688,
            z: 3.16568,
        }
    }
}

/// Parameters of a Hindmarsh Rose neuron, `e` and `vh` are stored for completeness
/// of the parameter set but do not enter the equations
#[derive(Debug, Clone, Copy, PartialEq, NamedFields)]
pub struct HindmarshRoseParameters {
    /// Cubic term coefficient
    pub a: f64,
    /// Quadratic term coefficient
    pub b: f64,
    /// Recovery variable offset
    pub c: f64,
    /// Recovery variable quadratic coefficient
    pub d: f64,
    /// Reserved
    pub e: f64,
    /// Time scale of the slow variable (also written `r`)
    pub mu: f64,
    /// Adaptation coupling
    #[field_name = "S"]
    pub s: f64,
    /// Resting value of `x` used by the slow variable
    pub xr: f64,
    /// Reserved
    pub vh: f64,
}

impl Default for HindmarshRoseParameters {
    fn default() -> Self {
        HindmarshRoseParameters {
            a: 1.,
            b: 3.,
            c: 1.,
            d: 5.,
            e: 0.,
            mu: 0.006,
            s: 4.,
            xr: -1.6,
            vh: 1.,
        }
    }
}

impl HindmarshRoseParameters {
    /// Equilibrium under a constant injected current, found by bisecting the
    /// cubic `-a x^3 + (b - d) x^2 - S x + c + S xr + I` on `[-100, 100]`,
    /// returns `None` if the cubic does not change sign there (for example `a <= 0`)
    pub fn equilibrium(&self, input_current: f64) -> Option<HindmarshRoseState> {
        let cubic = |x: f64| {
            -self.a * x.powi(3) + (self.b - self.d) * x.powi(2) - self.s * x
            + self.c + self.s * self.xr + input_current
        };

        let (mut low, mut high) = (-100., 100.);
        let low_sign = cubic(low).signum();
        if low_sign == cubic(high).signum() {
            return None;
        }

        for _ in 0..200 {
            let mid = 0.5 * (low + high);
            if cubic(mid).signum() == low_sign {
                low = mid;
            } else {
                high = mid;
            }

            if high - low < 1e-13 {
                break;
            }
        }

        let x = 0.5 * (low + high);

        Some(
            HindmarshRoseState {
                x,
                y: self.c - self.d * x.powi(2),
                z: self.s * (x - self.xr),
            }
        )
    }
}

impl NeuronDynamics for HindmarshRoseParameters {
    type State = HindmarshRoseState;

    const FAMILY: ModelFamily = ModelFamily::HindmarshRose;

    fn derivative(&self, state: &HindmarshRoseState, input_current: f64) -> HindmarshRoseState {
        let HindmarshRoseState { x, y, z } = *state;

        HindmarshRoseState {
            x: y - self.a * x.powi(3) + self.b * x.powi(2) - z + input_current,
            y: self.c - self.d * x.powi(2) - y,
            z: self.mu * (self.s * (x - self.xr) - z),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;


    #[test]
    fn test_equilibrium_is_fixed_point() {
        let params = HindmarshRoseParameters::default();

        for current in [0., 1., 2.5] {
            let equilibrium = params.equilibrium(current).unwrap();
            let derivative = params.derivative(&equilibrium, current);

            for value in derivative.values() {
                assert!(value.abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_reserved_parameters_do_not_change_output() {
        let params = HindmarshRoseParameters::default();
        let altered = HindmarshRoseParameters { e: 12., vh: -3., ..params };
        let state = HindmarshRoseState::default();

        assert_eq!(params.derivative(&state, 3.2), altered.derivative(&state, 3.2));
    }

    #[test]
    fn test_uppercase_field_name() {
        let mut params = HindmarshRoseParameters::default();

        assert_eq!(params.get_field("S"), Some(4.));
        assert_eq!(params.get_field("s"), None);

        if let Some(s) = params.get_field_mut("S") {
            *s = 2.;
        }
        assert_eq!(params.s, 2.);
    }

    #[test]
    fn test_no_equilibrium_without_cubic_term() {
        let params = HindmarshRoseParameters { a: 0., b: 0., d: 0., s: 0., ..Default::default() };

        assert_eq!(params.equilibrium(0.), None);
    }
}
