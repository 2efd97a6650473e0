//! Neuron models and the machinery to step them through time.
//!
//! Every model family provides a parameter struct implementing [`NeuronDynamics`]
//! (the right hand side of its ordinary differential equations) and a state struct
//! implementing [`StateVector`]. [`Neuron`] pairs the two with an [`Integrator`] and
//! an [`InputAccumulator`] and implements [`SpikingNeuron`], the name based interface
//! used by the simulation driver. [`AnyNeuron`] selects a family at runtime.

use std::{
    collections::HashMap,
    fmt::{Debug, Display, Formatter},
};
use crate::error::{FieldError, FieldKind, IntegrationError};

pub mod fields;
pub mod input;
pub mod integrator;
pub mod hodgkin_huxley;
pub mod hindmarsh_rose;
pub mod izhikevich;

use fields::{NamedFields, StateVector, get_named, set_named, overlay_named, to_named_map};
use input::InputAccumulator;
use integrator::{Integrator, RungeKutta4, check_step_size};
use hodgkin_huxley::{HodgkinHuxleyNeuron, HodgkinHuxleyParameters, HodgkinHuxleyState};
use hindmarsh_rose::{HindmarshRoseNeuron, HindmarshRoseParameters, HindmarshRoseState};
use izhikevich::{IzhikevichNeuron, IzhikevichParameters, IzhikevichState};


/// Available neuron model families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    /// Hodgkin Huxley sodium/potassium/leak conductance model
    HodgkinHuxley,
    /// Hindmarsh Rose three variable bursting model
    HindmarshRose,
    /// Izhikevich quadratic model with reset
    Izhikevich,
}

impl ModelFamily {
    /// Short name used in the literature (`"HH"`, `"HR"`, `"Iz"`)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            ModelFamily::HodgkinHuxley => "HH",
            ModelFamily::HindmarshRose => "HR",
            ModelFamily::Izhikevich => "Iz",
        }
    }

    /// State variable names of the family in state vector order
    pub fn state_names(&self) -> &'static [&'static str] {
        match self {
            ModelFamily::HodgkinHuxley => HodgkinHuxleyState::field_names(),
            ModelFamily::HindmarshRose => HindmarshRoseState::field_names(),
            ModelFamily::Izhikevich => IzhikevichState::field_names(),
        }
    }

    /// Parameter names of the family
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            ModelFamily::HodgkinHuxley => HodgkinHuxleyParameters::field_names(),
            ModelFamily::HindmarshRose => HindmarshRoseParameters::field_names(),
            ModelFamily::Izhikevich => IzhikevichParameters::field_names(),
        }
    }
}

impl Display for ModelFamily {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let name = match self {
            ModelFamily::HodgkinHuxley => "Hodgkin-Huxley",
            ModelFamily::HindmarshRose => "Hindmarsh-Rose",
            ModelFamily::Izhikevich => "Izhikevich",
        };

        write!(f, "{}", name)
    }
}

/// Right hand side of a model's differential equations, implemented on the
/// model's parameter set
pub trait NeuronDynamics: NamedFields + Debug + Clone + Default + Send + Sync {
    /// State vector the equations act on
    type State: StateVector + NamedFields + Debug + Clone + Copy + Default + PartialEq + Send + Sync;

    /// Family the equations belong to
    const FAMILY: ModelFamily;

    /// Calculates the time derivative of `state` given the injected current
    fn derivative(&self, state: &Self::State, input_current: f64) -> Self::State;

    /// Applies any discontinuity after a completed step, returns whether the
    /// model emitted a spike event
    fn handle_spiking(&self, _state: &mut Self::State) -> bool {
        false
    }
}

/// A single simulated cell that accepts injected current and advances one step at a time
pub trait SpikingNeuron: Clone + Send + Sync {
    /// Family of the underlying model
    fn family(&self) -> ModelFamily;
    /// Adds a current contribution to be consumed by the next step
    fn add_synaptic_input(&mut self, current: f64);
    /// Current accumulated for the next step
    fn pending_input(&self) -> f64;
    /// Consumes the accumulated current and advances the state by `dt`,
    /// returns whether the model emitted a spike event during the step
    fn step(&mut self, dt: f64) -> Result<bool, IntegrationError>;
    /// Gets a state variable by name
    fn get(&self, variable: &str) -> Result<f64, FieldError>;
    /// Sets a state variable by name
    fn set(&mut self, variable: &str, value: f64) -> Result<(), FieldError>;
    /// Gets a parameter by name
    fn get_param(&self, parameter: &str) -> Result<f64, FieldError>;
    /// Sets a parameter by name
    fn set_param(&mut self, parameter: &str, value: f64) -> Result<(), FieldError>;
    /// Rewrites the given state variables and discards any pending input,
    /// variables not mentioned keep their value
    fn reset(&mut self, state: &HashMap<String, f64>) -> Result<(), FieldError>;
    /// Snapshot of every state variable
    fn state_values(&self) -> HashMap<String, f64>;
    /// State variable names in state vector order
    fn variable_names(&self) -> &'static [&'static str] {
        self.family().state_names()
    }
    /// Parameter names
    fn parameter_names(&self) -> &'static [&'static str] {
        self.family().parameter_names()
    }
}

/// A model instance owning one state, one parameter set, an integrator and the
/// input accumulator for the next step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neuron<D: NeuronDynamics, I: Integrator = RungeKutta4> {
    /// Current state
    pub state: D::State,
    /// Model parameters, read only while stepping
    pub params: D,
    /// Integration scheme
    pub integrator: I,
    synaptic_input: InputAccumulator,
}

impl<D: NeuronDynamics> Neuron<D, RungeKutta4> {
    /// Creates a neuron integrated with [`RungeKutta4`]
    pub fn new(params: D, state: D::State) -> Self {
        Neuron::with_integrator(params, state, RungeKutta4)
    }

    /// Returns the default implementation of the neuron
    pub fn default_impl() -> Self {
        Neuron::new(D::default(), D::State::default())
    }

    /// Creates a neuron from name to value maps overlaid on the default
    /// parameters and state, unknown names fail
    pub fn from_named(
        params: &HashMap<String, f64>,
        state: &HashMap<String, f64>,
    ) -> Result<Self, FieldError> {
        let mut neuron = Neuron::default_impl();

        overlay_named(&mut neuron.params, params, D::FAMILY, FieldKind::Parameter)?;
        overlay_named(&mut neuron.state, state, D::FAMILY, FieldKind::StateVariable)?;

        Ok(neuron)
    }
}

impl<D: NeuronDynamics, I: Integrator> Neuron<D, I> {
    /// Creates a neuron with an explicit integration scheme
    pub fn with_integrator(params: D, state: D::State, integrator: I) -> Self {
        Neuron {
            state,
            params,
            integrator,
            synaptic_input: InputAccumulator::default(),
        }
    }

    /// Replaces the whole state and discards any pending input
    pub fn reset_to(&mut self, state: D::State) {
        self.state = state;
        self.synaptic_input.clear();
    }
}

impl<D: NeuronDynamics, I: Integrator> SpikingNeuron for Neuron<D, I> {
    fn family(&self) -> ModelFamily {
        D::FAMILY
    }

    fn add_synaptic_input(&mut self, current: f64) {
        self.synaptic_input.push(current);
    }

    fn pending_input(&self) -> f64 {
        self.synaptic_input.pending()
    }

    fn step(&mut self, dt: f64) -> Result<bool, IntegrationError> {
        // before consuming so a rejected step keeps the pending input
        check_step_size(dt)?;

        let input_current = self.synaptic_input.consume();
        let mut next = self.integrator.integrate(&self.params, &self.state, dt, input_current)?;
        let is_spiking = self.params.handle_spiking(&mut next);

        if is_spiking {
            log::trace!("{} spike event, reset to {:?}", D::FAMILY, next);
        }
        if !next.is_finite() {
            log::warn!(
                "{} state became non-finite (input current: {}, dt: {}): {:?}",
                D::FAMILY, input_current, dt, next,
            );
        }

        self.state = next;

        Ok(is_spiking)
    }

    fn get(&self, variable: &str) -> Result<f64, FieldError> {
        get_named(&self.state, variable, D::FAMILY, FieldKind::StateVariable)
    }

    fn set(&mut self, variable: &str, value: f64) -> Result<(), FieldError> {
        set_named(&mut self.state, variable, value, D::FAMILY, FieldKind::StateVariable)
    }

    fn get_param(&self, parameter: &str) -> Result<f64, FieldError> {
        get_named(&self.params, parameter, D::FAMILY, FieldKind::Parameter)
    }

    fn set_param(&mut self, parameter: &str, value: f64) -> Result<(), FieldError> {
        set_named(&mut self.params, parameter, value, D::FAMILY, FieldKind::Parameter)
    }

    fn reset(&mut self, state: &HashMap<String, f64>) -> Result<(), FieldError> {
        overlay_named(&mut self.state, state, D::FAMILY, FieldKind::StateVariable)?;
        self.synaptic_input.clear();

        Ok(())
    }

    fn state_values(&self) -> HashMap<String, f64> {
        to_named_map(&self.state)
    }

    fn variable_names(&self) -> &'static [&'static str] {
        D::State::field_names()
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        D::field_names()
    }
}

/// A neuron whose model family is chosen at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AnyNeuron {
    /// Hodgkin Huxley neuron
    HodgkinHuxley(HodgkinHuxleyNeuron),
    /// Hindmarsh Rose neuron
    HindmarshRose(HindmarshRoseNeuron),
    /// Izhikevich neuron
    Izhikevich(IzhikevichNeuron),
}

macro_rules! delegate_neuron {
    ($self:expr, $neuron:ident => $body:expr) => {
        match $self {
            AnyNeuron::HodgkinHuxley($neuron) => $body,
            AnyNeuron::HindmarshRose($neuron) => $body,
            AnyNeuron::Izhikevich($neuron) => $body,
        }
    };
}

impl AnyNeuron {
    /// Creates a neuron of the given family from name to value maps overlaid on
    /// the family's defaults, unknown names fail
    pub fn new(
        family: ModelFamily,
        params: &HashMap<String, f64>,
        state: &HashMap<String, f64>,
    ) -> Result<Self, FieldError> {
        let neuron = match family {
            ModelFamily::HodgkinHuxley => AnyNeuron::HodgkinHuxley(Neuron::from_named(params, state)?),
            ModelFamily::HindmarshRose => AnyNeuron::HindmarshRose(Neuron::from_named(params, state)?),
            ModelFamily::Izhikevich => AnyNeuron::Izhikevich(Neuron::from_named(params, state)?),
        };

        Ok(neuron)
    }

    /// Default neuron of the given family
    pub fn default_for(family: ModelFamily) -> Self {
        match family {
            ModelFamily::HodgkinHuxley => AnyNeuron::HodgkinHuxley(Neuron::default_impl()),
            ModelFamily::HindmarshRose => AnyNeuron::HindmarshRose(Neuron::default_impl()),
            ModelFamily::Izhikevich => AnyNeuron::Izhikevich(Neuron::default_impl()),
        }
    }
}

impl From<HodgkinHuxleyNeuron> for AnyNeuron {
    fn from(neuron: HodgkinHuxleyNeuron) -> AnyNeuron {
        AnyNeuron::HodgkinHuxley(neuron)
    }
}

impl From<HindmarshRoseNeuron> for AnyNeuron {
    fn from(neuron: HindmarshRoseNeuron) -> AnyNeuron {
        AnyNeuron::HindmarshRose(neuron)
    }
}

impl From<IzhikevichNeuron> for AnyNeuron {
    fn from(neuron: IzhikevichNeuron) -> AnyNeuron {
        AnyNeuron::Izhikevich(neuron)
    }
}

impl SpikingNeuron for AnyNeuron {
    fn family(&self) -> ModelFamily {
        delegate_neuron!(self, neuron => neuron.family())
    }

    fn add_synaptic_input(&mut self, current: f64) {
        delegate_neuron!(self, neuron => neuron.add_synaptic_input(current))
    }

    fn pending_input(&self) -> f64 {
        delegate_neuron!(self, neuron => neuron.pending_input())
    }

    fn step(&mut self, dt: f64) -> Result<bool, IntegrationError> {
        delegate_neuron!(self, neuron => neuron.step(dt))
    }

    fn get(&self, variable: &str) -> Result<f64, FieldError> {
        delegate_neuron!(self, neuron => neuron.get(variable))
    }

    fn set(&mut self, variable: &str, value: f64) -> Result<(), FieldError> {
        delegate_neuron!(self, neuron => neuron.set(variable, value))
    }

    fn get_param(&self, parameter: &str) -> Result<f64, FieldError> {
        delegate_neuron!(self, neuron => neuron.get_param(parameter))
    }

    fn set_param(&mut self, parameter: &str, value: f64) -> Result<(), FieldError> {
        delegate_neuron!(self, neuron => neuron.set_param(parameter, value))
    }

    fn reset(&mut self, state: &HashMap<String, f64>) -> Result<(), FieldError> {
        delegate_neuron!(self, neuron => neuron.reset(state))
    }

    fn state_values(&self) -> HashMap<String, f64> {
        delegate_neuron!(self, neuron => neuron.state_values())
    }
}
