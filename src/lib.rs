//! # Spiking Neuron Dynamics
//!
//! `spiking_neuron_dynamics` is a package focused on simulating single compartment
//! spiking neuron models by integrating their ordinary differential equations under
//! injected current, and on extracting spike timing and variability statistics from
//! the resulting traces. Currently implements the Hodgkin Huxley, Hindmarsh Rose and
//! Izhikevich models, a fourth order Runge-Kutta integrator generic over any model,
//! threshold crossing and local maximum spike detection, inter spike interval
//! statistics, and firing rate (F-I) curves.
//!
//! Models are made using traits so new models can be added by implementing
//! [`neuron::NeuronDynamics`] on a parameter struct and deriving
//! [`neuron::fields::NamedFields`] and [`neuron::fields::StateVector`].
//! See below for examples.
//!
//! ## Example Code
//!
//! ### Izhikevich neuron with static input
//!
//! ```rust
//! use spiking_neuron_dynamics::{
//!     error::SpikingDynamicsError,
//!     neuron::izhikevich::IzhikevichNeuron,
//!     simulation::{run, CurrentInput},
//! };
//!
//! fn main() -> Result<(), SpikingDynamicsError> {
//!     let mut neuron = IzhikevichNeuron::default_impl();
//!
//!     // 1000 ms of regular spiking at 0.1 ms steps
//!     let output = run(&mut neuron, 0.1, 10_000, &CurrentInput::Constant(10.), &["v", "u"])?;
//!
//!     assert_eq!(output.trace("v").map(|v| v.len()), Some(10_000));
//!     assert!(output.spike_events.len() > 5);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Spike statistics of a chaotic Hindmarsh Rose neuron
//!
//! ```rust
//! use spiking_neuron_dynamics::{
//!     error::SpikingDynamicsError,
//!     neuron::hindmarsh_rose::HindmarshRoseNeuron,
//!     simulation::run_static_input,
//!     spike_analysis::{summarize_trace, SpikeDetection},
//! };
//!
//! fn main() -> Result<(), SpikingDynamicsError> {
//!     let mut neuron = HindmarshRoseNeuron::default_impl();
//!     let dt = 0.01;
//!
//!     let x = run_static_input(&mut neuron, 3.2, dt, 50_000)?;
//!     let summary = summarize_trace(&x, dt, &SpikeDetection::local_maximum())?;
//!
//!     println!("spikes: {}, cv: {:?}", summary.spike_count(), summary.cv);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Selecting a model at runtime
//!
//! ```rust
//! use std::collections::HashMap;
//! use spiking_neuron_dynamics::{
//!     error::SpikingDynamicsError,
//!     neuron::{AnyNeuron, ModelFamily, SpikingNeuron},
//! };
//!
//! fn main() -> Result<(), SpikingDynamicsError> {
//!     let params = HashMap::from([(String::from("gna"), 100.)]);
//!     let state = HashMap::from([(String::from("v"), -70.)]);
//!
//!     let mut neuron = AnyNeuron::new(ModelFamily::HodgkinHuxley, &params, &state)?;
//!
//!     neuron.add_synaptic_input(5.);
//!     neuron.add_synaptic_input(5.);
//!     neuron.step(0.01)?;
//!
//!     assert_eq!(neuron.pending_input(), 0.);
//!     assert!(neuron.get("v")? > -70.);
//!
//!     // unknown names are rejected
//!     assert!(neuron.get_param("mu").is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Custom models
//!
//! ```rust
//! use spiking_neuron_dynamics::neuron::{
//!     Neuron, NeuronDynamics, ModelFamily, SpikingNeuron,
//!     fields::{NamedFields, StateVector},
//! };
//!
//! #[derive(Debug, Clone, Copy, Default, PartialEq, NamedFields, StateVector)]
//! pub struct LeakState {
//!     pub v: f64,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, NamedFields)]
//! pub struct LeakParameters {
//!     pub tau: f64,
//! }
//!
//! impl Default for LeakParameters {
//!     fn default() -> Self {
//!         LeakParameters { tau: 10. }
//!     }
//! }
//!
//! impl NeuronDynamics for LeakParameters {
//!     type State = LeakState;
//!
//!     // label used in logs and field errors
//!     const FAMILY: ModelFamily = ModelFamily::Izhikevich;
//!
//!     fn derivative(&self, state: &LeakState, input_current: f64) -> LeakState {
//!         LeakState { v: (-state.v + input_current) / self.tau }
//!     }
//! }
//!
//! let mut neuron = Neuron::new(LeakParameters::default(), LeakState::default());
//! neuron.add_synaptic_input(1.);
//! neuron.step(0.1).unwrap();
//!
//! assert!(neuron.state.v > 0.);
//! ```

// lets the field derives refer to this crate by name from inside it
extern crate self as spiking_neuron_dynamics;

pub mod error;
pub mod neuron;
pub mod simulation;
pub mod spike_analysis;
