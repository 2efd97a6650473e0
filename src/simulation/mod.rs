//! Simulation driver that injects current into a neuron step by step and records
//! the requested state variables, along with a parallel firing rate (F-I) sweep.

use std::collections::HashMap;
use rayon::prelude::*;
use crate::error::{InputError, SpikingDynamicsError};
use crate::neuron::{SpikingNeuron, integrator::check_step_size};
use crate::spike_analysis::{SpikeDetection, Statistic, detect_spikes, firing_rate};


/// Source of injected current for every step of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurrentInput<'a> {
    /// Same current on every step
    Constant(f64),
    /// One current per step, indexed by step
    Array(&'a [f64]),
}

impl CurrentInput<'_> {
    /// Current for the given step, fails if an array has no entry for it
    pub fn current_at(&self, step: usize) -> Result<f64, InputError> {
        match self {
            CurrentInput::Constant(current) => Ok(*current),
            CurrentInput::Array(currents) => currents.get(step)
                .copied()
                .ok_or(InputError::InputLength { step, length: currents.len() }),
        }
    }
}

impl From<f64> for CurrentInput<'_> {
    fn from(current: f64) -> Self {
        CurrentInput::Constant(current)
    }
}

impl<'a> From<&'a [f64]> for CurrentInput<'a> {
    fn from(currents: &'a [f64]) -> Self {
        CurrentInput::Array(currents)
    }
}

/// Traces recorded during a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationOutput {
    /// One value per step for each recorded variable
    pub traces: HashMap<String, Vec<f64>>,
    /// Steps on which the model emitted a spike event (for example an Izhikevich reset)
    pub spike_events: Vec<usize>,
}

impl SimulationOutput {
    /// Trace of a recorded variable
    pub fn trace(&self, variable: &str) -> Option<&[f64]> {
        self.traces.get(variable).map(|trace| trace.as_slice())
    }

    /// Times of the model's spike events, using the same step index times `dt`
    /// convention as [`detect_spikes`]
    pub fn spike_times(&self, dt: f64) -> Vec<f64> {
        self.spike_events.iter()
            .map(|step| *step as f64 * dt)
            .collect()
    }
}

/// Runs `neuron` for `steps` steps of size `dt`, pushing the current for each step
/// into the neuron's input before stepping and recording `variables` after it
///
/// - `neuron` : neuron to advance, left in its final state
///
/// - `dt` : step size, must be positive and finite
///
/// - `steps` : number of steps, every returned trace has this length
///
/// - `input` : current provider, arrays must have at least `steps` entries
///
/// - `variables` : state variables to record
///
/// Any error aborts the run and no traces are returned, the neuron should be
/// reset before being reused
pub fn run<N: SpikingNeuron>(
    neuron: &mut N,
    dt: f64,
    steps: usize,
    input: &CurrentInput,
    variables: &[&str],
) -> Result<SimulationOutput, SpikingDynamicsError> {
    check_step_size(dt)?;
    for variable in variables {
        neuron.get(variable)?;
    }

    log::debug!(
        "Running {} model for {} steps (dt: {}), recording {:?}",
        neuron.family(), steps, dt, variables,
    );

    let mut traces: Vec<Vec<f64>> = variables.iter()
        .map(|_| Vec::with_capacity(steps))
        .collect();
    let mut spike_events = Vec::new();

    for step in 0..steps {
        neuron.add_synaptic_input(input.current_at(step)?);

        if neuron.step(dt)? {
            spike_events.push(step);
        }

        for (variable, trace) in variables.iter().zip(traces.iter_mut()) {
            trace.push(neuron.get(variable)?);
        }
    }

    log::debug!(
        "Finished {} model run with {} model spike events",
        neuron.family(), spike_events.len(),
    );

    Ok(
        SimulationOutput {
            traces: variables.iter()
                .map(|variable| variable.to_string())
                .zip(traces)
                .collect(),
            spike_events,
        }
    )
}

/// Takes in a static current as an input and iterates the given neuron for
/// a given number of steps, returns the membrane potential over time
pub fn run_static_input<N: SpikingNeuron>(
    neuron: &mut N,
    input: f64,
    dt: f64,
    steps: usize,
) -> Result<Vec<f64>, SpikingDynamicsError> {
    let membrane_potential = neuron.variable_names()[0];
    let mut output = run(neuron, dt, steps, &CurrentInput::Constant(input), &[membrane_potential])?;

    Ok(output.traces.remove(membrane_potential).unwrap_or_default())
}

/// How spikes are counted when building a firing rate curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpikeCounting {
    /// Count the model's own spike events, required for models with a reset
    /// since the reset removes the peak from the recorded trace
    ModelEvents,
    /// Apply a detection policy to the membrane potential trace
    Detection(SpikeDetection),
}

impl Default for SpikeCounting {
    fn default() -> Self {
        SpikeCounting::Detection(SpikeDetection::default())
    }
}

/// One point of a firing rate curve
#[derive(Debug, Clone, PartialEq)]
pub struct FiringRatePoint {
    /// Injected current
    pub current: f64,
    /// Spikes counted over the run
    pub spike_count: usize,
    /// Firing rate (Hz)
    pub rate: Statistic<f64>,
}

fn firing_rate_point<N: SpikingNeuron>(
    worker: &mut N,
    initial_state: &HashMap<String, f64>,
    current: f64,
    dt: f64,
    steps: usize,
    counting: &SpikeCounting,
) -> Result<FiringRatePoint, SpikingDynamicsError> {
    worker.reset(initial_state)?;

    let membrane_potential = worker.variable_names()[0];
    let output = run(worker, dt, steps, &CurrentInput::Constant(current), &[membrane_potential])?;

    let spike_count = match counting {
        SpikeCounting::ModelEvents => output.spike_events.len(),
        SpikeCounting::Detection(detection) => {
            let trace = output.trace(membrane_potential).unwrap_or_default();
            detect_spikes(trace, dt, detection)?.len()
        },
    };

    log::debug!("{} model at current {}: {} spikes", worker.family(), current, spike_count);

    Ok(
        FiringRatePoint {
            current,
            spike_count,
            rate: firing_rate(spike_count, steps as f64 * dt),
        }
    )
}

/// Calculates the firing rate of `neuron` for each current in `currents`, every
/// point starts from the neuron's current state and runs for `duration` (ms),
/// points are calculated in parallel with each worker reusing one neuron through
/// an explicit reset, `neuron` itself is not modified
pub fn firing_rate_curve<N: SpikingNeuron>(
    neuron: &N,
    currents: &[f64],
    dt: f64,
    duration: f64,
    counting: &SpikeCounting,
) -> Result<Vec<FiringRatePoint>, SpikingDynamicsError> {
    check_step_size(dt)?;

    let steps = if duration > 0. { (duration / dt).round() as usize } else { 0 };
    let initial_state = neuron.state_values();

    currents.par_iter()
        .map_init(
            || neuron.clone(),
            |worker, current| firing_rate_point(worker, &initial_state, *current, dt, steps, counting),
        )
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::{FieldError, IntegrationError};
    use crate::neuron::{AnyNeuron, ModelFamily, izhikevich::IzhikevichNeuron};


    #[test]
    fn test_current_at() {
        let currents = [1., 2., 3.];

        assert_eq!(CurrentInput::Constant(4.).current_at(1_000_000), Ok(4.));
        assert_eq!(CurrentInput::Array(&currents).current_at(2), Ok(3.));
        assert_eq!(
            CurrentInput::Array(&currents).current_at(3),
            Err(InputError::InputLength { step: 3, length: 3 }),
        );
    }

    #[test]
    fn test_trace_lengths() -> Result<(), SpikingDynamicsError> {
        let mut neuron = AnyNeuron::default_for(ModelFamily::HodgkinHuxley);

        let output = run(&mut neuron, 0.01, 250, &CurrentInput::Constant(5.), &["v", "m", "h", "n"])?;

        assert_eq!(output.traces.len(), 4);
        for trace in output.traces.values() {
            assert_eq!(trace.len(), 250);
        }
        assert_eq!(output.trace("v").map(|trace| trace[249]), Some(neuron.get("v")?));
        assert_eq!(neuron.pending_input(), 0.);

        Ok(())
    }

    #[test]
    fn test_unknown_variable_aborts_before_stepping() {
        let mut neuron = IzhikevichNeuron::default_impl();
        let before = neuron.clone();

        let result = run(&mut neuron, 0.1, 10, &CurrentInput::Constant(10.), &["v", "x"]);

        assert!(matches!(
            result,
            Err(SpikingDynamicsError::FieldRelatedError(FieldError::UnknownField { .. }))
        ));
        assert_eq!(neuron, before);
    }

    #[test]
    fn test_invalid_step_size() {
        let mut neuron = IzhikevichNeuron::default_impl();

        let result = run(&mut neuron, -0.1, 10, &CurrentInput::Constant(10.), &["v"]);

        assert_eq!(
            result,
            Err(SpikingDynamicsError::IntegrationRelatedError(IntegrationError::InvalidStepSize(-0.1)))
        );
    }

    #[test]
    fn test_short_input_array() {
        let mut neuron = IzhikevichNeuron::default_impl();
        let currents = vec![10.; 5];

        let result = run(&mut neuron, 0.1, 6, &CurrentInput::Array(&currents), &["v"]);

        assert_eq!(
            result,
            Err(SpikingDynamicsError::InputRelatedError(InputError::InputLength { step: 5, length: 5 }))
        );
    }

    #[test]
    fn test_spike_times_from_events() {
        let output = SimulationOutput { traces: HashMap::new(), spike_events: vec![3, 10] };

        assert_eq!(output.spike_times(0.5), vec![1.5, 5.]);
    }

    #[test]
    fn test_firing_rate_curve_leaves_neuron_untouched() -> Result<(), SpikingDynamicsError> {
        let neuron = IzhikevichNeuron::default_impl();
        let before = neuron.clone();

        let curve = firing_rate_curve(&neuron, &[0., 10.], 0.1, 100., &SpikeCounting::ModelEvents)?;

        assert_eq!(neuron, before);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0].current, 0.);
        assert_eq!(curve[0].spike_count, 0);
        assert_eq!(curve[1].spike_count, 3);
        assert!(curve[1].rate.value().is_some_and(|rate| (rate - 30.).abs() < 1e-9));

        Ok(())
    }
}
