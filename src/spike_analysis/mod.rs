//! Spike detection on recorded voltage traces and inter spike interval (ISI)
//! statistics derived from the detected spike times.

use ndarray::Array1;
use crate::error::IntegrationError;
use crate::neuron::integrator::check_step_size;


/// Default minimum time between two accepted local maximum spikes
pub const DEFAULT_REFRACTORY_GAP: f64 = 5.;

/// Policy used to turn a voltage trace into spike times
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpikeDetection {
    /// A spike is recorded where the previous sample is below `threshold` and the
    /// current sample is at or above it, suited to action potentials that always
    /// repolarize below threshold
    ThresholdCrossing {
        /// Crossing level (mV)
        threshold: f64,
    },
    /// A spike is recorded at interior samples above `threshold` that are strictly
    /// greater than both neighbours, unless the previous accepted spike is
    /// `refractory_gap` or less earlier, suited to bursting and chaotic traces
    LocalMaximum {
        /// Minimum peak value
        threshold: f64,
        /// Minimum time between accepted spikes (same units as the step size)
        refractory_gap: f64,
    },
}

impl SpikeDetection {
    /// Upward crossing of `0.`
    pub fn threshold_crossing() -> Self {
        SpikeDetection::ThresholdCrossing { threshold: 0. }
    }

    /// Local maxima above `0.` separated by more than [`DEFAULT_REFRACTORY_GAP`]
    pub fn local_maximum() -> Self {
        SpikeDetection::LocalMaximum { threshold: 0., refractory_gap: DEFAULT_REFRACTORY_GAP }
    }
}

impl Default for SpikeDetection {
    fn default() -> Self {
        SpikeDetection::threshold_crossing()
    }
}

/// Result of a statistic that needs a minimum number of spikes
#[derive(Debug, Clone, PartialEq)]
pub enum Statistic<T> {
    /// Statistic could be calculated
    Defined(T),
    /// Not enough spikes (or intervals) to calculate the statistic
    InsufficientData,
}

impl<T> Statistic<T> {
    /// Whether the statistic was calculated
    pub fn is_defined(&self) -> bool {
        matches!(self, Statistic::Defined(_))
    }

    /// Reference to the value if defined
    pub fn value(&self) -> Option<&T> {
        match self {
            Statistic::Defined(value) => Some(value),
            Statistic::InsufficientData => None,
        }
    }

    /// Converts into an `Option`
    pub fn into_option(self) -> Option<T> {
        match self {
            Statistic::Defined(value) => Some(value),
            Statistic::InsufficientData => None,
        }
    }
}

fn threshold_crossings(trace: &[f64], dt: f64, threshold: f64) -> Vec<f64> {
    trace.windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] < threshold && pair[1] >= threshold)
        .map(|(n, _)| (n + 1) as f64 * dt)
        .collect()
}

fn local_maxima(trace: &[f64], dt: f64, threshold: f64, refractory_gap: f64) -> Vec<f64> {
    let mut spike_times: Vec<f64> = Vec::new();

    for (n, window) in trace.windows(3).enumerate() {
        let (previous, current, next) = (window[0], window[1], window[2]);
        if !(current > threshold && current > previous && current > next) {
            continue;
        }

        let time = (n + 1) as f64 * dt;
        let outside_gap = match spike_times.last() {
            Some(last) => time - last > refractory_gap,
            None => true,
        };

        if outside_gap {
            spike_times.push(time);
        }
    }

    spike_times
}

/// Detects spikes in a trace sampled every `dt`, spike times are the sample index
/// multiplied by `dt` and are strictly increasing
///
/// Only the trace itself is inspected, so a threshold crossing between the state
/// before the first step and the first sample is not detected, nor is a local
/// maximum at either end of the trace. Record the initial state as the first
/// sample if a crossing on the very first step must be counted.
pub fn detect_spikes(
    trace: &[f64],
    dt: f64,
    detection: &SpikeDetection,
) -> Result<Vec<f64>, IntegrationError> {
    check_step_size(dt)?;

    let spike_times = match *detection {
        SpikeDetection::ThresholdCrossing { threshold } => threshold_crossings(trace, dt, threshold),
        SpikeDetection::LocalMaximum { threshold, refractory_gap } => {
            local_maxima(trace, dt, threshold, refractory_gap)
        },
    };

    Ok(spike_times)
}

/// Differences between consecutive spike times, insufficient with fewer than two spikes
pub fn inter_spike_intervals(spike_times: &[f64]) -> Statistic<Vec<f64>> {
    if spike_times.len() < 2 {
        return Statistic::InsufficientData;
    }

    Statistic::Defined(
        spike_times.windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect()
    )
}

/// Mean inter spike interval
pub fn mean_inter_spike_interval(spike_times: &[f64]) -> Statistic<f64> {
    match inter_spike_intervals(spike_times) {
        Statistic::Defined(isis) => match Array1::from(isis).mean() {
            Some(mean) => Statistic::Defined(mean),
            None => Statistic::InsufficientData,
        },
        Statistic::InsufficientData => Statistic::InsufficientData,
    }
}

/// Population standard deviation of the inter spike intervals divided by their mean,
/// insufficient with fewer than two spikes or a zero mean interval
pub fn coefficient_of_variation(spike_times: &[f64]) -> Statistic<f64> {
    let isis = match inter_spike_intervals(spike_times) {
        Statistic::Defined(isis) => Array1::from(isis),
        Statistic::InsufficientData => return Statistic::InsufficientData,
    };

    match isis.mean() {
        Some(mean) if mean != 0. => Statistic::Defined(isis.std(0.) / mean),
        _ => Statistic::InsufficientData,
    }
}

/// Firing rate (Hz) of `spike_count` spikes over `duration` ms, insufficient
/// when the duration is not positive
pub fn firing_rate(spike_count: usize, duration: f64) -> Statistic<f64> {
    if duration > 0. {
        Statistic::Defined(spike_count as f64 / (duration / 1000.))
    } else {
        Statistic::InsufficientData
    }
}

/// Spike times of a trace together with their interval statistics
#[derive(Debug, Clone, PartialEq)]
pub struct IsiSummary {
    /// Detected spike times
    pub spike_times: Vec<f64>,
    /// Inter spike intervals
    pub isis: Statistic<Vec<f64>>,
    /// Mean inter spike interval
    pub mean_isi: Statistic<f64>,
    /// Coefficient of variation of the intervals
    pub cv: Statistic<f64>,
}

impl IsiSummary {
    /// Summarizes already detected spike times
    pub fn from_spike_times(spike_times: Vec<f64>) -> Self {
        IsiSummary {
            isis: inter_spike_intervals(&spike_times),
            mean_isi: mean_inter_spike_interval(&spike_times),
            cv: coefficient_of_variation(&spike_times),
            spike_times,
        }
    }

    /// Number of detected spikes
    pub fn spike_count(&self) -> usize {
        self.spike_times.len()
    }
}

/// Detects spikes in a trace and summarizes their intervals
pub fn summarize_trace(
    trace: &[f64],
    dt: f64,
    detection: &SpikeDetection,
) -> Result<IsiSummary, IntegrationError> {
    let spike_times = detect_spikes(trace, dt, detection)?;

    Ok(IsiSummary::from_spike_times(spike_times))
}
