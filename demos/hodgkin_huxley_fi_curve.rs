use std::{
    fs::File,
    io::{BufWriter, Write},
};
extern crate spiking_neuron_dynamics;
use spiking_neuron_dynamics::{
    neuron::hodgkin_huxley::{HodgkinHuxleyNeuron, HodgkinHuxleyParameters, HodgkinHuxleyState},
    simulation::{firing_rate_curve, SpikeCounting},
    spike_analysis::{SpikeDetection, Statistic},
};


// Sweeps injected current into a Hodgkin Huxley neuron starting from a
// hyperpolarized state and writes the firing rate at each current to a .csv
// in the working directory
fn main() {
    let neuron = HodgkinHuxleyNeuron::new(
        HodgkinHuxleyParameters::default(),
        HodgkinHuxleyState { v: -80., m: 0.1, h: 0.01, n: 0.7 },
    );

    let currents: Vec<f64> = (0..=50).map(|i| i as f64).collect();
    let (dt, duration) = (0.01, 500.);

    let curve = firing_rate_curve(
        &neuron,
        &currents,
        dt,
        duration,
        &SpikeCounting::Detection(SpikeDetection::threshold_crossing()),
    ).expect("Could not calculate firing rates");

    let mut file = BufWriter::new(File::create("hodgkin_huxley_fi_curve.csv")
        .expect("Could not create file"));

    writeln!(file, "current,rate").expect("Could not write to file");
    for point in curve {
        let rate = match point.rate {
            Statistic::Defined(rate) => rate,
            Statistic::InsufficientData => f64::NAN,
        };

        writeln!(file, "{},{}", point.current, rate).expect("Could not write to file");
    }
}
