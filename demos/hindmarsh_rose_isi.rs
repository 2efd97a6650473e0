use std::thread;
extern crate spiking_neuron_dynamics;
use spiking_neuron_dynamics::{
    neuron::hindmarsh_rose::HindmarshRoseNeuron,
    simulation::{run, CurrentInput},
    spike_analysis::{summarize_trace, IsiSummary, SpikeDetection, Statistic},
};


fn simulate(input_current: f64, dt: f64, iterations: usize) -> IsiSummary {
    let mut neuron = HindmarshRoseNeuron::default_impl();

    let output = run(&mut neuron, dt, iterations, &CurrentInput::Constant(input_current), &["x"])
        .expect("Could not run simulation");

    summarize_trace(
        output.trace("x").expect("Could not find trace"),
        dt,
        &SpikeDetection::local_maximum(),
    ).expect("Could not detect spikes")
}

fn print_summary(label: &str, summary: &IsiSummary) {
    match &summary.cv {
        Statistic::Defined(cv) => println!("{}: {} spikes, cv: {:.3}", label, summary.spike_count(), cv),
        Statistic::InsufficientData => println!("{}: {} spikes, cv undefined", label, summary.spike_count()),
    }
}

// Compares inter spike interval variability of a Hindmarsh Rose neuron under a
// bursting (I = 2.5) and a chaotic (I = 3.2) drive, each run on its own thread
fn main() {
    let (dt, iterations) = (0.01, 200_000);

    let clean = thread::spawn(move || simulate(2.5, dt, iterations));
    let chaotic = thread::spawn(move || simulate(3.2, dt, iterations));

    print_summary("clean", &clean.join().expect("Clean simulation panicked"));
    print_summary("chaotic", &chaotic.join().expect("Chaotic simulation panicked"));
}
