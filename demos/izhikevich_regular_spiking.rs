use std::{
    fs::File,
    io::{BufWriter, Write},
};
extern crate spiking_neuron_dynamics;
use spiking_neuron_dynamics::{
    neuron::izhikevich::{IzhikevichNeuron, IzhikevichParameters, IzhikevichState},
    simulation::{run, CurrentInput},
    spike_analysis::{IsiSummary, Statistic},
};


// Runs a regular spiking Izhikevich neuron under a constant current and writes
// the voltage and recovery variable over time to a .csv in the working directory,
// the reset removes spike peaks from the trace so spikes are taken from the
// model's own reset events
fn main() {
    let mut neuron = IzhikevichNeuron::new(
        IzhikevichParameters { a: 0.02, b: 0.2, c: -65., d: 8. },
        IzhikevichState { v: -65., u: -65. * 0.2 },
    );

    let dt = 0.1;
    let iterations = 10_000;
    let input_current = 10.;

    let output = run(&mut neuron, dt, iterations, &CurrentInput::Constant(input_current), &["v", "u"])
        .expect("Could not run simulation");

    let summary = IsiSummary::from_spike_times(output.spike_times(dt));
    println!("spikes: {}", summary.spike_count());
    if let Statistic::Defined(mean_isi) = summary.mean_isi {
        println!("mean isi: {:.2} ms", mean_isi);
    }

    let v = output.trace("v").expect("Could not find voltage trace");
    let u = output.trace("u").expect("Could not find recovery trace");

    let mut file = BufWriter::new(File::create("izhikevich_regular_spiking.csv")
        .expect("Could not create file"));

    writeln!(file, "t,v,u").expect("Could not write to file");
    for i in 0..iterations {
        writeln!(file, "{},{},{}", (i + 1) as f64 * dt, v[i], u[i]).expect("Could not write to file");
    }
}
