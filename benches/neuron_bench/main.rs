#![feature(test)]
extern crate test;


mod tests {
    use test::Bencher;
    extern crate spiking_neuron_dynamics;
    use spiking_neuron_dynamics::{
        neuron::{
            SpikingNeuron,
            hodgkin_huxley::HodgkinHuxleyNeuron,
            hindmarsh_rose::HindmarshRoseNeuron,
            izhikevich::IzhikevichNeuron,
            integrator::ForwardEuler,
            Neuron,
        },
        spike_analysis::{detect_spikes, SpikeDetection},
    };

    #[bench]
    fn bench_izhikevich(b: &mut Bencher) {
        let mut neuron = IzhikevichNeuron::default_impl();

        b.iter(|| {
            neuron.add_synaptic_input(10.);
            neuron.step(0.1)
        })
    }

    #[bench]
    fn bench_hindmarsh_rose(b: &mut Bencher) {
        let mut neuron = HindmarshRoseNeuron::default_impl();

        b.iter(|| {
            neuron.add_synaptic_input(3.2);
            neuron.step(0.01)
        })
    }

    #[bench]
    fn bench_hodgkin_huxley(b: &mut Bencher) {
        let mut neuron = HodgkinHuxleyNeuron::default_impl();

        b.iter(|| {
            neuron.add_synaptic_input(10.);
            neuron.step(0.01)
        })
    }

    #[bench]
    fn bench_hodgkin_huxley_euler(b: &mut Bencher) {
        let mut neuron: HodgkinHuxleyNeuron<ForwardEuler> = Neuron::with_integrator(
            Default::default(), Default::default(), ForwardEuler,
        );

        b.iter(|| {
            neuron.add_synaptic_input(10.);
            neuron.step(0.01)
        })
    }

    #[bench]
    fn bench_local_maximum_detection(b: &mut Bencher) {
        let trace: Vec<f64> = (0..100_000)
            .map(|i| (i as f64 * 0.01).sin())
            .collect();

        b.iter(|| {
            detect_spikes(&trace, 0.01, &SpikeDetection::local_maximum())
        })
    }
}
