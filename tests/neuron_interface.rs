#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use spiking_neuron_dynamics::{
        error::{FieldError, FieldKind, InputError, IntegrationError, SpikingDynamicsError},
        neuron::{
            AnyNeuron, ModelFamily, SpikingNeuron,
            hindmarsh_rose::HindmarshRoseNeuron,
            hodgkin_huxley::HodgkinHuxleyNeuron,
        },
        simulation::{run, CurrentInput},
    };


    const FAMILIES: [ModelFamily; 3] = [
        ModelFamily::HodgkinHuxley,
        ModelFamily::HindmarshRose,
        ModelFamily::Izhikevich,
    ];

    #[test]
    pub fn test_set_then_get_round_trip() -> Result<(), SpikingDynamicsError> {
        for family in FAMILIES {
            let mut neuron = AnyNeuron::default_for(family);

            for (n, name) in family.state_names().iter().enumerate() {
                let value = -1.234_567_891_011 * (n + 1) as f64;
                neuron.set(name, value)?;
                assert_eq!(neuron.get(name)?, value);
            }

            for name in family.parameter_names() {
                neuron.set_param(name, 0.1 + 0.2)?;
                assert_eq!(neuron.get_param(name)?, 0.1 + 0.2);
            }
        }

        Ok(())
    }

    #[test]
    pub fn test_schema_names() {
        for family in FAMILIES {
            let neuron = AnyNeuron::default_for(family);

            assert_eq!(neuron.family(), family);
            assert_eq!(neuron.variable_names(), family.state_names());
            assert_eq!(neuron.parameter_names(), family.parameter_names());

            let mut names: Vec<String> = neuron.state_values().into_keys().collect();
            names.sort();
            let mut expected: Vec<String> = family.state_names().iter().map(|i| i.to_string()).collect();
            expected.sort();
            assert_eq!(names, expected);
        }

        assert_eq!(
            ModelFamily::HodgkinHuxley.parameter_names(),
            &["cm", "vna", "vk", "vl", "gna", "gk", "gl"],
        );
        assert_eq!(ModelFamily::Izhikevich.parameter_names(), &["a", "b", "c", "d"]);
    }

    #[test]
    pub fn test_unknown_field_error_names_field_and_family() {
        let neuron = HindmarshRoseNeuron::default_impl();

        let err: SpikingDynamicsError = neuron.get("v").unwrap_err().into();

        assert_eq!(
            err,
            SpikingDynamicsError::FieldRelatedError(
                FieldError::UnknownField {
                    family: ModelFamily::HindmarshRose,
                    kind: FieldKind::StateVariable,
                    name: String::from("v"),
                }
            )
        );
        assert_eq!(err.to_string(), "Unknown state variable `v` for Hindmarsh-Rose model");
    }

    #[test]
    pub fn test_constructing_with_unknown_state_fails() {
        let state = HashMap::from([(String::from("u"), 0.)]);

        let result = AnyNeuron::new(ModelFamily::HodgkinHuxley, &HashMap::new(), &state);

        assert_eq!(
            result.unwrap_err(),
            FieldError::UnknownField {
                family: ModelFamily::HodgkinHuxley,
                kind: FieldKind::StateVariable,
                name: String::from("u"),
            }
        );
    }

    #[test]
    pub fn test_pending_input_is_consumed_once() -> Result<(), SpikingDynamicsError> {
        let mut pushed = HodgkinHuxleyNeuron::default_impl();
        let mut summed = HodgkinHuxleyNeuron::default_impl();

        pushed.add_synaptic_input(3.);
        pushed.add_synaptic_input(4.5);
        summed.add_synaptic_input(7.5);
        assert_eq!(pushed.pending_input(), 7.5);

        pushed.step(0.01)?;
        summed.step(0.01)?;

        assert_eq!(pushed.state, summed.state);
        assert_eq!(pushed.pending_input(), 0.);

        // stepping without a push injects no current
        let mut unstimulated = HodgkinHuxleyNeuron::default_impl();
        let mut zero = HodgkinHuxleyNeuron::default_impl();
        unstimulated.step(0.01)?;
        zero.add_synaptic_input(0.);
        zero.step(0.01)?;

        assert_eq!(unstimulated.state, zero.state);

        Ok(())
    }

    #[test]
    pub fn test_invalid_step_size_leaves_neuron_untouched() {
        let mut neuron = AnyNeuron::default_for(ModelFamily::Izhikevich);
        neuron.add_synaptic_input(10.);
        let before = neuron.clone();

        for dt in [0., -0.1, f64::NAN] {
            let result = neuron.step(dt);
            assert!(matches!(result, Err(IntegrationError::InvalidStepSize(_))));
        }

        assert_eq!(neuron, before);
    }

    #[test]
    pub fn test_run_errors() {
        let mut neuron = AnyNeuron::default_for(ModelFamily::HindmarshRose);
        let currents = vec![3.2; 99];

        assert_eq!(
            run(&mut neuron, 0.01, 100, &CurrentInput::Array(&currents), &["x"]),
            Err(SpikingDynamicsError::InputRelatedError(InputError::InputLength { step: 99, length: 99 })),
        );
        assert_eq!(
            run(&mut neuron, 0., 100, &CurrentInput::Constant(3.2), &["x"]),
            Err(SpikingDynamicsError::IntegrationRelatedError(IntegrationError::InvalidStepSize(0.))),
        );
        assert!(run(&mut neuron, 0.01, 100, &CurrentInput::Constant(3.2), &["v"]).is_err());
    }

    #[test]
    pub fn test_array_input_matches_constant_input() -> Result<(), SpikingDynamicsError> {
        let currents = vec![3.2; 500];

        let mut constant = AnyNeuron::default_for(ModelFamily::HindmarshRose);
        let mut array = constant.clone();

        let constant_output = run(&mut constant, 0.01, 500, &CurrentInput::from(3.2), &["x", "z"])?;
        let array_output = run(&mut array, 0.01, 500, &CurrentInput::from(currents.as_slice()), &["x", "z"])?;

        assert_eq!(constant_output, array_output);
        assert_eq!(constant_output.trace("z").map(|z| z.len()), Some(500));

        Ok(())
    }

    #[test]
    pub fn test_zero_steps() -> Result<(), SpikingDynamicsError> {
        let mut neuron = AnyNeuron::default_for(ModelFamily::Izhikevich);
        let before = neuron.clone();

        let output = run(&mut neuron, 0.1, 0, &CurrentInput::Array(&[]), &["v"])?;

        assert_eq!(output.trace("v"), Some(&[][..]));
        assert!(output.spike_events.is_empty());
        assert_eq!(neuron, before);

        Ok(())
    }
}
