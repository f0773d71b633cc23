#[cfg(test)]
mod tests {
    extern crate simnode;
    use simnode::error::{ParameterError, SimulationError};
    use simnode::neuron::integrate_and_fire::{LeakyIntegrateAndFireNeuron, RefractoryState};
    use simnode::neuron::iterate_and_spike::{
        CurrentVoltage, IterateAndSpike, SpikeRecord, Stimulus, Timestep,
    };
    use simnode::neuron::{run_static_input, run_static_input_spike_times};


    #[test]
    fn test_default_parameters() {
        let neuron = LeakyIntegrateAndFireNeuron::default();

        assert_eq!(neuron.v_rest, 0.);
        assert_eq!(neuron.v_reset, 14.2);
        assert_eq!(neuron.v_th, 15.);
        assert_eq!(neuron.tau_m, 30.);
        assert_eq!(neuron.tau_ref, 3.);
        assert_eq!(neuron.get_r_m(), 1.);
        assert_eq!(neuron.get_c_m(), 30.);
        assert_eq!(neuron.get_dt(), 0.01);
        assert_eq!(neuron.spike_time, -7.);
        assert_eq!(neuron.get_state(), RefractoryState::Integrating);
    }

    #[test]
    fn test_resistance_and_capacitance_stay_coupled() {
        let mut neuron = LeakyIntegrateAndFireNeuron::default();

        neuron.set_r_m(2.);
        assert_eq!(neuron.get_c_m(), 15.);

        neuron.set_c_m(10.);
        assert_eq!(neuron.get_r_m(), 3.);
        assert!((neuron.get_r_m() * neuron.get_c_m() - neuron.tau_m).abs() < 1e-12);
    }

    #[test]
    fn test_subthreshold_input_never_spikes() {
        let mut neuron = LeakyIntegrateAndFireNeuron::default();

        let voltages = run_static_input(&mut neuron, 10., 10_000);

        assert!(neuron.get_spike_times().is_empty());
        assert!(voltages.iter().all(|v| *v < neuron.v_th));
    }

    #[test]
    fn test_spike_resets_and_is_reported_once() {
        let mut neuron = LeakyIntegrateAndFireNeuron::default();

        let mut spiking_steps = vec![];
        for step in 0..100 {
            if neuron.iterate_and_spike(1000.) {
                spiking_steps.push(step);
                assert_eq!(neuron.get_current_voltage(), neuron.v_reset);
                assert_eq!(neuron.last_spike_time(), Some(neuron.get_time()));
            }
        }

        assert_eq!(spiking_steps.len(), 1);
        assert_eq!(neuron.get_spike_times().len(), 1);
        assert_eq!(neuron.get_state(), RefractoryState::Refractory);
    }

    #[test]
    fn test_refractory_window_boundary() {
        let mut neuron = LeakyIntegrateAndFireNeuron::default();
        neuron.force_spike();
        assert_eq!(neuron.spike_time, 0.);

        // 3 ms at 0.01 ms per step is 300 steps
        for _ in 1..300 {
            assert!(!neuron.iterate_and_spike(1000.));
            assert_eq!(neuron.get_current_voltage(), neuron.v_reset);
        }

        neuron.iterate_and_spike(0.);

        assert_eq!(neuron.get_state(), RefractoryState::Integrating);
        assert!(neuron.get_current_voltage() < neuron.v_reset);
    }

    #[test]
    fn test_interspike_interval() {
        // from 14.2 mV to 15 mV with 20 pA takes 30 * ln(5.8 / 5) ms after 3 ms refractory
        let mut neuron = LeakyIntegrateAndFireNeuron::default();

        let spikes = run_static_input_spike_times(&mut neuron, 20., 20_000);
        let expected_first = 30. * 4f64.ln();
        let expected_interval = 3. + 30. * (5.8f64 / 5.).ln();

        assert!(spikes.len() > 10);
        assert!((spikes[0] - expected_first).abs() < 0.02);
        for (first, second) in spikes.iter().zip(spikes.iter().skip(1)) {
            assert!(((second - first) - expected_interval).abs() < 0.02);
        }
    }

    #[test]
    fn test_stimulus_adds_to_input() {
        let mut with_stimulus = LeakyIntegrateAndFireNeuron::default();
        with_stimulus.set_stimulus(4.);
        let mut with_input = LeakyIntegrateAndFireNeuron::default();

        let stimulus_voltages = run_static_input(&mut with_stimulus, 6., 500);
        let input_voltages = run_static_input(&mut with_input, 10., 500);

        assert_eq!(stimulus_voltages, input_voltages);
    }

    #[test]
    fn test_reset_and_flush() {
        let mut neuron = LeakyIntegrateAndFireNeuron::default();
        run_static_input(&mut neuron, 1000., 100);
        let time = neuron.get_time();

        neuron.reset();
        assert_eq!(neuron.get_current_voltage(), neuron.v_rest);
        assert_eq!(neuron.get_time(), time);
        assert_eq!(neuron.get_spike_times().len(), 1);

        neuron.flush();
        assert_eq!(neuron.get_time(), 0.);
        assert!(neuron.get_spike_times().is_empty());
        assert_eq!(neuron.get_state(), RefractoryState::Integrating);
    }

    #[test]
    fn test_invalid_timestep_is_rejected() {
        let mut neuron = LeakyIntegrateAndFireNeuron::default();

        for dt in [0., -1., f64::INFINITY] {
            assert_eq!(
                neuron.set_dt(dt),
                Err(SimulationError::InvalidParameter(ParameterError::InvalidTimestep(dt))),
            );
        }
        assert_eq!(neuron.get_dt(), 0.01);

        assert!(neuron.set_dt(0.1).is_ok());
        assert_eq!(neuron.get_dt(), 0.1);
    }
}
