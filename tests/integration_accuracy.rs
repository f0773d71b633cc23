#[cfg(test)]
mod tests {
    extern crate simnode;
    use simnode::error::{ParameterError, SimulationError};
    use simnode::integrator::{euler, runge_kutta4, IntegrationMethod};
    use simnode::neuron::hodgkin_huxley::HodgkinHuxleyNeuron;
    use simnode::neuron::integrate_and_fire::LeakyIntegrateAndFireNeuron;
    use simnode::neuron::iterate_and_spike::{
        CurrentVoltage, Integration, IterateAndSpike, SpikeRecord, Timestep,
    };
    use simnode::neuron::run_static_input;


    fn decay(dt: f64, steps: usize, method: IntegrationMethod) -> f64 {
        let mut state = [1.];
        let mut t = 0.;
        for _ in 0..steps {
            state = method.step(&state, t, dt, |_, y| [-y[0]]);
            t += dt;
        }

        state[0]
    }

    #[test]
    fn test_runge_kutta_beats_euler_on_decay() {
        let expected = (-1f64).exp();

        let euler_error = (decay(0.1, 10, IntegrationMethod::Euler) - expected).abs();
        let rk4_error = (decay(0.1, 10, IntegrationMethod::RungeKutta4) - expected).abs();

        assert!(rk4_error < 1e-6, "rk4 error: {}", rk4_error);
        assert!(euler_error > 1e-3, "euler error: {}", euler_error);
        assert!(rk4_error < euler_error);
    }

    #[test]
    fn test_free_functions_match_method() {
        let right_side = |t: f64, y: &[f64; 2]| [y[1], -y[0] + t];
        let state = [1., 0.5];

        assert_eq!(
            euler(&state, right_side, 0.3, 0.01),
            IntegrationMethod::Euler.step(&state, 0.3, 0.01, right_side),
        );
        assert_eq!(
            runge_kutta4(&state, right_side, 0.3, 0.01),
            IntegrationMethod::RungeKutta4.step(&state, 0.3, 0.01, right_side),
        );
    }

    #[test]
    fn test_euler_step_is_exact_for_constant_slope() {
        let next = euler(&[2., -1.], |_, _| [3., 4.], 0., 0.5);

        assert_eq!(next, [3.5, 1.]);
    }

    #[test]
    fn test_leaky_integrate_and_fire_matches_closed_form() {
        // 10 pA against a 15 mV threshold never spikes, V(t) = 10 * (1 - exp(-t / 30))
        let expected = 10. * (1. - (-10f64 / 30.).exp());

        let mut rk4_neuron = LeakyIntegrateAndFireNeuron::default();
        let rk4_voltages = run_static_input(&mut rk4_neuron, 10., 1000);

        let mut euler_neuron = LeakyIntegrateAndFireNeuron::default();
        euler_neuron.set_integration_method(IntegrationMethod::Euler);
        let euler_voltages = run_static_input(&mut euler_neuron, 10., 1000);

        assert!(rk4_neuron.get_spike_times().is_empty());
        assert!((rk4_voltages[999] - expected).abs() < 1e-8);
        assert!((euler_voltages[999] - expected).abs() < 1e-2);
        assert!(
            (euler_voltages[999] - expected).abs() > (rk4_voltages[999] - expected).abs()
        );
    }

    fn hodgkin_huxley_voltage(method: IntegrationMethod, dt: f64, duration: f64) -> f64 {
        let mut neuron = HodgkinHuxleyNeuron::default();
        neuron.set_integration_method(method);
        neuron.set_dt(dt).unwrap();

        let steps = (duration / dt).round() as usize;
        let voltages = run_static_input(&mut neuron, 10., steps);

        voltages[steps - 1]
    }

    #[test]
    fn test_runge_kutta_beats_euler_on_hodgkin_huxley() {
        // a fine RK4 run stands in for the exact solution 3 ms into a step current,
        // during the upstroke of the first spike
        let reference = hodgkin_huxley_voltage(IntegrationMethod::RungeKutta4, 0.0005, 3.);

        let euler_error = (
            hodgkin_huxley_voltage(IntegrationMethod::Euler, 0.01, 3.) - reference
        ).abs();
        let rk4_error = (
            hodgkin_huxley_voltage(IntegrationMethod::RungeKutta4, 0.01, 3.) - reference
        ).abs();

        assert!(rk4_error < 1e-4, "rk4 error: {}", rk4_error);
        assert!(euler_error > 1e-2, "euler error: {}", euler_error);
        assert!(rk4_error < euler_error);
    }

    #[test]
    fn test_integration_method_names() {
        assert_eq!("euler".parse::<IntegrationMethod>(), Ok(IntegrationMethod::Euler));
        assert_eq!("rk4".parse::<IntegrationMethod>(), Ok(IntegrationMethod::RungeKutta4));
        assert_eq!(IntegrationMethod::RungeKutta4.to_string(), "rk4");
        assert_eq!(IntegrationMethod::default(), IntegrationMethod::RungeKutta4);
        assert_eq!(
            "RK4".parse::<IntegrationMethod>(),
            Err(ParameterError::InvalidIntegrationMethod(String::from("RK4"))),
        );
    }

    #[test]
    fn test_rejected_method_name_keeps_previous() {
        let mut neuron = LeakyIntegrateAndFireNeuron::default();
        neuron.set_integration_method_by_name("euler").unwrap();

        let result = neuron.set_integration_method_by_name("midpoint");

        assert_eq!(
            result,
            Err(SimulationError::InvalidParameter(
                ParameterError::InvalidIntegrationMethod(String::from("midpoint"))
            )),
        );
        assert_eq!(neuron.get_integration_method(), IntegrationMethod::Euler);
    }

    #[test]
    fn test_method_choice_changes_trajectory() {
        let mut rk4_neuron = LeakyIntegrateAndFireNeuron::default();
        let mut euler_neuron = rk4_neuron.clone();
        euler_neuron.set_integration_method(IntegrationMethod::Euler);

        rk4_neuron.iterate_and_spike(10.);
        euler_neuron.iterate_and_spike(10.);

        assert_ne!(rk4_neuron.get_current_voltage(), euler_neuron.get_current_voltage());
    }
}
