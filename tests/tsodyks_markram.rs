#[cfg(test)]
mod tests {
    extern crate simnode;
    use rand::{rngs::StdRng, SeedableRng};
    use simnode::neuron::plasticity::{
        ExcitatoryDefault, InhibitoryDefault, Plasticity, TsodyksMarkram,
    };


    fn expected_update(synapse: &TsodyksMarkram, h: f64) -> (f64, f64) {
        let (big_u, u, r) = (synapse.get_big_u(), synapse.get_u(), synapse.get_r());

        (
            big_u + u * (1. - big_u) * (-h / synapse.f).exp(),
            1. + (r - u * r - 1.) * (-h / synapse.d).exp(),
        )
    }

    #[test]
    fn test_presets() {
        let excitatory = TsodyksMarkram::excitatory_default();
        assert_eq!(
            (excitatory.get_big_u(), excitatory.d, excitatory.f), (0.5, 1100., 50.)
        );
        assert_eq!((excitatory.get_u(), excitatory.get_r()), (0.5, 1.));
        assert_eq!(excitatory, TsodyksMarkram::default());

        let inhibitory = TsodyksMarkram::inhibitory_default();
        assert_eq!(
            (inhibitory.get_big_u(), inhibitory.d, inhibitory.f), (0.25, 700., 20.)
        );
        assert_eq!(inhibitory.get_u(), 0.25);
    }

    #[test]
    fn test_presynaptic_update() {
        let mut synapse = TsodyksMarkram::default();

        for time in [0., 10., 35., 35.5, 200.] {
            let h = time - synapse.last_presynaptic_spike;
            let (u, r) = expected_update(&synapse, h);

            let weight = synapse.presynaptic_spike(time);

            assert!((synapse.get_u() - u).abs() < 1e-12);
            assert!((synapse.get_r() - r).abs() < 1e-12);
            assert!((weight - u * r).abs() < 1e-12);
            assert_eq!(synapse.last_presynaptic_spike, time);
        }
    }

    #[test]
    fn test_simultaneous_spikes() {
        let mut synapse = TsodyksMarkram::default();
        synapse.presynaptic_spike(5.);
        let (u, r) = expected_update(&synapse, 0.);

        let weight = synapse.presynaptic_spike(5.);

        // with no elapsed time, u = U + u * (1 - U) and r = r - u * r
        assert!((synapse.get_u() - u).abs() < 1e-12);
        assert!((synapse.get_r() - r).abs() < 1e-12);
        assert!((weight - u * r).abs() < 1e-12);
        assert!(synapse.get_u() <= 1.);
    }

    #[test]
    fn test_zero_time_constants_recover_instantly() {
        let mut synapse = TsodyksMarkram::default();
        synapse.d = 0.;
        synapse.f = 0.;

        for time in [5., 5., 6.] {
            let weight = synapse.presynaptic_spike(time);

            assert_eq!(synapse.get_u(), synapse.get_big_u());
            assert_eq!(synapse.get_r(), 1.);
            assert_eq!(weight, 0.5);
        }
    }

    #[test]
    fn test_depression_at_high_rate() {
        let mut synapse = TsodyksMarkram::excitatory_default();

        let weights: Vec<f64> = (0..10)
            .map(|i| synapse.presynaptic_spike(i as f64 * 10.))
            .collect();

        assert!(weights.windows(2).all(|w| w[1] < w[0]), "{:?}", weights);
        assert!((weights[0] - 0.39927742).abs() < 1e-6);
    }

    #[test]
    fn test_postsynaptic_spike_is_no_op() {
        let mut synapse = TsodyksMarkram::default();
        synapse.presynaptic_spike(0.);
        let before = synapse;

        let weight = synapse.postsynaptic_spike(3.);

        assert_eq!(weight, before.get_weight());
        assert_eq!(synapse, before);
    }

    #[test]
    fn test_state_is_clamped() {
        let mut synapse = TsodyksMarkram::default();

        synapse.set_u(1.5);
        synapse.set_r(-0.2);
        synapse.set_big_u(2.);

        assert_eq!(synapse.get_u(), 1.);
        assert_eq!(synapse.get_r(), 0.);
        assert_eq!(synapse.get_big_u(), 1.);
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let mut first = TsodyksMarkram::default();
        let mut second = TsodyksMarkram::default();

        first.shuffle_constants(&mut StdRng::seed_from_u64(42));
        second.shuffle_constants(&mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert_ne!(first.d, 1100.);
    }

    #[test]
    fn test_shuffle_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let mut synapse = TsodyksMarkram::default();
            synapse.shuffle_constants(&mut rng);

            assert!((0. ..=1.).contains(&synapse.get_big_u()));
            assert!((0. ..=11000.).contains(&synapse.d));
            assert!((0. ..=500.).contains(&synapse.f));
        }
    }

    #[test]
    fn test_reset() {
        let mut synapse = TsodyksMarkram::inhibitory_default();
        synapse.presynaptic_spike(0.);
        synapse.presynaptic_spike(1.);

        synapse.reset();

        assert_eq!(synapse.get_u(), synapse.get_big_u());
        assert_eq!(synapse.get_r(), 1.);
        assert_eq!(synapse.last_presynaptic_spike, -1000.);
    }
}
