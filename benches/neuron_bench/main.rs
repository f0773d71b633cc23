#![feature(test)]
extern crate test;


mod tests {
    use test::Bencher;
    extern crate simnode;
    use simnode::integrator::IntegrationMethod;
    use simnode::neuron::{
        hodgkin_huxley::HodgkinHuxleyNeuron,
        integrate_and_fire::LeakyIntegrateAndFireNeuron,
        iterate_and_spike::{Integration, IterateAndSpike, SynapseBase},
        synapse::SimpleSynapse,
        Node,
    };

    #[bench]
    fn bench_leaky_integrate_and_fire(b: &mut Bencher) {
        let mut neuron = LeakyIntegrateAndFireNeuron::default();

        b.iter(|| {
            neuron.iterate_and_spike(30.)
        })
    }

    #[bench]
    fn bench_hodgkin_huxley(b: &mut Bencher) {
        let mut neuron = HodgkinHuxleyNeuron::default();

        b.iter(|| {
            neuron.iterate_and_spike(30.)
        })
    }

    #[bench]
    fn bench_hodgkin_huxley_euler(b: &mut Bencher) {
        let mut neuron = HodgkinHuxleyNeuron::default();
        neuron.set_integration_method(IntegrationMethod::Euler);

        b.iter(|| {
            neuron.iterate_and_spike(30.)
        })
    }

    #[bench]
    fn bench_node_with_mixed_synapses(b: &mut Bencher) {
        let synapses = vec![
            SimpleSynapse::new([3., 0.], SynapseBase::Current { scale: 1. }).unwrap(),
            SimpleSynapse::new([5., 5.], SynapseBase::Current { scale: -1. }).unwrap(),
            SimpleSynapse::new([2., 8.], SynapseBase::Conductance { reversal_potential: 0. }).unwrap(),
        ];
        let mut node = Node::new(HodgkinHuxleyNeuron::default(), synapses).unwrap();
        let weights = [1., 0.5, 0.2];

        b.iter(|| {
            node.step(&weights).unwrap()
        })
    }
}
