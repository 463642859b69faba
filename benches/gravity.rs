#![cfg_attr(feature = "nightly", feature(test))]

#[cfg(all(feature = "nightly", test))]
extern crate test;

#[cfg(all(feature = "nightly", test))]
mod bench {
    use orbis::{
        gravity::{AccKernel, Compute, Energy, Newton, Strategy},
        ics::{imf::EqualMass, sdp::Gaussian, Model},
        sim::{Params, Simulation},
        sys::ParticleSystem,
    };
    use rand::{rngs::StdRng, SeedableRng};
    use test::Bencher;

    const N: usize = 256;

    fn init_particle_system(npart: usize, seed: u64) -> ParticleSystem {
        let mut rng = StdRng::seed_from_u64(seed);
        Model::new(npart, 20.0, EqualMass::new(1.0), Gaussian).build(&mut rng)
    }

    fn bench_kernel(b: &mut Bencher, strategy: Strategy) {
        let psys = init_particle_system(N, 0);
        let kernel = AccKernel::new(Newton::default(), strategy);
        let mut acc = vec![[0.0; 3]; psys.len()];
        b.iter(|| kernel.compute(psys.as_slice(), &mut acc));
    }

    #[bench]
    fn looped(b: &mut Bencher) {
        bench_kernel(b, Strategy::Looped);
    }

    #[bench]
    fn batched(b: &mut Bencher) {
        bench_kernel(b, Strategy::Batched);
    }

    #[bench]
    fn parallel(b: &mut Bencher) {
        bench_kernel(b, Strategy::Parallel);
    }

    #[bench]
    fn blocked(b: &mut Bencher) {
        bench_kernel(b, Strategy::Blocked);
    }

    #[bench]
    fn energy(b: &mut Bencher) {
        let psys = init_particle_system(N, 0);
        let kernel = Energy::new(Newton::default());
        b.iter(|| kernel.energies(psys.as_slice()));
    }

    #[bench]
    fn leapfrog_100_steps(b: &mut Bencher) {
        let psys = init_particle_system(N, 1);
        let params = Params {
            npart: N,
            tend: 1.0,
            ..Default::default()
        };
        b.iter(|| {
            let kernel = AccKernel::new(params.law(), Strategy::default());
            let mut sim = Simulation::new(params, kernel, psys.clone()).unwrap();
            sim.run(&mut ())
        });
    }
}

// -- end of file --
