//! Property-based tests for the crossover operators.

use proptest::prelude::*;
use std::collections::HashSet;
use u_crossover::crossover::{
    cross_pairs, CrossPMX, CrossPoint, CrossProportionateF, CrossUniformF, Crossover,
    CrossoverConfig, MultiParentCrossover,
};
use u_crossover::{create_rng, random_ints, CrossoverError, Individual};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Two real-valued parents of the same length.
fn real_parents() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec(-1e6f64..1e6, n),
            prop::collection::vec(-1e6f64..1e6, n),
        )
    })
}

/// Two permutations of `0..n` with `n >= 3`.
fn permutation_parents() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (3usize..40).prop_flat_map(|n| {
        let base: Vec<usize> = (0..n).collect();
        (Just(base.clone()).prop_shuffle(), Just(base).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn point_crossover_is_complementary(
        (g1, g2) in real_parents(),
        k in 0usize..8,
        seed in any::<u64>(),
    ) {
        init_logger();
        let n = g1.len();
        let p1 = Individual::new(g1);
        let p2 = Individual::new(g2);
        let result = CrossPoint::new(k).apply(&p1, &p2, &mut create_rng(seed));

        if k > n {
            prop_assert!(
                matches!(result, Err(CrossoverError::NotEnoughPositions { .. })),
                "expected NotEnoughPositions"
            );
        } else {
            let (c1, c2) = result.unwrap();
            prop_assert_eq!(c1.len(), n);
            prop_assert_eq!(c2.len(), n);
            for i in 0..n {
                let straight = c1.genome[i] == p1.genome[i] && c2.genome[i] == p2.genome[i];
                let crossed = c1.genome[i] == p2.genome[i] && c2.genome[i] == p1.genome[i];
                prop_assert!(straight || crossed);
            }
        }
    }

    #[test]
    fn uniform_blend_stays_in_hyper_rectangle(
        (g1, g2) in real_parents(),
        seed in any::<u64>(),
    ) {
        let p1 = Individual::new(g1);
        let p2 = Individual::new(g2);
        let (c1, c2) = CrossUniformF.apply(&p1, &p2, &mut create_rng(seed)).unwrap();
        prop_assert_eq!(c1.len(), p1.len());
        prop_assert_eq!(c2.len(), p1.len());
        for i in 0..p1.len() {
            let lo = p1.genome[i].min(p2.genome[i]);
            let hi = p1.genome[i].max(p2.genome[i]);
            prop_assert!(c1.genome[i] >= lo && c1.genome[i] <= hi);
            prop_assert!(c2.genome[i] >= lo && c2.genome[i] <= hi);
        }
    }

    #[test]
    fn proportionate_blend_stays_in_hull(
        (g1, g2) in real_parents(),
        seed in any::<u64>(),
    ) {
        let g3: Vec<f64> = g1.iter().zip(&g2).map(|(a, b)| a - b).collect();
        let parents = [Individual::new(g1), Individual::new(g2), Individual::new(g3)];
        let refs: Vec<&Individual<f64>> = parents.iter().collect();
        let child = CrossProportionateF::new(3)
            .apply_many(&refs, &mut create_rng(seed))
            .unwrap();
        prop_assert_eq!(child.len(), parents[0].len());
        for i in 0..child.len() {
            let genes = parents.iter().map(|p| p.genome[i]);
            let lo = genes.clone().fold(f64::INFINITY, f64::min);
            let hi = genes.fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(child.genome[i] >= lo && child.genome[i] <= hi);
        }
    }

    #[test]
    fn pmx_children_are_permutations(
        (g1, g2) in permutation_parents(),
        seed in any::<u64>(),
    ) {
        let n = g1.len();
        let p1 = Individual::new(g1);
        let p2 = Individual::new(g2);
        let (c1, c2) = CrossPMX.apply(&p1, &p2, &mut create_rng(seed)).unwrap();
        for child in [&c1, &c2] {
            prop_assert_eq!(child.len(), n);
            let set: HashSet<usize> = child.genome.iter().copied().collect();
            prop_assert_eq!(set.len(), n);
            prop_assert!(child.genome.iter().all(|&v| v < n));
        }
    }

    #[test]
    fn random_ints_are_distinct(
        low in 0usize..50,
        span in 0usize..50,
        k in 0usize..60,
        seed in any::<u64>(),
    ) {
        let high = low + span;
        let result = random_ints(k, low, high, &mut create_rng(seed));
        if k > span {
            prop_assert!(result.is_err());
        } else {
            let ints = result.unwrap();
            prop_assert_eq!(ints.len(), k);
            let set: HashSet<usize> = ints.iter().copied().collect();
            prop_assert_eq!(set.len(), k);
            prop_assert!(ints.iter().all(|&v| v >= low && v < high));
        }
    }

    #[test]
    fn config_dispatch_is_deterministic(
        (g1, g2) in permutation_parents(),
        seed in any::<u64>(),
    ) {
        let p1 = Individual::new(g1.iter().map(|&v| v as f64).collect::<Vec<f64>>());
        let p2 = Individual::new(g2.iter().map(|&v| v as f64).collect::<Vec<f64>>());
        for config in [
            CrossoverConfig::point(2),
            CrossoverConfig::UniformF,
            CrossoverConfig::proportionate(2),
            CrossoverConfig::Pmx,
        ] {
            let a = config.recombine(&[&p1, &p2], &mut create_rng(seed)).unwrap();
            let b = config.recombine(&[&p1, &p2], &mut create_rng(seed)).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

#[test]
fn batch_crossover_matches_single_calls() {
    init_logger();
    let parents: Vec<Individual<f64>> = (0..8)
        .map(|k| Individual::new(vec![k as f64; 10]))
        .collect();
    let pairs: Vec<_> = parents.chunks(2).map(|c| (&c[0], &c[1])).collect();
    let batch = cross_pairs(&CrossUniformF, &pairs, 1234).unwrap();
    for (k, (p1, p2)) in pairs.iter().enumerate() {
        let single = CrossUniformF
            .apply(p1, p2, &mut create_rng(1234 + k as u64))
            .unwrap();
        assert_eq!(batch[k], single);
    }
}
