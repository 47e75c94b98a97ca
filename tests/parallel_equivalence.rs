#![cfg(feature = "parallel")]

use box_assist::{problems::subset_sum::SubsetSumProblem, LayerEngine};
use proptest::prelude::*;

fn sequential_reference(weights: &[u32], target: usize) -> (u64, Vec<u32>) {
    let n = weights.len();
    // count[i], chosen[i] for the current prefix, updated column by column
    let mut count = vec![-1i64; target + 1];
    let mut chosen = vec![Vec::<u32>::new(); target + 1];
    count[0] = 0;
    for j in 0..n {
        let w = weights[j] as usize;
        let prev_count = count.clone();
        let prev_chosen = chosen.clone();
        for i in 1..=target {
            if i >= w && prev_count[i - w] >= 0 && prev_count[i - w] + 1 > prev_count[i] {
                count[i] = prev_count[i - w] + 1;
                let mut v = prev_chosen[i - w].clone();
                v.push(j as u32);
                chosen[i] = v;
            }
        }
    }
    let best = (0..=target).rev().find(|&i| count[i] >= 0).unwrap_or(0);
    (best as u64, chosen[best].clone())
}

proptest! {
    #[test]
    fn parallel_column_fill_matches_sequential(
        weights in prop::collection::vec(0u32..50, 0..16),
        target in 0usize..300,
    ) {
        let problem = SubsetSumProblem::new(&weights, target as i64).unwrap();
        let sel = LayerEngine::new(problem).run().unwrap();
        let (sum, indices) = sequential_reference(&weights, target);
        prop_assert_eq!(sel.sum, sum);
        prop_assert_eq!(sel.indices, indices);
    }
}
