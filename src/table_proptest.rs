#![cfg(test)]

// Property tests for ChainHashMap kept inside the crate so they can check
// bucket placement against the internal normalization helper.

use crate::strategy::{bucket_index, ByteSum, HashStrategy};
use crate::table::{ChainHashMap, GetError};
use proptest::prelude::*;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, the pool shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i64),
    Get(usize),
    GetRaw(String),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i64>()).prop_map(|(i, v)| OpI::Put(i, v)),
            3 => idx.clone().prop_map(OpI::Get),
            1 => "[a-z]{0,5}".prop_map(OpI::GetRaw),
            1 => Just(OpI::Clear),
            2 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// The model is the raw insertion log. Because chains append at the tail and
// duplicates are allowed, the table's observable behavior is fully
// determined by it:
// - get(k) returns the value of the first log entry with key k (entries of
//   other keys in the same bucket never match the scan), else KeyNotFound.
// - len() equals the log length.
// - iteration equals the log stably partitioned by bucket index.
fn model_get(log: &[(String, i64)], key: &str) -> Result<i64, GetError> {
    log.iter()
        .find(|(k, _)| k == key)
        .map(|&(_, v)| Ok(v))
        .unwrap_or(Err(GetError::KeyNotFound))
}

fn model_iteration(
    log: &[(String, i64)],
    capacity: usize,
    strategy: &dyn HashStrategy,
) -> Vec<(String, i64)> {
    let mut out = Vec::with_capacity(log.len());
    for bucket in 0..capacity {
        for (k, v) in log {
            if bucket_index(strategy.hash_key(k), capacity) == bucket {
                out.push((k.clone(), *v));
            }
        }
    }
    out
}

fn run_scenario(
    capacity: usize,
    strategy: impl HashStrategy + Clone + 'static,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let probe = strategy.clone();
    let mut sut = ChainHashMap::with_strategy(capacity, strategy).unwrap();
    let mut log: Vec<(String, i64)> = Vec::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                sut.put(&pool[i], v).expect("strategy attached");
                log.push((pool[i].clone(), v));
            }
            OpI::Get(i) => {
                prop_assert_eq!(sut.get(&pool[i]), model_get(&log, &pool[i]));
            }
            OpI::GetRaw(s) => {
                prop_assert_eq!(sut.get(&s), model_get(&log, &s));
            }
            OpI::Clear => {
                sut.clear();
                log.clear();
                prop_assert!(sut.first().is_done());
            }
            OpI::Iterate => {
                let seen: Vec<(String, i64)> =
                    sut.iter().map(|(k, v)| (k.to_owned(), v)).collect();
                prop_assert_eq!(seen, model_iteration(&log, capacity, &probe));
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), log.len());
        prop_assert_eq!(sut.is_empty(), log.is_empty());
        prop_assert_eq!(sut.capacity(), capacity);
    }
    Ok(())
}

// Property: state-machine equivalence against the insertion-log model with
// a spreading strategy over a small bucket array (chains stay short but
// collisions still occur for a pool of short keys).
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(8, ByteSum, pool, ops)?;
    }
}

// Property: the same invariants under worst-case collision behavior. The
// constant strategy returns a negative hash, so this variant also covers
// sign normalization on every operation.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(8, |_: &str| -7, pool, ops)?;
    }
}
