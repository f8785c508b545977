//! End-to-end scenarios driving the full generate → time → collect path

use casebench_core::plugins::{self, BubbleSort, MergeSort, SelectionSort};
use casebench_core::{
    BenchmarkRunner, CaseCategory, InputGenerator, InputKind, Workload,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(1234)
}

#[test]
fn merge_sort_sweep_produces_six_ordered_measurements() {
    let mut runner = BenchmarkRunner::new(rng());
    let table = runner.run(&[100, 1000], &MergeSort).unwrap();

    assert_eq!(table.len(), 6);
    assert!(table.validate().is_ok());
    assert!(table.iter().all(|m| m.algorithm == "merge-sort"));

    // size-major, category-minor order
    let order: Vec<(usize, CaseCategory)> = table.iter().map(|m| (m.size, m.category)).collect();
    assert_eq!(
        order,
        vec![
            (100, CaseCategory::Best),
            (100, CaseCategory::Worst),
            (100, CaseCategory::Average),
            (1000, CaseCategory::Best),
            (1000, CaseCategory::Worst),
            (1000, CaseCategory::Average),
        ]
    );
}

#[test]
fn sort_plugins_leave_generated_inputs_ascending() {
    let mut generator = InputGenerator::new(rng());
    for plugin in [
        Box::new(BubbleSort) as Box<dyn plugins::Operation>,
        Box::new(MergeSort),
        Box::new(SelectionSort),
    ] {
        for category in CaseCategory::ALL {
            let mut workload = generator
                .generate(200, category, InputKind::Sequence)
                .unwrap();
            plugin.run(&mut workload);

            match workload {
                Workload::Sequence(values) => {
                    // ascending order and the original multiset, untouched
                    assert_eq!(
                        values,
                        (0..200).collect::<Vec<u64>>(),
                        "{} / {category}",
                        plugin.name()
                    );
                }
                other => panic!("sequence workload changed shape: {other:?}"),
            }
        }
    }
}

#[test]
fn best_case_search_hits_the_head_in_one_probe() {
    let mut generator = InputGenerator::new(rng());
    let workload = generator
        .generate(10, CaseCategory::Best, InputKind::Linked)
        .unwrap();

    match workload {
        Workload::Linked { list, key } => {
            assert_eq!(key, 0);
            let probe = list.search(key);
            assert!(probe.found);
            assert_eq!(probe.examined, 1);
        }
        other => panic!("expected linked workload, got {other:?}"),
    }
}

#[test]
fn worst_case_search_scans_the_full_structure() {
    let mut generator = InputGenerator::new(rng());
    let workload = generator
        .generate(10, CaseCategory::Worst, InputKind::Linked)
        .unwrap();

    match workload {
        Workload::Linked { list, key } => {
            assert_eq!(key, 10);
            let probe = list.search(key);
            assert!(!probe.found);
            assert_eq!(probe.examined, 10);
        }
        other => panic!("expected linked workload, got {other:?}"),
    }
}

#[test]
fn every_registered_plugin_completes_a_small_sweep() {
    for plugin in plugins::all() {
        let mut runner = BenchmarkRunner::new(rng());
        let table = runner.run(&[16, 64], plugin.as_ref()).unwrap();
        assert_eq!(table.len(), 6, "{}", plugin.name());
        assert!(table.validate().is_ok(), "{}", plugin.name());
    }
}
