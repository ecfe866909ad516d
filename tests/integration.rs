//! 链式哈希表与快速排序集成测试

use chained_quicksort::{
    batch_insert, batch_search, deterministic_first_pivot_sort, is_sorted, log_info,
    median_of_three_sort, randomized_sort, ChainedHashTable, HashAlgorithm, HashTableConfig,
    HashTableError, Sorter, StatsRecorder, StatsRecorderFactory,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use test_log::test;

const SEED: u64 = 42;
const ITEM_COUNT: usize = 50_000;
const KEY_SIZE: usize = 16;
const VALUE_SIZE: usize = 32;

/// 生成随机键值对
fn generate_items(count: usize) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|_| {
            let mut key = vec![0u8; KEY_SIZE];
            let mut value = vec![0u8; VALUE_SIZE];
            rng.fill(&mut key[..]);
            rng.fill(&mut value[..]);
            (key, value)
        })
        .collect()
}

/// 创建测试用哈希表
fn create_test_table() -> ChainedHashTable<Vec<u8>, Vec<u8>> {
    let config = HashTableConfig {
        initial_capacity: 16,
        max_load_factor: 0.75,
        min_load_factor: 0.20,
        shrink_threshold: 8,
        seed: SEED,
        hash_algorithm: HashAlgorithm::XxHash,
    };
    ChainedHashTable::with_config(config)
        .expect("配置合法")
        .with_recorder(StatsRecorderFactory::create_default())
}

#[test]
fn test_basic_functionality() {
    let mut table = ChainedHashTable::new(4, 0.75, 123);

    table.insert("apple".to_string(), 10);
    table.insert("banana".to_string(), 20);
    table.insert("banana".to_string(), 99);
    assert_eq!(table.search("banana"), Some(&99));
    assert_eq!(table.len(), 2);

    assert!(!table.delete("orange"));
    assert_eq!(table.search("orange"), None);

    assert!(table.delete("apple"));
    assert_eq!(table.search("apple"), None);
}

#[test]
fn test_growth_from_four_buckets() {
    let mut table = ChainedHashTable::new(4, 0.75, 1);
    for key in ["k1", "k2", "k3", "k4"] {
        table.insert(key, key.len());
    }
    assert!(table.capacity() >= 8);
    assert_eq!(table.len(), 4);
}

#[test]
fn test_high_load() {
    let start_time = std::time::Instant::now();
    let items = generate_items(ITEM_COUNT);
    let mut table = create_test_table();

    for (key, value) in &items {
        table.insert(key.clone(), value.clone());
        assert!(table.load_factor() <= 0.75);
    }
    log_info!("all inserts processed in {:?}", start_time.elapsed());

    let stats = table.stats();
    log_info!(
        "load_factor {}, size={}, bucket count={}, longest chain={}",
        stats.load_factor, stats.size, stats.capacity, stats.longest_chain
    );
    assert_eq!(stats.size, ITEM_COUNT);
    assert!(stats.capacity.is_power_of_two());

    for (index, (key, value)) in items.iter().enumerate() {
        assert_eq!(table.search(key), Some(value), "index {} 查找失败", index);
    }
}

#[test]
fn test_grow_then_shrink() {
    let items = generate_items(10_000);
    let mut table = create_test_table();
    for (key, value) in &items {
        table.insert(key.clone(), value.clone());
    }
    let peak = table.capacity();

    for (key, _) in items.iter().skip(100) {
        assert!(table.delete(key));
        if table.capacity() > 8 {
            assert!(table.load_factor() >= 0.20);
        }
    }

    assert!(table.capacity() < peak);
    for (key, value) in items.iter().take(100) {
        assert_eq!(table.search(key), Some(value));
    }

    let stats = table.stats();
    assert!(stats.grow_count > 0);
    assert!(stats.shrink_count > 0);
    assert_eq!(stats.delete_count, 9_900);
}

#[test]
fn test_random_workload_matches_hashmap() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut table = ChainedHashTable::new(2, 0.75, SEED);
    let mut model = HashMap::new();

    for step in 0..100_000u64 {
        let key = rng.gen_range(0..2_000u32);
        match rng.gen_range(0..10) {
            0..=4 => assert_eq!(table.insert(key, step), model.insert(key, step)),
            5..=7 => assert_eq!(table.delete(&key), model.remove(&key).is_some()),
            _ => assert_eq!(table.search(&key), model.get(&key)),
        }
    }

    assert_eq!(table.len(), model.len());
    assert_eq!(table.iter().count(), model.len());
    for (key, value) in &model {
        assert_eq!(table.search(key), Some(value));
    }
}

#[test]
fn test_batch_operations() {
    let mut table = ChainedHashTable::default();
    let inserted = batch_insert(&mut table, (0..1_000u32).map(|i| (i, i * 3)));
    assert_eq!(inserted, 1_000);
    assert_eq!(batch_insert(&mut table, [(5, 0)]), 0);

    let keys = [5u32, 999, 1_000];
    let found = batch_search(&table, keys.iter());
    assert_eq!(found, vec![Some(&0), Some(&2_997), None]);
}

#[test]
fn test_invalid_config_rejected() {
    let config = HashTableConfig::default().with_max_load_factor(f64::INFINITY);
    let err = ChainedHashTable::<u32, u32>::with_config(config).unwrap_err();
    assert!(matches!(err, HashTableError::InvalidLoadFactor { .. }));
    assert!(err.recovery_suggestion().is_some());
}

#[test]
fn test_prometheus_export() {
    let mut table = create_test_table();
    for (key, value) in generate_items(100) {
        table.insert(key, value);
    }
    let metrics = table.export_prometheus();
    assert!(metrics.contains("chained_operation_insert_count 100"));
    assert!(metrics.contains("chained_resize_grow_count"));
}

#[test]
fn test_sort_scenarios() {
    assert_eq!(randomized_sort::<i32>(&[], None), Vec::<i32>::new());
    assert_eq!(randomized_sort(&[7], None), vec![7]);
    assert_eq!(deterministic_first_pivot_sort(&[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
    assert_eq!(randomized_sort(&[3, 3, 3, 3, 3], Some(SEED)), vec![3, 3, 3, 3, 3]);
}

#[test]
fn test_sort_distributions() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let n = 20_000;
    let random: Vec<i64> = (0..n).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect();
    let sorted: Vec<i64> = (0..n).collect();
    let reverse: Vec<i64> = (0..n).rev().collect();
    let repeated: Vec<i64> = (0..n).map(|_| rng.gen_range(0..10)).collect();

    for (name, input) in [("random", &random), ("sorted", &sorted), ("reverse", &reverse), ("repeated", &repeated)] {
        let mut expected = input.clone();
        expected.sort_unstable();

        let start = std::time::Instant::now();
        assert_eq!(randomized_sort(input, Some(SEED)), expected, "{} randomized", name);
        assert_eq!(median_of_three_sort(input), expected, "{} median3", name);
        log_info!("{}: randomized + median3 in {:?}", name, start.elapsed());
    }

    // 首元素枢轴在有序输入上是 O(n²)，只用较小规模验证
    let small_sorted: Vec<i64> = (0..2_000).collect();
    let small_reverse: Vec<i64> = (0..2_000).rev().collect();
    assert_eq!(deterministic_first_pivot_sort(&small_sorted), small_sorted);
    assert_eq!(deterministic_first_pivot_sort(&small_reverse), small_sorted);
}

#[test]
fn test_sort_report_depth() {
    // 递归深度不超过 ⌊log₂ n⌋ + 1
    let mut data: Vec<u64> = (0..3_000).rev().collect();
    let report = Sorter::first_pivot().sort_in_place(&mut data);
    assert!(is_sorted(&data));
    assert!(report.max_depth <= 12, "depth {}", report.max_depth);

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut data: Vec<u64> = (0..100_000).map(|_| rng.gen()).collect();
    let report = Sorter::randomized(Some(SEED)).sort_in_place(&mut data);
    assert!(is_sorted(&data));
    assert!(report.max_depth <= 17, "depth {}", report.max_depth);
}

#[test]
fn test_sorter_with_shared_recorder() {
    let recorder = StatsRecorderFactory::create_default();
    let mut sorter = Sorter::randomized(Some(SEED)).with_recorder(recorder.clone());
    for len in [0usize, 1, 10, 100] {
        let input: Vec<usize> = (0..len).rev().collect();
        assert!(is_sorted(&sorter.sort(&input)));
    }
    assert_eq!(recorder.operation_stats_snapshot().sort_count, 4);
}
