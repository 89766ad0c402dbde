//! The 24-item benchmark instance.
//!
//! Weights and values are of the same magnitude (hundreds of thousands to
//! about two million), which makes the instance hard for greedy packing
//! while still small enough to verify by enumeration.

use crate::ga::{Item, Knapsack};

/// Capacity of the benchmark knapsack.
pub const BENCHMARK_CAPACITY: u64 = 6_404_180;

/// Value of the best packing.
pub const BENCHMARK_OPTIMUM: u64 = 13_549_094;

/// Chromosome of the best packing, item 0 first.
pub const BENCHMARK_OPTIMAL_CHROMOSOME: &str = "110111000110100100000111";

const BENCHMARK_ITEMS: [(u64, u64); 24] = [
    // (weight, value)
    (382_745, 825_594),
    (799_601, 1_677_009),
    (909_247, 1_676_628),
    (729_069, 1_523_970),
    (467_902, 943_972),
    (44_328, 97_426),
    (34_610, 69_666),
    (698_150, 1_296_457),
    (823_460, 1_679_693),
    (903_959, 1_902_996),
    (853_665, 1_844_992),
    (551_830, 1_049_289),
    (610_856, 1_252_836),
    (670_702, 1_319_836),
    (488_960, 953_277),
    (951_111, 2_067_538),
    (323_046, 675_367),
    (446_298, 853_655),
    (931_161, 1_826_027),
    (31_385, 65_731),
    (496_951, 901_489),
    (264_724, 577_243),
    (224_916, 466_257),
    (169_684, 369_261),
];

/// The benchmark items in chromosome order.
pub fn benchmark_items() -> Vec<Item> {
    BENCHMARK_ITEMS
        .iter()
        .map(|&(weight, value)| Item::new(weight, value))
        .collect()
}

/// The benchmark instance.
pub fn benchmark() -> Knapsack {
    Knapsack::new(benchmark_items(), BENCHMARK_CAPACITY)
        .expect("benchmark items are non-empty and their values fit in u64")
}
