//! Recorded measurements
//!
//! Transcribed from the benchmark runs on the test machine. Row values are
//! ordered by [`THREAD_COUNTS`](crate::THREAD_COUNTS): 1, 2, 4, 8 threads.

use crate::dataset::{BenchmarkDataset, MeasurementTable, Metric, Strategy, TableRow};

// Throughput (Gbps)
pub const A1_THROUGHPUT: [TableRow; 4] = [
    (64, [0.125661, 0.269347, 0.517788, 0.874539]),
    (512, [1.082198, 2.363781, 5.181462, 12.503897]),
    (4096, [11.959821, 25.694233, 47.512025, 78.715937]),
    (65536, [62.970082, 121.602579, 233.190674, 170.435484]),
];

pub const A2_THROUGHPUT: [TableRow; 4] = [
    (64, [1.208641, 2.453130, 4.988763, 7.768833]),
    (512, [8.151425, 16.237882, 34.310216, 54.940195]),
    (4096, [37.492166, 71.984552, 150.551662, 235.375510]),
    (65536, [75.595357, 137.980543, 286.385609, 107.332869]),
];

pub const A3_THROUGHPUT: [TableRow; 4] = [
    (64, [0.260614, 0.504401, 1.019843, 1.410619]),
    (512, [2.072762, 4.056152, 8.085418, 11.217402]),
    (4096, [14.348835, 27.585026, 54.204056, 78.731530]),
    (65536, [63.038554, 119.534204, 231.394666, 78.697726]),
];

// Cache misses
pub const A1_CACHE_MISSES: [TableRow; 4] = [
    (64, [5249556.0, 20093151.0, 24607820.0, 3538466.0]),
    (512, [41024946.0, 111208561.0, 35415188.0, 5812446.0]),
    (4096, [41730966.0, 68761699.0, 58835425.0, 11229308.0]),
    (65536, [92152276.0, 101334653.0, 198144683.0, 401465360.0]),
];

pub const A2_CACHE_MISSES: [TableRow; 4] = [
    (64, [111883618.0, 17387273.0, 50240014.0, 5103976.0]),
    (512, [23336061.0, 36914720.0, 50836353.0, 12089152.0]),
    (4096, [15055304.0, 40055190.0, 48224821.0, 18944648.0]),
    (65536, [14010351.0, 45713775.0, 99521525.0, 460012926.0]),
];

pub const A3_CACHE_MISSES: [TableRow; 4] = [
    (64, [16187188.0, 64511600.0, 36807824.0, 8849472.0]),
    (512, [18338502.0, 27825618.0, 29005647.0, 15829334.0]),
    (4096, [31466232.0, 18943808.0, 39986217.0, 27019343.0]),
    (65536, [49521502.0, 80371672.0, 180218141.0, 31332009.0]),
];

// CPU cycles
pub const A1_CYCLES: [TableRow; 4] = [
    (64, [8090592279.0, 67886693186.0, 120680708878.0, 259115906082.0]),
    (512, [10514105885.0, 52721919288.0, 119826655135.0, 258864926787.0]),
    (4096, [17101603226.0, 38650007567.0, 117446251655.0, 255554820042.0]),
    (65536, [17137236889.0, 52010364357.0, 127435866414.0, 193933464338.0]),
];

pub const A2_CYCLES: [TableRow; 4] = [
    (64, [14019239288.0, 17604530133.0, 120781701211.0, 252974855599.0]),
    (512, [22821717950.0, 42147815446.0, 115863290254.0, 251764869553.0]),
    (4096, [8812719583.0, 22520824851.0, 127027685390.0, 252326062060.0]),
    (65536, [3758198895.0, 45069577346.0, 130548729293.0, 165115960054.0]),
];

pub const A3_CYCLES: [TableRow; 4] = [
    (64, [23534765105.0, 25512527387.0, 124049676816.0, 249324989309.0]),
    (512, [11012461776.0, 54948800884.0, 128932696286.0, 248410655113.0]),
    (4096, [28262977189.0, 49983330464.0, 118060050738.0, 248738632756.0]),
    (65536, [21536307196.0, 51497962465.0, 124126319212.0, 24626150709.0]),
];

// Total bytes transferred
pub const A1_BYTES: [TableRow; 4] = [
    (64, [157075808.0, 336683448.0, 647235088.0, 1093173288.0]),
    (512, [1352747200.0, 2954726208.0, 6476827392.0, 15629871168.0]),
    (4096, [14949776384.0, 32117791744.0, 59390031360.0, 98394921472.0]),
    (65536, [78712602571.0, 152003223446.0, 291488342016.0, 213044355019.0]),
];

pub const A2_BYTES: [TableRow; 4] = [
    (64, [1510800640.0, 3066413056.0, 6235953280.0, 9711041408.0]),
    (512, [10189281280.0, 20297352704.0, 42887770624.0, 68675243520.0]),
    (4096, [46865207296.0, 89980690432.0, 188189577216.0, 294219386880.0]),
    (65536, [94494195712.0, 172475678720.0, 357982011392.0, 134166085632.0]),
];

pub const A3_BYTES: [TableRow; 4] = [
    (64, [325767872.0, 630501696.0, 1274803152.0, 1763273720.0]),
    (512, [2590952000.0, 5070190400.0, 10106772736.0, 14021752576.0]),
    (4096, [17936043520.0, 34481282048.0, 67755070464.0, 98414412288.0]),
    (65536, [78798192640.0, 149417754624.0, 289243332608.0, 98372157228.0]),
];

/// Literal rows for one (strategy, metric) pair
pub fn rows(strategy: Strategy, metric: Metric) -> &'static [TableRow] {
    match (strategy, metric) {
        (Strategy::TwoCopy, Metric::Throughput) => &A1_THROUGHPUT,
        (Strategy::OneCopy, Metric::Throughput) => &A2_THROUGHPUT,
        (Strategy::ZeroCopy, Metric::Throughput) => &A3_THROUGHPUT,
        (Strategy::TwoCopy, Metric::CacheMisses) => &A1_CACHE_MISSES,
        (Strategy::OneCopy, Metric::CacheMisses) => &A2_CACHE_MISSES,
        (Strategy::ZeroCopy, Metric::CacheMisses) => &A3_CACHE_MISSES,
        (Strategy::TwoCopy, Metric::Cycles) => &A1_CYCLES,
        (Strategy::OneCopy, Metric::Cycles) => &A2_CYCLES,
        (Strategy::ZeroCopy, Metric::Cycles) => &A3_CYCLES,
        (Strategy::TwoCopy, Metric::Bytes) => &A1_BYTES,
        (Strategy::OneCopy, Metric::Bytes) => &A2_BYTES,
        (Strategy::ZeroCopy, Metric::Bytes) => &A3_BYTES,
    }
}

/// All twelve recorded tables
pub fn dataset() -> BenchmarkDataset {
    let tables = Strategy::ALL
        .iter()
        .flat_map(|&strategy| {
            Metric::ALL.iter().map(move |&metric| {
                MeasurementTable::from_rows(strategy, metric, rows(strategy, metric))
            })
        })
        .collect();
    BenchmarkDataset::new(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MESSAGE_SIZES, THREAD_SLOTS};

    #[test]
    fn test_every_table_covers_every_size() {
        let dataset = dataset();
        for strategy in Strategy::ALL {
            for metric in Metric::ALL {
                let table = dataset.table(strategy, metric).unwrap();
                for size in MESSAGE_SIZES {
                    for index in 0..THREAD_SLOTS {
                        let value = table.value(size, index).unwrap();
                        assert!(value > 0.0, "{strategy} {metric} {size} {index}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_rows_follow_message_size_order() {
        for strategy in Strategy::ALL {
            for metric in Metric::ALL {
                let sizes: Vec<u64> = rows(strategy, metric).iter().map(|r| r.0).collect();
                assert_eq!(sizes, MESSAGE_SIZES.to_vec());
            }
        }
    }
}
