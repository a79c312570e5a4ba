// tests/summary_statistics_test.rs

use eda_plots::data_analysis::bootstrap::{
    bootstrap_statistic, percentile_interval, BootstrapOptions, BootstrapStatistic,
};
use eda_plots::data_analysis::descriptive::shared_histograms;
use eda_plots::data_analysis::factor::{block_summaries, statistic_by_level, SummaryStatistic};
use eda_plots::data_analysis::quantile::{box_stats, quantile_pairs};

#[test]
fn qq_pairing_is_monotone_in_both_coordinates() {
    let a = [9.0, 1.0, 5.0, 3.0, 7.0, 2.0, 8.0];
    let b = [40.0, 10.0, 30.0, 20.0];
    let pairs = quantile_pairs(&a, &b).unwrap();
    assert_eq!(pairs.len(), 4);
    for window in pairs.windows(2) {
        assert!(window[0].0 <= window[1].0);
        assert!(window[0].1 <= window[1].1);
    }
    // Extremes always pair with extremes.
    assert_eq!(pairs[0], (1.0, 10.0));
    assert_eq!(pairs[3], (9.0, 40.0));
}

#[test]
fn box_stats_ordering_invariants_hold() {
    let series: Vec<f64> = (0..40).map(|i| ((i * 13) % 17) as f64).collect();
    let stats = box_stats(&series).unwrap();
    assert!(stats.whisker_low <= stats.q1);
    assert!(stats.q1 <= stats.median);
    assert!(stats.median <= stats.q3);
    assert!(stats.q3 <= stats.whisker_high);
}

#[test]
fn shared_histograms_account_for_every_value() {
    let a: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let b: Vec<f64> = (10..50).map(|i| i as f64).collect();
    let (ha, hb) = shared_histograms(&a, &b, 8).unwrap();
    assert_eq!(ha.counts.iter().sum::<usize>(), a.len());
    assert_eq!(hb.counts.iter().sum::<usize>(), b.len());
    assert_eq!(ha.edges, hb.edges);
    assert_eq!(ha.edges[0], 0.0);
    assert_eq!(*ha.edges.last().unwrap(), 49.0);
}

#[test]
fn bootstrap_interval_tightens_at_lower_confidence() {
    let series: Vec<f64> = (0..90).map(|i| ((i * 7) % 31) as f64).collect();
    let options = BootstrapOptions {
        subsample_size: 50,
        samples: 500,
        seed: Some(7),
    };
    let values = bootstrap_statistic(&series, BootstrapStatistic::Mean, &options).unwrap();
    let (lo_90, hi_90) = percentile_interval(&values, 0.90).unwrap();
    let (lo_99, hi_99) = percentile_interval(&values, 0.99).unwrap();
    assert!(lo_99 <= lo_90);
    assert!(hi_90 <= hi_99);
    assert!(lo_90 < hi_90);
}

#[test]
fn level_statistics_and_blocks_agree_on_a_small_design() {
    // 2x2 design, two replicates per cell.
    let response = [10.0, 12.0, 20.0, 22.0, 30.0, 32.0, 40.0, 42.0];
    let primary = [1, 1, 2, 2, 1, 1, 2, 2];
    let block = [1, 1, 1, 1, 2, 2, 2, 2];

    let means = statistic_by_level(&response, &primary, SummaryStatistic::Mean).unwrap();
    assert_eq!(means, vec![(1, 21.0), (2, 31.0)]);

    let summaries = block_summaries(&response, &primary, &[&block]).unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].level_means, vec![(1, 11.0), (2, 21.0)]);
    assert_eq!(summaries[1].level_means, vec![(1, 31.0), (2, 41.0)]);
    // The primary effect points the same way in both blocks.
    for summary in &summaries {
        assert!(summary.level_means[1].1 > summary.level_means[0].1);
    }
}

// tests/summary_statistics_test.rs
