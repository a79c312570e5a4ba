// src/data_analysis/factor.rs

use crate::data_analysis::descriptive;
use crate::data_analysis::errors::AnalysisError;
use crate::data_analysis::quantile;

/// Summary statistic over a group of responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStatistic {
    Mean,
    Median,
    /// Sample standard deviation (ddof = 1).
    Std,
}

impl SummaryStatistic {
    pub fn label(&self) -> &'static str {
        match self {
            SummaryStatistic::Mean => "Mean",
            SummaryStatistic::Median => "Median",
            SummaryStatistic::Std => "Standard Deviation",
        }
    }

    pub fn evaluate(&self, values: &[f64]) -> Result<f64, AnalysisError> {
        match self {
            SummaryStatistic::Mean => descriptive::mean(values),
            SummaryStatistic::Median => quantile::quantile(values, 0.5),
            SummaryStatistic::Std => descriptive::sample_std(values),
        }
    }
}

fn validate_column(response: &[f64], levels: &[i64]) -> Result<(), AnalysisError> {
    if response.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    if response.len() != levels.len() {
        return Err(AnalysisError::LengthMismatch {
            left: response.len(),
            right: levels.len(),
        });
    }
    Ok(())
}

/// Sorted distinct levels of a factor column.
pub fn distinct_levels(levels: &[i64]) -> Vec<i64> {
    let mut sorted = levels.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

/// 0-based position of each row's level among the sorted distinct levels.
/// Charts place arbitrary level codes at evenly spaced positions and label
/// the ticks with the codes themselves.
pub fn encode_levels(levels: &[i64]) -> Vec<usize> {
    let distinct = distinct_levels(levels);
    // Every level is present in its own distinct set, so the partition point
    // is exactly its index.
    levels
        .iter()
        .map(|l| distinct.partition_point(|d| d < l))
        .collect()
}

/// Statistic of the response at each level of a factor, in sorted level
/// order.
pub fn statistic_by_level(
    response: &[f64],
    levels: &[i64],
    statistic: SummaryStatistic,
) -> Result<Vec<(i64, f64)>, AnalysisError> {
    validate_column(response, levels)?;

    distinct_levels(levels)
        .into_iter()
        .map(|level| {
            let group: Vec<f64> = response
                .iter()
                .zip(levels.iter())
                .filter(|(_, &l)| l == level)
                .map(|(&r, _)| r)
                .collect();
            Ok((level, statistic.evaluate(&group)?))
        })
        .collect()
}

/// Mean responses of the primary-factor levels within one combination of
/// nuisance-factor levels (one bar of a block plot).
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSummary {
    /// One level per nuisance factor, in input factor order.
    pub combination: Vec<i64>,
    /// (primary level, mean response), sorted by level. Always at least two
    /// entries; combinations observed at fewer levels are skipped.
    pub level_means: Vec<(i64, f64)>,
}

impl BlockSummary {
    pub fn low(&self) -> f64 {
        self.level_means
            .iter()
            .map(|&(_, m)| m)
            .fold(f64::INFINITY, f64::min)
    }

    pub fn high(&self) -> f64 {
        self.level_means
            .iter()
            .map(|&(_, m)| m)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Block-plot summaries: for every combination of nuisance-factor levels (the
/// sorted cartesian product), the mean response at each primary-factor level.
///
/// Combinations with fewer than two primary levels present carry no
/// comparison and are dropped, matching the technique's definition.
pub fn block_summaries(
    response: &[f64],
    primary: &[i64],
    nuisance: &[&[i64]],
) -> Result<Vec<BlockSummary>, AnalysisError> {
    validate_column(response, primary)?;
    if nuisance.is_empty() {
        return Err(AnalysisError::InvalidParameter(
            "block plot needs at least one nuisance factor".to_string(),
        ));
    }
    for column in nuisance {
        validate_column(response, column)?;
    }

    // Sorted cartesian product of the nuisance level sets.
    let level_sets: Vec<Vec<i64>> = nuisance.iter().map(|c| distinct_levels(c)).collect();
    let mut combinations: Vec<Vec<i64>> = vec![Vec::new()];
    for set in &level_sets {
        let mut next = Vec::with_capacity(combinations.len() * set.len());
        for prefix in &combinations {
            for &level in set {
                let mut combo = prefix.clone();
                combo.push(level);
                next.push(combo);
            }
        }
        combinations = next;
    }

    let primary_levels = distinct_levels(primary);
    let mut summaries = Vec::new();
    for combination in combinations {
        let in_combination = |row: usize| {
            nuisance
                .iter()
                .zip(combination.iter())
                .all(|(column, &level)| column[row] == level)
        };

        let mut level_means = Vec::new();
        for &p_level in &primary_levels {
            let group: Vec<f64> = (0..response.len())
                .filter(|&row| primary[row] == p_level && in_combination(row))
                .map(|row| response[row])
                .collect();
            if !group.is_empty() {
                level_means.push((p_level, descriptive::mean(&group)?));
            }
        }

        if level_means.len() >= 2 {
            summaries.push(BlockSummary {
                combination,
                level_means,
            });
        }
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_sorted_and_deduplicated() {
        assert_eq!(distinct_levels(&[3, 1, 2, 1, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn encoded_positions_follow_sorted_level_order() {
        assert_eq!(encode_levels(&[40, 10, 20, 10, 40]), vec![2, 0, 1, 0, 2]);
    }

    #[test]
    fn statistic_by_level_on_known_groups() {
        let response = [1.0, 2.0, 3.0, 10.0, 20.0];
        let levels = [1, 1, 1, 2, 2];
        let means = statistic_by_level(&response, &levels, SummaryStatistic::Mean).unwrap();
        assert_eq!(means, vec![(1, 2.0), (2, 15.0)]);
        let medians =
            statistic_by_level(&response, &levels, SummaryStatistic::Median).unwrap();
        assert_eq!(medians, vec![(1, 2.0), (2, 15.0)]);
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        assert_eq!(
            statistic_by_level(&[1.0, 2.0], &[1], SummaryStatistic::Mean),
            Err(AnalysisError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn block_summaries_on_a_hand_checked_table() {
        // Two nuisance factors (2 x 2 combinations), primary factor with two
        // levels observed in three of the four combinations.
        let response = [10.0, 12.0, 20.0, 26.0, 30.0, 31.0, 40.0];
        let primary = [1, 2, 1, 2, 1, 2, 1];
        let plant = [1, 1, 1, 1, 2, 2, 2];
        let shift = [1, 1, 2, 2, 1, 1, 2];

        let summaries =
            block_summaries(&response, &primary, &[&plant, &shift]).unwrap();
        assert_eq!(summaries.len(), 3); // (2,2) has only primary level 1
        assert_eq!(summaries[0].combination, vec![1, 1]);
        assert_eq!(summaries[0].level_means, vec![(1, 10.0), (2, 12.0)]);
        assert_eq!(summaries[1].combination, vec![1, 2]);
        assert_eq!(summaries[1].level_means, vec![(1, 20.0), (2, 26.0)]);
        assert_eq!(summaries[2].combination, vec![2, 1]);
        assert!((summaries[2].low() - 30.0).abs() < 1e-12);
        assert!((summaries[2].high() - 31.0).abs() < 1e-12);
    }
}

// src/data_analysis/factor.rs
