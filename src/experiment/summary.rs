//! Per-sample aggregation and CSV export.

use super::runner::{Algorithm, Demand};
use crate::error::Result;
use std::io::Write;

/// Mean, population standard deviation, minimum and maximum of a sample.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub best: f64,
    pub worst: f64,
}

impl Stats {
    /// Summarizes `values`. An empty slice yields all zeros; a single value
    /// has zero deviation.
    pub fn from_samples(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                best: 0.0,
                worst: 0.0,
            };
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if values.len() > 1 {
            (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
        } else {
            0.0
        };
        let best = values.iter().copied().fold(f64::INFINITY, f64::min);
        let worst = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            mean,
            std_dev,
            best,
            worst,
        }
    }
}

/// Aggregated trials of one algorithm on one demand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSummary {
    pub demand: Demand,
    pub algorithm: Algorithm,
    pub total_cost: Stats,
    pub delay: Stats,
    pub reliability_cost: Stats,
    pub resource_cost: Stats,
    /// Node count of the path, not hop count.
    pub path_length: Stats,
    pub runtime_ms: Stats,
}

const CSV_HEADER: &str = "sample_id,source,dest,B_mbps,algo,\
mean_total_cost,std_total_cost,best_total_cost,worst_total_cost,\
mean_delay,std_delay,mean_rel_cost,std_rel_cost,mean_res_cost,std_res_cost,\
mean_path_len,std_path_len,mean_runtime_ms,std_runtime_ms";

/// Writes `rows` as CSV with a header line.
///
/// # Errors
///
/// [`RouteError::Io`](crate::RouteError::Io) if the writer fails.
pub fn write_csv<W: Write>(rows: &[TrialSummary], mut writer: W) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            row.demand.sample_id,
            row.demand.source,
            row.demand.target,
            row.demand.bandwidth_mbps,
            row.algorithm,
            row.total_cost.mean,
            row.total_cost.std_dev,
            row.total_cost.best,
            row.total_cost.worst,
            row.delay.mean,
            row.delay.std_dev,
            row.reliability_cost.mean,
            row.reliability_cost.std_dev,
            row.resource_cost.mean,
            row.resource_cost.std_dev,
            row.path_length.mean,
            row.path_length.std_dev,
            row.runtime_ms.mean,
            row.runtime_ms.std_dev,
        )?;
    }
    writer.flush()?;
    Ok(())
}
