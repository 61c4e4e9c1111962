//! Public-facing crate root: re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use std::io::Write;

pub use crate::core::{
    classify::CharClass,
    config::{ChartConfig, ChartConfigBuilder},
    error::{ConfigError, GraphError, ScanError},
    output::Report,
    scan::{Aggregator, NgramCounts, count_reader, count_str},
    table::{FrequencyTable, RankedEntry},
};

pub use render::{LineChart, YAxis};

/// Chart `table` with the default styling and write the PNG to `out`.
pub fn graph<W: Write>(title: &str, table: &FrequencyTable, out: W) -> Result<(), GraphError> {
    let cfg = ChartConfig::builder(title).build()?;
    LineChart::new(cfg).write_png(table, out)
}
