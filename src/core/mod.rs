//! Aggregates the "business logic" layer.

pub mod classify;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod scan;
pub mod table;

// re-export frequently-used items for convenience
pub use classify::CharClass;
pub use config::{ChartConfig, ChartConfigBuilder};
pub use constants::{SYMBOLS, Y_TICK_STEP};
pub use error::{ConfigError, GraphError, ScanError};
pub use output::{Report, input_stem};
pub use scan::{Aggregator, NgramCounts, count_reader, count_str};
pub use table::{FrequencyTable, RankedEntry};
