pub mod axis;
pub mod canvas;
pub mod chart;

pub use axis::{LineSeries, PlotArea, XTick, YAxis, x_ticks};
pub use canvas::Canvas;
pub use chart::LineChart;
