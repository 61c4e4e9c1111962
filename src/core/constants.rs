//! A collection of constants.

/// Characters counted as symbols.  Membership test only, order is irrelevant.
pub const SYMBOLS: &str = "^<>$%{()}=~[]_#@&*'`\\+-/\"|!;:?";

/// Raster resolution used to turn inch/point sizes into pixels
pub const DOTS_PER_INCH: u32 = 96;
/// Canvas width in inches
pub const CANVAS_WIDTH_IN: u32 = 8;
/// Canvas height in inches
pub const CANVAS_HEIGHT_IN: u32 = 4;

/// Series line width in points (1/72 inch)
pub const LINE_WIDTH_PT: f32 = 2.0;
/// Opaque blue
pub const LINE_COLOR: [u8; 3] = [0, 0, 255];

/// Y axis ticks are placed every 50 counts starting at 0.
pub const Y_TICK_STEP: u64 = 50;

pub const X_AXIS_LABEL: &str = "Symbol";
pub const Y_AXIS_LABEL: &str = "Frequency";

/// Chart file name suffixes, appended to the input stem.
pub const UNIGRAM_SUFFIX: &str = "_unigrams.png";
pub const BIGRAM_SUFFIX: &str = "_bigrams.png";

/// Smallest canvas (in pixels) that still fits the chrome around the plot area.
pub const MIN_CANVAS_WIDTH: u32 = 160;
pub const MIN_CANVAS_HEIGHT: u32 = 120;

/// Read buffer for the input scan.
pub const BUF_CAP: usize = 1 << 16; // 64 KiB
