use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    time::Instant,
};

use crate::{
    core::{
        config::ChartConfig,
        error::GraphError,
        output::{Report, input_stem},
        scan::count_reader,
        table::FrequencyTable,
    },
    render::LineChart,
};

/// Count `file` once, then write both charts into `out_dir`.
///
/// Progress goes to `stdout`; with `debug`, timings go to stderr.
/// Returns the written chart paths, unigrams first.
pub fn analyze<W: Write>(
    file: &Path,
    out_dir: &Path,
    debug: bool,
    stdout: &mut W,
) -> Result<Vec<PathBuf>, GraphError> {
    let stem = input_stem(file);
    let input = File::open(file)?;

    writeln!(stdout, "Calculating statistics...")?;
    let t_scan = Instant::now();
    let counts = count_reader(input)?;
    let dur_scan = t_scan.elapsed().as_micros();
    if debug {
        eprintln!(
            "scan: {dur_scan} µs   ({} unigram keys, {} bigram keys)",
            counts.unigrams.len(),
            counts.bigrams.len()
        );
    }

    let mut written = Vec::with_capacity(Report::ALL.len());
    for report in Report::ALL {
        writeln!(stdout, "Generating graph for {}...", report.name())?;
        let t_render = Instant::now();
        let path = write_report(report, &stem, counts.table(report), out_dir)?;
        if debug {
            eprintln!(
                "render {}: {} µs",
                report.name(),
                t_render.elapsed().as_micros()
            );
        }
        writeln!(
            stdout,
            "Graph for {} has been generated at: {}",
            report.name(),
            path.display()
        )?;
        written.push(path);
    }
    Ok(written)
}

/// Render into memory first so a failed chart never leaves a file behind.
fn write_report(
    report: Report,
    stem: &str,
    table: &FrequencyTable,
    out_dir: &Path,
) -> Result<PathBuf, GraphError> {
    let cfg = ChartConfig::builder(report.title(stem)).build()?;
    let mut png = Vec::new();
    LineChart::new(cfg).write_png(table, &mut png)?;

    let path = report.path_in(out_dir, stem);
    fs::write(&path, png)?;
    Ok(path)
}
