// BuildSleuth - core/export.rs
//
// Report output: CSV, JSON, chart JSON and a plain-text table.
// Core layer: writes to any Write trait object.

use crate::core::chart::ChartData;
use crate::core::filter::MergeOutcome;
use crate::core::model::{format_size, BuildEntry};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export entries to CSV format.
///
/// Writes: path, size_mb
pub fn export_csv<W: Write>(
    entries: &[&BuildEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["path", "size_mb"])
        .map_err(csv_err)?;

    for entry in entries {
        let size = entry.size().to_string();
        csv_writer
            .write_record([entry.path(), size.as_str()])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(entries.len())
}

/// Export entries to JSON format (array of `{ path, size_mb }` objects).
pub fn export_json<W: Write>(
    entries: &[&BuildEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, entries).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(entries.len())
}

/// Export chart data as JSON.
pub fn export_chart_json<W: Write>(
    chart: &ChartData,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, chart).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(chart.labels.len())
}

/// Render a human-readable size table with a totals footer.
///
/// ```text
///      SIZE  PATH
///  12.34 MB  Assets/Textures/foo.png
///  512.0 KB  Assets/Audio/bar.wav
///
/// 2 assets, 12.85 MB (3 below 10.0 KB merged, 2.1 KB)
/// ```
pub fn render_table<W: Write>(
    outcome: &MergeOutcome<'_>,
    merge_size: f64,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let io_err = |e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    };

    let sizes: Vec<String> = outcome.kept.iter().map(|e| format_size(e.size())).collect();
    let width = sizes.iter().map(String::len).max().unwrap_or(0).max("SIZE".len());

    writeln!(writer, "{:>width$}  PATH", "SIZE").map_err(io_err)?;
    for (entry, size) in outcome.kept.iter().zip(&sizes) {
        writeln!(writer, "{size:>width$}  {}", entry.path()).map_err(io_err)?;
    }

    writeln!(writer).map_err(io_err)?;
    write!(
        writer,
        "{} assets, {}",
        outcome.kept.len(),
        format_size(outcome.kept_size())
    )
    .map_err(io_err)?;
    if outcome.merged_count > 0 {
        write!(
            writer,
            " ({} below {} merged, {})",
            outcome.merged_count,
            format_size(merge_size),
            format_size(outcome.merged_size)
        )
        .map_err(io_err)?;
    }
    writeln!(writer).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    Ok(outcome.kept.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chart::build_chart_data;
    use crate::core::filter::apply_merge_size;

    fn sample() -> Vec<BuildEntry> {
        vec![
            BuildEntry::new("Assets/Textures/foo.png".to_string(), 12.34),
            BuildEntry::new("Assets/Audio/bar.wav".to_string(), 0.512),
            BuildEntry::new("Assets/Data/tiny.asset".to_string(), 0.002),
        ]
    }

    #[test]
    fn test_csv_export() {
        let entries = sample();
        let refs: Vec<_> = entries.iter().collect();
        let mut buf = Vec::new();
        let count = export_csv(&refs, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 3);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "path,size_mb");
        assert_eq!(lines[1], "Assets/Textures/foo.png,12.34");
        assert_eq!(lines[2], "Assets/Audio/bar.wav,0.512");
    }

    #[test]
    fn test_csv_export_quotes_paths_with_commas() {
        let entries = [BuildEntry::new("Assets/a,b.png".to_string(), 1.0)];
        let refs: Vec<_> = entries.iter().collect();
        let mut buf = Vec::new();
        export_csv(&refs, &mut buf, Path::new("out.csv")).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("\"Assets/a,b.png\",1"));
    }

    #[test]
    fn test_json_export() {
        let entries = sample();
        let refs: Vec<_> = entries.iter().collect();
        let mut buf = Vec::new();
        let count = export_json(&refs, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 3);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[1]["path"], "Assets/Audio/bar.wav");
        assert_eq!(value[1]["size_mb"], 0.512);
    }

    #[test]
    fn test_chart_export() {
        let chart = build_chart_data(vec!["Assets/a.png".to_string()], vec![1.0]);
        let mut buf = Vec::new();
        let count = export_chart_json(&chart, &mut buf, Path::new("chart.json")).unwrap();
        assert_eq!(count, 1);
        assert!(String::from_utf8(buf).unwrap().contains("backgroundColor"));
    }

    #[test]
    fn test_table_lists_kept_entries_and_merged_footer() {
        let entries = sample();
        let outcome = apply_merge_size(&entries, 0.01);
        let mut buf = Vec::new();
        let count = render_table(&outcome, 0.01, &mut buf, Path::new("-")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "    SIZE  PATH");
        assert_eq!(lines[1], "12.34 MB  Assets/Textures/foo.png");
        assert_eq!(lines[2], "512.0 KB  Assets/Audio/bar.wav");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "2 assets, 12.85 MB (1 below 10.0 KB merged, 2.0 KB)");
    }

    #[test]
    fn test_table_without_merged_entries_has_plain_footer() {
        let entries = sample();
        let outcome = apply_merge_size(&entries, 0.0);
        let mut buf = Vec::new();
        render_table(&outcome, 0.0, &mut buf, Path::new("-")).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.trim_end().ends_with("3 assets, 12.85 MB"));
    }
}
