use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

use super::config::Config;
use raw2sqlite::converter::{ConversionError, ConversionStats, RawConverter};
use raw2sqlite::gate::Readiness;
use raw2sqlite::rows::TableKind;

const DEFAULT_EXTENSION: &str = "sqlite";

/// Convert one raw file into a SQLite database.
pub fn run(input: PathBuf, output: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let file_config = match config_path {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let output = output.unwrap_or_else(|| default_output(&input, &file_config));

    info!("raw2sqlite - raw file to SQLite");
    info!("===============================");
    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());
    if let Some(ref path) = config_path {
        info!("Config file: {}", path.display());
    }
    info!(
        "Store: journal_mode={}, synchronous={}",
        file_config.store.journal_mode.as_str(),
        file_config.store.synchronous.as_str()
    );

    if !input.exists() {
        warn!("Input file does not exist: {}", input.display());
        return Err(ConversionError::Precondition(Readiness::classify(None)).into());
    }

    let converter = RawConverter::new().with_store_config(file_config.store);
    let stats = converter
        .convert(&input, &output)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    info!("{}", stats.extraction);
    println!("{}", format_summary(&output, &stats));
    Ok(())
}

fn default_output(input: &Path, config: &Config) -> PathBuf {
    let extension = config
        .output
        .extension
        .as_deref()
        .unwrap_or(DEFAULT_EXTENSION);
    input.with_extension(extension)
}

fn format_summary(output: &Path, stats: &ConversionStats) -> String {
    let mut lines = Vec::with_capacity(TableKind::ALL.len() + 3);
    lines.push(format!("Wrote {}", output.display()));
    for (table, rows) in &stats.store.rows_per_table {
        lines.push(format!("  {:<30} {:>10}", table.name(), rows));
    }
    lines.push(format!(
        "  {:<30} {:>10}",
        "Total rows", stats.store.rows_written
    ));
    lines.push(format!(
        "  Output size: {} bytes ({:.2} MB)",
        stats.store.file_size_bytes,
        stats.store.file_size_bytes as f64 / 1024.0 / 1024.0
    ));

    #[cfg(feature = "colorized_output")]
    {
        use console::style;
        lines[0] = format!("{} {}", style("Wrote").green().bold(), output.display());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use raw2sqlite::source::{AcquisitionSnapshot, Device, InstrumentSnapshot};

    #[test]
    fn test_default_output_extension() {
        let config = Config::default();
        assert_eq!(
            default_output(Path::new("/data/run01.raw"), &config),
            PathBuf::from("/data/run01.sqlite")
        );

        let config = Config::from_str("[output]\nextension = \"db\"").unwrap();
        assert_eq!(
            default_output(Path::new("run01.RAW"), &config),
            PathBuf::from("run01.db")
        );
    }

    #[test]
    fn test_run_writes_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("run01.raw");
        AcquisitionSnapshot::new()
            .with_instrument(InstrumentSnapshot::with_scan_range(Device::MS, 1, 2))
            .save(&input)
            .unwrap();

        run(input.clone(), None, None).unwrap();
        assert!(dir.path().join("run01.sqlite").exists());
    }

    #[test]
    fn test_run_reports_precondition() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("live.raw");
        let mut snapshot = AcquisitionSnapshot::new();
        snapshot.is_open = false;
        snapshot.save(&input).unwrap();

        let err = run(input, None, None).unwrap_err();
        let conversion = err.downcast_ref::<ConversionError>().unwrap();
        assert_eq!(conversion.exit_code(), -3);
    }
}
