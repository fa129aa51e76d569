//! Formatting utilities for sizes, durations, and build summaries.

use console::Term;
use owo_colors::OwoColorize;
use sitepack_bundler::ArtifactReport;
use std::time::Duration;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// # Examples
///
/// ```
/// use sitepack_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sitepack_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// One summary line for an artifact, without colors.
pub(crate) fn summary_line(report: &ArtifactReport) -> String {
    let name = report
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.output.display().to_string());

    format!(
        "{} {} (from {} in {} file(s), {}) {}",
        name,
        format_size(report.output_bytes),
        format_size(report.input_bytes),
        report.sources,
        format_duration(report.elapsed),
        report.short_digest()
    )
}

/// Print a summary table of the written artifacts to stdout.
pub fn print_build_summary(reports: &[ArtifactReport]) {
    if reports.is_empty() {
        return;
    }

    let width = (Term::stdout().size().1 as usize).min(60);
    let rule = "─".repeat(width);

    if colors_enabled() {
        println!("\n{}", "Build Summary".bold().underline());
        println!("{}", rule.dimmed());
        for report in reports {
            println!("  {} {}", "▸".blue(), summary_line(report));
        }
    } else {
        println!("\nBuild Summary");
        println!("{}", rule);
        for report in reports {
            println!("  ▸ {}", summary_line(report));
        }
    }

    let total_size: u64 = reports.iter().map(|r| r.output_bytes).sum();
    let total_time: Duration = reports.iter().map(|r| r.elapsed).sum();
    println!(
        "  Total: {} in {}",
        format_size(total_size),
        format_duration(total_time)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitepack_bundler::AssetKind;
    use std::path::PathBuf;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(10_240), "10.00 KB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(1_048_576), "1.00 MB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
    }

    #[test]
    fn test_summary_line() {
        let report = ArtifactReport {
            kind: AssetKind::Css,
            output: PathBuf::from("/site/pack.css"),
            sources: 3,
            input_bytes: 2048,
            output_bytes: 512,
            digest: "0123456789abcdef0123".to_string(),
            elapsed: Duration::from_millis(12),
            changed: true,
        };

        assert_eq!(
            summary_line(&report),
            "pack.css 512 B (from 2.00 KB in 3 file(s), 12ms) 0123456789ab"
        );
    }
}
