// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::config::StretchConfig;
use crate::geometry::{Axis, BoundingBox};
use crate::stretch::{AxisConfig, StretchReport, TargetRange};
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report detected model size and the accepted target range per axis
    pub fn report_dimensions(file: &str, bbox: &BoundingBox, triangles: usize, config: &StretchConfig) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Model detected:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());

        for axis in Axis::ALL {
            let range = TargetRange::for_axis(bbox, axis, config.max_scale);
            println!(
                "  {} {} mm   {} {:.2} mm   {} {:.2} mm   {}",
                Self::axis_label(axis).bright_black(),
                format!("{:>9.2}", bbox.axis_size(axis)).cyan(),
                "Min:".bright_black(),
                range.min,
                "Max:".bright_black(),
                range.max,
                Self::describe_margin(config.axis(axis)).bright_black()
            );
        }

        println!(
            "  {} {}",
            "Triangles:".bright_black(),
            triangles.to_string().cyan()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report a finished stretch
    pub fn report_stretch(input: &str, output: &str, report: &StretchReport, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {} {} {}", "Stretched:".bold(), input.cyan(), "→".bright_black(), output.cyan());
        println!("{}", "━".repeat(80).bright_black());

        for axis in &report.axes {
            let factor = format!("×{:.4}", axis.factor);
            let factor = if (axis.factor - 1.0).abs() < 1e-12 {
                factor.bright_black()
            } else {
                factor.yellow()
            };
            println!(
                "  {} {:>9.2} → {} mm  {}",
                Self::axis_label(axis.axis).bright_black(),
                axis.detected,
                format!("{:<9.2}", axis.target).green(),
                factor
            );
        }

        println!(
            "  {} {}",
            "Triangles:".bright_black(),
            report.triangle_count.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn axis_label(axis: Axis) -> String {
        let dimension = axis.dimension();
        let mut chars = dimension.chars();
        let title: String = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("{} ({}):", axis, title)
    }

    fn describe_margin(config: AxisConfig) -> String {
        match config {
            AxisConfig::SingleSided { margin } => format!("fixed {:.2} mm at min", margin),
            AxisConfig::Symmetric { margin } => format!("fixed {:.2} mm at both ends", margin),
        }
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
