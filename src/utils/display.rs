//! Display and output formatting utilities

use crate::game_of_life::Grid;
use crate::simulation::PatternReport;
use itertools::Itertools;
use std::io::IsTerminal;

/// Format grids and reports for the console
pub struct GridFormatter;

impl GridFormatter {
    /// Spaced `1` / `-` rendering, one row per line
    pub fn format_grid_text(grid: &Grid) -> String {
        grid.row_slices()
            .map(|row| row.iter().map(|cell| format!(" {} ", cell.symbol())).join(""))
            .map(|line| line + "\n")
            .join("")
    }

    /// Console rendering: block glyphs when `compact`, spaced `1` / `-` otherwise
    pub fn format_grid(grid: &Grid, compact: bool) -> String {
        if compact {
            Self::format_grid_compact(grid)
        } else {
            Self::format_grid_text(grid)
        }
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.columns() + 1));
        for row in grid.row_slices() {
            for cell in row {
                output.push(if cell.is_alive() { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.columns() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for (row, cells) in grid.row_slices().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for cell in cells {
                output.push_str(if cell.is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line header printed above each generation
    pub fn format_generation_header(generation: u64, grid: &Grid) -> String {
        format!(
            "Generation {} ({}x{}, living: {})",
            generation,
            grid.rows(),
            grid.columns(),
            grid.living_count()
        )
    }

    /// Format pattern reports as a summary table
    pub fn format_report_table(reports: &[PatternReport]) -> String {
        let mut output = String::new();

        output.push_str("Pattern          | Size    | Living | Result\n");
        output.push_str("-----------------|---------|--------|------------------------------\n");

        for report in reports {
            output.push_str(&format!(
                "{:16} | {:>7} | {:6} | {}\n",
                report.name.chars().take(16).collect::<String>(),
                format!("{}x{}", report.rows, report.columns),
                report.living_cells,
                report.analysis
            ));
        }

        output
    }
}

/// Tone of a console status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
}

impl Tone {
    fn ansi_code(self) -> u8 {
        match self {
            Tone::Info => 34,
            Tone::Success => 32,
            Tone::Warning => 33,
        }
    }
}

/// ANSI-colored status lines, plain when stdout is not a color terminal
pub struct ColorOutput;

impl ColorOutput {
    pub fn paint(tone: Tone, text: &str) -> String {
        if Self::enabled() {
            format!("\x1b[{}m{}\x1b[0m", tone.ansi_code(), text)
        } else {
            text.to_string()
        }
    }

    fn enabled() -> bool {
        std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").map_or(true, |term| term != "dumb")
    }

    pub fn info(text: &str) -> String {
        Self::paint(Tone::Info, text)
    }

    pub fn success(text: &str) -> String {
        Self::paint(Tone::Success, text)
    }

    pub fn warning(text: &str) -> String {
        Self::paint(Tone::Warning, text)
    }
}
