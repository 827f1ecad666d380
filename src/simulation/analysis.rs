//! Long-run classification of patterns

use crate::game_of_life::{GenerationEngine, Grid};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a pattern behaves when run forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StabilityAnalysis {
    /// Every cell is dead from `generation` on
    Extinct { generation: usize },
    /// Unchanged by further steps from `generation` on
    StillLife { generation: usize },
    /// Repeats with `period` > 1 once `generation` is reached
    Oscillator { period: usize, generation: usize },
    /// No repeat found within `generations` steps
    Unsettled { generations: usize },
}

impl StabilityAnalysis {
    /// Run `grid` forward looking for the first repeated state.
    ///
    /// Uses Brent's cycle detection, so only a few grids are alive at once
    /// no matter how far ahead it looks. `max_generations` bounds the
    /// lead pointer; a cycle it has not closed by then is reported as
    /// `Unsettled`.
    pub fn analyze(engine: &GenerationEngine, grid: &Grid, max_generations: usize) -> Self {
        if grid.is_extinct() {
            return StabilityAnalysis::Extinct { generation: 0 };
        }
        if max_generations == 0 {
            return StabilityAnalysis::Unsettled { generations: 0 };
        }

        // Find the cycle length: the tortoise parks at powers of two while
        // the hare walks every generation in order.
        let mut power = 1;
        let mut period = 1;
        let mut tortoise = grid.clone();
        let mut hare = engine.step(grid);
        let mut generation = 1;

        loop {
            if hare.is_extinct() {
                return StabilityAnalysis::Extinct { generation };
            }
            if tortoise == hare {
                break;
            }
            if generation >= max_generations {
                return StabilityAnalysis::Unsettled { generations: max_generations };
            }
            if power == period {
                tortoise = hare.clone();
                power *= 2;
                period = 0;
            }
            hare = engine.step(&hare);
            period += 1;
            generation += 1;
        }

        // Find where the cycle starts: walk two grids `period` apart until they meet
        let mut tortoise = grid.clone();
        let mut hare = engine.run(grid, period);
        let mut start = 0;
        while tortoise != hare {
            tortoise = engine.step(&tortoise);
            hare = engine.step(&hare);
            start += 1;
        }

        match period {
            1 => StabilityAnalysis::StillLife { generation: start },
            period => StabilityAnalysis::Oscillator { period, generation: start },
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, StabilityAnalysis::Unsettled { .. })
    }

    /// Cycle length once settled; extinct patterns and still lifes have period 1
    pub fn period(&self) -> Option<usize> {
        match self {
            StabilityAnalysis::Extinct { .. } | StabilityAnalysis::StillLife { .. } => Some(1),
            StabilityAnalysis::Oscillator { period, .. } => Some(*period),
            StabilityAnalysis::Unsettled { .. } => None,
        }
    }
}

impl fmt::Display for StabilityAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StabilityAnalysis::Extinct { generation } => write!(f, "extinct at generation {}", generation),
            StabilityAnalysis::StillLife { generation } => write!(f, "still life from generation {}", generation),
            StabilityAnalysis::Oscillator { period, generation } => {
                write!(f, "oscillator (period {}) from generation {}", period, generation)
            }
            StabilityAnalysis::Unsettled { generations } => write!(f, "unsettled after {} generations", generations),
        }
    }
}

/// Analysis result for one named pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternReport {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    pub living_cells: usize,
    pub density: f64,
    pub analysis: StabilityAnalysis,
}

impl PatternReport {
    pub fn new(name: impl Into<String>, grid: &Grid, analysis: StabilityAnalysis) -> Self {
        Self {
            name: name.into(),
            rows: grid.rows(),
            columns: grid.columns(),
            living_cells: grid.living_count(),
            density: grid.density(),
            analysis,
        }
    }
}

/// Classify a batch of patterns. Patterns are independent, so they are
/// spread across the rayon pool; each one is simulated on a single thread.
pub fn analyze_patterns(patterns: &[(String, Grid)], max_generations: usize) -> Vec<PatternReport> {
    let engine = GenerationEngine::new();
    patterns
        .par_iter()
        .map(|(name, grid)| {
            let analysis = StabilityAnalysis::analyze(&engine, grid, max_generations);
            info!("{}: {}", name, analysis);
            PatternReport::new(name.as_str(), grid, analysis)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(grid: &Grid, max_generations: usize) -> StabilityAnalysis {
        StabilityAnalysis::analyze(&GenerationEngine::new(), grid, max_generations)
    }

    #[test]
    fn test_block_is_still_life() {
        let block = Grid::with_living(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
        assert_eq!(analyze(&block, 10), StabilityAnalysis::StillLife { generation: 0 });
    }

    #[test]
    fn test_blinker_is_period_two() {
        let blinker = Grid::with_living(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        let analysis = analyze(&blinker, 10);
        assert_eq!(analysis, StabilityAnalysis::Oscillator { period: 2, generation: 0 });
        assert_eq!(analysis.period(), Some(2));
    }

    #[test]
    fn test_lonely_cell_dies() {
        let grid = Grid::with_living(3, 3, &[(1, 1)]).unwrap();
        assert_eq!(analyze(&grid, 10), StabilityAnalysis::Extinct { generation: 1 });
        assert_eq!(analyze(&Grid::new(2, 2).unwrap(), 0), StabilityAnalysis::Extinct { generation: 0 });
    }

    #[test]
    fn test_pattern_settles_later() {
        // An L-tromino becomes a block after one step
        let grid = Grid::with_living(4, 4, &[(1, 1), (1, 2), (2, 1)]).unwrap();
        assert_eq!(analyze(&grid, 10), StabilityAnalysis::StillLife { generation: 1 });
    }

    #[test]
    fn test_horizon_exhausted() {
        let glider = Grid::with_living(20, 20, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]).unwrap();
        let analysis = analyze(&glider, 8);
        assert_eq!(analysis, StabilityAnalysis::Unsettled { generations: 8 });
        assert!(!analysis.is_settled());
        assert_eq!(analysis.period(), None);
    }

    #[test]
    fn test_glider_ends_as_block_in_corner() {
        // With dead edges a glider runs into the corner and becomes a block
        let glider = Grid::with_living(6, 6, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]).unwrap();
        assert_eq!(analyze(&glider, 100), StabilityAnalysis::StillLife { generation: 15 });

        let settled = GenerationEngine::new().run(&glider, 15);
        assert_eq!(settled.living_cells(), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_long_cycle_start_and_period() {
        // A blinker plus a lone cell that dies after one step, so the
        // period-2 cycle only starts at generation 1.
        let grid = Grid::with_living(7, 7, &[(1, 2), (1, 3), (1, 4), (5, 0)]).unwrap();
        assert_eq!(analyze(&grid, 50), StabilityAnalysis::Oscillator { period: 2, generation: 1 });
    }

    #[test]
    fn test_large_horizon_on_settled_pattern() {
        let blinker = Grid::with_living(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        assert_eq!(
            analyze(&blinker, usize::MAX),
            StabilityAnalysis::Oscillator { period: 2, generation: 0 }
        );
    }

    #[test]
    fn test_analyze_patterns_keeps_order() {
        let patterns = vec![
            ("block".to_string(), Grid::with_living(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap()),
            ("dot".to_string(), Grid::with_living(3, 3, &[(1, 1)]).unwrap()),
        ];
        let reports = analyze_patterns(&patterns, 10);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "block");
        assert_eq!(reports[0].living_cells, 4);
        assert_eq!(reports[1].analysis, StabilityAnalysis::Extinct { generation: 1 });
    }
}
