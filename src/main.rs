//! Command line driver for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use game_of_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{
        create_example_patterns, io::load_grids_from_directory, load_grid_from_file,
        save_grid_to_file, seeded_grid, GenerationEngine, Grid,
    },
    simulation::{analyze_patterns, save_generation, PatternReport, Simulation, StabilityAnalysis},
    utils::{ColorOutput, GridFormatter},
};
use log::{info, LevelFilter};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life on a fixed, non-wrapping grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed or load a grid and run it generation by generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Initial state file (overrides config and random seeding)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Grid rows when seeding randomly
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns when seeding randomly
        #[arg(long)]
        columns: Option<usize>,

        /// Random seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of generations to run
        #[arg(short, long)]
        generations: Option<usize>,

        /// Milliseconds between generations
        #[arg(short, long)]
        tick: Option<u64>,

        /// Ask before every generation
        #[arg(long)]
        interactive: bool,

        /// Save every generation to the output directory
        #[arg(long)]
        save: bool,

        /// Print grids with block glyphs
        #[arg(long)]
        compact: bool,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format for saved generations
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Advance a grid file a number of generations
    Step {
        /// Grid file to advance
        input: PathBuf,

        /// Number of generations
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Print every intermediate generation
        #[arg(long)]
        show_all: bool,

        /// Print grids with block glyphs
        #[arg(long)]
        compact: bool,

        /// Write the final grid here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a pattern file, or every pattern in a directory
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file or directory of `.txt` patterns
        path: PathBuf,

        /// Generations to look ahead (overrides config)
        #[arg(short, long)]
        max_generations: Option<usize>,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Visual,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Visual => OutputFormat::Visual,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config, input, rows, columns, seed, generations, tick,
            interactive, save, compact, output, format
        } => {
            let overrides = CliOverrides {
                rows,
                columns,
                seed,
                generations,
                tick_interval_ms: tick,
                interactive,
                input_file: input,
                output_dir: output,
                format: format.map(OutputFormat::from),
                save,
                compact,
            };
            run_command(&config, &overrides)
        }
        Commands::Step { input, generations, show_all, compact, output } => {
            step_command(&input, generations, show_all, compact, output.as_deref())
        }
        Commands::Analyze { config, path, max_generations, json } => {
            analyze_command(&config, &path, max_generations, json)
        }
        Commands::Setup { directory, force } => {
            setup_command(&directory, force)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    let grid = initial_grid(&settings)?;
    let mut simulation = Simulation::new(grid);
    show_generation(&simulation, &settings)?;

    if settings.driver.interactive {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut stdout = std::io::stdout();
        while prompt_proceed(&mut input, &mut stdout)? {
            simulation.step_once();
            show_generation(&simulation, &settings)?;
        }
    } else {
        let interval = Duration::from_millis(settings.driver.tick_interval_ms);
        simulation.play();
        for _ in 0..settings.driver.generations {
            std::thread::sleep(interval);
            if simulation.tick() {
                show_generation(&simulation, &settings)?;
            }
        }
        simulation.pause();
    }

    println!("{}", ColorOutput::success(&format!(
        "Stopped at generation {} with {} living cells",
        simulation.generation(),
        simulation.grid().living_count()
    )));

    Ok(())
}

/// Load the configured initial state, or seed one randomly
fn initial_grid(settings: &Settings) -> Result<Grid> {
    if let Some(ref path) = settings.input.initial_state_file {
        return load_grid_from_file(path);
    }

    info!(
        "seeding {}x{} grid with density {} (seed: {:?})",
        settings.grid.rows, settings.grid.columns, settings.seed.density, settings.seed.random_seed
    );
    seeded_grid(
        settings.grid.rows,
        settings.grid.columns,
        settings.seed.density,
        settings.seed.random_seed,
    )
    .context("Failed to seed initial grid")
}

fn show_generation(simulation: &Simulation, settings: &Settings) -> Result<()> {
    let grid = simulation.grid();
    println!("{}", ColorOutput::info(&GridFormatter::format_generation_header(simulation.generation(), grid)));
    print!("{}", GridFormatter::format_grid(grid, settings.output.compact));

    if settings.output.save_intermediate {
        let path = save_generation(grid, simulation.generation(), &settings.output.output_directory, settings.output.format)?;
        info!("saved {}", path.display());
    }
    Ok(())
}

/// Ask whether to continue; anything but an answer starting with `y` stops
fn prompt_proceed<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "Proceed to next generation? (Y/N): ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer).context("Failed to read answer")? == 0 {
        return Ok(false);
    }
    Ok(matches!(answer.trim_start().chars().next(), Some('y' | 'Y')))
}

fn step_command(
    input: &Path,
    generations: usize,
    show_all: bool,
    compact: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mut grid = load_grid_from_file(input)?;
    let engine = GenerationEngine::new();

    if show_all {
        let mut scratch = grid.clone();
        println!("{}", GridFormatter::format_generation_header(0, &grid));
        print!("{}", GridFormatter::format_grid(&grid, compact));
        for generation in 1..=generations {
            engine.advance(&mut grid, &mut scratch)?;
            println!("{}", GridFormatter::format_generation_header(generation as u64, &grid));
            print!("{}", GridFormatter::format_grid(&grid, compact));
        }
    } else {
        grid = engine.run(&grid, generations);
        println!("{}", GridFormatter::format_generation_header(generations as u64, &grid));
        print!("{}", GridFormatter::format_grid(&grid, compact));
    }

    if let Some(path) = output {
        save_grid_to_file(&grid, path)?;
        println!("{}", ColorOutput::success(&format!("Saved to {}", path.display())));
    }

    Ok(())
}

fn analyze_command(config_path: &Path, path: &Path, max_generations: Option<usize>, json: bool) -> Result<()> {
    let settings = Settings::load_or_default(config_path)?;
    let horizon = max_generations.unwrap_or(settings.driver.analysis_horizon);

    let reports: Vec<PatternReport> = if path.is_dir() {
        let patterns = load_grids_from_directory(path)?;
        if patterns.is_empty() {
            println!("{}", ColorOutput::warning(&format!("No patterns found in {}", path.display())));
            return Ok(());
        }
        analyze_patterns(&patterns, horizon)
    } else {
        let grid = load_grid_from_file(path)?;
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("pattern");
        let analysis = StabilityAnalysis::analyze(&GenerationEngine::new(), &grid, horizon);
        vec![PatternReport::new(name, &grid, analysis)]
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?);
    } else {
        println!("{}", GridFormatter::format_report_table(&reports));
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    let examples_dir = config_dir.join("examples");

    // Reproducible console run, prompting before every generation
    let mut console = Settings::default();
    console.seed.random_seed = Some(27);
    console.driver.interactive = true;
    console.to_file(&examples_dir.join("console.yaml"))?;

    // Timed glider run saving every generation
    let mut glider = Settings::default();
    // Resolved against config/examples/ when loaded
    glider.input.initial_state_file = Some(PathBuf::from("../../patterns/glider.txt"));
    glider.driver.generations = 20;
    glider.output.save_intermediate = true;
    glider.to_file(&examples_dir.join("glider.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life",
            "run",
            "--config", "test.yaml",
            "--generations", "5",
            "--seed", "27",
            "--format", "json",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["game_of_life", "step", "grid.txt", "-g", "3", "--compact"]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["game_of_life", "step"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_prompt_proceed() {
        let mut sink = Vec::new();
        assert!(prompt_proceed(&mut Cursor::new("y\n"), &mut sink).unwrap());
        assert!(prompt_proceed(&mut Cursor::new("Yes\n"), &mut sink).unwrap());
        assert!(!prompt_proceed(&mut Cursor::new("n\n"), &mut sink).unwrap());
        assert!(!prompt_proceed(&mut Cursor::new(""), &mut sink).unwrap());
        assert!(String::from_utf8(sink).unwrap().starts_with("Proceed to next generation? (Y/N): "));
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/console.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());

        let console = Settings::from_file(&temp_dir.path().join("config/examples/console.yaml")).unwrap();
        assert_eq!(console.seed.random_seed, Some(27));
        assert!(console.driver.interactive);

        // Loads from any working directory
        let glider = Settings::from_file(&temp_dir.path().join("config/examples/glider.yaml")).unwrap();
        let input = glider.input.initial_state_file.unwrap();
        assert!(input.exists());
        assert_eq!(load_grid_from_file(&input).unwrap().living_count(), 5);
    }

    #[test]
    fn test_step_command_writes_result() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("blinker.txt");
        let output = temp_dir.path().join("out/blinker_1.txt");
        std::fs::write(&input, "---\n111\n---\n").unwrap();

        step_command(&input, 1, true, false, Some(output.as_path())).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "-1-\n-1-\n-1-\n");
    }

    #[test]
    fn test_initial_grid_seeded() {
        let mut settings = Settings::default();
        settings.grid.rows = 8;
        settings.grid.columns = 12;
        settings.seed.random_seed = Some(27);

        let a = initial_grid(&settings).unwrap();
        let b = initial_grid(&settings).unwrap();
        assert_eq!(a.dimensions(), (8, 12));
        assert_eq!(a, b);
    }
}
