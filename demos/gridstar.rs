//! Command-line grid path finder.
//!
//! Run with: `cargo run --bin gridstar -- --preset wall --render`

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gridstar_core::{Grid, Position};
use gridstar_demos::{
    Preset, load_grid, parse_position, parse_size, random_grid, render_grid, write_outcome_json,
    write_path,
};
use gridstar_paths::{DuplicatePolicy, Heuristic, Movement, Search, SearchConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum MovementArg {
    Eight,
    Four,
}

impl From<MovementArg> for Movement {
    fn from(value: MovementArg) -> Self {
        match value {
            MovementArg::Eight => Movement::EightWay,
            MovementArg::Four => Movement::FourWay,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum HeuristicArg {
    SquaredEuclidean,
    Manhattan,
    Chebyshev,
    Zero,
}

impl From<HeuristicArg> for Heuristic {
    fn from(value: HeuristicArg) -> Self {
        match value {
            HeuristicArg::SquaredEuclidean => Heuristic::SquaredEuclidean,
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Chebyshev => Heuristic::Chebyshev,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum DuplicatesArg {
    Keep,
    Replace,
}

impl From<DuplicatesArg> for DuplicatePolicy {
    fn from(value: DuplicatesArg) -> Self {
        match value {
            DuplicatesArg::Keep => DuplicatePolicy::Keep,
            DuplicatesArg::Replace => DuplicatePolicy::Replace,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(version)]
/// Find a path between two cells of an obstacle grid with A*.
struct Cli {
    #[arg(
        help = "Grid file: text rows of '.'/'#' or 0/1, or a JSON array of rows when ending in .json",
        conflicts_with_all = ["preset", "random"]
    )]
    grid: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "Use a built-in grid (default: wall)",
        short = 'p',
        long = "preset",
        id = "preset",
        conflicts_with = "random"
    )]
    preset: Option<Preset>,
    #[arg(
        help = "Generate a random ROWSxCOLS grid",
        long = "random",
        id = "random",
        value_parser = parse_size
    )]
    random: Option<(i32, i32)>,
    #[arg(
        help = "Probability that a random cell is blocked",
        long = "density",
        default_value_t = 0.3
    )]
    density: f64,
    #[arg(help = "Seed for the random grid", long = "seed", default_value_t = 0)]
    seed: u64,
    #[arg(help = "Start cell as ROW,COL", short = 's', long = "start", value_parser = parse_position)]
    start: Option<Position>,
    #[arg(help = "Goal cell as ROW,COL", short = 'g', long = "goal", value_parser = parse_position)]
    goal: Option<Position>,
    #[arg(value_enum, help = "Allowed moves", long = "movement", default_value_t = MovementArg::Eight)]
    movement: MovementArg,
    #[arg(
        value_enum,
        help = "Remaining-cost estimate",
        long = "heuristic",
        default_value_t = HeuristicArg::SquaredEuclidean
    )]
    heuristic: HeuristicArg,
    #[arg(
        value_enum,
        help = "Handling of repeated frontier entries for one cell",
        long = "duplicates",
        default_value_t = DuplicatesArg::Keep
    )]
    duplicates: DuplicatesArg,
    #[arg(help = "Give up after this many expansions", long = "max-expansions")]
    max_expansions: Option<usize>,
    #[arg(value_enum, help = "Output format", short = 'f', long = "format", default_value_t = Format::Text)]
    format: Format,
    #[arg(help = "Draw the grid with the path before the output", short = 'r', long = "render")]
    render: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            movement: self.movement.into(),
            heuristic: self.heuristic.into(),
            duplicates: self.duplicates.into(),
            max_expansions: self.max_expansions,
        }
    }

    /// Build the grid and pick the endpoints.
    fn problem(&self) -> Result<(Grid, Position, Position), Box<dyn Error>> {
        if let Some(path) = &self.grid {
            let grid = load_grid(path)?;
            info!("loaded {}x{} grid from {}", grid.rows(), grid.cols(), path.display());
            let (start, goal) = self.endpoints(&grid);
            return Ok((grid, start, goal));
        }
        if let Some((rows, cols)) = self.random {
            let start = self.start.unwrap_or(Position::ZERO);
            let goal = self.goal.unwrap_or(Position::new(rows - 1, cols - 1));
            let grid = random_grid(rows, cols, self.density, self.seed, &[start, goal])?;
            info!(
                "generated {rows}x{cols} grid, density {}, seed {}, {} open",
                self.density,
                self.seed,
                grid.count_open()
            );
            return Ok((grid, start, goal));
        }
        let preset = self.preset.unwrap_or(Preset::Wall);
        debug!("using preset {preset:?}");
        Ok((
            preset.grid()?,
            self.start.unwrap_or(preset.start()),
            self.goal.unwrap_or(preset.goal()),
        ))
    }

    fn endpoints(&self, grid: &Grid) -> (Position, Position) {
        (
            self.start.unwrap_or(Position::ZERO),
            self.goal.unwrap_or(Position::new(grid.rows() - 1, grid.cols() - 1)),
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str())),
        )
        .with_ansi(cli.colour)
        .with_writer(io::stderr)
        .compact()
        .init();

    let stdout = io::stdout();
    let result = run(&cli, &mut stdout.lock());
    if let Err(e) = &result {
        eprintln!("gridstar: {e}");
    }
    ExitCode::from(exit_status(&result))
}

/// 0 when a path was found, 1 when none exists, 2 on invalid input.
fn exit_status(result: &Result<bool, Box<dyn Error>>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Returns whether a path was found.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<bool, Box<dyn Error>> {
    let (grid, start, goal) = cli.problem()?;
    let config = cli.config();
    debug!(?config, %start, %goal, "searching");

    let outcome = Search::new(config).run(&grid, start, goal)?;
    info!(
        expanded = outcome.stats.expanded,
        generated = outcome.stats.generated,
        max_frontier = outcome.stats.max_frontier,
        elapsed_ms = outcome.elapsed.as_secs_f64() * 1000.0,
        "search finished"
    );

    if cli.render {
        render_grid(&mut *out, &grid, start, goal, outcome.path.as_deref(), cli.colour)?;
        writeln!(out)?;
    }
    match cli.format {
        Format::Text => write_path(&mut *out, outcome.path.as_deref())?,
        Format::Json => write_outcome_json(&mut *out, &outcome)?,
    }
    Ok(outcome.is_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gridstar").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(cli: &Cli) -> (Result<bool, Box<dyn Error>>, String) {
        let mut buf = Vec::new();
        let result = run(cli, &mut buf);
        (result, String::from_utf8(buf).unwrap())
    }

    /// Write `contents` to a fresh file and return its path.
    fn grid_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gridstar-cli-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_to_wall_preset() {
        let c = cli(&[]);
        let (grid, start, goal) = c.problem().unwrap();
        assert_eq!(grid, Preset::Wall.grid().unwrap());
        assert_eq!((start, goal), (Position::new(0, 0), Position::new(7, 6)));

        let (result, out) = run_to_string(&c);
        assert!(result.unwrap());
        assert_eq!(out, "(0, 0)\n(1, 1)\n(2, 2)\n(3, 3)\n(4, 3)\n(5, 4)\n(6, 5)\n(7, 6)\n");
        assert_eq!(exit_status(&Ok(true)), 0);
    }

    #[test]
    fn file_grid_uses_corner_endpoints() {
        let path = grid_file("corners.txt", "...\n.#.\n...\n..#\n");
        let c = cli(&[path.to_str().unwrap()]);
        let (grid, start, goal) = c.problem().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (4, 3));
        assert_eq!((start, goal), (Position::new(0, 0), Position::new(3, 2)));
    }

    #[test]
    fn random_grid_uses_corner_endpoints() {
        let c = cli(&["--random", "4x5", "--density", "0.9", "--seed", "3"]);
        let (grid, start, goal) = c.problem().unwrap();
        assert_eq!((start, goal), (Position::new(0, 0), Position::new(3, 4)));
        assert!(grid.is_open(start) && grid.is_open(goal));

        let c = cli(&["--random", "4x5", "--start", "1,1", "--goal", "2,2"]);
        let (_, start, goal) = c.problem().unwrap();
        assert_eq!((start, goal), (Position::new(1, 1), Position::new(2, 2)));
    }

    #[test]
    fn unreachable_goal_exits_one() {
        let path = grid_file("split.txt", ".#.\n.#.\n.#.\n");
        let c = cli(&[path.to_str().unwrap(), "--goal", "0,2"]);
        let (result, out) = run_to_string(&c);
        fs::remove_file(&path).unwrap();
        assert_eq!(out, "No path found.\n");
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn invalid_input_exits_two() {
        let (result, out) = run_to_string(&cli(&["--goal", "10,10"]));
        assert!(result.as_ref().unwrap_err().to_string().contains("outside grid bounds"));
        assert!(out.is_empty());
        assert_eq!(exit_status(&result), 2);

        let (result, _) = run_to_string(&cli(&["--max-expansions", "2"]));
        assert_eq!(exit_status(&result), 2);

        let missing = std::env::temp_dir().join("gridstar-cli-definitely-missing.txt");
        let (result, _) = run_to_string(&cli(&[missing.to_str().unwrap()]));
        assert_eq!(exit_status(&result), 2);
    }

    #[test]
    fn bad_arguments_are_usage_errors() {
        for args in [
            &["--start", "3"][..],
            &["--random", "0x4"][..],
            &["--preset", "open", "--random", "3x3"][..],
            &["grid.txt", "--preset", "open"][..],
        ] {
            let argv = std::iter::once("gridstar").chain(args.iter().copied());
            let Err(err) = Cli::try_parse_from(argv) else {
                panic!("{args:?} should be rejected");
            };
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn json_and_render_output() {
        let c = cli(&["--preset", "open", "--goal", "2,2", "--format", "json", "--render"]);
        let (result, out) = run_to_string(&c);
        assert!(result.unwrap());
        let (map, json) = out.split_once("\n\n").unwrap();
        assert!(map.starts_with("S"));
        let v: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(v["path"].as_array().unwrap().len(), 3);
        assert!(v["elapsed"].is_object());
    }

    #[test]
    fn options_reach_the_search_config() {
        let c = cli(&["--movement", "four", "--heuristic", "manhattan", "--duplicates", "replace"]);
        assert_eq!(
            c.config(),
            SearchConfig::default()
                .with_movement(Movement::FourWay)
                .with_heuristic(Heuristic::Manhattan)
                .with_duplicates(DuplicatePolicy::Replace)
        );
    }
}
