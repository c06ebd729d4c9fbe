mod interactive;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use langton_core::{Ant, Direction, Field, Pattern, Simulation};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PatternArg {
    AllWhite,
    AllBlack,
    Checkerboard,
    HorizontalStripes,
    Random,
}

impl From<PatternArg> for Pattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::AllWhite => Pattern::AllWhite,
            PatternArg::AllBlack => Pattern::AllBlack,
            PatternArg::Checkerboard => Pattern::Checkerboard,
            PatternArg::HorizontalStripes => Pattern::HorizontalStripes,
            PatternArg::Random => Pattern::Random,
        }
    }
}

impl From<Pattern> for PatternArg {
    fn from(pattern: Pattern) -> Self {
        match pattern {
            Pattern::AllWhite => PatternArg::AllWhite,
            Pattern::AllBlack => PatternArg::AllBlack,
            Pattern::Checkerboard => PatternArg::Checkerboard,
            Pattern::HorizontalStripes => PatternArg::HorizontalStripes,
            Pattern::Random => PatternArg::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    North,
    West,
    South,
    East,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::North => Direction::North,
            DirectionArg::West => Direction::West,
            DirectionArg::South => Direction::South,
            DirectionArg::East => Direction::East,
        }
    }
}

/// Langton's Ant on a toroidal grid.
#[derive(Parser, Debug)]
#[command(name = "langton")]
struct Args {
    /// Grid width (columns).
    #[arg(long, default_value_t = 82)]
    width: usize,
    /// Grid height (rows).
    #[arg(long, default_value_t = 101)]
    height: usize,
    /// Starting field configuration.
    #[arg(long, value_enum, default_value_t = PatternArg::AllBlack)]
    pattern: PatternArg,
    /// Starting row of the ant (defaults to the grid center).
    #[arg(long)]
    row: Option<usize>,
    /// Starting column of the ant (defaults to the grid center).
    #[arg(long)]
    col: Option<usize>,
    /// Starting facing direction.
    #[arg(long, value_enum, default_value_t = DirectionArg::North)]
    direction: DirectionArg,
    /// Total number of steps to run.
    #[arg(long, default_value_t = 10_000)]
    steps: usize,
    /// Steps executed between frames (1 = render after every step).
    #[arg(long, default_value_t = 1)]
    updates_per_frame: usize,
    /// Seed for the random pattern; absent, one is drawn from entropy and
    /// printed so the run can be reproduced.
    #[arg(long)]
    seed: Option<u64>,
    /// File receiving the live-cell count after every step, one per line.
    #[arg(long, default_value = "alive.txt")]
    output: PathBuf,
    /// Optional JSON run-summary path.
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Print the grid after every frame.
    #[arg(long)]
    render: bool,
    /// Prompt for pattern, start position, direction, and updates per frame.
    #[arg(long)]
    interactive: bool,
}

fn render(sim: &Simulation) {
    let ant = sim.ant();
    let mut frame = String::with_capacity((sim.field().width() + 1) * sim.field().height());
    for (row, cells) in sim.field().rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            frame.push(if (row, col) == (ant.row, ant.col) {
                '@'
            } else if cell == 1 {
                '#'
            } else {
                '.'
            });
        }
        frame.push('\n');
    }
    println!("{frame}");
}

fn write_live_history(path: &Path, history: &[usize]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for count in history {
        writeln!(writer, "{count}")?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut args = Args::parse();

    if args.width == 0 || args.height == 0 {
        bail!("grid dimensions must be positive");
    }

    if args.interactive {
        interactive::configure(&mut args)?;
    }
    if !(1..=100).contains(&args.updates_per_frame) {
        bail!("updates per frame must be between 1 and 100");
    }
    if args.steps == 0 {
        bail!("steps must be positive");
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    println!("seed: {seed}");
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let field = Field::generate(args.pattern.into(), args.width, args.height, &mut rng)
        .context("failed to build the starting field")?;

    let row = args.row.unwrap_or(args.height / 2);
    let col = args.col.unwrap_or(args.width / 2);
    if row >= args.height || col >= args.width {
        bail!(
            "start position ({row}, {col}) is out of bounds for a {}x{} grid",
            args.width,
            args.height
        );
    }

    let ant = Ant::new(row, col, args.direction.into());
    let mut sim = Simulation::try_new(field, ant).context("failed to start the simulation")?;

    let mut remaining = args.steps;
    while remaining > 0 {
        let batch = remaining.min(args.updates_per_frame);
        sim.try_run(batch)?;
        remaining -= batch;
        if args.render {
            println!("step {}", sim.step_index());
            render(&sim);
        }
    }

    write_live_history(&args.output, sim.live_history())?;
    println!(
        "{} steps, {} live cells, counts written to {}",
        sim.step_index(),
        sim.field().live_count(),
        args.output.display()
    );

    if let Some(path) = &args.summary {
        let file = File::create(path)
            .with_context(|| format!("failed to create summary file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &sim.summary())?;
        println!("summary written to {}", path.display());
    }

    Ok(())
}
