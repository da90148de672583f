use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flapboard", version)]
struct Cli {
    /// Log engine activity to stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a board and print its last frame.
    Render(SimArgs),
    /// Simulate a board and print every frame.
    Frames(FramesArgs),
    /// Run the built-in demo board until it settles.
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct SimArgs {
    /// Input board JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulated seconds.
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    sim: SimArgs,

    /// Print one JSON object per frame instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Give up after this many simulated seconds.
    #[arg(long, default_value_t = 60.0)]
    max_seconds: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_board_json(path: &Path) -> anyhow::Result<flapboard::BoardConfig> {
    let f = File::open(path).with_context(|| format!("open board '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: flapboard::BoardConfig =
        serde_json::from_reader(r).with_context(|| "parse board JSON")?;
    Ok(config)
}

/// Load the board and work out how many frames `seconds` covers.
fn prepare(args: &SimArgs) -> anyhow::Result<(flapboard::Board, flapboard::Fps, u64)> {
    if !args.seconds.is_finite() || args.seconds < 0.0 {
        anyhow::bail!("--seconds must be a finite, non-negative number");
    }
    let fps = flapboard::Fps::new(args.fps, 1)?;
    let config = read_board_json(&args.in_path)?;
    config
        .validate()
        .with_context(|| format!("validate board '{}'", args.in_path.display()))?;
    let board = flapboard::Board::new(&config)?;
    Ok((board, fps, fps.secs_to_frames_floor(args.seconds)))
}

fn cmd_render(args: SimArgs) -> anyhow::Result<()> {
    let (mut board, fps, frames) = prepare(&args)?;
    let dt = fps.frame_duration_secs();
    for _ in 0..frames {
        board.advance(dt)?;
    }

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", board.render_text()).context("write stdout")?;
    if !board.is_settled() {
        eprintln!(
            "board still moving after {:.3}s ({frames} frames)",
            board.elapsed_secs()
        );
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (mut board, fps, frames) = prepare(&args.sim)?;
    let dt = fps.frame_duration_secs();
    let mut out = std::io::stdout().lock();

    for i in 0..=frames {
        if i > 0 {
            board.advance(dt)?;
        }
        let frame = board.snapshot(flapboard::FrameIndex(i));
        if args.json {
            let line = serde_json::to_string(&frame).context("serialize frame")?;
            writeln!(out, "{line}").context("write stdout")?;
        } else {
            writeln!(
                out,
                "-- frame {} t={:.3}s{}",
                i,
                frame.time_secs,
                if frame.settled { " settled" } else { "" }
            )
            .context("write stdout")?;
            writeln!(out, "{}", frame.to_text()).context("write stdout")?;
        }
    }
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    if !args.max_seconds.is_finite() || args.max_seconds < 0.0 {
        anyhow::bail!("--max-seconds must be a finite, non-negative number");
    }
    let fps = flapboard::Fps::new(args.fps, 1)?;
    let mut board = flapboard::Board::new(&flapboard::BoardConfig::demo())?;
    let frames = board.run_until_settled(fps, fps.secs_to_frames_floor(args.max_seconds))?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", board.render_text()).context("write stdout")?;
    eprintln!(
        "settled={} after {frames} frames ({:.3}s)",
        board.is_settled(),
        board.elapsed_secs()
    );
    Ok(())
}
