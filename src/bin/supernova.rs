use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use supernova::{
    CpuPreview, ManualClock, NullAdapter, Phase, Player, Scene, ScriptedScroll, ScrollScript,
    SequenceConfig, TimelineState,
};

#[derive(Parser, Debug)]
#[command(name = "supernova", version)]
struct Cli {
    /// Log phase transitions and lock latches to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scroll script and print one JSON line per tick.
    Trace(TraceArgs),
    /// Scroll to an offset, let the sequence settle, and write a preview PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input scroll script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Sequence config JSON (defaults to the built-in sequence).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Target scroll offset in [0, 1].
    #[arg(long)]
    offset: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Sequence config JSON (defaults to the built-in sequence).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Frames spent scrolling from 0 to the target (at 60 fps).
    #[arg(long, default_value_t = 120)]
    ramp_ticks: u32,

    /// Seconds to hold the target so the recoil and locks settle.
    #[arg(long, default_value_t = 2.0)]
    hold_secs: f64,
}

#[derive(serde::Serialize)]
struct TraceLine {
    tick: u64,
    at_secs: f64,
    phase: Phase,
    effective_offset: f64,
    black_hole_scale: f64,
    black_hole_visible: bool,
    black_hole_locked: bool,
    inside_locked: bool,
    recoiling: bool,
    position_z: f64,
    caption: &'static str,
}

impl TraceLine {
    fn new(tick: u64, at_secs: f64, s: &TimelineState) -> Self {
        Self {
            tick,
            at_secs,
            phase: s.phase,
            effective_offset: s.effective_offset,
            black_hole_scale: s.black_hole_scale,
            black_hole_visible: s.black_hole_visible,
            black_hole_locked: s.black_hole_locked,
            inside_locked: s.inside_locked,
            recoiling: s.recoiling,
            position_z: s.group.position_z,
            caption: s.phase.caption(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SequenceConfig> {
    match path {
        Some(p) => SequenceConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(SequenceConfig::default()),
    }
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let script = ScrollScript::from_path(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;

    let mut player = Player::new(Scene::new(&cfg)?);
    let mut scroll = ScriptedScroll::new(script);
    let clock = ManualClock::new();
    let mut adapter = NullAdapter;

    let mut out = std::io::stdout().lock();
    while let Some(at) = scroll.next_time() {
        clock.set(at);
        let state = player.step(&mut scroll, &clock, &mut adapter);
        let line = TraceLine::new(player.scene().ticks(), at.as_secs_f64(), &state);
        serde_json::to_writer(&mut out, &line)?;
        std::io::Write::write_all(&mut out, b"\n")?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let script = ScrollScript::ramp(args.offset, args.ramp_ticks, 60.0, args.hold_secs);

    let mut player = Player::new(Scene::new(&cfg)?);
    let mut scroll = ScriptedScroll::new(script);
    let clock = ManualClock::new();
    let mut preview = CpuPreview::new(args.width, args.height)?;

    let mut last = None;
    while let Some(at) = scroll.next_time() {
        clock.set(at);
        last = Some(player.step(&mut scroll, &clock, &mut preview));
    }
    if player.draw_failures() > 0 {
        anyhow::bail!("{} preview frames failed to render", player.draw_failures());
    }

    let frame = preview
        .into_frame()
        .context("script produced no frames")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    if let Some(state) = last {
        eprintln!(
            "wrote {} ({:?}, offset {:.3})",
            args.out.display(),
            state.phase,
            state.effective_offset
        );
    }
    Ok(())
}
