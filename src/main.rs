//! Lane Runner desktop harness
//!
//! Runs the firmware loop against in-memory drivers and prints the display.
//!
//! Usage:
//!   cargo run -- --ticks 5000 --seed 42 --period-ms 0
//!   RUST_LOG=debug cargo run -- --ticks 2000 --dump-state

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use lane_runner::Tuning;
use lane_runner::platform::host::{BufferDisplay, BufferLeds, FreeRunning, RandomButtons, Sleeping};
use lane_runner::platform::{Console, TickSource};

#[derive(Parser, Debug)]
#[command(name = "lane-runner")]
#[command(about = "Run the two-lane game loop against a simulated display")]
struct Args {
    /// Number of ticks to run
    #[arg(long, default_value_t = 2000)]
    ticks: u64,

    /// Seed for the attract-mode button bot; without it no buttons are pressed
    #[arg(long)]
    seed: Option<u64>,

    /// Chance per tick that the bot presses a button
    #[arg(long, default_value_t = 0.02, value_parser = parse_chance)]
    press_chance: f64,

    /// Tuning JSON (partial documents fill in defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Tick period in milliseconds; 0 runs as fast as possible
    #[arg(long, default_value_t = 0)]
    period_ms: u64,

    /// Print the final game state as JSON
    #[arg(long)]
    dump_state: bool,
}

fn parse_chance(s: &str) -> std::result::Result<f64, String> {
    let chance: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&chance) {
        Ok(chance)
    } else {
        Err(format!("{chance} is not a probability in 0..=1"))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Tuning::from_json(&json).with_context(|| format!("malformed tuning in {}", path.display()))?
        }
        None => Tuning::default(),
    };

    if args.period_ms == 0 {
        run(FreeRunning, &args, tuning)
    } else {
        run(Sleeping::new(Duration::from_millis(args.period_ms)), &args, tuning)
    }
}

fn run<T: TickSource>(ticks: T, args: &Args, tuning: Tuning) -> Result<()> {
    let chance = if args.seed.is_some() { args.press_chance } else { 0.0 };
    let buttons = RandomButtons::new(args.seed.unwrap_or_default(), chance);
    let mut console = Console::new(ticks, buttons, BufferDisplay::default(), BufferLeds::default(), tuning);

    log::info!("Lane Runner starting: {} ticks", args.ticks);

    let mut games = 1u32;
    for n in 0..args.ticks {
        console.buttons_mut().roll();
        let out = console.step();
        if out.restarted {
            games += 1;
        }

        if console.display_mut().take_dirty() {
            let display = console.display();
            let leds = console.leds();
            println!(
                "[{n:>6}] |{}| leds {:?}",
                display.row(0).unwrap_or_default(),
                leds.levels
            );
            println!("         |{}|", display.row(1).unwrap_or_default());
        }
    }

    let state = console.state();
    println!();
    println!("=== RESULT ===");
    println!("  Games:      {}", games);
    println!("  Shields:    {}", state.player.shields);
    println!("  Ammo:       {}", state.player.ammo);
    println!("  Destroyed:  {}", state.player.destroyed);

    if args.dump_state {
        let json = serde_json::to_string_pretty(state).context("failed to serialize state")?;
        println!("{json}");
    }
    Ok(())
}
