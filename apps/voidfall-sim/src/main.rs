use clap::{Parser, Subcommand};
use glam::DVec3;
use tracing_subscriber::EnvFilter;
use voidfall_common::Dimension;
use voidfall_crossing::{COOLDOWN_TICKS, RULES, VoidCrossing};
use voidfall_host::Player;
use voidfall_host::mock::{MockHost, MockPlayer};

#[derive(Parser)]
#[command(name = "voidfall-sim", about = "Stand-in host harness for the void crossing plugin")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print plugin constants and the crossing decision table
    Info,
    /// Drop scripted players through the void thresholds and report crossings
    Run {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "200")]
        ticks: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("voidfall-sim v{}", env!("CARGO_PKG_VERSION"));
            println!("cooldown: {COOLDOWN_TICKS} ticks");
            println!("crossing table:");
            for rule in RULES {
                println!(
                    "  {:?} {:?} -> {:?}",
                    rule.dimension, rule.trigger, rule.destination
                );
            }
        }
        Commands::Run { ticks } => {
            run(ticks);
        }
    }

    Ok(())
}

/// One scripted actor: a player plus a per-tick vertical velocity, applied
/// until the plugin relocates them.
struct Actor {
    name: &'static str,
    player: MockPlayer,
    velocity_y: f64,
}

fn run(ticks: u64) {
    let mut host = MockHost::standard();
    let mut plugin = VoidCrossing::new();

    let mut actors = vec![
        Actor {
            name: "overworld-faller",
            player: MockPlayer::at(Dimension::Overworld, 100.0, 10.0, 50.0),
            velocity_y: -3.0,
        },
        Actor {
            name: "nether-climber",
            player: MockPlayer::at(Dimension::Nether, 10.0, 100.0, -3.0),
            velocity_y: 2.0,
        },
        Actor {
            name: "nether-faller",
            player: MockPlayer::at(Dimension::Nether, -12.0, 40.0, 30.0),
            velocity_y: -2.0,
        },
        Actor {
            name: "creative-control",
            player: MockPlayer::at(Dimension::Overworld, 0.0, 10.0, 0.0).creative(),
            velocity_y: -3.0,
        },
    ];

    for _ in 0..ticks {
        host.advance_all(1);
        for actor in actors.iter_mut() {
            // Fall or climb until the plugin moves the player somewhere safe.
            if actor.player.relocations().is_empty() {
                let pos = actor.player.position();
                actor
                    .player
                    .set_position(DVec3::new(pos.x, pos.y + actor.velocity_y, pos.z));
            }
        }
        plugin.on_server_tick(&mut host, actors.iter_mut().map(|a| &mut a.player));
    }

    println!("after {ticks} ticks:");
    for actor in &actors {
        match actor.player.relocations().first() {
            Some((dimension, position, _)) => println!(
                "  {}: crossed into {:?} at ({:.2}, {:.2}, {:.2})",
                actor.name, dimension, position.x, position.y, position.z
            ),
            None => println!(
                "  {}: no crossing (at {:?} y={:.1})",
                actor.name,
                actor.player.dimension(),
                actor.player.position().y
            ),
        }
    }
}
