//! Terminal pathfinding demo: scatters walls and weighted zones over a grid,
//! then runs breadth-first search and A* on it step by step.
//!
//! Run: cargo run --bin pathviz -- [--animate] [--seed N] [config.json]
//!
//! The optional config file is a JSON `SessionConfig`; missing fields take
//! their defaults. `RUST_LOG` raises or lowers the default `info` level.

use std::error::Error;
use std::io::Write;
use std::thread;

use log::info;
use pathviz_demos::{Scatter, log_builder, render, scatter, summary};
use pathviz_paths::{Algorithm, Session, SessionConfig, Status};
use rand::SeedableRng;

/// Redraw every this many steps when animating.
const FRAME_EVERY: usize = 4;

struct Args {
    animate: bool,
    seed: u64,
    config: Option<String>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        animate: false,
        seed: 42,
        config: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--animate" => args.animate = true,
            "--seed" => {
                let value = it.next().ok_or("--seed needs a value")?;
                args.seed = value.parse()?;
            }
            _ => args.config = Some(arg),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&str>) -> Result<SessionConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    let config: SessionConfig = serde_json::from_str(&text)?;
    info!("loaded config from {path}");
    Ok(config)
}

fn run(session: &mut Session, algorithm: Algorithm, animate: bool) -> Result<(), Box<dyn Error>> {
    let mut out = std::io::stdout().lock();
    session.run(algorithm)?;
    let mut steps = 0;
    while session.status() == Status::Running {
        session.step();
        steps += 1;
        if animate && steps % FRAME_EVERY == 0 {
            // Clear the screen and home the cursor.
            write!(out, "\x1b[2J\x1b[H{}", render(session.grid(), session.search()))?;
            out.flush()?;
            thread::sleep(session.step_interval() * FRAME_EVERY as u32);
        }
    }
    if animate {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    write!(out, "{}", render(session.grid(), session.search()))?;
    if let Some(search) = session.search() {
        writeln!(out, "{}", summary(search))?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    log_builder(std::env::var("RUST_LOG").ok().as_deref()).init();

    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;
    let mut session = Session::new(config)?;
    info!(
        "pathviz starting: {}x{} cells, seed {}",
        session.grid().width(),
        session.grid().height(),
        args.seed
    );

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    scatter(&mut session, &mut rng, Scatter::default())?;

    for algorithm in [Algorithm::Bfs, Algorithm::AStar] {
        run(&mut session, algorithm, args.animate)?;
    }
    if !session.config().search.weighting {
        session.set_weighting(true);
        info!(
            "weighted cells now cost {}",
            session.config().search.weight_multiplier
        );
        run(&mut session, Algorithm::AStar, args.animate)?;
    }
    Ok(())
}
