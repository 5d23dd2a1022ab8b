use std::thread;

mod console;
mod options;
mod stats;

use anyhow::{Context, Result};
use lifelike::{Automaton, PatternDescriptor, RuleSet, StartMode, rle};
use rand::{SeedableRng, rngs::StdRng};
use stats::Recorder;

fn start_mode(args: &options::Args) -> Result<StartMode> {
    if let Some(file) = args.pattern_file() {
        let pattern = std::fs::read_to_string(&file)
            .with_context(|| format!("read pattern file {file}"))?;
        return Ok(StartMode::Pattern(PatternDescriptor::new(
            pattern,
            args.pattern_origin(),
        )));
    }
    Ok(StartMode::from_selector(&args.mode()))
}

fn main() -> Result<()> {
    simple_logger::init()?;
    let Some(args) = options::Args::from_env() else {
        // --help already printed usage
        return Ok(());
    };

    let rules = RuleSet::parse_strict(&args.rule())?;
    let mode = start_mode(&args)?;
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut game = Automaton::new(args.size(), rules, mode, &mut rng)?;
    log::info!(
        "seeded {0}x{0} board, population {1}",
        game.size(),
        game.population()
    );

    let mut console = if args.console() {
        Some(console::ConsoleRender::new()?)
    } else {
        None
    };
    let sleep = args.sleep();
    let parallel = args.multithreading();

    let mut stats = stats::SwitchRecorder::new(game.population(), args.stats_file().is_some());
    'generations: for _ in 0..args.generations() {
        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events(game.size())? {
                if let console::ConsoleCommand::Exit = cmd {
                    break 'generations;
                }
            }
            console.render(&game)?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                log::info!("{}", report);
            }
        }

        // compute the next generation
        if parallel {
            game.step_parallel();
        } else {
            game.step();
        }
        stats.record(game.population());
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);

    if let Some(file) = args.output_file() {
        let encoded = rle::encode(game.grid());
        std::fs::write(&file, encoded).with_context(|| format!("write final grid to {file}"))?;
    }
    if let Some(file) = args.stats_file() {
        stats
            .save(&file)
            .with_context(|| format!("write stats csv to {file}"))?;
    }

    log::info!(
        "stopped after {} generations, population {}",
        game.generation(),
        game.population()
    );
    Ok(())
}
