use std::{io, thread};

mod console;
mod engine;
mod error;
mod options;
mod stats;

use stats::Recorder;

fn main() -> io::Result<()> {
    let Some(args) = options::Args::from_env() else {
        panic!("invalid arguments");
    };

    // seed and construct the grid based on args
    let (width, height) = args.grid_size();
    let seed = args.fill_mode().create_seed(width, height);
    let mut grid = engine::TorusGrid::new(width, height, &seed).expect("seed covers the grid");
    println!("alive: {}", grid.alive_count());

    let mut console = if args.console() {
        Some(console::ConsoleRender::new(args.show_generation())?)
    } else {
        None
    };
    let sleep = args.sleep();
    let parallel = args.multithreading();

    let mut stats = stats::SwitchRecorder::new(grid.alive_count(), args.stats_file().is_some());
    'generations: for _ in 0..args.generations() {
        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    console::ConsoleCommand::Exit => break 'generations,
                    _ => {}
                }
            }
            console.render(&grid)?;
        }

        // report metrics every 500ms or always if in console mode
        if stats.has_report(console.is_some()) {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                println!("{}", report);
            }
        }

        // compute the next generation
        if parallel {
            grid.advance_parallel();
        } else {
            grid.advance();
        }
        stats.record(grid.alive_count());
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);

    if let Some(file_name) = args.stats_file() {
        stats.save(file_name)?;
    }

    Ok(())
}
