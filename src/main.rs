use std::io::{stdout, BufWriter};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_sweeper::canvas::{Canvas, TerminalCanvas};
use space_sweeper::entities::ScenarioState;
use space_sweeper::input;
use space_sweeper::registry::ObstacleRegistry;
use space_sweeper::sched::{Context, Supervisor};
use space_sweeper::tasks::{HazardSpawner, PhraseBanner, Ship, Star, Task, YearClock};

/// One simulation tick per this much real time.
const TICK: Duration = Duration::from_millis(100);

const LOG_FILE: &str = "space_sweeper.log";

fn main() -> std::io::Result<()> {
    // stdout belongs to the game, so logs go to a file
    let _ = simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info);
    info!("starting space_sweeper");

    terminal::enable_raw_mode()?;
    let mut raw = stdout();
    raw.execute(terminal::EnterAlternateScreen)?;
    raw.execute(cursor::Hide)?;

    // Dedicate a thread to blocking event reads, sending them through a
    // channel so the tick loop never waits on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped, program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&rx);

    // Always restore the terminal
    let _ = raw.execute(cursor::Show);
    let _ = raw.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    info!("exited cleanly");

    result
}

fn run(rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    info!("field is {rows}x{cols}");

    let mut canvas = TerminalCanvas::new(BufWriter::new(stdout()), rows, cols);
    let mut registry = ObstacleRegistry::new();
    let mut scenario_state = ScenarioState::new();
    let mut rng = StdRng::from_entropy();

    let mut supervisor = Supervisor::new();
    for star in Star::scatter(&mut rng, rows, cols) {
        supervisor.spawn(Task::Star(star));
    }
    supervisor.spawn(Task::Ship(Ship::new(
        rows as f64 / 2.0,
        cols as f64 / 2.0,
    )));
    supervisor.spawn(Task::Spawner(HazardSpawner::new()));
    supervisor.spawn(Task::YearClock(YearClock::new()));
    supervisor.spawn(Task::Banner(PhraseBanner::new()));

    loop {
        let tick_start = Instant::now();

        let input = input::poll(rx);
        if input.quit {
            info!("quit requested");
            break;
        }
        if let Some((new_rows, new_cols)) = input.resize {
            info!("terminal resized to {new_rows}x{new_cols}");
            canvas.resize(new_rows, new_cols);
        }

        let destroyed_this_tick = {
            let mut ctx = Context::new(
                &mut canvas,
                &mut registry,
                &mut scenario_state,
                &mut rng,
            );
            ctx.controls = input.controls;
            supervisor.tick(&mut ctx);
            ctx.ship_destroyed
        };
        if destroyed_this_tick {
            info!("ship destroyed in year {}", scenario_state.year);
        }

        canvas.present()?;

        let elapsed = tick_start.elapsed();
        if elapsed < TICK {
            thread::sleep(TICK - elapsed);
        }
    }

    Ok(())
}
