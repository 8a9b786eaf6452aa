use chrono::Local;
use circuit_core::*;
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

#[derive(Parser)]
#[command(name = "circo")]
#[command(about = "Circuit training session builder and runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available programs with their summaries (default)
    List {
        /// Emit the program list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the full structure of one program
    Show {
        /// Program name (case-insensitive)
        name: String,
    },

    /// Run a session for the named program
    Run {
        /// Program name (case-insensitive)
        name: String,

        /// Drive ticks immediately instead of waiting on the clock
        #[arg(long)]
        fast: bool,

        /// Start the first step without the preparation countdown
        #[arg(long)]
        skip_preparation: bool,
    },

    /// Show the weekly goal layout for a set of planned days
    Goal {
        /// Comma-separated day names, e.g. "mon,wed,fri"
        #[arg(long, value_delimiter = ',')]
        days: Option<Vec<String>>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    circuit_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };

    let library = build_default_library_with_rate(config.estimation.kcal_per_active_minute);

    match cli.command {
        Some(Commands::List { json }) => cmd_list(&library, json),
        Some(Commands::Show { name }) => cmd_show(&library, &name),
        Some(Commands::Run {
            name,
            fast,
            skip_preparation,
        }) => cmd_run(&library, &config, &name, fast, skip_preparation),
        Some(Commands::Goal { days }) => cmd_goal(&config, days),
        None => cmd_list(&library, false),
    }
}

fn cmd_list(library: &ProgramLibrary, json: bool) -> Result<()> {
    if json {
        let programs: Vec<&Program> = library.iter().collect();
        println!("{}", serde_json::to_string_pretty(&programs)?);
        return Ok(());
    }

    println!("Programs:");
    for program in library.iter() {
        println!(
            "  {:<24} {:>8}  {:>3} exercises  ~{} kcal",
            program.name, program.duration_label, program.exercise_count, program.calories
        );
    }
    Ok(())
}

fn cmd_show(library: &ProgramLibrary, name: &str) -> Result<()> {
    let program = library
        .find_by_name(name)
        .ok_or_else(|| Error::UnknownProgram(name.to_string()))?;

    println!("{} ({})", program.name, program.duration_label);

    let Some(structure) = &program.structure else {
        println!("  (no structure recorded)");
        return Ok(());
    };

    print_circuit("Warmup", &structure.warmup);
    for circuit in &structure.main {
        print_circuit("Main", circuit);
    }
    print_circuit("Cooldown", &structure.cooldown);

    let steps = flatten(structure);
    println!(
        "\n  {} playback steps, {} seconds total",
        steps.len(),
        steps.iter().map(|s| s.duration_secs).sum::<u32>()
    );
    Ok(())
}

fn print_circuit(section: &str, circuit: &Circuit) {
    if circuit.exercises.is_empty() {
        return;
    }
    if circuit.repetitions > 1 {
        println!("  [{}] {} (x{})", section, circuit.name, circuit.repetitions);
    } else {
        println!("  [{}] {}", section, circuit.name);
    }
    for exercise in &circuit.exercises {
        println!(
            "    - {:<22} {:>3}s active / {:>3}s rest",
            exercise.name, exercise.active_secs, exercise.rest_secs
        );
    }
}

/// Input events the run loop multiplexes: clock ticks and key commands
enum Event {
    Tick,
    Pause,
    Skip,
    Quit,
}

fn cmd_run(
    library: &ProgramLibrary,
    config: &Config,
    name: &str,
    fast: bool,
    skip_preparation: bool,
) -> Result<()> {
    let program = library
        .find_by_name(name)
        .ok_or_else(|| Error::UnknownProgram(name.to_string()))?;

    let structure = program
        .structure
        .as_ref()
        .ok_or_else(|| Error::Other(format!("program '{}' has no structure", program.name)))?;

    let steps = flatten(structure);
    let prep = if skip_preparation {
        0
    } else {
        config.session.preparation_secs
    };
    let mut player = SessionPlayer::new(steps, prep)?;

    let completed = Arc::new(AtomicBool::new(false));
    let completed_flag = Arc::clone(&completed);
    player.on_complete(move || {
        completed_flag.store(true, Ordering::SeqCst);
    });

    println!("Starting '{}'", program.name);
    if player.phase() == PlayerPhase::Preparation {
        println!("Get ready... {}s", player.prep_left());
    }

    if fast {
        run_fast(&mut player);
    } else {
        run_clocked(&mut player)?;
    }

    if completed.load(Ordering::SeqCst) {
        println!("\n✓ Session complete! Well done on '{}'.", program.name);
        report_weekly_goal(config);
    } else {
        println!("\nSession abandoned.");
    }

    Ok(())
}

/// Drive the player to completion without waiting on a real clock
fn run_fast(player: &mut SessionPlayer) {
    let mut last_index = usize::MAX;
    while !player.is_complete() {
        announce_step(player, &mut last_index);
        player.tick();
    }
}

/// Drive the player off the wall clock, reading p/s/q commands from stdin
fn run_clocked(player: &mut SessionPlayer) -> Result<()> {
    let (tx, rx) = mpsc::channel::<Event>();

    let tick_tx = tx.clone();
    let clock = WallClock::new();
    let _handle = clock.subscribe(Box::new(move || {
        // A closed channel means the session loop is gone; nothing to do.
        let _ = tick_tx.send(Event::Tick);
    }));

    spawn_stdin_reader(tx);

    println!("Controls: p = pause/resume, s = skip, q = quit");

    let mut last_index = usize::MAX;
    announce_step(player, &mut last_index);

    while !player.is_complete() {
        let event = rx
            .recv()
            .map_err(|_| Error::Other("tick source disconnected".into()))?;

        match event {
            Event::Tick => {
                player.tick();
                if player.phase() == PlayerPhase::Preparation {
                    println!("  starting in {}s", player.prep_left().max(1));
                }
            }
            Event::Pause => {
                player.toggle_pause();
                let label = if player.is_paused() { "paused" } else { "resumed" };
                println!("⏯ {}", label);
            }
            Event::Skip => {
                if player.phase() == PlayerPhase::Preparation {
                    player.skip_preparation();
                } else {
                    player.skip();
                }
            }
            Event::Quit => return Ok(()),
        }

        if !player.is_complete() && player.phase() == PlayerPhase::Running {
            announce_step(player, &mut last_index);
        }
    }

    Ok(())
}

/// Print the step header whenever the position moves
fn announce_step(player: &SessionPlayer, last_index: &mut usize) {
    if player.phase() != PlayerPhase::Running || player.step_index() == *last_index {
        return;
    }
    *last_index = player.step_index();

    let step = player.current_step();
    let kind = match step.kind {
        StepKind::Active => "active",
        StepKind::Rest => "rest",
    };

    println!(
        "[{}/{}] {} - {} ({}, {}s)",
        player.step_index() + 1,
        player.step_count(),
        format_circuit(step),
        step.exercise_name,
        kind,
        step.duration_secs
    );

    if let Some(next) = player.next_step() {
        tracing::debug!("next up: {}", next.exercise_name);
    }
}

fn format_circuit(step: &ExerciseStep) -> String {
    match step.circuit_repetition {
        Some(rep) => format!("{} (round {})", step.circuit_name, rep),
        None => step.circuit_name.clone(),
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<Event>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let event = match line.trim().to_lowercase().as_str() {
                "p" => Event::Pause,
                "s" => Event::Skip,
                "q" => Event::Quit,
                _ => continue,
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    });
}

fn report_weekly_goal(config: &Config) {
    let planned = config.planned_weekdays();
    if planned.is_empty() {
        return;
    }

    let mut goal = WeeklyGoal::new(planned);
    let today = Local::now().date_naive();
    goal.record_completion(today);

    println!(
        "Weekly goal: {} of {} planned days completed this week",
        goal.planned_met_in_week(today),
        goal.planned_days.len()
    );
}

fn cmd_goal(config: &Config, days: Option<Vec<String>>) -> Result<()> {
    let planned = match days {
        Some(names) => {
            let mut parsed = Vec::new();
            for name in &names {
                let day = circuit_core::config::parse_weekday(name)
                    .ok_or_else(|| Error::Config(format!("unknown weekday name: {}", name)))?;
                parsed.push(day);
            }
            parsed
        }
        None => config.planned_weekdays(),
    };

    if planned.is_empty() {
        println!("No training days planned. Pass --days mon,wed,fri to set some.");
        return Ok(());
    }

    let goal = WeeklyGoal::new(planned);

    use chrono::Weekday::*;
    println!("Planned week:");
    for day in [Sun, Mon, Tue, Wed, Thu, Fri, Sat] {
        let marker = if goal.planned_days.contains(&day) {
            "●"
        } else {
            "·"
        };
        println!("  {} {}", marker, day);
    }
    println!(
        "{} day(s) per week",
        goal.planned_days.len()
    );
    Ok(())
}
