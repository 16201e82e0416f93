use ccsgen::ring::Cycler;
use ccsgen::scheduler::Scheduler;
use ccsgen::*;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default()
        .default_filter_or("warn")); // `RUST_LOG=${LEVEL}` env variable to override

    match Command::from_args(pico_args::Arguments::from_env()).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_usage() => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            ExitCode::from(2)
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match command {
        Command::Scheduler { ring_size, report } => {
            log::info!("Generating the scheduler for {} processes.", ring_size);
            let mut emitter = Scheduler::new(ring_size).emitter();
            emitter.emit_spec(&mut out)?;
            out.flush()?;
            let stderr = io::stderr();
            let mut err = stderr.lock();
            match report {
                Some(ReportFormat::Text) => {
                    WriteReporter::new(&mut err).report_emission(&emitter.stats())?
                }
                Some(ReportFormat::Json) => {
                    JsonReporter::new(&mut err).report_emission(&emitter.stats())?
                }
                None => {}
            }
        }
        Command::Ring { ring_size } => {
            log::info!("Generating a ring of {} cells.", ring_size);
            Cycler::new(ring_size).emit_spec(&mut out)?;
        }
        Command::States { ring_size } => {
            let count = reachable_states(&Scheduler::new(ring_size)).len();
            writeln!(out, "{}", count)?;
        }
        Command::Help => {
            writeln!(out, "{}", USAGE)?;
        }
    }
    out.flush()?;
    Ok(())
}
