use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use fibgen::driver::run_sum;
use fibgen::{BenchConfig, Result};
use log::{LevelFilter, Log, Metadata, Record};

const LOG_ENV: &str = "FIBGEN_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_log() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| LevelFilter::from_str(&v).ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn run() -> Result<()> {
    let config = BenchConfig::default()
        .apply_env()?
        .apply_args(std::env::args().skip(1))?;

    println!("multiplier {}", config.multiplier());
    for &kind in config.variants() {
        let n = config.iterations(kind).get();
        let start = Instant::now();
        let sum = run_sum(kind, n)?;
        let elapsed = start.elapsed();
        println!("{:<14} n={:<12} sum={:<22} elapsed={:?}", kind, n, sum, elapsed);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_log();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fibgen: {e}");
            ExitCode::FAILURE
        }
    }
}
