//! Logging setup: `env_logger` behind the `log` facade, bridged through indicatif on a TTY

use indicatif::MultiProgress;

/// Module prefix shared by every crate in this workspace
const CRATE_PREFIX: &str = "pharmafetch";

/// Padded label and ANSI color for a log level.
fn level_style(level: log::Level) -> (&'static str, &'static str) {
    match level {
        log::Level::Error => ("ERROR", "\x1b[31m"),
        log::Level::Warn => ("WARN ", "\x1b[33m"),
        log::Level::Info => ("INFO ", "\x1b[32m"),
        log::Level::Debug => ("DEBUG", "\x1b[36m"),
        log::Level::Trace => ("TRACE", "\x1b[35m"),
    }
}

/// Default filter directive when `RUST_LOG` is unset.
///
/// `--debug` raises only our own crates to debug so HTTP internals stay quiet.
fn default_filter(quiet: bool, debug: bool) -> String {
    let base = if quiet { "warn" } else { "info" };
    if debug {
        format!("{base},{CRATE_PREFIX}=debug")
    } else {
        base.to_string()
    }
}

/// Logger that prints through indicatif `MultiProgress` so lines don't tear the spinner.
pub struct IndicatifLogger {
    inner: env_logger::Logger,
    multi: MultiProgress,
}

impl IndicatifLogger {
    pub fn new(inner: env_logger::Logger, multi: MultiProgress) -> Self {
        Self { inner, multi }
    }
}

impl log::Log for IndicatifLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(&self.inner, metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.inner.matches(record) {
            let (label, color) = level_style(record.level());
            let line = format!("[{color}{label}\x1b[0m] {}", record.args());
            self.multi.suspend(|| eprintln!("{line}"));
        }
    }

    fn flush(&self) {
        log::Log::flush(&self.inner);
    }
}

/// Initialize logging.
///
/// With `multi` (TTY), log lines are colored and routed through the progress bars.
/// Without it, plain `[LEVEL] message` lines go to stderr.
pub fn init_logging(
    quiet: bool,
    debug: bool,
    multi: Option<&MultiProgress>,
) -> Result<(), log::SetLoggerError> {
    use std::io::Write;

    let env = env_logger::Env::default().default_filter_or(default_filter(quiet, debug));

    match multi {
        Some(multi) => {
            let logger = env_logger::Builder::from_env(env).build();
            let max_level = logger.filter();
            log::set_boxed_logger(Box::new(IndicatifLogger::new(logger, multi.clone())))?;
            log::set_max_level(max_level);
            Ok(())
        }
        None => env_logger::Builder::from_env(env)
            .format(|buf, record| {
                let (label, _) = level_style(record.level());
                writeln!(buf, "[{label}] {}", record.args())
            })
            .try_init(),
    }
}
