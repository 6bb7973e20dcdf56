//! Log output setup.
//!
//! Normal command output goes through `log::info!`, so info lines are printed
//! bare to stdout. Warnings and errors get a colored prefix. `--verbose`
//! adds timestamps and module paths along with debug-level messages.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).target(env_logger::Target::Stdout);
    if !quiet && !verbose {
        builder.parse_default_env();
    }

    builder.format(move |buf, record| {
        let prefix = match record.level() {
            Level::Error => format!("{} ", "error:".if_supports_color(Stdout, |t| t.red())),
            Level::Warn => format!("{} ", "warning:".if_supports_color(Stdout, |t| t.yellow())),
            Level::Info => String::new(),
            Level::Debug | Level::Trace => format!(
                "{} ",
                format!("[{}]", record.module_path().unwrap_or("shelf"))
                    .if_supports_color(Stdout, |t| t.dimmed())
            ),
        };
        if verbose {
            let timestamp = buf.timestamp_millis();
            write!(buf, "{timestamp} ")?;
        }
        writeln!(buf, "{prefix}{}", record.args())
    });

    builder.init();
}
