use std::str::FromStr;

use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

fn level_filter(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Info)
}

fn label(level: Level, colored: bool) -> String {
    let text = level.to_string();
    let styled = match level {
        Level::Error => style(text).red().bold(),
        Level::Warn => style(text).yellow().bold(),
        Level::Info => style(text).green(),
        Level::Debug => style(text).blue(),
        Level::Trace => style(text).dim(),
    };
    styled.force_styling(colored).to_string()
}

/// Install the global logger using the effective `[log]` configuration.
///
/// Info lines go to stdout without decoration, debug and trace lines go to
/// stdout with a label, warnings and errors go to stderr.
pub fn init_logging() {
    let level = level_filter(config().log().level());
    let colored = colors_enabled();

    let progress = fern::Dispatch::new()
        .filter(|meta| meta.level() == Level::Info)
        .format(|out, message, _record| out.finish(format_args!("{message}")))
        .chain(std::io::stdout());

    let verbose = fern::Dispatch::new()
        .filter(|meta| meta.level() > Level::Info)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}",
                label(record.level(), colored),
                record.target(),
                message
            ))
        })
        .chain(std::io::stdout());

    let problems = fern::Dispatch::new()
        .filter(|meta| meta.level() < Level::Info)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}] {}",
                label(record.level(), colored),
                message
            ))
        })
        .chain(std::io::stderr());

    let result = fern::Dispatch::new()
        .level(level)
        .chain(progress)
        .chain(verbose)
        .chain(problems)
        .apply();

    // A logger may already be installed when running inside tests
    if result.is_err() {
        log::set_max_level(level);
    }
}
