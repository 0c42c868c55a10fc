//! Process-wide default logger
//!
//! Created on first use with stdout as the sink, `Trace` as the threshold and
//! the date/time/short-file header. The free functions here forward to it and
//! behave exactly like the corresponding [`Logger`] methods, including the
//! race between a concurrent `set_level` and an in-flight message.

use crate::logger::Logger;
use lvlog_core_types::Severity;
use serde::Serialize;
use std::fmt::{self, Display};
use std::sync::OnceLock;

static STANDARD: OnceLock<Logger> = OnceLock::new();

/// The default logger
pub fn logger() -> &'static Logger {
    STANDARD.get_or_init(|| Logger::builder().build())
}

pub fn level() -> Severity {
    logger().level()
}

pub fn set_level(level: Severity) {
    logger().set_level(level);
}

/// See [`Logger::set_level_from_name`]; unknown names are ignored
pub fn set_level_from_name(name: &str) {
    logger().set_level_from_name(name);
}

#[track_caller]
pub fn print_json<I>(values: I)
where
    I: IntoIterator,
    I::Item: Serialize + fmt::Debug,
{
    logger().print_json(values);
}

macro_rules! standard_functions {
    ($($print:ident, $printf:ident, $println:ident;)*) => {
        $(
            #[track_caller]
            pub fn $print(values: &[&dyn Display]) {
                logger().$print(values);
            }

            #[track_caller]
            pub fn $printf(args: fmt::Arguments<'_>) {
                logger().$printf(args);
            }

            #[track_caller]
            pub fn $println(values: &[&dyn Display]) {
                logger().$println(values);
            }
        )*
    };
}

standard_functions! {
    trace, tracef, traceln;
    debug, debugf, debugln;
    info, infof, infoln;
    warn, warnf, warnln;
    error, errorf, errorln;
    fatal, fatalf, fatalln;
    panic, panicf, panicln;
}
