use crate::config::Config;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Level
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    #[default]
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Autoscaler,
    Config,
    Identifier,
    Mapping,
}

#[macro_export]
macro_rules! log {
    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let level = $level;
        if $crate::log::__enabled(level) {
            let message = format!($fmt $(, $arg)*);
            $crate::log::__emit($topic, level, &message);
        }
    }};

    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some($topic), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<$crate::log::Topic>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};
}

///
/// Helpers
///

#[doc(hidden)]
#[must_use]
pub fn __enabled(level: Level) -> bool {
    level >= Config::get().log.level
}

#[doc(hidden)]
pub fn __emit(topic: Option<Topic>, level: Level, message: &str) {
    eprintln!("{}", format_line(topic, level, message));
}

fn format_line(topic: Option<Topic>, level: Level, message: &str) -> String {
    let (color, reset) = match level {
        Level::Ok => ("\x1b[32m", "\x1b[0m"),
        Level::Info => ("\x1b[34m", "\x1b[0m"),
        Level::Warn => ("\x1b[33m", "\x1b[0m"),
        Level::Error => ("\x1b[31m", "\x1b[0m"),
        Level::Debug => ("", ""),
    };

    let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());
    let topic = topic.map_or_else(|| "-".to_string(), |t| t.to_string());

    format!("{label}|{topic:^12}| {message}")
}

///
/// TESTS
///
