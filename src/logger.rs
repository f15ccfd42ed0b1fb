//! Console Logger
//!
//! Routes `log` records to the browser console (stderr on native builds).

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write(record.level(), &format_record(record));
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger. Calling it again only changes the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_show_level_target_and_message() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("sga_board::api")
                .args(format_args!("story {} not saved", 4))
                .build(),
        );
        assert_eq!(line, "WARN  sga_board::api: story 4 not saved");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(LevelFilter::Info);
        init(LevelFilter::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
