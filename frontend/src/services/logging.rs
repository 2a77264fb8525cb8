use log::{Level, LevelFilter, Log, Metadata, Record};

/// Routes the `log` facade to the browser console, tagging every line with
/// the component (log target) it came from.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    pub fn init(level: LevelFilter) -> anyhow::Result<()> {
        log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("logger already installed: {}", e))?;
        log::set_max_level(level);
        Ok(())
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, component: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, component, message)
}
