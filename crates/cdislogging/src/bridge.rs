//! Adapter from the `log` facade to a [`Registry`]
//!
//! Records emitted through `log::info!` and friends are routed to the
//! registry logger named after the record target, with `::` replaced by
//! `.` so module paths line up with the dotted hierarchy. `Trace` records
//! are treated as `Debug`.

use log::{LevelFilter, Metadata, SetLoggerError};

use crate::logger::Logger;
use crate::registry::Registry;

/// `log::Log` implementation backed by a registry
#[derive(Debug, Clone)]
pub struct LogBridge {
    registry: Registry,
}

impl LogBridge {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Install a bridge for `registry` as the global `log` logger
    ///
    /// Fails if another `log` logger was already installed.
    pub fn install(registry: Registry) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(registry)))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn logger_for(&self, target: &str) -> Logger {
        let name = target_to_name(target);
        self.registry
            .logger(&name)
            .unwrap_or_else(|_| self.registry.root())
    }
}

/// Convert a `log` target such as `my_app::db` to a logger name (`my_app.db`)
pub fn target_to_name(target: &str) -> String {
    target.replace("::", ".")
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger_for(metadata.target())
            .is_enabled_for(metadata.level().into())
    }

    fn log(&self, record: &log::Record<'_>) {
        self.logger_for(record.target())
            .log(record.level().into(), *record.args());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn send(bridge: &LogBridge, target: &str, level: log::Level, message: &str) {
        bridge.log(
            &log::Record::builder()
                .target(target)
                .level(level)
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_target_to_name() {
        assert_eq!(target_to_name("my_app::db::pool"), "my_app.db.pool");
        assert_eq!(target_to_name("plain"), "plain");
    }

    #[test]
    fn test_records_reach_configured_ancestor() {
        let registry = Registry::new();
        let app = registry.get_logger("my_app", None, Some("info")).unwrap();
        let bridge = LogBridge::new(registry.clone());

        send(&bridge, "my_app::db", log::Level::Info, "connected");
        send(&bridge, "my_app::db", log::Level::Debug, "dropped");
        send(&bridge, "my_app::db", log::Level::Trace, "dropped");

        assert_eq!(app.sinks()[0].emitted(), 1);
        assert!(registry.contains("my_app.db"));
    }

    #[test]
    fn test_enabled_follows_effective_level() {
        let registry = Registry::new();
        registry.get_logger("svc", None, Some("warn")).unwrap();
        let bridge = LogBridge::new(registry);

        let warn = Metadata::builder().target("svc::http").level(log::Level::Warn).build();
        let info = Metadata::builder().target("svc::http").level(log::Level::Info).build();
        assert!(bridge.enabled(&warn));
        assert!(!bridge.enabled(&info));
    }

    #[test]
    fn test_empty_target_goes_to_root() {
        let registry = Registry::new();
        let root = registry.configure_root(None, Some(crate::Level::Debug)).unwrap();
        let bridge = LogBridge::new(registry);

        send(&bridge, "", log::Level::Error, "anonymous");
        assert_eq!(root.sinks()[0].emitted(), 1);
    }
}
