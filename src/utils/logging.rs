use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Initialize terminal logging on stderr so stdout only carries banners.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    // A logger may already be installed (tests, embedding)
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        log::debug!("{}", msg);
    }
}

pub fn print_verbose_with_prefix(verbose: bool, prefix: &str, msg: &str) {
    if verbose {
        log::debug!("{}: {}", prefix, msg);
    }
}

pub fn log_error(msg: &str) {
    log::error!("{}", msg);
}

pub fn log_warning(msg: &str) {
    log::warn!("{}", msg);
}

pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, msg: &str) {
        print_verbose(self.enabled, msg);
    }

    pub fn log_with_prefix(&self, prefix: &str, msg: &str) {
        print_verbose_with_prefix(self.enabled, prefix, msg);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_logger_enabled_flag() {
        assert!(VerboseLogger::new(true).is_enabled());
        assert!(!VerboseLogger::new(false).is_enabled());
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
        VerboseLogger::new(true).log_with_prefix("test", "still logging");
    }
}
