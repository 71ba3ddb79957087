#[cfg(test)]
use crate::config::{LogFormat, LogLevel, LoggingConfig};
#[cfg(test)]
use crate::logging::{level_to_log_level, log_level_to_level, parse_log_level};

#[test]
fn test_init_is_repeatable() {
    let config = LoggingConfig {
        level: LogLevel::Debug,
        format: LogFormat::Compact,
        file: None,
        stdout: true,
    };

    assert!(crate::logging::init(&config).is_ok());
    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_init_without_any_sink_is_noop() {
    let config = LoggingConfig {
        stdout: false,
        file: None,
        ..LoggingConfig::default()
    };
    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_level_conversion() {
    assert_eq!(parse_log_level("trace").unwrap(), LogLevel::Trace);
    assert_eq!(parse_log_level("DEBUG").unwrap(), LogLevel::Debug);
    assert!(parse_log_level("info").is_ok());
    assert!(parse_log_level("warn").is_ok());
    assert!(parse_log_level("error").is_ok());
    assert!(parse_log_level("invalid").is_err());

    assert_eq!(level_to_log_level(tracing::Level::TRACE), LogLevel::Trace);
    assert_eq!(level_to_log_level(tracing::Level::DEBUG), LogLevel::Debug);
    assert_eq!(level_to_log_level(tracing::Level::INFO), LogLevel::Info);
    assert_eq!(level_to_log_level(tracing::Level::WARN), LogLevel::Warn);
    assert_eq!(level_to_log_level(tracing::Level::ERROR), LogLevel::Error);

    for level in [LogLevel::Trace, LogLevel::Info, LogLevel::Error] {
        assert_eq!(level_to_log_level(log_level_to_level(level)), level);
    }
}
