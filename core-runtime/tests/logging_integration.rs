//! Integration tests for logging system

use bridge_traits::error::Result as SinkResult;
use bridge_traits::logging::{LogEntry, LogLevel, LoggerSink};
use core_runtime::logging::{
    init_logging, strip_path, tracing_level_to_log_level, LogFormat, LoggerSinkLayer,
    LoggingConfig,
};
use mockall::mock;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;

mock! {
    pub Sink {}

    impl LoggerSink for Sink {
        fn log(&self, entry: LogEntry) -> SinkResult<()>;
        fn flush(&self) -> SinkResult<()>;
        fn min_level(&self) -> LogLevel;
    }
}

#[test]
fn test_logging_config_defaults() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, LogLevel::Info);
    assert!(config.filter.is_none());
    assert!(config.logger_sink.is_none());
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warn);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warn);
}

#[test]
fn test_filter_configuration() {
    let config = LoggingConfig::default().with_filter("core_metadata=debug,lofty=trace");

    assert_eq!(
        config.filter,
        Some("core_metadata=debug,lofty=trace".to_string())
    );
}

#[test]
fn test_path_stripping() {
    assert_eq!(strip_path("/home/user/music/song.flac"), "song.flac");
    assert_eq!(strip_path("D:\\rips\\track01.wav"), "track01.wav");
    assert_eq!(strip_path("filename.mp3"), "filename.mp3");
    assert_eq!(strip_path(""), "");
}

#[test]
fn test_level_mapping() {
    assert_eq!(tracing_level_to_log_level(tracing::Level::TRACE), LogLevel::Trace);
    assert_eq!(tracing_level_to_log_level(tracing::Level::DEBUG), LogLevel::Debug);
    assert_eq!(tracing_level_to_log_level(tracing::Level::INFO), LogLevel::Info);
    assert_eq!(tracing_level_to_log_level(tracing::Level::WARN), LogLevel::Warn);
    assert_eq!(tracing_level_to_log_level(tracing::Level::ERROR), LogLevel::Error);
}

#[test]
fn test_sink_layer_with_mock_sink() {
    let mut sink = MockSink::new();
    sink.expect_min_level().return_const(LogLevel::Info);
    sink.expect_log()
        .withf(|entry| entry.message == "lyrics replaced" && entry.level == LogLevel::Info)
        .times(1)
        .returning(|_| Ok(()));

    let sink: Arc<dyn LoggerSink> = Arc::new(sink);
    let subscriber = tracing_subscriber::registry().with(LoggerSinkLayer::new(Some(sink)));
    let _guard = tracing::subscriber::set_default(subscriber);

    tracing::debug!("filtered by min_level");
    tracing::info!("lyrics replaced");
}

#[test]
fn test_sink_layer_records_span_name() {
    let mut sink = MockSink::new();
    sink.expect_min_level().return_const(LogLevel::Trace);
    sink.expect_log()
        .withf(|entry| entry.span_id.as_deref() == Some("set_song_info"))
        .times(1)
        .returning(|_| Ok(()));

    let sink: Arc<dyn LoggerSink> = Arc::new(sink);
    let subscriber = tracing_subscriber::registry().with(LoggerSinkLayer::new(Some(sink)));
    let _guard = tracing::subscriber::set_default(subscriber);

    let span = tracing::info_span!("set_song_info");
    let _entered = span.enter();
    tracing::info!("writing");
}

#[test]
fn test_init_logging_only_once() {
    // The global subscriber can be installed once per process; this is the
    // only test in this binary that touches it.
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warn);

    assert!(init_logging(config.clone()).is_ok());
    assert!(init_logging(config).is_err());
}
