//! Basic integration tests for the logger crate

use logger::{
    disable_verbose, enable_verbose, is_verbose_enabled, set_level, set_level_from_str, Level,
};

#[test]
fn macros_do_not_panic_at_any_level() {
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
        set_level(level);
        logger::error!("error at {level:?}");
        logger::warn!("warn at {level:?}");
        logger::info!("info at {level:?}");
        logger::debug!("debug at {level:?}");
    }
}

#[test]
fn level_from_str_accepts_known_names() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("Info"));
    assert!(set_level_from_str("debug"));
    assert!(!set_level_from_str("chatty"));
}

#[cfg(feature = "verbose")]
#[test]
fn verbose_toggle_round_trips() {
    enable_verbose();
    assert!(is_verbose_enabled());
    logger::verbose!("visible");
    disable_verbose();
    assert!(!is_verbose_enabled());
    logger::verbose!("hidden");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_initializes_on_writable_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("helium.log");
    assert!(logger::init_file_logging(&log_path));
    logger::error!("goes to file");
    assert!(log_path.exists());
}
