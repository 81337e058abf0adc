use std::path::PathBuf;
use std::time::Duration;
use sysmon::core::rotating_log::{RotationPolicy, Severity};
use sysmon::{MonitorConfig, MonitorError};

#[test]
fn test_config_default() {
    let config = MonitorConfig::default();
    assert_eq!(config.interval, Duration::from_secs(5));
    assert_eq!(config.log_file, PathBuf::from("system_monitor.log"));
    assert_eq!(config.rotation, RotationPolicy::default());
    assert_eq!(config.log_level, Severity::Info);
}

#[test]
fn test_config_builder() {
    let config = MonitorConfig::default()
        .with_interval(Duration::from_secs(30))
        .with_log_file("/var/log/sysmon/host.log")
        .with_rotation(RotationPolicy {
            max_bytes: 1024,
            backup_count: 5,
        });

    assert_eq!(config.interval.as_secs(), 30);
    assert_eq!(config.log_file, PathBuf::from("/var/log/sysmon/host.log"));
    assert_eq!(config.rotation.backup_count, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_zero_interval_is_invalid() {
    let err = MonitorConfig::default()
        .with_interval(Duration::ZERO)
        .validate()
        .unwrap_err();
    assert!(matches!(err, MonitorError::Config(_)));
    assert!(err.to_string().contains("interval"));
}
