//! Logging configuration for SupaCRM
//!
//! This module provides the logging builder configured for both development
//! and production environments, following the Tauri plugin logging best
//! practices.
//!
//! ## Environment Behavior
//!
//! - **Development**: Debug level, outputs to Webview console
//! - **Production**: Info level, outputs to log file + stdout

use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Create the logging builder with appropriate configuration
///
/// - Development: Debug level, Webview console output
/// - Production: Info level, file + stdout output
/// - Filters noise from Tauri internals and the webview library
/// - Color-coded output with timestamps
pub fn get_builder() -> tauri_plugin_log::Builder {
    let is_dev = is_development();
    let default_log_level = if is_dev {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = tauri_plugin_log::Builder::new()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(default_log_level)
        // Filter out tauri-plugin-log's own logs to avoid infinite loops:
        // the Webview target sends logs via log://log events, which would
        // trigger themselves.
        .filter(move |metadata| {
            let is_basic_noise = metadata.target().starts_with("tauri::")
                || metadata.target().starts_with("tracing::")
                || metadata.target().contains("tauri-")
                || metadata.target().starts_with("wry::")
                || metadata.target().starts_with("hyper")
                || metadata.target().starts_with("reqwest::connect");

            if is_dev {
                // Development: keep ipc::request logs for debugging
                !is_basic_noise
            } else {
                !is_basic_noise && !metadata.target().contains("ipc::request")
            }
        })
        .format(move |out, message, record| {
            // Format: 2025-12-29 10:30:45.123 INFO [settings.rs:34] [sc_tauri] account saved
            let uses_ansi = !is_dev;
            let (level_color, reset) = if uses_ansi {
                (
                    match record.level() {
                        log::Level::Error => "\x1b[31;1m", // Bold red
                        log::Level::Warn => "\x1b[33m",    // Yellow
                        log::Level::Info => "\x1b[32m",    // Green
                        log::Level::Debug => "\x1b[34m",   // Blue
                        log::Level::Trace => "\x1b[36m",   // Cyan
                    },
                    "\x1b[0m",
                )
            } else {
                ("", "")
            };

            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            let target = record.target();

            out.finish(format_args!(
                "{} {}{} [{}:{}] [{}] {}{}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                level_color,
                record.level(),
                file,
                line,
                target,
                message,
                reset
            ))
        });

    if is_dev {
        // Development: output to Webview (browser DevTools console)
        builder = builder.target(Target::new(TargetKind::Webview));
    } else {
        // Production: output to file and stdout
        builder = builder
            .target(Target::new(TargetKind::LogDir {
                file_name: Some("supacrm.log".to_string()),
            }))
            .target(Target::new(TargetKind::Stdout));
    }

    builder
}
