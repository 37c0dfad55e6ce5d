//! Doctor command - validate configuration and show status
//!
//! All checks are offline: credential presence is verified without calling
//! the platform.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::args::DoctorArgs;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    feeds: CheckResult,
    credentials: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let (config_check, config) = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => (CheckResult::ok("Configuration loaded"), Some(config)),
        Err(e) => (CheckResult::error(format!("{:#}", e)), None),
    };

    let (feeds_check, credentials_check) = match &config {
        Some(config) => (check_feeds(config), check_credentials(config)),
        None => (
            CheckResult::error("Not checked (config failed)"),
            CheckResult::error("Not checked (config failed)"),
        ),
    };

    let has_error =
        config_check.is_error() || feeds_check.is_error() || credentials_check.is_error();

    let report = DoctorReport {
        config: config_check,
        feeds: feeds_check,
        credentials: credentials_check,
        overall: if has_error { "error" } else { "ok" }.to_string(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if has_error {
        anyhow::bail!("Doctor found problems");
    }

    Ok(())
}

fn check_feeds(config: &AppConfig) -> CheckResult {
    if config.feeds.urls.is_empty() {
        return CheckResult::warn("No feed URLs configured; every tick will be a no-op");
    }

    CheckResult::ok(format!("{} feed URL(s) configured", config.feeds.urls.len()))
}

fn check_credentials(config: &AppConfig) -> CheckResult {
    let required = [
        &config.x.api_key_env,
        &config.x.api_secret_env,
        &config.x.access_token_env,
        &config.x.access_token_secret_env,
    ];

    let missing: Vec<&str> = required
        .iter()
        .filter(|env_var| {
            std::env::var(env_var.as_str())
                .map(|v| v.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|env_var| env_var.as_str())
        .collect();

    if missing.is_empty() {
        CheckResult::ok("All four X API secrets are set")
    } else {
        CheckResult::error(format!(
            "Missing or empty credential env var(s): {}",
            missing.join(", ")
        ))
    }
}

fn print_report(report: &DoctorReport) {
    println!("config:      [{}] {}", report.config.status, report.config.message);
    println!("feeds:       [{}] {}", report.feeds.status, report.feeds.message);
    println!(
        "credentials: [{}] {}",
        report.credentials.status, report.credentials.message
    );
    println!("overall:     {}", report.overall);
}
