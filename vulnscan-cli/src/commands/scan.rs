//! `vulnscan scan` command handler

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use vulnscan_core::config::VulnscanConfig;
use vulnscan_core::error::VulnscanError;
use vulnscan_core::pipeline::Notifier;
use vulnscan_core::types::{Language, Request, Response, Severity, Verdict};
use vulnscan_scanner::{
    ChannelNotifier, DbLookup, LogNotifier, NotificationEvent, NotifierKind, Scanner, ScannerConfig,
};

use crate::cli::ScanArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `scan` command.
///
/// A missing config file falls back to defaults. Returns `CliError::Risky`
/// after rendering the report when the library has known vulnerabilities.
pub async fn execute(
    args: ScanArgs,
    config_path: &Path,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let report = run(args, config_path).await?;
    writer.render(&report)?;

    if report.verdict == Verdict::Risky {
        return Err(CliError::Risky(report.library_label()));
    }
    Ok(())
}

async fn run(args: ScanArgs, config_path: &Path) -> Result<ScanReport, CliError> {
    let config = VulnscanConfig::load_or_default(config_path).await?;

    let language = parse_language(&args.language)?;
    let request = Request::builder()
        .language(language)
        .name(args.name)
        .build()
        .map_err(VulnscanError::from)?;

    // CLI args take precedence over file and env
    let mut scanner_config = ScannerConfig::from_core(&config);
    if let Some(db) = args.db {
        scanner_config.vuln_db_path = db.display().to_string();
    }
    if let Some(severity) = args.min_severity.as_deref() {
        scanner_config.min_severity = parse_severity(severity)?;
    }
    scanner_config.validate()?;

    info!(request = %request, db = %scanner_config.vuln_db_path, "starting scan");

    let lookup = DbLookup::load(&scanner_config).await?;

    match scanner_config.notifier {
        NotifierKind::Log => scan_with(lookup, LogNotifier::new(), &request).await,
        NotifierKind::Channel => {
            let (notifier, mut rx) = ChannelNotifier::new(scanner_config.channel_capacity);
            let mut report = scan_with(lookup, notifier, &request).await?;
            // the scanner and its sender are gone; drain what was sent
            while let Ok(event) = rx.try_recv() {
                report.notifications.push(NotificationEntry::from(event));
            }
            Ok(report)
        }
    }
}

async fn scan_with<N: Notifier>(
    lookup: DbLookup,
    notifier: N,
    request: &Request,
) -> Result<ScanReport, CliError> {
    let scanner = Scanner::new(lookup, notifier);
    let response = scanner.scan(request).await?;
    Ok(ScanReport::new(request, &response))
}

fn parse_language(s: &str) -> Result<Language, CliError> {
    Language::from_str_loose(s).ok_or_else(|| {
        CliError::Command(format!(
            "invalid language: {} (expected: java, javascript, python, go, rust)",
            s
        ))
    })
}

fn parse_severity(s: &str) -> Result<Severity, CliError> {
    Severity::from_str_loose(s).ok_or_else(|| {
        CliError::Command(format!(
            "invalid severity: {} (expected: info, low, medium, high, critical)",
            s
        ))
    })
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub library: String,
    pub language: Language,
    pub verdict: Verdict,
    pub reason: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<NotificationEntry>,
}

impl ScanReport {
    fn new(request: &Request, response: &Response) -> Self {
        Self {
            library: request.name().to_owned(),
            language: request.language(),
            verdict: response.verdict(),
            reason: response.reason().to_owned(),
            notifications: Vec::new(),
        }
    }

    fn library_label(&self) -> String {
        format!("{} ({})", self.library, self.language)
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationEntry {
    pub id: String,
    pub message: String,
    pub vulnerabilities: Vec<String>,
}

impl From<NotificationEvent> for NotificationEntry {
    fn from(event: NotificationEvent) -> Self {
        Self {
            id: event.id,
            message: event.message,
            vulnerabilities: event
                .vulnerabilities
                .into_iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
        }
    }
}

impl Render for ScanReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Scan: {}", self.library_label().bold())?;

        let verdict = match self.verdict {
            Verdict::Safe => "Safe".green().bold(),
            Verdict::Risky => "Risky".red().bold(),
        };
        writeln!(w, "Verdict: {}", verdict)?;
        writeln!(w, "Reason: {}", self.reason)?;

        if !self.notifications.is_empty() {
            writeln!(w)?;
            writeln!(w, "Notifications:")?;
            for n in &self.notifications {
                writeln!(w, "  [{}] {}", n.id.dimmed(), n.message.yellow())?;
            }
        }

        Ok(())
    }
}
