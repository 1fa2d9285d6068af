//! CLI command implementations

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::{ConfigCommand, PrepareArgs};
use crate::config::Settings;
use crate::prep::{MeetingForm, Orchestrator};

/// Run the HTTP server
pub async fn serve(mut settings: Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    let missing = settings.missing_keys();
    if !missing.is_empty() {
        eprintln!(
            "warning: missing API keys: {}. /prepare_meeting will fail until they are set.",
            missing.join(", ")
        );
    }

    crate::web::run_server(settings).await
}

/// Prepare a meeting brief and print it to stdout
pub async fn prepare_meeting(settings: &Settings, args: PrepareArgs) -> Result<()> {
    let orchestrator = Orchestrator::from_settings(settings)?;

    let form = MeetingForm {
        company_name: args.company,
        meeting_objective: args.objective,
        attendees: args.attendees,
        meeting_duration: args.duration,
        focus_areas: args.focus,
    };

    let brief = orchestrator.run(&form).await?;

    if args.html {
        print!("{}", brief.html);
    } else {
        print!("{}", brief.markdown);
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&redacted(settings))?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn redacted(settings: &Settings) -> Settings {
    let mut settings = settings.clone();
    for key in [&mut settings.llm.api_key, &mut settings.search.api_key] {
        if !key.is_empty() {
            *key = "********".to_string();
        }
    }
    settings
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    provider: String,
    status: &'static str,
    detail: &'static str,
}

#[derive(Serialize)]
struct DoctorReport {
    version: &'static str,
    status: String,
    model: String,
    delay_ms: u64,
    checks: Vec<DoctorCheck>,
}

/// Run diagnostic checks on credentials and configuration.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("meeting-prep doctor");
    println!("status: {}", report.status);
    println!("model: {}", report.model);
    println!("delay: {} ms", report.delay_ms);
    println!();

    for check in &report.checks {
        println!(
            "{:<16} {:<8} {:<8} {}",
            check.name, check.provider, check.status, check.detail
        );
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> DoctorReport {
    let configured = |key: &str| {
        if key.trim().is_empty() {
            "missing"
        } else {
            "ok"
        }
    };

    DoctorReport {
        version: crate::VERSION,
        status: settings.health_status(),
        model: settings.llm.model.clone(),
        delay_ms: settings.pipeline.delay_ms,
        checks: vec![
            DoctorCheck {
                name: crate::config::GROQ_API_KEY_ENV,
                provider: settings.llm.provider.clone(),
                status: configured(&settings.llm.api_key),
                detail: "required for the four completion calls",
            },
            DoctorCheck {
                name: crate::config::SERPER_API_KEY_ENV,
                provider: settings.search.provider.clone(),
                status: configured(&settings.search.api_key),
                detail: "required for company and industry search",
            },
        ],
    }
}
