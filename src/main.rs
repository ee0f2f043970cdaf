mod constants;
mod error;
mod messaging;
mod models;
mod schedule;
mod services;
mod utils;

use chrono_tz::Tz;
use tracing::{error, info};

use crate::{
    constants::{DEFAULT_CONTACTS_FILE, DEFAULT_REGION, DEFAULT_TIMEZONE, LOG_DIRECTIVE},
    messaging::{SnsConfig, SnsMessenger},
    schedule::{Schedule, run_birthday_check, run_schedule_manager},
    services::birthday_service::load_contacts,
    utils::timezone::{parse_timezone, time_to_cron, today_in},
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let contacts = match load_contacts(&config.contacts_file) {
        Ok(contacts) => contacts,
        Err(e) => {
            error!("Failed to load contacts: {}", e);
            std::process::exit(1);
        }
    };
    info!("Loaded {} contact(s) from {}", contacts.len(), config.contacts_file);

    let messenger = SnsMessenger::new(&config.sns).await;

    match config.cron_expression {
        Some(cron_expression) => {
            let schedule = Schedule {
                cron_expression,
                timezone: config.timezone,
            };
            run_schedule_manager(&messenger, &contacts, schedule).await;
        }
        None => {
            let today = today_in(&config.timezone);
            info!("Birthday check invoked for {} ({})", today, config.timezone);

            if let Err(e) = run_birthday_check(&messenger, &contacts, today).await {
                error!("Birthday check failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Configuration loaded from environment variables
struct Config {
    contacts_file: String,
    sns: SnsConfig,
    timezone: Tz,
    /// Set when running as a daemon instead of once per invocation
    cron_expression: Option<String>,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    let contacts_file =
        std::env::var("CONTACTS_FILE").unwrap_or_else(|_| DEFAULT_CONTACTS_FILE.to_string());

    let region = std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
    let mut sns = SnsConfig::default().with_region(region);

    // Optional: custom endpoint for LocalStack
    if let Ok(endpoint) = std::env::var("SNS_ENDPOINT_URL") {
        sns = sns.with_endpoint(endpoint);
    }

    let timezone = parse_timezone(
        &std::env::var("NOTIFIER_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string()),
    )?;

    let cron_expression = match std::env::var("NOTIFY_TIME") {
        Ok(time) => Some(time_to_cron(&time)?),
        Err(_) => None,
    };

    if let Some(ref cron) = cron_expression {
        info!("Daemon mode: birthday check scheduled with cron '{}'", cron);
    }

    Ok(Config {
        contacts_file,
        sns,
        timezone,
        cron_expression,
    })
}
