mod client;
mod config;
mod controller;
mod display;
mod errors;
mod models;

use std::io::Write;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::PredictionClient;
use crate::config::Config;
use crate::controller::FormController;
use crate::models::Field;

/// Prompts for one value on the terminal, showing the current value as the
/// default. An empty entry keeps the current value.
fn prompt(label: &str, current: &impl std::fmt::Display) -> std::io::Result<String> {
    print!("{} [{}]: ", label, current);
    std::io::stdout().flush()?;

    let mut entry = String::new();
    std::io::stdin().read_line(&mut entry)?;
    Ok(entry.trim().to_string())
}

/// Main entry point for the interactive form.
///
/// Initializes logging and configuration, builds the prediction client and
/// the form controller, then loops: collect field values, submit, render the
/// outcome. Retrying after a failure is the user's call, never automatic.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "churn_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the prediction client
    let client = PredictionClient::new(config.predict_base_url.clone())?;
    tracing::info!("✓ Prediction client initialized: {}", config.predict_base_url);

    let mut controller = FormController::new(client);

    println!("Bank Customer Churn Predictor");
    println!("Press Enter to keep the value in brackets.\n");

    loop {
        for field in Field::ALL {
            let entry = prompt(field.label(), controller.profile().get(field))?;
            if !entry.is_empty() {
                controller.update_field(field, &entry);
            }
        }

        match controller.submit().await {
            Err(err) => {
                // Validation problems go straight back to the user.
                eprintln!("\n{}\n", err);
            }
            Ok(()) => match controller.result() {
                Some(result) => println!("\n{}\n", display::render_result(result)),
                None => println!("\nNo prediction available; see the log for details.\n"),
            },
        }

        let again = prompt("Run another prediction? (y/N)", &"")?;
        if !again.eq_ignore_ascii_case("y") {
            break;
        }
        println!();
    }

    Ok(())
}
