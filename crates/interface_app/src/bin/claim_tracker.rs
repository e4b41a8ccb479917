//! Claim Tracker - Console Binary
//!
//! Runs a scripted session against an in-memory store: previews a total,
//! submits a claim, shows the tracking and manager screens, then records
//! manager decisions.
//!
//! # Environment Variables
//!
//! * `CLAIMS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `CLAIMS_LECTURER_NAME` - Identity recorded on submitted claims (default: Current User)
//! * `CLAIMS_SEED_SAMPLE_DATA` - Load the demonstration claims (default: true)

use anyhow::Context;

use domain_claims::ClaimStatus;
use interface_app::{
    config::AppConfig, telemetry::init_tracing, ClaimForm, ClaimsConsole, Notice,
};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load CLAIMS_* configuration")?;
    init_tracing(&config.log_level).context("failed to initialise logging")?;

    tracing::info!(
        lecturer = %config.lecturer_name,
        seed_sample_data = config.seed_sample_data,
        "Starting claim tracker"
    );

    let console = ClaimsConsole::new(&config).context("failed to seed sample claims")?;

    let form = ClaimForm::new("12.5", "80").with_notes("Exam marking");
    println!("Total preview: {}", form.total_preview());
    match console.submit_form(form) {
        Ok(claim) => show(&Notice::info(
            "Success",
            format!("Claim {} submitted successfully!", claim.id()),
        )),
        Err(err) => show(&Notice::from(&err)),
    }

    // An empty hours field is refused without touching the store
    if let Err(err) = console.submit_form(ClaimForm::new("", "80")) {
        show(&Notice::from(&err));
    }

    println!("\n== Track Claims ==\n{}", console.tracking_view());
    println!("== Manager Review ==\n{}", console.manager_view());

    let pending = console.store().list_by_status(ClaimStatus::Pending);
    for (i, claim) in pending.iter().enumerate() {
        let notice = if i % 2 == 0 {
            console.approve(claim.id())?
        } else {
            console.reject(claim.id())?
        };
        show(&notice);
    }

    // A second decision on a decided claim is refused
    if let Some(first) = pending.first() {
        if let Err(err) = console.reject(first.id()) {
            show(&Notice::from(&err));
        }
    }

    println!("\n== Track Claims ==\n{}", console.tracking_view());
    println!("== Manager Review ==\n{}", console.manager_view());

    tracing::info!("Claim tracker session complete");
    Ok(())
}

fn show(notice: &Notice) {
    println!("[{:?}] {}: {}", notice.severity, notice.title, notice.message);
}
