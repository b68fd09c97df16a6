//! Fact-Check Invoker: turns one claim into one model response.
//!
//! Flow: build_fact_check_prompt → one `TextGenerator::generate` call → CheckResult.
//!
//! Remote failures never escape this module: they come back as
//! `CheckResult::Failed`, which displays as `Error connecting to <service>: <message>`.
//! Callers must reject blank claims and a missing credential before calling in.

use tracing::{debug, warn};

use crate::factcheck::models::CheckResult;
use crate::factcheck::prompts::build_fact_check_prompt;
use crate::llm_client::TextGenerator;

/// Runs one fact-check against `generator`. Exactly one remote call, no retries.
pub async fn check(claim: &str, generator: &dyn TextGenerator) -> CheckResult {
    let prompt = build_fact_check_prompt(claim);
    debug!("Fact-check prompt built ({} chars)", prompt.len());

    match generator.generate(&prompt).await {
        Ok(text) => CheckResult::Completed { text },
        Err(e) => {
            warn!("Call to {} failed: {e}", generator.service_name());
            CheckResult::Failed {
                service: generator.service_name().to_string(),
                message: e.to_string(),
            }
        }
    }
}
