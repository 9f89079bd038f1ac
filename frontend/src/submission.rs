use chrono::Utc;
use log::{info, warn};

use crate::config::RelayConfig;
use crate::lead::InvestorLead;
use crate::mailto::{lead_mailto_url, open_in_new_window};
use crate::relay::{sao_paulo_timestamp, send_lead, RelayError};

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    Relayed,
    /// The relay was unavailable; the user finishes sending from their mail client.
    Fallback { mailto_url: String },
}

impl SubmissionOutcome {
    pub fn mailto_url(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Relayed => None,
            SubmissionOutcome::Fallback { mailto_url } => Some(mailto_url),
        }
    }
}

/// Decides the outcome of a relay attempt without touching the browser.
pub fn resolve(
    result: Result<(), RelayError>,
    lead: &InvestorLead,
    timestamp: &str,
) -> SubmissionOutcome {
    match result {
        Ok(()) => SubmissionOutcome::Relayed,
        Err(e) => {
            warn!("Relay unavailable, falling back to mail client: {}", e);
            SubmissionOutcome::Fallback {
                mailto_url: lead_mailto_url(lead, timestamp),
            }
        }
    }
}

pub async fn submit_lead(lead: InvestorLead, config: Option<RelayConfig>) -> SubmissionOutcome {
    let result = send_lead(&lead, config.as_ref()).await;
    let outcome = resolve(result, &lead, &sao_paulo_timestamp(Utc::now()));
    match &outcome {
        SubmissionOutcome::Relayed => info!("Lead submission finished via relay"),
        SubmissionOutcome::Fallback { mailto_url } => open_in_new_window(mailto_url),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::tests::complete_lead;

    #[test]
    fn relay_success_needs_no_fallback() {
        let outcome = resolve(Ok(()), &complete_lead(), "now");
        assert_eq!(outcome, SubmissionOutcome::Relayed);
        assert_eq!(outcome.mailto_url(), None);
    }

    #[test]
    fn relay_failures_produce_a_mailto_fallback() {
        let errors = [
            RelayError::NotConfigured,
            RelayError::Network("offline".into()),
            RelayError::Rejected {
                status: 400,
                body: "bad template".into(),
            },
        ];
        for error in errors {
            let outcome = resolve(Err(error), &complete_lead(), "now");
            let url = outcome.mailto_url().expect("fallback url");
            assert!(url.starts_with("mailto:cynthia@pelerara.com.br?subject="));
        }
    }
}
