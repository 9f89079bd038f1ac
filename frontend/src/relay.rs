use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::America::Sao_Paulo;
use gloo_net::http::Request;
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::config::{RelayConfig, LEAD_RECIPIENT, LEAD_SOURCE, RELAY_API_URL};
use crate::lead::{describe, InvestorLead, LeadField};

pub const NOT_PROVIDED: &str = "Não informado";
pub const NO_COMMENTS: &str = "Nenhum comentário adicional";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("email relay is not configured")]
    NotConfigured,
    #[error("could not build relay request: {0}")]
    Request(String),
    #[error("relay request failed: {0}")]
    Network(String),
    #[error("relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Field names must match the template configured on the relay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateParams {
    pub to_email: String,
    pub subject: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub rg: String,
    pub birth_date: String,
    pub nationality: String,
    pub full_address: String,
    pub occupation: String,
    pub company: String,
    pub position: String,
    pub work_experience: String,
    pub monthly_income: String,
    pub total_assets: String,
    pub investment_experience: String,
    pub risk_profile: String,
    pub intended_investment: String,
    pub investment_horizon: String,
    pub motivations: String,
    pub accredited_status: String,
    pub accreditation_proof: String,
    pub professional_certification: String,
    pub how_did_you_hear: String,
    pub additional_comments: String,
    pub timestamp: String,
    pub source: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

pub(crate) fn or_not_provided(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value.to_string()
    }
}

/// pt-BR description of a coded field, or the placeholder when empty.
pub(crate) fn described(lead: &InvestorLead, field: LeadField) -> String {
    let code = lead.get(field).trim();
    if code.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        describe(field, code)
    }
}

pub fn format_birth_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return NOT_PROVIDED.to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Brasília wall-clock time, `DD/MM/YYYY, HH:MM`.
pub fn sao_paulo_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&Sao_Paulo)
        .format("%d/%m/%Y, %H:%M")
        .to_string()
}

pub fn lead_subject(lead: &InvestorLead) -> String {
    format!(
        "[NOVO INVESTIDOR] {} - {}",
        lead.full_name.trim(),
        describe(LeadField::IntendedInvestment, lead.intended_investment.trim())
    )
}

impl TemplateParams {
    pub fn from_lead(lead: &InvestorLead, timestamp: &str) -> Self {
        let comments = lead.additional_comments.trim();
        Self {
            to_email: LEAD_RECIPIENT.to_string(),
            subject: lead_subject(lead),
            full_name: lead.full_name.trim().to_string(),
            email: lead.email.trim().to_string(),
            phone: lead.phone.trim().to_string(),
            cpf: lead.cpf.trim().to_string(),
            rg: or_not_provided(&lead.rg),
            birth_date: format_birth_date(&lead.birth_date),
            nationality: lead.nationality.trim().to_string(),
            full_address: lead.full_address(),
            occupation: lead.occupation.trim().to_string(),
            company: or_not_provided(&lead.company),
            position: or_not_provided(&lead.position),
            work_experience: described(lead, LeadField::WorkExperience),
            monthly_income: described(lead, LeadField::MonthlyIncome),
            total_assets: described(lead, LeadField::TotalAssets),
            investment_experience: described(lead, LeadField::InvestmentExperience),
            risk_profile: described(lead, LeadField::RiskProfile),
            intended_investment: described(lead, LeadField::IntendedInvestment),
            investment_horizon: described(lead, LeadField::InvestmentHorizon),
            motivations: or_not_provided(&lead.motivations),
            accredited_status: described(lead, LeadField::AccreditedStatus),
            accreditation_proof: described(lead, LeadField::AccreditationProof),
            professional_certification: or_not_provided(&lead.professional_certification),
            how_did_you_hear: described(lead, LeadField::HowDidYouHear),
            additional_comments: if comments.is_empty() {
                NO_COMMENTS.to_string()
            } else {
                comments.to_string()
            },
            timestamp: timestamp.to_string(),
            source: LEAD_SOURCE.to_string(),
        }
    }
}

/// Sends one lead through the hosted relay. No retries.
pub async fn send_lead(lead: &InvestorLead, config: Option<&RelayConfig>) -> Result<(), RelayError> {
    let config = config.ok_or(RelayError::NotConfigured)?;
    let params = TemplateParams::from_lead(lead, &sao_paulo_timestamp(Utc::now()));
    let body = SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: &params,
    };

    debug!("Posting lead to relay with key {}", config.masked_key());
    let request = Request::post(RELAY_API_URL)
        .json(&body)
        .map_err(|e| RelayError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| RelayError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(RelayError::Rejected { status, body });
    }

    info!("Lead relayed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::tests::complete_lead;
    use chrono::TimeZone;

    #[test]
    fn template_params_describe_codes_in_portuguese() {
        let params = TemplateParams::from_lead(&complete_lead(), "01/08/2025, 14:30");

        assert_eq!(params.to_email, LEAD_RECIPIENT);
        assert_eq!(
            params.subject,
            "[NOVO INVESTIDOR] Maria Souza - R$ 500.001 - R$ 1.000.000"
        );
        assert_eq!(params.monthly_income, "R$ 20.001 - R$ 50.000");
        assert_eq!(params.total_assets, "R$ 1.000.001 - R$ 5.000.000");
        assert_eq!(
            params.accredited_status,
            "Possuo patrimônio financeiro de pelo menos R$ 1.000.000"
        );
        assert_eq!(params.timestamp, "01/08/2025, 14:30");
        assert_eq!(params.source, LEAD_SOURCE);
    }

    #[test]
    fn empty_optionals_get_placeholders() {
        let params = TemplateParams::from_lead(&complete_lead(), "now");
        assert_eq!(params.rg, NOT_PROVIDED);
        assert_eq!(params.birth_date, NOT_PROVIDED);
        assert_eq!(params.company, NOT_PROVIDED);
        assert_eq!(params.investment_horizon, NOT_PROVIDED);
        assert_eq!(params.how_did_you_hear, NOT_PROVIDED);
        assert_eq!(params.additional_comments, NO_COMMENTS);
    }

    #[test]
    fn birth_date_is_shown_day_first() {
        assert_eq!(format_birth_date("1985-03-07"), "07/03/1985");
        assert_eq!(format_birth_date(""), NOT_PROVIDED);
        assert_eq!(format_birth_date("07/03/1985"), "07/03/1985");
    }

    #[test]
    fn timestamp_uses_brasilia_time() {
        let now = Utc.with_ymd_and_hms(2025, 8, 1, 17, 30, 0).unwrap();
        assert_eq!(sao_paulo_timestamp(now), "01/08/2025, 14:30");
    }

    #[test]
    fn request_body_uses_relay_field_names() {
        let config = RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("pub")).unwrap();
        let params = TemplateParams::from_lead(&complete_lead(), "now");
        let body = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: &params,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["user_id"], "pub");
        assert_eq!(json["template_params"]["full_name"], "Maria Souza");
        assert_eq!(json["template_params"]["full_address"], complete_lead().full_address());
    }
}
