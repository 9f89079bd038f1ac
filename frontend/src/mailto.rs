use std::fmt::Write;

use log::warn;

use crate::config::{LEAD_RECIPIENT, WEBSITE_URL};
use crate::lead::{InvestorLead, LeadField};
use crate::relay::{described, format_birth_date, lead_subject, or_not_provided, NO_COMMENTS};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

fn section(body: &mut String, title: &str, rows: &[(&str, String)]) {
    let _ = writeln!(body, "{RULE}\n{title}\n{RULE}");
    for (label, value) in rows {
        let _ = writeln!(body, "▪ {label}: {value}");
    }
    body.push('\n');
}

/// Plain-text registration summary, in pt-BR regardless of page language.
pub fn lead_body(lead: &InvestorLead, timestamp: &str) -> String {
    let mut body = String::new();
    body.push_str("FORMULÁRIO DE REGISTRO DE INVESTIDOR - PELE RARA\n\n");
    let _ = writeln!(body, "📅 Data/Hora: {timestamp} (Horário de Brasília)\n");

    section(
        &mut body,
        "👤 INFORMAÇÕES PESSOAIS",
        &[
            ("Nome Completo", lead.full_name.trim().to_string()),
            ("Email", lead.email.trim().to_string()),
            ("Telefone", lead.phone.trim().to_string()),
            ("CPF", lead.cpf.trim().to_string()),
            ("RG", or_not_provided(&lead.rg)),
            ("Data de Nascimento", format_birth_date(&lead.birth_date)),
            ("Nacionalidade", lead.nationality.trim().to_string()),
        ],
    );
    section(
        &mut body,
        "📍 ENDEREÇO",
        &[
            ("Endereço", lead.address.trim().to_string()),
            ("Cidade", lead.city.trim().to_string()),
            ("Estado", lead.state.trim().to_string()),
            ("CEP", lead.zip_code.trim().to_string()),
            ("País", lead.country.trim().to_string()),
        ],
    );
    section(
        &mut body,
        "💼 INFORMAÇÕES PROFISSIONAIS",
        &[
            ("Ocupação", lead.occupation.trim().to_string()),
            ("Empresa", or_not_provided(&lead.company)),
            ("Cargo", or_not_provided(&lead.position)),
            ("Experiência", described(lead, LeadField::WorkExperience)),
        ],
    );
    section(
        &mut body,
        "💰 INFORMAÇÕES FINANCEIRAS",
        &[
            ("Renda Mensal", described(lead, LeadField::MonthlyIncome)),
            ("Patrimônio Total", described(lead, LeadField::TotalAssets)),
            (
                "Experiência em Investimentos",
                described(lead, LeadField::InvestmentExperience),
            ),
            ("Perfil de Risco", described(lead, LeadField::RiskProfile)),
        ],
    );
    section(
        &mut body,
        "📊 DETALHES DO INVESTIMENTO PRETENDIDO",
        &[
            ("Valor Pretendido", described(lead, LeadField::IntendedInvestment)),
            (
                "Horizonte de Investimento",
                described(lead, LeadField::InvestmentHorizon),
            ),
            ("Motivações", or_not_provided(&lead.motivations)),
        ],
    );
    section(
        &mut body,
        "🏆 QUALIFICAÇÃO COMO INVESTIDOR (CVM)",
        &[
            ("Status", described(lead, LeadField::AccreditedStatus)),
            ("Comprovação", described(lead, LeadField::AccreditationProof)),
            ("Certificações", or_not_provided(&lead.professional_certification)),
        ],
    );

    let comments = lead.additional_comments.trim();
    section(
        &mut body,
        "📝 INFORMAÇÕES ADICIONAIS",
        &[
            ("Como conheceu", described(lead, LeadField::HowDidYouHear)),
            (
                "Comentários",
                if comments.is_empty() {
                    NO_COMMENTS.to_string()
                } else {
                    comments.to_string()
                },
            ),
        ],
    );

    let _ = writeln!(body, "{RULE}\n✅ PRÓXIMOS PASSOS\n{RULE}");
    for (i, item) in [
        "Envio de NDA para assinatura",
        "Agendamento de apresentação detalhada",
        "Processo de due diligence",
        "Estruturação da documentação",
        "Formalização do investimento",
    ]
    .iter()
    .enumerate()
    {
        let _ = writeln!(body, "{}. {}", i + 1, item);
    }
    body.push('\n');

    section(
        &mut body,
        "ℹ️ INFORMAÇÕES IMPORTANTES",
        &[
            ("Investimento Mínimo", "R$ 500.000".to_string()),
            ("Modalidade", "Mútuo Conversível".to_string()),
            ("Setor", "Beleza Tech / Consumo".to_string()),
            ("Website", WEBSITE_URL.to_string()),
        ],
    );
    body.push_str("Este formulário foi enviado através do site oficial da Pele Rara.\n");
    body.push_str("Todos os dados estão protegidos conforme a LGPD.\n");
    body
}

pub fn mailto_url(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub fn lead_mailto_url(lead: &InvestorLead, timestamp: &str) -> String {
    mailto_url(LEAD_RECIPIENT, &lead_subject(lead), &lead_body(lead, timestamp))
}

/// Hands the URL to the browser in a new tab; the user's mail client takes over.
pub fn open_in_new_window(url: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window available to open mail client");
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Failed to open mail client: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::tests::complete_lead;

    #[test]
    fn body_has_every_section_and_described_values() {
        let body = lead_body(&complete_lead(), "01/08/2025, 14:30");
        for heading in [
            "INFORMAÇÕES PESSOAIS",
            "ENDEREÇO",
            "INFORMAÇÕES PROFISSIONAIS",
            "INFORMAÇÕES FINANCEIRAS",
            "DETALHES DO INVESTIMENTO PRETENDIDO",
            "QUALIFICAÇÃO COMO INVESTIDOR (CVM)",
            "INFORMAÇÕES ADICIONAIS",
            "PRÓXIMOS PASSOS",
        ] {
            assert!(body.contains(heading), "missing {heading}");
        }
        assert!(body.contains("▪ Nome Completo: Maria Souza"));
        assert!(body.contains("▪ Renda Mensal: R$ 20.001 - R$ 50.000"));
        assert!(body.contains("▪ RG: Não informado"));
        assert!(body.contains("▪ Comentários: Nenhum comentário adicional"));
        assert!(body.contains("01/08/2025, 14:30"));
    }

    #[test]
    fn url_percent_encodes_subject_and_body() {
        let url = mailto_url("a@b.com", "Olá mundo", "linha 1\nlinha 2 & mais");
        assert_eq!(
            url,
            "mailto:a@b.com?subject=Ol%C3%A1%20mundo&body=linha%201%0Alinha%202%20%26%20mais"
        );
    }

    #[test]
    fn lead_url_targets_the_recipient() {
        let url = lead_mailto_url(&complete_lead(), "now");
        assert!(url.starts_with(&format!("mailto:{}?subject=", LEAD_RECIPIENT)));
        assert!(url.contains("%5BNOVO%20INVESTIDOR%5D%20Maria%20Souza"));
        assert!(!url.contains('\n'));
    }
}
