use yew::prelude::*;

use crate::lead::{Consent, LeadError, LeadField};

pub mod en;
pub mod es;
pub mod pt_br;

pub const LANGUAGE_STORAGE_KEY: &str = "language";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    PtBr,
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::PtBr, Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::PtBr => "pt-BR",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Unknown codes fall back to pt-BR.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "en" => Language::En,
            "es" => Language::Es,
            _ => Language::PtBr,
        }
    }

    pub fn selector_label(self) -> &'static str {
        match self {
            Language::PtBr => "🇧🇷 Português",
            Language::En => "🇺🇸 English",
            Language::Es => "🇪🇸 Español",
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::PtBr => &pt_br::PT_BR,
            Language::En => &en::EN,
            Language::Es => &es::ES,
        }
    }
}

/// Shared through a `ContextProvider` at the app root.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(|| LanguageContext {
        language: Language::default(),
        set_language: Callback::noop(),
    })
}

#[hook]
pub fn use_translations() -> &'static Translations {
    use_language().language.translations()
}

/// Splits a line on `*` markers: odd segments are emphasized.
pub fn emphasis_spans(line: &str) -> Vec<(&str, bool)> {
    line.split('*')
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| (part, i % 2 == 1))
        .collect()
}

pub fn render_emphasized(line: &str) -> Html {
    html! {
        <>
            { for emphasis_spans(line).into_iter().map(|(text, strong)| {
                if strong {
                    html! { <strong>{ text }</strong> }
                } else {
                    html! { { text } }
                }
            }) }
        </>
    }
}

pub struct Product {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Entry {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct FundAllocation {
    pub title: &'static str,
    pub items: [&'static str; 3],
    pub impact_label: &'static str,
    pub impact_value: &'static str,
}

pub struct ModalCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub minimum_badge: &'static str,
    pub recommended: &'static str,
    pub form_title: &'static str,
    pub official_contact: &'static str,
    pub register_title: &'static str,
    pub register_description: &'static str,
    pub whatsapp_title: &'static str,
    pub whatsapp_description: &'static str,
    pub email_title: &'static str,
    pub email_description: &'static str,
    pub website_title: &'static str,
    pub website_description: &'static str,
    pub back: &'static str,
    pub close: &'static str,
}

pub struct FormCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub step_titles: [&'static str; 5],
    pub step_counter: &'static str,
    pub step_of: &'static str,

    pub qualification_section: &'static str,
    pub terms_section: &'static str,

    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub cpf: &'static str,
    pub rg: &'static str,
    pub birth_date: &'static str,
    pub nationality: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip_code: &'static str,
    pub country: &'static str,
    pub occupation: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub work_experience: &'static str,
    pub monthly_income: &'static str,
    pub total_assets: &'static str,
    pub investment_experience: &'static str,
    pub risk_profile: &'static str,
    pub intended_investment: &'static str,
    pub investment_horizon: &'static str,
    pub motivations: &'static str,
    pub accredited_status: &'static str,
    pub accreditation_proof: &'static str,
    pub professional_certification: &'static str,
    pub how_did_you_hear: &'static str,
    pub additional_comments: &'static str,

    pub full_name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub phone_placeholder: &'static str,
    pub cpf_placeholder: &'static str,
    pub rg_placeholder: &'static str,
    pub address_placeholder: &'static str,
    pub city_placeholder: &'static str,
    pub zip_code_placeholder: &'static str,
    pub occupation_placeholder: &'static str,
    pub company_placeholder: &'static str,
    pub position_placeholder: &'static str,
    pub motivations_placeholder: &'static str,
    pub certification_placeholder: &'static str,
    pub comments_placeholder: &'static str,

    pub select_option: &'static str,
    pub select_state: &'static str,
    pub select_income_range: &'static str,
    pub select_assets_range: &'static str,
    pub select_investment_value: &'static str,
    pub select_qualification_proof: &'static str,

    pub work_experience_options: [&'static str; 6],
    pub income_options: [&'static str; 6],
    pub assets_options: [&'static str; 6],
    pub investment_experience_options: [&'static str; 4],
    pub risk_profile_options: [&'static str; 4],
    pub investment_value_options: [&'static str; 6],
    pub investment_horizon_options: [&'static str; 3],
    pub accredited_status_options: [&'static str; 4],
    pub accreditation_proof_options: [&'static str; 5],
    pub how_did_you_hear_options: [&'static str; 7],

    pub qualified_warning_title: &'static str,
    pub qualified_warning_text: &'static str,

    pub agree_terms: &'static str,
    pub agree_privacy: &'static str,
    pub confirm_accuracy: &'static str,
    pub authorize_contact: &'static str,

    pub previous: &'static str,
    pub next: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,

    pub missing_field: &'static str,
    pub missing_consents: &'static str,
    pub relay_success: &'static str,
    pub fallback_opened: &'static str,

    pub interest_registered: &'static str,
    pub relay_success_detail: &'static str,
    pub next_steps_title: &'static str,
    pub next_steps: [&'static str; 4],
    pub email_opened_automatically: &'static str,
    pub recipient_email: &'static str,
    pub whatsapp_contact: &'static str,
    pub email_not_opened: &'static str,
    pub open_email_button: &'static str,
    pub submit_new_interest: &'static str,
}

impl FormCopy {
    pub fn field_label(&self, field: LeadField) -> &'static str {
        match field {
            LeadField::FullName => self.full_name,
            LeadField::Email => self.email,
            LeadField::Phone => self.phone,
            LeadField::Cpf => self.cpf,
            LeadField::Rg => self.rg,
            LeadField::BirthDate => self.birth_date,
            LeadField::Nationality => self.nationality,
            LeadField::Address => self.address,
            LeadField::City => self.city,
            LeadField::State => self.state,
            LeadField::ZipCode => self.zip_code,
            LeadField::Country => self.country,
            LeadField::Occupation => self.occupation,
            LeadField::Company => self.company,
            LeadField::Position => self.position,
            LeadField::WorkExperience => self.work_experience,
            LeadField::MonthlyIncome => self.monthly_income,
            LeadField::TotalAssets => self.total_assets,
            LeadField::InvestmentExperience => self.investment_experience,
            LeadField::RiskProfile => self.risk_profile,
            LeadField::IntendedInvestment => self.intended_investment,
            LeadField::InvestmentHorizon => self.investment_horizon,
            LeadField::Motivations => self.motivations,
            LeadField::AccreditedStatus => self.accredited_status,
            LeadField::AccreditationProof => self.accreditation_proof,
            LeadField::ProfessionalCertification => self.professional_certification,
            LeadField::HowDidYouHear => self.how_did_you_hear,
            LeadField::AdditionalComments => self.additional_comments,
        }
    }

    pub fn consent_label(&self, consent: Consent) -> &'static str {
        match consent {
            Consent::Terms => self.agree_terms,
            Consent::Privacy => self.agree_privacy,
            Consent::Accuracy => self.confirm_accuracy,
            Consent::Contact => self.authorize_contact,
        }
    }

    /// Toast text for a blocked step or submission.
    pub fn error_message(&self, error: &LeadError) -> String {
        match error {
            LeadError::MissingField(field) => {
                format!("{} {}", self.missing_field, self.field_label(*field))
            }
            LeadError::MissingConsent(_) | LeadError::UnknownStep(_) => {
                self.missing_consents.to_string()
            }
        }
    }

    /// Prompt shown as the empty first option of a select.
    pub fn select_prompt(&self, field: LeadField) -> &'static str {
        match field {
            LeadField::State => self.select_state,
            LeadField::MonthlyIncome => self.select_income_range,
            LeadField::TotalAssets => self.select_assets_range,
            LeadField::IntendedInvestment => self.select_investment_value,
            LeadField::AccreditationProof => self.select_qualification_proof,
            _ => self.select_option,
        }
    }

    /// Localized labels for a coded select field, in catalogue order.
    pub fn option_labels(&'static self, field: LeadField) -> &'static [&'static str] {
        match field {
            LeadField::WorkExperience => &self.work_experience_options,
            LeadField::MonthlyIncome => &self.income_options,
            LeadField::TotalAssets => &self.assets_options,
            LeadField::InvestmentExperience => &self.investment_experience_options,
            LeadField::RiskProfile => &self.risk_profile_options,
            LeadField::IntendedInvestment => &self.investment_value_options,
            LeadField::InvestmentHorizon => &self.investment_horizon_options,
            LeadField::AccreditedStatus => &self.accredited_status_options,
            LeadField::AccreditationProof => &self.accreditation_proof_options,
            LeadField::HowDidYouHear => &self.how_did_you_hear_options,
            _ => &[],
        }
    }
}

pub struct Translations {
    pub hero_title: [&'static str; 3],
    pub hero_subtitle: &'static str,
    pub investment_badge: &'static str,
    pub cta_button: &'static str,

    pub numbers_title: &'static str,
    pub numbers_subtitle: &'static str,
    pub market_label: &'static str,
    pub valuation_label: &'static str,
    pub patents_label: &'static str,
    pub growth_label: &'static str,
    pub global_market: &'static str,

    pub problem_title: &'static str,
    pub problem_subtitle: &'static str,
    pub problem_description: &'static str,
    pub problem_list: [&'static str; 4],

    pub solution_title: &'static str,
    pub solution_subtitle: [&'static str; 2],
    pub solution_patents: &'static str,
    pub products: [Product; 3],

    pub validation_title: &'static str,
    pub validation_subtitle: &'static str,
    pub validation_stats: [Entry; 4],

    pub growth_title: &'static str,
    pub growth_subtitle: &'static str,
    pub growth_milestones: [Entry; 6],
    pub growth_actual: &'static str,
    pub growth_projection: &'static str,
    pub growth_rate: &'static str,
    pub play: &'static str,
    pub pause: &'static str,

    pub investment_title: &'static str,
    pub investment_subtitle: &'static str,
    pub modality: &'static str,
    pub modality_value: &'static str,
    pub capture_goal: &'static str,
    pub minimum_ticket: &'static str,
    pub investment_format: &'static str,
    pub investment_format_value: &'static str,
    pub term: &'static str,
    pub term_value: &'static str,

    pub protection_title: &'static str,
    pub protection_subtitle: &'static str,
    pub protections: [Entry; 6],

    pub funds_title: &'static str,
    pub funds_subtitle: &'static str,
    pub funds_overview: &'static str,
    pub fund_allocations: [FundAllocation; 4],

    pub timeline_title: &'static str,
    pub timeline_subtitle: &'static str,
    pub timeline: [Entry; 6],

    pub roi_title: &'static str,
    pub roi_subtitle: &'static str,
    pub investment_value: &'static str,
    pub equity_participation: &'static str,
    pub investment_period: &'static str,
    pub years: &'static str,
    pub growth_scenario: &'static str,
    pub realistic: &'static str,
    pub optimistic: &'static str,
    pub scenario_assumptions: &'static str,
    pub realistic_assumptions: [&'static str; 4],
    pub optimistic_assumptions: [&'static str; 4],
    pub initial_investment: &'static str,
    pub final_value_label: &'static str,
    pub total_return: &'static str,
    pub total_roi: &'static str,
    pub annualized_return: &'static str,
    pub per_year: &'static str,
    pub roi_warning: &'static str,
    pub risk_disclaimer: &'static str,

    pub cta_title: &'static str,
    pub cta_description: [&'static str; 2],
    pub cta_primary: &'static str,
    pub download_presentation: &'static str,

    pub form: FormCopy,
    pub modal: ModalCopy,

    pub faq_title: &'static str,
    pub faq_subtitle: &'static str,
    pub faq_contact: &'static str,
    pub faq_contact_link: &'static str,
    pub faq: [Faq; 6],

    pub footer_text: &'static str,
    pub footer_motto: &'static str,
    pub footer_additional: &'static str,

    pub investment_email_subject: &'static str,
    pub investment_email_body: &'static str,
    pub whatsapp_message: &'static str,
    pub whatsapp_tooltip: &'static str,
    pub language_selector_label: &'static str,
    pub image_unavailable: &'static str,
    pub not_found_title: &'static str,
    pub not_found_text: &'static str,
    pub back_home: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::{LeadField, OPTION_FIELDS};

    #[test]
    fn language_codes_round_trip_and_fall_back() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), language);
        }
        assert_eq!(Language::from_code("fr"), Language::PtBr);
        assert_eq!(Language::from_code(""), Language::PtBr);
        assert_eq!(Language::default(), Language::PtBr);
    }

    #[test]
    fn switching_language_changes_rendered_labels() {
        let pt = Language::PtBr.translations();
        let en = Language::En.translations();
        let es = Language::Es.translations();

        let picks: [fn(&Translations) -> &'static str; 7] = [
            |t| t.hero_subtitle,
            |t| t.roi_title,
            |t| t.investment_title,
            |t| t.form.full_name,
            |t| t.form.submit,
            |t| t.faq_title,
            |t| t.footer_text,
        ];
        for pick in picks {
            assert_ne!(pick(pt), pick(en));
            assert_ne!(pick(en), pick(es));
        }
        assert_ne!(pt.form.missing_field, en.form.missing_field);
    }

    #[test]
    fn every_option_field_has_labels_in_every_language() {
        for language in Language::ALL {
            let form = &language.translations().form;
            for (field, codes) in OPTION_FIELDS {
                assert_eq!(
                    form.option_labels(*field).len(),
                    codes.len(),
                    "{:?} in {}",
                    field,
                    language.code()
                );
            }
            assert!(form.option_labels(LeadField::FullName).is_empty());
        }
    }

    fn risk_labels(language: Language) -> &'static [&'static str] {
        language.translations().form.option_labels(LeadField::RiskProfile)
    }

    #[test]
    fn option_labels_outlive_the_lookup() {
        let labels: Vec<&'static str> = Language::ALL
            .iter()
            .flat_map(|language| risk_labels(*language).iter().copied())
            .collect();
        assert_eq!(labels.len(), 3 * risk_labels(Language::PtBr).len());
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn errors_name_the_missing_field_in_the_active_language() {
        let pt = &Language::PtBr.translations().form;
        let en = &Language::En.translations().form;
        let missing = LeadError::MissingField(LeadField::Cpf);
        assert_eq!(
            pt.error_message(&missing),
            format!("{} {}", pt.missing_field, pt.cpf)
        );
        assert!(en.error_message(&missing).ends_with(en.cpf));
        assert_eq!(
            en.error_message(&LeadError::MissingConsent(Consent::Privacy)),
            en.missing_consents
        );
    }

    #[test]
    fn emphasis_markers_split_into_strong_spans() {
        assert_eq!(
            emphasis_spans("Tecnologias *Patenteadas*"),
            vec![("Tecnologias ", false), ("Patenteadas", true)]
        );
        assert_eq!(
            emphasis_spans("*Patented* Technologies"),
            vec![("Patented", true), (" Technologies", false)]
        );
        assert_eq!(emphasis_spans("plain"), vec![("plain", false)]);
    }
}
