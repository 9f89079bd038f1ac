use thiserror::Error;

use crate::i18n::pt_br::PT_BR;

pub const TOTAL_STEPS: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadField {
    FullName,
    Email,
    Phone,
    Cpf,
    Rg,
    BirthDate,
    Nationality,
    Address,
    City,
    State,
    ZipCode,
    Country,
    Occupation,
    Company,
    Position,
    WorkExperience,
    MonthlyIncome,
    TotalAssets,
    InvestmentExperience,
    RiskProfile,
    IntendedInvestment,
    InvestmentHorizon,
    Motivations,
    AccreditedStatus,
    AccreditationProof,
    ProfessionalCertification,
    HowDidYouHear,
    AdditionalComments,
}

impl LeadField {
    /// Stable snake_case name, used in logs.
    pub fn key(self) -> &'static str {
        match self {
            LeadField::FullName => "full_name",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Cpf => "cpf",
            LeadField::Rg => "rg",
            LeadField::BirthDate => "birth_date",
            LeadField::Nationality => "nationality",
            LeadField::Address => "address",
            LeadField::City => "city",
            LeadField::State => "state",
            LeadField::ZipCode => "zip_code",
            LeadField::Country => "country",
            LeadField::Occupation => "occupation",
            LeadField::Company => "company",
            LeadField::Position => "position",
            LeadField::WorkExperience => "work_experience",
            LeadField::MonthlyIncome => "monthly_income",
            LeadField::TotalAssets => "total_assets",
            LeadField::InvestmentExperience => "investment_experience",
            LeadField::RiskProfile => "risk_profile",
            LeadField::IntendedInvestment => "intended_investment",
            LeadField::InvestmentHorizon => "investment_horizon",
            LeadField::Motivations => "motivations",
            LeadField::AccreditedStatus => "accredited_status",
            LeadField::AccreditationProof => "accreditation_proof",
            LeadField::ProfessionalCertification => "professional_certification",
            LeadField::HowDidYouHear => "how_did_you_hear",
            LeadField::AdditionalComments => "additional_comments",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Consent {
    Terms,
    Privacy,
    Accuracy,
    Contact,
}

impl Consent {
    pub const ALL: [Consent; 4] = [
        Consent::Terms,
        Consent::Privacy,
        Consent::Accuracy,
        Consent::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Consent::Terms => "agree_terms",
            Consent::Privacy => "agree_privacy",
            Consent::Accuracy => "confirm_accuracy",
            Consent::Contact => "authorize_contact",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LeadError {
    #[error("required field `{}` is empty", .0.key())]
    MissingField(LeadField),
    #[error("consent `{}` was not given", .0.key())]
    MissingConsent(Consent),
    #[error("step {0} does not exist")]
    UnknownStep(u8),
}

/// Required fields per form step, 1-based. Step 5 is consents only.
pub const STEP_REQUIRED: [&[LeadField]; 4] = [
    &[LeadField::FullName, LeadField::Email, LeadField::Phone, LeadField::Cpf],
    &[LeadField::Address, LeadField::City, LeadField::State, LeadField::ZipCode],
    &[LeadField::Occupation, LeadField::MonthlyIncome, LeadField::TotalAssets],
    &[LeadField::IntendedInvestment, LeadField::AccreditedStatus],
];

pub const WORK_EXPERIENCE_CODES: [&str; 6] = ["0-2", "3-5", "6-10", "11-15", "16-20", "20+"];
pub const INCOME_CODES: [&str; 6] = ["0-5k", "5k-10k", "10k-20k", "20k-50k", "50k-100k", "100k+"];
pub const ASSETS_CODES: [&str; 6] = ["0-100k", "100k-300k", "300k-1M", "1M-5M", "5M-10M", "10M+"];
pub const INVESTMENT_EXPERIENCE_CODES: [&str; 4] =
    ["iniciante", "intermediario", "avancado", "profissional"];
pub const RISK_PROFILE_CODES: [&str; 4] = ["conservador", "moderado", "arrojado", "super-arrojado"];
pub const INTENDED_INVESTMENT_CODES: [&str; 6] =
    ["50k-100k", "100k-250k", "250k-500k", "500k-1M", "1M-2M", "2M+"];
pub const INVESTMENT_HORIZON_CODES: [&str; 3] = ["3-5", "5-10", "10+"];
pub const ACCREDITED_STATUS_CODES: [&str; 4] =
    ["patrimonio", "certificacao", "profissional", "verificar"];
pub const ACCREDITATION_PROOF_CODES: [&str; 5] = [
    "extrato-corretora",
    "declaracao-ir",
    "certificado",
    "carta-empregador",
    "outros",
];
pub const HOW_DID_YOU_HEAR_CODES: [&str; 7] =
    ["linkedin", "google", "indicacao", "midia", "evento", "site", "outros"];

/// Coded select fields and their catalogues.
pub const OPTION_FIELDS: &[(LeadField, &[&str])] = &[
    (LeadField::WorkExperience, &WORK_EXPERIENCE_CODES),
    (LeadField::MonthlyIncome, &INCOME_CODES),
    (LeadField::TotalAssets, &ASSETS_CODES),
    (LeadField::InvestmentExperience, &INVESTMENT_EXPERIENCE_CODES),
    (LeadField::RiskProfile, &RISK_PROFILE_CODES),
    (LeadField::IntendedInvestment, &INTENDED_INVESTMENT_CODES),
    (LeadField::InvestmentHorizon, &INVESTMENT_HORIZON_CODES),
    (LeadField::AccreditedStatus, &ACCREDITED_STATUS_CODES),
    (LeadField::AccreditationProof, &ACCREDITATION_PROOF_CODES),
    (LeadField::HowDidYouHear, &HOW_DID_YOU_HEAR_CODES),
];

pub const BRAZILIAN_STATES: [(&str, &str); 27] = [
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AP", "Amapá"),
    ("AM", "Amazonas"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MT", "Mato Grosso"),
    ("MS", "Mato Grosso do Sul"),
    ("MG", "Minas Gerais"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RS", "Rio Grande do Sul"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("SC", "Santa Catarina"),
    ("SP", "São Paulo"),
    ("SE", "Sergipe"),
    ("TO", "Tocantins"),
];

pub fn option_codes(field: LeadField) -> &'static [&'static str] {
    OPTION_FIELDS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, codes)| *codes)
        .unwrap_or(&[])
}

/// pt-BR label for a coded value. Unknown codes pass through.
pub fn describe(field: LeadField, code: &str) -> String {
    let labels = PT_BR.form.option_labels(field);
    option_codes(field)
        .iter()
        .position(|c| *c == code)
        .and_then(|i| labels.get(i))
        .map(|label| label.to_string())
        .unwrap_or_else(|| code.to_string())
}

#[derive(Clone, Debug, PartialEq)]
pub struct InvestorLead {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub rg: String,
    pub birth_date: String,
    pub nationality: String,

    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,

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

    pub agree_terms: bool,
    pub agree_privacy: bool,
    pub confirm_accuracy: bool,
    pub authorize_contact: bool,
}

impl Default for InvestorLead {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            cpf: String::new(),
            rg: String::new(),
            birth_date: String::new(),
            nationality: "Brasileiro".to_string(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "Brasil".to_string(),
            occupation: String::new(),
            company: String::new(),
            position: String::new(),
            work_experience: String::new(),
            monthly_income: String::new(),
            total_assets: String::new(),
            investment_experience: String::new(),
            risk_profile: String::new(),
            intended_investment: String::new(),
            investment_horizon: String::new(),
            motivations: String::new(),
            accredited_status: String::new(),
            accreditation_proof: String::new(),
            professional_certification: String::new(),
            how_did_you_hear: String::new(),
            additional_comments: String::new(),
            agree_terms: false,
            agree_privacy: false,
            confirm_accuracy: false,
            authorize_contact: false,
        }
    }
}

impl InvestorLead {
    fn slot_mut(&mut self, field: LeadField) -> &mut String {
        match field {
            LeadField::FullName => &mut self.full_name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Cpf => &mut self.cpf,
            LeadField::Rg => &mut self.rg,
            LeadField::BirthDate => &mut self.birth_date,
            LeadField::Nationality => &mut self.nationality,
            LeadField::Address => &mut self.address,
            LeadField::City => &mut self.city,
            LeadField::State => &mut self.state,
            LeadField::ZipCode => &mut self.zip_code,
            LeadField::Country => &mut self.country,
            LeadField::Occupation => &mut self.occupation,
            LeadField::Company => &mut self.company,
            LeadField::Position => &mut self.position,
            LeadField::WorkExperience => &mut self.work_experience,
            LeadField::MonthlyIncome => &mut self.monthly_income,
            LeadField::TotalAssets => &mut self.total_assets,
            LeadField::InvestmentExperience => &mut self.investment_experience,
            LeadField::RiskProfile => &mut self.risk_profile,
            LeadField::IntendedInvestment => &mut self.intended_investment,
            LeadField::InvestmentHorizon => &mut self.investment_horizon,
            LeadField::Motivations => &mut self.motivations,
            LeadField::AccreditedStatus => &mut self.accredited_status,
            LeadField::AccreditationProof => &mut self.accreditation_proof,
            LeadField::ProfessionalCertification => &mut self.professional_certification,
            LeadField::HowDidYouHear => &mut self.how_did_you_hear,
            LeadField::AdditionalComments => &mut self.additional_comments,
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Cpf => &self.cpf,
            LeadField::Rg => &self.rg,
            LeadField::BirthDate => &self.birth_date,
            LeadField::Nationality => &self.nationality,
            LeadField::Address => &self.address,
            LeadField::City => &self.city,
            LeadField::State => &self.state,
            LeadField::ZipCode => &self.zip_code,
            LeadField::Country => &self.country,
            LeadField::Occupation => &self.occupation,
            LeadField::Company => &self.company,
            LeadField::Position => &self.position,
            LeadField::WorkExperience => &self.work_experience,
            LeadField::MonthlyIncome => &self.monthly_income,
            LeadField::TotalAssets => &self.total_assets,
            LeadField::InvestmentExperience => &self.investment_experience,
            LeadField::RiskProfile => &self.risk_profile,
            LeadField::IntendedInvestment => &self.intended_investment,
            LeadField::InvestmentHorizon => &self.investment_horizon,
            LeadField::Motivations => &self.motivations,
            LeadField::AccreditedStatus => &self.accredited_status,
            LeadField::AccreditationProof => &self.accreditation_proof,
            LeadField::ProfessionalCertification => &self.professional_certification,
            LeadField::HowDidYouHear => &self.how_did_you_hear,
            LeadField::AdditionalComments => &self.additional_comments,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn consent(&self, consent: Consent) -> bool {
        match consent {
            Consent::Terms => self.agree_terms,
            Consent::Privacy => self.agree_privacy,
            Consent::Accuracy => self.confirm_accuracy,
            Consent::Contact => self.authorize_contact,
        }
    }

    pub fn set_consent(&mut self, consent: Consent, given: bool) {
        match consent {
            Consent::Terms => self.agree_terms = given,
            Consent::Privacy => self.agree_privacy = given,
            Consent::Accuracy => self.confirm_accuracy = given,
            Consent::Contact => self.authorize_contact = given,
        }
    }

    pub fn validate_step(&self, step: u8) -> Result<(), LeadError> {
        match step {
            1..=4 => {
                let required = STEP_REQUIRED[usize::from(step - 1)];
                match required.iter().find(|f| self.get(**f).trim().is_empty()) {
                    Some(field) => Err(LeadError::MissingField(*field)),
                    None => Ok(()),
                }
            }
            5 => match Consent::ALL.iter().find(|c| !self.consent(**c)) {
                Some(consent) => Err(LeadError::MissingConsent(*consent)),
                None => Ok(()),
            },
            other => Err(LeadError::UnknownStep(other)),
        }
    }

    pub fn validate(&self) -> Result<(), LeadError> {
        (1..=TOTAL_STEPS).try_for_each(|step| self.validate_step(step))
    }

    pub fn full_address(&self) -> String {
        format!(
            "{}, {}/{} - CEP: {} - {}",
            self.address, self.city, self.state, self.zip_code, self.country
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn complete_lead() -> InvestorLead {
        let mut lead = InvestorLead::default();
        lead.set(LeadField::FullName, "Maria Souza");
        lead.set(LeadField::Email, "maria@example.com");
        lead.set(LeadField::Phone, "(31) 98888-7777");
        lead.set(LeadField::Cpf, "123.456.789-00");
        lead.set(LeadField::Address, "Rua das Flores, 100");
        lead.set(LeadField::City, "Belo Horizonte");
        lead.set(LeadField::State, "MG");
        lead.set(LeadField::ZipCode, "30100-000");
        lead.set(LeadField::Occupation, "Médica");
        lead.set(LeadField::MonthlyIncome, "20k-50k");
        lead.set(LeadField::TotalAssets, "1M-5M");
        lead.set(LeadField::IntendedInvestment, "500k-1M");
        lead.set(LeadField::AccreditedStatus, "patrimonio");
        for consent in Consent::ALL {
            lead.set_consent(consent, true);
        }
        lead
    }

    #[test]
    fn defaults_prefill_nationality_and_country() {
        let lead = InvestorLead::default();
        assert_eq!(lead.nationality, "Brasileiro");
        assert_eq!(lead.country, "Brasil");
        assert!(lead.full_name.is_empty());
        assert!(Consent::ALL.iter().all(|c| !lead.consent(*c)));
    }

    #[test]
    fn complete_lead_validates() {
        assert_eq!(complete_lead().validate(), Ok(()));
    }

    #[test]
    fn each_required_field_blocks_its_step() {
        for (index, fields) in STEP_REQUIRED.iter().enumerate() {
            let step = index as u8 + 1;
            for field in fields.iter() {
                let mut lead = complete_lead();
                lead.set(*field, "   ");
                assert_eq!(lead.validate_step(step), Err(LeadError::MissingField(*field)));
                assert_eq!(lead.validate(), Err(LeadError::MissingField(*field)));
            }
        }
    }

    #[test]
    fn optional_fields_do_not_block() {
        let mut lead = complete_lead();
        lead.set(LeadField::Rg, "");
        lead.set(LeadField::Company, "");
        lead.set(LeadField::AdditionalComments, "");
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn every_consent_is_required() {
        for consent in Consent::ALL {
            let mut lead = complete_lead();
            lead.set_consent(consent, false);
            assert_eq!(lead.validate_step(5), Err(LeadError::MissingConsent(consent)));
        }
    }

    #[test]
    fn first_failing_step_is_reported() {
        let mut lead = complete_lead();
        lead.set(LeadField::City, "");
        lead.set_consent(Consent::Privacy, false);
        assert_eq!(lead.validate(), Err(LeadError::MissingField(LeadField::City)));
        assert_eq!(lead.validate_step(0), Err(LeadError::UnknownStep(0)));
    }

    #[test]
    fn describe_maps_codes_to_portuguese_labels() {
        assert_eq!(describe(LeadField::MonthlyIncome, "20k-50k"), "R$ 20.001 - R$ 50.000");
        assert_eq!(
            describe(LeadField::AccreditedStatus, "patrimonio"),
            "Possuo patrimônio financeiro de pelo menos R$ 1.000.000"
        );
        assert_eq!(describe(LeadField::InvestmentHorizon, "10+"), "Mais de 10 anos");
        assert_eq!(describe(LeadField::HowDidYouHear, "custom"), "custom");
        assert_eq!(describe(LeadField::FullName, "Maria"), "Maria");
    }

    #[test]
    fn full_address_joins_the_parts() {
        assert_eq!(
            complete_lead().full_address(),
            "Rua das Flores, 100, Belo Horizonte/MG - CEP: 30100-000 - Brasil"
        );
    }
}
