use std::rc::Rc;

use thiserror::Error;
use yew::prelude::*;

use crate::lead::{Consent, InvestorLead, LeadError, LeadField, TOTAL_STEPS};
use crate::submission::SubmissionOutcome;

pub enum RegistrationAction {
    SetField(LeadField, String),
    SetConsent(Consent, bool),
    Next,
    Previous,
    Submit,
    Completed(SubmissionOutcome),
    StartOver,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitBlocked {
    #[error(transparent)]
    Invalid(#[from] LeadError),
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationState {
    pub lead: InvestorLead,
    pub step: u8,
    pub submitting: bool,
    pub outcome: Option<SubmissionOutcome>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self {
            lead: InvestorLead::default(),
            step: 1,
            submitting: false,
            outcome: None,
        }
    }
}

impl RegistrationState {
    pub fn can_advance(&self) -> Result<(), LeadError> {
        self.lead.validate_step(self.step)
    }

    /// The lead to send, if submitting is allowed right now.
    pub fn ready_to_submit(&self) -> Result<InvestorLead, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.lead.validate()?;
        Ok(self.lead.clone())
    }

    pub fn is_last_step(&self) -> bool {
        self.step == TOTAL_STEPS
    }
}

impl Reducible for RegistrationState {
    type Action = RegistrationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RegistrationAction::SetField(field, value) => next.lead.set(field, value),
            RegistrationAction::SetConsent(consent, given) => next.lead.set_consent(consent, given),
            RegistrationAction::Next => {
                if self.can_advance().is_err() {
                    return self;
                }
                next.step = (self.step + 1).min(TOTAL_STEPS);
            }
            RegistrationAction::Previous => {
                next.step = self.step.saturating_sub(1).max(1);
            }
            RegistrationAction::Submit => {
                if self.ready_to_submit().is_err() {
                    return self;
                }
                next.submitting = true;
            }
            RegistrationAction::Completed(outcome) => {
                next = RegistrationState {
                    outcome: Some(outcome),
                    ..RegistrationState::default()
                };
            }
            RegistrationAction::StartOver => next = RegistrationState::default(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::tests::complete_lead;

    fn with_lead(lead: InvestorLead) -> Rc<RegistrationState> {
        Rc::new(RegistrationState {
            lead,
            ..RegistrationState::default()
        })
    }

    #[test]
    fn next_is_blocked_until_the_step_is_valid() {
        let state = Rc::new(RegistrationState::default());
        let state = state.reduce(RegistrationAction::Next);
        assert_eq!(state.step, 1);
        assert_eq!(
            state.can_advance(),
            Err(LeadError::MissingField(LeadField::FullName))
        );

        let state = [
            (LeadField::FullName, "Ana"),
            (LeadField::Email, "ana@example.com"),
            (LeadField::Phone, "31 9999-0000"),
            (LeadField::Cpf, "000.000.000-00"),
        ]
        .into_iter()
        .fold(state, |s, (field, value)| {
            s.reduce(RegistrationAction::SetField(field, value.to_string()))
        });
        let state = state.reduce(RegistrationAction::Next);
        assert_eq!(state.step, 2);
    }

    #[test]
    fn steps_stay_within_bounds() {
        let mut state = with_lead(complete_lead());
        for _ in 0..10 {
            state = state.reduce(RegistrationAction::Next);
        }
        assert_eq!(state.step, TOTAL_STEPS);
        assert!(state.is_last_step());

        for _ in 0..10 {
            state = state.reduce(RegistrationAction::Previous);
        }
        assert_eq!(state.step, 1);
    }

    #[test]
    fn submit_with_missing_field_does_not_start_sending() {
        let mut lead = complete_lead();
        lead.set(LeadField::Occupation, "");
        let state = with_lead(lead).reduce(RegistrationAction::Submit);
        assert!(!state.submitting);
        assert_eq!(
            state.ready_to_submit(),
            Err(SubmitBlocked::Invalid(LeadError::MissingField(
                LeadField::Occupation
            )))
        );
    }

    #[test]
    fn submit_is_rejected_while_in_flight() {
        let state = with_lead(complete_lead()).reduce(RegistrationAction::Submit);
        assert!(state.submitting);
        assert_eq!(state.ready_to_submit(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn completion_resets_the_form_and_keeps_the_outcome() {
        let state = with_lead(complete_lead())
            .reduce(RegistrationAction::Next)
            .reduce(RegistrationAction::Submit)
            .reduce(RegistrationAction::Completed(SubmissionOutcome::Relayed));

        assert_eq!(state.lead, InvestorLead::default());
        assert_eq!(state.step, 1);
        assert!(!state.submitting);
        assert_eq!(state.outcome, Some(SubmissionOutcome::Relayed));

        let state = state.reduce(RegistrationAction::StartOver);
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn consents_toggle_through_the_reducer() {
        let state = Rc::new(RegistrationState::default())
            .reduce(RegistrationAction::SetConsent(Consent::Privacy, true));
        assert!(state.lead.agree_privacy);
        let state = state.reduce(RegistrationAction::SetConsent(Consent::Privacy, false));
        assert!(!state.lead.agree_privacy);
    }
}
