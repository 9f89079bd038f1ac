use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::use_toaster;
use crate::config::{RelayConfig, LEAD_RECIPIENT, WHATSAPP_DISPLAY};
use crate::i18n::{use_translations, FormCopy};
use crate::lead::{
    option_codes, Consent, InvestorLead, LeadField, BRAZILIAN_STATES, STEP_REQUIRED, TOTAL_STEPS,
};
use crate::registration::{RegistrationAction, RegistrationState, SubmitBlocked};
use crate::submission::{submit_lead, SubmissionOutcome};

fn is_required(field: LeadField) -> bool {
    STEP_REQUIRED.iter().any(|step| step.contains(&field))
}

/// Renders inputs bound to one lead through the registration reducer.
struct Fields<'a> {
    lead: &'a InvestorLead,
    form: &'static FormCopy,
    dispatcher: UseReducerDispatcher<RegistrationState>,
}

impl Fields<'_> {
    fn label(&self, field: LeadField) -> Html {
        html! {
            <label for={field.key()}>
                { self.form.field_label(field) }
                { if is_required(field) { html! { <span class="required">{" *"}</span> } } else { html! {} } }
            </label>
        }
    }

    fn input(&self, field: LeadField, kind: &'static str, placeholder: &'static str) -> Html {
        let dispatcher = self.dispatcher.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(RegistrationAction::SetField(field, input.value()));
        });
        html! {
            <div class="form-group">
                { self.label(field) }
                <input
                    id={field.key()}
                    type={kind}
                    placeholder={placeholder}
                    value={self.lead.get(field).to_string()}
                    required={is_required(field)}
                    {oninput}
                />
            </div>
        }
    }

    fn text(&self, field: LeadField, placeholder: &'static str) -> Html {
        self.input(field, "text", placeholder)
    }

    fn textarea(&self, field: LeadField, placeholder: &'static str) -> Html {
        let dispatcher = self.dispatcher.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(RegistrationAction::SetField(field, area.value()));
        });
        html! {
            <div class="form-group full">
                { self.label(field) }
                <textarea
                    id={field.key()}
                    rows="3"
                    placeholder={placeholder}
                    value={self.lead.get(field).to_string()}
                    {oninput}
                />
            </div>
        }
    }

    fn choices(&self, field: LeadField, options: Vec<(&'static str, &'static str)>) -> Html {
        let dispatcher = self.dispatcher.clone();
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(RegistrationAction::SetField(field, select.value()));
        });
        let current = self.lead.get(field);
        html! {
            <div class="form-group">
                { self.label(field) }
                <select id={field.key()} required={is_required(field)} {onchange}>
                    <option value="" selected={current.is_empty()}>{ self.form.select_prompt(field) }</option>
                    { for options.into_iter().map(|(code, label)| html! {
                        <option value={code} selected={current == code}>{ label }</option>
                    }) }
                </select>
            </div>
        }
    }

    fn select(&self, field: LeadField) -> Html {
        let options = option_codes(field)
            .iter()
            .copied()
            .zip(self.form.option_labels(field).iter().copied())
            .collect();
        self.choices(field, options)
    }

    fn state_select(&self) -> Html {
        self.choices(LeadField::State, BRAZILIAN_STATES.to_vec())
    }

    fn consent(&self, consent: Consent) -> Html {
        let dispatcher = self.dispatcher.clone();
        let onchange = Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(RegistrationAction::SetConsent(consent, input.checked()));
        });
        html! {
            <label class="consent">
                <input type="checkbox" checked={self.lead.consent(consent)} {onchange} />
                <span>{ self.form.consent_label(consent) }</span>
            </label>
        }
    }

    fn step(&self, step: u8) -> Html {
        let f = self.form;
        match step {
            1 => html! {
                <div class="form-grid">
                    { self.text(LeadField::FullName, f.full_name_placeholder) }
                    { self.input(LeadField::Email, "email", f.email_placeholder) }
                    { self.input(LeadField::Phone, "tel", f.phone_placeholder) }
                    { self.text(LeadField::Cpf, f.cpf_placeholder) }
                    { self.text(LeadField::Rg, f.rg_placeholder) }
                    { self.input(LeadField::BirthDate, "date", "") }
                    { self.text(LeadField::Nationality, "") }
                </div>
            },
            2 => html! {
                <div class="form-grid">
                    { self.text(LeadField::Address, f.address_placeholder) }
                    { self.text(LeadField::City, f.city_placeholder) }
                    { self.state_select() }
                    { self.text(LeadField::ZipCode, f.zip_code_placeholder) }
                    { self.text(LeadField::Country, "") }
                </div>
            },
            3 => html! {
                <div class="form-grid">
                    { self.text(LeadField::Occupation, f.occupation_placeholder) }
                    { self.text(LeadField::Company, f.company_placeholder) }
                    { self.text(LeadField::Position, f.position_placeholder) }
                    { self.select(LeadField::WorkExperience) }
                    { self.select(LeadField::MonthlyIncome) }
                    { self.select(LeadField::TotalAssets) }
                    { self.select(LeadField::InvestmentExperience) }
                    { self.select(LeadField::RiskProfile) }
                </div>
            },
            4 => html! {
                <>
                    <div class="form-grid">
                        { self.select(LeadField::IntendedInvestment) }
                        { self.select(LeadField::InvestmentHorizon) }
                        { self.textarea(LeadField::Motivations, f.motivations_placeholder) }
                    </div>
                    <h4 class="form-section-title">{ f.qualification_section }</h4>
                    <div class="form-grid">
                        { self.select(LeadField::AccreditedStatus) }
                        { self.select(LeadField::AccreditationProof) }
                        { self.text(LeadField::ProfessionalCertification, f.certification_placeholder) }
                    </div>
                </>
            },
            _ => html! {
                <>
                    <div class="form-grid">
                        { self.select(LeadField::HowDidYouHear) }
                        { self.textarea(LeadField::AdditionalComments, f.comments_placeholder) }
                    </div>
                    <div class="form-warning">
                        <strong>{ f.qualified_warning_title }</strong>
                        <p>{ f.qualified_warning_text }</p>
                    </div>
                    <h4 class="form-section-title">{ f.terms_section }</h4>
                    <div class="consents">
                        { for Consent::ALL.iter().map(|c| self.consent(*c)) }
                    </div>
                </>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
struct ConfirmationProps {
    outcome: SubmissionOutcome,
    on_restart: Callback<MouseEvent>,
}

#[function_component(Confirmation)]
fn confirmation(props: &ConfirmationProps) -> Html {
    let form = &use_translations().form;

    let details = match props.outcome.mailto_url() {
        None => html! {
            <>
                <p>{ form.relay_success_detail }{" "}<strong>{ LEAD_RECIPIENT }</strong></p>
                <div class="next-steps">
                    <h4>{ form.next_steps_title }</h4>
                    <ul>
                        { for form.next_steps.iter().map(|s| html! { <li>{ *s }</li> }) }
                    </ul>
                </div>
            </>
        },
        Some(url) => html! {
            <>
                <p>{ form.email_opened_automatically }</p>
                <p>{ form.recipient_email }{" "}<strong>{ LEAD_RECIPIENT }</strong></p>
                <p>{ form.whatsapp_contact }{" "}<strong>{ WHATSAPP_DISPLAY }</strong></p>
                <p class="muted">{ form.email_not_opened }</p>
                <a class="btn-primary" href={url.to_string()} target="_blank" rel="noopener noreferrer">
                    { form.open_email_button }
                </a>
            </>
        },
    };

    html! {
        <div class="registration-confirmation">
            <div class="confirmation-icon">{"✓"}</div>
            <h3>{ form.interest_registered }</h3>
            { details }
            <button class="btn-outline" onclick={props.on_restart.clone()}>
                { form.submit_new_interest }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let t = use_translations();
    let form = &t.form;
    let state = use_reducer(RegistrationState::default);
    let toaster = use_toaster();

    if let Some(outcome) = state.outcome.clone() {
        let dispatcher = state.dispatcher();
        let on_restart =
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(RegistrationAction::StartOver));
        return html! { <Confirmation {outcome} {on_restart} /> };
    }

    let advance = {
        let state = state.clone();
        let toaster = toaster.clone();
        Callback::from(move |()| match state.can_advance() {
            Ok(()) => state.dispatch(RegistrationAction::Next),
            Err(e) => {
                if let Some(toaster) = &toaster {
                    toaster.warning(form.error_message(&e));
                }
            }
        })
    };
    let next = advance.reform(|_: MouseEvent| ());

    let previous = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RegistrationAction::Previous))
    };

    let onsubmit = {
        let state = state.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !state.is_last_step() {
                advance.emit(());
                return;
            }
            match state.ready_to_submit() {
                Err(SubmitBlocked::InFlight) => {}
                Err(SubmitBlocked::Invalid(err)) => {
                    warn!("Registration blocked: {}", err);
                    if let Some(toaster) = &toaster {
                        toaster.error(form.error_message(&err));
                    }
                }
                Ok(lead) => {
                    info!("Submitting investor registration");
                    state.dispatch(RegistrationAction::Submit);
                    let dispatcher = state.dispatcher();
                    let toaster = toaster.clone();
                    spawn_local(async move {
                        let outcome = submit_lead(lead, RelayConfig::from_build_env()).await;
                        if let Some(toaster) = &toaster {
                            match outcome {
                                SubmissionOutcome::Relayed => toaster.success(form.relay_success),
                                SubmissionOutcome::Fallback { .. } => {
                                    toaster.info(form.fallback_opened)
                                }
                            }
                        }
                        dispatcher.dispatch(RegistrationAction::Completed(outcome));
                    });
                }
            }
        })
    };

    let fields = Fields {
        lead: &state.lead,
        form,
        dispatcher: state.dispatcher(),
    };
    let step = state.step;
    let progress = f64::from(step) / f64::from(TOTAL_STEPS) * 100.0;

    html! {
        <form class="registration-form card" {onsubmit} novalidate={true}>
            <div class="form-header">
                {
                    match &props.on_back {
                        Some(on_back) => {
                            let on_back = on_back.clone();
                            html! {
                                <button type="button" class="btn-link" onclick={Callback::from(move |_: MouseEvent| on_back.emit(()))}>
                                    { t.modal.back }
                                </button>
                            }
                        }
                        None => html! {},
                    }
                }
                <h3>{ form.title }</h3>
                <p class="muted">{ form.subtitle }</p>
            </div>

            <div class="form-progress">
                <div class="form-progress-label">
                    <span>{ format!("{} {} {} {}", form.step_counter, step, form.step_of, TOTAL_STEPS) }</span>
                    <span>{ form.step_titles[usize::from(step - 1)] }</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {:.0}%;", progress)}></div>
                </div>
            </div>

            { fields.step(step) }

            <div class="form-actions">
                <button type="button" class="btn-outline" onclick={previous} disabled={step == 1 || state.submitting}>
                    { form.previous }
                </button>
                {
                    if state.is_last_step() {
                        html! {
                            <button type="submit" class="btn-primary" disabled={state.submitting}>
                                { if state.submitting { form.submitting } else { form.submit } }
                            </button>
                        }
                    } else {
                        html! {
                            <button type="button" class="btn-primary" onclick={next}>
                                { form.next }
                            </button>
                        }
                    }
                }
            </div>
        </form>
    }
}
