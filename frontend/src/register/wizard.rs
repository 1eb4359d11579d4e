use yew::prelude::*;
use yew_hooks::prelude::*;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use crate::config;
use crate::register::form::{
    AttendanceMode, Choice, Dietary, ErrorResponse, Gender, GraduationYear, ParticipationMode,
    RegistrationForm, Section, Skill, SubmitRequest, SubmitResponse, TeamSize, Track,
    ValidationIssue, TECH_STACK,
};
use crate::register::steps;
use crate::register::storage::{self, LocalStorage};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = render)]
    fn recaptcha_render(container: &Element, params: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = getResponse)]
    fn recaptcha_response() -> Result<String, JsValue>;

    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = reset)]
    fn recaptcha_reset() -> Result<(), JsValue>;
}

/// Tokens are single use, so the widget is reset after every failed submit.
fn reset_captcha() {
    if let Err(e) = recaptcha_reset() {
        log::warn!("Could not reset the reCAPTCHA widget: {:?}", e);
    }
}

/// The one live "Saved" timer. Arming a new handle drops the previous one,
/// which cancels it.
struct NoticeTimer<H>(Option<H>);

impl<H> Default for NoticeTimer<H> {
    fn default() -> Self {
        Self(None)
    }
}

impl<H> NoticeTimer<H> {
    fn arm(&mut self, handle: H) {
        self.0 = Some(handle);
    }
}

#[derive(Serialize)]
struct RecaptchaParams {
    sitekey: &'static str,
    theme: &'static str,
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

fn checkbox_value(e: &Event) -> bool {
    e.target_unchecked_into::<HtmlInputElement>().checked()
}

/// Browsers report `C:\fakepath\name.pdf`; only the name is kept.
fn file_name(e: &Event) -> String {
    let value = e.target_unchecked_into::<HtmlInputElement>().value();
    value
        .rsplit(|c| c == '\\' || c == '/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Callback that edits a copy of the form and stores it back.
fn edit<E, F>(form: &UseStateHandle<RegistrationForm>, apply: F) -> Callback<E>
where
    E: 'static,
    F: Fn(&mut RegistrationForm, E) + 'static,
{
    let form = form.clone();
    Callback::from(move |event: E| {
        let mut next = (*form).clone();
        apply(&mut next, event);
        form.set(next);
    })
}

fn scroll_to(node: &NodeRef) {
    if let (Some(window), Some(el)) = (web_sys::window(), node.cast::<Element>()) {
        let top = el.get_bounding_client_rect().top();
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        window.scroll_to_with_x_and_y(0.0, steps::scroll_target(top, scroll_y));
    }
}

fn choice_select<C: Choice>(current: C, onchange: Callback<Event>) -> Html {
    html! {
        <select class="reg-input" {onchange}>
            <option value="" disabled={true} selected={current == C::default()}>{"Select"}</option>
            { for C::options().iter().map(|option| html! {
                <option value={option.value()} selected={*option == current}>{option.label()}</option>
            }) }
        </select>
    }
}

fn yes_no(current: Option<bool>, onpick: Callback<bool>) -> Html {
    html! {
        <div class="tag-row">
            { for [(true, "Yes"), (false, "No")].into_iter().map(|(value, label)| {
                let onpick = onpick.clone();
                html! {
                    <button
                        type="button"
                        class={classes!("toggle-tag", (current == Some(value)).then_some("selected"))}
                        onclick={Callback::from(move |_| onpick.emit(value))}
                    >
                        {label}
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    html! {
        <div class="reg-field">
            <div class="reg-field__head">
                <label>{props.label.clone()}</label>
                if let Some(hint) = props.hint.clone() {
                    <p class="reg-field__hint">{hint}</p>
                }
            </div>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub section: Section,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <div class="section-title__serial">{props.section.index()}</div>
            <div class="section-title__text">{props.section.title()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionActionsProps {
    pub section: Section,
    pub on_save: Callback<Section>,
    pub on_cancel: Callback<Section>,
    pub saved: bool,
}

#[function_component(SectionActions)]
fn section_actions(props: &SectionActionsProps) -> Html {
    let section = props.section;
    let on_save = props.on_save.reform(move |_: MouseEvent| section);
    let on_cancel = props.on_cancel.reform(move |_: MouseEvent| section);

    html! {
        <div class="section-actions">
            <button type="button" class="primary-button" onclick={on_save}>{"Save"}</button>
            <button type="button" class="secondary-button" onclick={on_cancel}>{"Cancel"}</button>
            if props.saved {
                <span class="saved-notice">{"Saved"}</span>
            }
        </div>
    }
}

#[derive(Clone, PartialEq)]
enum SubmitState {
    Editing,
    Submitting,
    Failed(String),
    Done(Option<Value>),
}

#[function_component(RegistrationExperience)]
pub fn registration_experience() -> Html {
    use_title("Register · IRH '25".to_string());

    let snapshot = use_state(|| storage::load_saved(&LocalStorage));
    let form = use_state(|| RegistrationForm::from_saved(&storage::load_saved(&LocalStorage)));
    let active_step = use_state(|| 0usize);
    let saved_notice = use_state(|| None::<Section>);
    let notice_timer = use_mut_ref(NoticeTimer::<Timeout>::default);
    let issues = use_state(Vec::<ValidationIssue>::new);
    let submit_state = use_state(|| SubmitState::Editing);
    let section_refs = use_state(|| Section::ALL.map(|_| NodeRef::default()));
    let captcha_ref = use_node_ref();

    let scroll = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    // Advance the step rail from the scroll position
    {
        let active_step = active_step.clone();
        let section_refs = section_refs.clone();
        use_effect_with_deps(
            move |_| {
                let bounds: Vec<(f64, f64)> = section_refs
                    .iter()
                    .map(|node| {
                        node.cast::<Element>()
                            .map(|el| {
                                let rect = el.get_bounding_client_rect();
                                (rect.top(), rect.bottom())
                            })
                            .unwrap_or((f64::INFINITY, f64::INFINITY))
                    })
                    .collect();
                if let Some(index) = steps::active_step(viewport_height, &bounds) {
                    if *active_step != index {
                        active_step.set(index);
                    }
                }
                || ()
            },
            (scroll, viewport_height),
        );
    }

    // grecaptcha loads async; keep trying until it can render the widget
    {
        let captcha_ref = captcha_ref.clone();
        use_effect_with_deps(
            move |_| {
                let site_key = config::recaptcha_site_key();
                if site_key.is_empty() {
                    log::warn!("RECAPTCHA_SITE_KEY was not set at build time");
                } else {
                    spawn_local(async move {
                        let params = RecaptchaParams { sitekey: site_key, theme: "dark" };
                        let Ok(params) = serde_wasm_bindgen::to_value(&params) else {
                            return;
                        };
                        for _ in 0..40 {
                            if let Some(container) = captcha_ref.cast::<Element>() {
                                if recaptcha_render(&container, &params).is_ok() {
                                    return;
                                }
                            }
                            TimeoutFuture::new(250).await;
                        }
                        log::warn!("reCAPTCHA widget could not be rendered");
                    });
                }
                || ()
            },
            (),
        );
    }

    let go_to = {
        let section_refs = section_refs.clone();
        Callback::from(move |section: Section| {
            if let Some(node) = section_refs.get(section.index()) {
                scroll_to(node);
            }
        })
    };

    let save_section = {
        let form = form.clone();
        let snapshot = snapshot.clone();
        let saved_notice = saved_notice.clone();
        let notice_timer = notice_timer.clone();
        Callback::from(move |section: Section| {
            let stored = storage::save_patch(&LocalStorage, &form.section_patch(section));
            snapshot.set(stored);
            log::info!("Saved section {}", section.label());

            saved_notice.set(Some(section));
            let saved_notice = saved_notice.clone();
            notice_timer
                .borrow_mut()
                .arm(Timeout::new(2_000, move || saved_notice.set(None)));
        })
    };

    let cancel_section = {
        let form = form.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |section: Section| {
            let mut next = (*form).clone();
            next.revert_section(section, &snapshot);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let snapshot = snapshot.clone();
        let issues = issues.clone();
        let submit_state = submit_state.clone();
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| {
            if *submit_state == SubmitState::Submitting {
                return;
            }

            let mut found = form.validate_for_submit();
            let token = recaptcha_response().ok().filter(|t| !t.is_empty());
            if token.is_none() {
                found.push(ValidationIssue::CaptchaMissing);
            }
            let Some(token) = token.filter(|_| found.is_empty()) else {
                if let Some(first) = found.first() {
                    go_to.emit(first.section());
                }
                issues.set(found);
                return;
            };
            issues.set(Vec::new());

            let stored = storage::save_patch(&LocalStorage, &form.to_map());
            snapshot.set(stored);
            submit_state.set(SubmitState::Submitting);

            let form_value = (*form).clone();
            let snapshot = snapshot.clone();
            let submit_state = submit_state.clone();
            spawn_local(async move {
                let body = SubmitRequest { form: &form_value, captcha_token: token };
                let request = Request::post(&format!("{}/api/register", config::get_backend_url()))
                    .json(&body);

                let outcome = match request {
                    Ok(request) => match request.send().await {
                        Ok(response) if response.ok() => match response.json::<SubmitResponse>().await {
                            Ok(resp) if resp.success => {
                                log::info!("{}", resp.message.as_deref().unwrap_or("Registration submitted"));
                                SubmitState::Done(resp.id)
                            }
                            Ok(_) => SubmitState::Failed("Registration was not accepted.".to_string()),
                            Err(e) => {
                                log::error!("Unreadable register response: {}", e);
                                SubmitState::Failed("Unexpected response from the server.".to_string())
                            }
                        },
                        Ok(response) => {
                            log::warn!("Register failed with status {}", response.status());
                            match response.json::<ErrorResponse>().await {
                                Ok(err) => SubmitState::Failed(err.error),
                                Err(_) => SubmitState::Failed("Registration failed.".to_string()),
                            }
                        }
                        Err(e) => {
                            log::error!("Network error: {}", e);
                            SubmitState::Failed(
                                "Network error, your draft is saved. Please try again.".to_string(),
                            )
                        }
                    },
                    Err(e) => {
                        log::error!("Could not encode registration: {}", e);
                        SubmitState::Failed("Could not prepare your registration.".to_string())
                    }
                };

                match &outcome {
                    SubmitState::Done(_) => {
                        if storage::clear(&LocalStorage).is_ok() {
                            snapshot.set(Map::new());
                        }
                    }
                    _ => reset_captcha(),
                }
                submit_state.set(outcome);
            });
        })
    };

    let section_ref = |section: Section| section_refs[section.index()].clone();
    let saved = |section: Section| *saved_notice == Some(section);

    let rail = html! {
        <aside class="reg-rail">
            <div class="reg-rail__head">
                <div class="eyebrow">{"Registration"}</div>
                <div class="reg-rail__title">{"Flow"}</div>
            </div>
            <div class="reg-rail__steps">
                { for Section::ALL.iter().map(|&section| {
                    let onclick = go_to.reform(move |_: MouseEvent| section);
                    html! {
                        <button
                            type="button"
                            class={classes!("rail-step", (*active_step == section.index()).then_some("active"))}
                            {onclick}
                        >
                            <div class="rail-step__row">
                                <span class="eyebrow">{"Step"}</span>
                                <span class="rail-step__serial">{section.index()}</span>
                            </div>
                            <div class="rail-step__label">{section.label()}</div>
                        </button>
                    }
                }) }
            </div>
        </aside>
    };

    let guidelines = html! {
        <section ref={section_ref(Section::Guidelines)} id={Section::Guidelines.id()} class="reg-section">
            <SectionTitle section={Section::Guidelines} />
            <div class="guidelines">
                <p><strong>{"Welcome, Innovator!"}</strong>{" Before you embark on this journey, please ensure the following:"}</p>
                <p><span class="em">{"Accuracy is Key:"}</span>{" Please fill in your details exactly as they appear on your Government or College ID. Mismatched information may lead to disqualification."}</p>
                <p><span class="em">{"Team Leader Protocol:"}</span>{" If participating as a team, only the Team Leader should fill out the initial registration and invite members."}</p>
                <p><span class="em">{"One Entry Per Person:"}</span>{" Duplicate registrations will be rejected."}</p>
                <p><span class="em">{"Documents Ready:"}</span>{" Keep your Resume and College ID (PDF/JPG) handy for upload."}</p>
                <button type="button" class="primary-button" onclick={go_to.reform(|_: MouseEvent| Section::Personal)}>
                    {"I Understand, Let’s Start"}
                </button>
            </div>
        </section>
    };

    let personal = html! {
        <section ref={section_ref(Section::Personal)} id={Section::Personal.id()} class="reg-section">
            <SectionTitle section={Section::Personal} />
            <div class="reg-grid">
                <Field label="Full Name">
                    <input class="reg-input" placeholder="John Doe" value={form.full_name.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.full_name = input_value(&e))} />
                </Field>
                <Field label="Email Address" hint="We'll send the verification link here">
                    <input class="reg-input" type="email" placeholder="john@example.com" value={form.email.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.email = input_value(&e))} />
                </Field>
                <Field label="Phone Number" hint="With Country Code +91 / +7 for Russia">
                    <input class="reg-input" type="tel" placeholder="+91 9876543210" value={form.phone.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.set_phone(input_value(&e)))} />
                </Field>
                <Field label="WhatsApp Number">
                    <input class="reg-input" type="tel"
                        placeholder={if form.whatsapp_same_as_phone { "Same as phone" } else { "+91 9876543210" }}
                        disabled={form.whatsapp_same_as_phone}
                        value={form.whatsapp.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.whatsapp = input_value(&e))} />
                    <label class="check-row">
                        <input type="checkbox" checked={form.whatsapp_same_as_phone}
                            onchange={edit(&form, |f, e: Event| f.set_whatsapp_same_as_phone(checkbox_value(&e)))} />
                        <span>{"Same as phone number"}</span>
                    </label>
                </Field>
                <Field label="Gender">
                    { choice_select(form.gender, edit(&form, |f, e: Event| f.gender = Gender::from_value(&select_value(&e)))) }
                </Field>
            </div>
            <SectionActions section={Section::Personal} on_save={save_section.clone()} on_cancel={cancel_section.clone()} saved={saved(Section::Personal)} />
        </section>
    };

    let academic = html! {
        <section ref={section_ref(Section::Academic)} id={Section::Academic.id()} class="reg-section">
            <SectionTitle section={Section::Academic} />
            <div class="reg-grid">
                <Field label="University / College Name">
                    <input class="reg-input" placeholder="Your University / College" value={form.university.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.university = input_value(&e))} />
                </Field>
                <Field label="Course / Degree" hint="Example: B.Tech, B.E, B.Sc, BCA">
                    <input class="reg-input" placeholder="B.Tech" value={form.degree.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.degree = input_value(&e))} />
                </Field>
                <Field label="Graduation Year">
                    { choice_select(form.graduation_year, edit(&form, |f, e: Event| f.graduation_year = GraduationYear::from_value(&select_value(&e)))) }
                </Field>
                <Field label="University Roll Number / ID">
                    <input class="reg-input" placeholder="Roll Number / ID" value={form.roll_id.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.roll_id = input_value(&e))} />
                </Field>
                <Field label="Upload College ID Card" hint="Formats: JPG, PNG, PDF">
                    <input class="reg-file" type="file" accept="image/*,.pdf"
                        onchange={edit(&form, |f, e: Event| f.college_id_filename = file_name(&e))} />
                    if !form.college_id_filename.is_empty() {
                        <p class="file-note">{format!("Selected: {}", form.college_id_filename)}</p>
                    }
                </Field>
                <Field label="Resume / CV" hint="Formats: PDF (Max 5MB) - Sponsors hire from here!">
                    <input class="reg-file" type="file" accept=".pdf"
                        onchange={edit(&form, |f, e: Event| f.resume_filename = file_name(&e))} />
                    if !form.resume_filename.is_empty() {
                        <p class="file-note">{format!("Selected: {}", form.resume_filename)}</p>
                    }
                </Field>
                <Field label="LinkedIn URL">
                    <input class="reg-input" type="url" placeholder="https://linkedin.com/in/…" value={form.linkedin.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.linkedin = input_value(&e))} />
                </Field>
                <Field label="GitHub URL">
                    <input class="reg-input" type="url" placeholder="https://github.com/…" value={form.github.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.github = input_value(&e))} />
                </Field>
                <Field label="Portfolio / Website URL">
                    <input class="reg-input" type="url" placeholder="https://…" value={form.portfolio.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.portfolio = input_value(&e))} />
                </Field>
            </div>
            <SectionActions section={Section::Academic} on_save={save_section.clone()} on_cancel={cancel_section.clone()} saved={saved(Section::Academic)} />
        </section>
    };

    let team = html! {
        <section ref={section_ref(Section::Team)} id={Section::Team.id()} class="reg-section">
            <SectionTitle section={Section::Team} />
            <div class="reg-grid">
                <Field label="How are you participating?">
                    <div class="tag-row">
                        { for ParticipationMode::options().iter().map(|&mode| {
                            let onclick = edit(&form, move |f, _: MouseEvent| f.set_participation_mode(mode));
                            html! {
                                <button type="button"
                                    class={classes!("toggle-tag", (form.participation_mode == mode).then_some("selected"))}
                                    {onclick}>
                                    {mode.label()}
                                </button>
                            }
                        }) }
                    </div>
                </Field>
                if form.participation_mode == ParticipationMode::Team {
                    <Field label="Team Name" hint="Make it cool!">
                        <input class="reg-input" placeholder="Team Name" value={form.team_name.clone()}
                            oninput={edit(&form, |f, e: InputEvent| f.team_name = input_value(&e))} />
                    </Field>
                    <Field label="Team Size">
                        <select class="reg-input"
                            onchange={edit(&form, |f, e: Event| f.set_team_size(TeamSize::from_value(&select_value(&e))))}>
                            <option value="" disabled={true} selected={form.team_size == TeamSize::Unset}>{"Select"}</option>
                            { for TeamSize::OPTIONS.iter().map(|&size| html! {
                                <option value={size.members().to_string()} selected={form.team_size == size}>
                                    {size.members()}
                                </option>
                            }) }
                        </select>
                    </Field>
                    { for form.team_member_emails.iter().enumerate().map(|(idx, email)| html! {
                        <Field label={format!("Member {} Email ID", idx + 2)}>
                            <input class="reg-input" type="email" placeholder="member@example.com" value={email.clone()}
                                oninput={edit(&form, move |f, e: InputEvent| f.set_team_member_email(idx, input_value(&e)))} />
                        </Field>
                    }) }
                }
            </div>
            <SectionActions section={Section::Team} on_save={save_section.clone()} on_cancel={cancel_section.clone()} saved={saved(Section::Team)} />
        </section>
    };

    let domain = html! {
        <section ref={section_ref(Section::Domain)} id={Section::Domain.id()} class="reg-section">
            <SectionTitle section={Section::Domain} />
            <div class="reg-grid">
                <Field label="Preferred Track / Theme" hint="Select the problem statement you are interested in">
                    { choice_select(form.preferred_track, edit(&form, |f, e: Event| f.preferred_track = Track::from_value(&select_value(&e)))) }
                </Field>
                <Field label="Primary Skill" hint="What is your main role?">
                    { choice_select(form.primary_skill, edit(&form, |f, e: Event| f.primary_skill = Skill::from_value(&select_value(&e)))) }
                </Field>
                <Field label="Tech Stack Familiarity" hint="Select all that apply">
                    <div class="tag-row">
                        { for TECH_STACK.iter().map(|&label| {
                            let onclick = edit(&form, move |f, _: MouseEvent| f.toggle_tech(label));
                            let selected = form.tech_stack.iter().any(|t| t == label);
                            html! {
                                <button type="button" class={classes!("toggle-tag", selected.then_some("selected"))} {onclick}>
                                    {label}
                                </button>
                            }
                        }) }
                    </div>
                </Field>
                <Field label="Do you have a project idea in mind?" hint="Just for survey, not mandatory">
                    { yes_no(form.has_idea, edit(&form, |f, v: bool| f.has_idea = Some(v))) }
                </Field>
            </div>
            <SectionActions section={Section::Domain} on_save={save_section.clone()} on_cancel={cancel_section.clone()} saved={saved(Section::Domain)} />
        </section>
    };

    let logistics = html! {
        <section ref={section_ref(Section::Logistics)} id={Section::Logistics.id()} class="reg-section">
            <SectionTitle section={Section::Logistics} />
            <div class="reg-grid">
                <Field label="Mode of Attendance">
                    { choice_select(form.attendance_mode, edit(&form, |f, e: Event| f.attendance_mode = AttendanceMode::from_value(&select_value(&e)))) }
                </Field>
                <Field label="City of Residence">
                    <input class="reg-input" placeholder="City" value={form.city.clone()}
                        oninput={edit(&form, |f, e: InputEvent| f.city = input_value(&e))} />
                </Field>
                if form.attendance_mode == AttendanceMode::Offline {
                    <Field label="Dietary Preferences">
                        { choice_select(form.dietary, edit(&form, |f, e: Event| f.dietary = Dietary::from_value(&select_value(&e)))) }
                    </Field>
                    <Field label="Do you need accommodation?">
                        { yes_no(form.needs_accommodation, edit(&form, |f, v: bool| f.needs_accommodation = Some(v))) }
                    </Field>
                }
            </div>
            <SectionActions section={Section::Logistics} on_save={save_section.clone()} on_cancel={cancel_section.clone()} saved={saved(Section::Logistics)} />
        </section>
    };

    let submit_panel = match &*submit_state {
        SubmitState::Done(id) => html! {
            <div class="mission">
                <div class="mission__title">{"Mission Initiated!"}</div>
                <p>{"Check your email for the verification link and join our Discord Server."}</p>
                if let Some(id) = id.as_ref().filter(|id| !id.is_null()) {
                    <p class="mission__id">{format!("Registration ID: {}", id.as_str().map(str::to_string).unwrap_or_else(|| id.to_string()))}</p>
                }
                <div class="eyebrow">{"You can still scroll and review your entries."}</div>
            </div>
        },
        state => html! {
            <div class="reg-grid">
                <label class="check-row">
                    <input type="checkbox" checked={form.agree_terms}
                        onchange={edit(&form, |f, e: Event| f.agree_terms = checkbox_value(&e))} />
                    <span>{"I agree to the Terms & Conditions and Privacy Policy of the Indo-Russian Hackathon 2025."}</span>
                </label>
                <label class="check-row">
                    <input type="checkbox" checked={form.agree_conduct}
                        onchange={edit(&form, |f, e: Event| f.agree_conduct = checkbox_value(&e))} />
                    <span>{"I agree to abide by the Code of Conduct (No harassment, original code policy)."}</span>
                </label>
                <label class="check-row">
                    <input type="checkbox" checked={form.consent_resume_share}
                        onchange={edit(&form, |f, e: Event| f.consent_resume_share = checkbox_value(&e))} />
                    <span>{"I consent to share my resume with the event sponsors for hiring opportunities."}</span>
                </label>

                <div class="reg-field">
                    <div class="eyebrow">{"Captcha"}</div>
                    <div ref={captcha_ref.clone()} class="captcha-box"></div>
                </div>

                if !issues.is_empty() {
                    <ul class="issues">
                        { for issues.iter().map(|issue| html! { <li>{issue.message()}</li> }) }
                    </ul>
                }
                if let SubmitState::Failed(message) = state {
                    <p class="submit-error">{message.clone()}</p>
                }

                <div class="section-actions">
                    <button type="button" class="primary-button" onclick={on_submit}
                        disabled={*state == SubmitState::Submitting}>
                        { if *state == SubmitState::Submitting { "SUBMITTING…" } else { "COMPLETE REGISTRATION" } }
                    </button>
                    <button type="button" class="secondary-button"
                        onclick={save_section.reform(|_: MouseEvent| Section::Submit)}>
                        {"Save"}
                    </button>
                    if saved(Section::Submit) {
                        <span class="saved-notice">{"Saved"}</span>
                    }
                </div>
            </div>
        },
    };

    let submit = html! {
        <section ref={section_ref(Section::Submit)} id={Section::Submit.id()} class="reg-section">
            <SectionTitle section={Section::Submit} />
            {submit_panel}
        </section>
    };

    let current = Section::from_index(*active_step).unwrap_or(Section::Guidelines);

    html! {
        <div class="registration">
            {rail}
            <div class="reg-stage">
                <div class="serial-page" aria-hidden="true">
                    <div class="eyebrow">{"Step"}</div>
                    <div class="serial-page__number">{current.index()}</div>
                    <div class="eyebrow">{current.label()}</div>
                </div>
                <div class="reg-sheet">
                    {guidelines}
                    {personal}
                    {academic}
                    {team}
                    {domain}
                    {logistics}
                    {submit}
                </div>
            </div>
            <style>
                {r#"
                html { scroll-behavior: smooth; }
                .registration {
                    display: flex;
                    min-height: 100vh;
                    padding-top: 6rem;
                    background: #050505;
                    color: rgba(255, 255, 255, 0.9);
                }
                .eyebrow {
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.28em;
                    color: rgba(255, 255, 255, 0.5);
                }
                .reg-rail {
                    position: sticky;
                    top: 6rem;
                    height: calc(100vh - 6rem);
                    width: 18rem;
                    flex-shrink: 0;
                    padding: 2rem;
                    border-right: 1px solid rgba(255, 255, 255, 0.1);
                }
                .reg-rail__title {
                    font-family: serif;
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .reg-rail__steps {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .rail-step {
                    text-align: left;
                    padding: 0.75rem 1rem;
                    background: transparent;
                    color: inherit;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    cursor: pointer;
                    transition: border-color 0.3s ease, background 0.3s ease;
                }
                .rail-step.active {
                    border-color: rgba(255, 255, 255, 0.4);
                    background: rgba(255, 255, 255, 0.05);
                }
                .rail-step__row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .rail-step__serial { font-family: serif; font-size: 1.1rem; }
                .rail-step__label {
                    margin-top: 0.5rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: rgba(255, 255, 255, 0.7);
                }
                .reg-stage {
                    position: relative;
                    flex: 1;
                    display: flex;
                    justify-content: center;
                    padding: 0 1.5rem 8rem;
                }
                .serial-page {
                    position: sticky;
                    top: 13vh;
                    height: 74vh;
                    width: 9rem;
                    margin-right: -4rem;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(20px);
                }
                .serial-page__number {
                    font-family: serif;
                    font-size: 6rem;
                    line-height: 1;
                }
                .reg-sheet {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    max-width: 56rem;
                    padding: 2.5rem 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                }
                .reg-section {
                    padding: 3rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    animation: sectionIn 0.8s ease-out both;
                }
                @keyframes sectionIn {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .section-title {
                    display: flex;
                    align-items: baseline;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .section-title__serial { font-family: serif; font-size: 2rem; }
                .section-title__text {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: rgba(255, 255, 255, 0.6);
                }
                .guidelines p {
                    color: rgba(255, 255, 255, 0.75);
                    line-height: 1.6;
                    margin-bottom: 0.75rem;
                }
                .guidelines .em { color: rgba(255, 255, 255, 0.95); }
                .reg-grid {
                    display: grid;
                    gap: 2rem;
                }
                .reg-field__head {
                    display: flex;
                    justify-content: space-between;
                    gap: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .reg-field__head label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: rgba(255, 255, 255, 0.8);
                }
                .reg-field__hint {
                    max-width: 28rem;
                    text-align: right;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.55);
                }
                .reg-input, .reg-file {
                    width: 100%;
                    padding: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 0.9rem;
                    outline: none;
                    box-sizing: border-box;
                }
                .reg-input:focus {
                    border-color: rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.06);
                }
                .reg-input option { background: #111; }
                .file-note {
                    margin-top: 0.5rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .check-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-top: 0.75rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.75);
                }
                .tag-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .toggle-tag {
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: rgba(255, 255, 255, 0.65);
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    cursor: pointer;
                }
                .toggle-tag.selected {
                    border-color: rgba(255, 255, 255, 0.45);
                    background: rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.9);
                }
                .section-actions {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }
                .primary-button, .secondary-button {
                    padding: 1rem 2rem;
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .primary-button {
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.05);
                    color: white;
                }
                .primary-button:hover { background: white; color: black; }
                .primary-button:disabled { opacity: 0.5; cursor: wait; }
                .secondary-button {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: transparent;
                    color: rgba(255, 255, 255, 0.6);
                }
                .saved-notice {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: #7fd18b;
                }
                .issues, .submit-error {
                    color: #ff8a7a;
                    font-size: 0.85rem;
                }
                .captcha-box { margin-top: 0.75rem; min-height: 78px; }
                .mission { padding: 2.5rem 0; }
                .mission__title { font-family: serif; font-size: 2.5rem; }
                .mission p { color: rgba(255, 255, 255, 0.7); }
                .mission__id { font-family: monospace; }
                @media (max-width: 768px) {
                    .reg-rail, .serial-page { display: none; }
                    .reg-sheet { padding: 1.5rem 1rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn arming_cancels_the_previous_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let mut timer = NoticeTimer::default();

        timer.arm(Handle(cancelled.clone()));
        assert_eq!(cancelled.get(), 0);

        timer.arm(Handle(cancelled.clone()));
        assert_eq!(cancelled.get(), 1);
        assert!(timer.0.is_some());
    }
}
