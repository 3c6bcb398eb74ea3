use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlScriptElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::decrypted_text::{AnimateOn, DecryptedText};
use crate::components::magnetic_button::{MagneticButton, Size};
use crate::components::text_reveal::TextReveal;
use crate::config;
use crate::data::company::{CONTACT_DETAILS, NEXT_STEPS, SERVICE_OPTIONS};
use crate::email::{send_contact, ContactForm, MESSAGE_MAX_CHARS};
use crate::hooks::use_scroll_top_on_mount;

pub const CAL_SCRIPT_ID: &str = "cal-flamix-init";
pub const CAL_CONTAINER_ID: &str = "my-cal-inline-30min";
const SUCCESS_VISIBLE_MS: u32 = 6_000;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ContactMode {
    Message,
    Call,
}

impl ContactMode {
    fn label(self) -> &'static str {
        match self {
            ContactMode::Message => "Write to us",
            ContactMode::Call => "Book a call",
        }
    }
}

/// Loader snippet for the Cal.com inline embed targeting [`CAL_CONTAINER_ID`].
pub fn cal_embed_script(cal_link: &str) -> String {
    format!(
        r##"(function (C, A, L) {{ let p = function (a, ar) {{ a.q.push(ar); }}; let d = C.document; C.Cal = C.Cal || function () {{ let cal = C.Cal; let ar = arguments; if (!cal.loaded) {{ cal.ns = {{}}; cal.q = cal.q || []; d.head.appendChild(d.createElement("script")).src = A; cal.loaded = true; }} if (ar[0] === L) {{ const api = function () {{ p(api, arguments); }}; const namespace = ar[1]; api.q = api.q || []; if (typeof namespace === "string") {{ cal.ns[namespace] = cal.ns[namespace] || api; p(cal.ns[namespace], ar); p(cal, ["initNamespace", namespace]); }} else p(cal, ar); return; }} p(cal, ar); }}; }})(window, "https://app.cal.com/embed/embed.js", "init");
Cal("init", "30min", {{origin:"https://app.cal.com"}});
Cal.ns["30min"]("inline", {{
  elementOrSelector:"#{container}",
  config: {{"layout":"month_view","useSlotsViewOnMobile":"true","theme":"dark"}},
  calLink: {link}
}});
Cal.ns["30min"]("ui", {{"hideEventTypeDetails":false,"layout":"month_view","theme":"dark"}});"##,
        container = CAL_CONTAINER_ID,
        link = serde_json::Value::from(cal_link),
    )
}

/// Appends the embed loader to `<body>` unless it is already there.
fn inject_cal_embed() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(CAL_SCRIPT_ID).is_some() {
        return;
    }
    let script = match document.create_element("script") {
        Ok(el) => el.unchecked_into::<HtmlScriptElement>(),
        Err(_) => {
            log::warn!("Could not create the scheduling embed script");
            return;
        }
    };
    script.set_id(CAL_SCRIPT_ID);
    script.set_type("text/javascript");
    let _ = script.set_text(&cal_embed_script(config::cal_link()));
    if let Some(body) = document.body() {
        if body.append_child(&script).is_ok() {
            log::info!("Scheduling embed injected");
        }
    }
}

#[function_component(ContactDetailList)]
fn contact_detail_list() -> Html {
    html! {
        <div class="contact-details">
            { for CONTACT_DETAILS.iter().map(|d| html! {
                <a class="contact-detail" href={d.href} key={d.label}>
                    <span class="contact-detail-label">{d.label}</span>
                    <span class="contact-detail-value">{d.value}</span>
                </a>
            }) }
        </div>
    }
}

#[function_component(CalInlineEmbed)]
fn cal_inline_embed() -> Html {
    use_effect_with_deps(
        |_| {
            inject_cal_embed();
            || ()
        },
        (),
    );
    html! { <div id={CAL_CONTAINER_ID} class="cal-embed"></div> }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_top_on_mount();

    let mode = use_state_eq(|| ContactMode::Message);
    let form = use_state(ContactForm::default);
    let is_submitting = use_state_eq(|| false);
    let is_success = use_state_eq(|| false);
    let error = use_state(|| None::<String>);
    let success_timer = use_mut_ref(|| None::<Timeout>);

    let set_mode = {
        let mode = mode.clone();
        Callback::from(move |m: ContactMode| mode.set(m))
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };
    let on_company = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.company = input.value();
            form.set(next);
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };
    let toggle_service = {
        let form = form.clone();
        Callback::from(move |service: &'static str| {
            let mut next = (*form).clone();
            next.toggle_service(service);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let is_success = is_success.clone();
        let error = error.clone();
        let success_timer = success_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if let Err(err) = form.validate() {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            is_submitting.set(true);

            let submitted = (*form).clone();
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let is_success = is_success.clone();
            let error = error.clone();
            let success_timer = success_timer.clone();
            spawn_local(async move {
                match send_contact(&submitted).await {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        is_success.set(true);
                        let is_success = is_success.clone();
                        *success_timer.borrow_mut() =
                            Some(Timeout::new(SUCCESS_VISIBLE_MS, move || is_success.set(false)));
                    }
                    Err(err) => {
                        gloo_console::error!(format!("Contact form error: {}", err));
                        error.set(Some(err.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let chars = form.message_chars();
    let is_message = *mode == ContactMode::Message;

    html! {
        <div class="contact-page">
            <style>
                {r#"
                .contact-page {
                    background: #FAF7FC;
                    color: #1A1A1D;
                    min-height: 100vh;
                    padding: 9rem 2rem 6rem;
                }
                .contact-inner { max-width: 1200px; margin: 0 auto; }
                .contact-title {
                    font-size: clamp(2.5rem, 7vw, 6rem);
                    line-height: 1;
                    margin: 1rem 0 2rem;
                }
                .contact-kicker { font-size: 0.8rem; letter-spacing: 0.4em; text-transform: uppercase; color: #7A1CAC; }
                .mode-tabs { display: flex; gap: 2.5rem; margin: 3rem 0 2rem; border-bottom: 1px solid rgba(26, 26, 29, 0.08); }
                .mode-tab {
                    background: none;
                    border: none;
                    padding: 0 0 1rem;
                    font: inherit;
                    font-size: 1.25rem;
                    color: rgba(26, 26, 29, 0.4);
                    cursor: pointer;
                    border-bottom: 2px solid transparent;
                }
                .mode-tab.active { color: #1A1A1D; border-bottom-color: #7A1CAC; }
                .contact-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 4rem; }
                .contact-form { display: grid; gap: 1.75rem; }
                .contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.75rem; }
                .contact-field label {
                    display: block;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                    color: rgba(26, 26, 29, 0.6);
                }
                .contact-field input, .contact-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    border: none;
                    border-bottom: 1px solid rgba(26, 26, 29, 0.15);
                    background: transparent;
                    padding: 0.75rem 0;
                    font: inherit;
                    font-size: 1.05rem;
                    color: inherit;
                    outline: none;
                }
                .contact-field input:focus, .contact-field textarea:focus { border-bottom-color: #7A1CAC; }
                .contact-field textarea { resize: vertical; min-height: 9rem; }
                .char-count { font-size: 0.75rem; color: rgba(26, 26, 29, 0.45); text-align: right; }
                .char-count.over { color: #c0392b; }
                .service-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                .service-chip {
                    border-radius: 999px;
                    padding: 0.45rem 1rem;
                    border: 1px solid rgba(26, 26, 29, 0.12);
                    background: transparent;
                    font: inherit;
                    font-size: 0.85rem;
                    cursor: pointer;
                }
                .service-chip.selected { background: #2E073F; color: #fff; border-color: #2E073F; }
                .form-error { color: #c0392b; font-size: 0.9rem; }
                .form-success { color: #1e7d4f; font-size: 0.95rem; }
                .contact-detail {
                    display: block;
                    padding: 1.25rem 0;
                    border-bottom: 1px solid rgba(26, 26, 29, 0.07);
                    color: inherit;
                    text-decoration: none;
                }
                .contact-detail-label {
                    display: block;
                    font-size: 0.75rem;
                    letter-spacing: 0.44em;
                    text-transform: uppercase;
                    margin-bottom: 0.4rem;
                }
                .contact-detail-value { font-weight: 600; }
                .contact-aside p { line-height: 1.7; margin-bottom: 3rem; }
                .cal-embed { width: 100%; height: min(720px, 82vh); overflow: scroll; }
                .next-steps { margin-top: 6rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                .next-step span { color: #AD49E1; font-weight: 700; }
                .next-step h3 { margin: 0.5rem 0; }
                .next-step p { color: rgba(26, 26, 29, 0.6); }
                @media (max-width: 900px) {
                    .contact-page { padding: 7rem 1rem 4rem; }
                    .contact-grid, .contact-row, .next-steps { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="contact-inner">
                <span class="contact-kicker">
                    <DecryptedText text={"Get in touch"} animate_on={AnimateOn::Both} />
                </span>
                <h1 class="contact-title">
                    <TextReveal text={"Tell us what you're building."} />
                </h1>

                <div class="mode-tabs" role="tablist">
                    { for [ContactMode::Message, ContactMode::Call].into_iter().map(|m| html! {
                        <button
                            type="button"
                            role="tab"
                            class={classes!("mode-tab", (*mode == m).then(|| "active"))}
                            aria-selected={(*mode == m).to_string()}
                            onclick={set_mode.reform(move |_: MouseEvent| m)}
                        >
                            {m.label()}
                        </button>
                    }) }
                </div>

                // Both panels stay mounted so the embed keeps its state.
                <div class="contact-grid" style={if is_message { "" } else { "display: none;" }}>
                    <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
                        <div class="contact-row">
                            <div class="contact-field">
                                <label for="contact-name">{"Name"}</label>
                                <input id="contact-name" type="text" autocomplete="name"
                                    value={form.name.clone()} oninput={on_name} required={true} />
                            </div>
                            <div class="contact-field">
                                <label for="contact-email">{"Email"}</label>
                                <input id="contact-email" type="email" autocomplete="email"
                                    value={form.email.clone()} oninput={on_email} required={true} />
                            </div>
                        </div>
                        <div class="contact-field">
                            <label for="contact-company">{"Company (optional)"}</label>
                            <input id="contact-company" type="text" autocomplete="organization"
                                value={form.company.clone()} oninput={on_company} />
                        </div>
                        <div class="contact-field">
                            <label>{"What do you need?"}</label>
                            <div class="service-chips">
                                { for SERVICE_OPTIONS.iter().copied().map(|service| {
                                    let selected = form.services.iter().any(|s| s == service);
                                    html! {
                                        <button
                                            type="button"
                                            class={classes!("service-chip", selected.then(|| "selected"))}
                                            aria-pressed={selected.to_string()}
                                            onclick={toggle_service.reform(move |_: MouseEvent| service)}
                                        >
                                            {service}
                                        </button>
                                    }
                                }) }
                            </div>
                        </div>
                        <div class="contact-field">
                            <label for="contact-message">{"Message"}</label>
                            <textarea id="contact-message" rows="6"
                                placeholder="Tell us what you're building, your goals, timeline and any technical constraints."
                                value={form.message.clone()} oninput={on_message} required={true} />
                            <div class={classes!("char-count", (chars > MESSAGE_MAX_CHARS).then(|| "over"))}>
                                {format!("{} / {}", chars, MESSAGE_MAX_CHARS)}
                            </div>
                        </div>
                        {
                            if let Some(err) = &*error {
                                html! { <p class="form-error" role="alert">{err}</p> }
                            } else if *is_success {
                                html! { <p class="form-success" role="status">{"Message sent. We'll be in touch within 24 hours."}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <div>
                            <MagneticButton size={Size::Lg} button_type={"submit".to_string()} disabled={*is_submitting}>
                                { if *is_submitting { "Sending..." } else { "Send message" } }
                            </MagneticButton>
                        </div>
                    </form>
                    <aside class="contact-aside">
                        <p>{"We don't do discovery calls for the sake of it. Tell us what you're building and we'll respond with exactly how we'd approach it."}</p>
                        <ContactDetailList />
                    </aside>
                </div>

                <div class="contact-grid" style={if is_message { "display: none;" } else { "" }}>
                    <CalInlineEmbed />
                    <aside class="contact-aside">
                        <p>{"Book a 30-minute intro call. Bring your idea and we'll show up with questions and a rough plan of attack."}</p>
                        <ContactDetailList />
                    </aside>
                </div>

                <div class="next-steps">
                    { for NEXT_STEPS.iter().map(|(n, title, body)| html! {
                        <div class="next-step">
                            <span>{*n}</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_targets_inline_container() {
        let script = cal_embed_script("team/30min");
        assert!(script.contains("elementOrSelector:\"#my-cal-inline-30min\""));
        assert!(script.contains("calLink: \"team/30min\""));
        assert!(script.contains("https://app.cal.com/embed/embed.js"));
    }

    #[test]
    fn embed_link_is_quoted_safely() {
        let script = cal_embed_script("a\"b");
        assert!(script.contains(r#"calLink: "a\"b""#));
    }

    #[test]
    fn mode_labels() {
        assert_eq!(ContactMode::Message.label(), "Write to us");
        assert_eq!(ContactMode::Call.label(), "Book a call");
    }
}
