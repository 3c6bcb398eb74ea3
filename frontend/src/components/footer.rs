use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::company::CONTACT_DETAILS;
use crate::Route;

pub const INQUIRY_SUBJECT: &str = "Project inquiry";

/// `mailto:` link with an encoded subject line.
pub fn mailto(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, urlencoding::encode(subject))
}

const SOCIALS: &[(&str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com/company/flamix-technologies"),
    ("Instagram", "https://www.instagram.com/flamixtechnologies"),
    ("GitHub", "https://github.com/flamix-technologies"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let email = CONTACT_DETAILS
        .iter()
        .find(|d| d.label == "Email")
        .map(|d| d.value)
        .unwrap_or_default();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #2E073F;
                    color: rgba(255, 255, 255, 0.8);
                    padding: 5rem 2rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 3rem;
                }
                .footer-brand h3 {
                    font-size: 2.5rem;
                    margin: 0 0 1rem;
                    color: #fff;
                }
                .footer-col h4 {
                    font-size: 0.75rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #EBD3F8;
                    margin-bottom: 1rem;
                }
                .footer-col a {
                    display: block;
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    padding: 0.25rem 0;
                }
                .footer-col a:hover { color: #fff; }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 4rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.8rem;
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr 1fr; }
                    .footer-brand { grid-column: 1 / -1; }
                    .footer-bottom { flex-direction: column; gap: 0.5rem; }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"Let's build something."}</h3>
                    <a class="footer-mail" href={mailto(email, INQUIRY_SUBJECT)}>{email}</a>
                </div>
                <div class="footer-col">
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-col">
                    <h4>{"Reach us"}</h4>
                    { for CONTACT_DETAILS.iter().map(|d| html! {
                        <a href={d.href} target={d.href.starts_with("http").then(|| "_blank")} rel="noopener noreferrer">
                            {d.value}
                        </a>
                    }) }
                </div>
                <div class="footer-col">
                    <h4>{"Follow"}</h4>
                    { for SOCIALS.iter().map(|(label, href)| html! {
                        <a href={*href} target="_blank" rel="noopener noreferrer">{*label}</a>
                    }) }
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {} Flamix Technologies. All rights reserved.", year)}</span>
                <span>{"Kathmandu, Nepal"}</span>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject() {
        assert_eq!(
            mailto("hi@example.com", "Project inquiry & budget"),
            "mailto:hi@example.com?subject=Project%20inquiry%20%26%20budget"
        );
    }
}
