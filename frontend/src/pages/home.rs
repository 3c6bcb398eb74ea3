use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser;
use crate::components::decrypted_text::{AnimateOn, DecryptedText, RevealDirection};
use crate::components::magnetic_button::{MagneticButton, Size, Variant};
use crate::components::navbar::NAVBAR_OFFSET;
use crate::components::section_heading::SectionHeading;
use crate::components::services::Services;
use crate::components::text_reveal::{RevealUnit, TextReveal};
use crate::data::company::{DIFFERENCES, HERO_MARQUEE, PROCESS};
use crate::data::portfolio::PROJECTS;
use crate::pages::portfolio::ProjectCard;
use crate::Route;

/// Section id from a location hash such as `#services`.
pub fn hash_target(hash: &str) -> Option<&str> {
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let navigator = use_navigator();

    let to_contact = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(nav) = &navigator {
                nav.push(&Route::Contact);
            }
        })
    };
    let to_work = Callback::from(|_: ()| {
        browser::scroll_to_section("portfolio", NAVBAR_OFFSET);
    });

    html! {
        <section class="hero">
            <div class="hero-inner">
                <span class="hero-kicker">
                    <DecryptedText
                        text={"Flamix Technologies"}
                        animate_on={AnimateOn::View}
                        sequential={true}
                        reveal_direction={RevealDirection::Center}
                        speed={60}
                    />
                </span>
                <h1 class="hero-title">
                    <TextReveal
                        text={"DESIGN. DEVELOP. DOMINATE."}
                        unit={RevealUnit::Chars}
                        highlight={vec!['.']}
                        delay={0.2}
                    />
                </h1>
                <p class="hero-sub">
                    {"We design and engineer websites, software and campaigns for teams that want the work to carry weight."}
                </p>
                <div class="hero-actions">
                    <MagneticButton size={Size::Lg} onclick={to_contact}>{"Start a project"}</MagneticButton>
                    <MagneticButton size={Size::Lg} variant={Variant::Outline} glow={false} onclick={to_work}>
                        {"See our work"}
                    </MagneticButton>
                </div>
            </div>
            <div class="hero-marquee" aria-hidden="true">
                <div class="marquee-track">
                    // Rendered twice so the loop has no seam.
                    { for HERO_MARQUEE.iter().chain(HERO_MARQUEE.iter()).map(|item| html! {
                        <span class="marquee-item">{*item}<span class="marquee-dot">{"✦"}</span></span>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(PortfolioPreview)]
fn portfolio_preview() -> Html {
    html! {
        <section id="portfolio" class="home-section">
            <SectionHeading
                number={"02".to_string()}
                title={"Selected work"}
                description={"A few of the products and sites we've shipped recently.".to_string()}
            />
            <div class="project-grid">
                { for PROJECTS.iter().take(3).map(|p| html! { <ProjectCard key={p.id} project={p.clone()} /> }) }
            </div>
            <div class="section-more">
                <Link<Route> to={Route::Portfolio} classes="more-link">{"All projects →"}</Link<Route>>
            </div>
        </section>
    }
}

#[function_component(WhyUs)]
fn why_us() -> Html {
    html! {
        <section class="home-section">
            <SectionHeading number={"03".to_string()} title={"Why teams pick us"} />
            <div class="diff-grid">
                { for DIFFERENCES.iter().map(|d| html! {
                    <div class="diff-row">
                        <span class="diff-keyword">{d.keyword}</span>
                        <span class="diff-others">{d.others}</span>
                        <span class="diff-us">{d.us}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(OurProcess)]
fn our_process() -> Html {
    html! {
        <section class="home-section">
            <SectionHeading
                number={"04".to_string()}
                title={"How we work"}
                description={"Three phases, no surprises.".to_string()}
            />
            <ol class="process-list">
                { for PROCESS.iter().map(|step| html! {
                    <li class="process-step">
                        <span class="process-number">{step.step}</span>
                        <div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                            <ul>
                                { for step.bullets.iter().map(|b| html! { <li>{*b}</li> }) }
                            </ul>
                        </div>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(ClosingCta)]
fn closing_cta() -> Html {
    html! {
        <section class="closing-cta">
            <h2>
                <TextReveal text={"Have something in mind? Let's talk."} />
            </h2>
            <Link<Route> to={Route::Contact} classes="cta-link">{"Get in touch →"}</Link<Route>>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Honour `/#section` links from other pages, otherwise start at the top.
    use_effect_with_deps(
        move |_| {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            let mut pending = None;
            match hash_target(&hash) {
                Some(id) => {
                    let id = id.to_string();
                    pending = Some(Timeout::new(100, move || {
                        if !browser::scroll_to_section(&id, NAVBAR_OFFSET) {
                            log::warn!("No section with id {}", id);
                        }
                    }));
                }
                None => browser::scroll_window_to(0.0, false),
            }
            move || drop(pending)
        },
        (),
    );

    html! {
        <div class="home">
            <style>
                {r#"
                .home {
                    background: #FAF7FC;
                    color: #1A1A1D;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 8rem 2rem 2rem;
                    box-sizing: border-box;
                    overflow: hidden;
                }
                .hero-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    width: 100%;
                }
                .hero-kicker {
                    font-size: 0.8rem;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    color: #7A1CAC;
                }
                .hero-title {
                    font-size: clamp(3rem, 10vw, 9rem);
                    line-height: 0.95;
                    margin: 1.5rem 0;
                    letter-spacing: -0.03em;
                }
                .hero-sub {
                    max-width: 36rem;
                    font-size: 1.15rem;
                    color: rgba(26, 26, 29, 0.65);
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 2.5rem;
                }
                .hero-marquee {
                    margin-top: 5rem;
                    overflow: hidden;
                    border-top: 1px solid rgba(46, 7, 63, 0.08);
                    border-bottom: 1px solid rgba(46, 7, 63, 0.08);
                    padding: 1.25rem 0;
                }
                .marquee-track {
                    display: flex;
                    width: max-content;
                    animation: marquee 40s linear infinite;
                }
                .marquee-item {
                    font-weight: 600;
                    letter-spacing: 0.2em;
                    white-space: nowrap;
                    padding-right: 2.5rem;
                }
                .marquee-dot { color: #AD49E1; padding-left: 2.5rem; }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .marquee-track { animation: none; }
                }
                .home-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 8rem 2rem;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .section-more { margin-top: 2.5rem; }
                .more-link, .cta-link {
                    color: #7A1CAC;
                    font-weight: 600;
                    text-decoration: none;
                }
                .diff-row {
                    display: grid;
                    grid-template-columns: 1fr 2fr 2fr;
                    gap: 2rem;
                    padding: 1.5rem 0;
                    border-bottom: 1px solid rgba(46, 7, 63, 0.08);
                }
                .diff-keyword { font-size: 1.5rem; font-weight: 700; }
                .diff-others { color: rgba(26, 26, 29, 0.4); text-decoration: line-through; }
                .diff-us { color: #2E073F; }
                .process-list {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 3rem;
                }
                .process-step { display: flex; gap: 2rem; }
                .process-number { font-size: 3rem; font-weight: 700; color: #EBD3F8; }
                .process-step h3 { margin: 0 0 0.5rem; font-size: 1.75rem; }
                .process-step p, .process-step ul { color: rgba(26, 26, 29, 0.65); }
                .closing-cta {
                    background: #2E073F;
                    color: #fff;
                    text-align: center;
                    padding: 8rem 2rem;
                }
                .closing-cta h2 { font-size: clamp(2rem, 5vw, 4rem); margin: 0 0 2rem; }
                .closing-cta .cta-link { color: #EBD3F8; font-size: 1.2rem; }
                @media (max-width: 768px) {
                    .home-section { padding: 5rem 1rem; }
                    .diff-row { grid-template-columns: 1fr; gap: 0.5rem; }
                    .process-step { flex-direction: column; gap: 0.5rem; }
                }
                "#}
            </style>
            <Hero />
            <Services />
            <PortfolioPreview />
            <WhyUs />
            <OurProcess />
            <ClosingCta />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_without_id_is_ignored() {
        assert_eq!(hash_target(""), None);
        assert_eq!(hash_target("#"), None);
    }

    #[test]
    fn hash_names_section() {
        assert_eq!(hash_target("#services"), Some("services"));
        assert_eq!(hash_target("portfolio"), Some("portfolio"));
    }
}
