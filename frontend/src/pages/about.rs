use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::components::text_reveal::{RevealUnit, TextReveal};
use crate::data::company::{PROCESS, STATS, TECHNOLOGIES, VALUES};
use crate::hooks::use_scroll_top_on_mount;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_top_on_mount();

    html! {
        <div class="about-page">
            <style>
                {r#"
                .about-page {
                    background: #FAF7FC;
                    color: #1A1A1D;
                }
                .about-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 7rem 2rem;
                }
                .about-hero { padding-top: 10rem; }
                .about-hero h1 {
                    font-size: clamp(2.75rem, 8vw, 7rem);
                    line-height: 0.95;
                    margin: 0 0 2rem;
                }
                .about-lead {
                    max-width: 42rem;
                    font-size: 1.15rem;
                    line-height: 1.7;
                    color: rgba(26, 26, 29, 0.6);
                }
                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    margin-top: 5rem;
                }
                .about-stat strong { display: block; font-size: 3rem; color: #7A1CAC; }
                .about-stat span { font-size: 0.85rem; color: rgba(26, 26, 29, 0.55); }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2.5rem;
                }
                .value-card { padding-top: 1.5rem; border-top: 1px solid rgba(46, 7, 63, 0.12); }
                .value-card small { letter-spacing: 0.3em; color: #AD49E1; }
                .value-card h3 { font-size: 1.6rem; margin: 0.75rem 0; }
                .value-card p { color: rgba(26, 26, 29, 0.6); line-height: 1.6; }
                .tech-cloud { display: flex; flex-wrap: wrap; gap: 0.6rem; }
                .tech-pill {
                    padding: 0.5rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(46, 7, 63, 0.12);
                    font-size: 0.9rem;
                }
                .process-summary {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .process-summary h3 { margin: 0.5rem 0; }
                .process-summary span { color: #EBD3F8; font-size: 2.5rem; font-weight: 700; }
                .process-summary p { color: rgba(26, 26, 29, 0.6); }
                .about-cta {
                    background: #2E073F;
                    color: #fff;
                    text-align: center;
                    padding: 7rem 2rem;
                }
                .about-cta h2 { font-size: clamp(2rem, 5vw, 3.5rem); margin: 0 0 2rem; }
                .about-cta a { color: #EBD3F8; font-weight: 600; text-decoration: none; font-size: 1.15rem; }
                @media (max-width: 768px) {
                    .about-section { padding: 5rem 1rem; }
                    .about-stats { grid-template-columns: repeat(2, 1fr); }
                    .values-grid, .process-summary { grid-template-columns: 1fr; }
                }
                "#}
            </style>

            <section class="about-section about-hero">
                <h1>
                    <TextReveal text={"We build what others template."} unit={RevealUnit::Words} />
                </h1>
                <p class="about-lead">
                    {"Flamix Technologies is a small team of engineers and designers. Since 2019 we've partnered with startups and growing companies on products where being well built matters as much as looking good."}
                </p>
                <div class="about-stats">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="about-stat">
                            <strong>{*value}</strong>
                            <span>{*label}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-section">
                <SectionHeading
                    number={"01".to_string()}
                    title={"What we hold ourselves to"}
                    description={"Four principles we've actually lived by since day one.".to_string()}
                />
                <div class="values-grid">
                    { for VALUES.iter().map(|v| html! {
                        <div class="value-card" key={v.number}>
                            <small>{format!("{} / {}", v.number, v.keyword)}</small>
                            <h3>{v.title}</h3>
                            <p>{v.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-section">
                <SectionHeading number={"02".to_string()} title={"Tools we trust"} />
                <div class="tech-cloud">
                    { for TECHNOLOGIES.iter().map(|t| html! { <span class="tech-pill">{*t}</span> }) }
                </div>
            </section>

            <section class="about-section">
                <SectionHeading number={"03".to_string()} title={"How a project runs"} />
                <div class="process-summary">
                    { for PROCESS.iter().map(|step| html! {
                        <div>
                            <span>{step.step}</span>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-cta">
                <h2>{"Ready when you are."}</h2>
                <Link<Route> to={Route::Contact}>{"Start a conversation →"}</Link<Route>>
            </section>
        </div>
    }
}
