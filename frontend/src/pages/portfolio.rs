use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::data::portfolio::{find_project, next_project, Project, PROJECTS};
use crate::hooks::use_scroll_top_on_mount;
use crate::Route;

const PORTFOLIO_STYLE: &str = r#"
.portfolio-page {
    background: #FAF7FC;
    color: #1A1A1D;
    min-height: 100vh;
    padding: 9rem 2rem 6rem;
}
.portfolio-inner {
    max-width: 1200px;
    margin: 0 auto;
}
.project-card {
    display: block;
    border-radius: 22px;
    overflow: hidden;
    background: #fff;
    color: inherit;
    text-decoration: none;
    box-shadow: 0 12px 40px rgba(46, 7, 63, 0.06);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.project-card:hover {
    transform: translateY(-4px);
    box-shadow: 0 20px 60px rgba(46, 7, 63, 0.12);
}
.project-card img {
    width: 100%;
    aspect-ratio: 16 / 10;
    object-fit: cover;
    display: block;
}
.project-card-body { padding: 1.5rem; }
.project-card-body h3 { margin: 0 0 0.5rem; }
.project-category {
    font-size: 0.7rem;
    letter-spacing: 0.25em;
    text-transform: uppercase;
    color: #7A1CAC;
}
.project-tags { display: flex; flex-wrap: wrap; gap: 0.4rem; margin-top: 1rem; }
.project-tag {
    font-size: 0.72rem;
    padding: 0.2rem 0.7rem;
    border-radius: 999px;
    background: rgba(122, 28, 172, 0.06);
    color: rgba(122, 28, 172, 0.8);
}
.project-list {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
    gap: 2rem;
}
.project-detail-hero img {
    width: 100%;
    border-radius: 22px;
    margin: 2rem 0;
}
.project-hook { font-size: 1.5rem; color: #2E073F; max-width: 48rem; }
.project-description { color: rgba(26, 26, 29, 0.7); line-height: 1.7; max-width: 48rem; }
.project-live {
    display: inline-block;
    margin-top: 2rem;
    padding: 0.8rem 1.6rem;
    border-radius: 999px;
    background: #7A1CAC;
    color: #fff;
    text-decoration: none;
}
.next-project {
    display: block;
    margin-top: 6rem;
    padding: 3rem;
    border-radius: 22px;
    background: #2E073F;
    color: #fff;
    text-decoration: none;
}
.next-project span { font-size: 0.75rem; letter-spacing: 0.3em; text-transform: uppercase; color: #EBD3F8; }
.next-project h2 { margin: 0.5rem 0 0; font-size: clamp(1.75rem, 4vw, 3rem); }
.back-link { color: rgba(26, 26, 29, 0.55); text-decoration: none; font-size: 0.9rem; }
@media (max-width: 768px) {
    .portfolio-page { padding: 7rem 1rem 4rem; }
    .next-project { padding: 2rem; }
}
"#;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let p = &props.project;
    html! {
        <Link<Route> to={Route::ProjectDetail { id: p.id }} classes="project-card">
            <img src={p.image} alt={p.image_alt} loading="lazy" />
            <div class="project-card-body">
                <span class="project-category">{p.category}</span>
                <h3>{p.title}</h3>
                <p>{p.hook}</p>
                <div class="project-tags">
                    { for p.tags.iter().map(|t| html! { <span class="project-tag">{*t}</span> }) }
                </div>
            </div>
        </Link<Route>>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    use_scroll_top_on_mount();

    html! {
        <div class="portfolio-page">
            <style>{PORTFOLIO_STYLE}</style>
            <div class="portfolio-inner">
                <SectionHeading
                    number={"Work".to_string()}
                    title={"Projects we're proud of"}
                    description={"Sites, products and systems built with our clients, from first sketch to launch.".to_string()}
                />
                <div class="project-list">
                    { for PROJECTS.iter().map(|p| html! { <ProjectCard key={p.id} project={p.clone()} /> }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub id: u32,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    // Re-run when navigating from one project straight to the next.
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.id,
    );

    let Some(project) = find_project(props.id) else {
        log::warn!("Unknown project id {}", props.id);
        return html! { <ProjectNotFound /> };
    };
    let next = next_project(project.id);

    html! {
        <div class="portfolio-page">
            <style>{PORTFOLIO_STYLE}</style>
            <article class="portfolio-inner">
                <Link<Route> to={Route::Portfolio} classes="back-link">{"← All projects"}</Link<Route>>
                <header class="project-detail-hero">
                    <span class="project-category">{project.category}</span>
                    <h1>{project.title}</h1>
                    <div class="project-tags">
                        { for project.tags.iter().map(|t| html! { <span class="project-tag">{*t}</span> }) }
                    </div>
                    <img src={project.image} alt={project.image_alt} />
                </header>
                <p class="project-hook">{project.hook}</p>
                <p class="project-description">{project.description}</p>
                <a class="project-live" href={project.live_url} target="_blank" rel="noopener noreferrer">
                    {"Visit live site ↗"}
                </a>
                {
                    match next {
                        Some(next) if next.id != project.id => html! {
                            <Link<Route> to={Route::ProjectDetail { id: next.id }} classes="next-project">
                                <span>{"Next project"}</span>
                                <h2>{next.title}</h2>
                            </Link<Route>>
                        },
                        _ => html! {},
                    }
                }
            </article>
        </div>
    }
}

#[function_component(ProjectNotFound)]
fn project_not_found() -> Html {
    html! {
        <div class="portfolio-page">
            <style>{PORTFOLIO_STYLE}</style>
            <div class="portfolio-inner">
                <h1>{"Project not found"}</h1>
                <p>{"That project doesn't exist or has moved."}</p>
                <Link<Route> to={Route::Portfolio} classes="back-link">{"← Back to all projects"}</Link<Route>>
            </div>
        </div>
    }
}
