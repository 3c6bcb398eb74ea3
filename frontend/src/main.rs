use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod browser;
mod hooks;
mod carousel;
mod email;
mod data {
    pub mod company;
    pub mod portfolio;
}
mod components {
    pub mod decrypted_text;
    pub mod footer;
    pub mod magnetic_button;
    pub mod navbar;
    pub mod scroll_to_top;
    pub mod section_heading;
    pub mod services;
    pub mod text_reveal;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod portfolio;
}

use components::{footer::Footer, navbar::Navbar, scroll_to_top::ScrollToTop};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    portfolio::{Portfolio, ProjectDetail},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/portfolio")]
    Portfolio,
    #[at("/portfolio/:id")]
    ProjectDetail { id: u32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::ProjectDetail { id } => {
            info!("Rendering Project {} page", id);
            html! { <ProjectDetail {id} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                html { scroll-behavior: auto; }
                body {
                    margin: 0;
                    font-family: "Inter", system-ui, -apple-system, sans-serif;
                    background: #FAF7FC;
                    -webkit-font-smoothing: antialiased;
                }
                ::selection { background: #EBD3F8; color: #2E073F; }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    padding: 0;
                    margin: -1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                    white-space: nowrap;
                    border: 0;
                }
                "#}
            </style>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <ScrollToTop />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("logger already initialized");
    }

    info!("Starting application at {}", config::get_site_url());
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_parse() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/portfolio/3"), Some(Route::ProjectDetail { id: 3 }));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
    }

    #[test]
    fn project_links_render_ids() {
        assert_eq!(Route::ProjectDetail { id: 5 }.to_path(), "/portfolio/5");
    }
}
