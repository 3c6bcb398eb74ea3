use std::cell::Cell;

use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::{self, Listener};
use crate::components::magnetic_button::{MagneticButton, Size, Variant};
use crate::Route;

/// Room left above a section when jumping to it.
pub const NAVBAR_OFFSET: f64 = 100.0;

#[derive(Clone, PartialEq)]
enum Target {
    Section(&'static str),
    Page(Route),
}

struct NavItem {
    label: &'static str,
    target: Target,
}

const NAV: &[NavItem] = &[
    NavItem { label: "Services", target: Target::Section("services") },
    NavItem { label: "Projects", target: Target::Section("portfolio") },
    NavItem { label: "About Us", target: Target::Page(Route::About) },
    NavItem { label: "Contact", target: Target::Page(Route::Contact) },
];

const SPY_SECTIONS: &[&str] = &["services", "portfolio"];

/// Vertical bounds of a tracked section relative to the viewport top.
#[derive(Clone, Copy, Debug)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// Picks the section that covers the largest share of the observation band.
///
/// The band runs from 40% to 45% of the viewport height, i.e. a root margin
/// of -40% at the top and -55% at the bottom.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], viewport_height: f64) -> Option<&'a str> {
    let band_top = viewport_height * 0.40;
    let band_bottom = viewport_height * 0.45;
    sections
        .iter()
        .filter_map(|s| {
            let height = s.bottom - s.top;
            let overlap = s.bottom.min(band_bottom) - s.top.max(band_top);
            if height <= 0.0 || overlap <= 0.0 {
                None
            } else {
                Some((s.id, overlap / height))
            }
        })
        .fold(None, |best: Option<(&'a str, f64)>, (id, ratio)| match best {
            Some((_, r)) if r >= ratio => best,
            _ => Some((id, ratio)),
        })
        .map(|(id, _)| id)
}

/// Highlight after a scroll. Between tracked sections the last one stays lit.
pub fn spy_update<'a>(
    current: Option<&'a str>,
    sections: &[SectionBounds<'a>],
    viewport_height: f64,
) -> Option<&'a str> {
    active_section(sections, viewport_height).or(current)
}

fn measure_sections() -> Vec<SectionBounds<'static>> {
    SPY_SECTIONS
        .iter()
        .copied()
        .filter_map(|id| {
            let el: Element = browser::element_by_id(id)?;
            let rect = el.get_bounding_client_rect();
            Some(SectionBounds { id, top: rect.top(), bottom: rect.bottom() })
        })
        .collect()
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<&'static str>);
    let route = use_route::<Route>();
    let on_home = matches!(route, Some(Route::Home));

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |on_home: &bool| {
                let on_home = *on_home;
                let lit = Cell::new(*active);
                let update = move || {
                    is_scrolled.set(browser::scroll_y() > 40.0);
                    if on_home {
                        let (_, viewport_height) = browser::viewport_size();
                        let sections = measure_sections();
                        lit.set(spy_update(lit.get(), &sections, viewport_height));
                    } else {
                        lit.set(None);
                    }
                    active.set(lit.get());
                };
                update();
                let listener = Listener::on_window("scroll", move |_| update());
                move || drop(listener)
            },
            on_home,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let go_to_section = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            menu_open.set(false);
            if on_home && browser::scroll_to_section(id, NAVBAR_OFFSET) {
                return;
            }
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&format!("/#{}", id));
            }
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: min(1100px, calc(100% - 2rem));
                    z-index: 40;
                    border-radius: 999px;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.75);
                    backdrop-filter: blur(14px);
                    box-shadow: 0 8px 32px rgba(46, 7, 63, 0.08);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.6rem 1.25rem;
                }
                .nav-logo {
                    font-weight: 700;
                    letter-spacing: 0.02em;
                    color: #1A1A1D;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }
                .nav-item {
                    font-size: 0.8rem;
                    font-weight: 500;
                    color: rgba(26, 26, 29, 0.68);
                    text-decoration: none;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                }
                .nav-item.active {
                    background: rgba(46, 7, 63, 0.92);
                    color: #fff;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    flex-direction: column;
                    gap: 4px;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #1A1A1D;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: calc(100% + 0.5rem);
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1rem;
                        border-radius: 1.25rem;
                        background: rgba(255, 255, 255, 0.95);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"FLAMIX"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for NAV.iter().map(|item| match &item.target {
                        Target::Section(id) => {
                            let id: &'static str = *id;
                            let is_active = *active == Some(id);
                            html! {
                                <MagneticButton
                                    class={classes!("nav-item", is_active.then(|| "active"))}
                                    variant={Variant::Ghost}
                                    size={Size::Sm}
                                    unstyled={true}
                                    strength={0.22}
                                    ripple={false}
                                    glow={false}
                                    aria_current={is_active.then(|| "location".to_string())}
                                    onclick={go_to_section.reform(move |_: ()| id)}
                                >
                                    {item.label}
                                </MagneticButton>
                            }
                        }
                        Target::Page(route) => html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes="nav-item">
                                    {item.label}
                                </Link<Route>>
                            </div>
                        },
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(id: &str, top: f64, bottom: f64) -> SectionBounds<'_> {
        SectionBounds { id, top, bottom }
    }

    #[test]
    fn nothing_in_band() {
        let sections = [b("services", 500.0, 900.0), b("portfolio", 1200.0, 2000.0)];
        assert_eq!(active_section(&sections, 1000.0), None);
    }

    #[test]
    fn section_covering_band_wins() {
        let sections = [b("services", -2000.0, 430.0), b("portfolio", 430.0, 1400.0)];
        // services overlaps 30px of 2430, portfolio 20px of 970
        assert_eq!(active_section(&sections, 1000.0), Some("portfolio"));

        let sections = [b("services", -100.0, 2000.0), b("portfolio", 2000.0, 3000.0)];
        assert_eq!(active_section(&sections, 1000.0), Some("services"));
    }

    #[test]
    fn highlight_survives_untracked_sections() {
        let in_services = [b("services", -100.0, 2000.0), b("portfolio", 2000.0, 3000.0)];
        let lit = spy_update(None, &in_services, 1000.0);
        assert_eq!(lit, Some("services"));

        // reader is in a later, untracked section
        let past_both = [b("services", -5000.0, -3000.0), b("portfolio", -3000.0, -2000.0)];
        assert_eq!(spy_update(lit, &past_both, 1000.0), Some("services"));

        let in_portfolio = [b("services", -2000.0, -100.0), b("portfolio", -100.0, 1500.0)];
        assert_eq!(spy_update(lit, &in_portfolio, 1000.0), Some("portfolio"));
    }

    #[test]
    fn empty_sections_are_ignored() {
        let sections = [b("services", 420.0, 420.0)];
        assert_eq!(active_section(&sections, 1000.0), None);
    }
}
