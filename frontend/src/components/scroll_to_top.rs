use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser;
use crate::components::magnetic_button::{MagneticButton, Variant};

pub const VISIBLE_AFTER: f64 = 700.0;

/// How far down the page the reader is, 0..=100.
pub fn scroll_percentage(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let scroll = use_window_scroll();
    let scroll_y = scroll.1;
    let (_, viewport_height) = browser::viewport_size();
    let percentage = scroll_percentage(scroll_y, browser::document_height(), viewport_height);
    let visible = scroll_y > VISIBLE_AFTER;

    let onclick = Callback::from(|_| {
        browser::scroll_window_to(0.0, !browser::prefers_reduced_motion());
    });

    html! {
        <div class={classes!("scroll-to-top", visible.then(|| "visible"))} aria-hidden={(!visible).to_string()}>
            <style>
                {r#"
                .scroll-to-top {
                    position: fixed;
                    right: 2rem;
                    bottom: 2rem;
                    z-index: 50;
                    opacity: 0;
                    transform: translateY(50px) scale(0);
                    pointer-events: none;
                    transition: opacity 0.3s ease, transform 0.35s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .scroll-to-top.visible {
                    opacity: 1;
                    transform: none;
                    pointer-events: auto;
                }
                .stt-ring {
                    position: absolute;
                    inset: -4px;
                    border-radius: 50%;
                    filter: blur(6px);
                    opacity: 0.6;
                    pointer-events: none;
                }
                .stt-button {
                    width: 3.75rem;
                    height: 3.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #7A1CAC, #AD49E1);
                    color: #fff;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                }
                @media (max-width: 768px) {
                    .scroll-to-top { right: 1.5rem; bottom: 1.5rem; }
                    .stt-button { width: 3.25rem; height: 3.25rem; }
                }
                "#}
            </style>
            <div
                class="stt-ring"
                style={format!(
                    "background: conic-gradient(from {:.1}deg, #7A1CAC, #AD49E1, #EBD3F8, #AD49E1, #7A1CAC);",
                    percentage * 3.6
                )}
            ></div>
            <MagneticButton
                class="stt-button"
                variant={Variant::Ghost}
                unstyled={true}
                strength={0.3}
                ripple={false}
                aria_label={"Scroll to top".to_string()}
                onclick={onclick}
            >
                <svg width="22" height="22" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M12 19V5M5 12l7-7 7 7" stroke-linecap="round" stroke-linejoin="round" />
                </svg>
                <span class="sr-only">{format!("{:.0}% scrolled", percentage)}</span>
            </MagneticButton>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_scrollable_height() {
        assert_eq!(scroll_percentage(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_percentage(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_percentage(2500.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_pages_report_zero() {
        assert_eq!(scroll_percentage(10.0, 800.0, 900.0), 0.0);
    }
}
