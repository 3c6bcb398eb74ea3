use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, EventTarget, HtmlElement, KeyboardEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::{self, AnimationFrame, Listener};
use crate::carousel::{
    pad2, progress_from_position, CarouselController, CarouselMode, CarouselTuning, FrameGate, Invalidation,
    Measurement, ScrollTarget,
};
use crate::components::magnetic_button::{MagneticButton, Variant};
use crate::components::section_heading::SectionHeading;
use crate::data::company::{ServiceCard, SERVICES};
use crate::Route;

fn apply_track_offset(track: &NodeRef, offset: f64) {
    if let Some(el) = track.cast::<HtmlElement>() {
        let _ = el
            .style()
            .set_property("transform", &format!("translate3d({:.2}px, 0, 0)", offset));
    }
}

fn apply_progress_bar(bar: &NodeRef, progress: f64) {
    if let Some(el) = bar.cast::<HtmlElement>() {
        let _ = el.style().set_property("width", &format!("{:.2}%", progress * 100.0));
    }
}

/// Section top relative to the viewport, and its absolute page offset.
fn section_position(section: &NodeRef) -> Option<(f64, f64)> {
    let el = section.cast::<Element>()?;
    let top = el.get_bounding_client_rect().top();
    Some((top, top + browser::scroll_y()))
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: ServiceCard,
    index: usize,
    active: bool,
    native: bool,
}

#[function_component(ServiceCardView)]
fn service_card(props: &ServiceCardProps) -> Html {
    let svc = &props.service;
    html! {
        <article
            class={classes!("service-card", props.native.then(|| "native"))}
            data-active={props.active.to_string()}
        >
            <span class="card-watermark">{pad2(props.index + 1)}</span>
            <h3>{svc.title}</h3>
            <p class="card-description">{svc.description}</p>
            <div class="card-chips">
                { for svc.chips.iter().map(|chip| html! { <span class="card-chip">{*chip}</span> }) }
            </div>
            <ul class="card-bullets">
                { for svc.bullets.iter().map(|b| html! { <li>{*b}</li> }) }
            </ul>
            <div class="card-footer">
                <Link<Route> to={Route::Contact} classes="card-cta">{"Start a project →"}</Link<Route>>
                <Link<Route> to={Route::Portfolio} classes="card-link">{"View work →"}</Link<Route>>
            </div>
        </article>
    }
}

/// Horizontally scrubbed service cards, pinned while the page scrolls past.
#[function_component(Services)]
pub fn services() -> Html {
    let cards = SERVICES;
    let card_count = cards.len();

    let section_ref = use_node_ref();
    let viewport_ref = use_node_ref();
    let track_ref = use_node_ref();
    let bar_ref = use_node_ref();

    let controller = use_mut_ref(|| {
        let (width, _) = browser::viewport_size();
        let mode = CarouselMode::select(width, browser::prefers_reduced_motion());
        log::info!("Services carousel mode: {:?}", mode);
        CarouselController::new(mode, card_count, CarouselTuning::default())
    });
    let mode = controller.borrow().mode();
    let active = use_state_eq(|| 0usize);
    let extent = use_state_eq(|| None::<i64>);
    let mounts = use_mut_ref(|| 0u32);

    // Pinned mode: measurement, scroll scrubbing and re-entry reset.
    {
        let controller = controller.clone();
        let active = active.clone();
        let extent = extent.clone();
        let section_ref = section_ref.clone();
        let viewport_ref = viewport_ref.clone();
        let track_ref = track_ref.clone();
        let bar_ref = bar_ref.clone();
        let mounts = mounts.clone();
        use_effect_with_deps(
            move |card_count: &usize| {
                let mut listeners: Vec<Listener> = Vec::new();
                let alive = Rc::new(Cell::new(true));
                let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

                if controller.borrow().mode().is_pinned() {
                    let sync: Rc<dyn Fn()> = {
                        let controller = controller.clone();
                        let active = active.clone();
                        let section_ref = section_ref.clone();
                        let track_ref = track_ref.clone();
                        let bar_ref = bar_ref.clone();
                        Rc::new(move || {
                            let Some((top, _)) = section_position(&section_ref) else {
                                return;
                            };
                            let index = {
                                let mut c = controller.borrow_mut();
                                let m = c.measurement();
                                let progress = progress_from_position(top, m.container_extent, m.viewport_height);
                                c.on_progress(progress);
                                c.on_section_position(top, progress);
                                apply_track_offset(&track_ref, c.horizontal_offset());
                                apply_progress_bar(&bar_ref, c.progress());
                                c.active_index()
                            };
                            active.set(index);
                        })
                    };

                    let measure: Rc<dyn Fn()> = {
                        let controller = controller.clone();
                        let active = active.clone();
                        let extent = extent.clone();
                        let section_ref = section_ref.clone();
                        let viewport_ref = viewport_ref.clone();
                        let track_ref = track_ref.clone();
                        let bar_ref = bar_ref.clone();
                        Rc::new(move || {
                            let (Some(viewport), Some(track)) =
                                (viewport_ref.cast::<Element>(), track_ref.cast::<Element>())
                            else {
                                return;
                            };
                            let (_, window_height) = browser::viewport_size();
                            let m = Measurement::from_layout(
                                viewport.get_bounding_client_rect().width(),
                                track.scroll_width() as f64,
                                window_height,
                            );
                            let top = section_position(&section_ref).map(|(t, _)| t).unwrap_or(0.0);
                            let progress = progress_from_position(top, m.container_extent, m.viewport_height);
                            log::debug!(
                                "Services measured: range {:.0}px, extent {:.0}px",
                                m.scroll_range,
                                m.container_extent
                            );
                            let index = {
                                let mut c = controller.borrow_mut();
                                c.remeasure(m, progress);
                                apply_track_offset(&track_ref, c.horizontal_offset());
                                apply_progress_bar(&bar_ref, c.progress());
                                c.active_index()
                            };
                            extent.set(Some(m.container_extent.round() as i64));
                            active.set(index);
                        })
                    };

                    let gate = Rc::new(RefCell::new(FrameGate::default()));
                    let invalidate: Rc<dyn Fn(Invalidation)> = {
                        let frame = frame.clone();
                        let alive = alive.clone();
                        Rc::new(move |reason| {
                            if !alive.get() || !gate.borrow_mut().invalidate(reason) {
                                return;
                            }
                            let gate = gate.clone();
                            let measure = measure.clone();
                            *frame.borrow_mut() = AnimationFrame::request(move || {
                                if gate.borrow_mut().begin_frame() {
                                    measure();
                                }
                            });
                        })
                    };

                    let first = *mounts.borrow() == 0;
                    *mounts.borrow_mut() += 1;
                    invalidate(if first { Invalidation::Mount } else { Invalidation::CardCountChange });
                    log::debug!("Services carousel tracking {} cards", card_count);

                    {
                        let sync = sync.clone();
                        listeners.extend(Listener::on_window("scroll", move |_| sync()));
                    }
                    {
                        let invalidate = invalidate.clone();
                        let sync = sync.clone();
                        listeners.extend(Listener::on_window("resize", move |_| {
                            invalidate(Invalidation::Resize);
                            sync();
                        }));
                    }
                    {
                        let invalidate = invalidate.clone();
                        listeners.extend(Listener::on_window("orientationchange", move |_| {
                            invalidate(Invalidation::OrientationChange)
                        }));
                    }

                    // Text layout shifts once web fonts land.
                    let fonts_ready = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.fonts().ready().ok());
                    if let Some(promise) = fonts_ready {
                        let invalidate = invalidate.clone();
                        spawn_local(async move {
                            if JsFuture::from(promise).await.is_ok() {
                                invalidate(Invalidation::FontsReady);
                            }
                        });
                    }

                    sync();
                }

                move || {
                    alive.set(false);
                    frame.borrow_mut().take();
                    drop(listeners);
                }
            },
            card_count,
        );
    }

    // Native mode: the track's own scroll offset drives the index, and the
    // card stride follows the window width across resizes and rotations.
    {
        let controller = controller.clone();
        let active = active.clone();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut listeners: Vec<Listener> = Vec::new();
                if !controller.borrow().mode().is_pinned() {
                    if let Some(track) = track_ref.cast::<Element>() {
                        let resync: Rc<dyn Fn(bool)> = {
                            let track = track.clone();
                            Rc::new(move |remeasure: bool| {
                                let index = {
                                    let mut c = controller.borrow_mut();
                                    if remeasure && c.set_native_stride(browser::viewport_size().0) {
                                        log::debug!("Services native stride updated: {:?}", c.mode());
                                    }
                                    c.on_track_scroll(track.scroll_left() as f64);
                                    c.active_index()
                                };
                                active.set(index);
                            })
                        };
                        let target: &EventTarget = track.as_ref();
                        {
                            let resync = resync.clone();
                            listeners.extend(Listener::new(target, "scroll", move |_| resync(false)));
                        }
                        for event in ["resize", "orientationchange"] {
                            let resync = resync.clone();
                            listeners.extend(Listener::on_window(event, move |_| resync(true)));
                        }
                    }
                }
                move || drop(listeners)
            },
            (),
        );
    }

    let jump = {
        let controller = controller.clone();
        let active = active.clone();
        let section_ref = section_ref.clone();
        let track_ref = track_ref.clone();
        Callback::from(move |target: isize| {
            let section_top_abs = section_position(&section_ref).map(|(_, abs)| abs).unwrap_or(0.0);
            let (scroll, index) = {
                let mut c = controller.borrow_mut();
                let scroll = c.jump_to_index(target, section_top_abs);
                (scroll, c.active_index())
            };
            let smooth = !browser::prefers_reduced_motion();
            match scroll {
                Some(ScrollTarget::Page { top }) => browser::scroll_window_to(top, smooth),
                Some(ScrollTarget::Track { left }) => {
                    if let Some(track) = track_ref.cast::<Element>() {
                        browser::scroll_element_to(&track, left, smooth);
                    }
                }
                None => {}
            }
            active.set(index);
        })
    };

    // Arrow keys, Home and End while the section is on screen.
    {
        let controller = controller.clone();
        let section_ref = section_ref.clone();
        let jump = jump.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Listener::on_window("keydown", move |e| {
                    let Some(event) = e.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let Some(el) = section_ref.cast::<Element>() else {
                        return;
                    };
                    let rect = el.get_bounding_client_rect();
                    let (_, viewport_height) = browser::viewport_size();
                    if !browser::in_view(rect.top(), rect.bottom(), viewport_height, viewport_height * 0.25) {
                        return;
                    }
                    let target = controller.borrow().index_for_key(&event.key());
                    if let Some(target) = target {
                        event.prevent_default();
                        jump.emit(target);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let pinned = mode.is_pinned();
    let native = !pinned;
    let section_style = match (*extent, pinned) {
        (Some(height), true) => format!("height: {}px;", height),
        _ => String::new(),
    };

    html! {
        <section id="services" ref={section_ref} class="services-section" style={section_style} aria-labelledby="services-title">
            <style>
                {r#"
                .services-section {
                    position: relative;
                    background: #FAF7FC;
                    color: #1A1A1D;
                    overflow: clip;
                }
                .services-sticky {
                    position: sticky;
                    top: 0;
                }
                .services-inner {
                    min-height: 100vh;
                    max-width: 1920px;
                    margin: 0 auto;
                    padding: 6rem 5rem 3rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    box-sizing: border-box;
                }
                .services-viewport {
                    position: relative;
                    border-radius: 22px;
                    border: 1px solid rgba(122, 28, 172, 0.08);
                    overflow: hidden;
                }
                .services-track {
                    display: flex;
                    gap: 2rem;
                    padding: 2rem;
                    will-change: transform;
                }
                .services-track.native {
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    gap: 20px;
                    padding: 20px;
                    will-change: auto;
                    scrollbar-width: none;
                }
                .service-card {
                    position: relative;
                    flex-shrink: 0;
                    width: 560px;
                    min-height: 420px;
                    padding: 2.25rem;
                    border-radius: 22px;
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(24px);
                    display: flex;
                    flex-direction: column;
                    scroll-snap-align: center;
                    box-sizing: border-box;
                    transition: box-shadow 0.35s ease;
                }
                .service-card.native { width: 85vw; }
                .service-card[data-active="true"] { box-shadow: 0 24px 60px rgba(122, 28, 172, 0.12); }
                .card-watermark {
                    position: absolute;
                    top: -0.5rem;
                    right: 0.25rem;
                    font-size: 150px;
                    line-height: 1;
                    color: rgba(0, 0, 0, 0.03);
                    pointer-events: none;
                    transition: color 0.4s ease;
                }
                .service-card[data-active="true"] .card-watermark { color: rgba(122, 28, 172, 0.07); }
                .service-card h3 { font-size: 2rem; margin: 0; }
                .card-description { color: rgba(26, 26, 29, 0.6); line-height: 1.6; }
                .card-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; }
                .card-chip {
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.72rem;
                    border: 1px solid rgba(0, 0, 0, 0.06);
                    background: rgba(0, 0, 0, 0.04);
                }
                .service-card[data-active="true"] .card-chip {
                    color: rgba(122, 28, 172, 0.75);
                    border-color: rgba(122, 28, 172, 0.12);
                    background: rgba(122, 28, 172, 0.06);
                }
                .card-bullets { margin: 1.5rem 0 0; padding-left: 1.1rem; color: rgba(26, 26, 29, 0.6); font-size: 0.82rem; }
                .card-footer { margin-top: auto; padding-top: 1.5rem; display: flex; gap: 1rem; align-items: center; }
                .card-cta {
                    border-radius: 999px;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.8rem;
                    font-weight: 600;
                    color: #fff;
                    background: rgba(122, 28, 172, 0.85);
                    text-decoration: none;
                }
                .card-link { font-size: 0.8rem; color: rgba(26, 26, 29, 0.45); text-decoration: none; }
                .services-progress {
                    margin-top: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .services-dots { display: flex; gap: 0.5rem; }
                .services-dot {
                    width: 10px;
                    height: 10px;
                    padding: 0;
                    border-radius: 999px;
                    background: rgba(0, 0, 0, 0.15);
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .services-dot.active { width: 32px; background: #7A1CAC; }
                .services-bar {
                    width: 12rem;
                    height: 2px;
                    background: rgba(0, 0, 0, 0.08);
                    border-radius: 2px;
                    overflow: hidden;
                }
                .services-bar-fill { height: 100%; width: 0; background: #7A1CAC; }
                .services-counter { font-size: 0.8rem; color: rgba(26, 26, 29, 0.5); font-variant-numeric: tabular-nums; }
                @media (max-width: 768px) {
                    .services-inner { padding: 4rem 1rem 2rem; }
                    .services-viewport { overflow: visible; border: none; }
                }
                "#}
            </style>
            <div class={classes!(pinned.then(|| "services-sticky"))}>
                <div class="services-inner">
                    <SectionHeading
                        id={"services-title".to_string()}
                        number={"01".to_string()}
                        title={"Services, staged, not listed."}
                        description={"A scroll-driven overview of what we build, how we build it, and where it moves the needle.".to_string()}
                    />
                    <div ref={viewport_ref} class="services-viewport">
                        <div ref={track_ref} class={classes!("services-track", native.then(|| "native"))}>
                            { for cards.iter().enumerate().map(|(i, svc)| html! {
                                <ServiceCardView
                                    key={svc.id}
                                    service={svc.clone()}
                                    index={i}
                                    active={i == *active}
                                    native={native}
                                />
                            }) }
                        </div>
                    </div>
                    <div class="services-progress">
                        <div class="services-dots">
                            { for (0..card_count).map(|i| html! {
                                <MagneticButton
                                    class={classes!("services-dot", (i == *active).then(|| "active"))}
                                    variant={Variant::Ghost}
                                    unstyled={true}
                                    ripple={false}
                                    glow={false}
                                    strength={0.2}
                                    aria_label={format!("Go to service {}", i + 1)}
                                    onclick={jump.reform(move |_: ()| i as isize)}
                                />
                            }) }
                        </div>
                        {
                            if pinned {
                                html! {
                                    <div class="services-bar">
                                        <div ref={bar_ref} class="services-bar-fill"></div>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <span class="services-counter">
                            {format!("{} / {}", pad2(*active + 1), pad2(card_count))}
                        </span>
                    </div>
                </div>
            </div>
        </section>
    }
}
