use std::rc::Rc;

use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser::{in_view, viewport_size};

/// Flips to true the first time the node scrolls into view and stays there.
#[hook]
pub fn use_in_view_once(node: NodeRef, margin: f64) -> bool {
    let seen = use_state_eq(|| false);

    let check = {
        let seen = seen.clone();
        let node = node.clone();
        Rc::new(move || {
            if *seen {
                return;
            }
            if let Some(el) = node.cast::<Element>() {
                let rect = el.get_bounding_client_rect();
                let (_, viewport_height) = viewport_size();
                if in_view(rect.top(), rect.bottom(), viewport_height, margin) {
                    seen.set(true);
                }
            }
        })
    };

    // Nodes already on screen at mount never see a scroll event.
    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            node,
        );
    }

    use_event_with_window("scroll", move |_: Event| check());

    *seen
}

/// Scrolls the window to the top once when a page mounts.
#[hook]
pub fn use_scroll_top_on_mount() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
