use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

/// Share of the button's displacement applied again to its content.
pub const INNER_FOLLOW: f64 = 0.3;

/// Pulls an element toward the pointer: `(pointer - center) * strength`.
pub fn magnetic_offset(
    pointer: (f64, f64),
    rect_origin: (f64, f64),
    rect_size: (f64, f64),
    strength: f64,
) -> (f64, f64) {
    let center_x = rect_origin.0 + rect_size.0 / 2.0;
    let center_y = rect_origin.1 + rect_size.1 / 2.0;
    ((pointer.0 - center_x) * strength, (pointer.1 - center_y) * strength)
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Variant {
    Primary,
    Secondary,
    Ghost,
    Outline,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Size {
    Sm,
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.4)]
    pub strength: f64,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or(Variant::Primary)]
    pub variant: Variant,
    #[prop_or(Size::Md)]
    pub size: Size,
    #[prop_or(true)]
    pub ripple: bool,
    #[prop_or(true)]
    pub glow: bool,
    /// Skip padding and variant styles, for dots and icons.
    #[prop_or(false)]
    pub unstyled: bool,
    #[prop_or_default]
    pub aria_label: Option<String>,
    #[prop_or_default]
    pub aria_current: Option<String>,
    #[prop_or("button".to_string())]
    pub button_type: String,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let offset = use_state_eq(|| (0.0f64, 0.0f64));
    let hovered = use_state_eq(|| false);
    let ripple_at = use_state(|| None::<(f64, f64)>);

    let onmousemove = {
        let node = node.clone();
        let offset = offset.clone();
        let disabled = props.disabled;
        let strength = props.strength;
        Callback::from(move |e: MouseEvent| {
            if disabled {
                return;
            }
            if let Some(el) = node.cast::<Element>() {
                let r = el.get_bounding_client_rect();
                offset.set(magnetic_offset(
                    (e.client_x() as f64, e.client_y() as f64),
                    (r.left(), r.top()),
                    (r.width(), r.height()),
                    strength,
                ));
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let offset = offset.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            offset.set((0.0, 0.0));
            hovered.set(false);
        })
    };

    let onclick = {
        let node = node.clone();
        let ripple_at = ripple_at.clone();
        let ripple = props.ripple;
        let disabled = props.disabled;
        let on_click = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if disabled {
                return;
            }
            if ripple {
                if let Some(el) = node.cast::<Element>() {
                    let r = el.get_bounding_client_rect();
                    ripple_at.set(Some((e.client_x() as f64 - r.left(), e.client_y() as f64 - r.top())));
                    let ripple_at = ripple_at.clone();
                    Timeout::new(600, move || ripple_at.set(None)).forget();
                }
            }
            if let Some(cb) = &on_click {
                cb.emit(());
            }
        })
    };

    let (x, y) = *offset;
    let variant = match props.variant {
        Variant::Primary => "mb-primary",
        Variant::Secondary => "mb-secondary",
        Variant::Ghost => "mb-ghost",
        Variant::Outline => "mb-outline",
    };
    let size = match props.size {
        Size::Sm => "mb-sm",
        Size::Md => "mb-md",
        Size::Lg => "mb-lg",
    };

    html! {
        <button
            ref={node}
            type={props.button_type.clone()}
            class={classes!(
                "magnetic-button",
                (!props.unstyled).then(|| classes!(variant, size)),
                (props.glow && *hovered && !props.disabled).then(|| "mb-glow"),
                props.disabled.then(|| "mb-disabled"),
                props.class.clone()
            )}
            style={format!("transform: translate({:.2}px, {:.2}px);", x, y)}
            disabled={props.disabled}
            aria-label={props.aria_label.clone()}
            aria-current={props.aria_current.clone()}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
            {onclick}
        >
            <style>
                {r#"
                .magnetic-button {
                    position: relative;
                    overflow: hidden;
                    border: none;
                    cursor: pointer;
                    border-radius: 999px;
                    font: inherit;
                    transition: transform 0.25s cubic-bezier(0.33, 1, 0.68, 1), box-shadow 0.3s ease;
                }
                .magnetic-button .mb-inner {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    position: relative;
                    z-index: 1;
                    transition: transform 0.25s cubic-bezier(0.33, 1, 0.68, 1);
                }
                .mb-primary { background: #7A1CAC; color: #fff; }
                .mb-secondary { background: #2E073F; color: #fff; }
                .mb-ghost { background: transparent; color: inherit; }
                .mb-outline { background: transparent; color: #7A1CAC; border: 1px solid #7A1CAC; }
                .mb-sm { padding: 0.5rem 1rem; font-size: 0.8rem; }
                .mb-md { padding: 0.75rem 1.5rem; font-size: 0.95rem; }
                .mb-lg { padding: 1rem 2.25rem; font-size: 1.1rem; }
                .mb-glow { box-shadow: 0 0 28px rgba(122, 28, 172, 0.45); }
                .mb-disabled { opacity: 0.5; cursor: not-allowed; }
                .mb-ripple {
                    position: absolute;
                    width: 12px;
                    height: 12px;
                    margin: -6px 0 0 -6px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.45);
                    pointer-events: none;
                    animation: mbRipple 0.6s ease-out forwards;
                }
                @keyframes mbRipple {
                    from { transform: scale(0); opacity: 1; }
                    to { transform: scale(24); opacity: 0; }
                }
                "#}
            </style>
            {
                if let Some((rx, ry)) = *ripple_at {
                    html! { <span class="mb-ripple" style={format!("left: {:.0}px; top: {:.0}px;", rx, ry)}></span> }
                } else {
                    html! {}
                }
            }
            <span
                class="mb-inner"
                style={format!("transform: translate({:.2}px, {:.2}px);", x * INNER_FOLLOW, y * INNER_FOLLOW)}
            >
                { for props.children.iter() }
            </span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_toward_pointer() {
        let (x, y) = magnetic_offset((150.0, 40.0), (100.0, 20.0), (40.0, 20.0), 0.5);
        assert_eq!((x, y), (15.0, 5.0));
    }

    #[test]
    fn centered_pointer_is_still() {
        assert_eq!(magnetic_offset((120.0, 30.0), (100.0, 20.0), (40.0, 20.0), 0.4), (0.0, 0.0));
    }
}
