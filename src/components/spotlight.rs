use yew::prelude::*;

use crate::ambient::{pointer_in, PointerPosition};

/// Radial highlight centred on the pointer. `fade` is where the gradient
/// reaches transparent, as a percentage of the radius.
pub fn spotlight_gradient(center: PointerPosition, radius: f64, color: &str, fade: u8) -> String {
    format!(
        "radial-gradient({radius:.0}px circle at {:.0}px {:.0}px, {color}, transparent {fade}%)",
        center.x, center.y
    )
}

/// Hero spotlight radius: half the viewport, capped at 400px.
pub fn hero_radius(viewport_width: f64) -> f64 {
    (viewport_width.max(0.0) / 2.0).min(400.0)
}

#[derive(Properties, PartialEq)]
pub struct SpotlightOverlayProps {
    pub position: PointerPosition,
    #[prop_or(600.0)]
    pub radius: f64,
    #[prop_or_else(|| "rgba(var(--primary-rgb), 0.15)".to_string())]
    pub color: String,
    #[prop_or(40)]
    pub fade: u8,
    #[prop_or_default]
    pub class: Classes,
}

/// Gradient layer for containers whose pointer is tracked elsewhere.
#[function_component(SpotlightOverlay)]
pub fn spotlight_overlay(props: &SpotlightOverlayProps) -> Html {
    let background = spotlight_gradient(props.position, props.radius, &props.color, props.fade);
    html! {
        <div
            class={classes!("spotlight-overlay", props.class.clone())}
            style={format!("background: {};", background)}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct SpotlightTextProps {
    pub children: Children,
}

/// Wraps content in a box that tracks its own pointer.
#[function_component(SpotlightText)]
pub fn spotlight_text(props: &SpotlightTextProps) -> Html {
    let node = use_node_ref();
    let position = use_state_eq(PointerPosition::default);

    let onmousemove = {
        let node = node.clone();
        let position = position.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((_, pointer)) = pointer_in(&node, &e) {
                position.set(pointer);
            }
        })
    };

    html! {
        <div ref={node} class="spotlight-text" onmousemove={onmousemove}>
            <SpotlightOverlay
                position={*position}
                color={"rgba(255, 255, 255, 0.1)".to_string()}
                class={classes!("spotlight-always")}
            />
            <div class="spotlight-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_follows_the_pointer() {
        let css = spotlight_gradient(PointerPosition { x: 120.4, y: 33.6 }, 600.0, "red", 40);
        assert_eq!(css, "radial-gradient(600px circle at 120px 34px, red, transparent 40%)");
    }

    #[test]
    fn hero_radius_is_capped() {
        assert_eq!(hero_radius(1920.0), 400.0);
        assert_eq!(hero_radius(600.0), 300.0);
        assert_eq!(hero_radius(-10.0), 0.0);
    }
}
