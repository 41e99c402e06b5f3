use yew::prelude::*;

use crate::ambient::{pointer_in, Bounds, PointerPosition};

/// Rotation at the card edges, in degrees.
pub const MAX_TILT_DEG: f64 = 7.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Pointer at the centre gives no rotation; the edges give
    /// `MAX_TILT_DEG` with the sign set by the side. Positions outside the
    /// box are clamped to the nearest edge.
    pub fn from_pointer(pointer: PointerPosition, bounds: Bounds) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::default();
        }
        let x = (pointer.x / bounds.width - 0.5).clamp(-0.5, 0.5);
        let y = (pointer.y / bounds.height - 0.5).clamp(-0.5, 0.5);
        Self {
            rotate_x: -y * 2.0 * MAX_TILT_DEG,
            rotate_y: x * 2.0 * MAX_TILT_DEG,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_state_eq(Tilt::default);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((bounds, pointer)) = pointer_in(&node, &e) {
                tilt.set(Tilt::from_pointer(pointer, bounds));
            }
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::default()))
    };

    html! {
        <div
            ref={node}
            class="tilt-card"
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
            style={format!("transform: {}; transform-style: preserve-3d;", tilt.transform())}
        >
            <div class="tilt-card-inner">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds { left: 0.0, top: 0.0, width: 200.0, height: 100.0 };

    fn at(x: f64, y: f64) -> Tilt {
        Tilt::from_pointer(PointerPosition { x, y }, CARD)
    }

    #[test]
    fn centre_is_flat() {
        let tilt = at(100.0, 50.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn left_and_right_edges_tilt_in_opposite_directions() {
        assert_eq!(at(0.0, 50.0).rotate_y, -MAX_TILT_DEG);
        assert_eq!(at(200.0, 50.0).rotate_y, MAX_TILT_DEG);
    }

    #[test]
    fn top_and_bottom_edges_tilt_in_opposite_directions() {
        assert_eq!(at(100.0, 0.0).rotate_x, MAX_TILT_DEG);
        assert_eq!(at(100.0, 100.0).rotate_x, -MAX_TILT_DEG);
    }

    #[test]
    fn outside_pointer_is_clamped() {
        let tilt = at(-500.0, 900.0);
        assert_eq!(tilt.rotate_y, -MAX_TILT_DEG);
        assert_eq!(tilt.rotate_x, -MAX_TILT_DEG);
    }

    #[test]
    fn empty_box_is_flat() {
        let tilt = Tilt::from_pointer(PointerPosition { x: 10.0, y: 10.0 }, Bounds::default());
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn transform_string() {
        assert_eq!(
            at(200.0, 100.0).transform(),
            "perspective(1000px) rotateX(-7.50deg) rotateY(7.50deg)"
        );
    }
}
