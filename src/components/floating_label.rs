use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPose {
    /// Sits inside the field like a placeholder.
    Resting,
    /// Lifted above the value.
    Raised,
    /// Lifted and coloured while the field has focus.
    Focused,
}

impl LabelPose {
    pub fn for_field(focused: bool, value: &str) -> Self {
        if focused {
            LabelPose::Focused
        } else if !value.is_empty() {
            LabelPose::Raised
        } else {
            LabelPose::Resting
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            LabelPose::Resting => "transform: translateY(0) scale(1);",
            LabelPose::Raised => "transform: translateY(-24px) scale(0.85);",
            LabelPose::Focused => "transform: translateY(-24px) scale(0.85); color: var(--primary);",
        }
    }

    pub fn underline_style(self) -> &'static str {
        match self {
            LabelPose::Focused => "transform: scaleX(1);",
            _ => "transform: scaleX(0);",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingLabelInputProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: String,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub textarea: bool,
}

#[function_component(FloatingLabelInput)]
pub fn floating_label_input(props: &FloatingLabelInputProps) -> Html {
    let focused = use_state_eq(|| false);
    let pose = LabelPose::for_field(*focused, &props.value);

    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    let field = if props.textarea {
        let oninput = props.oninput.reform(|e: InputEvent| {
            e.target_unchecked_into::<HtmlTextAreaElement>().value()
        });
        html! {
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                rows="4"
                value={props.value.clone()}
                required={props.required}
                oninput={oninput}
                onfocus={onfocus}
                onblur={onblur}
            />
        }
    } else {
        let oninput = props.oninput.reform(|e: InputEvent| {
            e.target_unchecked_into::<HtmlInputElement>().value()
        });
        html! {
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                required={props.required}
                oninput={oninput}
                onfocus={onfocus}
                onblur={onblur}
            />
        }
    };

    html! {
        <div class="floating-field">
            <label for={props.name.clone()} style={pose.style()}>
                {props.label.to_string()}
            </label>
            {field}
            <div class="floating-underline">
                <div class="floating-underline-bar" style={pose.underline_style()}></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wins_over_content() {
        assert_eq!(LabelPose::for_field(true, ""), LabelPose::Focused);
        assert_eq!(LabelPose::for_field(true, "Ada"), LabelPose::Focused);
    }

    #[test]
    fn content_keeps_the_label_raised_after_blur() {
        assert_eq!(LabelPose::for_field(false, "Ada"), LabelPose::Raised);
        assert_eq!(LabelPose::for_field(false, ""), LabelPose::Resting);
    }

    #[test]
    fn underline_only_while_focused() {
        assert_eq!(LabelPose::Focused.underline_style(), "transform: scaleX(1);");
        assert_eq!(LabelPose::Raised.underline_style(), "transform: scaleX(0);");
        assert!(LabelPose::Focused.style().contains("var(--primary)"));
        assert!(!LabelPose::Raised.style().contains("color"));
    }
}
