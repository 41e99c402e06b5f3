use yew::prelude::*;

const FIRST_DELAY_S: f64 = 0.01;
const STAGGER_S: f64 = 0.03;

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub text: String,
    pub delay_s: f64,
}

/// Splits `text` into per-character spans with staggered entrance delays.
/// Spaces become non-breaking so the inline-block spans keep their width.
pub fn glyphs(text: &str) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(index, c)| Glyph {
            text: if c == ' ' { '\u{00A0}'.to_string() } else { c.to_string() },
            delay_s: FIRST_DELAY_S + STAGGER_S * index as f64,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: AttrValue,
}

#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    html! {
        <h1 class="animated-text" aria-label={props.text.clone()}>
            { for glyphs(&props.text).into_iter().map(|glyph| html! {
                <span
                    class="animated-letter"
                    aria-hidden="true"
                    style={format!("animation-delay: {:.2}s;", glyph.delay_s)}
                >
                    {glyph.text}
                </span>
            }) }
        </h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_glyph_per_char_with_stagger() {
        let glyphs = glyphs("The Future of");
        assert_eq!(glyphs.len(), 13);
        assert_eq!(glyphs[0].text, "T");
        assert!((glyphs[0].delay_s - 0.01).abs() < 1e-9);
        assert!((glyphs[12].delay_s - 0.37).abs() < 1e-9);
    }

    #[test]
    fn spaces_are_non_breaking() {
        let glyphs = glyphs("a b");
        assert_eq!(glyphs[1].text, "\u{00A0}");
        let rebuilt: String = glyphs.iter().map(|g| g.text.replace('\u{00A0}', " ")).collect();
        assert_eq!(rebuilt, "a b");
    }
}
