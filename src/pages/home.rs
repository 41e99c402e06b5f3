use yew::prelude::*;

use crate::ambient::{use_viewport_width, use_window_pointer, use_window_scroll};
use crate::components::animated_text::AnimatedText;
use crate::components::spotlight::{hero_radius, SpotlightOverlay};
use crate::content::{self, Feature};
use crate::Route;

pub const HERO_LEAD: &str = "The Future of";
pub const HERO_PHRASE: &str = "Brain-Computer Interface";

/// Hero opacity and scale for a page scroll progress. Both ease linearly
/// over the first 30% of the page and hold afterwards.
pub fn hero_fade(progress: f64) -> (f64, f64) {
    let t = (progress / 0.3).clamp(0.0, 1.0);
    (1.0 - t, 1.0 - 0.1 * t)
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: &'static Feature,
    index: usize,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = props.feature;
    html! {
        <div
            class="feature-card"
            style={format!("animation-delay: {:.1}s;", props.index as f64 * 0.2)}
        >
            <div class="feature-card-glow"></div>
            <div class="feature-icon">{&feature.icon}</div>
            <h3>{&feature.title}</h3>
            <p>{&feature.description}</p>
            <div class="feature-card-bar"></div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let hero_ref = use_node_ref();
    let pointer = use_window_pointer(hero_ref.clone());
    let scroll = use_window_scroll();
    let viewport_width = use_viewport_width();

    let (opacity, scale) = hero_fade(scroll.progress);

    let features = match content::features() {
        Ok(features) => html! {
            <div class="features-grid">
                { for features.iter().enumerate().map(|(index, feature)| html! {
                    <FeatureCard feature={feature} index={index} />
                }) }
            </div>
        },
        Err(e) => {
            log::error!("{}", e);
            html! { <p class="content-error">{"Our technology overview is unavailable right now."}</p> }
        }
    };

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page { padding-top: 4rem; }
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .moving-gradient {
                        position: absolute;
                        inset: -100%;
                        z-index: -1;
                        opacity: 0.5;
                        border-radius: 50%;
                        filter: blur(64px);
                        background: linear-gradient(90deg, rgba(var(--primary-rgb), 0.2), rgba(var(--secondary-rgb), 0.2), rgba(var(--accent-rgb), 0.2));
                        animation: spin 20s linear infinite;
                    }
                    .hero .spotlight-overlay { opacity: 1; }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 80rem;
                        padding: 0 1rem;
                    }
                    .hero-phrase {
                        color: var(--primary);
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        animation: pulse-scale 2s ease-in-out infinite alternate;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: var(--muted-foreground);
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                        opacity: 0;
                        animation: rise-in 0.8s ease-out 0.8s forwards;
                    }
                    .discover-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.375rem;
                        background: var(--primary);
                        color: #111827;
                        font-weight: 500;
                        position: relative;
                        overflow: hidden;
                        transition: transform 0.2s ease;
                    }
                    .discover-link:hover { transform: scale(1.05); }
                    .discover-link:active { transform: scale(0.98); }
                    .discover-link svg { width: 1.25rem; height: 1.25rem; transition: transform 0.2s; }
                    .discover-link:hover svg { transform: translateX(4px); }
                    .features {
                        padding: 5rem 1rem;
                        background: rgba(var(--secondary-rgb), 0.5);
                    }
                    .features-header { text-align: center; margin-bottom: 4rem; }
                    .features-header h2 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
                    .features-header p { color: var(--muted-foreground); max-width: 42rem; margin: 0 auto; }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .feature-card {
                        position: relative;
                        overflow: hidden;
                        cursor: pointer;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: var(--card);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                        opacity: 0;
                        animation: rise-in 0.5s ease-out forwards;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .feature-card:hover {
                        transform: translateY(-5px);
                        box-shadow: 0 20px 80px -20px var(--primary);
                    }
                    .feature-card-glow {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(90deg, rgba(var(--primary-rgb), 0.1), transparent);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .feature-card:hover .feature-card-glow { opacity: 1; }
                    .feature-icon { font-size: 1.875rem; color: var(--primary); margin-bottom: 1rem; position: relative; }
                    .feature-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; position: relative; }
                    .feature-card p { color: var(--muted-foreground); position: relative; }
                    .feature-card-bar {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 4px;
                        background: linear-gradient(90deg, var(--primary), transparent);
                        transform: scaleX(0);
                        transform-origin: left;
                        transition: transform 0.3s ease-out;
                    }
                    .feature-card:hover .feature-card-bar { transform: scaleX(1); }
                "#}
            </style>

            <section ref={hero_ref} class="hero">
                <div class="moving-gradient"></div>
                <SpotlightOverlay
                    position={pointer}
                    radius={hero_radius(viewport_width)}
                    color={"rgba(var(--primary-rgb), 0.1)".to_string()}
                    fade={100u8}
                />

                <div
                    class="hero-content"
                    style={format!("opacity: {:.3}; transform: scale({:.3});", opacity, scale)}
                >
                    <AnimatedText text={Route::Home.heading()} />
                    <div class="hero-phrase">{HERO_PHRASE}</div>
                    <p class="hero-subtitle">
                        {"Pioneering revolutionary technology that seamlessly connects human cognition with digital interfaces, transforming the way we interact with technology."}
                    </p>
                    <a href="#features" class="discover-link">
                        <span>{"Discover More"}</span>
                        <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M14 5l7 7m0 0l-7 7m7-7H3" />
                        </svg>
                    </a>
                </div>
            </section>

            <section id="features" class="features">
                <div class="features-header">
                    <h2>{"Our Technology"}</h2>
                    <p>{"Experience the next generation of human-computer interaction through our innovative solutions."}</p>
                </div>
                {features}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_heading_is_the_animated_lead() {
        assert_eq!(Route::Home.heading(), HERO_LEAD);
        assert_eq!(HERO_PHRASE, "Brain-Computer Interface");
    }

    #[test]
    fn hero_is_untouched_at_the_top() {
        assert_eq!(hero_fade(0.0), (1.0, 1.0));
    }

    #[test]
    fn hero_fades_out_by_thirty_percent() {
        let (opacity, scale) = hero_fade(0.15);
        assert!((opacity - 0.5).abs() < 1e-9);
        assert!((scale - 0.95).abs() < 1e-9);

        let (opacity, scale) = hero_fade(0.3);
        assert!(opacity.abs() < 1e-9);
        assert!((scale - 0.9).abs() < 1e-9);
    }

    #[test]
    fn hero_holds_after_the_fade() {
        let (opacity, scale) = hero_fade(0.9);
        assert_eq!(opacity, 0.0);
        assert!((scale - 0.9).abs() < 1e-9);
    }
}
