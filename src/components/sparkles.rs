use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

use crate::ambient::clock_seed;

#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub top_pct: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Sparkle {
    pub fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; animation: sparkle {:.2}s ease-in-out {:.2}s infinite;",
            self.top_pct, self.left_pct, self.duration_s, self.delay_s
        )
    }
}

pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Vec<Sparkle> {
    (0..count)
        .map(|_| Sparkle {
            top_pct: rng.gen::<f64>() * 100.0,
            left_pct: rng.gen::<f64>() * 100.0,
            duration_s: 2.0 + rng.gen::<f64>() * 2.0,
            delay_s: rng.gen::<f64>() * 5.0,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SparklesProps {
    #[prop_or(20)]
    pub count: usize,
}

#[function_component(Sparkles)]
pub fn sparkles(props: &SparklesProps) -> Html {
    let count = props.count;
    let points = use_state(move || scatter(count, &mut StdRng::seed_from_u64(clock_seed())));

    html! {
        <div class="sparkles" aria-hidden="true">
            { for points.iter().map(|point| html! {
                <span class="sparkle" style={point.style()}></span>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_is_bounded() {
        let points = scatter(200, &mut StdRng::seed_from_u64(3));
        assert_eq!(points.len(), 200);
        for p in &points {
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((2.0..4.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
        }
    }

    #[test]
    fn style_positions_by_percentage() {
        let sparkle = Sparkle { top_pct: 12.5, left_pct: 80.0, duration_s: 2.5, delay_s: 1.0 };
        assert_eq!(
            sparkle.style(),
            "top: 12.50%; left: 80.00%; animation: sparkle 2.50s ease-in-out 1.00s infinite;"
        );
    }
}
