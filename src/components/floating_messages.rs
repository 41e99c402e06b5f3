use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

use crate::ambient::clock_seed;

pub const MESSAGES: [&str; 5] = [
    "Great technology!",
    "How can we collaborate?",
    "Impressive work!",
    "Looking forward to the demo",
    "Can you help with integration?",
];

/// One bubble's drift from low in the panel towards the top, in px and s.
#[derive(Debug, Clone, PartialEq)]
pub struct MessagePath {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub repeat_delay_s: f64,
}

impl MessagePath {
    pub fn for_index<R: Rng>(index: usize, rng: &mut R) -> Self {
        let column = (index % 3) as f64;
        let start_x = column * 30.0 + rng.gen::<f64>() * 40.0;
        Self {
            start_x,
            start_y: (300.0 + index as f64 * 60.0).min(500.0),
            end_x: start_x + (rng.gen::<f64>() * 60.0 - 30.0),
            end_y: 50.0 + column * 40.0,
            duration_s: 8.0 + rng.gen::<f64>() * 4.0,
            delay_s: index as f64 * 2.0,
            repeat_delay_s: 3.0 + rng.gen::<f64>() * 2.0,
        }
    }

    /// One run plus the pause before the next.
    pub fn cycle_s(&self) -> f64 {
        self.duration_s + self.repeat_delay_s
    }

    /// Point in the cycle (percent) where the drift ends and the pause begins.
    pub fn drift_end_pct(&self) -> f64 {
        self.duration_s / self.cycle_s() * 100.0
    }

    /// Keyframes for this bubble alone. The drift occupies exactly
    /// `duration_s` of the cycle and the bubble stays hidden for the rest.
    pub fn keyframes(&self, name: &str) -> String {
        let end = self.drift_end_pct();
        let start = format!("translate({:.1}px, {:.1}px)", self.start_x, self.start_y);
        let finish = format!("translate({:.1}px, {:.1}px)", self.end_x, self.end_y);
        format!(
            "@keyframes {name} {{ \
             0% {{ opacity: 0; transform: {start} scale(0.8); }} \
             {fade_in:.2}% {{ opacity: 1; }} \
             {hold:.2}% {{ opacity: 1; }} \
             {end:.2}% {{ opacity: 0; transform: {finish} scale(1); }} \
             100% {{ opacity: 0; transform: {finish} scale(1); }} }}",
            name = name,
            start = start,
            finish = finish,
            fade_in = end * 0.27,
            hold = end * 0.73,
            end = end,
        )
    }

    pub fn style(&self, name: &str) -> String {
        format!(
            "animation: {} {:.2}s ease-in-out {:.2}s infinite;",
            name,
            self.cycle_s(),
            self.delay_s,
        )
    }
}

pub fn message_paths<R: Rng>(rng: &mut R) -> Vec<MessagePath> {
    (0..MESSAGES.len()).map(|i| MessagePath::for_index(i, rng)).collect()
}

#[function_component(FloatingMessages)]
pub fn floating_messages() -> Html {
    let paths = use_state(|| message_paths(&mut StdRng::seed_from_u64(clock_seed())));

    let keyframes: String = paths
        .iter()
        .enumerate()
        .map(|(i, path)| path.keyframes(&format!("float-message-{}", i)))
        .collect::<Vec<_>>()
        .join("\n");

    html! {
        <div class="floating-messages" aria-hidden="true">
            <style>{keyframes}</style>
            { for MESSAGES.iter().zip(paths.iter()).enumerate().map(|(i, (text, path))| html! {
                <div class="floating-message" style={path.style(&format!("float-message-{}", i))}>
                    {*text}
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let paths = message_paths(&mut rng);
        assert_eq!(paths.len(), MESSAGES.len());
        for (i, path) in paths.iter().enumerate() {
            let column = (i % 3) as f64;
            assert!(path.start_x >= column * 30.0 && path.start_x < column * 30.0 + 40.0);
            assert!((path.end_x - path.start_x).abs() <= 30.0);
            assert_eq!(path.end_y, 50.0 + column * 40.0);
            assert!(path.duration_s >= 8.0 && path.duration_s < 12.0);
            assert!(path.repeat_delay_s >= 3.0 && path.repeat_delay_s < 5.0);
            assert_eq!(path.delay_s, i as f64 * 2.0);
        }
    }

    #[test]
    fn start_height_is_capped() {
        let mut rng = StdRng::seed_from_u64(1);
        let starts: Vec<f64> = message_paths(&mut rng).iter().map(|p| p.start_y).collect();
        assert_eq!(starts, [300.0, 360.0, 420.0, 480.0, 500.0]);
    }

    #[test]
    fn same_seed_same_paths() {
        let a = message_paths(&mut StdRng::seed_from_u64(42));
        let b = message_paths(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn drift_lasts_exactly_the_run_duration() {
        let path = MessagePath {
            start_x: 10.0,
            start_y: 300.0,
            end_x: 20.0,
            end_y: 50.0,
            duration_s: 8.0,
            delay_s: 0.0,
            repeat_delay_s: 5.0,
        };
        assert_eq!(path.cycle_s(), 13.0);
        let drift_s = path.cycle_s() * path.drift_end_pct() / 100.0;
        assert!((drift_s - 8.0).abs() < 1e-9);

        let frames = path.keyframes("float-message-0");
        assert!(frames.starts_with("@keyframes float-message-0 {"));
        assert!(frames.contains("61.54% { opacity: 0; transform: translate(20.0px, 50.0px) scale(1); }"));
        assert!(frames.contains("0% { opacity: 0; transform: translate(10.0px, 300.0px) scale(0.8); }"));
        assert_eq!(
            path.style("float-message-0"),
            "animation: float-message-0 13.00s ease-in-out 0.00s infinite;"
        );
    }

    #[test]
    fn every_seeded_drift_ends_inside_the_cycle() {
        for path in message_paths(&mut StdRng::seed_from_u64(9)) {
            let end = path.drift_end_pct();
            assert!(end > 60.0 && end < 80.0, "drift ends at {}%", end);
        }
    }
}
