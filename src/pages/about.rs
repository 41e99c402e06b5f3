use yew::prelude::*;

use crate::components::sparkles::Sparkles;
use crate::components::spotlight::SpotlightText;
use crate::components::tilt_card::TiltCard;
use crate::content::{self, TeamMember};
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbMotion {
    Spin,
    Pulse,
    Bob,
}

impl OrbMotion {
    fn class(self) -> &'static str {
        match self {
            OrbMotion::Spin => "orb-spin",
            OrbMotion::Pulse => "orb-pulse",
            OrbMotion::Bob => "orb-bob",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
    pub motion: OrbMotion,
}

pub const VALUES: [CompanyValue; 3] = [
    CompanyValue {
        title: "Innovation",
        description: "Pushing the boundaries of what's possible in neurotechnology.",
        motion: OrbMotion::Spin,
    },
    CompanyValue {
        title: "Ethics",
        description: "Maintaining the highest standards of ethical research and development.",
        motion: OrbMotion::Pulse,
    },
    CompanyValue {
        title: "Impact",
        description: "Creating meaningful change in people's lives through technology.",
        motion: OrbMotion::Bob,
    },
];

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: &'static TeamMember,
    index: usize,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let member = props.member;
    html! {
        <div class="member-slot" style={format!("animation-delay: {:.1}s;", props.index as f64 * 0.2)}>
            <TiltCard>
                <div class="member-card">
                    <div class="member-photo">
                        <img src={member.image.clone()} alt={member.name.clone()} loading="lazy" />
                    </div>
                    <div class="member-body">
                        <h3>{&member.name}</h3>
                        <p class="member-role">{&member.role}</p>
                        <p class="member-bio">{&member.bio}</p>
                    </div>
                    <div class="member-outline"></div>
                </div>
            </TiltCard>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let team = match content::team() {
        Ok(team) => html! {
            <div class="team-grid">
                { for team.iter().enumerate().map(|(index, member)| html! {
                    <MemberCard key={member.name.clone()} member={member} index={index} />
                }) }
            </div>
        },
        Err(e) => {
            log::error!("{}", e);
            html! { <p class="content-error">{"Our team roster is unavailable right now."}</p> }
        }
    };

    html! {
        <div class="about-page">
            <style>
                {r#"
                    .about-page { padding: 6rem 1rem 4rem; max-width: 80rem; margin: 0 auto; }
                    .spotlight-text { position: relative; overflow: hidden; }
                    .spotlight-content { position: relative; z-index: 10; }
                    .mission { text-align: center; margin-bottom: 5rem; animation: rise-in 0.8s ease-out both; }
                    .mission h1 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
                    .mission-title { position: relative; }
                    .mission-underline {
                        position: absolute;
                        left: 50%;
                        bottom: -0.5rem;
                        height: 4px;
                        width: 60%;
                        border-radius: 9999px;
                        background: var(--primary);
                        transform: translateX(-50%);
                        animation: grow-width 0.8s ease-out 0.2s both;
                    }
                    .mission p { font-size: 1.25rem; color: var(--muted-foreground); max-width: 48rem; margin: 0 auto; }
                    .team { margin-bottom: 5rem; }
                    .team h2, .values h2 { font-size: 1.875rem; font-weight: 700; text-align: center; margin-bottom: 3rem; }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                    }
                    .member-slot { height: 100%; animation: rise-in 0.5s ease-out both; }
                    .tilt-card { position: relative; height: 100%; transition: transform 0.15s ease-out; }
                    .tilt-card-inner { height: 100%; transform: translateZ(0); }
                    .member-card {
                        position: relative;
                        height: 100%;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(var(--border-rgb), 0.5);
                        background: var(--card);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                    }
                    .member-photo { height: 16rem; overflow: hidden; }
                    .member-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transform: translateZ(20px);
                        transition: transform 0.7s;
                    }
                    .member-photo img:hover { transform: translateZ(20px) scale(1.05); }
                    .member-body { padding: 1.5rem; }
                    .member-body h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.25rem; }
                    .member-role { color: var(--primary); margin-bottom: 0.75rem; }
                    .member-bio { color: var(--muted-foreground); }
                    .member-outline {
                        position: absolute;
                        inset: 0;
                        border: 1px solid rgba(var(--primary-rgb), 0.2);
                        border-radius: 0.5rem;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s;
                    }
                    .member-card:hover .member-outline { opacity: 1; }
                    .values {
                        position: relative;
                        overflow: hidden;
                        padding: 3rem;
                        border-radius: 1rem;
                        background: rgba(var(--secondary-rgb), 0.5);
                        animation: rise-in 0.8s ease-out both;
                    }
                    .values h2, .values-grid { position: relative; z-index: 10; }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 2rem;
                    }
                    .value { text-align: center; transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1); }
                    .value:hover { transform: translateY(-5px); }
                    .value-badge {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border-radius: 9999px;
                        background: rgba(var(--background-rgb), 0.5);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                    }
                    .value-orb {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: linear-gradient(to bottom right, var(--primary), rgba(var(--primary-rgb), 0.5));
                    }
                    .orb-spin { animation: spin 8s linear infinite; }
                    .orb-pulse { animation: pulse-orb 2s ease-in-out infinite alternate; }
                    .orb-bob { animation: bob 1.5s ease-in-out infinite; }
                    .value h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
                    .value p { color: var(--muted-foreground); }
                "#}
            </style>

            <SpotlightText>
                <section class="mission">
                    <h1>
                        <span class="mission-title">
                            {Route::About.heading()}
                            <span class="mission-underline"></span>
                        </span>
                    </h1>
                    <p>
                        {"At NeuroSync, we're dedicated to bridging the gap between human cognition and digital technology. Our mission is to develop innovative brain-computer interfaces that enhance human capabilities and improve lives."}
                    </p>
                </section>
            </SpotlightText>

            <section class="team">
                <h2>{"Meet Our Team"}</h2>
                {team}
            </section>

            <section class="values">
                <Sparkles />
                <h2>{"Our Values"}</h2>
                <div class="values-grid">
                    { for VALUES.iter().map(|value| html! {
                        <div class="value">
                            <div class="value-badge">
                                <div class={classes!("value-orb", value.motion.class())}></div>
                            </div>
                            <h3>{value.title}</h3>
                            <p>{value.description}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_value_has_its_own_motion() {
        let titles: Vec<_> = VALUES.iter().map(|v| v.title).collect();
        assert_eq!(titles, ["Innovation", "Ethics", "Impact"]);
        assert_ne!(VALUES[0].motion.class(), VALUES[1].motion.class());
        assert_ne!(VALUES[1].motion.class(), VALUES[2].motion.class());
    }
}
