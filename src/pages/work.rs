use yew::prelude::*;

use crate::components::filter_button::FilterButton;
use crate::content::{self, filter_projects, FilterCategory, Project};
use crate::Route;

pub const EMPTY_MESSAGE: &str = "No projects found in this category.";

/// What the gallery shows for one filter selection.
#[derive(Debug, PartialEq)]
pub enum Gallery<'a> {
    Empty,
    Cards(Vec<&'a Project>),
}

impl<'a> Gallery<'a> {
    pub fn build(projects: &'a [Project], filter: FilterCategory) -> Self {
        let visible = filter_projects(projects, filter);
        if visible.is_empty() {
            Gallery::Empty
        } else {
            Gallery::Cards(visible)
        }
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <div
            class={classes!("project-card", project.featured.then(|| "featured"))}
            style={format!("animation-delay: {:.1}s;", props.index as f64 * 0.1)}
        >
            <div class="project-image">
                <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                <div class="project-image-shade"></div>
                <div class="project-badges">
                    <span class="badge badge-category">{project.category.label()}</span>
                    <span class="badge badge-status">{project.status.label()}</span>
                </div>
            </div>

            <div class="project-body">
                <h3>{&project.title}<span class="project-title-underline"></span></h3>
                <p>{&project.description}</p>
                <button class="learn-more">
                    <span>{"Learn More"}</span>
                    <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M14 5l7 7m0 0l-7 7m7-7H3" />
                    </svg>
                </button>
            </div>

            <div class="project-spotlight"></div>
        </div>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    let filter = use_state_eq(FilterCategory::default);

    let buttons = FilterCategory::ORDER.iter().map(|category| {
        let category = *category;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                log::debug!("Project filter set to {}", category.label());
                filter.set(category);
            })
        };
        html! {
            <FilterButton
                label={category.label()}
                active={*filter == category}
                onclick={onclick}
            />
        }
    });

    let gallery = match content::projects() {
        Ok(projects) => match Gallery::build(projects, *filter) {
            Gallery::Empty => html! {
                <div class="projects-empty">
                    <p>{EMPTY_MESSAGE}</p>
                </div>
            },
            Gallery::Cards(cards) => html! {
                <div class="projects-grid">
                    { for cards.into_iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.title.clone()} project={project} index={index} />
                    }) }
                </div>
            },
        },
        Err(e) => {
            log::error!("{}", e);
            html! { <p class="content-error">{"Our project list is unavailable right now."}</p> }
        }
    };

    html! {
        <div class="work-page">
            <style>
                {r#"
                    .work-page { padding: 6rem 1rem 4rem; max-width: 80rem; margin: 0 auto; }
                    .filter-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-bottom: 2.5rem;
                    }
                    .filter-button {
                        position: relative;
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        color: var(--foreground);
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.15s ease;
                    }
                    .filter-button:hover { transform: scale(1.05); }
                    .filter-button:active { transform: scale(0.95); }
                    .filter-button.active { color: #fff; }
                    .filter-button-bg {
                        position: absolute;
                        inset: 0;
                        border-radius: 9999px;
                        background: var(--primary);
                        animation: pop-in 0.25s ease-out;
                    }
                    .filter-button-label { position: relative; }
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                        gap: 2rem;
                    }
                    .project-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        background: var(--card);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                        animation: card-in 0.5s ease-out both;
                    }
                    @media (min-width: 768px) {
                        .project-card.featured { grid-column: span 2; }
                    }
                    .project-image { position: relative; height: 14rem; overflow: hidden; }
                    .project-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .project-image:hover img { transform: scale(1.05); }
                    .project-image-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .project-badges {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        display: flex;
                        gap: 0.5rem;
                        padding: 1rem;
                        transform: translateY(100%);
                        transition: transform 0.3s;
                    }
                    .project-image:hover .project-image-shade { opacity: 1; }
                    .project-image:hover .project-badges { transform: translateY(0); }
                    .badge { padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.875rem; }
                    .badge-category { background: var(--primary); color: var(--primary-foreground); }
                    .badge-status { background: var(--secondary); color: var(--foreground); }
                    .project-body { display: flex; flex-direction: column; flex-grow: 1; padding: 1.5rem; }
                    .project-body h3 { position: relative; font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
                    .project-title-underline {
                        position: absolute;
                        left: 0;
                        bottom: -4px;
                        width: 0;
                        height: 2px;
                        background: var(--primary);
                        transition: width 0.3s;
                    }
                    .project-card:hover .project-title-underline { width: 100%; }
                    .project-body p { flex-grow: 1; color: var(--muted-foreground); }
                    .learn-more {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        align-self: flex-start;
                        margin-top: 1rem;
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: rgba(var(--primary-rgb), 0.1);
                        color: var(--primary);
                        cursor: pointer;
                        transition: background 0.2s, color 0.2s, transform 0.15s;
                    }
                    .learn-more:hover { background: var(--primary); color: var(--primary-foreground); transform: scale(1.05); }
                    .learn-more svg { width: 1rem; height: 1rem; transition: transform 0.2s; }
                    .learn-more:hover svg { transform: translateX(4px); }
                    .project-spotlight {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: linear-gradient(to top right, rgba(var(--primary-rgb), 0.1), transparent);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .project-card:hover .project-spotlight { opacity: 1; }
                    .projects-empty {
                        text-align: center;
                        padding: 5rem 0;
                        font-size: 1.25rem;
                        color: var(--muted-foreground);
                        animation: fade-in 0.4s ease-out;
                    }
                "#}
            </style>

            <div class="page-header">
                <h1>{Route::Work.heading()}</h1>
                <p>{"Exploring the boundaries of human-computer interaction through groundbreaking research and development."}</p>
            </div>

            <div class="filter-bar">
                { for buttons }
            </div>

            {gallery}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ProjectCategory, ProjectStatus};

    fn software_only() -> Vec<Project> {
        vec![Project {
            title: "Neural Interface SDK".to_string(),
            description: String::new(),
            image: String::new(),
            category: ProjectCategory::Software,
            status: ProjectStatus::Released,
            featured: true,
        }]
    }

    #[test]
    fn unmatched_filter_shows_the_empty_state() {
        let projects = software_only();
        assert_eq!(Gallery::build(&projects, FilterCategory::Research), Gallery::Empty);
        assert_eq!(EMPTY_MESSAGE, "No projects found in this category.");
    }

    #[test]
    fn matching_filter_shows_cards() {
        let projects = software_only();
        let expected = Gallery::Cards(vec![&projects[0]]);
        assert_eq!(Gallery::build(&projects, FilterCategory::Software), expected);
        assert_eq!(Gallery::build(&projects, FilterCategory::All), expected);
    }

    #[test]
    fn shipped_gallery_never_exceeds_the_registry() {
        let projects = content::projects().unwrap();
        for filter in FilterCategory::ORDER {
            match Gallery::build(projects, filter) {
                Gallery::Empty => {}
                Gallery::Cards(cards) => assert!(cards.len() <= projects.len()),
            }
        }
        match Gallery::build(projects, FilterCategory::Hardware) {
            Gallery::Cards(cards) => assert_eq!(cards.len(), 1),
            Gallery::Empty => panic!("hardware projects should be listed"),
        }
    }
}
