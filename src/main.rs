use log::{info, Level};
use stylist::yew::Global;
use stylist::css;
use yew::prelude::*;
use yew_router::prelude::*;

mod ambient;
mod config;
mod contact_form;
mod content;
mod styles;
mod components {
    pub mod animated_text;
    pub mod filter_button;
    pub mod floating_label;
    pub mod floating_messages;
    pub mod footer;
    pub mod sparkles;
    pub mod spotlight;
    pub mod tilt_card;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod work;
}

use ambient::{use_window_pointer, use_window_scroll};
use components::footer::Footer;
use components::spotlight::SpotlightOverlay;
use pages::{
    about::About,
    contact::Contact,
    home::{Home, HERO_LEAD},
    not_found::NotFound,
    work::Work,
};

#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Top-level heading rendered by the page behind this route.
    pub fn heading(&self) -> String {
        match self {
            Route::Home => HERO_LEAD.to_string(),
            Route::Work => "Our Work".to_string(),
            Route::About => "Our Mission".to_string(),
            Route::Contact => "Contact Us".to_string(),
            Route::NotFound => "Page Not Found".to_string(),
        }
    }
}

/// Links shown in the navigation bar, in display order.
pub const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Work, "Work"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
    active: bool,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    html! {
        <Link<Route> to={props.to} classes={classes!("nav-link", props.active.then(|| "active"))}>
            <span class="nav-link-bg"></span>
            <span class="nav-link-label">{props.label}</span>
            if props.active {
                <span class="nav-indicator"></span>
            }
        </Link<Route>>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_window_scroll();
    let nav_ref = use_node_ref();
    let pointer = use_window_pointer(nav_ref.clone());
    let current = use_route::<Route>().unwrap_or(Route::NotFound);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |close: Option<Callback<MouseEvent>>| {
        NAV_ITEMS
            .iter()
            .map(|(route, label)| {
                html! {
                    <div onclick={close.clone()}>
                        <NavLink to={*route} label={*label} active={current == *route} />
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav ref={nav_ref} class={classes!("top-nav", scroll.header_is_opaque().then(|| "scrolled"))}>
            <SpotlightOverlay
                position={pointer}
                color={"rgba(var(--primary-rgb), 0.1)".to_string()}
                class={classes!("nav-spotlight")}
            />
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"NeuroSync"}
                    <span class="nav-logo-underline"></span>
                </Link<Route>>

                <div class="nav-right">
                    {links(None)}
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    {links(Some(close_menu))}
                </div>
            }
        </nav>
    }
}

#[function_component(Backdrop)]
fn backdrop() -> Html {
    html! {
        <div class="backdrop">
            <div class="blob blob-a"></div>
            <div class="blob blob-b"></div>
            <div class="blob blob-c"></div>
            <svg class="backdrop-grid" width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <pattern id="grid" width="40" height="40" patternUnits="userSpaceOnUse">
                        <path d="M 40 0 L 0 0 0 40" fill="none" stroke="currentColor" stroke-width="0.5" />
                    </pattern>
                </defs>
                <rect width="100%" height="100%" fill="url(#grid)" />
            </svg>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Global css={css!(r#"
                *, *::before, *::after { box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: "Inter", system-ui, -apple-system, sans-serif;
                    background: #070b14;
                    color: #e5e7eb;
                    -webkit-font-smoothing: antialiased;
                }
                a { color: inherit; text-decoration: none; }
                img { display: block; }
            "#)} />
            <style>{styles::THEME}</style>
            <div class="app-shell">
                <Backdrop />
                <Nav />
                <main class="page-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("logger was already initialized");
    }
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_to_their_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/work"), Some(Route::Work));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn nav_lists_every_page_once() {
        let routes: Vec<_> = NAV_ITEMS.iter().map(|(route, _)| *route).collect();
        assert_eq!(routes, [Route::Home, Route::Work, Route::About, Route::Contact]);
        let labels: Vec<_> = NAV_ITEMS.iter().map(|(_, label)| *label).collect();
        assert_eq!(labels, ["Home", "Work", "About", "Contact"]);
    }

    #[test]
    fn headings_match_the_pages() {
        assert_eq!(Route::Home.heading(), "The Future of");
        assert_eq!(Route::Work.heading(), "Our Work");
        assert_eq!(Route::About.heading(), "Our Mission");
        assert_eq!(Route::Contact.heading(), "Contact Us");
        assert_eq!(Route::NotFound.heading(), "Page Not Found");
    }
}
