use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub fn copyright_line(year: i32) -> String {
    format!("© {} NeuroSync. All rights reserved.", year)
}

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com"),
    ("Twitter", "https://twitter.com"),
    ("LinkedIn", "https://linkedin.com"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        {"NeuroSync"}
                    </Link<Route>>
                    <p>
                        {"Pioneering the future of brain-computer interface technology. Connecting minds, empowering innovation."}
                    </p>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul class="footer-links">
                        <li><Link<Route> to={Route::Work}>{"Our Work"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>

                <div>
                    <h3>{"Connect"}</h3>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer">{*name}</a>
                        }) }
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright_line(2026), "© 2026 NeuroSync. All rights reserved.");
    }
}
