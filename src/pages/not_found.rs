use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <style>
                {r#"
                    .not-found-page {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        padding: 6rem 1rem 4rem;
                        text-align: center;
                    }
                    .not-found-code { font-size: 5rem; font-weight: 700; color: var(--primary); line-height: 1; }
                    .not-found-page h1 { font-size: 2.25rem; font-weight: 700; }
                    .not-found-page p { color: var(--muted-foreground); max-width: 32rem; }
                    .home-link {
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.375rem;
                        background: var(--primary);
                        color: var(--primary-foreground);
                        font-weight: 500;
                    }
                "#}
            </style>
            <div class="not-found-code">{"404"}</div>
            <h1>{Route::NotFound.heading()}</h1>
            <p>{"The signal you followed doesn't lead anywhere. The page may have moved or never existed."}</p>
            <Link<Route> to={Route::Home} classes="home-link">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
