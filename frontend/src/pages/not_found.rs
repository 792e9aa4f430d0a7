use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::content::{PHONE_DISPLAY, PHONE_HREF, PRACTICE_NAME};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>
                {format!("The page you were looking for isn't part of the {} site. ", PRACTICE_NAME)}
                {"You can reach us at "}<a href={PHONE_HREF}>{PHONE_DISPLAY}</a>{"."}
            </p>
            <Link<Route> to={Route::Home} classes="primary-button">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 2rem;
                    text-align: center;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .not-found-page .primary-button {
                    padding: 0.9rem 1.6rem;
                    border-radius: 999px;
                    background: #10b981;
                    color: #ffffff;
                    text-decoration: none;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
