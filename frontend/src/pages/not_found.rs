use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::decrypted_text::{AnimateOn, DecryptedText};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    background: #FAF7FC;
                    color: #1A1A1D;
                    text-align: center;
                    padding: 2rem;
                }
                .not-found h1 { font-size: clamp(4rem, 15vw, 10rem); margin: 0; color: #7A1CAC; }
                .not-found a { color: #2E073F; font-weight: 600; }
                "#}
            </style>
            <h1>
                <DecryptedText text={"404"} animate_on={AnimateOn::View} max_iterations={16} />
            </h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
        </div>
    }
}
