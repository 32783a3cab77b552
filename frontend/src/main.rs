use yew::prelude::*;

mod styles;
mod config;
mod api;
mod vote_form;
mod render_tally;
mod tally_page;

use crate::tally_page::TallyPage;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="min-h-screen bg-gray-900">
            <TallyPage />
        </div>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
