use yew::prelude::*;
use shared::{CandidateTally, TallyView};
use crate::styles::*;

fn render_candidate(candidate: &CandidateTally) -> Html {
    html! {
        <div>
            <div class={combine_classes(FLEX_BETWEEN, "mb-1 text-gray-200")}>
                <span class="font-medium break-words">{format!("{}:", candidate.name)}</span>
                <span class="font-medium">
                    {format!("{} votos ({:.1}%)", candidate.votes, candidate.percentage)}
                </span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-4">
                <div
                    class="bg-blue-500 h-4 rounded-full transition-all duration-300"
                    style={format!("width: {:.2}%", candidate.percentage)}
                />
            </div>
        </div>
    }
}

pub fn render_tally_view(view: &TallyView, on_reset: Callback<MouseEvent>, busy: bool) -> Html {
    html! {
        <div class={CARD_SECTION}>
            <h2 class={HEADING_SM}>{"Resultados"}</h2>
            <p class={combine_classes(TEXT_MUTED, "mb-4")}>
                {format!("Total de votos: {}", view.total_votes)}
            </p>
            <div class={SPACE_Y_BASE}>
                {for view.candidates.iter().map(render_candidate)}
            </div>
            <button
                type="button"
                onclick={on_reset}
                disabled={busy}
                class={combine_classes(BUTTON_BASE, combine_classes(BUTTON_DANGER, "mt-6").as_str())}
            >
                {"Reiniciar Votação"}
            </button>
        </div>
    }
}
