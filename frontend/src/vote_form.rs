use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use shared::{StrategyKind, VoteRequest, MAX_WEIGHT, MIN_WEIGHT};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub candidates: Vec<String>,
    pub on_vote: Callback<VoteRequest>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn VoteForm(props: &Props) -> Html {
    let candidate = use_state(|| None::<String>);
    let strategy = use_state(|| StrategyKind::Simple);
    let weight = use_state(|| i64::from(MIN_WEIGHT));

    let onsubmit = {
        let candidate = candidate.clone();
        let strategy = strategy.clone();
        let weight = weight.clone();
        let on_vote = props.on_vote.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(name) = (*candidate).clone() else {
                return;
            };
            let request = match *strategy {
                StrategyKind::Weighted => VoteRequest::weighted(name, *weight),
                StrategyKind::Simple => VoteRequest::simple(name),
            };
            on_vote.emit(request);
        })
    };

    let onchange_strategy = {
        let strategy = strategy.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            strategy.set(StrategyKind::from_label(Some(select.value().as_str())));
        })
    };

    let oninput_weight = {
        let weight = weight.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            weight.set(input.value().parse().unwrap_or(i64::from(MIN_WEIGHT)));
        })
    };

    html! {
        <form class={SPACE_Y_LG} {onsubmit}>
            <div>
                <label class={TEXT_LABEL}>{"Selecione um candidato:"}</label>
                <div class={combine_classes(SPACE_Y_BASE, "mt-2")}>
                    {for props.candidates.iter().map(|name| {
                        let onchange = {
                            let candidate = candidate.clone();
                            let name = name.clone();
                            Callback::from(move |_: Event| candidate.set(Some(name.clone())))
                        };
                        html! {
                            <label class="flex items-center text-gray-200 cursor-pointer">
                                <input
                                    type="radio"
                                    name="candidate"
                                    class="mr-2"
                                    value={name.clone()}
                                    checked={candidate.as_deref() == Some(name.as_str())}
                                    required=true
                                    {onchange}
                                />
                                {name}
                            </label>
                        }
                    })}
                </div>
            </div>

            <div class={INPUT_GROUP}>
                <label class={TEXT_LABEL}>{"Estratégia de votação:"}</label>
                <select class={INPUT_BASE} onchange={onchange_strategy}>
                    <option value={StrategyKind::Simple.label()} selected={*strategy == StrategyKind::Simple}>
                        {"Votação Simples"}
                    </option>
                    <option value={StrategyKind::Weighted.label()} selected={*strategy == StrategyKind::Weighted}>
                        {"Votação Ponderada"}
                    </option>
                </select>
            </div>

            {if *strategy == StrategyKind::Weighted {
                html! {
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL}>
                            {format!("Peso do voto ({}-{}):", MIN_WEIGHT, MAX_WEIGHT)}
                        </label>
                        <input
                            type="number"
                            class={INPUT_BASE}
                            min={MIN_WEIGHT.to_string()}
                            max={MAX_WEIGHT.to_string()}
                            value={(*weight).to_string()}
                            oninput={oninput_weight}
                        />
                    </div>
                }
            } else {
                html! {}
            }}

            <button
                type="submit"
                class={button_primary(true)}
                disabled={props.disabled || candidate.is_none()}
            >
                {"Votar"}
            </button>
        </form>
    }
}
