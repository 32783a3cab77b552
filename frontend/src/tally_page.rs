use std::rc::Rc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use shared::{TallyView, VoteRequest};
use crate::api::{fetch_tally, reset_tally, submit_vote};
use crate::config::CONFIG;
use crate::render_tally::render_tally_view;
use crate::styles::*;
use crate::vote_form::VoteForm;

#[derive(Default)]
enum State {
    #[default]
    Loading,
    Ready(Rc<TallyView>),
    Error(String),
}

pub enum Msg {
    Loaded(Result<TallyView, String>),
    Vote(VoteRequest),
    Voted(Result<TallyView, String>),
    Reset,
    ResetDone(Result<TallyView, String>),
    ClearNotice,
}

pub struct TallyPage {
    state: State,
    busy: bool,
    notice: Option<String>,
    error: Option<String>,
    notice_timeout: Option<Timeout>,
}

impl Component for TallyPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async { Msg::Loaded(fetch_tally().await) });

        Self {
            state: State::default(),
            busy: false,
            notice: None,
            error: None,
            notice_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.state = match result {
                    Ok(view) => State::Ready(Rc::new(view)),
                    Err(err) => State::Error(err),
                };
                true
            }
            Msg::Vote(request) => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                self.error = None;
                ctx.link().send_future(async move { Msg::Voted(submit_vote(request).await) });
                true
            }
            Msg::Reset => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                self.error = None;
                ctx.link().send_future(async { Msg::ResetDone(reset_tally().await) });
                true
            }
            Msg::Voted(result) => self.finish(ctx, result, "Voto registrado!"),
            Msg::ResetDone(result) => self.finish(ctx, result, "Votação reiniciada."),
            Msg::ClearNotice => {
                self.notice = None;
                self.notice_timeout = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            State::Loading => html! {
                <div class="flex items-center justify-center p-8">
                    <div class="animate-spin rounded-full h-12 w-12 border-4 border-blue-500 border-t-transparent"/>
                </div>
            },
            State::Ready(view) => html! {
                <div class={SPACE_Y_LG}>
                    <div class={CARD_SECTION}>
                        <h2 class={HEADING_SM}>{"Votar"}</h2>
                        <VoteForm
                            candidates={view.candidates.iter().map(|c| c.name.clone()).collect::<Vec<_>>()}
                            on_vote={ctx.link().callback(Msg::Vote)}
                            disabled={self.busy}
                        />
                    </div>
                    {render_tally_view(view, ctx.link().callback(|_| Msg::Reset), self.busy)}
                </div>
            },
            State::Error(err) => html! {
                <div class={alert_style("error")}>
                    <p>{err}</p>
                </div>
            },
        };

        html! {
            <div class={CONTAINER_SM}>
                <h1 class={HEADING_LG}>{"Sistema de Votação"}</h1>
                {if let Some(error) = &self.error {
                    html! { <div class={alert_style("error")}>{error}</div> }
                } else { html! {} }}
                {if let Some(notice) = &self.notice {
                    html! { <div class={alert_style("success")}>{notice}</div> }
                } else { html! {} }}
                {body}
            </div>
        }
    }
}

impl TallyPage {
    fn finish(&mut self, ctx: &Context<Self>, result: Result<TallyView, String>, notice: &str) -> bool {
        self.busy = false;
        match result {
            Ok(view) => {
                self.state = State::Ready(Rc::new(view));
                self.notice = Some(notice.to_string());
                let link = ctx.link().clone();
                self.notice_timeout = Some(Timeout::new(CONFIG.notice_ms, move || {
                    link.send_message(Msg::ClearNotice)
                }));
            }
            Err(err) => self.error = Some(err),
        }
        true
    }
}
