use gloo_net::http::{Request, Response};
use shared::{ErrorResponse, TallyView, VoteRequest};
use crate::config::CONFIG;

pub async fn fetch_tally() -> Result<TallyView, String> {
    let response = Request::get(&format!("{}/tally", CONFIG.api_base_url))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_tally(response).await
}

pub async fn submit_vote(request: VoteRequest) -> Result<TallyView, String> {
    let response = Request::post(&format!("{}/vote", CONFIG.api_base_url))
        .json(&request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_tally(response).await
}

pub async fn reset_tally() -> Result<TallyView, String> {
    let response = Request::post(&format!("{}/reset", CONFIG.api_base_url))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_tally(response).await
}

async fn read_tally(response: Response) -> Result<TallyView, String> {
    match response.status() {
        200 => response.json::<TallyView>().await
            .map_err(|_| "Falha ao ler o resultado da votação".to_string()),
        503 => Err("Servidor ocupado, tente novamente em instantes.".into()),
        status => match response.json::<ErrorResponse>().await {
            Ok(body) => Err(body.error),
            Err(_) => Err(format!("Erro inesperado ({})", status)),
        },
    }
}
