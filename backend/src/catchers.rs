use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

fn message(error: &str, status: u16) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: error.into(),
        status,
    })
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorMessage> {
    message("Invalid request parameters.", 400)
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorMessage> {
    message("The requested resource was not found.", 404)
}

#[catch(422)]
pub fn unprocessable_entity(req: &Request) -> Json<ErrorMessage> {
    let error_msg = match req.uri().path().as_str() {
        "/api/vote" => "The vote request could not be understood.",
        _ => "The request body could not be understood.",
    };
    message(error_msg, 422)
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorMessage> {
    message("An internal server error occurred.", 500)
}

#[catch(503)]
pub fn service_unavailable(_req: &Request) -> Json<ErrorMessage> {
    message("Too many active sessions, try again later.", 503)
}
