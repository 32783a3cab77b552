use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use rocket::http::Header;
use rocket::http::uri::Absolute;

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

pub struct CORS;

/// Trunk's dev server runs the frontend on its own localhost port, so only
/// `http://localhost[:port]` and `http://127.0.0.1[:port]` are allowed.
fn is_local_origin(origin: &str) -> bool {
    let Ok(uri) = Absolute::parse(origin) else {
        return false;
    };
    let Some(authority) = uri.authority() else {
        return false;
    };

    uri.scheme().eq_ignore_ascii_case("http")
        && authority.user_info().is_none()
        && uri.path().as_str().is_empty()
        && uri.query().is_none()
        && LOCAL_HOSTS.contains(&authority.host())
}

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let Some(origin) = req.headers().get_one("Origin") else {
            return;
        };

        if is_local_origin(origin) {
            res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
            res.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
            res.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
            res.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
            res.set_header(Header::new("Access-Control-Max-Age", "86400"));
        }
    }
}
