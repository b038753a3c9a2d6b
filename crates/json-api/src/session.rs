//! Session cookie middleware.

use market_app::carts::data::SessionKey;
use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::*,
};
use tracing::debug;

use crate::extensions::*;

/// Cookie carrying the session key.
pub(crate) const SESSION_COOKIE: &str = "MARKET_SESSION";

/// Resolve the caller's session key, issuing a new one when the cookie is
/// missing or unusable.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let presented = req
        .cookie(SESSION_COOKIE)
        .and_then(|cookie| SessionKey::parse(cookie.value()).ok());

    let session_key = match presented {
        Some(session_key) => session_key,
        None => {
            let session_key = SessionKey::generate();

            debug!(session = %session_key, "issued session key");

            res.add_cookie(
                Cookie::build((SESSION_COOKIE, session_key.to_string()))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .build(),
            );

            session_key
        }
    };

    depot.insert_session_key(session_key);

    ctrl.call_next(req, depot, res).await;
}
