use actix_web::cookie::Cookie;
use actix_web::web::{Data, Json};
use actix_web::{delete, get, post, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::{
    landing_path, CurrentSession, Session, SessionId, SessionStore, UserType, SESSION_COOKIE,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectRoleBody {
    pub role: Option<UserType>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionBody {
    pub id: SessionId,
    pub role: Option<UserType>,
    pub redirect_to: String,
}

impl SessionBody {
    pub fn render(session: &Session) -> SessionBody {
        SessionBody {
            id: session.id,
            role: session.role,
            redirect_to: landing_path(session.role).to_string(),
        }
    }
}

fn session_cookie(session: &Session) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session.id.to_string())
        .path("/")
        .http_only(true)
        .finish()
}

#[get("/session")]
#[tracing::instrument(skip(session))]
pub async fn get_session(session: CurrentSession) -> Result<Json<SessionBody>, Error> {
    Ok(Json(SessionBody::render(&session)))
}

#[post("/session/role")]
#[tracing::instrument(skip(sessions, session))]
pub async fn select_role(
    sessions: Data<SessionStore>,
    session: CurrentSession,
    body: Json<SelectRoleBody>,
) -> Result<HttpResponse, Error> {
    let mut session = session.into_inner();
    session.select_role(body.into_inner().role);

    sessions.save(session.clone())?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&session))
        .json(SessionBody::render(&session)))
}

#[delete("/session")]
#[tracing::instrument(skip(sessions, session))]
pub async fn end_session(
    sessions: Data<SessionStore>,
    session: CurrentSession,
) -> Result<HttpResponse, Error> {
    sessions.remove(session.id)?;

    let mut cookie = session_cookie(&session);
    cookie.make_removal();

    Ok(HttpResponse::Ok().cookie(cookie).json(SessionBody {
        id: session.id,
        role: None,
        redirect_to: landing_path(None).to_string(),
    }))
}
