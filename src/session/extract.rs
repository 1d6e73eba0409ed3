use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use futures::future::{ready, Ready};

use crate::error::Error;

use super::{Session, SessionId, SessionStore, UserType, SESSION_COOKIE};

/// The session named by the request's cookie. A request without a known
/// session gets a fresh one with no role; it is only stored once something
/// is saved to it.
#[derive(Clone, Debug)]
pub struct CurrentSession(pub Session);

impl CurrentSession {
    pub fn into_inner(self) -> Session {
        self.0
    }

    fn extract(req: &HttpRequest) -> Result<CurrentSession, Error> {
        let store = req.app_data::<Data<SessionStore>>().ok_or_else(|| {
            Error::ExistentialState("session store is not configured".to_string())
        })?;

        let session_id = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

        let session = match session_id {
            Some(session_id) => store.load(session_id)?,
            None => None,
        };

        Ok(CurrentSession(session.unwrap_or_else(Session::new)))
    }
}

impl FromRequest for CurrentSession {
    type Error = Error;
    type Future = Ready<Result<CurrentSession, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(CurrentSession::extract(req))
    }
}

impl Deref for CurrentSession {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.0
    }
}

impl DerefMut for CurrentSession {
    fn deref_mut(&mut self) -> &mut Session {
        &mut self.0
    }
}

pub trait RoleMarker {
    fn role() -> UserType;
}

#[derive(Clone, Copy, Debug)]
pub struct BrandRole;

#[derive(Clone, Copy, Debug)]
pub struct CreatorRole;

impl RoleMarker for BrandRole {
    fn role() -> UserType {
        UserType::Brand
    }
}

impl RoleMarker for CreatorRole {
    fn role() -> UserType {
        UserType::Creator
    }
}

/// A session that passed the guard for pages owned by `R`. Handlers take it
/// as their first argument: actix reports the first failing extractor in
/// argument order, so the guard's redirect wins over a malformed path,
/// query or body.
#[derive(Debug)]
pub struct RoleSession<R: RoleMarker> {
    session: Session,
    _marker: PhantomData<R>,
}

pub type BrandSession = RoleSession<BrandRole>;
pub type CreatorSession = RoleSession<CreatorRole>;

impl<R: RoleMarker> RoleSession<R> {
    pub fn role(&self) -> UserType {
        R::role()
    }

    pub fn into_inner(self) -> Session {
        self.session
    }

    fn extract(req: &HttpRequest) -> Result<RoleSession<R>, Error> {
        let session = CurrentSession::extract(req)?.into_inner();
        session.require(R::role())?;

        Ok(RoleSession {
            session,
            _marker: PhantomData,
        })
    }
}

impl<R: RoleMarker> FromRequest for RoleSession<R> {
    type Error = Error;
    type Future = Ready<Result<RoleSession<R>, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(RoleSession::extract(req))
    }
}

impl<R: RoleMarker> Deref for RoleSession<R> {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}
