#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;
use actix_web::web::{Data, ServiceConfig};
use inbazz::database::{Database, MemoryDatabase};
use inbazz::session::{SessionStore, SESSION_COOKIE};
use serde_json::json;

pub const CONNECTION_TEXT: &str = "Conexão estabelecida";

/// The full app over the in-memory fixtures, with a fresh session store.
pub fn app() -> impl FnOnce(&mut ServiceConfig) {
    let db: Box<dyn Database> = Box::new(MemoryDatabase::with_fixtures(Some(
        CONNECTION_TEXT.to_string(),
    )));

    inbazz::configure(Data::new(db), Data::new(SessionStore::new()))
}

pub fn select_role(role: &str) -> TestRequest {
    TestRequest::post()
        .uri("/session/role")
        .set_json(json!({ "role": role }))
}

pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.into_owned())
        .expect("response should set the session cookie")
}

pub fn location<B>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
