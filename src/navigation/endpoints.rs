use actix_web::http::header;
use actix_web::web::{Json, Query};
use actix_web::{get, HttpResponse};
use serde::{Deserialize, Serialize};

use super::{resolve, RedirectBody, Resolution};
use crate::error::Error;
use crate::session::{CurrentSession, UserType};

#[derive(Clone, Debug, Serialize)]
pub struct RoleOptionBody {
    pub role: UserType,
    pub title: &'static str,
    pub description: &'static str,
    pub platform: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct OnboardingBody {
    pub title: &'static str,
    pub tagline: &'static str,
    pub options: Vec<RoleOptionBody>,
}

impl OnboardingBody {
    pub fn render() -> OnboardingBody {
        OnboardingBody {
            title: "Inbazz",
            tagline: "Conectando marcas e criadores para campanhas de sucesso",
            options: vec![
                RoleOptionBody {
                    role: UserType::Brand,
                    title: "Sou Marca",
                    description: "Crie campanhas, encontre criadores e gerencie colaborações",
                    platform: "WEB",
                },
                RoleOptionBody {
                    role: UserType::Creator,
                    title: "Sou Criador",
                    description: "Encontre campanhas, envie propostas e faça colabs",
                    platform: "MOBILE",
                },
            ],
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NavigateQuery {
    pub path: String,
}

#[get("/")]
#[tracing::instrument(skip(session))]
pub async fn get_onboarding(session: CurrentSession) -> Result<HttpResponse, Error> {
    match session.role {
        Some(role) => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, role.dashboard_path()))
            .json(RedirectBody::to(role.dashboard_path()))),
        None => Ok(HttpResponse::Ok().json(OnboardingBody::render())),
    }
}

#[get("/navigate")]
#[tracing::instrument(skip(session))]
pub async fn navigate(
    session: CurrentSession,
    query: Query<NavigateQuery>,
) -> Result<Json<Resolution>, Error> {
    Ok(Json(resolve(&query.path, session.role)))
}
