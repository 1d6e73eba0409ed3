use actix_web::web::Json;
use actix_web::{get, put};
use serde::Serialize;

use super::{saved_notification, Profile};
use crate::error::Error;
use crate::notification::Notification;
use crate::session::{BrandSession, CreatorSession, UserType};

#[derive(Clone, Debug, Serialize)]
pub struct ProfileBody {
    pub role: UserType,
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl ProfileBody {
    pub fn render(role: UserType, profile: Profile) -> ProfileBody {
        ProfileBody {
            role,
            profile,
            notification: None,
        }
    }
}

fn view(role: UserType) -> Result<Json<ProfileBody>, Error> {
    Ok(Json(ProfileBody::render(role, Profile::default_for(role))))
}

fn save(role: UserType, profile: Profile) -> Result<Json<ProfileBody>, Error> {
    Ok(Json(ProfileBody {
        role,
        profile,
        notification: Some(saved_notification()),
    }))
}

#[get("/brand/profile")]
#[tracing::instrument(skip(session))]
pub async fn get_brand_profile(session: BrandSession) -> Result<Json<ProfileBody>, Error> {
    view(session.role())
}

#[get("/creator/profile")]
#[tracing::instrument(skip(session))]
pub async fn get_creator_profile(session: CreatorSession) -> Result<Json<ProfileBody>, Error> {
    view(session.role())
}

#[get("/brand/profile/settings")]
#[tracing::instrument(skip(session))]
pub async fn get_brand_settings(session: BrandSession) -> Result<Json<ProfileBody>, Error> {
    view(session.role())
}

#[get("/creator/profile/settings")]
#[tracing::instrument(skip(session))]
pub async fn get_creator_settings(session: CreatorSession) -> Result<Json<ProfileBody>, Error> {
    view(session.role())
}

#[put("/brand/profile/settings")]
#[tracing::instrument(skip(session))]
pub async fn save_brand_settings(
    session: BrandSession,
    body: Json<Profile>,
) -> Result<Json<ProfileBody>, Error> {
    save(session.role(), body.into_inner())
}

#[put("/creator/profile/settings")]
#[tracing::instrument(skip(session))]
pub async fn save_creator_settings(
    session: CreatorSession,
    body: Json<Profile>,
) -> Result<Json<ProfileBody>, Error> {
    save(session.role(), body.into_inner())
}
