use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use serde::Serialize;

use super::{manager, Creator, CreatorId};
use crate::database::Database;
use crate::error::Error;
use crate::format::{format_number, format_percentage};
use crate::notification::ActionBody;
use crate::proposal::ReviewDecision;
use crate::session::BrandSession;

#[derive(Clone, Debug, Serialize)]
pub struct CreatorBody {
    pub id: CreatorId,
    pub name: String,
    pub avatar: String,
    pub followers: i64,
    pub followers_display: String,
    pub engagement_rate: f64,
    pub engagement_rate_display: String,
    pub niche: String,
    pub bio: String,
}

impl CreatorBody {
    pub fn render(creator: Creator) -> CreatorBody {
        CreatorBody {
            id: creator.id,
            followers_display: format_number(creator.followers),
            engagement_rate_display: format_percentage(creator.engagement_rate),
            name: creator.name,
            avatar: creator.avatar,
            followers: creator.followers,
            engagement_rate: creator.engagement_rate,
            niche: creator.niche,
            bio: creator.bio,
        }
    }
}

#[get("/brand/candidates")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_candidates(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<CreatorBody>>, Error> {
    let creators = manager::get_creators(&***db).await?;

    Ok(Json(creators.into_iter().map(CreatorBody::render).collect()))
}

#[post("/brand/candidates/{creator_id}/{decision}")]
#[tracing::instrument(skip(db, _session))]
pub async fn review_candidate(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
    params: Path<(CreatorId, ReviewDecision)>,
) -> Result<Json<ActionBody>, Error> {
    let (creator_id, decision) = params.into_inner();

    let notification = manager::review_candidate(&***db, creator_id, decision).await?;

    Ok(Json(ActionBody::notify(notification)))
}
