use crate::campaign::Campaign;
use crate::database::Database;
use crate::error::Error;
use crate::notification::Notification;
use crate::proposal::manager::applicant_notification;
use crate::proposal::ReviewDecision;

use super::{Creator, CreatorId};

#[tracing::instrument(skip(db))]
pub async fn get_creators(db: &dyn Database) -> Result<Vec<Creator>, Error> {
    let creators = db.creators().fetch_creators().await?;

    Ok(creators)
}

#[tracing::instrument(skip(db))]
pub async fn get_creator_by_id(
    db: &dyn Database,
    creator_id: CreatorId,
) -> Result<Option<Creator>, Error> {
    let creator = db.creators().fetch_creator_by_id(creator_id).await?;

    Ok(creator)
}

#[tracing::instrument(skip(db))]
pub async fn expect_creator_by_id(
    db: &dyn Database,
    creator_id: CreatorId,
) -> Result<Creator, Error> {
    let creator = get_creator_by_id(db, creator_id)
        .await?
        .ok_or(Error::CreatorNotFound { creator_id })?;

    Ok(creator)
}

/// Campaigns only count their approved creators, so the roster shown is the
/// head of the creator list.
#[tracing::instrument(skip(db, campaign), fields(campaign_id = %campaign.id))]
pub async fn get_approved_creators(
    db: &dyn Database,
    campaign: &Campaign,
) -> Result<Vec<Creator>, Error> {
    let mut creators = get_creators(db).await?;
    creators.truncate(campaign.approved_creators as usize);

    Ok(creators)
}

#[tracing::instrument(skip(db))]
pub async fn review_candidate(
    db: &dyn Database,
    creator_id: CreatorId,
    decision: ReviewDecision,
) -> Result<Notification, Error> {
    let creator = expect_creator_by_id(db, creator_id).await?;

    Ok(applicant_notification(&creator.name, decision))
}
