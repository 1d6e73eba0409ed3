use crate::database::Database;
use crate::error::Error;
use crate::notification::Notification;

use super::{Campaign, CampaignId, CampaignStatus};

#[tracing::instrument(skip(db))]
pub async fn get_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_active_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = get_campaigns(db)
        .await?
        .into_iter()
        .filter(|campaign| campaign.status == CampaignStatus::Active)
        .collect();

    Ok(campaigns)
}

/// The newest campaigns first, at most `limit` of them.
#[tracing::instrument(skip(db))]
pub async fn get_recent_campaigns(
    db: &dyn Database,
    limit: usize,
) -> Result<Vec<Campaign>, Error> {
    let mut campaigns = get_campaigns(db).await?;
    campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    campaigns.truncate(limit);

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<Option<Campaign>, Error> {
    let campaign = db.campaigns().fetch_campaign_by_id(campaign_id).await?;

    Ok(campaign)
}

/// Fetches a campaign or produces the not-found state, which tells the
/// client which listing to go back to.
#[tracing::instrument(skip(db))]
pub async fn expect_campaign_by_id(
    db: &dyn Database,
    campaign_id: CampaignId,
    back_to: &str,
) -> Result<Campaign, Error> {
    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or_else(|| Error::CampaignNotFound {
            campaign_id: campaign_id.to_string(),
            back_to: back_to.to_string(),
        })?;

    Ok(campaign)
}

/// Like [`expect_campaign_by_id`] for an id taken from a client path. Text
/// that is not a campaign id names no campaign and gets the same
/// not-found state.
#[tracing::instrument(skip(db))]
pub async fn expect_campaign(
    db: &dyn Database,
    campaign_id: &str,
    back_to: &str,
) -> Result<Campaign, Error> {
    let campaign = match campaign_id.parse::<CampaignId>() {
        Ok(id) => db.campaigns().fetch_campaign_by_id(id).await?,
        Err(_) => None,
    };

    campaign.ok_or_else(|| Error::CampaignNotFound {
        campaign_id: campaign_id.to_string(),
        back_to: back_to.to_string(),
    })
}

/// Campaigns are never removed; the brand is only told it happened.
#[tracing::instrument(skip(db))]
pub async fn delete_campaign(db: &dyn Database, campaign_id: &str) -> Result<Notification, Error> {
    expect_campaign(db, campaign_id, "/brand/campaigns").await?;

    Ok(Notification::destructive(
        "Campanha excluída",
        "A campanha foi removida com sucesso.",
    ))
}
