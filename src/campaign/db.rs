use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::{MemoryStore, MongoCampaignStore};
use crate::error::Error;

use super::{Campaign, CampaignId};

#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn insert_campaigns(&self, campaigns: &[Campaign]) -> Result<(), Error>;

    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error>;

    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error>;
}

#[async_trait]
impl CampaignStore for MongoCampaignStore {
    #[tracing::instrument(skip(self, campaigns))]
    async fn insert_campaigns(&self, campaigns: &[Campaign]) -> Result<(), Error> {
        if campaigns.is_empty() {
            return Ok(());
        }

        self.insert_many(campaigns, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        let campaigns: Vec<Campaign> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(campaigns)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        let campaign: Option<Campaign> = self
            .find_one(bson::doc! { "_id": campaign_id }, None)
            .await?;

        Ok(campaign)
    }
}

#[async_trait]
impl CampaignStore for MemoryStore<Campaign> {
    async fn insert_campaigns(&self, campaigns: &[Campaign]) -> Result<(), Error> {
        self.extend(campaigns)
    }

    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        self.all()
    }

    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        self.find(|campaign| campaign.id == campaign_id)
    }
}
