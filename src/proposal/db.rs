use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::campaign::CampaignId;
use crate::database::{MemoryStore, MongoProposalStore};
use crate::error::Error;

use super::{Proposal, ProposalId, ProposalType};

#[async_trait]
pub trait ProposalStore: Send + Sync {
    async fn insert_proposals(&self, proposals: &[Proposal]) -> Result<(), Error>;

    async fn fetch_proposals(&self) -> Result<Vec<Proposal>, Error>;

    async fn fetch_proposals_by_type(&self, kind: ProposalType) -> Result<Vec<Proposal>, Error>;

    async fn fetch_proposals_by_campaign(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Vec<Proposal>, Error>;

    async fn fetch_proposal_by_id(&self, proposal_id: ProposalId)
        -> Result<Option<Proposal>, Error>;
}

#[async_trait]
impl ProposalStore for MongoProposalStore {
    #[tracing::instrument(skip(self, proposals))]
    async fn insert_proposals(&self, proposals: &[Proposal]) -> Result<(), Error> {
        if proposals.is_empty() {
            return Ok(());
        }

        self.insert_many(proposals, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_proposals(&self) -> Result<Vec<Proposal>, Error> {
        let proposals: Vec<Proposal> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(proposals)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_proposals_by_type(&self, kind: ProposalType) -> Result<Vec<Proposal>, Error> {
        let kind = bson::to_bson(&kind)?;
        let proposals: Vec<Proposal> = self
            .find(bson::doc! { "type": kind }, None)
            .await?
            .try_collect()
            .await?;

        Ok(proposals)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_proposals_by_campaign(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Vec<Proposal>, Error> {
        let proposals: Vec<Proposal> = self
            .find(bson::doc! { "campaign_id": campaign_id }, None)
            .await?
            .try_collect()
            .await?;

        Ok(proposals)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_proposal_by_id(
        &self,
        proposal_id: ProposalId,
    ) -> Result<Option<Proposal>, Error> {
        let proposal: Option<Proposal> = self
            .find_one(bson::doc! { "_id": proposal_id }, None)
            .await?;

        Ok(proposal)
    }
}

#[async_trait]
impl ProposalStore for MemoryStore<Proposal> {
    async fn insert_proposals(&self, proposals: &[Proposal]) -> Result<(), Error> {
        self.extend(proposals)
    }

    async fn fetch_proposals(&self) -> Result<Vec<Proposal>, Error> {
        self.all()
    }

    async fn fetch_proposals_by_type(&self, kind: ProposalType) -> Result<Vec<Proposal>, Error> {
        self.filter(|proposal| proposal.kind == kind)
    }

    async fn fetch_proposals_by_campaign(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Vec<Proposal>, Error> {
        self.filter(|proposal| proposal.campaign_id == Some(campaign_id))
    }

    async fn fetch_proposal_by_id(
        &self,
        proposal_id: ProposalId,
    ) -> Result<Option<Proposal>, Error> {
        self.find(|proposal| proposal.id == proposal_id)
    }
}
