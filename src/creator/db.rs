use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::{MemoryStore, MongoCreatorStore};
use crate::error::Error;

use super::{Creator, CreatorId};

#[async_trait]
pub trait CreatorStore: Send + Sync {
    async fn insert_creators(&self, creators: &[Creator]) -> Result<(), Error>;

    async fn fetch_creators(&self) -> Result<Vec<Creator>, Error>;

    async fn fetch_creator_by_id(&self, creator_id: CreatorId) -> Result<Option<Creator>, Error>;
}

#[async_trait]
impl CreatorStore for MongoCreatorStore {
    #[tracing::instrument(skip(self, creators))]
    async fn insert_creators(&self, creators: &[Creator]) -> Result<(), Error> {
        if creators.is_empty() {
            return Ok(());
        }

        self.insert_many(creators, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_creators(&self) -> Result<Vec<Creator>, Error> {
        let creators: Vec<Creator> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(creators)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_creator_by_id(&self, creator_id: CreatorId) -> Result<Option<Creator>, Error> {
        let creator: Option<Creator> = self
            .find_one(bson::doc! { "_id": creator_id }, None)
            .await?;

        Ok(creator)
    }
}

#[async_trait]
impl CreatorStore for MemoryStore<Creator> {
    async fn insert_creators(&self, creators: &[Creator]) -> Result<(), Error> {
        self.extend(creators)
    }

    async fn fetch_creators(&self) -> Result<Vec<Creator>, Error> {
        self.all()
    }

    async fn fetch_creator_by_id(&self, creator_id: CreatorId) -> Result<Option<Creator>, Error> {
        self.find(|creator| creator.id == creator_id)
    }
}
