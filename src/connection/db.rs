use async_trait::async_trait;
use mongodb::bson;
use mongodb::options::FindOneOptions;

use crate::database::{MemoryStore, MongoConnectionCheckStore};
use crate::error::Error;

use super::ConnectionCheckRow;

#[async_trait]
pub trait ConnectionCheckStore: Send + Sync {
    /// The `text` of the first probe row, if there is one.
    async fn fetch_connection_text(&self) -> Result<Option<String>, Error>;
}

#[async_trait]
impl ConnectionCheckStore for MongoConnectionCheckStore {
    #[tracing::instrument(skip(self))]
    async fn fetch_connection_text(&self) -> Result<Option<String>, Error> {
        let options = FindOneOptions::builder()
            .projection(bson::doc! { "_id": 0, "text": 1 })
            .build();

        let row: Option<ConnectionCheckRow> = self.find_one(bson::doc! {}, options).await?;

        Ok(row.and_then(|row| row.text))
    }
}

#[async_trait]
impl ConnectionCheckStore for MemoryStore<ConnectionCheckRow> {
    async fn fetch_connection_text(&self) -> Result<Option<String>, Error> {
        Ok(self.find(|_| true)?.and_then(|row| row.text))
    }
}
