use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::Collection;

use crate::campaign::db::CampaignStore;
use crate::campaign::Campaign;
use crate::connection::db::ConnectionCheckStore;
use crate::connection::ConnectionCheckRow;
use crate::creator::db::CreatorStore;
use crate::creator::Creator;
use crate::error::Error;
use crate::proposal::db::ProposalStore;
use crate::proposal::Proposal;
use crate::seed;

pub type MongoCampaignStore = Collection<Campaign>;
pub type MongoCreatorStore = Collection<Creator>;
pub type MongoProposalStore = Collection<Proposal>;
pub type MongoConnectionCheckStore = Collection<ConnectionCheckRow>;

#[async_trait]
pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;

    fn creators(&self) -> &dyn CreatorStore;

    fn proposals(&self) -> &dyn ProposalStore;

    fn connection_checks(&self) -> &dyn ConnectionCheckStore;

    /// Empties the collections the fixtures are seeded into. The connection
    /// check rows are written by someone else and stay.
    async fn clear_fixtures(&self) -> Result<(), Error>;
}

#[derive(Debug, Clone)]
pub struct MongoDatabase {
    campaigns: MongoCampaignStore,
    creators: MongoCreatorStore,
    proposals: MongoProposalStore,
    connection_checks: MongoConnectionCheckStore,
}

impl MongoDatabase {
    pub fn new(db: mongodb::Database) -> MongoDatabase {
        MongoDatabase {
            campaigns: db.collection("campaigns"),
            creators: db.collection("creators"),
            proposals: db.collection("proposals"),
            connection_checks: db.collection("connection_check"),
        }
    }
}

#[async_trait]
impl Database for MongoDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }

    fn creators(&self) -> &dyn CreatorStore {
        &self.creators
    }

    fn proposals(&self) -> &dyn ProposalStore {
        &self.proposals
    }

    fn connection_checks(&self) -> &dyn ConnectionCheckStore {
        &self.connection_checks
    }

    #[tracing::instrument(skip(self))]
    async fn clear_fixtures(&self) -> Result<(), Error> {
        self.campaigns.drop(None).await?;
        self.creators.drop(None).await?;
        self.proposals.drop(None).await?;
        Ok(())
    }
}

/// Records held in process memory, in insertion order.
#[derive(Debug)]
pub struct MemoryStore<T>(RwLock<Vec<T>>);

impl<T: Clone> MemoryStore<T> {
    pub fn new(records: Vec<T>) -> MemoryStore<T> {
        MemoryStore(RwLock::new(records))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, Error> {
        self.0
            .read()
            .map_err(|_| Error::ExistentialState("memory store lock was poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, Error> {
        self.0
            .write()
            .map_err(|_| Error::ExistentialState("memory store lock was poisoned".to_string()))
    }

    pub fn all(&self) -> Result<Vec<T>, Error> {
        Ok(self.read()?.clone())
    }

    pub fn find<P>(&self, predicate: P) -> Result<Option<T>, Error>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.read()?.iter().find(|record| predicate(record)).cloned())
    }

    pub fn filter<P>(&self, predicate: P) -> Result<Vec<T>, Error>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self
            .read()?
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }

    pub fn extend(&self, records: &[T]) -> Result<(), Error> {
        self.write()?.extend_from_slice(records);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), Error> {
        self.write()?.clear();
        Ok(())
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> MemoryStore<T> {
        MemoryStore(RwLock::new(Vec::new()))
    }
}

/// Serves the fixtures without an external database. Used when no mongodb
/// uri is configured, and by the tests.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    campaigns: MemoryStore<Campaign>,
    creators: MemoryStore<Creator>,
    proposals: MemoryStore<Proposal>,
    connection_checks: MemoryStore<ConnectionCheckRow>,
}

impl MemoryDatabase {
    pub fn new() -> MemoryDatabase {
        MemoryDatabase::default()
    }

    pub fn with_fixtures(connection_text: Option<String>) -> MemoryDatabase {
        let connection_checks = match connection_text {
            Some(text) => vec![ConnectionCheckRow { text: Some(text) }],
            None => vec![],
        };

        MemoryDatabase {
            campaigns: MemoryStore::new(seed::campaigns()),
            creators: MemoryStore::new(seed::creators()),
            proposals: MemoryStore::new(seed::proposals()),
            connection_checks: MemoryStore::new(connection_checks),
        }
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }

    fn creators(&self) -> &dyn CreatorStore {
        &self.creators
    }

    fn proposals(&self) -> &dyn ProposalStore {
        &self.proposals
    }

    fn connection_checks(&self) -> &dyn ConnectionCheckStore {
        &self.connection_checks
    }

    async fn clear_fixtures(&self) -> Result<(), Error> {
        self.campaigns.clear()?;
        self.creators.clear()?;
        self.proposals.clear()?;
        Ok(())
    }
}
