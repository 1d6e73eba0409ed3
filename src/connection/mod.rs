use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::database::Database;

pub mod db;
pub mod endpoints;

/// Shown when the check succeeds but there is nothing to show.
pub const FALLBACK_TEXT: &str = "Nenhum texto encontrado";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionCheckRow {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ConnectionCheck {
    Loaded { text: String },
    Failed { message: String },
}

/// Reads the probe row once. Failures are reported, not retried.
#[tracing::instrument(skip(db))]
pub async fn check_connection(db: &dyn Database) -> ConnectionCheck {
    match db.connection_checks().fetch_connection_text().await {
        Ok(text) => ConnectionCheck::Loaded {
            text: text
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| FALLBACK_TEXT.to_string()),
        },
        Err(error) => {
            warn!(%error, "connection check failed");
            ConnectionCheck::Failed {
                message: error.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use async_trait::async_trait;

    use super::db::ConnectionCheckStore;
    use super::*;
    use crate::campaign::db::CampaignStore;
    use crate::creator::db::CreatorStore;
    use crate::database::MemoryDatabase;
    use crate::error::Error;
    use crate::proposal::db::ProposalStore;

    struct UnreachableStore;

    #[async_trait]
    impl ConnectionCheckStore for UnreachableStore {
        async fn fetch_connection_text(&self) -> Result<Option<String>, Error> {
            Err(Error::IoError(std::io::Error::new(
                ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    struct UnreachableDatabase {
        inner: MemoryDatabase,
        checks: UnreachableStore,
    }

    #[async_trait]
    impl Database for UnreachableDatabase {
        fn campaigns(&self) -> &dyn CampaignStore {
            self.inner.campaigns()
        }

        fn creators(&self) -> &dyn CreatorStore {
            self.inner.creators()
        }

        fn proposals(&self) -> &dyn ProposalStore {
            self.inner.proposals()
        }

        fn connection_checks(&self) -> &dyn ConnectionCheckStore {
            &self.checks
        }

        async fn clear_fixtures(&self) -> Result<(), Error> {
            self.inner.clear_fixtures().await
        }
    }

    #[tokio::test]
    async fn configured_text_is_loaded() {
        let db = MemoryDatabase::with_fixtures(Some("Conexão OK".to_string()));

        let check = check_connection(&db).await;

        assert_eq!(
            check,
            ConnectionCheck::Loaded {
                text: "Conexão OK".to_string()
            }
        );
    }

    #[tokio::test]
    async fn missing_row_falls_back() {
        let db = MemoryDatabase::with_fixtures(None);

        let check = check_connection(&db).await;

        assert_eq!(
            check,
            ConnectionCheck::Loaded {
                text: FALLBACK_TEXT.to_string()
            }
        );
    }

    #[tokio::test]
    async fn empty_text_falls_back() {
        let db = MemoryDatabase::with_fixtures(Some(String::new()));

        let check = check_connection(&db).await;

        assert_eq!(
            check,
            ConnectionCheck::Loaded {
                text: FALLBACK_TEXT.to_string()
            }
        );
    }

    #[tokio::test]
    async fn store_errors_are_reported() {
        let db = UnreachableDatabase {
            inner: MemoryDatabase::new(),
            checks: UnreachableStore,
        };

        let check = check_connection(&db).await;

        assert_eq!(
            check,
            ConnectionCheck::Failed {
                message: "connection refused".to_string()
            }
        );
    }

    #[test]
    fn checks_serialize_with_state_tag() {
        let failed = serde_json::to_value(ConnectionCheck::Failed {
            message: "timeout".to_string(),
        })
        .unwrap();

        assert_eq!(
            failed,
            serde_json::json!({ "state": "failed", "message": "timeout" })
        );
    }
}
