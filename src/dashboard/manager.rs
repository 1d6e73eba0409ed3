use crate::campaign::{manager as campaign_manager, Campaign};
use crate::database::Database;
use crate::error::Error;
use crate::proposal::manager as proposal_manager;

use super::{BrandStats, CreatorStats, DASHBOARD_CAMPAIGNS};

#[derive(Clone, Debug)]
pub struct BrandDashboard {
    pub stats: BrandStats,
    pub recent_campaigns: Vec<Campaign>,
}

#[derive(Clone, Debug)]
pub struct CreatorDashboard {
    pub stats: CreatorStats,
    pub active_campaigns: Vec<Campaign>,
}

#[tracing::instrument(skip(db))]
pub async fn get_brand_dashboard(db: &dyn Database) -> Result<BrandDashboard, Error> {
    let campaigns = campaign_manager::get_campaigns(db).await?;
    let proposals = proposal_manager::get_proposals(db).await?;
    let stats = BrandStats::compute(&campaigns, &proposals);

    let recent_campaigns = campaign_manager::get_recent_campaigns(db, DASHBOARD_CAMPAIGNS).await?;

    Ok(BrandDashboard {
        stats,
        recent_campaigns,
    })
}

#[tracing::instrument(skip(db))]
pub async fn get_creator_dashboard(db: &dyn Database) -> Result<CreatorDashboard, Error> {
    let campaigns = campaign_manager::get_campaigns(db).await?;
    let proposals = proposal_manager::get_proposals(db).await?;
    let stats = CreatorStats::compute(&campaigns, &proposals);

    let mut active_campaigns = campaign_manager::get_active_campaigns(db).await?;
    active_campaigns.truncate(DASHBOARD_CAMPAIGNS);

    Ok(CreatorDashboard {
        stats,
        active_campaigns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::CampaignStatus;
    use crate::database::MemoryDatabase;

    #[tokio::test]
    async fn brand_dashboard_lists_three_campaigns() {
        let db = MemoryDatabase::with_fixtures(None);

        let dashboard = get_brand_dashboard(&db).await.unwrap();

        assert_eq!(dashboard.recent_campaigns.len(), 3);
        assert_eq!(dashboard.stats.total_campaigns, 6);
    }

    #[tokio::test]
    async fn creator_dashboard_lists_only_active_campaigns() {
        let db = MemoryDatabase::with_fixtures(None);

        let dashboard = get_creator_dashboard(&db).await.unwrap();

        assert!(dashboard.active_campaigns.len() <= 3);
        assert!(dashboard
            .active_campaigns
            .iter()
            .all(|campaign| campaign.status == CampaignStatus::Active));
    }

    #[tokio::test]
    async fn dashboards_work_on_an_empty_database() {
        let db = MemoryDatabase::new();

        let brand = get_brand_dashboard(&db).await.unwrap();
        let creator = get_creator_dashboard(&db).await.unwrap();

        assert!(brand.recent_campaigns.is_empty());
        assert_eq!(creator.stats, CreatorStats::default());
    }
}
