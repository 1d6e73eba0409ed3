use actix_web::get;
use actix_web::web::{Data, Json};
use serde::Serialize;

use super::manager::{self, BrandDashboard, CreatorDashboard};
use super::{BrandStats, CreatorStats, StatCard};
use crate::campaign::CampaignBody;
use crate::database::Database;
use crate::error::Error;
use crate::session::{BrandSession, CreatorSession};

#[derive(Clone, Debug, Serialize)]
pub struct BrandDashboardBody {
    pub stats: BrandStats,
    pub cards: Vec<StatCard>,
    pub recent_campaigns: Vec<CampaignBody>,
}

impl BrandDashboardBody {
    pub fn render(dashboard: BrandDashboard) -> BrandDashboardBody {
        BrandDashboardBody {
            cards: dashboard.stats.cards(),
            stats: dashboard.stats,
            recent_campaigns: dashboard
                .recent_campaigns
                .into_iter()
                .map(CampaignBody::render)
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CreatorDashboardBody {
    pub stats: CreatorStats,
    pub cards: Vec<StatCard>,
    pub active_campaigns: Vec<CampaignBody>,
}

impl CreatorDashboardBody {
    pub fn render(dashboard: CreatorDashboard) -> CreatorDashboardBody {
        CreatorDashboardBody {
            cards: dashboard.stats.cards(),
            stats: dashboard.stats,
            active_campaigns: dashboard
                .active_campaigns
                .into_iter()
                .map(CampaignBody::render)
                .collect(),
        }
    }
}

#[get("/brand/dashboard")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_brand_dashboard(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
) -> Result<Json<BrandDashboardBody>, Error> {
    let dashboard = manager::get_brand_dashboard(&***db).await?;

    Ok(Json(BrandDashboardBody::render(dashboard)))
}

#[get("/creator/dashboard")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_creator_dashboard(
    _session: CreatorSession,
    db: Data<Box<dyn Database>>,
) -> Result<Json<CreatorDashboardBody>, Error> {
    let dashboard = manager::get_creator_dashboard(&***db).await?;

    Ok(Json(CreatorDashboardBody::render(dashboard)))
}
