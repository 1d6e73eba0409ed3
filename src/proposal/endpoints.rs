use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::manager::{self, ProposalSubmission};
use super::{
    Proposal, ProposalAction, ProposalId, ProposalStatus, ProposalType, ReviewDecision,
    StatusFilter,
};
use crate::campaign::{self, CampaignBody, CampaignId, DeliverableType, OptionBody};
use crate::creator::{self, CreatorBody, CreatorId};
use crate::database::Database;
use crate::error::Error;
use crate::format::format_currency;
use crate::notification::ActionBody;
use crate::session::{BrandSession, CreatorSession};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProposalQuery {
    #[serde(default)]
    pub status: StatusFilter,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProposalBody {
    pub id: ProposalId,
    pub campaign_id: Option<CampaignId>,
    pub campaign_name: Option<String>,
    pub creator_id: CreatorId,
    pub creator_name: String,
    pub creator_avatar: String,
    pub message: String,
    pub creative_idea: String,
    pub deliverables: Vec<OptionBody>,
    pub proposed_value: f64,
    pub proposed_value_display: String,
    pub portfolio_url: Option<String>,
    pub status: ProposalStatus,
    pub status_label: &'static str,
    #[serde(rename = "type")]
    pub kind: ProposalType,
    pub created_at: DateTime<Utc>,
}

impl ProposalBody {
    pub fn render(proposal: Proposal) -> ProposalBody {
        ProposalBody {
            id: proposal.id,
            campaign_id: proposal.campaign_id,
            campaign_name: proposal.campaign_name,
            creator_id: proposal.creator_id,
            creator_name: proposal.creator_name,
            creator_avatar: proposal.creator_avatar,
            message: proposal.message,
            creative_idea: proposal.creative_idea,
            deliverables: proposal
                .deliverables
                .into_iter()
                .map(OptionBody::deliverable)
                .collect(),
            proposed_value: proposal.proposed_value,
            proposed_value_display: format_currency(proposal.proposed_value),
            portfolio_url: proposal.portfolio_url,
            status: proposal.status,
            status_label: proposal.status.label(),
            kind: proposal.kind,
            created_at: proposal.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CollabBody {
    #[serde(flatten)]
    pub proposal: ProposalBody,
    pub creator: Option<CreatorBody>,
}

impl CollabBody {
    pub async fn render(db: &dyn Database, proposal: Proposal) -> Result<CollabBody, Error> {
        let creator = creator::manager::get_creator_by_id(db, proposal.creator_id)
            .await?
            .map(CreatorBody::render);

        Ok(CollabBody {
            proposal: ProposalBody::render(proposal),
            creator,
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CollabsBody {
    pub pending: Vec<CollabBody>,
    pub approved: Vec<CollabBody>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ApplyBody {
    pub campaign: CampaignBody,
    pub deliverable_options: Vec<OptionBody>,
}

#[get("/brand/proposals")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_brand_proposals(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
    query: Query<ProposalQuery>,
) -> Result<Json<Vec<ProposalBody>>, Error> {
    let proposals = manager::get_brand_proposals(&***db, query.status).await?;

    Ok(Json(proposals.into_iter().map(ProposalBody::render).collect()))
}

#[post("/brand/proposals/{proposal_id}/{action}")]
#[tracing::instrument(skip(db, _session))]
pub async fn respond_to_brand_proposal(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
    params: Path<(ProposalId, ProposalAction)>,
) -> Result<Json<ActionBody>, Error> {
    let (proposal_id, action) = params.into_inner();

    let notification = manager::respond_to_brand_proposal(&***db, proposal_id, action).await?;

    Ok(Json(ActionBody::notify(notification)))
}

#[get("/brand/collabs")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_collabs(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
) -> Result<Json<CollabsBody>, Error> {
    let collabs = manager::get_collabs(&***db).await?;

    let mut pending = vec![];
    for proposal in collabs.pending {
        pending.push(CollabBody::render(&***db, proposal).await?);
    }

    let mut approved = vec![];
    for proposal in collabs.approved {
        approved.push(CollabBody::render(&***db, proposal).await?);
    }

    Ok(Json(CollabsBody { pending, approved }))
}

#[post("/brand/collabs/{proposal_id}/{decision}")]
#[tracing::instrument(skip(db, _session))]
pub async fn review_collab(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
    params: Path<(ProposalId, ReviewDecision)>,
) -> Result<Json<ActionBody>, Error> {
    let (proposal_id, decision) = params.into_inner();

    let notification = manager::review_collab(&***db, proposal_id, decision).await?;

    Ok(Json(ActionBody::notify(notification)))
}

#[get("/creator/proposals")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_creator_proposals(
    _session: CreatorSession,
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<ProposalBody>>, Error> {
    let proposals = manager::get_proposals(&***db).await?;

    Ok(Json(proposals.into_iter().map(ProposalBody::render).collect()))
}

#[post("/creator/proposals/{proposal_id}/{action}")]
#[tracing::instrument(skip(db, _session))]
pub async fn respond_as_creator(
    _session: CreatorSession,
    db: Data<Box<dyn Database>>,
    params: Path<(ProposalId, ProposalAction)>,
) -> Result<Json<ActionBody>, Error> {
    let (proposal_id, action) = params.into_inner();

    let notification = manager::respond_as_creator(&***db, proposal_id, action).await?;

    Ok(Json(ActionBody::notify(notification)))
}

#[get("/creator/campaigns/{campaign_id}/apply")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_apply_form(
    _session: CreatorSession,
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<ApplyBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign =
        campaign::manager::expect_campaign(&***db, &campaign_id, "/creator/campaigns").await?;

    Ok(Json(ApplyBody {
        campaign: CampaignBody::render(campaign),
        deliverable_options: DeliverableType::ALL
            .iter()
            .copied()
            .map(OptionBody::deliverable)
            .collect(),
    }))
}

#[post("/creator/campaigns/{campaign_id}/apply")]
#[tracing::instrument(skip(db, _session, body))]
pub async fn submit_proposal(
    _session: CreatorSession,
    db: Data<Box<dyn Database>>,
    params: Path<String>,
    body: Json<ProposalSubmission>,
) -> Result<Json<ActionBody>, Error> {
    let campaign_id = params.into_inner();

    let notification = manager::submit_proposal(&***db, &campaign_id, body.into_inner()).await?;

    Ok(Json(ActionBody::redirect(notification, "/creator/proposals")))
}
