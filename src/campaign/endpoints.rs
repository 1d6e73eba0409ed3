use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, patch, post};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::wizard::{CampaignDraft, DraftField, DraftPatch, WizardStep};
use super::{
    manager, Campaign, CampaignId, CampaignStatus, DeliverableType, PaymentType, NICHE_OPTIONS,
};
use crate::creator::{self, CreatorBody};
use crate::database::Database;
use crate::error::Error;
use crate::format::{format_currency, format_date};
use crate::navigation::RedirectBody;
use crate::notification::{ActionBody, Notification};
use crate::proposal::{self, ProposalBody, ProposalId, ReviewDecision};
use crate::session::{BrandSession, CreatorSession, Session, SessionStore};

/// A selectable value and the label shown for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionBody {
    pub id: String,
    pub label: String,
}

impl OptionBody {
    pub fn deliverable(deliverable: DeliverableType) -> OptionBody {
        OptionBody {
            id: deliverable.as_str().to_string(),
            label: deliverable.label().to_string(),
        }
    }

    pub fn payment(payment_type: PaymentType) -> OptionBody {
        OptionBody {
            id: payment_type.as_str().to_string(),
            label: payment_type.label().to_string(),
        }
    }

    pub fn niche(niche: &str) -> OptionBody {
        OptionBody {
            id: niche.to_string(),
            label: niche.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CampaignBody {
    pub id: CampaignId,
    pub name: String,
    pub objective: String,
    pub budget: f64,
    pub remaining_budget: f64,
    pub budget_display: String,
    pub niche: String,
    pub deliverables: Vec<OptionBody>,
    pub deadline: DateTime<Utc>,
    pub deadline_display: String,
    pub payment_type: PaymentType,
    pub payment_label: &'static str,
    pub commission_percentage: Option<u8>,
    pub status: CampaignStatus,
    pub status_label: &'static str,
    pub approved_creators: u32,
    pub total_candidates: u32,
    pub created_at: DateTime<Utc>,
}

impl CampaignBody {
    pub fn render(campaign: Campaign) -> CampaignBody {
        CampaignBody {
            id: campaign.id,
            budget_display: format!(
                "{} / {}",
                format_currency(campaign.remaining_budget),
                format_currency(campaign.budget)
            ),
            deadline_display: format_date(campaign.deadline.date_naive()),
            deliverables: campaign
                .deliverables
                .iter()
                .copied()
                .map(OptionBody::deliverable)
                .collect(),
            payment_label: campaign.payment_type.label(),
            status_label: campaign.status.label(),
            name: campaign.name,
            objective: campaign.objective,
            budget: campaign.budget,
            remaining_budget: campaign.remaining_budget,
            niche: campaign.niche,
            deadline: campaign.deadline,
            payment_type: campaign.payment_type,
            commission_percentage: campaign.commission_percentage,
            status: campaign.status,
            approved_creators: campaign.approved_creators,
            total_candidates: campaign.total_candidates,
            created_at: campaign.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CampaignManagementBody {
    pub campaign: CampaignBody,
    pub proposals: Vec<ProposalBody>,
    pub approved_creators: Vec<CreatorBody>,
}

#[derive(Clone, Debug, Serialize)]
pub struct WizardStepBody {
    pub id: WizardStep,
    pub number: usize,
    pub title: &'static str,
}

impl WizardStepBody {
    fn render(step: WizardStep) -> WizardStepBody {
        WizardStepBody {
            id: step,
            number: step.number(),
            title: step.title(),
        }
    }
}

/// Read-only summary shown on the review step.
#[derive(Clone, Debug, Serialize)]
pub struct DraftSummaryBody {
    pub name: String,
    pub objective: String,
    pub budget_display: Option<String>,
    pub niche: Option<String>,
    pub deliverables: Vec<OptionBody>,
    pub deadline_display: Option<String>,
    pub payment_label: &'static str,
    pub commission_percentage: Option<u8>,
}

impl DraftSummaryBody {
    fn render(draft: &CampaignDraft) -> DraftSummaryBody {
        DraftSummaryBody {
            name: draft.name.clone(),
            objective: draft.objective.clone(),
            budget_display: draft.budget.map(format_currency),
            niche: draft.niche.clone(),
            deliverables: draft
                .deliverables
                .iter()
                .copied()
                .map(OptionBody::deliverable)
                .collect(),
            deadline_display: draft.deadline.map(format_date),
            payment_label: draft.payment_type.label(),
            commission_percentage: draft.commission_percentage,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct WizardBody {
    pub step: WizardStepBody,
    pub steps: Vec<WizardStepBody>,
    pub visible_fields: Vec<DraftField>,
    pub draft: CampaignDraft,
    pub summary: Option<DraftSummaryBody>,
    pub niche_options: Vec<OptionBody>,
    pub deliverable_options: Vec<OptionBody>,
    pub payment_options: Vec<OptionBody>,
}

impl WizardBody {
    pub fn render(draft: CampaignDraft) -> WizardBody {
        let summary = match draft.step {
            WizardStep::Review => Some(DraftSummaryBody::render(&draft)),
            _ => None,
        };

        WizardBody {
            step: WizardStepBody::render(draft.step),
            steps: WizardStep::ALL
                .iter()
                .copied()
                .map(WizardStepBody::render)
                .collect(),
            visible_fields: draft.visible_fields(),
            summary,
            niche_options: NICHE_OPTIONS.iter().copied().map(OptionBody::niche).collect(),
            deliverable_options: DeliverableType::ALL
                .iter()
                .copied()
                .map(OptionBody::deliverable)
                .collect(),
            payment_options: PaymentType::ALL
                .iter()
                .copied()
                .map(OptionBody::payment)
                .collect(),
            draft,
        }
    }
}

/// Runs `change` against the brand's draft, starting one if needed, and
/// stores the result only when the change succeeds.
fn update_draft<F>(
    sessions: &SessionStore,
    mut session: Session,
    change: F,
) -> Result<CampaignDraft, Error>
where
    F: FnOnce(&mut CampaignDraft) -> Result<(), Error>,
{
    let mut draft = session.draft.take().unwrap_or_default();
    change(&mut draft)?;

    session.draft = Some(draft.clone());
    sessions.save(session)?;

    Ok(draft)
}

#[get("/brand/campaigns")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_brand_campaigns(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager::get_campaigns(&***db).await?;

    Ok(Json(campaigns.into_iter().map(CampaignBody::render).collect()))
}

#[get("/brand/campaigns/new")]
#[tracing::instrument(skip(sessions, session))]
pub async fn get_wizard(
    session: BrandSession,
    sessions: Data<SessionStore>,
) -> Result<Json<WizardBody>, Error> {
    let draft = update_draft(&sessions, session.into_inner(), |_| Ok(()))?;

    Ok(Json(WizardBody::render(draft)))
}

#[patch("/brand/campaigns/new")]
#[tracing::instrument(skip(sessions, session))]
pub async fn update_wizard(
    session: BrandSession,
    sessions: Data<SessionStore>,
    body: Json<DraftPatch>,
) -> Result<Json<WizardBody>, Error> {
    let patch = body.into_inner();

    let draft = update_draft(&sessions, session.into_inner(), |draft| draft.apply(patch))?;

    Ok(Json(WizardBody::render(draft)))
}

#[post("/brand/campaigns/new/next")]
#[tracing::instrument(skip(sessions, session))]
pub async fn advance_wizard(
    session: BrandSession,
    sessions: Data<SessionStore>,
) -> Result<Json<WizardBody>, Error> {
    let draft = update_draft(&sessions, session.into_inner(), |draft| {
        draft.advance().map(|_| ())
    })?;

    Ok(Json(WizardBody::render(draft)))
}

#[post("/brand/campaigns/new/back")]
#[tracing::instrument(skip(sessions, session))]
pub async fn retreat_wizard(
    session: BrandSession,
    sessions: Data<SessionStore>,
) -> Result<Json<WizardBody>, Error> {
    let draft = update_draft(&sessions, session.into_inner(), |draft| {
        draft.retreat().map(|_| ())
    })?;

    Ok(Json(WizardBody::render(draft)))
}

#[post("/brand/campaigns/new/submit")]
#[tracing::instrument(skip(sessions, session))]
pub async fn submit_wizard(
    session: BrandSession,
    sessions: Data<SessionStore>,
) -> Result<Json<ActionBody>, Error> {
    let mut session = session.into_inner();

    let draft = session.draft.take().unwrap_or_default();
    draft.ensure_reviewable()?;
    tracing::debug!(name = %draft.name, "campaign draft submitted");

    sessions.save(session)?;

    Ok(Json(ActionBody::redirect(
        Notification::new("Campanha criada!", "Sua campanha foi criada com sucesso."),
        "/brand/campaigns",
    )))
}

#[delete("/brand/campaigns/new")]
#[tracing::instrument(skip(sessions, session))]
pub async fn discard_wizard(
    session: BrandSession,
    sessions: Data<SessionStore>,
) -> Result<Json<RedirectBody>, Error> {
    let mut session = session.into_inner();

    session.draft = None;
    sessions.save(session)?;

    Ok(Json(RedirectBody::to("/brand/campaigns")))
}

#[get("/brand/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_campaign_management(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<CampaignManagementBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign = manager::expect_campaign(&***db, &campaign_id, "/brand/campaigns").await?;
    let proposals = proposal::manager::get_campaign_proposals(&***db, &campaign).await?;
    let approved_creators = creator::manager::get_approved_creators(&***db, &campaign).await?;

    Ok(Json(CampaignManagementBody {
        campaign: CampaignBody::render(campaign),
        proposals: proposals.into_iter().map(ProposalBody::render).collect(),
        approved_creators: approved_creators
            .into_iter()
            .map(CreatorBody::render)
            .collect(),
    }))
}

#[post("/brand/campaigns/{campaign_id}/proposals/{proposal_id}/{decision}")]
#[tracing::instrument(skip(db, _session))]
pub async fn review_campaign_applicant(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
    params: Path<(String, ProposalId, ReviewDecision)>,
) -> Result<Json<ActionBody>, Error> {
    let (campaign_id, proposal_id, decision) = params.into_inner();

    let campaign = manager::expect_campaign(&***db, &campaign_id, "/brand/campaigns").await?;
    let notification =
        proposal::manager::review_campaign_applicant(&***db, &campaign, proposal_id, decision)
            .await?;

    Ok(Json(ActionBody::notify(notification)))
}

#[delete("/brand/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db, _session))]
pub async fn delete_campaign(
    _session: BrandSession,
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<ActionBody>, Error> {
    let campaign_id = params.into_inner();

    let notification = manager::delete_campaign(&***db, &campaign_id).await?;

    Ok(Json(ActionBody::redirect(notification, "/brand/campaigns")))
}

#[get("/creator/campaigns")]
#[tracing::instrument(skip(db, _session))]
pub async fn get_creator_campaigns(
    _session: CreatorSession,
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager::get_active_campaigns(&***db).await?;

    Ok(Json(campaigns.into_iter().map(CampaignBody::render).collect()))
}
