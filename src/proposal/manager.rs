use serde::Deserialize;
use tracing::debug;

use crate::campaign::{manager as campaign_manager, Campaign, DeliverableType};
use crate::database::Database;
use crate::error::Error;
use crate::notification::Notification;

use super::{
    Proposal, ProposalAction, ProposalId, ProposalStatus, ProposalType, ReviewDecision,
    StatusFilter,
};

/// Creator-to-creator collaborations, split the way a brand reviews them.
#[derive(Clone, Debug)]
pub struct Collabs {
    pub pending: Vec<Proposal>,
    pub approved: Vec<Proposal>,
}

/// What a creator fills in when applying to a campaign.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProposalSubmission {
    pub message: String,
    pub creative_idea: String,
    pub deliverables: Vec<DeliverableType>,
    pub proposed_value: Option<f64>,
    pub portfolio_url: Option<String>,
}

#[tracing::instrument(skip(db))]
pub async fn get_proposals(db: &dyn Database) -> Result<Vec<Proposal>, Error> {
    let proposals = db.proposals().fetch_proposals().await?;

    Ok(proposals)
}

#[tracing::instrument(skip(db))]
pub async fn get_brand_proposals(
    db: &dyn Database,
    filter: StatusFilter,
) -> Result<Vec<Proposal>, Error> {
    let proposals = db
        .proposals()
        .fetch_proposals_by_type(ProposalType::Brand)
        .await?
        .into_iter()
        .filter(|proposal| filter.matches(proposal.status))
        .collect();

    Ok(proposals)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_proposals(
    db: &dyn Database,
    campaign: &Campaign,
) -> Result<Vec<Proposal>, Error> {
    let proposals = db
        .proposals()
        .fetch_proposals_by_campaign(campaign.id)
        .await?;

    Ok(proposals)
}

#[tracing::instrument(skip(db))]
pub async fn get_collabs(db: &dyn Database) -> Result<Collabs, Error> {
    let (pending, rest): (Vec<Proposal>, Vec<Proposal>) = db
        .proposals()
        .fetch_proposals_by_type(ProposalType::Creator)
        .await?
        .into_iter()
        .partition(|proposal| proposal.status == ProposalStatus::Pending);

    let approved = rest
        .into_iter()
        .filter(|proposal| proposal.status == ProposalStatus::Accepted)
        .collect();

    Ok(Collabs { pending, approved })
}

/// Fetches a proposal, treating one of a different type as missing so a
/// collab cannot be answered from the brand proposal list and vice versa.
#[tracing::instrument(skip(db))]
pub async fn expect_proposal_by_id(
    db: &dyn Database,
    proposal_id: ProposalId,
    kind: Option<ProposalType>,
) -> Result<Proposal, Error> {
    let proposal = db
        .proposals()
        .fetch_proposal_by_id(proposal_id)
        .await?
        .filter(|proposal| kind.map_or(true, |kind| proposal.kind == kind))
        .ok_or(Error::ProposalNotFound { proposal_id })?;

    Ok(proposal)
}

#[tracing::instrument(skip(db))]
pub async fn respond_to_brand_proposal(
    db: &dyn Database,
    proposal_id: ProposalId,
    action: ProposalAction,
) -> Result<Notification, Error> {
    let proposal = expect_proposal_by_id(db, proposal_id, Some(ProposalType::Brand)).await?;
    let name = proposal.creator_name;

    let notification = match action {
        ProposalAction::Accept => Notification::new(
            "Proposta aceita!",
            format!("A proposta de {} foi aceita.", name),
        ),
        ProposalAction::Reject => Notification::destructive(
            "Proposta recusada",
            format!("A proposta de {} foi recusada.", name),
        ),
        ProposalAction::Negotiate => Notification::new(
            "Negociação iniciada",
            format!("Você iniciou uma negociação com {}.", name),
        ),
    };

    Ok(notification)
}

#[tracing::instrument(skip(db))]
pub async fn review_collab(
    db: &dyn Database,
    proposal_id: ProposalId,
    decision: ReviewDecision,
) -> Result<Notification, Error> {
    let proposal = expect_proposal_by_id(db, proposal_id, Some(ProposalType::Creator)).await?;
    let name = proposal.creator_name;

    let notification = match decision {
        ReviewDecision::Approve => Notification::new(
            "Collab aprovada!",
            format!("A colaboração de {} foi aprovada.", name),
        ),
        ReviewDecision::Reject => Notification::destructive(
            "Collab recusada",
            format!("A colaboração de {} foi recusada.", name),
        ),
    };

    Ok(notification)
}

#[tracing::instrument(skip(db))]
pub async fn review_campaign_applicant(
    db: &dyn Database,
    campaign: &Campaign,
    proposal_id: ProposalId,
    decision: ReviewDecision,
) -> Result<Notification, Error> {
    let proposal = expect_proposal_by_id(db, proposal_id, Some(ProposalType::Brand)).await?;
    if proposal.campaign_id != Some(campaign.id) {
        return Err(Error::ProposalNotFound { proposal_id });
    }

    Ok(applicant_notification(&proposal.creator_name, decision))
}

pub fn applicant_notification(name: &str, decision: ReviewDecision) -> Notification {
    match decision {
        ReviewDecision::Approve => Notification::new(
            "Criador aprovado!",
            format!("{} foi aprovado para a campanha.", name),
        ),
        ReviewDecision::Reject => {
            Notification::destructive("Criador recusado", format!("{} foi recusado.", name))
        }
    }
}

#[tracing::instrument(skip(db))]
pub async fn respond_as_creator(
    db: &dyn Database,
    proposal_id: ProposalId,
    action: ProposalAction,
) -> Result<Notification, Error> {
    expect_proposal_by_id(db, proposal_id, None).await?;

    let notification = match action {
        ProposalAction::Accept => {
            Notification::new("Proposta aceita!", "A proposta foi aceita com sucesso.")
        }
        ProposalAction::Reject => {
            Notification::destructive("Proposta recusada", "A proposta foi recusada.")
        }
        ProposalAction::Negotiate => Notification::new(
            "Negociação iniciada",
            "Entre em contato para negociar os termos.",
        ),
    };

    Ok(notification)
}

/// Accepts a creator's application to a campaign. Nothing is stored; the
/// creator is only told the proposal went out.
#[tracing::instrument(skip(db))]
pub async fn submit_proposal(
    db: &dyn Database,
    campaign_id: &str,
    submission: ProposalSubmission,
) -> Result<Notification, Error> {
    let campaign = campaign_manager::expect_campaign(db, campaign_id, "/creator/campaigns").await?;
    debug!(
        campaign = %campaign.name,
        deliverables = submission.deliverables.len(),
        "proposal submitted"
    );

    Ok(Notification::new(
        "Proposta enviada!",
        "Sua proposta foi enviada com sucesso.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::CampaignId;
    use crate::database::MemoryDatabase;
    use crate::notification::Variant;
    use crate::seed;

    #[tokio::test]
    async fn brand_proposals_only_include_brand_type() {
        let db = MemoryDatabase::with_fixtures(None);

        let proposals = get_brand_proposals(&db, StatusFilter::All).await.unwrap();

        assert_eq!(proposals.len(), 5);
        assert!(proposals
            .iter()
            .all(|proposal| proposal.kind == ProposalType::Brand));
    }

    #[tokio::test]
    async fn brand_proposals_can_be_filtered_by_status() {
        let db = MemoryDatabase::with_fixtures(None);

        let pending = get_brand_proposals(&db, StatusFilter::Pending).await.unwrap();
        let negotiating = get_brand_proposals(&db, StatusFilter::Negotiating)
            .await
            .unwrap();

        let pending_ids: Vec<_> = pending.iter().map(|proposal| proposal.id).collect();
        assert_eq!(
            pending_ids,
            vec![seed::PROPOSAL_MARINA_SUMMER, seed::PROPOSAL_LUCAS_FITNESS]
        );
        assert_eq!(negotiating.len(), 1);
        assert_eq!(negotiating[0].id, seed::PROPOSAL_ANA_SUMMER);
    }

    #[tokio::test]
    async fn collabs_are_split_into_pending_and_approved() {
        let db = MemoryDatabase::with_fixtures(None);

        let collabs = get_collabs(&db).await.unwrap();

        let pending: Vec<_> = collabs.pending.iter().map(|proposal| proposal.id).collect();
        let approved: Vec<_> = collabs.approved.iter().map(|proposal| proposal.id).collect();
        assert_eq!(pending, vec![seed::COLLAB_PEDRO, seed::COLLAB_RAFAEL]);
        assert_eq!(approved, vec![seed::COLLAB_MARINA]);
    }

    #[tokio::test]
    async fn brand_actions_name_the_creator() {
        let db = MemoryDatabase::with_fixtures(None);

        let accepted =
            respond_to_brand_proposal(&db, seed::PROPOSAL_MARINA_SUMMER, ProposalAction::Accept)
                .await
                .unwrap();
        let rejected =
            respond_to_brand_proposal(&db, seed::PROPOSAL_MARINA_SUMMER, ProposalAction::Reject)
                .await
                .unwrap();

        assert_eq!(accepted.title, "Proposta aceita!");
        assert_eq!(accepted.description, "A proposta de Marina Costa foi aceita.");
        assert_eq!(accepted.variant, Variant::Default);
        assert_eq!(rejected.variant, Variant::Destructive);
    }

    #[tokio::test]
    async fn brand_actions_do_not_reach_collabs() {
        let db = MemoryDatabase::with_fixtures(None);

        let result =
            respond_to_brand_proposal(&db, seed::COLLAB_PEDRO, ProposalAction::Accept).await;

        assert_eq!(
            result.unwrap_err(),
            Error::ProposalNotFound {
                proposal_id: seed::COLLAB_PEDRO
            }
        );
    }

    #[tokio::test]
    async fn actions_leave_fixtures_untouched() {
        let db = MemoryDatabase::with_fixtures(None);

        review_collab(&db, seed::COLLAB_PEDRO, ReviewDecision::Approve)
            .await
            .unwrap();
        respond_as_creator(&db, seed::PROPOSAL_LUCAS_FITNESS, ProposalAction::Accept)
            .await
            .unwrap();

        let collab = expect_proposal_by_id(&db, seed::COLLAB_PEDRO, None)
            .await
            .unwrap();
        let proposal = expect_proposal_by_id(&db, seed::PROPOSAL_LUCAS_FITNESS, None)
            .await
            .unwrap();
        assert_eq!(collab.status, ProposalStatus::Pending);
        assert_eq!(proposal.status, ProposalStatus::Pending);
    }

    #[tokio::test]
    async fn applicants_must_belong_to_the_campaign() {
        let db = MemoryDatabase::with_fixtures(None);
        let campaign = campaign_manager::expect_campaign_by_id(
            &db,
            seed::CAMPAIGN_FITNESS_CHALLENGE,
            "/brand/campaigns",
        )
        .await
        .unwrap();

        let result = review_campaign_applicant(
            &db,
            &campaign,
            seed::PROPOSAL_MARINA_SUMMER,
            ReviewDecision::Approve,
        )
        .await;

        assert!(matches!(result, Err(Error::ProposalNotFound { .. })));

        let notification = review_campaign_applicant(
            &db,
            &campaign,
            seed::PROPOSAL_LUCAS_FITNESS,
            ReviewDecision::Approve,
        )
        .await
        .unwrap();
        assert_eq!(
            notification.description,
            "Lucas Ferreira foi aprovado para a campanha."
        );
    }

    #[tokio::test]
    async fn submitting_to_unknown_campaign_is_not_found() {
        let db = MemoryDatabase::with_fixtures(None);
        let campaign_id = CampaignId::new().to_string();

        let result = submit_proposal(&db, &campaign_id, ProposalSubmission::default()).await;

        assert_eq!(
            result.unwrap_err(),
            Error::CampaignNotFound {
                campaign_id,
                back_to: "/creator/campaigns".to_string(),
            }
        );
    }
}
