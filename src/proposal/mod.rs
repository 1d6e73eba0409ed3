use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::{CampaignId, DeliverableType};
use crate::creator::CreatorId;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::ProposalBody;

pub type ProposalId = TypedId<Proposal>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Proposal {
    #[serde(rename = "_id")]
    pub id: ProposalId,
    pub campaign_id: Option<CampaignId>,
    pub campaign_name: Option<String>,
    pub creator_id: CreatorId,
    pub creator_name: String,
    pub creator_avatar: String,
    pub message: String,
    pub creative_idea: String,
    pub deliverables: Vec<DeliverableType>,
    pub proposed_value: f64,
    pub portfolio_url: Option<String>,
    pub status: ProposalStatus,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: ProposalType,
}

impl TypedIdMarker for Proposal {
    fn tag() -> &'static str {
        "PRP"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
    Negotiating,
}

impl ProposalStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProposalStatus::Pending => "Pendente",
            ProposalStatus::Accepted => "Aceita",
            ProposalStatus::Rejected => "Recusada",
            ProposalStatus::Negotiating => "Negociando",
        }
    }
}

/// `Brand` proposals go from a creator to a brand's campaign; `Creator`
/// proposals are collaborations between two creators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalType {
    Brand,
    Creator,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Pending,
    Accepted,
    Rejected,
    Negotiating,
}

impl StatusFilter {
    pub fn matches(self, status: ProposalStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ProposalStatus::Pending,
            StatusFilter::Accepted => status == ProposalStatus::Accepted,
            StatusFilter::Rejected => status == ProposalStatus::Rejected,
            StatusFilter::Negotiating => status == ProposalStatus::Negotiating,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> StatusFilter {
        StatusFilter::All
    }
}

/// What a brand can do with a candidate, a campaign applicant or a collab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// What either side can do with a proposal addressed to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalAction {
    Accept,
    Reject,
    Negotiate,
}
