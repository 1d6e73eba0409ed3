use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub mod wizard;
pub use endpoints::{CampaignBody, OptionBody};

pub type CampaignId = TypedId<Campaign>;

pub const NICHE_OPTIONS: &[&str] = &[
    "Moda",
    "Beleza",
    "Fitness",
    "Gastronomia",
    "Tecnologia",
    "Viagem",
    "Lifestyle",
    "Games",
    "Educação",
    "Finanças",
];

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: CampaignId,
    pub name: String,
    pub objective: String,
    pub budget: f64,
    pub remaining_budget: f64,
    pub niche: String,
    pub deliverables: Vec<DeliverableType>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub deadline: DateTime<Utc>,
    pub payment_type: PaymentType,
    pub commission_percentage: Option<u8>,
    pub status: CampaignStatus,
    pub approved_creators: u32,
    pub total_candidates: u32,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl TypedIdMarker for Campaign {
    fn tag() -> &'static str {
        "CPN"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Completed,
}

impl CampaignStatus {
    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Rascunho",
            CampaignStatus::Active => "Ativa",
            CampaignStatus::Completed => "Finalizada",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Fixed,
    Barter,
    Commission,
}

impl PaymentType {
    pub const ALL: [PaymentType; 3] = [
        PaymentType::Fixed,
        PaymentType::Barter,
        PaymentType::Commission,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentType::Fixed => "fixed",
            PaymentType::Barter => "barter",
            PaymentType::Commission => "commission",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentType::Fixed => "Fixo",
            PaymentType::Barter => "Permuta",
            PaymentType::Commission => "Comissão (%)",
        }
    }
}

impl Default for PaymentType {
    fn default() -> PaymentType {
        PaymentType::Fixed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliverableType {
    Reels,
    Stories,
    TikTok,
    Shorts,
    Photo,
    Others,
}

impl DeliverableType {
    pub const ALL: [DeliverableType; 6] = [
        DeliverableType::Reels,
        DeliverableType::Stories,
        DeliverableType::TikTok,
        DeliverableType::Shorts,
        DeliverableType::Photo,
        DeliverableType::Others,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeliverableType::Reels => "reels",
            DeliverableType::Stories => "stories",
            DeliverableType::TikTok => "tiktok",
            DeliverableType::Shorts => "shorts",
            DeliverableType::Photo => "photo",
            DeliverableType::Others => "others",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeliverableType::Reels => "Reels",
            DeliverableType::Stories => "Stories",
            DeliverableType::TikTok => "TikTok",
            DeliverableType::Shorts => "Shorts",
            DeliverableType::Photo => "Foto",
            DeliverableType::Others => "Outros",
        }
    }
}
