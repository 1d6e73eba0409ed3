use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::CreatorBody;

pub type CreatorId = TypedId<Creator>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Creator {
    #[serde(rename = "_id")]
    pub id: CreatorId,
    pub name: String,
    pub avatar: String,
    pub followers: i64,
    pub engagement_rate: f64,
    pub niche: String,
    pub bio: String,
}

impl TypedIdMarker for Creator {
    fn tag() -> &'static str {
        "CRT"
    }
}
