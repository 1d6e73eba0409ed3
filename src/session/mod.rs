use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::wizard::CampaignDraft;
use crate::error::Error;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod endpoints;
pub mod extract;
pub mod store;
pub use endpoints::{SelectRoleBody, SessionBody};
pub use extract::{BrandSession, CreatorSession, CurrentSession, RoleSession};
pub use store::SessionStore;

pub const SESSION_COOKIE: &str = "inbazz_session";

pub type SessionId = TypedId<Session>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Brand,
    Creator,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Brand => "brand",
            UserType::Creator => "creator",
        }
    }

    pub fn dashboard_path(self) -> &'static str {
        match self {
            UserType::Brand => "/brand/dashboard",
            UserType::Creator => "/creator/dashboard",
        }
    }
}

/// Where a client with the given role lands: its dashboard, or the role
/// selector when no role is chosen.
pub fn landing_path(role: Option<UserType>) -> &'static str {
    match role {
        Some(role) => role.dashboard_path(),
        None => "/",
    }
}

/// Admits a request for a page owned by `required`, or names where the
/// client should go instead.
pub fn guard(required: UserType, role: Option<UserType>) -> Result<UserType, Error> {
    let current = role.ok_or(Error::RoleNotSelected)?;
    if current != required {
        return Err(Error::RoleMismatch { required, current });
    }

    Ok(current)
}

#[derive(Clone, Debug)]
pub struct Session {
    pub id: SessionId,
    pub role: Option<UserType>,
    pub draft: Option<CampaignDraft>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Session {
        Session {
            id: SessionId::new(),
            role: None,
            draft: None,
            created_at: Utc::now(),
        }
    }

    pub fn require(&self, required: UserType) -> Result<UserType, Error> {
        guard(required, self.role)
    }

    /// Switching role discards whatever the previous role left in progress.
    pub fn select_role(&mut self, role: Option<UserType>) {
        if self.role != role {
            self.draft = None;
        }
        self.role = role;
    }
}

impl TypedIdMarker for Session {
    fn tag() -> &'static str {
        "SES"
    }
}
