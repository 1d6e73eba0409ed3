use serde::Serialize;

use crate::session::{self, UserType};

pub mod endpoints;
pub use endpoints::OnboardingBody;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RedirectBody {
    pub redirect_to: String,
}

impl RedirectBody {
    pub fn to(path: impl Into<String>) -> RedirectBody {
        RedirectBody {
            redirect_to: path.into(),
        }
    }
}

/// Every page a client can show. Ids in paths are kept as written; pages
/// decide for themselves whether they name anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Route {
    Onboarding,
    BrandDashboard,
    BrandCampaigns,
    CreateCampaign,
    CampaignManagement { campaign_id: String },
    BrandCandidates,
    BrandProposals,
    ApproveCollabs,
    BrandProfile,
    BrandProfileSettings,
    CreatorDashboard,
    CreatorCampaigns,
    SendProposal { campaign_id: String },
    CreatorProposals,
    CreatorProfile,
    CreatorProfileSettings,
}

impl Route {
    /// Matches a client path, ignoring any query, fragment or trailing
    /// slash.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(&['?', '#'][..]).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Onboarding,
            ["brand", "dashboard"] => Route::BrandDashboard,
            ["brand", "campaigns"] => Route::BrandCampaigns,
            ["brand", "campaigns", "new"] => Route::CreateCampaign,
            ["brand", "campaigns", id] => Route::CampaignManagement {
                campaign_id: id.to_string(),
            },
            ["brand", "candidates"] => Route::BrandCandidates,
            ["brand", "proposals"] => Route::BrandProposals,
            ["brand", "collabs"] => Route::ApproveCollabs,
            ["brand", "profile"] => Route::BrandProfile,
            ["brand", "profile", "settings"] => Route::BrandProfileSettings,
            ["creator", "dashboard"] => Route::CreatorDashboard,
            ["creator", "campaigns"] => Route::CreatorCampaigns,
            ["creator", "campaigns", id, "apply"] => Route::SendProposal {
                campaign_id: id.to_string(),
            },
            ["creator", "proposals"] => Route::CreatorProposals,
            ["creator", "profile"] => Route::CreatorProfile,
            ["creator", "profile", "settings"] => Route::CreatorProfileSettings,
            _ => return None,
        };

        Some(route)
    }

    pub fn required_role(&self) -> Option<UserType> {
        match self {
            Route::Onboarding => None,
            Route::BrandDashboard
            | Route::BrandCampaigns
            | Route::CreateCampaign
            | Route::CampaignManagement { .. }
            | Route::BrandCandidates
            | Route::BrandProposals
            | Route::ApproveCollabs
            | Route::BrandProfile
            | Route::BrandProfileSettings => Some(UserType::Brand),
            Route::CreatorDashboard
            | Route::CreatorCampaigns
            | Route::SendProposal { .. }
            | Route::CreatorProposals
            | Route::CreatorProfile
            | Route::CreatorProfileSettings => Some(UserType::Creator),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Resolution {
    Render { route: Route },
    Redirect { redirect_to: String },
    NotFound,
}

/// What a client with `role` gets when it visits `path`.
pub fn resolve(path: &str, role: Option<UserType>) -> Resolution {
    let route = match Route::parse(path) {
        Some(route) => route,
        None => return Resolution::NotFound,
    };

    let required = match route.required_role() {
        Some(required) => required,
        None => {
            return match role {
                Some(role) => Resolution::Redirect {
                    redirect_to: role.dashboard_path().to_string(),
                },
                None => Resolution::Render { route },
            }
        }
    };

    match session::guard(required, role) {
        Ok(_) => Resolution::Render { route },
        Err(error) => Resolution::Redirect {
            redirect_to: error
                .redirect_to()
                .unwrap_or_else(|| session::landing_path(role).to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUARDED: &[&str] = &[
        "/brand/dashboard",
        "/brand/campaigns",
        "/brand/campaigns/new",
        "/brand/campaigns/CPN-123",
        "/brand/candidates",
        "/brand/proposals",
        "/brand/collabs",
        "/brand/profile",
        "/brand/profile/settings",
        "/creator/dashboard",
        "/creator/campaigns",
        "/creator/campaigns/CPN-123/apply",
        "/creator/proposals",
        "/creator/profile",
        "/creator/profile/settings",
    ];

    fn redirect(path: &str) -> Resolution {
        Resolution::Redirect {
            redirect_to: path.to_string(),
        }
    }

    #[test]
    fn every_page_path_parses() {
        for path in GUARDED {
            assert!(Route::parse(path).is_some(), "{}", path);
        }
        assert_eq!(Route::parse("/").unwrap(), Route::Onboarding);
        assert_eq!(
            Route::parse("/creator/campaigns/CPN-123/apply").unwrap(),
            Route::SendProposal {
                campaign_id: "CPN-123".to_string()
            }
        );
    }

    #[test]
    fn new_is_not_a_campaign_id() {
        assert_eq!(
            Route::parse("/brand/campaigns/new").unwrap(),
            Route::CreateCampaign
        );
    }

    #[test]
    fn query_and_trailing_slash_are_ignored() {
        assert_eq!(
            Route::parse("/brand/proposals/?status=pending").unwrap(),
            Route::BrandProposals
        );
    }

    #[test]
    fn guarded_paths_without_role_go_to_selector() {
        for path in GUARDED {
            assert_eq!(resolve(path, None), redirect("/"), "{}", path);
        }
    }

    #[test]
    fn guarded_paths_of_other_role_go_to_own_dashboard() {
        for path in GUARDED {
            let required = Route::parse(path).unwrap().required_role().unwrap();
            let other = match required {
                UserType::Brand => UserType::Creator,
                UserType::Creator => UserType::Brand,
            };

            assert_eq!(
                resolve(path, Some(other)),
                redirect(other.dashboard_path()),
                "{}",
                path
            );
            assert!(matches!(
                resolve(path, Some(required)),
                Resolution::Render { .. }
            ));
        }
    }

    #[test]
    fn root_renders_selector_or_redirects_to_dashboard() {
        assert_eq!(
            resolve("/", None),
            Resolution::Render {
                route: Route::Onboarding
            }
        );
        assert_eq!(
            resolve("/", Some(UserType::Brand)),
            redirect("/brand/dashboard")
        );
        assert_eq!(
            resolve("/", Some(UserType::Creator)),
            redirect("/creator/dashboard")
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(resolve("/admin", Some(UserType::Brand)), Resolution::NotFound);
        assert_eq!(resolve("/brand/unknown", None), Resolution::NotFound);
        assert_eq!(
            resolve("/creator/campaigns/CPN-1/edit", None),
            Resolution::NotFound
        );
    }

    #[test]
    fn resolutions_serialize_with_outcome_tag() {
        let value = serde_json::to_value(Resolution::Render {
            route: Route::SendProposal {
                campaign_id: "CPN-1".to_string(),
            },
        })
        .unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "outcome": "render",
                "route": { "page": "send-proposal", "campaign_id": "CPN-1" }
            })
        );
    }
}
