use serde::Serialize;

use crate::campaign::{Campaign, CampaignStatus};
use crate::proposal::{Proposal, ProposalStatus, ProposalType};

pub mod endpoints;
pub mod manager;
pub use endpoints::{BrandDashboardBody, CreatorDashboardBody};

/// How many campaigns a dashboard lists.
pub const DASHBOARD_CAMPAIGNS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BrandStats {
    pub total_campaigns: u64,
    pub proposals_received: u64,
    pub ongoing_negotiations: u64,
    pub approvals: u64,
    pub completions: u64,
}

impl BrandStats {
    pub fn compute(campaigns: &[Campaign], proposals: &[Proposal]) -> BrandStats {
        BrandStats {
            total_campaigns: campaigns.len() as u64,
            proposals_received: count(proposals, |p| p.kind == ProposalType::Brand),
            ongoing_negotiations: count(proposals, |p| p.status == ProposalStatus::Negotiating),
            approvals: campaigns
                .iter()
                .map(|campaign| u64::from(campaign.approved_creators))
                .sum(),
            completions: count(campaigns, |c| c.status == CampaignStatus::Completed),
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Total de Campanhas",
                value: self.total_campaigns,
            },
            StatCard {
                title: "Propostas Recebidas",
                value: self.proposals_received,
            },
            StatCard {
                title: "Negociações em Andamento",
                value: self.ongoing_negotiations,
            },
            StatCard {
                title: "Criadores Aprovados",
                value: self.approvals,
            },
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreatorStats {
    pub available_campaigns: u64,
    pub proposals_sent: u64,
    pub proposals_received: u64,
    pub ongoing_negotiations: u64,
    pub approvals: u64,
    pub completions: u64,
}

impl CreatorStats {
    pub fn compute(campaigns: &[Campaign], proposals: &[Proposal]) -> CreatorStats {
        CreatorStats {
            available_campaigns: count(campaigns, |c| c.status == CampaignStatus::Active),
            proposals_sent: count(proposals, |p| p.kind == ProposalType::Brand),
            proposals_received: count(proposals, |p| p.kind == ProposalType::Creator),
            ongoing_negotiations: count(proposals, |p| p.status == ProposalStatus::Negotiating),
            approvals: count(proposals, |p| p.status == ProposalStatus::Accepted),
            completions: count(campaigns, |c| c.status == CampaignStatus::Completed),
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Campanhas Disponíveis",
                value: self.available_campaigns,
            },
            StatCard {
                title: "Propostas Enviadas",
                value: self.proposals_sent,
            },
            StatCard {
                title: "Negociações em Andamento",
                value: self.ongoing_negotiations,
            },
            StatCard {
                title: "Aprovações",
                value: self.approvals,
            },
        ]
    }
}

fn count<T, P>(items: &[T], predicate: P) -> u64
where
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).count() as u64
}
