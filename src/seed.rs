use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::info;

use crate::campaign::{Campaign, CampaignId, CampaignStatus, DeliverableType, PaymentType};
use crate::creator::{Creator, CreatorId};
use crate::database::Database;
use crate::error::Error;
use crate::proposal::{Proposal, ProposalId, ProposalStatus, ProposalType};

pub const CAMPAIGN_SUMMER_LAUNCH: CampaignId =
    CampaignId::from_u128(0x16E77539_8873_4C8A_BCA3_2036010474AD);
pub const CAMPAIGN_FITNESS_CHALLENGE: CampaignId =
    CampaignId::from_u128(0x5EA81D0A_9788_4B8A_82D9_1A0D636B53CE);
pub const CAMPAIGN_NATURAL_SKINCARE: CampaignId =
    CampaignId::from_u128(0x5C903E93_2524_4876_B4C8_816B98D0C77B);
pub const CAMPAIGN_GADGET_REVIEWS: CampaignId =
    CampaignId::from_u128(0x33957EB6_0EE7_487F_A087_E55C335BD63C);
pub const CAMPAIGN_SUMMER_RECIPES: CampaignId =
    CampaignId::from_u128(0xDE3168FD_2730_47A2_BFE0_E53C79DD57A0);
pub const CAMPAIGN_WINTER_DESTINATIONS: CampaignId =
    CampaignId::from_u128(0x8B2F4C1E_61D3_4F0A_9E57_3C1A2B7D9E04);

pub const CREATOR_MARINA: CreatorId = CreatorId::from_u128(0x0A5F4C7B_3E21_4D8C_9B61_7F2E8D3C1A01);
pub const CREATOR_LUCAS: CreatorId = CreatorId::from_u128(0x1B6E5D8C_4F32_4E9D_8C72_6E3F9E4D2B02);
pub const CREATOR_ANA: CreatorId = CreatorId::from_u128(0x2C7F6E9D_5A43_4FAE_9D83_5F4A0F5E3C03);
pub const CREATOR_RAFAEL: CreatorId = CreatorId::from_u128(0x3D8A7FAE_6B54_40BF_AE94_4A5B1A6F4D04);
pub const CREATOR_JULIANA: CreatorId =
    CreatorId::from_u128(0x4E9B8ABF_7C65_41C0_BFA5_3B6C2B7A5E05);
pub const CREATOR_PEDRO: CreatorId = CreatorId::from_u128(0x5FAC9BC0_8D76_42D1_80B6_2C7D3C8B6F06);

pub const PROPOSAL_MARINA_SUMMER: ProposalId =
    ProposalId::from_u128(0x6A1B2C3D_4E5F_4061_8273_94A5B6C7D801);
pub const PROPOSAL_ANA_SUMMER: ProposalId =
    ProposalId::from_u128(0x6A1B2C3D_4E5F_4061_8273_94A5B6C7D802);
pub const PROPOSAL_LUCAS_FITNESS: ProposalId =
    ProposalId::from_u128(0x6A1B2C3D_4E5F_4061_8273_94A5B6C7D803);
pub const PROPOSAL_JULIANA_SKINCARE: ProposalId =
    ProposalId::from_u128(0x6A1B2C3D_4E5F_4061_8273_94A5B6C7D804);
pub const PROPOSAL_RAFAEL_GADGETS: ProposalId =
    ProposalId::from_u128(0x6A1B2C3D_4E5F_4061_8273_94A5B6C7D805);
pub const COLLAB_PEDRO: ProposalId = ProposalId::from_u128(0x7B2C3D4E_5F60_4172_9384_A5B6C7D8E901);
pub const COLLAB_MARINA: ProposalId =
    ProposalId::from_u128(0x7B2C3D4E_5F60_4172_9384_A5B6C7D8E902);
pub const COLLAB_RAFAEL: ProposalId =
    ProposalId::from_u128(0x7B2C3D4E_5F60_4172_9384_A5B6C7D8E903);

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .map(|datetime| Utc.from_utc_datetime(&datetime))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn avatar(image: u32) -> String {
    format!("https://i.pravatar.cc/150?img={}", image)
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: CAMPAIGN_SUMMER_LAUNCH,
            name: "Lançamento Verão 2025".to_string(),
            objective: "Divulgar a nova coleção de verão com foco em peças leves e sustentáveis."
                .to_string(),
            budget: 15000.0,
            remaining_budget: 8500.0,
            niche: "Moda".to_string(),
            deliverables: vec![DeliverableType::Reels, DeliverableType::Stories],
            deadline: day(2025, 3, 31),
            payment_type: PaymentType::Fixed,
            commission_percentage: None,
            status: CampaignStatus::Active,
            approved_creators: 3,
            total_candidates: 12,
            created_at: day(2025, 1, 10),
        },
        Campaign {
            id: CAMPAIGN_FITNESS_CHALLENGE,
            name: "Desafio Fitness 30 Dias".to_string(),
            objective: "Engajar o público em um desafio de treinos diários com a nova linha de suplementos."
                .to_string(),
            budget: 25000.0,
            remaining_budget: 25000.0,
            niche: "Fitness".to_string(),
            deliverables: vec![
                DeliverableType::Reels,
                DeliverableType::TikTok,
                DeliverableType::Shorts,
            ],
            deadline: day(2025, 4, 15),
            payment_type: PaymentType::Commission,
            commission_percentage: Some(15),
            status: CampaignStatus::Active,
            approved_creators: 0,
            total_candidates: 8,
            created_at: day(2025, 1, 5),
        },
        Campaign {
            id: CAMPAIGN_NATURAL_SKINCARE,
            name: "Rotina Skincare Natural".to_string(),
            objective: "Mostrar a rotina de cuidados com a pele usando apenas ingredientes naturais."
                .to_string(),
            budget: 8000.0,
            remaining_budget: 2000.0,
            niche: "Beleza".to_string(),
            deliverables: vec![DeliverableType::Stories, DeliverableType::Photo],
            deadline: day(2025, 2, 28),
            payment_type: PaymentType::Barter,
            commission_percentage: None,
            status: CampaignStatus::Active,
            approved_creators: 4,
            total_candidates: 15,
            created_at: day(2024, 12, 20),
        },
        Campaign {
            id: CAMPAIGN_GADGET_REVIEWS,
            name: "Review Gadgets de Natal".to_string(),
            objective: "Reviews honestos dos gadgets mais vendidos para presentear no Natal."
                .to_string(),
            budget: 12000.0,
            remaining_budget: 0.0,
            niche: "Tecnologia".to_string(),
            deliverables: vec![DeliverableType::Shorts, DeliverableType::Reels],
            deadline: day(2024, 12, 24),
            payment_type: PaymentType::Fixed,
            commission_percentage: None,
            status: CampaignStatus::Completed,
            approved_creators: 5,
            total_candidates: 20,
            created_at: day(2024, 11, 15),
        },
        Campaign {
            id: CAMPAIGN_SUMMER_RECIPES,
            name: "Receitas de Verão".to_string(),
            objective: "Receitas refrescantes usando a nova linha de sucos naturais.".to_string(),
            budget: 6000.0,
            remaining_budget: 6000.0,
            niche: "Gastronomia".to_string(),
            deliverables: vec![
                DeliverableType::Reels,
                DeliverableType::Photo,
                DeliverableType::Others,
            ],
            deadline: day(2025, 5, 10),
            payment_type: PaymentType::Fixed,
            commission_percentage: None,
            status: CampaignStatus::Draft,
            approved_creators: 0,
            total_candidates: 0,
            created_at: day(2024, 11, 1),
        },
        Campaign {
            id: CAMPAIGN_WINTER_DESTINATIONS,
            name: "Destinos de Inverno".to_string(),
            objective: "Apresentar roteiros de inverno pela serra com hospedagem parceira."
                .to_string(),
            budget: 20000.0,
            remaining_budget: 3500.0,
            niche: "Viagem".to_string(),
            deliverables: vec![
                DeliverableType::Reels,
                DeliverableType::Stories,
                DeliverableType::TikTok,
            ],
            deadline: day(2024, 9, 30),
            payment_type: PaymentType::Commission,
            commission_percentage: Some(10),
            status: CampaignStatus::Completed,
            approved_creators: 6,
            total_candidates: 18,
            created_at: day(2024, 8, 1),
        },
    ]
}

pub fn creators() -> Vec<Creator> {
    vec![
        Creator {
            id: CREATOR_MARINA,
            name: "Marina Costa".to_string(),
            avatar: avatar(1),
            followers: 125_000,
            engagement_rate: 4.8,
            niche: "Moda".to_string(),
            bio: "Moda consciente e looks do dia a dia.".to_string(),
        },
        Creator {
            id: CREATOR_LUCAS,
            name: "Lucas Ferreira".to_string(),
            avatar: avatar(12),
            followers: 89_000,
            engagement_rate: 5.2,
            niche: "Fitness".to_string(),
            bio: "Personal trainer compartilhando treinos rápidos em casa.".to_string(),
        },
        Creator {
            id: CREATOR_ANA,
            name: "Ana Beatriz".to_string(),
            avatar: avatar(5),
            followers: 210_000,
            engagement_rate: 3.9,
            niche: "Beleza".to_string(),
            bio: "Skincare, maquiagem e autocuidado sem complicação.".to_string(),
        },
        Creator {
            id: CREATOR_RAFAEL,
            name: "Rafael Lima".to_string(),
            avatar: avatar(14),
            followers: 56_000,
            engagement_rate: 6.1,
            niche: "Tecnologia".to_string(),
            bio: "Reviews de gadgets e dicas de produtividade.".to_string(),
        },
        Creator {
            id: CREATOR_JULIANA,
            name: "Juliana Rocha".to_string(),
            avatar: avatar(9),
            followers: 340_000,
            engagement_rate: 4.2,
            niche: "Gastronomia".to_string(),
            bio: "Receitas práticas para o dia a dia.".to_string(),
        },
        Creator {
            id: CREATOR_PEDRO,
            name: "Pedro Alves".to_string(),
            avatar: avatar(33),
            followers: 1_200_000,
            engagement_rate: 2.8,
            niche: "Viagem".to_string(),
            bio: "Mochilando pelo Brasil e pelo mundo.".to_string(),
        },
    ]
}

pub fn proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: PROPOSAL_MARINA_SUMMER,
            campaign_id: Some(CAMPAIGN_SUMMER_LAUNCH),
            campaign_name: Some("Lançamento Verão 2025".to_string()),
            creator_id: CREATOR_MARINA,
            creator_name: "Marina Costa".to_string(),
            creator_avatar: avatar(1),
            message: "Adoraria fazer parte desse lançamento, a coleção combina com meu público."
                .to_string(),
            creative_idea: "Série de reels mostrando três looks para diferentes ocasiões."
                .to_string(),
            deliverables: vec![DeliverableType::Reels, DeliverableType::Stories],
            proposed_value: 2500.0,
            portfolio_url: Some("https://portfolio.exemplo.com/marina".to_string()),
            status: ProposalStatus::Pending,
            created_at: day(2025, 1, 14),
            kind: ProposalType::Brand,
        },
        Proposal {
            id: PROPOSAL_ANA_SUMMER,
            campaign_id: Some(CAMPAIGN_SUMMER_LAUNCH),
            campaign_name: Some("Lançamento Verão 2025".to_string()),
            creator_id: CREATOR_ANA,
            creator_name: "Ana Beatriz".to_string(),
            creator_avatar: avatar(5),
            message: "Tenho um público que acompanha muito as tendências de verão.".to_string(),
            creative_idea: "Arrume-se comigo com peças da coleção e maquiagem leve.".to_string(),
            deliverables: vec![DeliverableType::Reels],
            proposed_value: 3200.0,
            portfolio_url: None,
            status: ProposalStatus::Negotiating,
            created_at: day(2025, 1, 13),
            kind: ProposalType::Brand,
        },
        Proposal {
            id: PROPOSAL_LUCAS_FITNESS,
            campaign_id: Some(CAMPAIGN_FITNESS_CHALLENGE),
            campaign_name: Some("Desafio Fitness 30 Dias".to_string()),
            creator_id: CREATOR_LUCAS,
            creator_name: "Lucas Ferreira".to_string(),
            creator_avatar: avatar(12),
            message: "Posso conduzir o desafio completo com treinos diários.".to_string(),
            creative_idea: "Um vídeo curto por dia com o treino e o suplemento da marca."
                .to_string(),
            deliverables: vec![DeliverableType::Reels, DeliverableType::TikTok],
            proposed_value: 4000.0,
            portfolio_url: Some("https://portfolio.exemplo.com/lucas".to_string()),
            status: ProposalStatus::Pending,
            created_at: day(2025, 1, 8),
            kind: ProposalType::Brand,
        },
        Proposal {
            id: PROPOSAL_JULIANA_SKINCARE,
            campaign_id: Some(CAMPAIGN_NATURAL_SKINCARE),
            campaign_name: Some("Rotina Skincare Natural".to_string()),
            creator_id: CREATOR_JULIANA,
            creator_name: "Juliana Rocha".to_string(),
            creator_avatar: avatar(9),
            message: "Quero mostrar como ingredientes da cozinha viram cuidados com a pele."
                .to_string(),
            creative_idea: "Receitas de máscaras caseiras combinadas com os produtos.".to_string(),
            deliverables: vec![DeliverableType::Stories, DeliverableType::Photo],
            proposed_value: 1800.0,
            portfolio_url: None,
            status: ProposalStatus::Accepted,
            created_at: day(2024, 12, 28),
            kind: ProposalType::Brand,
        },
        Proposal {
            id: PROPOSAL_RAFAEL_GADGETS,
            campaign_id: Some(CAMPAIGN_GADGET_REVIEWS),
            campaign_name: Some("Review Gadgets de Natal".to_string()),
            creator_id: CREATOR_RAFAEL,
            creator_name: "Rafael Lima".to_string(),
            creator_avatar: avatar(14),
            message: "Faço reviews detalhados com testes reais de uso.".to_string(),
            creative_idea: "Comparativo dos cinco gadgets em um único short.".to_string(),
            deliverables: vec![DeliverableType::Shorts],
            proposed_value: 2200.0,
            portfolio_url: Some("https://portfolio.exemplo.com/rafael".to_string()),
            status: ProposalStatus::Rejected,
            created_at: day(2024, 11, 20),
            kind: ProposalType::Brand,
        },
        Proposal {
            id: COLLAB_PEDRO,
            campaign_id: None,
            campaign_name: None,
            creator_id: CREATOR_PEDRO,
            creator_name: "Pedro Alves".to_string(),
            creator_avatar: avatar(33),
            message: "Que tal uma viagem gastronômica juntos pelo litoral?".to_string(),
            creative_idea: "Roteiro de três dias provando pratos típicos de cada cidade."
                .to_string(),
            deliverables: vec![DeliverableType::Reels, DeliverableType::Stories],
            proposed_value: 1500.0,
            portfolio_url: None,
            status: ProposalStatus::Pending,
            created_at: day(2025, 1, 11),
            kind: ProposalType::Creator,
        },
        Proposal {
            id: COLLAB_MARINA,
            campaign_id: None,
            campaign_name: None,
            creator_id: CREATOR_MARINA,
            creator_name: "Marina Costa".to_string(),
            creator_avatar: avatar(1),
            message: "Vamos montar looks de treino juntos?".to_string(),
            creative_idea: "Desafio de looks fitness com votação do público.".to_string(),
            deliverables: vec![DeliverableType::Reels],
            proposed_value: 1000.0,
            portfolio_url: None,
            status: ProposalStatus::Accepted,
            created_at: day(2025, 1, 2),
            kind: ProposalType::Creator,
        },
        Proposal {
            id: COLLAB_RAFAEL,
            campaign_id: None,
            campaign_name: None,
            creator_id: CREATOR_RAFAEL,
            creator_name: "Rafael Lima".to_string(),
            creator_avatar: avatar(14),
            message: "Podemos testar apps de treino juntos.".to_string(),
            creative_idea: "Um mês usando apps de treino com relatórios semanais.".to_string(),
            deliverables: vec![DeliverableType::Shorts, DeliverableType::TikTok],
            proposed_value: 800.0,
            portfolio_url: None,
            status: ProposalStatus::Pending,
            created_at: day(2024, 12, 30),
            kind: ProposalType::Creator,
        },
    ]
}

/// Replaces the campaigns, creators and proposals with the fixtures.
pub async fn seed(db: &dyn Database) -> Result<(), Error> {
    db.clear_fixtures().await?;

    let campaigns = campaigns();
    let creators = creators();
    let proposals = proposals();

    db.campaigns().insert_campaigns(&campaigns).await?;
    db.creators().insert_creators(&creators).await?;
    db.proposals().insert_proposals(&proposals).await?;

    info!(
        campaigns = campaigns.len(),
        creators = creators.len(),
        proposals = proposals.len(),
        "seeded fixtures"
    );

    Ok(())
}
