use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::{DeliverableType, PaymentType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    BasicInfo,
    Deliverables,
    TimelineAndPayment,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::Deliverables,
        WizardStep::TimelineAndPayment,
        WizardStep::Review,
    ];

    /// One-based position, as shown to the user.
    pub fn number(self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Deliverables => 2,
            WizardStep::TimelineAndPayment => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Informações Básicas",
            WizardStep::Deliverables => "Entregáveis",
            WizardStep::TimelineAndPayment => "Prazo e Pagamento",
            WizardStep::Review => "Revisão",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::Deliverables),
            WizardStep::Deliverables => Some(WizardStep::TimelineAndPayment),
            WizardStep::TimelineAndPayment => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::Deliverables => Some(WizardStep::BasicInfo),
            WizardStep::TimelineAndPayment => Some(WizardStep::Deliverables),
            WizardStep::Review => Some(WizardStep::TimelineAndPayment),
        }
    }
}

impl Default for WizardStep {
    fn default() -> WizardStep {
        WizardStep::BasicInfo
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Objective,
    Budget,
    Niche,
    Deliverables,
    Deadline,
    PaymentType,
    CommissionPercentage,
}

/// A campaign being put together in the creation wizard. It lives in the
/// brand's session and is dropped on submit; it is never stored as a
/// campaign.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CampaignDraft {
    pub step: WizardStep,
    pub name: String,
    pub objective: String,
    pub budget: Option<f64>,
    pub niche: Option<String>,
    pub deliverables: Vec<DeliverableType>,
    pub deadline: Option<NaiveDate>,
    pub payment_type: PaymentType,
    pub commission_percentage: Option<u8>,
}

/// Field values sent for the current step. Absent fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub objective: Option<String>,
    pub budget: Option<f64>,
    pub niche: Option<String>,
    pub deliverables: Option<Vec<DeliverableType>>,
    pub deadline: Option<NaiveDate>,
    pub payment_type: Option<PaymentType>,
    pub commission_percentage: Option<u8>,
}

impl CampaignDraft {
    pub fn new() -> CampaignDraft {
        CampaignDraft::default()
    }

    /// The fields shown on the current step. The commission percentage only
    /// appears while the payment type is commission.
    pub fn visible_fields(&self) -> Vec<DraftField> {
        match self.step {
            WizardStep::BasicInfo => vec![
                DraftField::Name,
                DraftField::Objective,
                DraftField::Budget,
                DraftField::Niche,
            ],
            WizardStep::Deliverables => vec![DraftField::Deliverables],
            WizardStep::TimelineAndPayment => {
                let mut fields = vec![DraftField::Deadline, DraftField::PaymentType];
                if self.payment_type == PaymentType::Commission {
                    fields.push(DraftField::CommissionPercentage);
                }
                fields
            }
            WizardStep::Review => vec![],
        }
    }

    pub fn is_visible(&self, field: DraftField) -> bool {
        self.visible_fields().contains(&field)
    }

    fn require_visible(&self, field: DraftField) -> Result<(), Error> {
        if !self.is_visible(field) {
            return Err(Error::WizardFieldNotOnStep {
                field,
                step: self.step,
            });
        }

        Ok(())
    }

    pub fn set_payment_type(&mut self, payment_type: PaymentType) {
        if payment_type != PaymentType::Commission {
            self.commission_percentage = None;
        }
        self.payment_type = payment_type;
    }

    /// Applies every field of the patch or none of them. The payment type is
    /// applied first, so a patch can switch to commission and set the
    /// percentage together.
    pub fn apply(&mut self, patch: DraftPatch) -> Result<(), Error> {
        let mut draft = self.clone();

        if let Some(payment_type) = patch.payment_type {
            draft.require_visible(DraftField::PaymentType)?;
            draft.set_payment_type(payment_type);
        }
        if let Some(name) = patch.name {
            draft.require_visible(DraftField::Name)?;
            draft.name = name;
        }
        if let Some(objective) = patch.objective {
            draft.require_visible(DraftField::Objective)?;
            draft.objective = objective;
        }
        if let Some(budget) = patch.budget {
            draft.require_visible(DraftField::Budget)?;
            draft.budget = Some(budget);
        }
        if let Some(niche) = patch.niche {
            draft.require_visible(DraftField::Niche)?;
            draft.niche = Some(niche);
        }
        if let Some(deliverables) = patch.deliverables {
            draft.require_visible(DraftField::Deliverables)?;
            draft.deliverables = dedup(deliverables);
        }
        if let Some(deadline) = patch.deadline {
            draft.require_visible(DraftField::Deadline)?;
            draft.deadline = Some(deadline);
        }
        if let Some(commission_percentage) = patch.commission_percentage {
            draft.require_visible(DraftField::CommissionPercentage)?;
            if !(1..=100).contains(&commission_percentage) {
                return Err(Error::CommissionOutOfRange {
                    commission_percentage,
                });
            }
            draft.commission_percentage = Some(commission_percentage);
        }

        *self = draft;
        Ok(())
    }

    pub fn advance(&mut self) -> Result<WizardStep, Error> {
        self.step = self.step.next().ok_or(Error::WizardAtLastStep)?;
        Ok(self.step)
    }

    pub fn retreat(&mut self) -> Result<WizardStep, Error> {
        self.step = self.step.previous().ok_or(Error::WizardAtFirstStep)?;
        Ok(self.step)
    }

    pub fn ensure_reviewable(&self) -> Result<(), Error> {
        if self.step != WizardStep::Review {
            return Err(Error::WizardNotAtReview { step: self.step });
        }

        Ok(())
    }
}

fn dedup(deliverables: Vec<DeliverableType>) -> Vec<DeliverableType> {
    let mut unique = Vec::with_capacity(deliverables.len());
    for deliverable in deliverables {
        if !unique.contains(&deliverable) {
            unique.push(deliverable);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_at(step: WizardStep) -> CampaignDraft {
        CampaignDraft {
            step,
            ..CampaignDraft::default()
        }
    }

    #[test]
    fn new_draft_starts_at_basic_info_with_fixed_payment() {
        let draft = CampaignDraft::new();

        assert_eq!(draft.step, WizardStep::BasicInfo);
        assert_eq!(draft.payment_type, PaymentType::Fixed);
        assert_eq!(
            draft.visible_fields(),
            vec![
                DraftField::Name,
                DraftField::Objective,
                DraftField::Budget,
                DraftField::Niche,
            ]
        );
    }

    #[test]
    fn steps_move_forward_and_back_linearly() {
        let mut draft = CampaignDraft::new();

        assert_eq!(draft.advance().unwrap(), WizardStep::Deliverables);
        assert_eq!(draft.advance().unwrap(), WizardStep::TimelineAndPayment);
        assert_eq!(draft.advance().unwrap(), WizardStep::Review);
        assert_eq!(draft.advance().unwrap_err(), Error::WizardAtLastStep);
        assert_eq!(draft.step, WizardStep::Review);

        assert_eq!(draft.retreat().unwrap(), WizardStep::TimelineAndPayment);
        assert_eq!(draft.retreat().unwrap(), WizardStep::Deliverables);
        assert_eq!(draft.retreat().unwrap(), WizardStep::BasicInfo);
        assert_eq!(draft.retreat().unwrap_err(), Error::WizardAtFirstStep);
        assert_eq!(draft.step, WizardStep::BasicInfo);
    }

    #[test]
    fn commission_is_visible_only_for_commission_payment() {
        for step in WizardStep::ALL.iter().copied() {
            for payment_type in PaymentType::ALL.iter().copied() {
                let mut draft = draft_at(step);
                draft.payment_type = payment_type;

                let expected =
                    step == WizardStep::TimelineAndPayment && payment_type == PaymentType::Commission;
                assert_eq!(
                    draft.is_visible(DraftField::CommissionPercentage),
                    expected,
                    "step {:?} with {:?}",
                    step,
                    payment_type
                );
            }
        }
    }

    #[test]
    fn switching_to_commission_and_setting_percentage_together() {
        let mut draft = draft_at(WizardStep::TimelineAndPayment);

        draft
            .apply(DraftPatch {
                payment_type: Some(PaymentType::Commission),
                commission_percentage: Some(15),
                ..DraftPatch::default()
            })
            .unwrap();

        assert_eq!(draft.payment_type, PaymentType::Commission);
        assert_eq!(draft.commission_percentage, Some(15));
    }

    #[test]
    fn leaving_commission_clears_percentage() {
        let mut draft = draft_at(WizardStep::TimelineAndPayment);
        draft.payment_type = PaymentType::Commission;
        draft.commission_percentage = Some(20);

        draft
            .apply(DraftPatch {
                payment_type: Some(PaymentType::Barter),
                ..DraftPatch::default()
            })
            .unwrap();

        assert_eq!(draft.commission_percentage, None);
        assert!(!draft.is_visible(DraftField::CommissionPercentage));
    }

    #[test]
    fn percentage_without_commission_is_rejected() {
        let mut draft = draft_at(WizardStep::TimelineAndPayment);

        let result = draft.apply(DraftPatch {
            commission_percentage: Some(10),
            ..DraftPatch::default()
        });

        assert_eq!(
            result.unwrap_err(),
            Error::WizardFieldNotOnStep {
                field: DraftField::CommissionPercentage,
                step: WizardStep::TimelineAndPayment,
            }
        );
        assert_eq!(draft.commission_percentage, None);
    }

    #[test]
    fn percentage_must_be_in_range() {
        let mut draft = draft_at(WizardStep::TimelineAndPayment);
        draft.payment_type = PaymentType::Commission;

        for out_of_range in [0u8, 101].iter().copied() {
            let result = draft.apply(DraftPatch {
                commission_percentage: Some(out_of_range),
                ..DraftPatch::default()
            });
            assert_eq!(
                result.unwrap_err(),
                Error::CommissionOutOfRange {
                    commission_percentage: out_of_range
                }
            );
        }
    }

    #[test]
    fn fields_of_other_steps_are_rejected_without_partial_writes() {
        let mut draft = CampaignDraft::new();

        let result = draft.apply(DraftPatch {
            name: Some("Lançamento Inverno".to_string()),
            deliverables: Some(vec![DeliverableType::Reels]),
            ..DraftPatch::default()
        });

        assert_eq!(
            result.unwrap_err(),
            Error::WizardFieldNotOnStep {
                field: DraftField::Deliverables,
                step: WizardStep::BasicInfo,
            }
        );
        assert_eq!(draft.name, "");
    }

    #[test]
    fn deliverables_are_kept_unique_in_order() {
        let mut draft = draft_at(WizardStep::Deliverables);

        draft
            .apply(DraftPatch {
                deliverables: Some(vec![
                    DeliverableType::Stories,
                    DeliverableType::Reels,
                    DeliverableType::Stories,
                ]),
                ..DraftPatch::default()
            })
            .unwrap();

        assert_eq!(
            draft.deliverables,
            vec![DeliverableType::Stories, DeliverableType::Reels]
        );
    }

    #[test]
    fn only_review_can_be_submitted() {
        assert_eq!(
            draft_at(WizardStep::Deliverables)
                .ensure_reviewable()
                .unwrap_err(),
            Error::WizardNotAtReview {
                step: WizardStep::Deliverables
            }
        );
        assert!(draft_at(WizardStep::Review).ensure_reviewable().is_ok());
    }
}
