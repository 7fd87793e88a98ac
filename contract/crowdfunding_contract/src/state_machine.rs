//! Campaign decision logic. Nothing here touches storage, moves funds or
//! emits events; the ledger applies the decisions.

use soroban_sdk::{Env, Vec};

use crate::storage_types::{
    Campaign, CampaignStatus, ContributionDecision, CrowdfundingError, Refund,
};

/// Split `amount` into the part credited toward the goal and the excess
/// returned to the sender, and decide the resulting status.
pub fn apply_contribution(
    campaign: &Campaign,
    amount: i128,
) -> Result<ContributionDecision, CrowdfundingError> {
    if amount <= 0 {
        return Err(CrowdfundingError::InvalidContribution);
    }
    if campaign.status != CampaignStatus::Active {
        return Err(CrowdfundingError::CampaignNotActive);
    }

    let remaining = campaign
        .goal
        .checked_sub(campaign.total_contributions)
        .ok_or(CrowdfundingError::ArithmeticError)?;

    let (credited, refund_to_sender) = if amount <= remaining {
        (amount, 0)
    } else {
        (remaining, amount - remaining)
    };

    let new_total = campaign
        .total_contributions
        .checked_add(credited)
        .ok_or(CrowdfundingError::ArithmeticError)?;
    let new_status = if new_total == campaign.goal {
        CampaignStatus::Successful
    } else {
        campaign.status
    };

    Ok(ContributionDecision {
        credited,
        refund_to_sender,
        new_status,
    })
}

/// Up to `limit` payouts still owed from the contribution history, in
/// insertion order. Entries before `refunded_count` were paid by an earlier
/// pass.
pub fn compute_refunds(env: &Env, campaign: &Campaign, limit: u32) -> Vec<Refund> {
    let mut refunds = Vec::new(env);
    for (index, contribution) in campaign
        .contributions
        .iter()
        .enumerate()
        .skip(campaign.refunded_count as usize)
        .take(limit as usize)
    {
        refunds.push_back(Refund {
            index: index as u32,
            recipient: contribution.contributor,
            amount: contribution.credited,
        });
    }
    refunds
}

/// Whether the time-based sweep may move the campaign to Unsucceeded.
pub fn can_expire(campaign: &Campaign, now: u64) -> bool {
    campaign.status == CampaignStatus::Active && now >= campaign.ends_at
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::storage_types::Contribution;
    use soroban_sdk::{testutils::Address as _, Address, String};

    fn campaign(env: &Env, goal: i128, total: i128) -> Campaign {
        Campaign {
            id: 1,
            creator: Address::generate(env),
            title: String::from_str(env, "Well"),
            description: String::from_str(env, "Village well"),
            image_ref: String::from_str(env, "ipfs://well"),
            goal,
            starts_at: 0,
            ends_at: 1000,
            status: CampaignStatus::Active,
            total_contributions: total,
            contributions: Vec::new(env),
            refunded_count: 0,
        }
    }

    #[test]
    fn test_under_goal_credits_everything() {
        let env = Env::default();
        let decision = apply_contribution(&campaign(&env, 100, 0), 40).unwrap();
        assert_eq!(decision.credited, 40);
        assert_eq!(decision.refund_to_sender, 0);
        assert_eq!(decision.new_status, CampaignStatus::Active);
    }

    #[test]
    fn test_over_contribution_returns_excess() {
        let env = Env::default();
        let decision = apply_contribution(&campaign(&env, 100, 40), 70).unwrap();
        assert_eq!(decision.credited, 60);
        assert_eq!(decision.refund_to_sender, 10);
        assert_eq!(decision.credited + decision.refund_to_sender, 70);
        assert_eq!(decision.new_status, CampaignStatus::Successful);
    }

    #[test]
    fn test_exact_remaining_reaches_goal() {
        let env = Env::default();
        let decision = apply_contribution(&campaign(&env, 50, 0), 50).unwrap();
        assert_eq!(decision.credited, 50);
        assert_eq!(decision.refund_to_sender, 0);
        assert_eq!(decision.new_status, CampaignStatus::Successful);
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let env = Env::default();
        let c = campaign(&env, 100, 0);
        assert_eq!(
            apply_contribution(&c, 0),
            Err(CrowdfundingError::InvalidContribution)
        );
        assert_eq!(
            apply_contribution(&c, -5),
            Err(CrowdfundingError::InvalidContribution)
        );
    }

    #[test]
    fn test_rejects_closed_campaign() {
        let env = Env::default();
        for status in [
            CampaignStatus::Successful,
            CampaignStatus::Deleted,
            CampaignStatus::Unsucceeded,
        ] {
            let mut c = campaign(&env, 100, 0);
            c.status = status;
            assert_eq!(
                apply_contribution(&c, 10),
                Err(CrowdfundingError::CampaignNotActive)
            );
        }
    }

    #[test]
    fn test_compute_refunds_skips_paid_entries() {
        let env = Env::default();
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        let mut c = campaign(&env, 100, 0);
        c.contributions.push_back(Contribution {
            contributor: alice.clone(),
            amount: 30,
            credited: 30,
        });
        c.contributions.push_back(Contribution {
            contributor: bob.clone(),
            amount: 90,
            credited: 70,
        });

        let all = compute_refunds(&env, &c, 10);
        assert_eq!(all.len(), 2);
        assert_eq!(all.get_unchecked(0).recipient, alice);
        assert_eq!(all.get_unchecked(1).amount, 70);

        let first = compute_refunds(&env, &c, 1);
        assert_eq!(first.len(), 1);
        assert_eq!(first.get_unchecked(0).recipient, alice);

        c.refunded_count = 1;
        let rest = compute_refunds(&env, &c, 10);
        assert_eq!(rest.len(), 1);
        assert_eq!(
            rest.get_unchecked(0),
            Refund {
                index: 1,
                recipient: bob,
                amount: 70,
            }
        );
    }

    #[test]
    fn test_can_expire() {
        let env = Env::default();
        let mut c = campaign(&env, 100, 0);
        assert!(!can_expire(&c, 999));
        assert!(can_expire(&c, 1000));
        c.status = CampaignStatus::Successful;
        assert!(!can_expire(&c, 2000));
    }
}
