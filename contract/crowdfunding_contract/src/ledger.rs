//! The ledger owns every campaign record. It is the only code that writes
//! campaigns, moves escrowed funds and emits notifications; the decisions
//! themselves come from `state_machine`.

use soroban_sdk::{log, token, Address, Env, String, Vec};

use crate::events::{self, *};
use crate::guard;
use crate::state_machine;
use crate::storage;
use crate::storage_types::{
    Campaign, CampaignId, CampaignStatus, Contribution, ContributionDecision, CrowdfundingError,
    HaltedRefund, RefundOutcome, RefundReport, LATEST_CAMPAIGNS_LIMIT, MAX_REFUNDS_PER_CALL,
};

pub fn initialize(e: &Env, admin: Address, token: Address) -> Result<(), CrowdfundingError> {
    if storage::is_initialized(e) {
        return Err(CrowdfundingError::AlreadyInitialized);
    }
    storage::write_config(e, &admin, &token);
    Ok(())
}

pub fn create_campaign(
    e: &Env,
    creator: Address,
    title: String,
    description: String,
    image_ref: String,
    goal: i128,
    ends_at: u64,
) -> Result<CampaignId, CrowdfundingError> {
    creator.require_auth();
    let id = storage::read_next_id(e)?;

    if title.len() == 0 || description.len() == 0 || image_ref.len() == 0 {
        return Err(CrowdfundingError::EmptyField);
    }
    if goal <= 0 {
        return Err(CrowdfundingError::InvalidGoal);
    }
    let now = e.ledger().timestamp();
    if ends_at <= now {
        return Err(CrowdfundingError::InvalidDeadline);
    }

    guard::exclusive(e, || {
        let campaign = Campaign {
            id,
            creator: creator.clone(),
            title: title.clone(),
            description,
            image_ref,
            goal,
            starts_at: now,
            ends_at,
            status: CampaignStatus::Active,
            total_contributions: 0,
            contributions: Vec::new(e),
            refunded_count: 0,
        };
        storage::write_campaign(e, &campaign);
        storage::write_next_id(e, id + 1);

        log!(e, "campaign created", id, goal, ends_at);
        events::emit_campaign_created(
            e,
            CampaignCreatedEvent {
                campaign_id: id,
                creator,
                title,
                status: CampaignStatus::Active,
            },
        );

        Ok(id)
    })
}

/// Accept `amount` from `sender`. Only the remaining need is kept in
/// escrow; any excess goes straight back to `sender` before returning.
pub fn contribute(
    e: &Env,
    id: CampaignId,
    amount: i128,
    sender: Address,
) -> Result<ContributionDecision, CrowdfundingError> {
    sender.require_auth();
    let token = storage::read_token(e)?;
    let mut campaign = storage::read_campaign(e, id)?;
    let decision = state_machine::apply_contribution(&campaign, amount)?;

    guard::exclusive(e, || {
        let escrow = e.current_contract_address();

        transfer(e, &token, &sender, &escrow, amount)?;

        campaign.contributions.push_back(Contribution {
            contributor: sender.clone(),
            amount,
            credited: decision.credited,
        });
        campaign.total_contributions += decision.credited;
        campaign.status = decision.new_status;
        storage::write_campaign(e, &campaign);

        if decision.new_status == CampaignStatus::Successful {
            log!(e, "campaign reached goal", id, campaign.goal);
        }

        if decision.refund_to_sender > 0 {
            transfer(e, &token, &escrow, &sender, decision.refund_to_sender)?;
        }

        events::emit_contribution_made(
            e,
            ContributionMadeEvent {
                campaign_id: id,
                sender,
                amount,
            },
        );

        Ok(decision)
    })
}

/// Cancel a campaign and pay its contributors back. Only the creator may
/// delete; a Successful campaign can still be deleted. Large histories are
/// paid over several calls, see `resume_refunds`.
pub fn delete_campaign(
    e: &Env,
    id: CampaignId,
    caller: Address,
) -> Result<RefundReport, CrowdfundingError> {
    caller.require_auth();
    let token = storage::read_token(e)?;
    let mut campaign = storage::read_campaign(e, id)?;

    if caller != campaign.creator {
        return Err(CrowdfundingError::Unauthorized);
    }
    if campaign.status.is_closed() {
        return Err(CrowdfundingError::CampaignClosed);
    }

    guard::exclusive(e, || {
        campaign.status = CampaignStatus::Deleted;
        storage::write_campaign(e, &campaign);
        events::emit_campaign_deleted(
            e,
            CampaignDeletedEvent {
                campaign_id: id,
                caller,
                status: CampaignStatus::Deleted,
            },
        );

        Ok(run_refunds(e, &token, &mut campaign))
    })
}

/// Sweep entry point for campaigns past their deadline without reaching the
/// goal: marks the campaign Unsucceeded and refunds its contributors.
pub fn expire_campaign(
    e: &Env,
    id: CampaignId,
    caller: Address,
) -> Result<RefundReport, CrowdfundingError> {
    caller.require_auth();
    let admin = storage::read_admin(e)?;
    let token = storage::read_token(e)?;
    if caller != admin {
        return Err(CrowdfundingError::Unauthorized);
    }

    let mut campaign = storage::read_campaign(e, id)?;
    if campaign.status != CampaignStatus::Active {
        return Err(CrowdfundingError::CampaignNotActive);
    }
    if !state_machine::can_expire(&campaign, e.ledger().timestamp()) {
        return Err(CrowdfundingError::DeadlineNotReached);
    }

    guard::exclusive(e, || {
        campaign.status = CampaignStatus::Unsucceeded;
        storage::write_campaign(e, &campaign);
        events::emit_campaign_expired(
            e,
            CampaignExpiredEvent {
                campaign_id: id,
                ends_at: campaign.ends_at,
                status: CampaignStatus::Unsucceeded,
            },
        );

        Ok(run_refunds(e, &token, &mut campaign))
    })
}

/// Continue a refund pass that stopped on a rejected transfer or on the
/// per-call payout cap.
pub fn resume_refunds(e: &Env, id: CampaignId) -> Result<RefundReport, CrowdfundingError> {
    let token = storage::read_token(e)?;
    let mut campaign = storage::read_campaign(e, id)?;
    if !campaign.status.is_closed() || campaign.refunded_count >= campaign.contributions.len() {
        return Err(CrowdfundingError::NoPendingRefunds);
    }

    guard::exclusive(e, || Ok(run_refunds(e, &token, &mut campaign)))
}

pub fn get_all_campaigns(e: &Env) -> Result<Vec<Campaign>, CrowdfundingError> {
    let mut campaigns = Vec::new(e);
    for id in 1..=storage::campaign_count(e) {
        campaigns.push_back(storage::read_campaign(e, id)?);
    }
    Ok(campaigns)
}

/// Most recently created campaigns, newest first.
pub fn get_latest_campaigns(e: &Env) -> Result<Vec<Campaign>, CrowdfundingError> {
    let count = storage::campaign_count(e);
    if count == 0 {
        return Err(CrowdfundingError::EmptyLedger);
    }

    let oldest = count.saturating_sub(LATEST_CAMPAIGNS_LIMIT) + 1;
    let mut campaigns = Vec::new(e);
    for id in (oldest..=count).rev() {
        campaigns.push_back(storage::read_campaign(e, id)?);
    }
    Ok(campaigns)
}

// Pays out up to MAX_REFUNDS_PER_CALL history entries still owed. A rejected
// transfer stops the pass early. Progress is always persisted, so the rest
// is paid by `resume_refunds`.
fn run_refunds(e: &Env, token: &Address, campaign: &mut Campaign) -> RefundReport {
    let escrow = e.current_contract_address();
    let mut refunded = Vec::new(e);
    let mut halted = None;

    for refund in state_machine::compute_refunds(e, campaign, MAX_REFUNDS_PER_CALL).iter() {
        let paid = refund.amount == 0
            || transfer(e, token, &escrow, &refund.recipient, refund.amount).is_ok();
        if !paid {
            log!(e, "refund halted", campaign.id, refund.index);
            events::emit_refund_halted(
                e,
                RefundHaltedEvent {
                    campaign_id: campaign.id,
                    recipient: refund.recipient.clone(),
                    amount: refund.amount,
                    completed: refunded.len(),
                },
            );
            halted = Some(HaltedRefund {
                recipient: refund.recipient,
                amount: refund.amount,
            });
            break;
        }

        campaign.total_contributions -= refund.amount;
        campaign.refunded_count = refund.index + 1;
        events::emit_refund_issued(
            e,
            RefundIssuedEvent {
                campaign_id: campaign.id,
                recipient: refund.recipient.clone(),
                amount: refund.amount,
            },
        );
        refunded.push_back(refund);
    }

    storage::write_campaign(e, campaign);

    let remaining = campaign.contributions.len() - campaign.refunded_count;
    let outcome = match halted {
        Some(halted) => RefundOutcome::Halted(halted),
        None if remaining > 0 => RefundOutcome::Pending,
        None => RefundOutcome::Completed,
    };

    RefundReport {
        campaign_id: campaign.id,
        refunded,
        remaining,
        outcome,
    }
}

fn transfer(
    e: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), CrowdfundingError> {
    match token::Client::new(e, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(CrowdfundingError::TransferFailed),
    }
}
