#![no_std]


mod events;
mod guard;
mod ledger;
mod state_machine;
mod storage;
mod storage_types;

pub use events::{
    CampaignCreatedEvent, CampaignDeletedEvent, CampaignExpiredEvent, ContributionMadeEvent,
    RefundHaltedEvent, RefundIssuedEvent,
};
pub use storage_types::{
    Campaign, CampaignId, CampaignStatus, Contribution, ContributionDecision, CrowdfundingError,
    HaltedRefund, Refund, RefundOutcome, RefundReport, LATEST_CAMPAIGNS_LIMIT,
    MAX_REFUNDS_PER_CALL,
};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Set the owner and the token held in escrow. Can only be called once.
    pub fn initialize(e: Env, admin: Address, token: Address) -> Result<(), CrowdfundingError> {
        ledger::initialize(&e, admin, token)
    }

    /// Open a new Active campaign and return its id.
    pub fn create_campaign(
        e: Env,
        creator: Address,
        title: String,
        description: String,
        image_ref: String,
        goal: i128,
        ends_at: u64,
    ) -> Result<CampaignId, CrowdfundingError> {
        ledger::create_campaign(&e, creator, title, description, image_ref, goal, ends_at)
    }

    /// Contribute `amount` of the escrow token. Anything above the remaining
    /// need is sent back to `sender` in the same call.
    pub fn contribute(
        e: Env,
        campaign_id: CampaignId,
        amount: i128,
        sender: Address,
    ) -> Result<ContributionDecision, CrowdfundingError> {
        ledger::contribute(&e, campaign_id, amount, sender)
    }

    /// Creator-only cancellation; refunds every contributor.
    pub fn delete_campaign(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
    ) -> Result<RefundReport, CrowdfundingError> {
        ledger::delete_campaign(&e, campaign_id, caller)
    }

    /// Owner-only sweep of a campaign whose deadline passed while still Active.
    pub fn expire_campaign(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
    ) -> Result<RefundReport, CrowdfundingError> {
        ledger::expire_campaign(&e, campaign_id, caller)
    }

    /// Pay the entries a previous refund pass left unpaid.
    pub fn resume_refunds(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<RefundReport, CrowdfundingError> {
        ledger::resume_refunds(&e, campaign_id)
    }

    // View functions
    pub fn get_all_campaigns(e: Env) -> Result<Vec<Campaign>, CrowdfundingError> {
        ledger::get_all_campaigns(&e)
    }

    pub fn get_campaign(e: Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundingError> {
        storage::read_campaign(&e, campaign_id)
    }

    pub fn get_total_contributions(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<i128, CrowdfundingError> {
        storage::read_campaign(&e, campaign_id).map(|campaign| campaign.total_contributions)
    }

    pub fn get_latest_campaigns(e: Env) -> Result<Vec<Campaign>, CrowdfundingError> {
        ledger::get_latest_campaigns(&e)
    }

    pub fn get_contributions(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<Vec<Contribution>, CrowdfundingError> {
        storage::read_campaign(&e, campaign_id).map(|campaign| campaign.contributions)
    }

    pub fn get_campaign_count(e: Env) -> u64 {
        storage::campaign_count(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, CrowdfundingError> {
        storage::read_token(&e)
    }

    pub fn get_admin(e: Env) -> Result<Address, CrowdfundingError> {
        storage::read_admin(&e)
    }
}
