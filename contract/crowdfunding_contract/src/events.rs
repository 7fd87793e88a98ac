use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::{CampaignId, CampaignStatus};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub status: CampaignStatus,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionMadeEvent {
    pub campaign_id: CampaignId,
    pub sender: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignDeletedEvent {
    pub campaign_id: CampaignId,
    pub caller: Address,
    pub status: CampaignStatus,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignExpiredEvent {
    pub campaign_id: CampaignId,
    pub ends_at: u64,
    pub status: CampaignStatus,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundIssuedEvent {
    pub campaign_id: CampaignId,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundHaltedEvent {
    pub campaign_id: CampaignId,
    pub recipient: Address,
    pub amount: i128,
    pub completed: u32,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"), event.campaign_id),
        event,
    );
}

pub fn emit_contribution_made(env: &Env, event: ContributionMadeEvent) {
    env.events().publish(
        (Symbol::new(env, "contribution_made"), event.campaign_id),
        event,
    );
}

pub fn emit_campaign_deleted(env: &Env, event: CampaignDeletedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_deleted"), event.campaign_id),
        event,
    );
}

pub fn emit_campaign_expired(env: &Env, event: CampaignExpiredEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_expired"), event.campaign_id),
        event,
    );
}

pub fn emit_refund_issued(env: &Env, event: RefundIssuedEvent) {
    env.events().publish(
        (Symbol::new(env, "refund_issued"), event.campaign_id),
        event,
    );
}

pub fn emit_refund_halted(env: &Env, event: RefundHaltedEvent) {
    env.events().publish(
        (Symbol::new(env, "refund_halted"), event.campaign_id),
        event,
    );
}
