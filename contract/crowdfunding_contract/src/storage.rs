use soroban_sdk::{Address, Env};

use crate::storage_types::{
    Campaign, CampaignId, CrowdfundingError, DataKey, PersistentKey, TTL_INSTANCE,
    TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn write_config(e: &Env, admin: &Address, token: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
    e.storage().instance().set(&DataKey::Token, token);
    e.storage().instance().set(&DataKey::NextCampaignId, &1u64);
    extend_instance(e);
}

pub fn read_admin(e: &Env) -> Result<Address, CrowdfundingError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn read_token(e: &Env) -> Result<Address, CrowdfundingError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundingError::NotInitialized)
}

/// Id the next created campaign will receive. Ids start at 1.
pub fn read_next_id(e: &Env) -> Result<CampaignId, CrowdfundingError> {
    e.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn write_next_id(e: &Env, next_id: CampaignId) {
    e.storage().instance().set(&DataKey::NextCampaignId, &next_id);
    extend_instance(e);
}

/// Number of campaigns ever created, deleted ones included.
pub fn campaign_count(e: &Env) -> u64 {
    read_next_id(e).map(|next| next - 1).unwrap_or(0)
}

pub fn read_campaign(e: &Env, id: CampaignId) -> Result<Campaign, CrowdfundingError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(id))
        .ok_or(CrowdfundingError::CampaignNotFound)
}

pub fn write_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub fn is_locked(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Locked)
}

pub fn set_locked(e: &Env, locked: bool) {
    if locked {
        e.storage().instance().set(&DataKey::Locked, &true);
    } else {
        e.storage().instance().remove(&DataKey::Locked);
    }
}
