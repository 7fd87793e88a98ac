use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    NextCampaignId,
    Locked,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
}

pub type CampaignId = u64;

// Campaign status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Deleted,
    Successful,
    Unsucceeded,
}

impl CampaignStatus {
    /// Deleted and Unsucceeded campaigns have handed (or are handing) their
    /// funds back to contributors.
    pub fn is_closed(&self) -> bool {
        matches!(self, CampaignStatus::Deleted | CampaignStatus::Unsucceeded)
    }
}

/// One accepted `contribute` call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct Contribution {
    pub contributor: Address,
    pub amount: i128,   // Amount sent with the call
    pub credited: i128, // Portion counted toward the goal, paid back on refund
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub goal: i128,
    pub starts_at: u64,
    pub ends_at: u64,
    pub status: CampaignStatus,
    pub total_contributions: i128,
    pub contributions: Vec<Contribution>,
    pub refunded_count: u32, // History entries already paid back
}

/// Outcome of splitting an incoming contribution against the remaining need.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct ContributionDecision {
    pub credited: i128,
    pub refund_to_sender: i128,
    pub new_status: CampaignStatus,
}

/// A payout owed to a contributor; `index` is its position in the history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct Refund {
    pub index: u32,
    pub recipient: Address,
    pub amount: i128,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct HaltedRefund {
    pub recipient: Address,
    pub amount: i128,
}

/// How a refund pass ended. Both `Pending` and `Halted` leave entries to be
/// paid by `resume_refunds`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub enum RefundOutcome {
    Completed,
    Pending,              // Stopped at MAX_REFUNDS_PER_CALL payouts
    Halted(HaltedRefund), // Stopped on a rejected transfer
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct RefundReport {
    pub campaign_id: CampaignId,
    pub refunded: Vec<Refund>,
    pub remaining: u32,
    pub outcome: RefundOutcome,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidGoal = 4,
    InvalidDeadline = 5,
    EmptyField = 6,
    InvalidContribution = 7,
    CampaignNotActive = 8,
    Unauthorized = 9,
    TransferFailed = 10,
    EmptyLedger = 11,
    ReentrantCall = 12,
    CampaignClosed = 13,
    DeadlineNotReached = 14,
    NoPendingRefunds = 15,
    ArithmeticError = 16,
}

// Constants
pub const LATEST_CAMPAIGNS_LIMIT: u64 = 4;
pub const MAX_REFUNDS_PER_CALL: u32 = 50;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
