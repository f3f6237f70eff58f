use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    ContractPaused = 4,
    InvalidEmotionType = 5,
    InvalidIntensity = 6,
    InvalidConfidence = 7,
    ContextTooLong = 8,
    InsufficientStake = 9,
    AlreadyRegistered = 10,
    NotActiveValidator = 11,
    NotFound = 12,
    AlreadyValidated = 13,
    InvalidAmount = 14,
    InvalidThreshold = 15,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub stake_token: Address,
    pub minimum_stake: i128,
    // Stored for governance; the first accepted vote still finalizes a record.
    pub validation_threshold: u32,
    pub validation_reward: i128,
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractStats {
    pub total_records: u64,
    pub total_validators: u32,
    pub contract_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    RecordCount,
    ValidatorCount,
    Record(u64),
    Validator(Address),
    Vote(u64, Address),
    Submissions(Address),
}
