use emotion_common::EmotionType;
use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StorageError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    InvalidEmotionType = 4,
    NotValidated = 5,
    RecordNotFound = 6,
    RecordMismatch = 7,
    AlreadyStored = 8,
    NotFound = 9,
    AlreadyProcessed = 10,
    InvalidScore = 11,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub oracle: Address,     // EmotionOracle
    pub validation: Address, // EmotionValidation
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StorageStats {
    pub total_stored: u64,
    pub total_processed: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    StoredCount,
    ProcessedCount,
    Stored(u64),
    RecordIndex(u64),            // oracle record id -> storage id
    EmotionCount(EmotionType),   // stored records per emotion type
}
