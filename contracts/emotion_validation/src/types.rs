use emotion_common::EmotionType;
use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ValidationError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    InvalidEmotionType = 4,
    InvalidRule = 5,
    NotActiveValidator = 6,
    RecordNotFound = 7,
    RecordMismatch = 8,
    AlreadyVoted = 9,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub oracle: Address,
    pub pass_score: u32, // minimum score for a passing result
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Rule(EmotionType),
    Result(u64),
}
