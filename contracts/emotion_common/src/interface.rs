use soroban_sdk::{contractclient, Address, Env};

use crate::types::{EmotionRecord, ValidationResult, ValidationVote};

/// Read-only view of the emotion oracle used by downstream contracts.
///
/// `get_emotion_data` fails on the oracle side for unknown ids, so callers go
/// through `try_get_emotion_data` and map the failure to their own error.
#[contractclient(name = "OracleReaderClient")]
pub trait OracleReader {
    fn get_emotion_data(env: Env, record_id: u64) -> EmotionRecord;

    fn is_active_validator(env: Env, validator: Address) -> bool;

    fn get_validation_vote(env: Env, record_id: u64, validator: Address) -> Option<ValidationVote>;
}

/// Read-only view of the validation aggregator used by the data store.
#[contractclient(name = "ValidationReaderClient")]
pub trait ValidationReader {
    fn get_validation_result(env: Env, record_id: u64) -> ValidationResult;
}
