use crate::types::{Config, DataKey, OracleError};
use emotion_common::{EmotionRecord, ValidationVote, Validator};
use soroban_sdk::{Address, Env, Vec};

pub struct Storage;

impl Storage {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn get_config(env: &Env) -> Result<Config, OracleError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(OracleError::NotInitialized)
    }

    pub fn get_record_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::RecordCount)
            .unwrap_or(0)
    }

    /// Reserves the next record id. Ids start at 1.
    pub fn next_record_id(env: &Env) -> u64 {
        let id = Self::get_record_count(env) + 1;
        env.storage().instance().set(&DataKey::RecordCount, &id);
        id
    }

    pub fn get_validator_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::ValidatorCount)
            .unwrap_or(0)
    }

    pub fn increment_validator_count(env: &Env) {
        let count = Self::get_validator_count(env) + 1;
        env.storage()
            .instance()
            .set(&DataKey::ValidatorCount, &count);
    }

    pub fn set_record(env: &Env, record: &EmotionRecord) {
        env.storage()
            .persistent()
            .set(&DataKey::Record(record.id), record);
    }

    pub fn get_record(env: &Env, record_id: u64) -> Option<EmotionRecord> {
        env.storage().persistent().get(&DataKey::Record(record_id))
    }

    pub fn set_validator(env: &Env, validator: &Validator) {
        env.storage()
            .persistent()
            .set(&DataKey::Validator(validator.address.clone()), validator);
    }

    pub fn get_validator(env: &Env, address: &Address) -> Option<Validator> {
        env.storage()
            .persistent()
            .get(&DataKey::Validator(address.clone()))
    }

    pub fn set_vote(env: &Env, vote: &ValidationVote) {
        env.storage().persistent().set(
            &DataKey::Vote(vote.record_id, vote.validator.clone()),
            vote,
        );
    }

    pub fn get_vote(env: &Env, record_id: u64, validator: &Address) -> Option<ValidationVote> {
        env.storage()
            .persistent()
            .get(&DataKey::Vote(record_id, validator.clone()))
    }

    pub fn get_submissions(env: &Env, submitter: &Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::Submissions(submitter.clone()))
            .unwrap_or(Vec::new(env))
    }

    pub fn push_submission(env: &Env, submitter: &Address, record_id: u64) {
        let mut submissions = Self::get_submissions(env, submitter);
        submissions.push_back(record_id);
        env.storage()
            .persistent()
            .set(&DataKey::Submissions(submitter.clone()), &submissions);
    }
}
