#![no_std]

mod events;
mod scoring;
mod storage;
pub mod types;

use emotion_common::{EmotionType, OracleReaderClient, ValidationResult, ValidationRule};
use soroban_sdk::{contract, contractimpl, log, Address, Env};

use crate::events::ValidationEvents;
use crate::storage::*;
use crate::types::*;

pub use scoring::MAX_SCORE;

const DEFAULT_PASS_SCORE: u32 = 70;

/// Rule-based scoring layered on top of the oracle's validator votes.
#[contract]
pub struct EmotionValidation;

#[contractimpl]
impl EmotionValidation {
    /// Initialize the aggregator against the oracle it reads records from
    pub fn initialize(env: Env, owner: Address, oracle: Address) -> Result<(), ValidationError> {
        if has_config(&env) {
            return Err(ValidationError::AlreadyInitialized);
        }
        owner.require_auth();

        set_config(
            &env,
            &Config {
                owner,
                oracle,
                pass_score: DEFAULT_PASS_SCORE,
            },
        );
        Ok(())
    }

    /// Insert or replace the acceptance bounds for one emotion type
    pub fn set_validation_rule(
        env: Env,
        caller: Address,
        emotion_type: u32,
        min_intensity: u32,
        max_intensity: u32,
        min_confidence: u32,
        is_active: bool,
    ) -> Result<(), ValidationError> {
        Self::require_owner(&env, &caller)?;

        let emotion_type =
            EmotionType::from_u32(emotion_type).ok_or(ValidationError::InvalidEmotionType)?;
        if !scoring::is_valid_rule(min_intensity, max_intensity, min_confidence) {
            return Err(ValidationError::InvalidRule);
        }

        let rule = ValidationRule {
            emotion_type,
            min_intensity,
            max_intensity,
            min_confidence,
            is_active,
        };
        set_rule(&env, &rule);
        ValidationEvents::rule_updated(&env, &rule);
        Ok(())
    }

    pub fn set_pass_score(env: Env, caller: Address, pass_score: u32) -> Result<(), ValidationError> {
        let mut config = Self::require_owner(&env, &caller)?;
        if pass_score > MAX_SCORE {
            return Err(ValidationError::InvalidRule);
        }
        config.pass_score = pass_score;
        set_config(&env, &config);
        Ok(())
    }

    /// Score an oracle record and add the validator to its result.
    ///
    /// The reading passed in must be the one the oracle holds for `record_id`.
    /// Each validator contributes once per record; the score is recomputed on
    /// every contribution against the rule in force at that time.
    pub fn validate_data(
        env: Env,
        record_id: u64,
        emotion_type: u32,
        intensity: u32,
        confidence: u32,
        validator: Address,
    ) -> Result<ValidationResult, ValidationError> {
        validator.require_auth();
        let config = get_config(&env)?;

        let emotion_type =
            EmotionType::from_u32(emotion_type).ok_or(ValidationError::InvalidEmotionType)?;

        let oracle = OracleReaderClient::new(&env, &config.oracle);
        if !oracle.is_active_validator(&validator) {
            return Err(ValidationError::NotActiveValidator);
        }
        let record = match oracle.try_get_emotion_data(&record_id) {
            Ok(Ok(record)) => record,
            _ => return Err(ValidationError::RecordNotFound),
        };
        if !record.matches(emotion_type, intensity, confidence) {
            return Err(ValidationError::RecordMismatch);
        }

        let mut result =
            get_result(&env, record_id).unwrap_or_else(|| ValidationResult::empty(&env, record_id));
        if result.validators.contains(&validator) {
            return Err(ValidationError::AlreadyVoted);
        }

        let rule = get_rule(&env, emotion_type);
        let validation_score = scoring::score(rule.as_ref(), intensity, confidence);
        result.validation_score = validation_score;
        result.is_valid = validation_score >= config.pass_score;
        result.validators.push_back(validator.clone());
        set_result(&env, &result);

        log!(&env, "record scored", record_id, validator, validation_score);
        ValidationEvents::data_validated(&env, record_id, result.is_valid, validation_score);

        Ok(result)
    }

    // Read-only helpers
    pub fn get_validation_result(env: Env, record_id: u64) -> ValidationResult {
        get_result(&env, record_id).unwrap_or_else(|| ValidationResult::empty(&env, record_id))
    }

    pub fn get_validation_rule(env: Env, emotion_type: u32) -> Option<ValidationRule> {
        EmotionType::from_u32(emotion_type).and_then(|emotion_type| get_rule(&env, emotion_type))
    }

    pub fn get_config(env: Env) -> Result<Config, ValidationError> {
        storage::get_config(&env)
    }
}

impl EmotionValidation {
    fn require_owner(env: &Env, caller: &Address) -> Result<Config, ValidationError> {
        caller.require_auth();
        let config = get_config(env)?;
        if config.owner != *caller {
            return Err(ValidationError::NotOwner);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod test;
