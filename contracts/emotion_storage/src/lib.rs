#![no_std]

//! Durable store for emotion records that cleared both the oracle vote and
//! the validation aggregator.

mod events;
mod storage;
pub mod types;

use emotion_common::{
    EmotionRecord, EmotionType, OracleReaderClient, StoredRecord, ValidationReaderClient,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::events::StorageEvents;
use crate::storage::*;
use crate::types::*;

const MAX_VALIDATION_SCORE: u32 = 100;

#[contract]
pub struct EmotionDataStorage;

#[contractimpl]
impl EmotionDataStorage {
    /// Initialize the store
    ///
    /// # Arguments
    /// * `owner` - Account allowed to mark records as processed
    /// * `oracle` - EmotionOracle holding the submitted records and votes
    /// * `validation` - EmotionValidation holding the aggregated scores
    pub fn initialize(
        env: Env,
        owner: Address,
        oracle: Address,
        validation: Address,
    ) -> Result<(), StorageError> {
        if has_config(&env) {
            return Err(StorageError::AlreadyInitialized);
        }
        owner.require_auth();

        set_config(
            &env,
            &Config {
                owner,
                oracle,
                validation,
            },
        );
        Ok(())
    }

    /// Admit a validated record into storage and return its storage id
    ///
    /// The record must be finalized with a positive vote in the oracle and
    /// carry a passing result in the aggregator, and the supplied fields must
    /// be the ones the oracle recorded. Each oracle record is stored once.
    pub fn store_validated_data(
        env: Env,
        record_id: u64,
        emotion_type: u32,
        intensity: u32,
        confidence: u32,
        context: String,
        submitter: Address,
    ) -> Result<u64, StorageError> {
        let config = get_config(&env)?;
        let emotion_type =
            EmotionType::from_u32(emotion_type).ok_or(StorageError::InvalidEmotionType)?;

        if get_record_index(&env, record_id).is_some() {
            return Err(StorageError::AlreadyStored);
        }

        let record = Self::approved_record(&env, &config, record_id)?;
        if !record.matches(emotion_type, intensity, confidence)
            || record.context != context
            || record.submitter != submitter
        {
            return Err(StorageError::RecordMismatch);
        }

        let stored = StoredRecord {
            storage_id: next_storage_id(&env),
            record_id,
            timestamp: env.ledger().timestamp(),
            emotion_type,
            intensity,
            confidence,
            context,
            submitter,
            is_processed: false,
            validation_score: 0,
        };
        set_stored(&env, &stored);
        set_record_index(&env, record_id, stored.storage_id);
        increment_emotion_count(&env, emotion_type);

        log!(&env, "record stored", record_id, stored.storage_id);
        StorageEvents::data_stored(&env, &stored);

        Ok(stored.storage_id)
    }

    /// Mark a stored record as processed and stamp its final score
    pub fn process_data(
        env: Env,
        caller: Address,
        storage_id: u64,
        validation_score: u32,
    ) -> Result<(), StorageError> {
        caller.require_auth();
        let config = get_config(&env)?;
        if config.owner != caller {
            return Err(StorageError::NotOwner);
        }
        if validation_score > MAX_VALIDATION_SCORE {
            return Err(StorageError::InvalidScore);
        }

        let mut stored = get_stored(&env, storage_id).ok_or(StorageError::NotFound)?;
        if stored.is_processed {
            return Err(StorageError::AlreadyProcessed);
        }

        stored.is_processed = true;
        stored.validation_score = validation_score;
        set_stored(&env, &stored);
        increment_processed_count(&env);

        log!(&env, "record processed", storage_id, validation_score);
        StorageEvents::data_processed(&env, storage_id, validation_score);

        Ok(())
    }

    // ───────────── VIEWS ─────────────

    pub fn get_stored_data(env: Env, storage_id: u64) -> Result<StoredRecord, StorageError> {
        get_stored(&env, storage_id).ok_or(StorageError::NotFound)
    }

    pub fn get_storage_id(env: Env, record_id: u64) -> Option<u64> {
        get_record_index(&env, record_id)
    }

    pub fn get_storage_stats(env: Env) -> StorageStats {
        StorageStats {
            total_stored: get_stored_count(&env),
            total_processed: get_processed_count(&env),
        }
    }

    pub fn get_emotion_count(env: Env, emotion_type: u32) -> Result<u32, StorageError> {
        let emotion_type =
            EmotionType::from_u32(emotion_type).ok_or(StorageError::InvalidEmotionType)?;
        Ok(storage::get_emotion_count(&env, emotion_type))
    }

    pub fn get_config(env: Env) -> Result<Config, StorageError> {
        storage::get_config(&env)
    }
}

impl EmotionDataStorage {
    /// Fetch the oracle record once both upstream contracts approved it.
    fn approved_record(
        env: &Env,
        config: &Config,
        record_id: u64,
    ) -> Result<EmotionRecord, StorageError> {
        let oracle = OracleReaderClient::new(env, &config.oracle);
        let record = match oracle.try_get_emotion_data(&record_id) {
            Ok(Ok(record)) => record,
            _ => return Err(StorageError::RecordNotFound),
        };

        let validator = record.validator.clone().ok_or(StorageError::NotValidated)?;
        let approved_by_vote = oracle
            .get_validation_vote(&record_id, &validator)
            .is_some_and(|vote| vote.is_valid);
        if !record.is_validated || !approved_by_vote {
            return Err(StorageError::NotValidated);
        }

        let result = ValidationReaderClient::new(env, &config.validation).get_validation_result(&record_id);
        if !result.is_valid {
            return Err(StorageError::NotValidated);
        }

        Ok(record)
    }
}
