use soroban_sdk::Env;

use crate::types::{Config, DataKey, StorageError};
use emotion_common::{EmotionType, StoredRecord};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<Config, StorageError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(StorageError::NotInitialized)
}

pub fn get_stored_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::StoredCount).unwrap_or(0)
}

pub fn next_storage_id(env: &Env) -> u64 {
    let id = get_stored_count(env) + 1;
    env.storage().instance().set(&DataKey::StoredCount, &id);
    id
}

pub fn get_processed_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::ProcessedCount).unwrap_or(0)
}

pub fn increment_processed_count(env: &Env) {
    let count = get_processed_count(env) + 1;
    env.storage().instance().set(&DataKey::ProcessedCount, &count);
}

pub fn set_stored(env: &Env, stored: &StoredRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Stored(stored.storage_id), stored);
}

pub fn get_stored(env: &Env, storage_id: u64) -> Option<StoredRecord> {
    env.storage().persistent().get(&DataKey::Stored(storage_id))
}

pub fn set_record_index(env: &Env, record_id: u64, storage_id: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::RecordIndex(record_id), &storage_id);
}

pub fn get_record_index(env: &Env, record_id: u64) -> Option<u64> {
    env.storage().persistent().get(&DataKey::RecordIndex(record_id))
}

pub fn get_emotion_count(env: &Env, emotion_type: EmotionType) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::EmotionCount(emotion_type))
        .unwrap_or(0)
}

pub fn increment_emotion_count(env: &Env, emotion_type: EmotionType) {
    let count = get_emotion_count(env, emotion_type) + 1;
    env.storage()
        .persistent()
        .set(&DataKey::EmotionCount(emotion_type), &count);
}
