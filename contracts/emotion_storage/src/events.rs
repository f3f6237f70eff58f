use emotion_common::StoredRecord;
use soroban_sdk::{symbol_short, Env};

pub struct StorageEvents;

impl StorageEvents {
    pub fn data_stored(env: &Env, stored: &StoredRecord) {
        let topics = (symbol_short!("store"), stored.storage_id);
        env.events()
            .publish(topics, (stored.submitter.clone(), stored.emotion_type));
    }

    pub fn data_processed(env: &Env, storage_id: u64, validation_score: u32) {
        let topics = (symbol_short!("process"), storage_id);
        env.events().publish(topics, validation_score);
    }
}
