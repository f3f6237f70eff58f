use emotion_common::EmotionRecord;
use soroban_sdk::{symbol_short, Address, Env};

pub struct OracleEvents;

impl OracleEvents {
    pub fn emotion_submitted(env: &Env, record: &EmotionRecord) {
        let topics = (symbol_short!("submit"), record.id);
        env.events().publish(
            topics,
            (
                record.submitter.clone(),
                record.emotion_type,
                record.intensity,
                record.confidence,
                record.context.clone(),
            ),
        );
    }

    pub fn validator_registered(env: &Env, validator: &Address, stake: i128, timestamp: u64) {
        let topics = (symbol_short!("register"), validator.clone());
        env.events().publish(topics, (stake, timestamp));
    }

    pub fn emotion_validated(env: &Env, record_id: u64, validator: &Address, is_valid: bool) {
        let topics = (symbol_short!("validate"), record_id);
        env.events().publish(topics, (validator.clone(), is_valid));
    }

    pub fn paused_changed(env: &Env, paused: bool) {
        env.events().publish((symbol_short!("paused"),), paused);
    }

    pub fn ownership_transferred(env: &Env, previous: &Address, owner: &Address) {
        env.events()
            .publish((symbol_short!("owner"), previous.clone()), owner.clone());
    }
}
