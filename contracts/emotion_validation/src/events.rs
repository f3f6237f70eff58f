use emotion_common::ValidationRule;
use soroban_sdk::{symbol_short, Env};

pub struct ValidationEvents;

impl ValidationEvents {
    pub fn data_validated(env: &Env, record_id: u64, is_valid: bool, validation_score: u32) {
        let topics = (symbol_short!("validate"), record_id);
        env.events().publish(topics, (is_valid, validation_score));
    }

    pub fn rule_updated(env: &Env, rule: &ValidationRule) {
        let topics = (symbol_short!("rule"), rule.emotion_type);
        env.events().publish(topics, rule.clone());
    }
}
