use crate::types::{Config, DataKey, ValidationError};
use emotion_common::{EmotionType, ValidationResult, ValidationRule};
use soroban_sdk::Env;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<Config, ValidationError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ValidationError::NotInitialized)
}

pub fn set_rule(env: &Env, rule: &ValidationRule) {
    env.storage()
        .persistent()
        .set(&DataKey::Rule(rule.emotion_type), rule);
}

pub fn get_rule(env: &Env, emotion_type: EmotionType) -> Option<ValidationRule> {
    env.storage().persistent().get(&DataKey::Rule(emotion_type))
}

pub fn set_result(env: &Env, result: &ValidationResult) {
    env.storage()
        .persistent()
        .set(&DataKey::Result(result.record_id), result);
}

pub fn get_result(env: &Env, record_id: u64) -> Option<ValidationResult> {
    env.storage().persistent().get(&DataKey::Result(record_id))
}
