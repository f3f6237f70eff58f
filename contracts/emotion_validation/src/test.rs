#![cfg(test)]

use super::*;
use emotion_oracle::{EmotionOracle, EmotionOracleClient};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token::StellarAssetClient,
    vec, Address, Env, String, Symbol, TryFromVal,
};

const STAKE: i128 = 1_000_000;

struct Fixture<'a> {
    env: &'a Env,
    owner: Address,
    oracle: EmotionOracleClient<'a>,
    client: EmotionValidationClient<'a>,
    stake_token: Address,
}

impl<'a> Fixture<'a> {
    fn new(env: &'a Env) -> Self {
        env.mock_all_auths();

        let owner = Address::generate(env);
        let token_admin = Address::generate(env);
        let stake_token = env.register_stellar_asset_contract_v2(token_admin).address();

        let oracle_id = env.register_contract(None, EmotionOracle);
        let oracle = EmotionOracleClient::new(env, &oracle_id);
        oracle.initialize(&owner, &stake_token);

        let contract_id = env.register_contract(None, EmotionValidation);
        let client = EmotionValidationClient::new(env, &contract_id);
        client.initialize(&owner, &oracle_id);

        Fixture {
            env,
            owner,
            oracle,
            client,
            stake_token,
        }
    }

    fn validator(&self) -> Address {
        let validator = Address::generate(self.env);
        StellarAssetClient::new(self.env, &self.stake_token).mint(&validator, &STAKE);
        self.oracle.register_validator(&validator, &STAKE);
        validator
    }

    fn submit(&self, emotion_type: u32, intensity: u32, confidence: u32) -> u64 {
        let submitter = Address::generate(self.env);
        self.oracle.submit_emotion_data(
            &submitter,
            &emotion_type,
            &intensity,
            &confidence,
            &String::from_str(self.env, "test"),
        )
    }

    fn joy_rule(&self) {
        self.client
            .set_validation_rule(&self.owner, &0, &5, &10, &50, &true);
    }
}

#[test]
fn test_initialize() {
    let env = Env::default();
    let fx = Fixture::new(&env);

    let config = fx.client.get_config();
    assert_eq!(config.owner, fx.owner);
    assert_eq!(config.oracle, fx.oracle.address);
    assert_eq!(config.pass_score, 70);

    assert_eq!(
        fx.client.try_initialize(&fx.owner, &fx.oracle.address),
        Err(Ok(ValidationError::AlreadyInitialized))
    );
}

#[test]
fn test_set_validation_rule() {
    let env = Env::default();
    let fx = Fixture::new(&env);

    assert_eq!(fx.client.get_validation_rule(&0), None);
    fx.joy_rule();

    let rule = fx.client.get_validation_rule(&0).unwrap();
    assert_eq!(rule.emotion_type, EmotionType::Joy);
    assert_eq!(rule.min_intensity, 5);
    assert_eq!(rule.max_intensity, 10);
    assert_eq!(rule.min_confidence, 50);
    assert!(rule.is_active);

    // Upsert replaces the previous bounds.
    fx.client.set_validation_rule(&fx.owner, &0, &1, &4, &20, &false);
    let rule = fx.client.get_validation_rule(&0).unwrap();
    assert_eq!(rule.max_intensity, 4);
    assert!(!rule.is_active);

    assert_eq!(fx.client.get_validation_rule(&1), None);
    assert_eq!(fx.client.get_validation_rule(&6), None);
}

#[test]
fn test_set_validation_rule_rejects_bad_input() {
    let env = Env::default();
    let fx = Fixture::new(&env);
    let intruder = Address::generate(&env);

    assert_eq!(
        fx.client.try_set_validation_rule(&intruder, &0, &5, &10, &50, &true),
        Err(Ok(ValidationError::NotOwner))
    );
    assert_eq!(
        fx.client.try_set_validation_rule(&fx.owner, &6, &5, &10, &50, &true),
        Err(Ok(ValidationError::InvalidEmotionType))
    );
    assert_eq!(
        fx.client.try_set_validation_rule(&fx.owner, &0, &8, &5, &50, &true),
        Err(Ok(ValidationError::InvalidRule))
    );
    assert_eq!(
        fx.client.try_set_validation_rule(&fx.owner, &0, &0, &10, &50, &true),
        Err(Ok(ValidationError::InvalidRule))
    );
    assert_eq!(
        fx.client.try_set_validation_rule(&fx.owner, &0, &1, &10, &101, &true),
        Err(Ok(ValidationError::InvalidRule))
    );
    assert_eq!(fx.client.get_validation_rule(&0), None);

    assert_eq!(
        fx.client.try_set_pass_score(&intruder, &50),
        Err(Ok(ValidationError::NotOwner))
    );
    assert_eq!(
        fx.client.try_set_pass_score(&fx.owner, &101),
        Err(Ok(ValidationError::InvalidRule))
    );
    fx.client.set_pass_score(&fx.owner, &90);
    assert_eq!(fx.client.get_config().pass_score, 90);
}

#[test]
fn test_validate_data_passes_in_range_reading() {
    let env = Env::default();
    let fx = Fixture::new(&env);
    let validator = fx.validator();
    fx.joy_rule();
    let record_id = fx.submit(0, 8, 85);

    let result = fx.client.validate_data(&record_id, &0, &8, &85, &validator);
    assert!(result.is_valid);
    assert_eq!(result.validation_score, 100);
    assert_eq!(result.validators, vec![&env, validator.clone()]);
    assert_eq!(fx.client.get_validation_result(&record_id), result);

    let (contract, topics, data) = env.events().all().last().unwrap();
    assert_eq!(contract, fx.client.address);
    assert_eq!(
        Symbol::try_from_val(&env, &topics.get(0).unwrap()).unwrap(),
        symbol_short!("validate")
    );
    assert_eq!(u64::try_from_val(&env, &topics.get(1).unwrap()).unwrap(), record_id);
    assert_eq!(<(bool, u32)>::try_from_val(&env, &data).unwrap(), (true, 100));
}

#[test]
fn test_validate_data_fails_low_confidence() {
    let env = Env::default();
    let fx = Fixture::new(&env);
    let validator = fx.validator();
    fx.joy_rule();
    let record_id = fx.submit(0, 8, 10);

    let result = fx.client.validate_data(&record_id, &0, &8, &10, &validator);
    assert!(!result.is_valid);
    assert_eq!(result.validation_score, 60);
}

#[test]
fn test_validate_data_without_rule_passes_through() {
    let env = Env::default();
    let fx = Fixture::new(&env);
    let validator = fx.validator();
    let record_id = fx.submit(3, 1, 0);

    let result = fx.client.validate_data(&record_id, &3, &1, &0, &validator);
    assert!(result.is_valid);
    assert_eq!(result.validation_score, MAX_SCORE);
}

#[test]
fn test_validators_accumulate_once_each() {
    let env = Env::default();
    let fx = Fixture::new(&env);
    let validator1 = fx.validator();
    let validator2 = fx.validator();
    fx.joy_rule();
    let record_id = fx.submit(0, 8, 85);

    fx.client.validate_data(&record_id, &0, &8, &85, &validator1);
    let result = fx.client.validate_data(&record_id, &0, &8, &85, &validator2);
    assert_eq!(result.validators, vec![&env, validator1.clone(), validator2.clone()]);

    assert_eq!(
        fx.client.try_validate_data(&record_id, &0, &8, &85, &validator1),
        Err(Ok(ValidationError::AlreadyVoted))
    );
    assert_eq!(fx.client.get_validation_result(&record_id).validators.len(), 2);
}

#[test]
fn test_validate_data_checks_oracle_state() {
    let env = Env::default();
    let fx = Fixture::new(&env);
    let validator = fx.validator();
    let outsider = Address::generate(&env);
    let record_id = fx.submit(0, 8, 85);

    assert_eq!(
        fx.client.try_validate_data(&record_id, &0, &8, &85, &outsider),
        Err(Ok(ValidationError::NotActiveValidator))
    );
    assert_eq!(
        fx.client.try_validate_data(&99, &0, &8, &85, &validator),
        Err(Ok(ValidationError::RecordNotFound))
    );
    assert_eq!(
        fx.client.try_validate_data(&record_id, &1, &8, &85, &validator),
        Err(Ok(ValidationError::RecordMismatch))
    );
    assert_eq!(
        fx.client.try_validate_data(&record_id, &0, &9, &85, &validator),
        Err(Ok(ValidationError::RecordMismatch))
    );
    assert_eq!(
        fx.client.try_validate_data(&record_id, &0, &8, &86, &validator),
        Err(Ok(ValidationError::RecordMismatch))
    );
    assert_eq!(
        fx.client.try_validate_data(&record_id, &7, &8, &85, &validator),
        Err(Ok(ValidationError::InvalidEmotionType))
    );

    // Nothing was recorded by the failed attempts.
    let result = fx.client.get_validation_result(&record_id);
    assert!(!result.is_valid);
    assert_eq!(result.validation_score, 0);
    assert_eq!(result.validators.len(), 0);
}

#[test]
fn test_absent_result_is_empty_default() {
    let env = Env::default();
    let fx = Fixture::new(&env);

    let result = fx.client.get_validation_result(&12);
    assert_eq!(result.record_id, 12);
    assert!(!result.is_valid);
    assert_eq!(result.validation_score, 0);
    assert_eq!(result.validators.len(), 0);
}
