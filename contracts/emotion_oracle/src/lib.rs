#![no_std]
use emotion_common::{
    is_valid_confidence, is_valid_intensity, EmotionRecord, EmotionType, ValidationVote,
    Validator, INITIAL_REPUTATION, MAX_CONTEXT_LEN, MAX_REPUTATION,
};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};

mod events;
mod storage;
pub mod types;

use events::OracleEvents;
use storage::Storage;
use types::{Config, ContractStats, OracleError};

// 0.1 and 0.01 of a 7-decimal stake token.
const DEFAULT_MINIMUM_STAKE: i128 = 1_000_000;
const DEFAULT_VALIDATION_REWARD: i128 = 100_000;
const DEFAULT_VALIDATION_THRESHOLD: u32 = 3;

const REPUTATION_STEP: u32 = 1;

/// Submission ledger and staked validator registry.
///
/// A record is finalized by the first active validator that votes on it;
/// later votes fail with `AlreadyValidated` regardless of their verdict.
#[contract]
pub struct EmotionOracle;

#[contractimpl]
impl EmotionOracle {
    pub fn initialize(env: Env, owner: Address, stake_token: Address) -> Result<(), OracleError> {
        if Storage::has_config(&env) {
            return Err(OracleError::AlreadyInitialized);
        }
        owner.require_auth();

        let config = Config {
            owner,
            stake_token,
            minimum_stake: DEFAULT_MINIMUM_STAKE,
            validation_threshold: DEFAULT_VALIDATION_THRESHOLD,
            validation_reward: DEFAULT_VALIDATION_REWARD,
            paused: false,
        };
        Storage::set_config(&env, &config);

        Ok(())
    }

    // ───────────── SUBMISSION ─────────────

    /// Record a new observation and return its id (ids start at 1).
    pub fn submit_emotion_data(
        env: Env,
        submitter: Address,
        emotion_type: u32,
        intensity: u32,
        confidence: u32,
        context: String,
    ) -> Result<u64, OracleError> {
        submitter.require_auth();
        Self::require_not_paused(&env)?;

        let emotion_type =
            EmotionType::from_u32(emotion_type).ok_or(OracleError::InvalidEmotionType)?;
        if !is_valid_intensity(intensity) {
            return Err(OracleError::InvalidIntensity);
        }
        if !is_valid_confidence(confidence) {
            return Err(OracleError::InvalidConfidence);
        }
        if context.len() > MAX_CONTEXT_LEN {
            return Err(OracleError::ContextTooLong);
        }

        let record = EmotionRecord {
            id: Storage::next_record_id(&env),
            timestamp: env.ledger().timestamp(),
            emotion_type,
            intensity,
            confidence,
            context,
            submitter: submitter.clone(),
            is_validated: false,
            validator: None,
        };
        Storage::set_record(&env, &record);
        Storage::push_submission(&env, &submitter, record.id);

        log!(&env, "emotion record submitted", record.id, submitter);
        OracleEvents::emotion_submitted(&env, &record);

        Ok(record.id)
    }

    // ───────────── VALIDATORS ─────────────

    /// Lock `stake` of the stake token and join the validator set.
    pub fn register_validator(env: Env, validator: Address, stake: i128) -> Result<(), OracleError> {
        validator.require_auth();
        let config = Self::require_not_paused(&env)?;

        if stake < config.minimum_stake {
            return Err(OracleError::InsufficientStake);
        }
        if Storage::get_validator(&env, &validator).is_some_and(|v| v.is_active) {
            return Err(OracleError::AlreadyRegistered);
        }

        token::Client::new(&env, &config.stake_token).transfer(
            &validator,
            &env.current_contract_address(),
            &stake,
        );

        let registered_at = env.ledger().timestamp();
        let profile = Validator {
            address: validator.clone(),
            is_active: true,
            stake_amount: stake,
            reputation_score: INITIAL_REPUTATION,
            total_validations: 0,
            successful_validations: 0,
            registered_at,
        };
        Storage::set_validator(&env, &profile);
        Storage::increment_validator_count(&env);

        OracleEvents::validator_registered(&env, &validator, stake, registered_at);
        log!(&env, "validator registered", validator, stake);

        Ok(())
    }

    /// Finalize a record with the caller's verdict.
    pub fn validate_emotion_data(
        env: Env,
        validator: Address,
        record_id: u64,
        is_valid: bool,
    ) -> Result<(), OracleError> {
        validator.require_auth();
        Self::require_not_paused(&env)?;

        let mut profile = Storage::get_validator(&env, &validator)
            .filter(|v| v.is_active)
            .ok_or(OracleError::NotActiveValidator)?;
        let mut record = Storage::get_record(&env, record_id).ok_or(OracleError::NotFound)?;
        if record.is_validated {
            return Err(OracleError::AlreadyValidated);
        }

        let vote = ValidationVote {
            record_id,
            validator: validator.clone(),
            is_valid,
            timestamp: env.ledger().timestamp(),
        };
        Storage::set_vote(&env, &vote);

        record.is_validated = true;
        record.validator = Some(validator.clone());
        Storage::set_record(&env, &record);

        profile.total_validations += 1;
        if is_valid {
            profile.successful_validations += 1;
        }
        profile.reputation_score = profile
            .reputation_score
            .saturating_add(REPUTATION_STEP)
            .min(MAX_REPUTATION);
        Storage::set_validator(&env, &profile);

        OracleEvents::emotion_validated(&env, record_id, &validator, is_valid);
        log!(&env, "emotion record validated", record_id, validator, is_valid);

        Ok(())
    }

    // ───────────── OWNER ─────────────

    pub fn set_minimum_stake(env: Env, caller: Address, minimum_stake: i128) -> Result<(), OracleError> {
        let mut config = Self::require_owner(&env, &caller)?;
        if minimum_stake <= 0 {
            return Err(OracleError::InvalidAmount);
        }
        config.minimum_stake = minimum_stake;
        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn set_validation_threshold(env: Env, caller: Address, threshold: u32) -> Result<(), OracleError> {
        let mut config = Self::require_owner(&env, &caller)?;
        if threshold == 0 {
            return Err(OracleError::InvalidThreshold);
        }
        config.validation_threshold = threshold;
        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn set_validation_reward(env: Env, caller: Address, reward: i128) -> Result<(), OracleError> {
        let mut config = Self::require_owner(&env, &caller)?;
        if reward < 0 {
            return Err(OracleError::InvalidAmount);
        }
        config.validation_reward = reward;
        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), OracleError> {
        Self::set_paused(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), OracleError> {
        Self::set_paused(&env, &caller, false)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), OracleError> {
        let mut config = Self::require_owner(&env, &caller)?;
        config.owner = new_owner.clone();
        Storage::set_config(&env, &config);
        OracleEvents::ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    // ───────────── VIEWS ─────────────

    pub fn get_emotion_data(env: Env, record_id: u64) -> Result<EmotionRecord, OracleError> {
        Storage::get_record(&env, record_id).ok_or(OracleError::NotFound)
    }

    pub fn get_validator(env: Env, validator: Address) -> Result<Validator, OracleError> {
        Storage::get_validator(&env, &validator).ok_or(OracleError::NotFound)
    }

    pub fn is_active_validator(env: Env, validator: Address) -> bool {
        Storage::get_validator(&env, &validator).is_some_and(|v| v.is_active)
    }

    pub fn get_validation_vote(env: Env, record_id: u64, validator: Address) -> Option<ValidationVote> {
        Storage::get_vote(&env, record_id, &validator)
    }

    pub fn get_submissions(env: Env, submitter: Address) -> Vec<u64> {
        Storage::get_submissions(&env, &submitter)
    }

    pub fn get_config(env: Env) -> Result<Config, OracleError> {
        Storage::get_config(&env)
    }

    pub fn get_contract_stats(env: Env) -> Result<ContractStats, OracleError> {
        let config = Storage::get_config(&env)?;
        let contract_balance = token::Client::new(&env, &config.stake_token)
            .balance(&env.current_contract_address());

        Ok(ContractStats {
            total_records: Storage::get_record_count(&env),
            total_validators: Storage::get_validator_count(&env),
            contract_balance,
        })
    }
}

impl EmotionOracle {
    fn require_not_paused(env: &Env) -> Result<Config, OracleError> {
        let config = Storage::get_config(env)?;
        if config.paused {
            return Err(OracleError::ContractPaused);
        }
        Ok(config)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<Config, OracleError> {
        caller.require_auth();
        let config = Storage::get_config(env)?;
        if config.owner != *caller {
            return Err(OracleError::NotOwner);
        }
        Ok(config)
    }

    fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), OracleError> {
        let mut config = Self::require_owner(env, caller)?;
        config.paused = paused;
        Storage::set_config(env, &config);
        OracleEvents::paused_changed(env, paused);
        Ok(())
    }
}
