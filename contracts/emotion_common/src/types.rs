use soroban_sdk::{contracttype, Address, Env, String, Vec};

pub const MIN_INTENSITY: u32 = 1;
pub const MAX_INTENSITY: u32 = 10;
pub const MAX_CONFIDENCE: u32 = 100;
pub const MAX_CONTEXT_LEN: u32 = 280;

pub const INITIAL_REPUTATION: u32 = 100;
pub const MAX_REPUTATION: u32 = 1_000;

/// Closed set of emotions an observation can carry, encoded `0..=5` on the wire.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmotionType {
    Joy = 0,
    Sadness = 1,
    Anger = 2,
    Fear = 3,
    Surprise = 4,
    Disgust = 5,
}

impl EmotionType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(EmotionType::Joy),
            1 => Some(EmotionType::Sadness),
            2 => Some(EmotionType::Anger),
            3 => Some(EmotionType::Fear),
            4 => Some(EmotionType::Surprise),
            5 => Some(EmotionType::Disgust),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}

pub fn is_valid_intensity(intensity: u32) -> bool {
    (MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity)
}

pub fn is_valid_confidence(confidence: u32) -> bool {
    confidence <= MAX_CONFIDENCE
}

/// One submitted observation, owned by the oracle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmotionRecord {
    pub id: u64,
    pub timestamp: u64,
    pub emotion_type: EmotionType,
    pub intensity: u32,
    pub confidence: u32,
    pub context: String,
    pub submitter: Address,
    pub is_validated: bool,
    pub validator: Option<Address>, // set together with is_validated
}

impl EmotionRecord {
    /// True when the caller-supplied reading is the one the oracle recorded.
    pub fn matches(&self, emotion_type: EmotionType, intensity: u32, confidence: u32) -> bool {
        self.emotion_type == emotion_type
            && self.intensity == intensity
            && self.confidence == confidence
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Validator {
    pub address: Address,
    pub is_active: bool,
    pub stake_amount: i128,
    pub reputation_score: u32,
    pub total_validations: u32,
    pub successful_validations: u32,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationVote {
    pub record_id: u64,
    pub validator: Address,
    pub is_valid: bool,
    pub timestamp: u64,
}

/// Per-emotion acceptance bounds applied by the validation aggregator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationRule {
    pub emotion_type: EmotionType,
    pub min_intensity: u32,
    pub max_intensity: u32,
    pub min_confidence: u32,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationResult {
    pub record_id: u64,
    pub is_valid: bool,
    pub validation_score: u32,
    pub validators: Vec<Address>,
}

impl ValidationResult {
    pub fn empty(env: &Env, record_id: u64) -> Self {
        Self {
            record_id,
            is_valid: false,
            validation_score: 0,
            validators: Vec::new(env),
        }
    }
}

/// Analytics-visible copy of a record that passed validation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoredRecord {
    pub storage_id: u64,
    pub record_id: u64,
    pub timestamp: u64,
    pub emotion_type: EmotionType,
    pub intensity: u32,
    pub confidence: u32,
    pub context: String,
    pub submitter: Address,
    pub is_processed: bool,
    pub validation_score: u32,
}
