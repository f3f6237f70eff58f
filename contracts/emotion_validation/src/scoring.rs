use emotion_common::{ValidationRule, MAX_CONFIDENCE, MAX_INTENSITY, MIN_INTENSITY};

pub const MAX_SCORE: u32 = 100;
const INTENSITY_WEIGHT: u32 = 50;
const CONFIDENCE_WEIGHT: u32 = 50;

/// Scores a reading against the rule for its emotion type.
///
/// Intensity inside `[min_intensity, max_intensity]` earns the full intensity
/// weight and nothing otherwise. Confidence at or above `min_confidence` earns
/// the full confidence weight; below it the weight is scaled down linearly.
/// A missing or inactive rule passes the reading through with `MAX_SCORE`.
pub fn score(rule: Option<&ValidationRule>, intensity: u32, confidence: u32) -> u32 {
    let rule = match rule {
        Some(rule) if rule.is_active => rule,
        _ => return MAX_SCORE,
    };

    let intensity_score = if (rule.min_intensity..=rule.max_intensity).contains(&intensity) {
        INTENSITY_WEIGHT
    } else {
        0
    };

    // min_confidence == 0 always takes the first branch.
    let confidence_score = if confidence >= rule.min_confidence {
        CONFIDENCE_WEIGHT
    } else {
        CONFIDENCE_WEIGHT * confidence / rule.min_confidence
    };

    intensity_score + confidence_score
}

pub fn is_valid_rule(min_intensity: u32, max_intensity: u32, min_confidence: u32) -> bool {
    min_intensity >= MIN_INTENSITY
        && max_intensity <= MAX_INTENSITY
        && min_intensity <= max_intensity
        && min_confidence <= MAX_CONFIDENCE
}
