//! Pure analysis functions over a window of stress assessments.
//!
//! All functions take assessments in chronological order and are deterministic,
//! so the insights endpoint stays reproducible for a fixed window.

use std::collections::HashMap;

use chrono::Timelike;

use crate::model::stress::{Frequency, PeakHour, StressAssessment, Trend};

/// Population standard deviation above which the trend is called fluctuating.
const FLUCTUATION_STDDEV: f64 = 2.5;

/// Mean overall score rounded to one decimal place.
pub fn average_score(assessments: &[StressAssessment]) -> f64 {
    if assessments.is_empty() {
        return 0.0;
    }

    let sum: i64 = assessments.iter().map(|a| a.score as i64).sum();
    let mean = sum as f64 / assessments.len() as f64;

    (mean * 10.0).round() / 10.0
}

/// Classifies the stress trend over a chronological window.
///
/// Fewer than three assessments cannot establish a direction. A window whose
/// population standard deviation exceeds the fluctuation cutoff is classified
/// before any direction is considered. Otherwise the first third and last
/// third of the window are averaged and compared.
pub fn trend(assessments: &[StressAssessment]) -> Trend {
    if assessments.len() < 3 {
        return Trend::InsufficientData;
    }

    let scores: Vec<f64> = assessments.iter().map(|a| a.score as f64).collect();

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let variance =
        scores.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / scores.len() as f64;

    if variance.sqrt() > FLUCTUATION_STDDEV {
        return Trend::Fluctuating;
    }

    let third = scores.len() / 3;
    let first: f64 = scores[..third].iter().sum::<f64>() / third as f64;
    let last: f64 = scores[scores.len() - third..].iter().sum::<f64>() / third as f64;

    let diff = last - first;

    if diff <= -1.0 {
        Trend::Improving
    } else if diff >= 1.0 {
        Trend::Worsening
    } else {
        Trend::Stable
    }
}

/// Top-N labels by occurrence count.
///
/// Ties are broken alphabetically so the ordering is stable.
pub fn top_frequencies(labels: impl Iterator<Item = String>, top: usize) -> Vec<Frequency> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut frequencies: Vec<Frequency> = counts
        .into_iter()
        .map(|(label, count)| Frequency { label, count })
        .collect();

    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then(a.label.cmp(&b.label)));
    frequencies.truncate(top);

    frequencies
}

/// Top-N hour-of-day buckets by average score.
///
/// Ties are broken by earlier hour so the ordering is stable.
pub fn peak_hours(assessments: &[StressAssessment], top: usize) -> Vec<PeakHour> {
    let mut buckets: HashMap<u32, (i64, u64)> = HashMap::new();

    for assessment in assessments {
        let entry = buckets.entry(assessment.recorded_at.hour()).or_insert((0, 0));
        entry.0 += assessment.score as i64;
        entry.1 += 1;
    }

    let mut hours: Vec<PeakHour> = buckets
        .into_iter()
        .map(|(hour, (sum, count))| PeakHour {
            hour,
            average_score: sum as f64 / count as f64,
        })
        .collect();

    hours.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.hour.cmp(&b.hour))
    });
    hours.truncate(top);

    hours
}

/// Template-generated summary strings from the computed analysis.
pub fn summaries(
    average: f64,
    trend: Trend,
    common_triggers: &[Frequency],
    peak_hours: &[PeakHour],
) -> Vec<String> {
    let mut insights = Vec::new();

    match trend {
        Trend::Improving => {
            insights.push("Your stress levels are improving over this period.".to_string())
        }
        Trend::Worsening => {
            insights.push("Your stress levels are trending upward over this period.".to_string())
        }
        Trend::Stable => insights.push("Your stress levels are holding steady.".to_string()),
        Trend::Fluctuating => {
            insights.push("Your stress levels vary widely from day to day.".to_string())
        }
        Trend::InsufficientData => insights
            .push("Record a few more assessments to unlock trend analysis.".to_string()),
    }

    if average > 0.0 {
        insights.push(format!("Your average stress score is {:.1} out of 10.", average));
    }

    if let Some(top_trigger) = common_triggers.first() {
        insights.push(format!(
            "Your most common stress trigger is '{}' ({} times).",
            top_trigger.label, top_trigger.count
        ));
    }

    if let Some(peak) = peak_hours.first() {
        insights.push(format!(
            "Your stress tends to peak around {}:00.",
            peak.hour
        ));
    }

    insights
}
