use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::MainTestResult;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCount {
    pub score: u32,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub total: usize,
    pub average_score: f64,
    pub median_score: f64,
    pub mode_score: u32,
    pub highest_score: u32,
    pub lowest_score: u32,
    // age fields stay None when nobody gave an age
    pub average_age: Option<f64>,
    pub median_age: Option<f64>,
    pub age_range: Option<(u32, u32)>,
    pub distribution: Vec<ScoreCount>,
}

fn average(values: &[u32]) -> f64 {
    values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64
}

// Caller guarantees a non-empty slice
fn median(values: &[u32]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        f64::from(sorted[mid])
    } else {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    }
}

/// Counts per score, ascending by score.
pub fn distribution(scores: &[u32]) -> Vec<ScoreCount> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for score in scores {
        *counts.entry(*score).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(score, count)| ScoreCount { score, count })
        .collect()
}

/// `None` for an empty result set.
pub fn summarize(results: &[MainTestResult]) -> Option<ScoreSummary> {
    let scores: Vec<u32> = results.iter().map(|r| r.score).collect();
    let ages: Vec<u32> = results.iter().filter_map(|r| r.age).collect();

    let highest_score = *scores.iter().max()?;
    let lowest_score = *scores.iter().min()?;
    let distribution = distribution(&scores);

    // ties go to the higher score
    let mode_score = distribution
        .iter()
        .max_by_key(|c| (c.count, c.score))
        .map(|c| c.score)?;

    let (average_age, median_age, age_range) = match (ages.iter().min(), ages.iter().max()) {
        (Some(min), Some(max)) => (Some(average(&ages)), Some(median(&ages)), Some((*min, *max))),
        _ => (None, None, None),
    };

    Some(ScoreSummary {
        total: scores.len(),
        average_score: average(&scores),
        median_score: median(&scores),
        mode_score,
        highest_score,
        lowest_score,
        average_age,
        median_age,
        age_range,
        distribution,
    })
}
