use std::collections::{BTreeSet, HashMap};

use crate::models::Repository;

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A sub-signal's contribution, never negative and never above its cap.
pub fn capped(value: f64, cap: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, cap)
}

pub fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

pub fn distinct_languages(repos: &[Repository]) -> BTreeSet<&str> {
    repos.iter().filter_map(Repository::language).collect()
}

/// Languages with the number of repositories using each, most used first, ties by name.
pub fn language_frequencies(repos: &[Repository]) -> Vec<(&str, u32)> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for language in repos.iter().filter_map(Repository::language) {
        *counts.entry(language).or_insert(0) += 1;
    }

    let mut frequencies: Vec<_> = counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    frequencies
}

/// Coefficient of variation (population standard deviation over mean), `None` when the
/// mean is zero.
pub fn coefficient_of_variation(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    if mean == 0.0 {
        return None;
    }
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    Some(variance.sqrt() / mean)
}
