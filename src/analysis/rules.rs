//! Declarative decision tables.
//!
//! Classifications are expressed as ordered `(label, predicate)` rows and threshold
//! ladders so each row can be read and tested on its own.

pub struct Rule<I, L> {
    pub label: L,
    pub applies: fn(&I) -> bool,
}

impl<I, L> Rule<I, L> {
    pub const fn new(label: L, applies: fn(&I) -> bool) -> Self {
        Self { label, applies }
    }
}

/// Label of the first row whose predicate holds.
pub fn first_match<'r, I, L>(rules: &'r [Rule<I, L>], input: &I) -> Option<&'r L> {
    rules
        .iter()
        .find(|rule| (rule.applies)(input))
        .map(|rule| &rule.label)
}

/// Labels of every row whose predicate holds, in table order.
pub fn all_matches<'r, I, L>(rules: &'r [Rule<I, L>], input: &'r I) -> impl Iterator<Item = &'r L> {
    rules
        .iter()
        .filter(move |rule| (rule.applies)(input))
        .map(|rule| &rule.label)
}

/// Maps a measurement to points using descending `(threshold, points)` steps.
#[derive(Debug, Clone, Copy)]
pub struct Ladder {
    steps: &'static [(f64, u32)],
    inclusive: bool,
}

impl Ladder {
    /// Awards a step when the value is strictly above its threshold.
    pub const fn above(steps: &'static [(f64, u32)]) -> Self {
        Self {
            steps,
            inclusive: false,
        }
    }

    /// Awards a step when the value reaches its threshold.
    pub const fn at_least(steps: &'static [(f64, u32)]) -> Self {
        Self {
            steps,
            inclusive: true,
        }
    }

    pub fn points(&self, value: f64) -> u32 {
        self.steps
            .iter()
            .find(|(threshold, _)| {
                if self.inclusive {
                    value >= *threshold
                } else {
                    value > *threshold
                }
            })
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_respects_order() {
        let rules = [
            Rule::new("big", |n: &u32| *n > 100),
            Rule::new("medium", |n: &u32| *n > 10),
            Rule::new("any", |_: &u32| true),
        ];
        assert_eq!(first_match(&rules, &500), Some(&"big"));
        assert_eq!(first_match(&rules, &50), Some(&"medium"));
        assert_eq!(first_match(&rules, &1), Some(&"any"));
    }

    #[test]
    fn test_all_matches() {
        let rules = [
            Rule::new("even", |n: &u32| n % 2 == 0),
            Rule::new("small", |n: &u32| *n < 10),
        ];
        assert_eq!(all_matches(&rules, &4).collect::<Vec<_>>(), vec![&"even", &"small"]);
        assert_eq!(all_matches(&rules, &11).count(), 0);
    }

    #[test]
    fn test_ladder_boundaries() {
        const STEPS: &[(f64, u32)] = &[(5.0, 3), (3.0, 2), (1.5, 1)];
        assert_eq!(Ladder::above(STEPS).points(5.0), 2);
        assert_eq!(Ladder::at_least(STEPS).points(5.0), 3);
        assert_eq!(Ladder::above(STEPS).points(1.5), 0);
        assert_eq!(Ladder::above(STEPS).points(1.6), 1);
        assert_eq!(Ladder::above(STEPS).points(99.0), 3);
    }
}
