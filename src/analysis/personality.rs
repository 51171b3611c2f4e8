use crate::analysis::rules::{first_match, Rule};
use crate::models::{PersonalityProfile, PersonalityScores, PersonalityTrait, PersonalityType};

const STRENGTH_THRESHOLD: f64 = 7.0;
const GROWTH_THRESHOLD: f64 = 5.0;

const NO_STANDOUT_STRENGTH: &str = "Well-rounded skills without a single dominant trait";
const NO_GROWTH_AREA: &str = "Keep building on your balanced foundation";

const PERSONALITY_RULES: [Rule<PersonalityScores, PersonalityType>; 4] = [
    Rule::new(PersonalityType::Innovator, |s: &PersonalityScores| {
        s.innovation > 7.0 && s.exploration > 7.0
    }),
    Rule::new(PersonalityType::TeamPlayer, |s: &PersonalityScores| {
        s.collaboration > 7.0 && s.consistency > 7.0
    }),
    Rule::new(PersonalityType::ReliableContributor, |s: &PersonalityScores| {
        s.consistency > 8.0
    }),
    Rule::new(PersonalityType::TechnologyExplorer, |s: &PersonalityScores| {
        s.exploration > 8.0
    }),
];

pub fn classify_personality(scores: &PersonalityScores) -> PersonalityType {
    first_match(&PERSONALITY_RULES, scores)
        .copied()
        .unwrap_or(PersonalityType::BalancedDeveloper)
}

pub fn build_profile(scores: PersonalityScores) -> PersonalityProfile {
    let personality_type = classify_personality(&scores);

    let mut strengths: Vec<String> = scores
        .iter()
        .filter(|(_, score)| *score > STRENGTH_THRESHOLD)
        .map(|(t, _)| strength_text(t).to_string())
        .collect();
    if strengths.is_empty() {
        strengths.push(NO_STANDOUT_STRENGTH.to_string());
    }

    let mut growth_areas: Vec<String> = scores
        .iter()
        .filter(|(_, score)| *score < GROWTH_THRESHOLD)
        .map(|(t, _)| growth_text(t).to_string())
        .collect();
    if growth_areas.is_empty() {
        growth_areas.push(NO_GROWTH_AREA.to_string());
    }

    PersonalityProfile {
        scores,
        personality_type,
        description: description(personality_type).to_string(),
        strengths,
        growth_areas,
    }
}

pub fn description(personality: PersonalityType) -> &'static str {
    match personality {
        PersonalityType::Innovator => {
            "You push boundaries with original projects and a wide technical range."
        }
        PersonalityType::TeamPlayer => {
            "You thrive in shared codebases and show up for your collaborators reliably."
        }
        PersonalityType::ReliableContributor => {
            "Steady, dependable output is your signature. Projects can count on you."
        }
        PersonalityType::TechnologyExplorer => {
            "You love trying new languages and tools and rarely stay in one stack for long."
        }
        PersonalityType::BalancedDeveloper => {
            "You combine several strengths without leaning too hard on any single one."
        }
    }
}

fn strength_text(t: PersonalityTrait) -> &'static str {
    match t {
        PersonalityTrait::Innovation => "Creative problem solving and original projects",
        PersonalityTrait::Collaboration => "Strong teamwork and community engagement",
        PersonalityTrait::Consistency => "Reliable, sustained contribution habits",
        PersonalityTrait::Exploration => "Broad curiosity across languages and domains",
        PersonalityTrait::Leadership => "Projects that others adopt and build on",
    }
}

fn growth_text(t: PersonalityTrait) -> &'static str {
    match t {
        PersonalityTrait::Innovation => "Start an original project around an idea you care about",
        PersonalityTrait::Collaboration => "Contribute pull requests and reviews to other projects",
        PersonalityTrait::Consistency => "Build a regular coding rhythm across the week",
        PersonalityTrait::Exploration => "Experiment with a language outside your comfort zone",
        PersonalityTrait::Leadership => "Share your work and help others adopt it",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [f64; 5]) -> PersonalityScores {
        PersonalityScores {
            innovation: values[0],
            collaboration: values[1],
            consistency: values[2],
            exploration: values[3],
            leadership: values[4],
        }
    }

    #[test]
    fn test_classification_order() {
        assert_eq!(
            classify_personality(&scores([8.0, 9.0, 9.0, 8.0, 5.0])),
            PersonalityType::Innovator
        );
        assert_eq!(
            classify_personality(&scores([5.0, 7.5, 9.0, 5.0, 5.0])),
            PersonalityType::TeamPlayer
        );
        assert_eq!(
            classify_personality(&scores([5.0, 5.0, 8.5, 9.0, 5.0])),
            PersonalityType::ReliableContributor
        );
        assert_eq!(
            classify_personality(&scores([5.0, 5.0, 5.0, 8.5, 5.0])),
            PersonalityType::TechnologyExplorer
        );
        assert_eq!(
            classify_personality(&scores([7.0, 7.0, 8.0, 8.0, 7.0])),
            PersonalityType::BalancedDeveloper
        );
    }

    #[test]
    fn test_strengths_and_growth_areas() {
        let profile = build_profile(scores([9.0, 3.0, 6.0, 6.0, 7.5]));
        assert_eq!(profile.strengths.len(), 2);
        assert_eq!(profile.strengths[0], strength_text(PersonalityTrait::Innovation));
        assert_eq!(profile.growth_areas, vec![growth_text(PersonalityTrait::Collaboration)]);
    }

    #[test]
    fn test_fallback_sentences() {
        let profile = build_profile(scores([6.0; 5]));
        assert_eq!(profile.personality_type, PersonalityType::BalancedDeveloper);
        assert_eq!(profile.strengths, vec![NO_STANDOUT_STRENGTH]);
        assert_eq!(profile.growth_areas, vec![NO_GROWTH_AREA]);
        assert!(!profile.description.is_empty());
    }
}
