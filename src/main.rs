use std::io::Read;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitinsights::{Config, EngineConfig, InsightEngine, Insights, UserData};

#[derive(Parser, Debug)]
#[command(name = "gitinsights")]
#[command(version = "0.1.0")]
#[command(about = "Generate developer insights from exported GitHub profile data")]
struct Args {
    /// JSON file with profile, repositories and events ("-" reads stdin)
    #[arg(short, long)]
    input: String,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Seed for reproducible placeholder scores
    #[arg(long)]
    seed: Option<u64>,

    /// Minutes east of UTC used for hour and weekday bucketing
    #[arg(long, allow_hyphen_values = true)]
    utc_offset_minutes: Option<i32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("gitinsights=info".parse()?))
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(minutes) = args.utc_offset_minutes {
        config.utc_offset_minutes = minutes;
    }
    config.validate()?;

    let data = read_input(&args.input)?;
    let engine = InsightEngine::with_config(EngineConfig::from(&config));
    let insights = engine.generate_insights(&data);

    output_insights(data.login(), &insights, &args)?;

    Ok(())
}

fn read_input(path: &str) -> anyhow::Result<UserData> {
    let data = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        UserData::from_json_str(&buffer)?
    } else {
        let file = std::fs::File::open(path).with_context(|| format!("failed to open {}", path))?;
        UserData::from_reader(std::io::BufReader::new(file))?
    };
    Ok(data)
}

fn output_insights(login: &str, insights: &Insights, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(insights)?,
        "markdown" => format_markdown(login, insights),
        _ => format_text(login, insights),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(login: &str, insights: &Insights) -> String {
    let mut output = String::new();
    let personality = &insights.personality;

    output.push_str(&format!("\n=== Developer Insights: {} ===\n\n", login));
    output.push_str(&format!("Personality: {}\n", personality.personality_type));
    output.push_str(&format!("  {}\n\n", personality.description));

    output.push_str("Scores:\n");
    for (name, score) in personality.scores.iter() {
        output.push_str(&format!("  {:<14} {:>4.1}/10\n", name.to_string(), score));
    }

    output.push_str("\nStrengths:\n");
    for strength in &personality.strengths {
        output.push_str(&format!("  + {}\n", strength));
    }
    output.push_str("\nGrowth Areas:\n");
    for area in &personality.growth_areas {
        output.push_str(&format!("  - {}\n", area));
    }

    let patterns = &insights.work_patterns;
    output.push_str("\nWork Patterns:\n");
    output.push_str(&format!("  Style: {}\n", patterns.working_style));
    if !patterns.peak_hours.is_empty() {
        let hours: Vec<String> = patterns.peak_hours.iter().map(|h| format!("{:02}:00", h)).collect();
        output.push_str(&format!("  Peak hours: {}\n", hours.join(", ")));
    }
    output.push_str(&format!(
        "  Burnout risk: {} ({} points)\n",
        patterns.burnout.level, patterns.burnout.score
    ));
    output.push_str(&format!("  {}\n", patterns.burnout.advice));

    let style = &insights.coding_style;
    output.push_str("\nCoding Style:\n");
    for usage in &style.languages {
        output.push_str(&format!(
            "  {} ({} repos, {:.1}%)\n",
            usage.language, usage.repositories, usage.percentage
        ));
    }
    output.push_str(&format!("  Project types: {}\n", style.project_types.join(", ")));
    output.push_str(&format!("  Commits: {}\n", style.commit_style));
    output.push_str(&format!("  Testing: {}\n", style.testing_approach));

    if !insights.recommendations.is_empty() {
        output.push_str("\nRecommendations:\n");
        for rec in &insights.recommendations {
            output.push_str(&format!(
                "  {} [{}] {} (confidence: {:.0}%)\n      {}\n",
                rec.icon,
                rec.kind,
                rec.title,
                rec.confidence * 100.0,
                rec.description
            ));
        }
    }

    let predictions = &insights.predictions;
    output.push_str("\nPredictions:\n");
    output.push_str(&format!(
        "  Next technology: {} ({:.0}%)\n",
        predictions.next_technology.primary,
        predictions.next_technology.confidence * 100.0
    ));
    if !predictions.next_technology.alternatives.is_empty() {
        output.push_str(&format!(
            "  Alternatives: {}\n",
            predictions.next_technology.alternatives.join(", ")
        ));
    }
    output.push_str(&format!("  Activity trend: {}\n", predictions.activity_trend));
    output.push_str(&format!(
        "  Collaboration: {} - {}\n",
        predictions.collaboration_growth.trend, predictions.collaboration_growth.description
    ));
    output.push_str(&format!(
        "  Skills: {} - {}\n",
        predictions.skill_development.trend, predictions.skill_development.description
    ));

    output.push_str(&format!(
        "\nGenerated on: {}\n",
        insights.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(login: &str, insights: &Insights) -> String {
    let mut output = String::new();
    let personality = &insights.personality;

    output.push_str(&format!("# Developer Insights: {}\n\n", login));
    output.push_str(&format!(
        "**{}**\n\n> {}\n\n",
        personality.personality_type, personality.description
    ));

    output.push_str("## Personality Scores\n\n");
    output.push_str("| Trait | Score |\n|-------|-------|\n");
    for (name, score) in personality.scores.iter() {
        output.push_str(&format!("| {} | {:.1} |\n", name, score));
    }

    output.push_str("\n## Strengths\n\n");
    for strength in &personality.strengths {
        output.push_str(&format!("- {}\n", strength));
    }
    output.push_str("\n## Growth Areas\n\n");
    for area in &personality.growth_areas {
        output.push_str(&format!("- {}\n", area));
    }

    let patterns = &insights.work_patterns;
    output.push_str("\n## Work Patterns\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Working Style | {} |\n", patterns.working_style));
    output.push_str(&format!("| Burnout Risk | {} |\n", patterns.burnout.level));
    output.push_str(&format!("\n{}\n", patterns.burnout.advice));
    for rec in &patterns.burnout.recommendations {
        output.push_str(&format!("- {}\n", rec));
    }

    let style = &insights.coding_style;
    output.push_str("\n## Coding Style\n\n");
    output.push_str("| Language | Repositories | Share |\n|----------|--------------|-------|\n");
    for usage in &style.languages {
        output.push_str(&format!(
            "| {} | {} | {:.1}% |\n",
            usage.language, usage.repositories, usage.percentage
        ));
    }
    output.push_str(&format!(
        "\n**Project types:** {}  \n**Commit style:** {}  \n**Testing:** {}\n",
        style.project_types.join(", "),
        style.commit_style,
        style.testing_approach
    ));

    if !insights.recommendations.is_empty() {
        output.push_str("\n## Recommendations\n\n");
        for rec in &insights.recommendations {
            output.push_str(&format!(
                "- {} **{}** ({}, {:.0}%): {}\n",
                rec.icon,
                rec.title,
                rec.kind,
                rec.confidence * 100.0,
                rec.description
            ));
        }
    }

    let predictions = &insights.predictions;
    output.push_str("\n## Predictions\n\n");
    output.push_str("| Prediction | Value |\n|------------|-------|\n");
    output.push_str(&format!(
        "| Next Technology | {} |\n",
        predictions.next_technology.primary
    ));
    output.push_str(&format!("| Activity Trend | {} |\n", predictions.activity_trend));
    output.push_str(&format!(
        "| Collaboration | {} |\n",
        predictions.collaboration_growth.trend
    ));
    output.push_str(&format!(
        "| Skill Development | {} |\n",
        predictions.skill_development.trend
    ));
    output.push_str(&format!("\n{}\n", predictions.next_technology.reasoning));

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        insights.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
