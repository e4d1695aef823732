use std::sync::Arc;

use anyhow::{Context, bail};
use score_flow::{
    FormState, HttpScoringService, ScoreDomain, SubmissionController, SubmissionState, fields,
    present,
};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = std::env::args().nth(1).context(
        "usage: credit-form-cli <inputs.json>\n\
         The file maps field display names to raw values, e.g.\n\
         { \"Average Monthly Balance\": \"39655.51\", \"Use of Overdraft\": true }",
    )?;

    let raw = std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let inputs: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&raw).context("inputs file is not a JSON object")?;

    for name in inputs.keys() {
        if fields().iter().all(|field| field.name != name) {
            bail!("unknown field in {path}: {name:?}");
        }
    }

    let form = FormState::new();
    for field in fields() {
        let Some(value) = inputs.get(field.name) else {
            continue;
        };
        match value {
            serde_json::Value::Bool(checked) => form.set_field(field.name, *checked),
            serde_json::Value::String(text) => form.set_field(field.name, text.as_str()),
            serde_json::Value::Number(number) => form.set_field(field.name, number.to_string()),
            other => bail!("field {:?} has unsupported value: {other}", field.name),
        }
    }

    let service = HttpScoringService::from_env();
    info!(base_url = service.base_url(), "submitting scoring request");

    let mut controller = SubmissionController::new(Arc::new(service));
    match controller.submit(&form).await {
        SubmissionState::Success(assessment) => {
            let bucket = present(assessment.credit_score, ScoreDomain::Banded);
            println!("Credit Score:   {}", assessment.credit_score);
            println!("Tier:           {}", bucket.tier.label());
            println!("Risk Category:  {}", assessment.risk_category);
            println!("Risk Level:     {}", assessment.risk_level);
            println!("Recommendation: {}", assessment.recommendation);
            println!("{}", fill_bar(bucket.fill_percent));
            Ok(())
        }
        SubmissionState::Failed(err) => bail!("{err}"),
        state => bail!("submission ended in unexpected state: {state:?}"),
    }
}

fn fill_bar(fill_percent: f64) -> String {
    const WIDTH: usize = 40;
    let filled = (fill_percent / 100.0 * WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled),
        fill_percent
    )
}
