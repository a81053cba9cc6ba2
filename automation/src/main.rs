use anyhow::Context;
use std::env;
use std::fs;

use crm_automation::config::Config;
use crm_automation::logging;
use crm_automation::workflows::{ConditionRegistry, DataType, WorkflowStep};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    logging::init(&config)?;

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        anyhow::bail!("usage: {} <step.json> <data.json>", args[0]);
    }

    let step_json = fs::read_to_string(&args[1])
        .with_context(|| format!("reading step definition {}", args[1]))?;
    let data_json = fs::read_to_string(&args[2])
        .with_context(|| format!("reading trigger data {}", args[2]))?;

    let step = WorkflowStep::from_json(&step_json)?;
    let data: DataType = serde_json::from_str(&data_json).context("parsing trigger data")?;

    let registry = ConditionRegistry::with_defaults()?;
    tracing::info!("Evaluating {} against {} data", step.slug, data.kind());

    let met = registry.evaluate(&step, &data, logging::default_logger())?;
    println!("condition met: {}", met);

    Ok(())
}
