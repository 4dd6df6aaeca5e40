use anyhow::Context;
use chrono::Local;
use tahajod::{Planner, PlannerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let planner = Planner::new(PlannerConfig::default());
    let today = Local::now().date_naive();

    let report = planner
        .schedule_for(None, today)
        .await
        .context("failed to compute Tahajjud schedule")?;

    println!("{report}");
    Ok(())
}
