use anyhow::Context;
use bizdays::{holidays, month_progress};
use chrono::Local;

fn main() -> anyhow::Result<()> {
    let holidays = holidays::embedded().context("failed to load holidays")?;
    let today = Local::now().naive_local();
    let report = month_progress(today, &holidays).context("failed to count business days")?;
    print!("{}", report);
    Ok(())
}
