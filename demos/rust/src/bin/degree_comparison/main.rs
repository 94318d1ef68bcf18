use prefsim_sim::{run, ComparisonConfig, SimError};

fn main() -> Result<(), SimError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ComparisonConfig::default();
    let report = run(&config)?;

    log::info!(
        "preferential attachment: {} vertices, mean degree {:.3}, degrees {}..={}",
        report.preferential.len,
        report.preferential.mean,
        report.preferential.min,
        report.preferential.max
    );
    log::info!(
        "random graph (p = {:.6}): {} vertices, mean degree {:.3}, degrees {}..={}",
        report.edge_probability,
        report.random.len,
        report.random.mean,
        report.random.min,
        report.random.max
    );
    Ok(())
}
