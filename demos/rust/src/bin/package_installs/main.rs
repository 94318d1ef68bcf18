use std::path::PathBuf;

use prefsim_sim::packages::PackageScanner;
use prefsim_sim::ScanError;

fn install_commands(root: PathBuf) -> Result<Vec<String>, ScanError> {
    PackageScanner::new(root).install_commands()
}

fn main() -> Result<(), ScanError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".."));

    for command in install_commands(root)? {
        println!("{command}");
    }
    Ok(())
}
