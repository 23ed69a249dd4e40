use crate::cli::RunArgs;
use crate::config::PartialMissionConfig;
use crate::error::Result;
use crate::output;
use gammasens::core::io::calibration::load_calibration;
use gammasens::workflows::survey;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run(args: RunArgs) -> Result<()> {
    let table = load_calibration(&args.calibration)?;
    info!(
        bins = table.len(),
        path = %args.calibration.display(),
        "Calibration table loaded."
    );

    fs::create_dir_all(&args.output_dir)?;

    for mission_path in &args.mission {
        let mission = PartialMissionConfig::from_file(mission_path)?.merge_with_cli(&args)?;
        let stem = file_stem(mission_path);
        let label = mission.name.as_deref().unwrap_or(stem);
        info!(mission = %label, "Evaluating mission.");

        let curves = survey::run(&table, &mission.background, &mission.exposure)?;

        let output_path = args.output_dir.join(format!("{}-curves.csv", stem));
        output::write_curves(&output_path, &curves)?;
        println!("✅ {} -> {}", label, output_path.display());
    }

    Ok(())
}

fn file_stem(path: &Path) -> &str {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("mission")
}
