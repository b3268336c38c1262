use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rgc::config::RGCConfig;
use rgc::io::cli::Cli;
use rgc::io::output::{RGCOutput, format_report};
use rgc::opt::rgc::RGCOptimizer;
use rgc::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: RGCConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RGCConfig::default()
        }
        Some(config_file) => {
            let file = fs::File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            serde_json::from_reader(file).context("incorrect config file format")?
        }
    };

    config.validate().context("invalid config")?;
    info!("Successfully parsed RGCConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = uldpack::io::import(&ext_instance)?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let population = RGCOptimizer::new(instance, config, rng).solve();
    let (best, score) = population
        .best()
        .context("no candidate solutions were constructed")?;

    info!(
        "[MAIN] best candidate scores {score}, {} items placed, density {:.3}%",
        best.n_placed(),
        best.density() * 100.0
    );

    {
        let output = RGCOutput {
            instance: ext_instance,
            solution: uldpack::io::export(best, &config.penalty_weights, *EPOCH),
            config,
        };
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let report = format_report(best, &config.penalty_weights);
        let report_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.txt"));
        io::write_report(&report, Path::new(&report_path))?;
    }

    Ok(())
}
