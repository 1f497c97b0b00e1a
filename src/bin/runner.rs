//! Runner Binary
//!
//! Runs one experiment from seven positional parameters,
//! or every row of a parameter file.

use bush_mosteller::*;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

const USAGE: &str = "\
Usage: runner game mode habituation aspiration learning_rate nb_repetitions nb_episodes
   OR  runner source_file
    - game:
        - PD: Prisoner's Dilemma
        - SG: Stag Hunt
        - CH: Chicken
    - mode:
        - classic
        - fear
        - greed
    - source_file: file where each line contains a set of arguments";

#[derive(Parser)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Seven experiment parameters, or the path of a parameter file
    params: Vec<String>,
    /// Base seed for every repetition's random streams
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Directory for trajectory artifacts
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,
    /// Cooperation probability both agents must exceed to count as SRE
    #[arg(long, default_value_t = SRE_THRESHOLD)]
    threshold: Probability,
    /// Episode at which convergence is measured: `last` or an index
    #[arg(long, default_value_t = Measure::Last)]
    measure: Measure,
    /// Skip writing artifacts
    #[arg(long)]
    no_save: bool,
    /// Rerun experiments whose artifacts already exist
    #[arg(long)]
    force: bool,
    /// Worker threads for parallel repetitions
    #[arg(long, default_value_t = num_cpus::get())]
    threads: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let experiments = match args.params.as_slice() {
        [file] => Experiment::batch(&std::fs::read_to_string(file)?)?,
        [_, _, _, _, _, _, _] => vec![args.params.join(" ").parse()?],
        _ => {
            eprintln!("{}", "invalid arguments".red());
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    log()?;
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;
    let total = experiments.len();
    for (i, experiment) in experiments.into_iter().enumerate() {
        let experiment = experiment.with_seed(args.seed);
        if !args.no_save && !args.force && saved(&args.out, &experiment) {
            log::info!("experiment {}/{}  {}  already saved, skipping", i + 1, total, experiment);
            continue;
        }
        log::info!("experiment {}/{}  {}", i + 1, total, experiment);
        println!("{}", experiment.matrix());
        let ensemble = experiment.run()?;
        let summary = Summary::new(&experiment, &ensemble, args.measure, args.threshold)?;
        if !args.no_save {
            let paths = save(&args.out, &experiment, &ensemble)?;
            save_summary(&args.out, &summary)?;
            log::info!("saved {} artifacts to {}", paths.len(), args.out.display());
        }
        println!("{}", summary);
        println!(
            "{} {}",
            "SRE rate".bold(),
            format!("{:.4}", summary.sre).green()
        );
    }
    Ok(())
}
