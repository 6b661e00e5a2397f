use std::path::PathBuf;
use std::process;

use anyhow::Context;
use carprice_cli::{evaluate, logging, PersistedModel, StatsSource};
use carprice_datasets::load_csv;
use clap::Parser;
use log::{error, info};

#[derive(Parser)]
#[command(name = "score", about = "Score a trained model against a CSV dataset")]
struct Opt {
    /// JSON file written by `train`
    #[arg(short = 'm', long = "model-file", default_value = "./models/model_params.json")]
    model_file: PathBuf,
    /// CSV file with `km` and `price` columns
    #[arg(short = 'd', long = "data-file", default_value = "./data/data.csv")]
    data_file: PathBuf,
    /// Statistics used to normalise the dataset before scoring
    #[arg(long, value_enum, default_value_t = StatsSource::Dataset)]
    stats: StatsSource,
}

fn main() {
    logging::init();
    let opt = Opt::parse();

    if let Err(err) = run(&opt) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(opt: &Opt) -> anyhow::Result<()> {
    let model = PersistedModel::load(&opt.model_file)
        .with_context(|| format!("failed to load model {}", opt.model_file.display()))?;
    info!(
        "model loaded: theta0 = {:.6e}, theta1 = {:.6e}",
        model.model().intercept(),
        model.model().slope()
    );

    let dataset = load_csv(&opt.data_file)
        .with_context(|| format!("failed to load dataset {}", opt.data_file.display()))?;
    info!("loaded {} rows from {}", dataset.nsamples(), opt.data_file.display());

    let evaluation = evaluate(&model, &dataset, opt.stats).context("evaluation failed")?;
    println!("R² score: {:.6}", evaluation.r2);
    println!("MSE (normalized): {:.6}", evaluation.mse);
    println!("MAE (normalized): {:.6}", evaluation.mae);
    println!("-> {}", evaluation.verdict);

    Ok(())
}
