use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use carprice_cli::{logging, run_prompt, PersistedModel};
use clap::Parser;
use log::{error, info};

#[derive(Parser)]
#[command(name = "predict", about = "Predict car prices from their mileage with a trained model")]
struct Opt {
    /// JSON file written by `train`
    #[arg(short = 'm', long = "model-file", default_value = "./models/model_params.json")]
    model_file: PathBuf,
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
    info!("model loaded from {}", opt.model_file.display());

    println!("theta0: {:.6}", model.model().intercept());
    println!("theta1: {:.6}", model.model().slope());
    println!("{}", "-".repeat(60));
    println!("Enter a mileage (km) to predict its price, or 'exit' to quit");
    println!("{}", "-".repeat(60));

    let stdin = io::stdin();
    let predictions = run_prompt(&model, stdin.lock(), io::stdout())?;
    info!("{} predictions made", predictions);

    Ok(())
}
