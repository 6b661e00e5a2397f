use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use carprice::Dataset;
use carprice_cli::{logging, plot, train, TrainedModel};
use carprice_datasets::{describe, load_csv};
use carprice_linear::{GradientDescent, LinearModel};
use clap::Parser;
use log::{error, info, warn};

#[derive(Parser)]
#[command(name = "train", about = "Train the car price regressor on a CSV dataset")]
struct Opt {
    /// CSV file with `km` and `price` columns
    #[arg(short = 'd', long = "data-file", default_value = "./data/data.csv")]
    data_file: PathBuf,
    #[arg(long, default_value_t = 0.03)]
    learning_rate: f64,
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,
    #[arg(long, default_value_t = 1000)]
    max_iterations: usize,
    /// Where to write the trained model
    #[arg(long = "save", default_value = "./models/model_params.json")]
    save: PathBuf,
    /// Do not write the trained model
    #[arg(long)]
    no_save: bool,
    /// Write plots of the data, the fit and the cost history
    #[arg(long)]
    plot: bool,
    #[arg(long, default_value = "./plot")]
    plot_dir: PathBuf,
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
    let dataset = load_csv(&opt.data_file)
        .with_context(|| format!("failed to load dataset {}", opt.data_file.display()))?;
    info!("loaded {} rows from {}", dataset.nsamples(), opt.data_file.display());
    println!("{}", describe(&dataset));

    let params = GradientDescent::params()
        .learning_rate(opt.learning_rate)
        .tolerance(opt.tolerance)
        .max_iterations(opt.max_iterations);
    let progress = |iteration: usize, model: &LinearModel<f64>, cost: f64| {
        if iteration % 100 == 0 {
            info!(
                "iteration {:>5}: cost = {:.6}, theta0 = {:.6}, theta1 = {:.6}",
                iteration,
                cost,
                model.intercept(),
                model.slope()
            );
        }
    };
    let trained = train(&dataset, &params, progress).context("training failed")?;
    report(&trained);

    if opt.plot {
        if let Err(err) = write_plots(&trained, &dataset, &opt.plot_dir) {
            warn!("could not write plots: {}", err);
        }
    }

    if opt.no_save {
        info!("model not saved");
    } else {
        trained
            .persisted()
            .save(&opt.save)
            .with_context(|| format!("failed to save model to {}", opt.save.display()))?;
        println!("Model saved to {}", opt.save.display());
    }

    Ok(())
}

fn report(trained: &TrainedModel) {
    let (feature, target) = (trained.scaler.feature(), trained.scaler.target());
    info!("km: mean = {:.0}, std = {:.0}", feature.mean(), feature.std());
    info!("price: mean = {:.0}, std = {:.0}", target.mean(), target.std());

    let fitted = &trained.fitted;
    if let (Some(initial), Some(last)) = (fitted.initial_cost(), fitted.final_cost()) {
        info!("cost: initial = {:.6}, final = {:.6}", initial, last);
    }
    if fitted.cost_increased() {
        warn!("the cost increased during training, consider a smaller learning rate");
    }

    let termination = fitted.termination();
    let status = if termination.converged() {
        "converged"
    } else {
        "stopped at the iteration limit"
    };
    println!(
        "Training {} after {} iterations: theta0 = {:.6e}, theta1 = {:.6e}",
        status,
        termination.iterations(),
        fitted.model().intercept(),
        fitted.model().slope()
    );
}

fn write_plots(trained: &TrainedModel, dataset: &Dataset<f64>, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;

    plot::plot_dataset(dataset, "Raw data", &dir.join("data.svg"))
        .map_err(|err| anyhow::anyhow!("{}", err))?;
    let normalized_path = dir.join("normalized_data.svg");
    plot::plot_dataset(&trained.normalized, "Normalized data", &normalized_path)
        .map_err(|err| anyhow::anyhow!("{}", err))?;
    plot::plot_regression(dataset, &trained.persisted(), &dir.join("regression.svg"))
        .map_err(|err| anyhow::anyhow!("{}", err))?;
    plot::plot_cost_history(trained.fitted.cost_history(), &dir.join("cost_history.svg"))
        .map_err(|err| anyhow::anyhow!("{}", err))?;

    info!("plots written to {}", dir.display());
    Ok(())
}
