// plot.rs
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use carprice::Dataset;
use plotters::prelude::*;

use crate::model::PersistedModel;

/// Range covering all values plus a 5% margin on both sides
fn padded_range<'a, I: IntoIterator<Item = &'a f64>>(values: I) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(*x), hi.max(*x))
        });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let margin = if max > min { (max - min) * 0.05 } else { 1.0 };
    (min - margin)..(max + margin)
}

/// Scatter plot of the dataset, one dot per car.
///
/// # Arguments
/// * `dataset` - Raw or normalised dataset, its column names label the axes.
/// * `caption` - Title of the plot.
/// * `path` - SVG file the plot is written to.
pub fn plot_dataset(dataset: &Dataset<f64>, caption: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            padded_range(dataset.records()),
            padded_range(dataset.targets()),
        )?;

    chart
        .configure_mesh()
        .x_desc(dataset.feature_name())
        .y_desc(dataset.target_name())
        .draw()?;

    chart.draw_series(
        dataset
            .iter()
            .map(|(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Scatter plot of the raw dataset with the learned regression line on top.
///
/// The line is drawn between the smallest and the largest mileage of the dataset.
pub fn plot_regression(
    dataset: &Dataset<f64>,
    model: &PersistedModel,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let x_range = padded_range(dataset.records());
    let endpoints = [x_range.start.max(0.), x_range.end]
        .iter()
        .map(|km| model.predict_price(*km).map(|p| (p.km, p.price)))
        .collect::<Result<Vec<_>, _>>()?;
    let prices: Vec<f64> = dataset
        .targets()
        .iter()
        .copied()
        .chain(endpoints.iter().map(|(_, price)| *price))
        .collect();

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Linear regression", ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, padded_range(&prices))?;

    chart
        .configure_mesh()
        .x_desc(dataset.feature_name())
        .y_desc(dataset.target_name())
        .draw()?;

    chart
        .draw_series(
            dataset
                .iter()
                .map(|(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )?
        .label("Data")
        .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

    chart
        .draw_series(LineSeries::new(endpoints, &RED))?
        .label("Fit")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE)
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Line plot of the cost of every training iteration.
pub fn plot_cost_history(history: &[f64], path: &Path) -> Result<(), Box<dyn Error>> {
    if history.is_empty() {
        return Err("cost history is empty".into());
    }

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Cost history", ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..history.len() as f64, padded_range(history))?;

    chart
        .configure_mesh()
        .x_desc("iteration")
        .y_desc("cost")
        .draw()?;

    chart.draw_series(LineSeries::new(
        history.iter().enumerate().map(|(i, cost)| (i as f64, *cost)),
        &RED,
    ))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carprice_linear::LinearModel;
    use carprice_preprocessing::{ColumnScale, FittedZScore};
    use std::fs;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("carprice-plot-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn padded_range_adds_margin() {
        let range = padded_range(&[0., 100.]);
        assert_eq!(range, -5.0..105.0);

        let flat = padded_range(&[3., 3.]);
        assert_eq!(flat, 2.0..4.0);

        let empty: [f64; 0] = [];
        assert_eq!(padded_range(&empty), 0.0..1.0);
    }

    #[test]
    fn writes_svg_files() {
        let dataset = Dataset::from_pairs(vec![(0., 10000.), (100000., 8000.), (200000., 6000.)])
            .with_names("km", "price");
        let model = PersistedModel::new(
            &LinearModel::new(0., -1.),
            &FittedZScore::from_parts(
                ColumnScale::new(100000., 100000.).unwrap(),
                ColumnScale::new(8000., 2000.).unwrap(),
            ),
        );

        let data = scratch("data.svg");
        let regression = scratch("regression.svg");
        let cost = scratch("cost.svg");
        plot_dataset(&dataset, "Raw data", &data).unwrap();
        plot_regression(&dataset, &model, &regression).unwrap();
        plot_cost_history(&[1.0, 0.5, 0.25], &cost).unwrap();

        for path in &[data, regression, cost] {
            let svg = fs::read_to_string(path).unwrap();
            assert!(svg.contains("<svg"));
        }
    }

    #[test]
    fn empty_cost_history_is_an_error() {
        assert!(plot_cost_history(&[], &scratch("empty.svg")).is_err());
    }
}
