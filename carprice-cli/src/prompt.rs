//! The interactive prediction loop of the `predict` binary
use std::io::{self, BufRead, Write};

use crate::input::{parse_mileage, PromptInput};
use crate::model::PersistedModel;

/// Reads mileages line by line and answers each with a predicted price
///
/// Stops at an exit keyword or at the end of the input. Invalid lines are answered with the
/// reason and the prompt is shown again. Returns the number of predictions made.
pub fn run_prompt<R: BufRead, W: Write>(
    model: &PersistedModel,
    mut input: R,
    mut output: W,
) -> io::Result<usize> {
    let mut predictions = 0;
    let mut line = String::new();

    loop {
        write!(output, "Mileage (km): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let km = match parse_mileage(&line) {
            Ok(PromptInput::Exit) => break,
            Ok(PromptInput::Mileage(km)) => km,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        match model.predict_price(km) {
            Ok(prediction) => {
                writeln!(output, "Predicted price: {:.2}", prediction.price)?;
                if prediction.is_implausible() {
                    log::warn!("negative price predicted for {} km", km);
                    writeln!(
                        output,
                        "Warning: a negative price is not realistic, the mileage is probably out of the training range"
                    )?;
                }
                predictions += 1;
            }
            Err(err) => writeln!(output, "{}", err)?,
        }
    }

    writeln!(output, "Exiting prediction mode. Goodbye!")?;
    Ok(predictions)
}
