use crate::algorithm::LinearModel;
use carprice::Float;

/// Hook invoked once per training iteration
///
/// Receives the zero-based iteration index, the model after that iteration's update and the cost
/// computed before the update. Observers cannot influence training.
pub trait TrainingObserver<F: Float> {
    fn observe(&mut self, iteration: usize, model: &LinearModel<F>, cost: F);
}

impl<F: Float, G: FnMut(usize, &LinearModel<F>, F)> TrainingObserver<F> for G {
    fn observe(&mut self, iteration: usize, model: &LinearModel<F>, cost: F) {
        self(iteration, model, cost)
    }
}

/// Observer doing nothing, used by plain `fit`
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl<F: Float> TrainingObserver<F> for NoObserver {
    fn observe(&mut self, _iteration: usize, _model: &LinearModel<F>, _cost: F) {}
}
