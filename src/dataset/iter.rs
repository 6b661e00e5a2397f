use super::Float;
use ndarray::Array1;

/// Iterator over the `(feature, target)` pairs of a dataset
pub struct Iter<'a, F> {
    records: &'a Array1<F>,
    targets: &'a Array1<F>,
    idx: usize,
}

impl<'a, F: Float> Iter<'a, F> {
    pub fn new(records: &'a Array1<F>, targets: &'a Array1<F>) -> Iter<'a, F> {
        Iter {
            records,
            targets,
            idx: 0,
        }
    }
}

impl<'a, F: Float> Iterator for Iter<'a, F> {
    type Item = (F, F);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.records.len() {
            return None;
        }

        let item = (self.records[self.idx], self.targets[self.idx]);
        self.idx += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl<'a, F: Float> ExactSizeIterator for Iter<'a, F> {}
