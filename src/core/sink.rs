/// Destination for computed glyph weights.
///
/// Implementations hide the animation primitive. They are expected to bind
/// per-glyph state once and reuse it, since `apply` runs for every glyph on
/// every pass.
pub trait WeightSink {
    fn len(&self) -> usize;

    fn apply(&mut self, index: usize, weight: f32);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WeightSink for Vec<f32> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn apply(&mut self, index: usize, weight: f32) {
        if let Some(slot) = self.get_mut(index) {
            *slot = weight;
        }
    }
}
