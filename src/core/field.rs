use super::filter::SignalFilter;
use super::layout::GlyphLayout;
use super::mapper::{ProjectionMapper, ProximityMapper};
use super::settings::{Settings, WeightRange};
use super::signal::{OrientationSample, OrientationSignal, PointerSignal};
use super::sink::WeightSink;
use glam::Vec2;

/// A signal plus the policy that turns it into glyph weights.
pub trait Field {
    /// Compute one weight per glyph and hand them to `sink`. Returns `true`
    /// while the field needs further frames to converge.
    fn pass(&mut self, layout: &GlyphLayout, sink: &mut impl WeightSink) -> bool;

    fn range(&self) -> WeightRange;

    /// Weight a glyph should return to when the field goes away.
    fn rest_weight(&self) -> f32 {
        self.range().min
    }
}

/// Device tilt driven weights.
#[derive(Clone, Debug)]
pub struct GravityField {
    signal: OrientationSignal,
    filter: SignalFilter,
    sensitivity: f32,
    settle_epsilon: f32,
    range: WeightRange,
}

impl GravityField {
    pub fn new(settings: &Settings, range: WeightRange) -> Self {
        Self {
            signal: OrientationSignal::default(),
            filter: SignalFilter::new(settings.smoothing_alpha),
            sensitivity: settings.sensitivity,
            settle_epsilon: settings.settle_epsilon,
            range,
        }
    }

    pub fn push(&mut self, sample: OrientationSample) -> Vec2 {
        self.signal.push(sample)
    }

    #[inline]
    pub fn gravity(&self) -> Vec2 {
        self.filter.direction()
    }

    pub fn reset(&mut self) {
        self.signal = OrientationSignal::default();
        self.filter.reset();
    }
}

impl Field for GravityField {
    fn pass(&mut self, layout: &GlyphLayout, sink: &mut impl WeightSink) -> bool {
        let target = self.signal.target();
        let gravity = self.filter.step(target);
        let mapper = ProjectionMapper::new(layout.viewport(), self.sensitivity, self.range);
        let n = sink.len();
        for (i, center) in layout.centers().iter().take(n).enumerate() {
            sink.apply(i, mapper.weight(*center, gravity));
        }
        !self.filter.settled(target, self.settle_epsilon)
    }

    fn range(&self) -> WeightRange {
        self.range
    }
}

/// Pointer proximity driven weights.
#[derive(Clone, Debug)]
pub struct HoverField {
    signal: PointerSignal,
    mapper: ProximityMapper,
}

impl HoverField {
    pub fn new(settings: &Settings) -> Self {
        Self {
            signal: PointerSignal::default(),
            mapper: ProximityMapper::new(settings.hover_max_distance, settings.hover_range),
        }
    }

    pub fn push(&mut self, client_x: f32, client_y: f32) {
        self.signal.push(client_x, client_y);
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.signal.position()
    }

    pub fn reset(&mut self) {
        self.signal.clear();
    }
}

impl Field for HoverField {
    fn pass(&mut self, layout: &GlyphLayout, sink: &mut impl WeightSink) -> bool {
        // no pointer seen yet: glyphs keep their resting weight
        let Some(pointer) = self.signal.position() else {
            return false;
        };
        let n = sink.len();
        for (i, center) in layout.centers().iter().take(n).enumerate() {
            sink.apply(i, self.mapper.weight(pointer, *center));
        }
        false
    }

    fn range(&self) -> WeightRange {
        self.mapper.range
    }
}
