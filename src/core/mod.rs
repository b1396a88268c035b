//! Platform-free core of the glyph weight effect.
//!
//! Nothing in here touches the DOM: the web runtime measures glyphs, feeds
//! signals in and executes the effects the mode controller hands back. That
//! keeps the math and the state machine testable on the host.

pub mod field;
pub mod filter;
pub mod layout;
pub mod mapper;
pub mod mode;
pub mod scheduler;
pub mod settings;
pub mod signal;
pub mod sink;
pub mod tween;

pub use field::{Field, GravityField, HoverField};
pub use filter::SignalFilter;
pub use layout::{GlyphGeometry, GlyphLayout};
pub use mapper::{ProjectionMapper, ProximityMapper};
pub use mode::{ControllerMode, Effect, Effects, ModeController, PermissionState, Platform};
pub use scheduler::FrameScheduler;
pub use settings::{Settings, Viewport, WeightRange};
pub use signal::{OrientationSample, OrientationSignal, PointerSignal};
pub use sink::WeightSink;
pub use tween::{Ease, Tween};
