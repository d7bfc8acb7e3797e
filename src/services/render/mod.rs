// Render instruction emitter
// Builds the immutable "what to draw" descriptor and paints it onto a sink

mod emitter;
mod sink;

pub use emitter::{RenderEmitter, RenderInputs, DEFAULT_TRANSPARENCY_PRESETS};
