//! Priority-ordered decorator assembly.
//!
//! The stack is an explicit startup-time configuration value: layers are
//! registered with a declared priority, and `assemble` folds them around
//! the terminal handler. Nothing is resolved implicitly at process time.

use riffle_api::Processor;
use tracing::info;

/// One decorator layer in a stack.
///
/// A layer is a factory: it wraps an inner handler and returns the
/// decorated handler. Layers are consulted once, at assembly.
pub trait DecoratorLayer: Send + Sync {
    fn wrap(&self, inner: Box<dyn Processor>) -> Box<dyn Processor>;

    /// Layer name for logging the assembled chain.
    fn name(&self) -> &str;
}

/// A set of decorator layers assembled in priority order.
///
/// Lower priority = outer layer (it runs first on the way in and last on
/// the way out). Layers with equal priority keep insertion order.
pub struct DecoratorStack {
    layers: Vec<(i32, Box<dyn DecoratorLayer>)>,
}

impl DecoratorStack {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn add<L: DecoratorLayer + 'static>(&mut self, priority: i32, layer: L) {
        self.layers.push((priority, Box::new(layer)));
        self.layers.sort_by_key(|(p, _)| *p);
    }

    /// Layer names in outer-to-inner order.
    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|(_, l)| l.name()).collect()
    }

    /// Fold the layers around `terminal`, innermost first, and return the
    /// assembled chain.
    pub fn assemble(self, terminal: Box<dyn Processor>) -> Box<dyn Processor> {
        info!(
            layers = ?self.names(),
            terminal = terminal.name(),
            "assembling processing chain"
        );
        self.layers
            .into_iter()
            .rev()
            .fold(terminal, |inner, (_, layer)| layer.wrap(inner))
    }
}

impl Default for DecoratorStack {
    fn default() -> Self {
        Self::new()
    }
}
