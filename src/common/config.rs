/// Maximum number of keys a node may hold between operations (order-5 tree)
pub const MAX_KEYS: usize = 4;

/// Minimum number of keys every non-root node must hold
pub const MIN_KEYS: usize = 2;

// A split of MAX_KEYS + 1 keys yields halves of MAX_KEYS / 2 and MAX_KEYS - MAX_KEYS / 2 keys,
// and a merge yields (MIN_KEYS - 1) + 1 + MIN_KEYS keys; both must stay within bounds.
const _: () = assert!(MIN_KEYS >= 1 && MIN_KEYS <= MAX_KEYS / 2);

/// Runtime switches for diagnostic output.
///
/// Neither switch changes tree semantics; they only control what gets logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Log the rendered tree before and after every insert and delete
    pub verbose: bool,

    /// Log each algorithm step (descent, split, borrow, merge, root changes)
    pub trace: bool,
}

impl TreeConfig {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
