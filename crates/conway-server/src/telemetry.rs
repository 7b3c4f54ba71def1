//! Log output.

use tracing::Level;

/// Install the global `fmt` subscriber, writing to stderr up to `level`.
///
/// Call once, before the first event. A second call panics.
pub fn init(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
