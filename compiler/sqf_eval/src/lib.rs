//! Tree-walking evaluator for SQF.
//!
//! Simulates the runtime effects of scripts without a game host: variable
//! scoping across the four namespaces, the operator catalogue, markers and
//! variable broadcasts to an attached [`Client`].
//!
//! # Architecture
//!
//! - [`Evaluator`]: session state and the statement evaluation algorithm
//! - [`ExpressionTable`]: ordered `(pattern, handler)` dispatch entries
//! - [`Namespace`] / [`Scope`]: scope stacks with case-insensitive names
//! - [`Client`] / [`Simulation`]: multiplayer collaborators
//!
//! ```
//! let (_, outcome) = sqf_eval::interpret("_x = 2; _x * 3").unwrap();
//! assert_eq!(outcome, sqf_ir::Value::Number(6.0));
//! ```

mod client;
pub mod errors;
pub mod expressions;
mod interpreter;
mod marker;
mod namespace;
mod stack;

use std::sync::Once;

pub use client::{
    Broadcast, BroadcastTarget, Client, LocalClient, RecordingSimulation, SharedSimulation,
    Simulation,
};
pub use expressions::{ArgPattern, Expression, ExpressionTable, Handler};
pub use interpreter::{Evaluator, EvaluatorBuilder};
pub use marker::{Marker, MarkerTable};
pub use namespace::{Namespace, NamespaceKind, Namespaces, Scope};
pub use sqf_diagnostic::{SqfError, SqfResult};

use sqf_ir::Value;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Call this at the start of a host program or test to enable logging.
/// Only initializes once, and only if `RUST_LOG` is set.
///
/// # Example
/// ```bash
/// RUST_LOG=sqf_eval=trace cargo test
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Parse and run a script in a fresh evaluator.
///
/// Returns the evaluator, for inspecting the state the script left
/// behind, together with the outcome of the last statement.
pub fn interpret(source: &str) -> SqfResult<(Evaluator, Value)> {
    let mut evaluator = Evaluator::new();
    let outcome = interpret_with(source, &mut evaluator)?;
    Ok((evaluator, outcome))
}

/// Parse and run a script in an existing evaluator.
pub fn interpret_with(source: &str, evaluator: &mut Evaluator) -> SqfResult<Value> {
    let statements = sqf_parse::parse(source)?;
    evaluator.execute(&statements)
}

#[cfg(test)]
mod tests;
