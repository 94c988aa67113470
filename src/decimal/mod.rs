// ============================================================================
// Decimal Module
// Exact decimal construction and context-scoped arithmetic
// ============================================================================
//
// This module provides:
// - from_exact_str / from_f64_lossy: the two decimal construction paths
// - DecimalContext: precision/rounding configuration for arithmetic results
// - RoundingMode: tie-break policy selection
//
// Design principles:
// - The context is plain immutable data passed explicitly; there is no
//   ambient or thread-local configuration to save and restore
// - Precision applies to arithmetic results, never to construction
// - All arithmetic returns Result (no panics)

mod construct;
mod context;

pub use construct::{from_exact_str, from_f64_lossy};
pub use context::{DecimalContext, RoundingMode};
