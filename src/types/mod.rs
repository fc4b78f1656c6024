//! All data types for the edgewise library.

pub mod edge;
pub mod error;

use std::fmt::{Debug, Display};
use std::hash::Hash;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Edge weight. Unreachable distances are `f64::INFINITY`.
pub type Weight = f64;

/// Weight used when an edge is created without one.
pub const DEFAULT_WEIGHT: Weight = 0.0;

/// An opaque, comparable vertex identifier.
///
/// Implemented for every type that can be hashed, cloned and printed, so
/// `&str`, `String` and the integer types all work out of the box.
pub trait Vertex: Eq + Hash + Clone + Debug + Display {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug + Display {}
