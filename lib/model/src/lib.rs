mod ast;
mod prefix;
mod query;
pub mod vocab;

pub use ast::*;
pub use prefix::*;
pub use query::*;

// Re-export some oxrdf types.
pub use oxrdf::{Graph, LiteralRef, NamedNode, NamedNodeRef, TripleRef};
