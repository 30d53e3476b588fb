//! The seven minification passes, one module each, in pipeline order.

mod comments;
mod duplicates;
mod merge;
mod quotes;
mod shorthand;
mod values;
mod whitespace;

pub use comments::StripComments;
pub use duplicates::RemoveDuplicateProperties;
pub use merge::MergeAdjacentRules;
pub use quotes::UnquoteTokens;
pub use shorthand::CollapseShorthands;
pub use values::OptimizeValues;
pub use whitespace::CollapseWhitespace;
