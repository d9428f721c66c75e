//! The ordered chain of heuristic repair stages.
//!
//! Each stage is a pure text-to-text transformation. Order is significant and
//! increases in aggressiveness: the comma stages are safe and idempotent, the
//! structural stages can close the wrong nesting level, and salvage is
//! explicitly destructive. The pipeline walks the whole chain in canonical
//! order rather than searching for a minimal fix.

mod braces;
mod commas;
mod salvage;

pub use braces::{BalanceClosers, CollapseClosers, EmptyObjects, OuterSlice};
pub use commas::{
    LeadingCommas, MissingCloserCommas, MissingPairCommas, StrayCommaLines, TrailingCommas,
};
pub use salvage::Salvage;

use crate::options::Options;
use std::borrow::Cow;

/// One heuristic repair transformation. Implementations are stateless unit
/// structs, reused across files. `apply` returns `Cow::Borrowed` when the
/// stage has nothing to change so no-op passes are free.
pub trait Stage {
    fn name(&self) -> &'static str;
    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// The canonical stage order, least to most aggressive. Salvage sits at the
/// end and only when enabled; everything before it preserves any key the
/// input could express.
pub fn default_stages(opts: &Options) -> Vec<Box<dyn Stage>> {
    let mut stages: Vec<Box<dyn Stage>> = vec![
        Box::new(TrailingCommas),
        Box::new(StrayCommaLines),
        Box::new(MissingPairCommas),
        Box::new(MissingCloserCommas),
        Box::new(EmptyObjects),
        Box::new(LeadingCommas),
        Box::new(BalanceClosers),
        Box::new(CollapseClosers),
        Box::new(OuterSlice),
    ];
    if opts.salvage {
        stages.push(Box::new(Salvage));
    }
    stages
}
