//! Content block types embedded in entity bodies.
//!
//! Blocks are plain data here; turning them into markup belongs to the
//! rendering layer.

mod text;

pub use text::Text;

/// A named kind of content block.
pub trait ContentBlock {
    /// Name the block is registered under.
    const NAME: &'static str;

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
