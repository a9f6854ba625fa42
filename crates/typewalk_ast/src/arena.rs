//! Arena allocator for type expression nodes.
//!
//! A parser allocates every node of one expression in the same arena, and
//! the whole tree is released together when the arena is dropped.

use bumpalo::Bump;

/// Arena allocator for [`TypeNode`](crate::TypeNode)s.
///
/// # Example
///
/// ```rust
/// use typewalk_ast::{AstArena, Span, TypeNode};
///
/// let arena = AstArena::new();
/// let name = arena.alloc(TypeNode::new_name(Span::new(0, 6), "string"));
/// assert_eq!(name.value, Some("string"));
///
/// let s = arena.alloc_str("number");
/// assert_eq!(s, "number");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_alloc_str() {
        let arena = AstArena::new();
        let s = arena.alloc_str("Array");
        assert_eq!(s, "Array");
    }

    #[test]
    fn test_arena_alloc_slice() {
        let arena = AstArena::with_capacity(64);
        let slice = arena.alloc_slice_copy(&[1u8, 2, 3]);
        assert_eq!(slice, &[1, 2, 3]);
        assert!(arena.allocated_bytes() > 0);
    }
}
