//! Node storage collaborators.
//!
//! The queue never calls the global allocator directly: every node is
//! obtained from and returned to a [`NodeAlloc`] handle, so a host can
//! route node storage through an arena, count calls in tests, or inject
//! failure. Handles are cheap to clone; the queue stores one and hands out
//! copies on request.

use std::alloc;
use std::alloc::Layout;
use std::ptr::NonNull;

use thiserror::Error;

/// Error returned when a [`NodeAlloc`] cannot provide storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue node allocation failed")]
pub struct AllocError;

/// Raw storage provider for queue nodes.
///
/// Implementations hand out uninitialized blocks. The queue constructs and
/// destroys element values in place, so the lifetime of a value is
/// decoupled from the lifetime of the block that holds it.
///
/// # Safety
///
/// `allocate` must return a block valid for reads and writes of `layout`
/// size and alignment, exclusively owned by the caller until it is passed
/// to `deallocate`. Blocks allocated through one handle must be accepted
/// by `deallocate` on any clone of that handle.
pub unsafe trait NodeAlloc: Clone {
  /// Allocates one uninitialized block of `layout`.
  fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

  /// Returns a block to the provider.
  ///
  /// # Safety
  ///
  /// `ptr` must have come from [`allocate`](NodeAlloc::allocate) on this
  /// handle or a clone of it, with the same `layout`, and must not be
  /// used afterwards.
  unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The process-global allocator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Global;

unsafe impl NodeAlloc for Global {
  fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
    // Queue nodes always carry at least a pointer, so `layout` is never
    // zero-sized here.
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr).ok_or(AllocError)
  }

  unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
    unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn global_round_trip() {
    let layout = Layout::new::<[u64; 4]>();
    let block = Global.allocate(layout).unwrap();
    unsafe {
      block.as_ptr().cast::<[u64; 4]>().write([1, 2, 3, 4]);
      Global.deallocate(block, layout);
    }
  }

  #[test]
  fn alloc_error_message() {
    assert_eq!(AllocError.to_string(), "queue node allocation failed");
  }
}
