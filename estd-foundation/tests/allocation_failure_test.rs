#![deny(warnings)]
// The failing allocator wraps the system allocator
#![allow(unsafe_code)]

// Integration tests for allocator exhaustion

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use estd_foundation::{
    codes, make_shared, make_unique, BoundedBuffer, Error, ErrorCategory, Result, SharedPtr,
};

/// System allocator that returns null while the current thread asks it to
struct SwitchableAllocator;

thread_local! {
    static FAIL_ALLOCATIONS: Cell<bool> = const { Cell::new(false) };
}

fn allocations_fail() -> bool {
    FAIL_ALLOCATIONS.try_with(Cell::get).unwrap_or(false)
}

unsafe impl GlobalAlloc for SwitchableAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if allocations_fail() {
            return core::ptr::null_mut();
        }
        // SAFETY: forwarded unchanged from the caller
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: ptr was produced by System.alloc with this layout
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOCATOR: SwitchableAllocator = SwitchableAllocator;

/// Runs `f` with every allocation on this thread failing
fn without_heap<R>(f: impl FnOnce() -> R) -> R {
    FAIL_ALLOCATIONS.with(|fail| fail.set(true));
    let result = f();
    FAIL_ALLOCATIONS.with(|fail| fail.set(false));
    result
}

/// Counts how many times it has been dropped
struct DropCounter<'a>(&'a Cell<usize>);

impl Drop for DropCounter<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn assert_allocation_failed(err: Error) {
    assert_eq!(err.category, ErrorCategory::Memory);
    assert_eq!(err.code, codes::ALLOCATION_FAILED);
}

#[test]
fn test_make_shared_reports_exhaustion() {
    let drops = Cell::new(0);
    let result = without_heap(|| make_shared(DropCounter(&drops)).map(|_| ()));

    assert_allocation_failed(result.unwrap_err());
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_from_box_drops_adopted_object_once() {
    let drops = Cell::new(0);
    let boxed = Box::new(DropCounter(&drops));
    let result = without_heap(|| SharedPtr::from_box(boxed).map(|_| ()));

    assert_allocation_failed(result.unwrap_err());
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_make_unique_reports_exhaustion() {
    let drops = Cell::new(0);
    let result = without_heap(|| make_unique(DropCounter(&drops)).map(|_| ()));

    assert_allocation_failed(result.unwrap_err());
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_failed_reset_keeps_referent() -> Result<()> {
    let drops = Cell::new(0);
    let mut handle = make_shared(DropCounter(&drops))?;
    let replacement = Box::new(DropCounter(&drops));

    let result = without_heap(|| handle.reset(Some(replacement)));

    assert_allocation_failed(result.unwrap_err());
    assert_eq!(drops.get(), 1);
    assert_eq!(handle.use_count(), 1);
    assert!(handle.get().is_some());
    Ok(())
}

#[test]
fn test_buffer_construction_reports_exhaustion() {
    let result = without_heap(|| BoundedBuffer::<u32>::new(16).map(|_| ()));
    assert_allocation_failed(result.unwrap_err());
}

#[test]
fn test_failed_take_leaves_buffer_intact() -> Result<()> {
    let mut buffer = BoundedBuffer::from_slice(4, &[1u32, 2, 3])?;
    let result = without_heap(|| buffer.take().map(|_| ()));

    assert_allocation_failed(result.unwrap_err());
    assert_eq!(buffer.as_slice(), &[1, 2, 3]);
    assert_eq!(buffer.capacity(), 4);
    Ok(())
}

#[test]
fn test_allocations_succeed_again_afterwards() -> Result<()> {
    let _ = without_heap(|| make_shared(0u64).map(|_| ()));
    let handle = make_shared(7u64)?;
    assert_eq!(handle.get(), Some(&7));
    Ok(())
}
