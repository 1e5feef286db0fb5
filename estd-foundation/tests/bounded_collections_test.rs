#![deny(warnings)]

// Integration tests for the bounded collections

use estd_foundation::{
    codes, collections::Iter, limits, BoundedBuffer, BoundedMap, BoundedSet, BoundedVec,
    ErrorCategory, Result,
};

/// Buffer of `capacity` holding `0..count`
fn sequence(capacity: usize, count: u32) -> Result<BoundedBuffer<u32>> {
    let values: Vec<u32> = (0..count).collect();
    BoundedBuffer::from_slice(capacity, &values)
}

#[test]
fn test_buffer_shift_scenarios() -> Result<()> {
    // Erase a run of three ending at position 5
    let mut buffer = sequence(10, 8)?;
    buffer.shift_left(5, 3)?;
    assert_eq!(buffer.as_slice(), &[0, 1, 5, 6, 7]);

    // Open a three-slot gap at position 2
    let mut buffer = sequence(10, 5)?;
    buffer.shift_right(2, 3)?;
    assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4, 2, 3, 4]);
    Ok(())
}

#[test]
fn test_buffer_rejections_leave_contents() -> Result<()> {
    let mut buffer = sequence(5, 3)?;

    let err = buffer.shift_right(2, 5).unwrap_err();
    assert_eq!(err.category, ErrorCategory::Capacity);
    assert_eq!(err.code, codes::CAPACITY_EXCEEDED);

    let err = buffer.shift_left(4, 1).unwrap_err();
    assert_eq!(err.category, ErrorCategory::Bounds);

    let err = buffer.shift_left(1, 5).unwrap_err();
    assert_eq!(err.code, codes::INSUFFICIENT_ELEMENTS);

    assert_eq!(buffer.as_slice(), &[0, 1, 2]);
    assert_eq!(buffer.capacity(), 5);
    Ok(())
}

#[test]
fn test_buffer_empty_shift_left_fails() -> Result<()> {
    let mut buffer: BoundedBuffer<u32> = BoundedBuffer::new(5)?;
    assert!(buffer.shift_left(0, 1).is_err());
    assert!(buffer.is_empty());
    Ok(())
}

#[test]
fn test_buffer_move_and_copy_lifecycle() -> Result<()> {
    let mut source = sequence(6, 4)?;

    let copy = source.try_clone()?;
    assert_eq!(copy, source);

    let moved = source.take()?;
    assert_eq!(moved, copy);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), 6);

    // The moved-from buffer is fully usable
    source.shift_right(0, 2)?;
    source[0] = 10;
    source[1] = 11;
    assert_eq!(source.as_slice(), &[10, 11]);

    let mut target = sequence(2, 2)?;
    target.assign(&moved)?;
    assert_eq!(target, moved);
    assert_eq!(target.capacity(), 6);

    let mut a = sequence(5, 5)?;
    let mut b = sequence(3, 1)?;
    a.swap(&mut b);
    assert_eq!((a.len(), a.capacity()), (1, 3));
    assert_eq!((b.len(), b.capacity()), (5, 5));
    Ok(())
}

#[test]
fn test_buffer_equality_is_positional() -> Result<()> {
    let a = BoundedBuffer::from_slice(5, &[1u8, 2, 3])?;
    let b = BoundedBuffer::from_slice(8, &[1u8, 2, 3])?;
    let c = BoundedBuffer::from_slice(5, &[3u8, 2, 1])?;
    assert_eq!(a, b);
    assert_ne!(a, c);
    Ok(())
}

#[test]
fn test_iterator_alias() -> Result<()> {
    let buffer = sequence(4, 4)?;
    let iter: Iter<'_, u32> = buffer.iter();
    assert_eq!(iter.sum::<u32>(), 6);
    Ok(())
}

#[test]
fn test_vec_operations() -> Result<()> {
    let mut vec = BoundedVec::new(5)?;

    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 5);
    assert!(vec.is_empty());

    for i in 0..5 {
        vec.push(i)?;
        assert_eq!(vec.len(), i as usize + 1);
    }
    assert!(vec.is_full());
    assert_eq!(vec.push(5).unwrap_err().code, codes::CAPACITY_EXCEEDED);

    assert_eq!(vec.pop(), Some(4));
    vec.insert(0, 100)?;
    assert_eq!(&vec[..], &[100, 0, 1, 2, 3]);

    vec.erase_range(1..=2)?;
    assert_eq!(&vec[..], &[100, 2, 3]);

    vec.insert_slice(1, &[7, 8])?;
    assert_eq!(&vec[..], &[100, 7, 8, 2, 3]);

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 5);
    Ok(())
}

#[test]
fn test_set_operations() -> Result<()> {
    let mut set = BoundedSet::new(3)?;

    assert!(set.insert("a")?);
    assert!(set.insert("b")?);
    assert!(!set.insert("a")?);
    assert!(set.insert("c")?);
    assert!(set.insert("d").unwrap_err().is_capacity_error());

    assert!(set.contains(&"b"));
    assert!(set.erase(&"b"));
    assert!(!set.contains(&"b"));
    assert!(set.insert("d")?);
    assert_eq!(set.len(), 3);
    Ok(())
}

#[test]
fn test_map_operations() -> Result<()> {
    let mut map = BoundedMap::new(3)?;

    assert_eq!(map.insert(1u32, 10u32)?, None);
    assert_eq!(map.insert(2, 20)?, None);
    assert_eq!(map.insert(1, 11)?, Some(10));
    assert_eq!(map.len(), 2);

    if let Some(value) = map.get_mut(&2) {
        *value += 1;
    }
    assert_eq!(map.get(&2), Some(&21));

    map.insert(3, 30)?;
    assert_eq!(map.insert(4, 40).unwrap_err().category, ErrorCategory::Capacity);

    assert_eq!(map.remove(&1), Some(11));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![21, 30]);
    Ok(())
}

#[test]
fn test_capacity_limit() {
    assert!(limits::check_capacity(limits::MAX_BUFFER_CAPACITY).is_ok());
    if limits::MAX_BUFFER_CAPACITY < usize::MAX {
        let err = BoundedBuffer::<u8>::new(limits::MAX_BUFFER_CAPACITY + 1).unwrap_err();
        assert_eq!(err.code, codes::INVALID_CAPACITY);
    }
}

// Under the default profile the limit passes but the byte size overflows
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
#[test]
fn test_allocation_failure_is_reported() {
    let result = BoundedBuffer::<u64>::new(limits::MAX_BUFFER_CAPACITY);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.is_memory_error());
    assert_eq!(err.code, codes::ALLOCATION_FAILED);
}
