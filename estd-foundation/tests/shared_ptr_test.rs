#![deny(warnings)]

// Integration tests for shared and unique ownership

use std::{cell::Cell, fmt::Display, rc::Rc};

use estd_foundation::{make_shared, make_unique, Result, SharedPtr, UniquePtr};

/// Records drops in a shared counter
struct Tracked {
    drops: Rc<Cell<usize>>,
    id: u32,
}

impl Tracked {
    fn new(drops: &Rc<Cell<usize>>, id: u32) -> Self {
        Self {
            drops: Rc::clone(drops),
            id,
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

trait Sensor {
    fn read(&self) -> i32;
}

struct Thermometer {
    celsius: i32,
}

impl Sensor for Thermometer {
    fn read(&self) -> i32 {
        self.celsius
    }
}

#[test]
fn test_handles_share_one_object() -> Result<()> {
    let drops = Rc::new(Cell::new(0));
    let first = make_shared(Tracked::new(&drops, 1))?;
    let handles: Vec<SharedPtr<Tracked>> = (0..4).map(|_| first.clone()).collect();

    assert_eq!(first.use_count(), 5);
    assert!(handles.iter().all(|h| h.ptr_eq(&first)));
    assert!(handles.iter().all(|h| h.get().map(|t| t.id) == Some(1)));

    drop(handles);
    assert_eq!(first.use_count(), 1);
    assert_eq!(drops.get(), 0);

    drop(first);
    assert_eq!(drops.get(), 1);
    Ok(())
}

#[test]
fn test_copy_then_reset_scenario() -> Result<()> {
    let drops = Rc::new(Cell::new(0));
    let mut a = SharedPtr::from_box(Box::new(Tracked::new(&drops, 1)))?;
    assert_eq!(a.use_count(), 1);

    let mut b = a.clone();
    assert_eq!(a.use_count(), 2);
    assert_eq!(b.use_count(), 2);

    b.reset(None)?;
    assert_eq!(a.use_count(), 1);
    assert_eq!(drops.get(), 0);

    a.reset(None)?;
    assert_eq!(drops.get(), 1);
    assert_eq!(a.use_count(), 0);
    Ok(())
}

#[test]
fn test_reassignment_chain_destroys_each_once() -> Result<()> {
    let drops = Rc::new(Cell::new(0));
    let mut a = make_shared(Tracked::new(&drops, 1))?;
    let b = make_shared(Tracked::new(&drops, 2))?;
    let mut c = SharedPtr::from_box(Box::new(Tracked::new(&drops, 3)))?;

    // Copy-assign: a drops object 1
    a.assign(&b);
    assert_eq!(drops.get(), 1);
    assert_eq!(b.use_count(), 2);

    // Self-assign through a shared referent is a no-op
    let alias = a.clone();
    a.assign(&alias);
    assert_eq!(b.use_count(), 3);
    drop(alias);

    // Move-assign: c drops object 3 and takes over a's count
    c.move_assign(&mut a);
    assert_eq!(drops.get(), 2);
    assert!(a.is_null());
    assert_eq!(c.use_count(), 2);
    assert_eq!(c.get().map(|t| t.id), Some(2));

    drop(b);
    drop(c);
    assert_eq!(drops.get(), 3);
    Ok(())
}

#[test]
fn test_projection_to_trait_object() -> Result<()> {
    let concrete = make_shared(Thermometer { celsius: 21 })?;
    let sensor: SharedPtr<dyn Sensor> = concrete.map(|t| t as &(dyn Sensor + 'static));
    assert_eq!(concrete.use_count(), 2);
    assert_eq!(sensor.get().map(|s| s.read()), Some(21));

    drop(concrete);
    assert_eq!(sensor.use_count(), 1);
    assert_eq!(sensor.get().map(|s| s.read()), Some(21));
    Ok(())
}

#[test]
fn test_into_map_moves_count() -> Result<()> {
    let number = make_shared(7u64)?;
    let observer = number.clone();
    let shown: SharedPtr<dyn Display> = number.into_map(|n| n as &(dyn Display + 'static));
    assert_eq!(observer.use_count(), 2);
    assert_eq!(shown.get().map(|d| d.to_string()), Some("7".to_string()));
    Ok(())
}

#[test]
fn test_reset_and_swap() -> Result<()> {
    let drops = Rc::new(Cell::new(0));
    let mut a = make_shared(Tracked::new(&drops, 1))?;
    let mut b: SharedPtr<Tracked> = SharedPtr::empty();

    a.swap(&mut b);
    assert!(a.is_null());
    assert_eq!(b.use_count(), 1);

    a.reset(Some(Box::new(Tracked::new(&drops, 2))))?;
    b.reset(None)?;
    assert_eq!(drops.get(), 1);
    assert_eq!(a.get().map(|t| t.id), Some(2));
    Ok(())
}

#[test]
fn test_unique_to_shared() -> Result<()> {
    let drops = Rc::new(Cell::new(0));
    let mut unique = make_unique(Tracked::new(&drops, 9))?;
    let moved = unique.take();
    assert!(unique.is_null());

    let shared = moved.into_shared()?;
    let copy = shared.clone();
    assert_eq!(copy.use_count(), 2);
    drop(shared);
    drop(copy);
    assert_eq!(drops.get(), 1);
    Ok(())
}

#[test]
fn test_unique_convert() -> Result<()> {
    let unique: UniquePtr<dyn Sensor> =
        make_unique(Thermometer { celsius: -4 })?.convert(|b| b as Box<dyn Sensor>);
    assert_eq!(unique.get().map(|s| s.read()), Some(-4));
    Ok(())
}
