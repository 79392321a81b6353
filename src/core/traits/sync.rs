//! Synchronized state access.
//!
//! `SharedState` abstracts over the container that guards state reachable from
//! more than one execution context:
//! - `CriticalSectionState<T>` for embedded targets (critical-section mutex)
//! - `MockState<T>` for single-threaded host tests (RefCell)
//!
//! Every closure passed to `with_mut` runs as one indivisible section, which is
//! what makes an IMU accessor's read-then-reset-to-stale step atomic.

use core::cell::RefCell;
use critical_section::Mutex;

/// Platform-agnostic synchronized state access.
///
/// # Example
///
/// ```
/// use gnc_imu::core::traits::{MockState, SharedState};
///
/// let state = MockState::new(41u32);
/// state.with_mut(|v| *v += 1);
/// assert_eq!(state.with(|v| *v), 42);
/// ```
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

/// Critical-section guarded state, usable from `static` items.
pub struct CriticalSectionState<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> CriticalSectionState<T> {
    /// Creates a new `CriticalSectionState` wrapping the given value.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }
}

impl<T> SharedState<T> for CriticalSectionState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        critical_section::with(|cs| f(&self.inner.borrow_ref(cs)))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }
}

/// RefCell-backed state for single-threaded tests.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g. calling `with_mut` from inside
/// `with`). That indicates a bug in the test.
pub struct MockState<T> {
    inner: RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: RefCell::new(value),
        }
    }

    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}
