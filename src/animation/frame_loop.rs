//! Per-frame continuation loops with explicit, idempotent cancellation.
//!
//! A [`FrameDriver`] stands in for the display's animation-frame
//! scheduler: every call to [`FrameDriver::tick`] is one display frame,
//! and each live [`FrameTask`] runs exactly once per frame until it
//! finishes or its [`LoopHandle`] is cancelled. Everything here is
//! single-threaded; tasks and event handlers interleave but never run in
//! parallel.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use web_time::Instant;

/// What a task wants after running one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Re-arm for the next frame.
    Continue,
    /// Natural completion; the loop is dropped.
    Finish,
}

/// Work performed once per display frame.
pub trait FrameTask {
    /// Run one frame at `now`.
    fn frame(&mut self, now: Instant) -> FrameControl;
}

impl<F: FnMut(Instant) -> FrameControl> FrameTask for F {
    fn frame(&mut self, now: Instant) -> FrameControl {
        self(now)
    }
}

/// Lifecycle of a scheduled loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Armed; will run next frame.
    Running,
    /// Cancelled by its owner.
    Cancelled,
    /// Finished on its own.
    Finished,
}

/// Opaque identifier for a scheduled loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoopId(u64);

/// Owned handle to a running loop.
///
/// Cancelling is idempotent: cancelling twice, or after the loop finished
/// on its own, is a no-op.
#[derive(Clone)]
pub struct LoopHandle {
    id: LoopId,
    state: Rc<Cell<LoopState>>,
}

impl LoopHandle {
    /// Stop the loop. No further frames run for it.
    pub fn cancel(&self) {
        if self.state.get() == LoopState::Running {
            self.state.set(LoopState::Cancelled);
            log::debug!("frame loop {:?} cancelled", self.id);
        }
    }

    /// Whether the loop will run on the next frame.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.get() == LoopState::Running
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state.get()
    }

    /// Identifier of the loop.
    #[must_use]
    pub fn id(&self) -> LoopId {
        self.id
    }
}

impl fmt::Debug for LoopHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopHandle")
            .field("id", &self.id)
            .field("state", &self.state.get())
            .finish()
    }
}

struct ScheduledLoop {
    id: LoopId,
    state: Rc<Cell<LoopState>>,
    task: Box<dyn FrameTask>,
}

/// Frame scheduler owning every armed loop.
#[derive(Default)]
pub struct FrameDriver {
    next_id: u64,
    loops: Vec<ScheduledLoop>,
}

impl FrameDriver {
    /// Empty driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `task` to run from the next frame onward.
    pub fn start(&mut self, task: impl FrameTask + 'static) -> LoopHandle {
        let id = LoopId(self.next_id);
        self.next_id += 1;
        let state = Rc::new(Cell::new(LoopState::Running));
        self.loops.push(ScheduledLoop {
            id,
            state: Rc::clone(&state),
            task: Box::new(task),
        });
        log::trace!("frame loop {id:?} started");
        LoopHandle { id, state }
    }

    /// Run one display frame. Returns how many tasks ran.
    ///
    /// A loop cancelled earlier in the same frame (by another task) is
    /// skipped.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut ran = 0;
        for scheduled in &mut self.loops {
            if scheduled.state.get() != LoopState::Running {
                continue;
            }
            ran += 1;
            if scheduled.task.frame(now) == FrameControl::Finish
                && scheduled.state.get() == LoopState::Running
            {
                scheduled.state.set(LoopState::Finished);
                log::trace!("frame loop {:?} finished", scheduled.id);
            }
        }
        self.loops
            .retain(|scheduled| scheduled.state.get() == LoopState::Running);
        ran
    }

    /// Number of loops still armed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.loops
            .iter()
            .filter(|scheduled| scheduled.state.get() == LoopState::Running)
            .count()
    }

    /// Whether no loop is armed.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}

impl fmt::Debug for FrameDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameDriver")
            .field("next_id", &self.next_id)
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use web_time::Duration;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl FrameTask + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move |_now: Instant| {
            inner.set(inner.get() + 1);
            FrameControl::Continue
        })
    }

    #[test]
    fn test_loop_runs_every_frame() {
        let mut driver = FrameDriver::new();
        let (count, task) = counter();
        let _handle = driver.start(task);
        let now = Instant::now();
        for i in 0..5 {
            let _ = driver.tick(now + Duration::from_millis(16 * i));
        }
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn test_cancel_stops_further_frames() {
        let mut driver = FrameDriver::new();
        let (count, task) = counter();
        let handle = driver.start(task);
        let now = Instant::now();
        let _ = driver.tick(now);
        handle.cancel();
        assert_eq!(driver.tick(now), 0);
        assert_eq!(count.get(), 1);
        assert!(driver.is_idle());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut driver = FrameDriver::new();
        let (_count, task) = counter();
        let handle = driver.start(task);
        handle.cancel();
        handle.cancel();
        assert_eq!(handle.state(), LoopState::Cancelled);
        let _ = driver.tick(Instant::now());
        handle.cancel();
        assert_eq!(handle.state(), LoopState::Cancelled);
    }

    #[test]
    fn test_cancel_after_finish_is_noop() {
        let mut driver = FrameDriver::new();
        let handle = driver.start(|_now: Instant| FrameControl::Finish);
        let _ = driver.tick(Instant::now());
        assert_eq!(handle.state(), LoopState::Finished);
        handle.cancel();
        assert_eq!(handle.state(), LoopState::Finished);
        assert!(!handle.is_active());
    }

    #[test]
    fn test_task_can_cancel_later_loop_in_same_frame() {
        let mut driver = FrameDriver::new();
        let victim_slot: Rc<RefCell<Option<LoopHandle>>> =
            Rc::new(RefCell::new(None));
        let slot = Rc::clone(&victim_slot);
        let _killer = driver.start(move |_now: Instant| {
            if let Some(handle) = slot.borrow().as_ref() {
                handle.cancel();
            }
            FrameControl::Finish
        });
        let (count, task) = counter();
        *victim_slot.borrow_mut() = Some(driver.start(task));

        assert_eq!(driver.tick(Instant::now()), 1);
        assert_eq!(count.get(), 0);
        assert!(driver.is_idle());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut driver = FrameDriver::new();
        let a = driver.start(|_now: Instant| FrameControl::Continue);
        let b = driver.start(|_now: Instant| FrameControl::Continue);
        assert_ne!(a.id(), b.id());
        assert_eq!(driver.pending(), 2);
    }
}
