use std::time::{Duration, Instant};

use crossbeam_utils::CachePadded;
use parking_lot::{Condvar, Mutex};

use crate::error::{Drained, SendError, TryReceiveError, TrySendError};
use crate::slot::Slots;

/// Mutable channel state. Every read and write happens with the state lock
/// held.
pub(crate) struct Shared<T> {
    pub(crate) slots: Slots<T>,
    /// Transitions at most once, from false to true.
    pub(crate) closed: bool,
}

/// A thread-safe channel handing owned values from producers to consumers.
///
/// The shape is fixed at construction (see [`ChannelBuilder`]): capacity `0`
/// is a rendezvous channel whose single cell must be emptied by a receive
/// before the next send can deposit; capacity `>= 1` is a bounded FIFO
/// buffer. One object serves any number of producer and consumer threads;
/// share it behind an [`Arc`](std::sync::Arc) and call every operation
/// through `&self`.
///
/// Values travel by move, so ownership of whatever `T` holds transfers to
/// the consumer at the moment the receive returns.
///
/// [`ChannelBuilder`]: crate::ChannelBuilder
pub struct Channel<T> {
    capacity: usize,
    /// Padded so the guarded state does not share a cache line with the
    /// wait queues below.
    pub(crate) state: CachePadded<Mutex<Shared<T>>>,
    /// Producers blocked on a full channel wait here.
    not_full: Condvar,
    /// Consumers blocked on an empty channel wait here.
    not_empty: Condvar,
}

impl<T> Channel<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            state: CachePadded::new(Mutex::new(Shared {
                slots: Slots::for_capacity(capacity),
                closed: false,
            })),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    /// Sends a value, blocking while the channel is full.
    ///
    /// # Returns
    /// * `Ok(())` once the value has been deposited
    /// * `Err(SendError)` if the channel is closed, or closes while this
    ///   call is waiting for room; the value is handed back either way
    pub fn send(&self, item: T) -> Result<(), SendError<T>> {
        let mut state = self.state.lock();
        while state.slots.is_full() && !state.closed {
            self.not_full.wait(&mut state);
        }
        if state.closed {
            return Err(SendError(item));
        }
        state.slots.deposit(item);
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Makes a non-blocking attempt to send a value.
    ///
    /// # Returns
    /// * `Ok(())` if the value was deposited without waiting
    /// * `Err(TrySendError::WouldBlock)` if the channel is full or the
    ///   state lock is contended; nothing was deposited
    /// * `Err(TrySendError::Closed)` if the channel is closed
    pub fn try_send(&self, item: T) -> Result<(), TrySendError<T>> {
        let mut state = match self.state.try_lock() {
            Some(guard) => guard,
            None => return Err(TrySendError::WouldBlock(item)),
        };
        if state.closed {
            return Err(TrySendError::Closed(item));
        }
        if state.slots.is_full() {
            return Err(TrySendError::WouldBlock(item));
        }
        state.slots.deposit(item);
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Receives a value, blocking while the channel is empty and open.
    ///
    /// Closure alone is not an error here: a closed channel keeps yielding
    /// its remaining values, and [`Drained`] is reported only once it is
    /// closed with nothing left.
    pub fn receive(&self) -> Result<T, Drained> {
        let mut state = self.state.lock();
        while state.slots.is_empty() && !state.closed {
            self.not_empty.wait(&mut state);
        }
        match state.slots.extract() {
            Some(item) => {
                drop(state);
                self.not_full.notify_one();
                Ok(item)
            }
            None => Err(Drained),
        }
    }

    /// Makes a non-blocking attempt to receive a value.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        let mut state = match self.state.try_lock() {
            Some(guard) => guard,
            None => return Err(TryReceiveError::WouldBlock),
        };
        match state.slots.extract() {
            Some(item) => {
                drop(state);
                self.not_full.notify_one();
                Ok(item)
            }
            None if state.closed => Err(TryReceiveError::Drained),
            None => Err(TryReceiveError::WouldBlock),
        }
    }

    /// Receives a value, waiting at most `timeout` for one to arrive.
    ///
    /// On expiry the result mirrors [`try_receive`](Self::try_receive):
    /// `WouldBlock` if the channel is still empty and open.
    pub fn receive_timeout(&self, timeout: Duration) -> Result<T, TryReceiveError> {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock();
        while state.slots.is_empty() && !state.closed {
            if self.not_empty.wait_until(&mut state, deadline).timed_out() {
                break;
            }
        }
        match state.slots.extract() {
            Some(item) => {
                drop(state);
                self.not_full.notify_one();
                Ok(item)
            }
            None if state.closed => Err(TryReceiveError::Drained),
            None => Err(TryReceiveError::WouldBlock),
        }
    }

    /// Closes the channel. Idempotent; safe to call from any thread.
    ///
    /// Values already deposited stay receivable. Threads blocked in
    /// [`send`](Self::send) or [`receive`](Self::receive) wake up and
    /// observe the closure.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.closed = true;
        drop(state);
        // The predicate of every waiter just changed, so wake them all.
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    /// Whether the channel has been closed. Once true, stays true.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Whether this channel buffers values (capacity `>= 1`) rather than
    /// handing them off rendezvous-style.
    pub fn is_buffered(&self) -> bool {
        self.capacity > 0
    }

    /// Number of values currently held. A snapshot: other threads may
    /// deposit or extract as soon as this returns.
    pub fn len(&self) -> usize {
        self.state.lock().slots.len()
    }

    /// True when the channel currently holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The capacity fixed at construction; `0` for rendezvous channels.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
