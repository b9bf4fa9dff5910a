use std::fmt;

use crate::channel::Channel;

/// Debug representation that never blocks: live state is shown when the
/// state lock happens to be free and elided as `<locked>` otherwise.
impl<T> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Channel");
        s.field("capacity", &self.capacity());
        match self.state.try_lock() {
            Some(state) => {
                s.field("len", &state.slots.len());
                s.field("closed", &state.closed);
            }
            None => {
                s.field("state", &"<locked>");
            }
        }
        s.finish()
    }
}
