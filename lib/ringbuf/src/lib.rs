// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Trace ring buffer for drivers
//!
//! Drivers in this tree do not print. Instead, each driver instance owns a
//! small ring buffer of `Copy` trace events which can be read back by the
//! host (or dumped from a debugger) after the fact.  Because the buffer is a
//! plain field of the driver, two instances of the same driver never share
//! (or fight over) a trace.
//!
//! ## Constraints
//!
//! The payload type must implement both `Copy` and `PartialEq`.
//!
//! ## Recording entries
//!
//! Declare the buffer as a field and record into it with [`ringbuf_entry!`],
//! which captures the source line of the call site:
//!
//! ```ignore
//! struct Driver {
//!     trace: Ringbuf<Trace, 32>,
//! }
//!
//! ringbuf_entry!(self.trace, Trace::Read(reg, value));
//! ```
//!
//! When an entry is recorded with the same line and payload as the most
//! recent one, the existing entry's `count` is bumped instead of consuming a
//! new slot, so a tight polling loop does not wipe out the rest of the
//! history.

#![cfg_attr(not(test), no_std)]

/// Inserts data into a ring buffer owned by the caller.
///
/// `ringbuf_entry!(buf, expr)` records `expr` in `buf`, tagged with the
/// line number of the invocation.
#[cfg(not(feature = "disabled"))]
#[macro_export]
macro_rules! ringbuf_entry {
    ($buf:expr, $payload:expr) => {{
        // Evaluate the payload before borrowing the buffer, so that the
        // payload expression is free to read from the same owner.
        let p = $payload;
        $crate::Ringbuf::entry(&mut $buf, line!() as u16, p);
    }};
}

#[cfg(feature = "disabled")]
#[macro_export]
macro_rules! ringbuf_entry {
    ($buf:expr, $payload:expr) => {{
        let _ = &$buf;
        let _ = &$payload;
    }};
}

///
/// A single [`Ringbuf`] entry, carrying a payload of arbitrary type.  When an
/// entry is generated with an identical payload to the most recent entry (in
/// terms of both `line` and `payload`), `count` will be incremented rather
/// than generating a new entry.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingbufEntry<T: Copy + PartialEq> {
    pub line: u16,
    pub generation: u16,
    pub count: u32,
    pub payload: T,
}

///
/// A ring buffer of parametrized type and size.
///
#[derive(Debug, Clone)]
pub struct Ringbuf<T: Copy + PartialEq, const N: usize> {
    last: Option<usize>,
    buffer: [RingbufEntry<T>; N],
}

impl<T: Copy + PartialEq, const N: usize> Ringbuf<T, { N }> {
    /// Builds an empty ring buffer, with every slot holding `init`.
    pub const fn new(init: T) -> Self {
        Self {
            last: None,
            buffer: [RingbufEntry {
                line: 0,
                generation: 0,
                count: 0,
                payload: init,
            }; N],
        }
    }

    pub fn entry(&mut self, line: u16, payload: T) {
        // On the first insertion `last` is None; treat that as an
        // out-of-range index so that we neither reuse an entry nor start
        // anywhere but slot 0.
        let last = self.last.unwrap_or(usize::MAX);

        if let Some(ent) = self.buffer.get_mut(last) {
            if ent.line == line && ent.payload == payload {
                // Only reuse this entry if we don't overflow the count.
                if let Some(new_count) = ent.count.checked_add(1) {
                    ent.count = new_count;
                    return;
                }
            }
        }

        // Advance and wrap.  The wrapping_add turns usize::MAX into 0, which
        // is exactly where the first entry belongs.
        let ndx = {
            let last_plus_1 = last.wrapping_add(1);
            if last_plus_1 >= self.buffer.len() {
                0
            } else {
                last_plus_1
            }
        };

        let Some(ent) = self.buffer.get_mut(ndx) else {
            // Only reachable for a zero-sized buffer.
            return;
        };
        *ent = RingbufEntry {
            line,
            payload,
            count: 1,
            generation: ent.generation.wrapping_add(1),
        };

        self.last = Some(ndx);
    }

    /// Returns the most recently recorded entry, if any.
    pub fn last(&self) -> Option<&RingbufEntry<T>> {
        self.last.and_then(|i| self.buffer.get(i))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.buffer.iter().filter(|e| e.count != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Walks the occupied entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &RingbufEntry<T>> + '_ {
        let start = self.last.map(|l| l + 1).unwrap_or(0);
        // Everything after `last` is older than everything up to it.
        let (recent, stale) = self.buffer.split_at(start.min(N));
        stale
            .iter()
            .chain(recent.iter())
            .rev()
            .filter(|e| e.count != 0)
    }

    /// Forgets every entry while keeping per-slot generations.
    pub fn clear(&mut self) {
        for e in self.buffer.iter_mut() {
            e.count = 0;
        }
        self.last = None;
    }
}
