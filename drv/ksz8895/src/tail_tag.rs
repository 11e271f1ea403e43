// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tail tagging.
//!
//! With `GLOBAL_CTRL10.TAIL_TAG_EN` set, every frame on the uplink carries
//! one extra trailing byte.  Towards the switch it is a port *mask*: bit 6
//! is a marker and bits 3:0 select egress ports 1-4, one bit each.  From the
//! switch it is a binary source port index in bits 1:0.
//!
//! The two directions are deliberately not inverses of each other.
//! [`decode`] accepts any byte, ignoring the marker bit, so a corrupted or
//! missing tag silently maps to some port 1-4.
//!
//! Frames for the uplink itself are sent untagged, so port 5 is never a
//! valid destination here.

use crate::{Config, Ksz8895, Ksz8895Error, Port, RegisterBus};

/// Bit 6, set on every tag sent to the switch
pub const TAIL_TAG_MARKER: u8 = 0x40;

/// Minimum Ethernet frame length without FCS; the chip expects the host to
/// pad up to this before the tag
pub const MIN_PADDED_LEN: usize = 60;

/// Builds the tail tag directing a frame to `port` (1-4).
pub fn encode(port: u8) -> Result<u8, Ksz8895Error> {
    match port {
        1..=4 => Ok(TAIL_TAG_MARKER | (1 << ((port - 1) & 0x3))),
        _ => Err(Ksz8895Error::InvalidPort(port)),
    }
}

/// Recovers the source port from a received tail tag.  Total over `u8`.
pub const fn decode(tag: u8) -> Port {
    match tag & 0x3 {
        0 => Port::One,
        1 => Port::Two,
        2 => Port::Three,
        _ => Port::Four,
    }
}

/// Frame storage that can grow and shrink at its tail
pub trait FrameBuffer {
    fn as_slice(&self) -> &[u8];

    /// Largest length the buffer can hold
    fn capacity(&self) -> usize;

    /// Appends one byte; the caller checks capacity first
    fn push(&mut self, byte: u8) -> Result<(), Ksz8895Error>;

    /// Shortens the frame; no-op if `len` is not shorter
    fn truncate(&mut self, len: usize);

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const N: usize> FrameBuffer for heapless::Vec<u8, N> {
    fn as_slice(&self) -> &[u8] {
        self
    }

    fn capacity(&self) -> usize {
        N
    }

    fn push(&mut self, byte: u8) -> Result<(), Ksz8895Error> {
        heapless::Vec::push(self, byte).map_err(|_| Ksz8895Error::FrameTooLong)
    }

    fn truncate(&mut self, len: usize) {
        heapless::Vec::truncate(self, len)
    }
}

/// A frame occupying the front of a caller-owned buffer, such as a DMA
/// descriptor's
pub struct SliceFrame<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceFrame<'a> {
    /// Wraps the first `len` bytes of `buf` as a frame.
    pub fn new(buf: &'a mut [u8], len: usize) -> Result<Self, Ksz8895Error> {
        if len > buf.len() {
            return Err(Ksz8895Error::FrameTooLong);
        }
        Ok(Self { buf, len })
    }
}

impl FrameBuffer for SliceFrame<'_> {
    fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn push(&mut self, byte: u8) -> Result<(), Ksz8895Error> {
        let slot = self
            .buf
            .get_mut(self.len)
            .ok_or(Ksz8895Error::FrameTooLong)?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }

    fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }
}

/// Tail tag codec, parametrized by the host's framing rules
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TailTag {
    /// Shortest frame accepted once the tag is removed
    pub min_frame_len: usize,
    /// Zero-pad to [`MIN_PADDED_LEN`] before appending the tag
    pub pad_short_frames: bool,
}

impl From<&Config> for TailTag {
    fn from(c: &Config) -> Self {
        Self {
            min_frame_len: c.min_frame_len,
            pad_short_frames: c.pad_short_frames,
        }
    }
}

impl TailTag {
    /// Appends the tail tag for `port` (1-4).  The frame is left untouched
    /// if it cannot hold the tag.
    pub fn tag_frame<F: FrameBuffer>(
        &self,
        frame: &mut F,
        port: u8,
    ) -> Result<(), Ksz8895Error> {
        let tag = encode(port)?;
        let body = if self.pad_short_frames {
            frame.len().max(MIN_PADDED_LEN)
        } else {
            frame.len()
        };
        if body + 1 > frame.capacity() {
            return Err(Ksz8895Error::FrameTooLong);
        }
        while frame.len() < body {
            frame.push(0)?;
        }
        frame.push(tag)
    }

    /// Strips the tail tag in place, returning the source port.
    pub fn untag_frame<F: FrameBuffer>(
        &self,
        frame: &mut F,
    ) -> Result<Port, Ksz8895Error> {
        let (port, rest) = self.untag_slice(frame.as_slice())?;
        let len = rest.len();
        frame.truncate(len);
        Ok(port)
    }

    /// Splits the tail tag off a received frame without copying.
    pub fn untag_slice<'a>(
        &self,
        frame: &'a [u8],
    ) -> Result<(Port, &'a [u8]), Ksz8895Error> {
        if frame.len() <= self.min_frame_len {
            return Err(Ksz8895Error::FrameTooShort(frame.len()));
        }
        match frame.split_last() {
            Some((&tag, rest)) => Ok((decode(tag), rest)),
            None => Err(Ksz8895Error::FrameTooShort(0)),
        }
    }
}

impl<B: RegisterBus> Ksz8895<B> {
    /// Tail tag codec following this driver's configuration
    pub fn tail_tag(&self) -> TailTag {
        TailTag::from(&self.config)
    }

    /// Appends the tail tag sending `frame` out of `port` (1-4).
    pub fn tag_frame<F: FrameBuffer>(
        &self,
        frame: &mut F,
        port: u8,
    ) -> Result<(), Ksz8895Error> {
        self.tail_tag().tag_frame(frame, port)
    }

    /// Strips the tail tag from a received frame, returning its source port.
    pub fn untag_frame<F: FrameBuffer>(
        &self,
        frame: &mut F,
    ) -> Result<Port, Ksz8895Error> {
        self.tail_tag().untag_frame(frame)
    }
}
