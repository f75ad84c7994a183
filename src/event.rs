//! Link events and the queue that carries them into the control loop.
//!
//! Link layer callbacks run outside the control loop, possibly from an
//! interrupt or a radio task. They only publish events here; all state
//! mutation happens when the loop drains the queue.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;
use heapless::Deque;

use crate::link::{COMMAND_CHARACTERISTIC_UUID, LIVE_BRIGHTNESS_CHARACTERISTIC_UUID};

/// Something the wireless stack reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    Connected,
    Disconnected,
    /// Byte written to the command characteristic.
    OpcodeWritten(u8),
    /// Byte written to the live brightness characteristic.
    LiveBrightnessWritten(u8),
}

impl LinkEvent {
    /// Map a characteristic write to an event.
    ///
    /// Only the first byte is used. Empty writes and unknown characteristics
    /// yield `None`.
    pub fn from_write(characteristic: u128, data: &[u8]) -> Option<Self> {
        let value = *data.first()?;
        match characteristic {
            COMMAND_CHARACTERISTIC_UUID => Some(Self::OpcodeWritten(value)),
            LIVE_BRIGHTNESS_CHARACTERISTIC_UUID => Some(Self::LiveBrightnessWritten(value)),
            _ => None,
        }
    }
}

/// Returned when publishing into a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull(pub LinkEvent);

impl fmt::Display for QueueFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event queue full, dropped {:?}", self.0)
    }
}

/// Bounded event queue guarded by a critical section.
///
/// Backed by a fixed-size `heapless::Deque`, so it can live in a `static`.
pub struct EventQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<LinkEvent, SIZE>>>,
}

impl<const SIZE: usize> EventQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the link layer callbacks.
    pub const fn publisher(&self) -> EventPublisher<'_, SIZE> {
        EventPublisher { queue: self }
    }

    /// Handle for the control loop, the single consumer.
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { queue: self }
    }

    pub fn publish(&self, event: LinkEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(QueueFull)
        })
    }

    pub fn try_receive(&self) -> Option<LinkEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishing side of an [`EventQueue`].
///
/// Cheap to copy into every callback.
#[derive(Clone, Copy)]
pub struct EventPublisher<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventPublisher<'_, SIZE> {
    pub fn publish(&self, event: LinkEvent) -> Result<(), QueueFull> {
        self.queue.publish(event)
    }

    pub fn connected(&self) -> Result<(), QueueFull> {
        self.publish(LinkEvent::Connected)
    }

    pub fn disconnected(&self) -> Result<(), QueueFull> {
        self.publish(LinkEvent::Disconnected)
    }

    /// Publish a GATT write, ignoring writes that map to no event.
    pub fn characteristic_written(&self, characteristic: u128, data: &[u8]) -> Result<(), QueueFull> {
        match LinkEvent::from_write(characteristic, data) {
            Some(event) => self.publish(event),
            None => {
                debug!("event: ignoring write of {} bytes", data.len());
                Ok(())
            }
        }
    }
}

/// Consuming side of an [`EventQueue`].
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<LinkEvent> {
        self.queue.try_receive()
    }
}
