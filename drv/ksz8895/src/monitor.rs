// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Link monitoring.
//!
//! Each port is either down or up.  A poll ([`Ksz8895::tick`]) or an
//! interrupt ([`Ksz8895::event_handler`]) reads the port's link-good bit and
//! compares it against the stored state; every change is reported to a
//! [`LinkListener`].  There is no debouncing: each observation is taken at
//! face value.

use crate::fields::PortInterrupt;
use crate::{Ksz8895, Ksz8895Error, Port, RegisterBus, Register, Trace};
use ringbuf::ringbuf_entry;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Speed {
    Mbps10,
    Mbps100,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Duplex {
    Half,
    Full,
}

/// Snapshot of one port's status registers
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LinkStatus {
    pub up: bool,
    pub speed: Speed,
    pub duplex: Duplex,
}

/// A link transition.  For a link going down, `speed` and `duplex` are the
/// values the link had while it was up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LinkEvent {
    pub port: Port,
    pub up: bool,
    pub speed: Speed,
    pub duplex: Duplex,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LinkState {
    Down,
    Up { speed: Speed, duplex: Duplex },
}

/// Receiver of link transitions, usually the host network stack
pub trait LinkListener {
    fn link_changed(&mut self, event: LinkEvent);
}

impl<F: FnMut(LinkEvent)> LinkListener for F {
    fn link_changed(&mut self, event: LinkEvent) {
        self(event)
    }
}

/// Last known link state of every port
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LinkMonitor {
    links: [LinkState; 5],
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkMonitor {
    pub const fn new() -> Self {
        Self {
            links: [LinkState::Down; 5],
        }
    }

    pub fn state(&self, port: Port) -> LinkState {
        self.links[port.index()]
    }

    /// Whether any port has link, i.e. whether the interface as a whole
    /// should be reported up.
    pub fn any_up(&self) -> bool {
        self.links.iter().any(|l| matches!(l, LinkState::Up { .. }))
    }

    pub fn reset(&mut self) {
        self.links = [LinkState::Down; 5];
    }

    /// Stores `next` as the state of `port`, returning the transition if it
    /// differs from the previous one.
    pub fn update(&mut self, port: Port, next: LinkState) -> Option<LinkEvent> {
        let prev = core::mem::replace(&mut self.links[port.index()], next);
        match (prev, next) {
            (LinkState::Down, LinkState::Up { speed, duplex }) => {
                Some(LinkEvent {
                    port,
                    up: true,
                    speed,
                    duplex,
                })
            }
            (LinkState::Up { speed, duplex }, LinkState::Down) => {
                Some(LinkEvent {
                    port,
                    up: false,
                    speed,
                    duplex,
                })
            }
            _ => None,
        }
    }
}

impl<B: RegisterBus> Ksz8895<B> {
    /// Ports whose link is tracked
    fn monitored_ports(&self) -> &'static [Port] {
        if self.config.monitor_uplink {
            &Port::ALL
        } else {
            &Port::COPPER
        }
    }

    /// Polls every monitored port, reporting transitions to `listener`.
    pub fn tick<L: LinkListener>(
        &mut self,
        listener: &mut L,
    ) -> Result<(), Ksz8895Error> {
        for &port in self.monitored_ports() {
            self.evaluate_port(port, listener)?;
        }
        Ok(())
    }

    /// Unmasks the link change interrupt of every monitored port.
    pub fn enable_irq(&mut self) -> Result<(), Ksz8895Error> {
        let mask = self
            .monitored_ports()
            .iter()
            .fold(0, |m, p| m | p.interrupt_bit());
        self.write(Register::INT_MASK, mask)
    }

    pub fn disable_irq(&mut self) -> Result<(), Ksz8895Error> {
        self.write(Register::INT_MASK, 0)
    }

    /// Services the switch interrupt: acknowledges the pending status bits
    /// and re-evaluates the ports they name.
    pub fn event_handler<L: LinkListener>(
        &mut self,
        listener: &mut L,
    ) -> Result<(), Ksz8895Error> {
        let status = self.read(Register::INT_STAT)?;
        ringbuf_entry!(self.trace, Trace::Interrupt(status));
        if status == 0 {
            return Ok(());
        }
        // Write-one-to-clear
        self.write(Register::INT_STAT, status)?;

        let status = PortInterrupt::from_bits_truncate(status);
        for &port in self.monitored_ports() {
            if status.bits() & port.interrupt_bit() != 0 {
                self.evaluate_port(port, listener)?;
            }
        }
        Ok(())
    }

    fn evaluate_port<L: LinkListener>(
        &mut self,
        port: Port,
        listener: &mut L,
    ) -> Result<(), Ksz8895Error> {
        let next = if self.link_good(port)? {
            match self.monitor.state(port) {
                up @ LinkState::Up { .. } => up,
                LinkState::Down => {
                    // Speed and duplex are only resolved once link is up
                    let s = self.port_link_status(port)?;
                    LinkState::Up {
                        speed: s.speed,
                        duplex: s.duplex,
                    }
                }
            }
        } else {
            LinkState::Down
        };

        if let Some(event) = self.monitor.update(port, next) {
            ringbuf_entry!(self.trace, Trace::Link(event));
            listener.link_changed(event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockSwitch, Transaction};
    use crate::{BusError, Config};

    fn dev() -> Ksz8895<MockSwitch> {
        Ksz8895::new(MockSwitch::new(), Config::default())
    }

    #[test]
    fn two_transitions_for_five_polls() {
        let mut dev = dev();
        let mut events = vec![];
        for up in [false, false, true, true, false] {
            dev.bus_mut().set_link(Port::Two, up, Speed::Mbps100, Duplex::Full);
            dev.tick(&mut |e: LinkEvent| events.push(e)).unwrap();
        }
        assert_eq!(
            events,
            [
                LinkEvent {
                    port: Port::Two,
                    up: true,
                    speed: Speed::Mbps100,
                    duplex: Duplex::Full,
                },
                LinkEvent {
                    port: Port::Two,
                    up: false,
                    speed: Speed::Mbps100,
                    duplex: Duplex::Full,
                },
            ]
        );
        assert!(!dev.monitor().any_up());
    }

    #[test]
    fn update_is_pure() {
        let mut m = LinkMonitor::new();
        let up = LinkState::Up {
            speed: Speed::Mbps10,
            duplex: Duplex::Half,
        };
        assert_eq!(m.update(Port::Five, LinkState::Down), None);
        assert!(m.update(Port::Five, up).is_some());
        assert!(m.any_up());
        assert_eq!(m.update(Port::Five, up), None);
        m.reset();
        assert_eq!(m.state(Port::Five), LinkState::Down);
    }

    #[test]
    fn tick_skips_uplink_unless_asked() {
        let mut dev = dev();
        dev.bus_mut().set_link(Port::Five, true, Speed::Mbps100, Duplex::Full);
        let mut n = 0;
        dev.tick(&mut |_: LinkEvent| n += 1).unwrap();
        assert_eq!(n, 0);

        let config = Config {
            monitor_uplink: true,
            ..Config::default()
        };
        let mut dev = Ksz8895::new(dev.release(), config);
        let mut seen = vec![];
        dev.tick(&mut |e: LinkEvent| seen.push(e.port)).unwrap();
        assert_eq!(seen, [Port::Five]);
    }

    #[test]
    fn steady_link_reads_only_status1() {
        let mut dev = dev();
        dev.bus_mut().set_link(Port::One, true, Speed::Mbps100, Duplex::Full);
        dev.tick(&mut |_: LinkEvent| ()).unwrap();
        dev.bus_mut().clear_log();
        dev.tick(&mut |_: LinkEvent| ()).unwrap();
        // One STAT1 read per copper port
        assert_eq!(
            dev.bus().log(),
            [0x1E, 0x2E, 0x3E, 0x4E]
                .map(|addr| Transaction::Read {
                    addr,
                    data: if addr == 0x1E { 0x20 } else { 0x00 }
                })
                .as_slice()
        );
    }

    #[test]
    fn irq_mask() {
        let mut dev = dev();
        dev.enable_irq().unwrap();
        assert_eq!(dev.bus().get(Register::INT_MASK.addr()), 0x0F);
        dev.disable_irq().unwrap();
        assert_eq!(dev.bus().get(Register::INT_MASK.addr()), 0x00);

        let config = Config {
            monitor_uplink: true,
            ..Config::default()
        };
        let mut dev = Ksz8895::new(dev.release(), config);
        dev.enable_irq().unwrap();
        assert_eq!(dev.bus().get(Register::INT_MASK.addr()), 0x1F);
    }

    #[test]
    fn event_handler_acknowledges_and_evaluates_flagged_ports() {
        let mut dev = dev();
        dev.bus_mut().set_link(Port::Three, true, Speed::Mbps10, Duplex::Full);
        dev.bus_mut().set_link(Port::Four, true, Speed::Mbps10, Duplex::Full);
        // Only port 3 raised its interrupt
        dev.bus_mut().raise_interrupt(Port::Three.interrupt_bit());

        let mut seen = vec![];
        dev.event_handler(&mut |e: LinkEvent| seen.push(e.port))
            .unwrap();
        assert_eq!(seen, [Port::Three]);
        assert_eq!(dev.bus().get(Register::INT_STAT.addr()), 0);
        assert_eq!(
            dev.bus().log()[1],
            Transaction::Write {
                addr: Register::INT_STAT.addr(),
                data: 0x04
            }
        );

        // Nothing pending: a single status read
        dev.bus_mut().clear_log();
        dev.event_handler(&mut |_: LinkEvent| ()).unwrap();
        assert_eq!(dev.bus().log().len(), 1);
    }

    #[test]
    fn late_interrupt_stays_pending() {
        let mut dev = dev();
        dev.bus_mut().set_link(Port::One, true, Speed::Mbps100, Duplex::Full);
        dev.bus_mut().set_link(Port::Two, true, Speed::Mbps100, Duplex::Full);
        dev.bus_mut().raise_interrupt(Port::One.interrupt_bit());
        // Port 2 changes between the status read and its acknowledge
        dev.bus_mut()
            .raise_interrupt_after_read(Port::Two.interrupt_bit());

        let mut seen = vec![];
        dev.event_handler(&mut |e: LinkEvent| seen.push(e.port))
            .unwrap();
        assert_eq!(seen, [Port::One]);
        assert_eq!(
            dev.bus().get(Register::INT_STAT.addr()),
            Port::Two.interrupt_bit()
        );

        seen.clear();
        dev.event_handler(&mut |e: LinkEvent| seen.push(e.port))
            .unwrap();
        assert_eq!(seen, [Port::Two]);
        assert_eq!(dev.bus().get(Register::INT_STAT.addr()), 0);
    }

    #[test]
    fn event_handler_stops_at_bus_error() {
        let mut dev = dev();
        dev.bus_mut().set_link(Port::One, true, Speed::Mbps100, Duplex::Full);
        dev.bus_mut().raise_interrupt(Port::One.interrupt_bit());
        // Status read and acknowledge go through, the port read fails
        dev.bus_mut().fail_after(2);

        let mut seen = vec![];
        assert_eq!(
            dev.event_handler(&mut |e: LinkEvent| seen.push(e.port)),
            Err(Ksz8895Error::Bus(BusError::Transfer))
        );
        assert!(seen.is_empty());
        assert_eq!(
            dev.bus().log(),
            [
                Transaction::Read {
                    addr: Register::INT_STAT.addr(),
                    data: 0x01
                },
                Transaction::Write {
                    addr: Register::INT_STAT.addr(),
                    data: 0x01
                },
            ]
        );
        assert_eq!(dev.monitor().state(Port::One), LinkState::Down);
    }

    #[test]
    fn transitions_are_traced() {
        let mut dev = dev();
        dev.bus_mut().set_link(Port::One, true, Speed::Mbps100, Duplex::Half);
        dev.tick(&mut |_: LinkEvent| ()).unwrap();
        assert!(dev.trace().iter().any(|e| matches!(
            e.payload,
            Trace::Link(LinkEvent {
                port: Port::One,
                up: true,
                ..
            })
        )));
    }
}
