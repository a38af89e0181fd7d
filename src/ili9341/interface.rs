//! Display interface using spidev plus DC/CS GPIO lines
//!
//! Every register access is framed the same way: the DC line selects whether
//! the bytes on the bus are an opcode or payload, and CS is held asserted for
//! the whole logical unit (one opcode, or one payload run). Payload runs are
//! fragmented at [`SPI_CHUNK`] because the kernel rejects single `write(2)`
//! calls larger than its spidev buffer, but CS stays low across the fragments.

use std::io::Write;

use display_interface::DisplayError;
use embedded_hal::digital::OutputPin;

/// Max bytes per spidev `write()`, the kernel default bufsiz.
pub const SPI_CHUNK: usize = 4096;

/// The connection to the panel: SPI bus handle and the two control lines.
pub struct DisplayInterface<SPI, DC, CS> {
    /// SPI bus; `std::io::Write` so short write counts stay visible
    spi: SPI,
    /// Data/Command control line (high for data, low for command)
    dc: DC,
    /// Chip select line (active low)
    cs: CS,
}

impl<SPI, DC, CS> DisplayInterface<SPI, DC, CS> {
    pub fn new(spi: SPI, dc: DC, cs: CS) -> Self {
        DisplayInterface { spi, dc, cs }
    }
}

impl<SPI, DC, CS> DisplayInterface<SPI, DC, CS>
where
    SPI: Write,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Send one command opcode under a single CS assertion.
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;
        let sent = self.write_chunked(&[command]);
        // CS must be released even when the transfer failed
        let released = self.cs.set_high().map_err(|_| DisplayError::CSError);
        sent?;
        released
    }

    /// Send a payload run under a single CS assertion, fragmenting at the
    /// transport's maximum write size.
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;
        let sent = self.write_chunked(data);
        let released = self.cs.set_high().map_err(|_| DisplayError::CSError);
        sent?;
        released
    }

    /// Basic function for sending a command and the data belonging to it.
    pub(crate) fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.cmd(command)?;
        self.data(data)
    }

    /// Push `buf` through the bus in chunks of at most [`SPI_CHUNK`] bytes.
    /// A short write is not an error: the transport accepted fewer bytes
    /// than offered and the loop resumes at the returned offset. A genuine
    /// transport error (or a zero-byte acceptance) aborts the transfer.
    fn write_chunked(&mut self, mut buf: &[u8]) -> Result<(), DisplayError> {
        while !buf.is_empty() {
            let n = buf.len().min(SPI_CHUNK);
            match self.spi.write(&buf[..n]) {
                Ok(0) => {
                    log::error!("SPI bus accepted 0 of {} remaining bytes", buf.len());
                    return Err(DisplayError::BusWriteError);
                }
                Ok(written) => buf = &buf[written..],
                Err(e) => {
                    log::error!("SPI write failed with {} bytes remaining: {}", buf.len(), e);
                    return Err(DisplayError::BusWriteError);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_spy {
    //! Spy bus and pins that record the full command/data sequence so the
    //! framing can be asserted byte for byte.

    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::io;
    use std::rc::Rc;

    use embedded_hal::digital::{ErrorType, OutputPin};

    use super::DisplayInterface;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Dc(bool),
        Cs(bool),
        Write(Vec<u8>),
    }

    pub type Log = Rc<RefCell<Vec<Event>>>;

    pub struct SpyPin {
        log: Log,
        dc: bool,
    }

    impl ErrorType for SpyPin {
        type Error = Infallible;
    }

    impl OutputPin for SpyPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            let ev = if self.dc { Event::Dc(false) } else { Event::Cs(false) };
            self.log.borrow_mut().push(ev);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Infallible> {
            let ev = if self.dc { Event::Dc(true) } else { Event::Cs(true) };
            self.log.borrow_mut().push(ev);
            Ok(())
        }
    }

    /// Bus spy. `accepts` holds the byte count granted to each successive
    /// `write` call; once exhausted every write is accepted in full. A `0`
    /// entry makes that call fail with a broken-pipe error.
    pub struct SpyBus {
        log: Log,
        accepts: Vec<usize>,
    }

    impl io::Write for SpyBus {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let granted = if self.accepts.is_empty() {
                buf.len()
            } else {
                let a = self.accepts.remove(0);
                if a == 0 {
                    return Err(io::Error::new(io::ErrorKind::BrokenPipe, "bus gone"));
                }
                a.min(buf.len())
            };
            self.log.borrow_mut().push(Event::Write(buf[..granted].to_vec()));
            Ok(granted)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn spy_interface(accepts: Vec<usize>) -> (DisplayInterface<SpyBus, SpyPin, SpyPin>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let iface = DisplayInterface::new(
            SpyBus { log: log.clone(), accepts },
            SpyPin { log: log.clone(), dc: true },
            SpyPin { log: log.clone(), dc: false },
        );
        (iface, log)
    }

    /// Flatten the write events back into the raw byte stream.
    pub fn written_bytes(log: &Log) -> Vec<u8> {
        log.borrow()
            .iter()
            .filter_map(|ev| match ev {
                Event::Write(b) => Some(b.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_spy::{spy_interface, written_bytes, Event};
    use super::*;

    #[test]
    fn command_framing() {
        let (mut iface, log) = spy_interface(vec![]);
        iface.cmd(0x11).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Dc(false),
                Event::Cs(false),
                Event::Write(vec![0x11]),
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn data_framing() {
        let (mut iface, log) = spy_interface(vec![]);
        iface.data(&[0xAA, 0xBB]).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Dc(true),
                Event::Cs(false),
                Event::Write(vec![0xAA, 0xBB]),
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn bulk_payload_fragments_at_chunk_size_under_one_cs_window() {
        let payload = vec![0x5A; SPI_CHUNK * 2 + 1808];
        let (mut iface, log) = spy_interface(vec![]);
        iface.data(&payload).unwrap();

        let log = log.borrow();
        assert_eq!(log.first(), Some(&Event::Dc(true)));
        assert_eq!(log.get(1), Some(&Event::Cs(false)));
        assert_eq!(log.last(), Some(&Event::Cs(true)));
        let sizes: Vec<usize> = log
            .iter()
            .filter_map(|ev| match ev {
                Event::Write(b) => Some(b.len()),
                _ => None,
            })
            .collect();
        assert_eq!(sizes, vec![SPI_CHUNK, SPI_CHUNK, 1808]);
        // no CS bounce between fragments
        assert_eq!(
            log.iter().filter(|ev| matches!(ev, Event::Cs(_))).count(),
            2
        );
    }

    #[test]
    fn short_writes_resume_at_returned_offset() {
        let payload: Vec<u8> = (0..=255u8).collect();
        let (mut iface, log) = spy_interface(vec![100, 3]);
        iface.data(&payload).unwrap();
        assert_eq!(written_bytes(&log), payload);
    }

    #[test]
    fn transport_error_aborts_transfer() {
        let payload = vec![0x11; SPI_CHUNK * 3];
        // first chunk goes through, second write fails
        let (mut iface, log) = spy_interface(vec![SPI_CHUNK, 0]);
        assert!(matches!(
            iface.data(&payload),
            Err(DisplayError::BusWriteError)
        ));
        assert_eq!(written_bytes(&log).len(), SPI_CHUNK);
        // CS released despite the failure
        assert_eq!(*log.borrow().last().unwrap(), Event::Cs(true));
    }

    #[test]
    fn cmd_with_data_pairs_both_phases() {
        let (mut iface, log) = spy_interface(vec![]);
        iface.cmd_with_data(0x3A, &[0x55]).unwrap();
        assert_eq!(written_bytes(&log), vec![0x3A, 0x55]);
        assert_eq!(
            log.borrow()
                .iter()
                .filter(|ev| matches!(ev, Event::Dc(_)))
                .cloned()
                .collect::<Vec<_>>(),
            vec![Event::Dc(false), Event::Dc(true)]
        );
    }
}
