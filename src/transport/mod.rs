//! Transport layer for the sensor byte stream
//!
//! The daemon side owns the socket lifecycle; this side only dials and
//! reads. Dialing retries on a fixed interval until the daemon shows up,
//! which for a long-lived bench client is the normal case, not a fault.
//! After the connection is established there is no reconnect: a read
//! failure surfaces to the caller, which logs it and keeps rendering the
//! last known orientation.

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

mod mock;
mod tcp;

pub use mock::MockTransport;
pub use tcp::TcpTransport;

/// Transport trait for receiving the raw sensor stream
pub trait Transport: Send {
    /// Perform one bounded read into `buf`, returning the byte count.
    ///
    /// `Ok(0)` means no data arrived within the read timeout. A socket
    /// error or an orderly close by the peer is `Error::Transport`. The
    /// bytes carry no message boundaries; the caller reassembles frames.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// Dial retry policy
///
/// Kept as an explicit value so tests can inject a no-delay policy
/// instead of sleeping in real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay between attempts
    pub interval: Duration,
    /// Give up after this many attempts; `None` retries forever
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Retry forever with a fixed interval
    pub fn unbounded(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }

    /// Retry at most `max_attempts` times with a fixed interval
    pub fn bounded(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: Some(max_attempts),
        }
    }
}

/// Granularity of the retry sleep, so shutdown stays responsive
const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Dial until `dial` succeeds, the policy is exhausted, or `running` clears
///
/// Each failure is logged and followed by the policy interval. Generic
/// over the dial function so the retry behavior is testable without real
/// sockets.
pub fn connect_with_retry<T, F>(policy: &RetryPolicy, running: &AtomicBool, mut dial: F) -> Result<T>
where
    F: FnMut() -> std::io::Result<T>,
{
    let mut attempt: u32 = 0;
    loop {
        if !running.load(Ordering::Relaxed) {
            return Err(Error::Cancelled);
        }

        attempt += 1;
        match dial() {
            Ok(conn) => {
                if attempt > 1 {
                    log::info!("Connected on attempt {}", attempt);
                }
                return Ok(conn);
            }
            Err(e) => {
                if let Some(max) = policy.max_attempts {
                    if attempt >= max {
                        log::error!("Giving up after {} connection attempts: {}", attempt, e);
                        return Err(Error::Connect(e));
                    }
                }
                log::warn!(
                    "Connection failed, retrying in {:.1}s: {}",
                    policy.interval.as_secs_f64(),
                    e
                );
                sleep_interruptible(policy.interval, running)?;
            }
        }
    }
}

/// Sleep for `interval` in slices, bailing out when `running` clears
fn sleep_interruptible(interval: Duration, running: &AtomicBool) -> Result<()> {
    let mut remaining = interval;
    while !remaining.is_zero() {
        if !running.load(Ordering::Relaxed) {
            return Err(Error::Cancelled);
        }
        let slice = remaining.min(SLEEP_SLICE);
        std::thread::sleep(slice);
        remaining -= slice;
    }
    Ok(())
}
