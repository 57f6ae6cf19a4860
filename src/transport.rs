//! Single-shot UDP exchange with one device.

use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use log::{debug, trace};

use crate::config::ClientConfig;
use crate::errors::Error;
use crate::runtime::{self, AsyncUdpSocket, Instant, Mutex, TimedOut, UdpSocket};

type Result<T> = std::result::Result<T, Error>;

/// Sends one request datagram and returns the reply datagram that answers it.
///
/// `accept` tells replies to this request apart from stray datagrams, such as
/// a late answer to an earlier request that already timed out. Datagrams it
/// rejects are dropped and reading continues. Implementations must not
/// interleave exchanges.
pub trait Transport: Send + Sync {
    fn exchange(
        &self,
        payload: &[u8],
        accept: &(dyn Fn(&[u8]) -> bool + Sync),
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// A UDP socket connected to one device.
///
/// The socket is closed when the transport is dropped.
pub struct UdpTransport {
    socket: Mutex<UdpSocket>,
    peer: SocketAddr,
    read_timeout: Duration,
    buffer_size: usize,
}

impl UdpTransport {
    /// Resolve the configured address and connect a local socket to it.
    pub async fn open(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let addr = config.address();

        let peer = runtime::lookup_host(&addr)
            .await
            .map_err(|e| Error::connection(&addr, e))?
            .into_iter()
            .next()
            .ok_or_else(|| {
                Error::connection(
                    &addr,
                    io::Error::new(io::ErrorKind::NotFound, "no address resolved"),
                )
            })?;

        let local = match peer {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
        };

        let socket = UdpSocket::bind(local)
            .await
            .map_err(|e| Error::connection(&addr, e))?;
        socket
            .connect(peer)
            .await
            .map_err(|e| Error::connection(&addr, e))?;

        trace!(
            "socket {:?} connected to {}",
            socket.local_addr().ok(),
            peer
        );

        Ok(UdpTransport {
            socket: Mutex::new(socket),
            peer,
            read_timeout: config.read_timeout,
            buffer_size: config.buffer_size,
        })
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    // Upper bound on stale datagrams dropped before a send.
    const MAX_DRAIN: usize = 16;

    /// Drop datagrams already queued on the socket without waiting.
    async fn drain(&self, socket: &UdpSocket, buffer: &mut [u8]) {
        for _ in 0..Self::MAX_DRAIN {
            match runtime::timeout(Duration::ZERO, socket.recv(buffer)).await {
                Ok(Ok(bytes)) => debug!("dropped {} stale bytes from {}", bytes, self.peer),
                _ => break,
            }
        }
    }
}

impl Transport for UdpTransport {
    async fn exchange(
        &self,
        payload: &[u8],
        accept: &(dyn Fn(&[u8]) -> bool + Sync),
    ) -> Result<Vec<u8>> {
        // Held until the reply is read so concurrent callers cannot swap replies.
        let socket = self.socket.lock().await;
        let mut buffer = vec![0u8; self.buffer_size];

        self.drain(&socket, &mut buffer).await;

        socket.send(payload).await.map_err(Error::Send)?;
        trace!("sent {} bytes to {}", payload.len(), self.peer);

        let started = Instant::now();
        loop {
            let remaining = self.read_timeout.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                return Err(Error::Receive(TimedOut.into()));
            }

            let bytes = runtime::timeout(remaining, socket.recv(&mut buffer))
                .await
                .map_err(|e| Error::Receive(e.into()))?
                .map_err(Error::Receive)?;
            trace!("received {} bytes from {}", bytes, self.peer);

            if accept(&buffer[..bytes]) {
                buffer.truncate(bytes);
                return Ok(buffer);
            }
            debug!("discarding unrelated datagram from {}", self.peer);
        }
    }
}
