use std::{
    io::{self, Read, Write},
    net::TcpStream,
};

use log::debug;

/// The single connection to the game server.
///
/// Owned by the run for its whole duration and closed when dropped, whether
/// the run finished or bailed out early.
pub struct Connection<S = TcpStream> {
    stream: S,
    peer: String,
}

impl Connection<TcpStream> {
    /// Connect to `addr`. There is no retry; a refused or unreachable server
    /// is returned straight to the caller.
    pub fn open(addr: &str) -> io::Result<Self> {
        let stream = TcpStream::connect(addr)?;
        debug!("Opened connection to {} from {:?}", addr, stream.local_addr());
        Ok(Self::from_stream(stream, addr))
    }
}

impl<S: Read + Write> Connection<S> {
    pub fn from_stream(stream: S, peer: impl Into<String>) -> Self {
        Connection {
            stream,
            peer: peer.into(),
        }
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    #[cfg(test)]
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Write every byte of `payload` and flush.
    pub fn send(&mut self, payload: &[u8]) -> io::Result<()> {
        self.stream.write_all(payload)?;
        self.stream.flush()?;
        debug!("Wrote {} bytes to {}", payload.len(), self.peer);
        Ok(())
    }

    /// A single blocking read into `buf`. Whatever arrived is returned, so a
    /// reply bigger than `buf` or split across packets comes back truncated.
    pub fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.stream.read(buf)?;
        debug!("Read {} bytes from {}", n, self.peer);
        Ok(n)
    }
}
