//! Test client for the game server: pushes random player positions over one
//! TCP connection and prints the game state it gets back.

use std::{io::Write, time::Duration};

use log::{debug, warn};
use rand::Rng;

pub mod connector;
pub mod update_loop;

use connector::Connection;
use update_loop::UpdateLoop;

pub type SendSyncError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub const SERVER_HOST: &str = "127.0.0.1";
pub const SERVER_PORT: u16 = 9132;

// Pacing of the update loop
pub const UPDATE_COUNT: usize = 10;
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(1);

pub const RECV_BUFFER_SIZE: usize = 1024;

#[derive(Clone, Debug)]
pub struct Config {
    /// `HOST:PORT` of the game server.
    pub addr: String,
    pub updates: usize,
    /// Pause after every update, the last one included.
    pub interval: Duration,
    pub recv_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: format!("{}:{}", SERVER_HOST, SERVER_PORT),
            updates: UPDATE_COUNT,
            interval: UPDATE_INTERVAL,
            recv_buffer_size: RECV_BUFFER_SIZE,
        }
    }
}

/// How a run that managed to connect ended.
#[derive(Debug)]
pub struct Report {
    pub updates: usize,
    /// The error that cut the update loop short, if any.
    pub error: Option<SendSyncError>,
}

impl Report {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Connect, run the update loop, disconnect.
///
/// Failing to connect is returned as `Err`. Anything that goes wrong once
/// connected is printed to `out` as `Error: ...` and handed back in the
/// [`Report`] instead.
pub fn run<R, W>(config: &Config, rng: &mut R, out: &mut W) -> Result<Report, SendSyncError>
where
    R: Rng + ?Sized,
    W: Write,
{
    let mut conn = Connection::open(&config.addr)?;
    writeln!(out, "Connected to the game server at {}", conn.peer())?;

    let mut updates = UpdateLoop::new(config);
    let error = match updates.run(&mut conn, rng, out) {
        Ok(()) => None,
        Err(e) => {
            warn!("Update loop against {} stopped: {:?}", conn.peer(), e);
            writeln!(out, "Error: {}", e)?;
            Some(e)
        }
    };

    drop(conn);
    debug!("Closed connection to {}", config.addr);

    Ok(Report {
        updates: updates.completed(),
        error,
    })
}
