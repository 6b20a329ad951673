use std::{
    io::{Read, Write},
    thread,
};

use log::debug;
use rand::Rng;
use shared::Position;

use crate::{connector::Connection, Config, SendSyncError};

/// Sends a fresh random position, waits for the game state, prints it, sleeps.
/// Repeats `Config::updates` times.
pub struct UpdateLoop<'a> {
    config: &'a Config,
    completed: usize,
}

impl<'a> UpdateLoop<'a> {
    pub fn new(config: &'a Config) -> Self {
        UpdateLoop {
            config,
            completed: 0,
        }
    }

    /// Iterations that went all the way through, sleep included.
    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn run<S, R, W>(
        &mut self,
        conn: &mut Connection<S>,
        rng: &mut R,
        out: &mut W,
    ) -> Result<(), SendSyncError>
    where
        S: Read + Write,
        R: Rng + ?Sized,
        W: Write,
    {
        let mut buffer = vec![0u8; self.config.recv_buffer_size];
        while self.completed < self.config.updates {
            let pos = Position::random(rng);
            let payload = pos.to_json()?;

            writeln!(out, "Sending player position: {}", payload)?;
            conn.send(payload.as_bytes())?;
            writeln!(out, "Sent player position: {}", payload)?;

            let n = conn.recv(&mut buffer)?;
            let state = String::from_utf8(buffer[..n].to_vec())?;
            writeln!(out, "Received game state: {}", state)?;

            thread::sleep(self.config.interval);
            self.completed += 1;
            debug!("Update {}/{} done", self.completed, self.config.updates);
        }
        Ok(())
    }
}
