//! Shared test doubles for the scanner integration tests.

#![allow(dead_code, unused_imports)]

use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use scanline::Source;

/// Writer whose contents stay inspectable after it is moved into a
/// scanner: clones share one buffer.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("writer captured valid utf8")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reader fed through a channel. `read` blocks until a chunk arrives,
/// reports end-of-stream when the feeder is dropped, and pings `probe`
/// each time it is about to block, so tests can tell when a blocking
/// read is truly parked before cancelling it.
pub struct ChannelReader {
    chunks: Receiver<Vec<u8>>,
    probe: Sender<()>,
    pending: Vec<u8>,
}

pub fn channel_reader() -> (Sender<Vec<u8>>, Receiver<()>, ChannelReader) {
    let (feed, chunks) = mpsc::channel();
    let (probe, probed) = mpsc::channel();
    (
        feed,
        probed,
        ChannelReader {
            chunks,
            probe,
            pending: Vec::new(),
        },
    )
}

impl Read for ChannelReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pending.is_empty() {
            let _ = self.probe.send(());
            match self.chunks.recv() {
                Ok(chunk) => self.pending = chunk,
                Err(_) => return Ok(0),
            }
        }
        let n = self.pending.len().min(buf.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        Ok(n)
    }
}

impl Source for ChannelReader {}
