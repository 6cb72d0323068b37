//! FIFO stream conduits between pipeline stages
//
// Writes never block (unbounded capacity, throughput matching is the host's
// problem); reads block until the producer's next element exists. Stages
// negotiate exact element counts up front, so a read against a hung-up
// producer is a count-mismatch defect and aborts.

use crossbeam::channel::{unbounded, Receiver, Sender};

pub struct StreamWriter<T> {
    tx: Sender<T>,
}

pub struct StreamReader<T> {
    rx: Receiver<T>,
}

/// A strictly ordered, capacity-unbounded stream between two stages.
#[must_use]
pub fn stream<T>() -> (StreamWriter<T>, StreamReader<T>) {
    let (tx, rx) = unbounded();
    (StreamWriter { tx }, StreamReader { rx })
}

impl<T> StreamWriter<T> {
    /// Append one element at the tail. Never blocks.
    pub fn write(&self, val: T) {
        self.tx
            .send(val)
            .expect("stream consumer hung up before the negotiated element count");
    }
}

impl<T> StreamReader<T> {
    /// Remove and return the head element, blocking until one exists.
    pub fn read(&self) -> T {
        self.rx
            .recv()
            .expect("stream ended early: producer and consumer element counts disagree")
    }
}
