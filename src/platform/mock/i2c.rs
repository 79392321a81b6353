//! Mock I2C transport for testing

use crate::platform::{traits::BusTransport, BusStatus};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::VecDeque;
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Read transaction
    Read { addr: u8, len: usize },
}

/// Mock I2C transport
///
/// Records all transactions for test verification. Statuses come from a
/// per-direction script first and fall back to a sticky default once the script
/// is exhausted. Successful reads return pre-programmed bytes if any are queued,
/// random bytes otherwise.
#[derive(Debug)]
pub struct MockI2c {
    transactions: Vec<I2cTransaction>,
    read_data: VecDeque<u8>,
    read_script: VecDeque<BusStatus>,
    write_script: VecDeque<BusStatus>,
    read_status: BusStatus,
    write_status: BusStatus,
    rng: StdRng,
}

impl MockI2c {
    /// Create a mock that answers every transaction with OK
    pub fn new() -> Self {
        Self::with_seed(0x1D_2024)
    }

    /// Create a mock with a fixed seed for the random payload generator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            transactions: Vec::new(),
            read_data: VecDeque::new(),
            read_script: VecDeque::new(),
            write_script: VecDeque::new(),
            read_status: Ok(()),
            write_status: Ok(()),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.clone()
    }

    /// Number of write transactions issued so far
    pub fn write_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| matches!(t, I2cTransaction::Write { .. }))
            .count()
    }

    /// Number of read transactions issued so far
    pub fn read_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| matches!(t, I2cTransaction::Read { .. }))
            .count()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Queue bytes to return from subsequent successful reads
    pub fn set_read_data(&mut self, data: &[u8]) {
        self.read_data = data.iter().copied().collect();
    }

    /// Status returned by reads once the read script is exhausted
    pub fn set_read_status(&mut self, status: BusStatus) {
        self.read_status = status;
    }

    /// Status returned by writes once the write script is exhausted
    pub fn set_write_status(&mut self, status: BusStatus) {
        self.write_status = status;
    }

    /// Statuses returned by the next reads, in order
    pub fn script_reads(&mut self, statuses: &[BusStatus]) {
        self.read_script.extend(statuses.iter().copied());
    }

    /// Statuses returned by the next writes, in order
    pub fn script_writes(&mut self, statuses: &[BusStatus]) {
        self.write_script.extend(statuses.iter().copied());
    }
}

impl Default for MockI2c {
    fn default() -> Self {
        Self::new()
    }
}

impl BusTransport for MockI2c {
    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> BusStatus {
        self.transactions.push(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        });

        let status = self.read_script.pop_front().unwrap_or(self.read_status);
        if status.is_ok() {
            for byte in buffer.iter_mut() {
                *byte = match self.read_data.pop_front() {
                    Some(queued) => queued,
                    None => (self.rng.next_u32() & 0xFF) as u8,
                };
            }
        }
        status
    }

    fn write(&mut self, addr: u8, data: &[u8]) -> BusStatus {
        self.transactions.push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });
        self.write_script.pop_front().unwrap_or(self.write_status)
    }
}
