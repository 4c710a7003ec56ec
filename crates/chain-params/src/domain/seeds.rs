//! # Seed Materializer
//!
//! Fixed seed nodes ship as a compact binary table of 18-byte records: a
//! 16-byte IPv6 address (IPv4 as `::ffff:a.b.c.d`) followed by a big-endian
//! port. At startup each record becomes a network address with a
//! `last_seen` time between one and two weeks in the past, so the address
//! manager treats them as stale fallbacks rather than fresh peers.

use std::net::{IpAddr, Ipv6Addr, SocketAddr, SocketAddrV6};

use serde::Serialize;
use tracing::debug;

use super::error::SeedTableError;
use crate::ports::{RandomSource, TimeSource};

/// Bytes per compact seed record.
pub const SEED_RECORD_LEN: usize = 18;

pub const ONE_WEEK_SECS: u64 = 7 * 24 * 60 * 60;

/// Service bit advertising a full node.
pub const NODE_NETWORK: u64 = 1;

/// A DNS seed: display name and host to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }
}

/// One decoded compact seed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

/// Split a compact seed table into records.
pub fn decode_seed_table(bytes: &[u8]) -> Result<Vec<SeedSpec6>, SeedTableError> {
    if bytes.len() % SEED_RECORD_LEN != 0 {
        return Err(SeedTableError::TruncatedRecord {
            len: bytes.len(),
            record_len: SEED_RECORD_LEN,
        });
    }

    Ok(bytes
        .chunks_exact(SEED_RECORD_LEN)
        .map(|record| {
            let mut addr = [0u8; 16];
            addr.copy_from_slice(&record[..16]);
            SeedSpec6 {
                addr,
                port: u16::from_be_bytes([record[16], record[17]]),
            }
        })
        .collect())
}

/// A peer address with its advertised services and staleness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkAddressRecord {
    pub addr: SocketAddr,
    pub services: u64,
    /// Unix seconds.
    pub last_seen: u64,
}

impl NetworkAddressRecord {
    /// The address with IPv4-mapped forms unwrapped to plain IPv4.
    pub fn canonical_ip(&self) -> IpAddr {
        match self.addr.ip() {
            IpAddr::V6(v6) => v6
                .to_ipv4_mapped()
                .map(IpAddr::V4)
                .unwrap_or(IpAddr::V6(v6)),
            v4 => v4,
        }
    }
}

/// Expand compact seeds into address records, preserving input order.
///
/// Each record gets `last_seen = now - jitter - ONE_WEEK_SECS` with
/// `jitter` drawn uniformly from `[0, ONE_WEEK_SECS)`.
pub fn materialize_seeds(
    seeds: &[SeedSpec6],
    time: &dyn TimeSource,
    rng: &dyn RandomSource,
) -> Vec<NetworkAddressRecord> {
    let now = time.now();
    let records: Vec<NetworkAddressRecord> = seeds
        .iter()
        .map(|seed| {
            let jitter = rng.random_below(ONE_WEEK_SECS);
            NetworkAddressRecord {
                addr: SocketAddr::V6(SocketAddrV6::new(
                    Ipv6Addr::from(seed.addr),
                    seed.port,
                    0,
                    0,
                )),
                services: NODE_NETWORK,
                last_seen: now.saturating_sub(jitter).saturating_sub(ONE_WEEK_SECS),
            }
        })
        .collect();

    debug!(
        "[chainparams] materialized {} fixed seeds at t={}",
        records.len(),
        now
    );
    records
}
