//! Compact fixed-seed tables.
//!
//! Each record is 16 bytes of IPv6 address (IPv4 mapped into `::ffff:0:0/96`)
//! followed by the port in network byte order.

/// Mainnet fixed seeds, all on port 30229.
#[rustfmt::skip]
pub static MAIN_SEED_TABLE: &[u8] = &[
    // 95.179.131.223
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x5f, 0xb3, 0x83, 0xdf, 0x76, 0x15,
    // 217.69.9.93
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xd9, 0x45, 0x09, 0x5d, 0x76, 0x15,
    // 104.238.177.207
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x68, 0xee, 0xb1, 0xcf, 0x76, 0x15,
    // 209.250.243.131
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xd1, 0xfa, 0xf3, 0x83, 0x76, 0x15,
    // 209.250.241.176
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xd1, 0xfa, 0xf1, 0xb0, 0x76, 0x15,
    // 45.77.239.108
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x2d, 0x4d, 0xef, 0x6c, 0x76, 0x15,
    // 107.191.44.102
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x6b, 0xbf, 0x2c, 0x66, 0x76, 0x15,
    // 45.32.235.211
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x2d, 0x20, 0xeb, 0xd3, 0x76, 0x15,
    // 108.61.188.67
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x6c, 0x3d, 0xbc, 0x43, 0x76, 0x15,
    // 108.61.95.114
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x6c, 0x3d, 0x5f, 0x72, 0x76, 0x15,
    // 45.77.193.238
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x2d, 0x4d, 0xc1, 0xee, 0x76, 0x15,
    // 45.32.133.67
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x2d, 0x20, 0x85, 0x43, 0x76, 0x15,
    // 108.160.134.29
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x6c, 0xa0, 0x86, 0x1d, 0x76, 0x15,
    // 207.148.86.107
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xcf, 0x94, 0x56, 0x6b, 0x76, 0x15,
    // 45.63.114.212
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x2d, 0x3f, 0x72, 0xd4, 0x76, 0x15,
    // 45.32.22.184
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x2d, 0x20, 0x16, 0xb8, 0x76, 0x15,
    // 63.211.111.86
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x3f, 0xd3, 0x6f, 0x56, 0x76, 0x15,
    // 144.202.70.111
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x90, 0xca, 0x46, 0x6f, 0x76, 0x15,
];

/// Testnet ships without fixed seeds.
pub static TESTNET_SEED_TABLE: &[u8] = &[];
