pub mod udp;

use super::super::Timestamp;
use bytes::Bytes;
use std::net::SocketAddr;

// A raw datagram as received, stamped on arrival
#[derive(Debug, Clone)]
pub struct Datagram {
    pub tstamp: Timestamp,
    pub src: SocketAddr,
    pub payload: Bytes,
    pub truncated: bool, // filled the receive buffer, the rest was dropped
}
