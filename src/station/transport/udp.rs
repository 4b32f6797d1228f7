use super::Datagram;
use bytes::BytesMut;
use chrono::prelude::*;
use std::io;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

// Tempest hubs broadcast well under 1 KiB per message
const BUF_SIZE: usize = 2048;
const ANY_ADDR: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 50222;

pub struct Transport {
    socket: UdpSocket,
    buffer: BytesMut,
}

impl Transport {
    pub async fn new(port: u16) -> Result<Self, io::Error> {
        let mut endpoint = String::from(ANY_ADDR);
        endpoint.push(':');
        endpoint.push_str(&port.to_string());
        Ok(Self {
            socket: UdpSocket::bind(endpoint).await?,
            buffer: BytesMut::with_capacity(BUF_SIZE),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, io::Error> {
        self.socket.local_addr()
    }

    pub async fn reading(&mut self) -> Result<Datagram, io::Error> {
        self.buffer.clear();
        self.buffer.reserve(BUF_SIZE);
        let room = self.buffer.capacity();
        let (len, src) = self.socket.recv_buf_from(&mut self.buffer).await?;
        let tstamp = Utc::now();
        Ok(Datagram {
            tstamp,
            src,
            payload: self.buffer.split().freeze(),
            truncated: len >= room,
        })
    }
}
