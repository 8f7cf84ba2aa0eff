use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Complaint desk: register, file complaints, view and resolve them.
#[derive(Debug, Clone, Parser)]
#[command(name = "complaint_desk")]
#[command(version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Port for the HTTP server
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Capacity of each table actor's mailbox
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
    pub mailbox: u32,
}

impl Cli {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn mailbox_size(&self) -> usize {
        self.mailbox as usize
    }
}
