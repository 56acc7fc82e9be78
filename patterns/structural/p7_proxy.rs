//! Structural Pattern 7: Proxy
//! Example: a filtering proxy that refuses banned hosts before connecting
//!
//! Run with: cargo run --bin p7_proxy

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;

trait Internet {
    fn connect_to(&self, server: &str) -> String;
}

struct RealInternet;

impl Internet for RealInternet {
    fn connect_to(&self, server: &str) -> String {
        format!("Connecting to {}", server)
    }
}

struct ProxyInternet {
    inner: RealInternet,
    banned: HashSet<&'static str>,
    url: Regex,
}

impl ProxyInternet {
    fn new() -> Result<Self> {
        let url = Regex::new(r"^(?:(?:http|https|ftp)://)?([\w.-]*\.\w*)")
            .context("compiling url pattern")?;
        Ok(ProxyInternet {
            inner: RealInternet,
            banned: ["www.first.com", "www.second.com", "www.third.com"]
                .into_iter()
                .collect(),
            url,
        })
    }

    fn host<'a>(&self, server: &'a str) -> Option<&'a str> {
        self.url
            .captures(server)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Internet for ProxyInternet {
    fn connect_to(&self, server: &str) -> String {
        match self.host(server) {
            Some(host) if self.banned.contains(host) => format!("{} : Access Denied", server),
            _ => self.inner.connect_to(server),
        }
    }
}

fn main() -> Result<()> {
    let proxy: Box<dyn Internet> = Box::new(ProxyInternet::new()?);

    let servers = [
        "www.first.com",
        "http://www.second.com",
        "http://www.google.com",
    ];
    for server in servers {
        println!("{}", proxy.connect_to(server));
    }
    Ok(())
}
