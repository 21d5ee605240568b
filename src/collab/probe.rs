//! Network-probe collaborator.
//!
//! The networking verbs are simulation commands: each performs at most one
//! request against a collaborator that returns synthesized or best-effort
//! text. The collaborator's wire payload is JSON of the shape
//! `{ "success": bool, "output": [string, ...] }` (extra fields ignored);
//! any shape deviation is treated as a failed probe, never a crash.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which networking verb a probe request serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Ping,
    Traceroute,
    Netstat,
    Nslookup,
    Curl,
    Ifconfig,
}

impl ProbeKind {
    /// The shell verb spelling.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Traceroute => "traceroute",
            Self::Netstat => "netstat",
            Self::Nslookup => "nslookup",
            Self::Curl => "curl",
            Self::Ifconfig => "ifconfig",
        }
    }

    /// Parse a verb into a probe kind.
    #[must_use]
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "ping" => Some(Self::Ping),
            "traceroute" => Some(Self::Traceroute),
            "netstat" => Some(Self::Netstat),
            "nslookup" => Some(Self::Nslookup),
            "curl" => Some(Self::Curl),
            "ifconfig" => Some(Self::Ifconfig),
            _ => None,
        }
    }

    /// Whether the verb requires a target argument.
    #[must_use]
    pub fn needs_target(&self) -> bool {
        matches!(self, Self::Ping | Self::Traceroute | Self::Nslookup | Self::Curl)
    }
}

/// A probe collaborator's response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Whether the probe reached its target.
    pub success: bool,
    /// Text lines to render inside the command framing.
    pub output: Vec<String>,
}

impl ProbeReport {
    /// Successful report with the given lines.
    #[must_use]
    pub fn ok<I>(output: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            success: true,
            output: output.into_iter().map(Into::into).collect(),
        }
    }

    /// Failed report with a single reason line.
    #[must_use]
    pub fn failure(reason: &str) -> Self {
        Self {
            success: false,
            output: vec![reason.to_string()],
        }
    }

    /// Parse a collaborator payload. Unknown extra fields are ignored;
    /// a missing or mistyped `success`/`output` is a probe failure.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| Error::ProbeFailed(e.to_string()))
    }
}

/// How a probe request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeDelivery {
    /// The report is available immediately (canned or cached data).
    Ready(ProbeReport),
    /// The collaborator call is in flight; the host resolves the pending
    /// placeholder later via `Interpreter::complete_probe`.
    Deferred,
}

/// A network-probe collaborator.
pub trait NetworkProbe {
    /// Issue one request for `kind` against `target`.
    fn request(&mut self, kind: ProbeKind, target: &str) -> ProbeDelivery;
}

/// Offline probe that synthesizes plausible transcripts deterministically
/// from the target string. Latency figures are fabricated; this is a demo
/// command, not a measurement tool.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedProbe;

impl SimulatedProbe {
    /// Create a simulated probe.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn report(kind: ProbeKind, target: &str) -> ProbeReport {
        let ip = well_known_ip(target);
        match kind {
            ProbeKind::Ping => Self::ping(target, ip),
            ProbeKind::Traceroute => Self::traceroute(target, ip),
            ProbeKind::Netstat => Self::netstat(),
            ProbeKind::Nslookup => Self::nslookup(target, ip),
            ProbeKind::Curl => Self::curl(target),
            ProbeKind::Ifconfig => Self::ifconfig(),
        }
    }

    fn ping(target: &str, ip: &str) -> ProbeReport {
        let mut lines = vec![format!("PING {target} ({ip}) 56(84) bytes of data.")];
        let mut total = 0;
        for seq in 1..=4u32 {
            let time = pseudo_latency(target, seq);
            total += time;
            lines.push(format!(
                "64 bytes from {target} ({ip}): icmp_seq={seq} time={time}ms ttl=64"
            ));
        }
        lines.push(String::new());
        lines.push(format!("--- {target} ping statistics ---"));
        lines.push(format!(
            "4 packets transmitted, 4 received, 0% packet loss, time {total}ms"
        ));
        ProbeReport::ok(lines)
    }

    fn traceroute(target: &str, ip: &str) -> ProbeReport {
        let hops = [
            ("gateway", "192.168.1.1"),
            ("isp-edge", "10.0.0.1"),
            ("isp-core", "203.0.113.1"),
            ("transit", "198.51.100.1"),
        ];
        let mut lines = vec![format!("traceroute to {target} ({ip}), 30 hops max")];
        for (i, (name, hop_ip)) in hops.iter().enumerate() {
            let base = (i as u32 + 1) * 8 + pseudo_latency(name, i as u32) % 10;
            lines.push(format!(
                "{:2}  {name} ({hop_ip})  {} ms  {} ms  {} ms",
                i + 1,
                base,
                base + 1,
                base + 2
            ));
        }
        let last = pseudo_latency(target, 9) + 32;
        lines.push(format!(
            "{:2}  {target} ({ip})  {last} ms  {} ms  {} ms",
            hops.len() + 1,
            last + 1,
            last + 2
        ));
        ProbeReport::ok(lines)
    }

    fn netstat() -> ProbeReport {
        ProbeReport::ok([
            "Proto Recv-Q Send-Q Local Address           Foreign Address         State",
            "tcp        0      0 127.0.0.1:4000          0.0.0.0:*               LISTEN",
            "tcp        0      0 127.0.0.1:22            0.0.0.0:*               LISTEN",
            "tcp        0      0 0.0.0.0:80              0.0.0.0:*               LISTEN",
            "tcp        0      0 0.0.0.0:443             0.0.0.0:*               LISTEN",
            "udp        0      0 127.0.0.1:53            0.0.0.0:*",
        ])
    }

    fn nslookup(target: &str, ip: &str) -> ProbeReport {
        ProbeReport::ok([
            "Server:         127.0.0.53".to_string(),
            "Address:        127.0.0.53#53".to_string(),
            String::new(),
            "Non-authoritative answer:".to_string(),
            format!("Name:    {target}"),
            format!("Address: {ip}"),
        ])
    }

    fn curl(target: &str) -> ProbeReport {
        ProbeReport::ok([
            "HTTP/1.1 200 OK".to_string(),
            "content-type: text/html; charset=utf-8".to_string(),
            "cache-control: no-cache".to_string(),
            String::new(),
            format!("<!-- {target}: {} bytes of body elided -->", 1024 + pseudo_latency(target, 1)),
        ])
    }

    fn ifconfig() -> ProbeReport {
        ProbeReport::ok([
            "eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500",
            "        inet 192.168.1.42  netmask 255.255.255.0  broadcast 192.168.1.255",
            "        ether 02:42:ac:11:00:02  txqueuelen 1000  (Ethernet)",
            "",
            "lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536",
            "        inet 127.0.0.1  netmask 255.0.0.0",
        ])
    }
}

impl NetworkProbe for SimulatedProbe {
    fn request(&mut self, kind: ProbeKind, target: &str) -> ProbeDelivery {
        ProbeDelivery::Ready(Self::report(kind, target))
    }
}

/// Canned IP associations for familiar hostnames, default otherwise.
fn well_known_ip(target: &str) -> &'static str {
    if target.contains("google") {
        "8.8.8.8"
    } else if target.contains("cloudflare") {
        "1.1.1.1"
    } else if target.contains("github") {
        "140.82.113.4"
    } else {
        "142.250.191.14"
    }
}

/// Deterministic fake latency in milliseconds derived from the target.
fn pseudo_latency(target: &str, seq: u32) -> u32 {
    let mut h: u32 = 2_166_136_261;
    for b in target.bytes() {
        h = h.wrapping_mul(16_777_619).wrapping_add(u32::from(b));
    }
    h = h.wrapping_add(seq.wrapping_mul(2654));
    10 + h % 40
}
