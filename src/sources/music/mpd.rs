//! Minimal MPD client speaking the line-based text protocol
//!
//! Only what the status line needs: greeting, optional `password`, one
//! batched `status`/`currentsong` command list, and `close`.

use super::{PlayState, PlayerDaemon, PlayerSession, PlayerSnapshot, Track};
use crate::core::PlayerError;
use rootbar_types::{MpdTarget, MusicConfig, DEFAULT_MPD_HOST, DEFAULT_MPD_SOCKET};
use std::fmt;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::os::unix::net::UnixStream;
use std::time::Duration;

const GREETING_PREFIX: &str = "OK MPD ";
const STATUS_QUERY: &str = "command_list_ok_begin\nstatus\ncurrentsong\ncommand_list_end\n";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Endpoint {
    Unix(String),
    Tcp { host: String, port: u16 },
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Unix(path) => f.write_str(path),
            Endpoint::Tcp { host, port } => write!(f, "{}:{}", host, port),
        }
    }
}

/// Connection factory for an MPD server
///
/// Endpoints are tried in order until one accepts. Host names are resolved
/// on first use and the addresses reused until they all stop answering.
/// That first lookup blocks and is not bounded by the connect timeout.
#[derive(Debug, Clone)]
pub struct MpdDaemon {
    endpoints: Vec<Endpoint>,
    password: Option<String>,
    timeout: Duration,
    resolved: Option<Vec<SocketAddr>>,
}

impl MpdDaemon {
    pub fn new(config: &MusicConfig) -> Self {
        let MpdTarget { host, password } = config.resolved_target();
        let port = config.resolved_port();
        let endpoints = match host {
            Some(path) if path.starts_with('/') => vec![Endpoint::Unix(path)],
            Some(host) => vec![Endpoint::Tcp { host, port }],
            None => vec![
                Endpoint::Unix(DEFAULT_MPD_SOCKET.to_string()),
                Endpoint::Tcp {
                    host: DEFAULT_MPD_HOST.to_string(),
                    port,
                },
            ],
        };
        Self::with_endpoints(endpoints, password, config.timeout_ms)
    }

    fn with_endpoints(
        endpoints: Vec<Endpoint>,
        password: Option<String>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            endpoints,
            password,
            // Zero is rejected by set_read_timeout
            timeout: Duration::from_millis(timeout_ms.max(1)),
            resolved: None,
        }
    }

    /// Human-readable address for diagnostics
    pub fn address(&self) -> String {
        self.endpoints
            .iter()
            .map(Endpoint::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    fn open_stream(&mut self) -> io::Result<Stream> {
        let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no endpoint configured");
        for endpoint in &self.endpoints {
            let attempt = match endpoint {
                Endpoint::Unix(path) => UnixStream::connect(path).map(Stream::Unix),
                Endpoint::Tcp { host, port } => {
                    connect_tcp(host, *port, self.timeout, &mut self.resolved).map(Stream::Tcp)
                }
            };
            match attempt {
                Ok(stream) => return Ok(stream),
                Err(e) => last_err = e,
            }
        }
        Err(last_err)
    }
}

fn connect_tcp(
    host: &str,
    port: u16,
    timeout: Duration,
    cache: &mut Option<Vec<SocketAddr>>,
) -> io::Result<TcpStream> {
    let addrs = match cache {
        Some(addrs) => addrs.clone(),
        None => {
            let addrs: Vec<SocketAddr> = (host, port).to_socket_addrs()?.collect();
            *cache = Some(addrs.clone());
            addrs
        }
    };

    let mut last_err = io::Error::new(io::ErrorKind::NotFound, "host did not resolve");
    for addr in &addrs {
        match TcpStream::connect_timeout(addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = e,
        }
    }
    // Look the host up again next time
    *cache = None;
    Err(last_err)
}

impl PlayerDaemon for MpdDaemon {
    type Session = MpdSession;

    fn connect(&mut self) -> Result<MpdSession, PlayerError> {
        let stream = self.open_stream().map_err(|source| PlayerError::Connect {
            addr: self.address(),
            source,
        })?;
        stream.set_timeouts(self.timeout)?;
        Ok(MpdSession::new(stream, self.password.clone()))
    }
}

enum Stream {
    Tcp(TcpStream),
    Unix(UnixStream),
}

impl Stream {
    fn set_timeouts(&self, timeout: Duration) -> io::Result<()> {
        match self {
            Stream::Tcp(s) => {
                s.set_read_timeout(Some(timeout))?;
                s.set_write_timeout(Some(timeout))
            }
            Stream::Unix(s) => {
                s.set_read_timeout(Some(timeout))?;
                s.set_write_timeout(Some(timeout))
            }
        }
    }

    fn shutdown(&self) -> io::Result<()> {
        match self {
            Stream::Tcp(s) => s.shutdown(Shutdown::Both),
            Stream::Unix(s) => s.shutdown(Shutdown::Both),
        }
    }
}

impl Read for Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Stream::Tcp(s) => s.read(buf),
            Stream::Unix(s) => s.read(buf),
        }
    }
}

impl Write for Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Stream::Tcp(s) => s.write(buf),
            Stream::Unix(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Stream::Tcp(s) => s.flush(),
            Stream::Unix(s) => s.flush(),
        }
    }
}

/// One open connection to MPD
pub struct MpdSession {
    reader: BufReader<Stream>,
    password: Option<String>,
    line: String,
    closed: bool,
}

impl MpdSession {
    fn new(stream: Stream, password: Option<String>) -> Self {
        Self {
            reader: BufReader::new(stream),
            password,
            line: String::with_capacity(128),
            closed: false,
        }
    }

    fn send(&mut self, command: &str) -> Result<(), PlayerError> {
        let stream = self.reader.get_mut();
        stream.write_all(command.as_bytes())?;
        stream.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<&str, PlayerError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(PlayerError::Closed);
        }
        Ok(self.line.trim_end_matches(['\r', '\n']))
    }

    /// Read `key: value` pairs until `terminator`; `ACK` lines are errors
    fn read_section(&mut self, terminator: &str) -> Result<Vec<(String, String)>, PlayerError> {
        let mut pairs = Vec::new();
        loop {
            let line = self.read_line()?;
            if line == terminator {
                return Ok(pairs);
            }
            if let Some(ack) = line.strip_prefix("ACK ") {
                return Err(PlayerError::Ack(ack.to_string()));
            }
            match line.split_once(": ") {
                Some((key, value)) => pairs.push((key.to_string(), value.to_string())),
                None => return Err(PlayerError::Protocol(line.to_string())),
            }
        }
    }
}

impl PlayerSession for MpdSession {
    fn handshake(&mut self) -> Result<(), PlayerError> {
        let line = self.read_line()?;
        if !line.starts_with(GREETING_PREFIX) {
            return Err(PlayerError::Greeting(line.to_string()));
        }

        if let Some(password) = self.password.take() {
            self.send(&format!("password {}\n", quote_argument(&password)))?;
            self.read_section("OK")?;
        }
        Ok(())
    }

    fn fetch(&mut self) -> Result<PlayerSnapshot, PlayerError> {
        self.send(STATUS_QUERY)?;
        let status = self.read_section("list_OK")?;
        let song = self.read_section("list_OK")?;
        self.read_section("OK")?;
        Ok(parse_snapshot(&status, &song))
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        // Best effort: the daemon also drops idle clients on its own
        let _ = self.send("close\n");
        let _ = self.reader.get_ref().shutdown();
    }
}

/// Double-quote a command argument, escaping `"` and `\`
fn quote_argument(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn parse_state(value: &str) -> PlayState {
    match value {
        "play" => PlayState::Play,
        "pause" => PlayState::Pause,
        "stop" => PlayState::Stop,
        _ => PlayState::Unknown,
    }
}

fn whole_seconds(value: &str) -> Option<u32> {
    value.parse::<f64>().ok().filter(|s| *s >= 0.0).map(|s| s as u32)
}

/// Build a snapshot from `status` and `currentsong` responses
pub(super) fn parse_snapshot(
    status: &[(String, String)],
    song: &[(String, String)],
) -> PlayerSnapshot {
    let mut snapshot = PlayerSnapshot::default();
    let mut time_field = None;
    let mut elapsed_field = None;
    let mut duration_field = None;

    for (key, value) in status {
        match key.as_str() {
            "state" => snapshot.state = parse_state(value),
            // Legacy "elapsed:total" pair, whole seconds
            "time" => {
                time_field = value
                    .split_once(':')
                    .and_then(|(e, t)| Some((whole_seconds(e)?, whole_seconds(t)?)))
            }
            "elapsed" => elapsed_field = whole_seconds(value),
            "duration" => duration_field = whole_seconds(value),
            _ => {}
        }
    }

    let (elapsed, total) = time_field.unwrap_or((
        elapsed_field.unwrap_or(0),
        duration_field.unwrap_or(0),
    ));
    snapshot.elapsed = elapsed;
    snapshot.total = total;
    snapshot.track = parse_track(song);
    snapshot
}

fn parse_track(song: &[(String, String)]) -> Option<Track> {
    if song.is_empty() {
        return None;
    }

    let mut track = Track::default();
    let mut legacy_time = None;
    for (key, value) in song {
        match key.as_str() {
            "Artist" => track.artists.push(value.clone()),
            "Title" => track.title = Some(value.clone()),
            "duration" => track.duration = value.parse().ok(),
            "Time" => legacy_time = value.parse().ok(),
            _ => {}
        }
    }
    if track.duration.is_none() {
        track.duration = legacy_time;
    }
    Some(track)
}
