//! Thread-per-connection TCP adapter.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::TransportError;
use crate::service::GameService;

use super::wire::{self, ErrorCode, Request, Response};

/// Default read and write timeout for a connection.
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(60);

/// Default time without a new connection after which [`Server::run`] returns.
pub const DEFAULT_ACCEPT_TIMEOUT: Duration = Duration::from_secs(3600);

/// Default number of requests served on one connection before it is closed.
pub const DEFAULT_MAX_REQUESTS: usize = 100;

/// Upper bound on how long an idle listener sleeps between accept polls.
const ACCEPT_POLL: Duration = Duration::from_millis(50);

/// Runs a [`GameService`] over a TCP listener.
///
/// Every accepted connection gets its own thread, which serves requests one
/// line at a time until the peer disconnects or goes idle.
pub struct Server {
    listener: TcpListener,
    service: Arc<GameService>,
    io_timeout: Option<Duration>,
    accept_timeout: Option<Duration>,
    max_requests: Option<usize>,
}

impl Server {
    /// Binds a listener for the given service.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub fn bind<A: ToSocketAddrs>(
        addr: A,
        service: Arc<GameService>,
    ) -> Result<Self, TransportError> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self {
            listener,
            service,
            io_timeout: Some(DEFAULT_IO_TIMEOUT),
            accept_timeout: Some(DEFAULT_ACCEPT_TIMEOUT),
            max_requests: Some(DEFAULT_MAX_REQUESTS),
        })
    }

    /// Sets the per-connection read and write timeout. `None` disables it.
    ///
    /// The read timeout only bounds the wait for the next request; a blocked
    /// status call is bounded by the table's wait timeout instead.
    #[must_use]
    pub const fn with_io_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.io_timeout = timeout;
        self
    }

    /// Sets how long [`Server::run`] keeps going without a new connection.
    /// `None` accepts forever.
    #[must_use]
    pub const fn with_accept_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.accept_timeout = timeout;
        self
    }

    /// Sets how many requests one connection may send before it is closed.
    /// `None` removes the limit.
    #[must_use]
    pub const fn with_max_requests(mut self, limit: Option<usize>) -> Self {
        self.max_requests = limit;
        self
    }

    /// Returns the address the listener is bound to.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket address cannot be read.
    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until the accept timeout passes without one.
    ///
    /// Returns `Ok(())` once the listener has been idle for the accept
    /// timeout; without one it never returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be configured. Failed accepts
    /// are logged and skipped.
    pub fn run(self) -> Result<(), TransportError> {
        log::info!("listening on {}", self.local_addr()?);
        self.listener.set_nonblocking(self.accept_timeout.is_some())?;

        let mut last_accept = Instant::now();
        loop {
            match self.listener.accept() {
                Ok((stream, peer)) => {
                    last_accept = Instant::now();
                    self.spawn_connection(stream, peer);
                }
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => {
                    let Some(timeout) = self.accept_timeout else {
                        continue;
                    };
                    let idle = last_accept.elapsed();
                    if idle >= timeout {
                        log::info!("no connections for {}s, shutting down", idle.as_secs());
                        return Ok(());
                    }
                    thread::sleep((timeout - idle).min(ACCEPT_POLL));
                }
                Err(err) => log::warn!("accept failed: {err}"),
            }
        }
    }

    fn spawn_connection(&self, stream: TcpStream, peer: SocketAddr) {
        let service = Arc::clone(&self.service);
        let io_timeout = self.io_timeout;
        let max_requests = self.max_requests;

        let spawned = thread::Builder::new()
            .name(format!("conn-{peer}"))
            .spawn(move || {
                log::debug!("serving {peer}");
                match serve_connection(&service, stream, io_timeout, max_requests) {
                    Ok(()) => log::debug!("{peer} disconnected"),
                    Err(err) => log::debug!("{peer} dropped: {err}"),
                }
            });
        if let Err(err) = spawned {
            log::warn!("could not spawn connection thread: {err}");
        }
    }
}

/// Serves requests from one connection until it closes or reaches
/// `max_requests`.
fn serve_connection(
    service: &GameService,
    stream: TcpStream,
    io_timeout: Option<Duration>,
    max_requests: Option<usize>,
) -> Result<(), TransportError> {
    // Accepted sockets may inherit the listener's non-blocking mode.
    stream.set_nonblocking(false)?;
    stream.set_read_timeout(io_timeout)?;
    stream.set_write_timeout(io_timeout)?;

    let reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;

    let mut served = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match wire::decode_request(&line) {
            Ok(request) => dispatch(service, request),
            Err(err) => {
                log::warn!("malformed request: {err}");
                Response::error(ErrorCode::BadRequest, err.to_string())
            }
        };

        writer.write_all(wire::encode_line(&response)?.as_bytes())?;
        writer.flush()?;

        served += 1;
        if max_requests.is_some_and(|limit| served >= limit) {
            log::debug!("request limit of {served} reached, closing");
            break;
        }
    }

    Ok(())
}

/// Invokes the service operation named by a request.
pub fn dispatch(service: &GameService, request: Request) -> Response {
    match request {
        Request::Register { name } => match service.register(&name) {
            Ok(game_id) => Response::Registered { game_id },
            Err(err) => err.into(),
        },
        Request::GetStatus { name, game_id } => {
            let Ok(game_id) = usize::try_from(game_id) else {
                return Response::error(ErrorCode::PlayerNotFound, "invalid game id");
            };
            service
                .get_status(&name, game_id)
                .map_or_else(Response::from, Response::from)
        }
        Request::PlayerMove {
            name,
            game_id,
            action,
        } => {
            let Ok(game_id) = usize::try_from(game_id) else {
                return Response::error(ErrorCode::PlayerNotFound, "invalid game id");
            };
            service
                .player_move(&name, game_id, action)
                .map_or_else(Response::from, Response::from)
        }
    }
}
