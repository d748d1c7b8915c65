//! Blocking client for the TCP adapter.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use crate::error::TransportError;
use crate::status::{Action, GameStatus};
use crate::table::GameId;

use super::wire::{self, Request, Response};

/// Calls a remote game service.
///
/// Every call opens its own connection, so a player can think as long as
/// they like between calls without tripping the server's idle timeout.
#[derive(Debug, Clone)]
pub struct Client {
    addrs: Vec<SocketAddr>,
}

impl Client {
    /// Resolves the server address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be resolved.
    pub fn new<A: ToSocketAddrs>(addr: A) -> Result<Self, TransportError> {
        let addrs = addr.to_socket_addrs()?.collect();
        Ok(Self { addrs })
    }

    /// Registers a player and returns the assigned game id.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Remote`] with `SERVER_FULL`, `NAME_REPEATED`
    /// or `EMPTY_NAME` when the server refuses, or a transport error.
    pub fn register(&self, name: &str) -> Result<GameId, TransportError> {
        let request = Request::Register {
            name: name.to_owned(),
        };
        match self.call(&request)? {
            Response::Registered { game_id } => Ok(game_id),
            _ => Err(TransportError::UnexpectedResponse),
        }
    }

    /// Waits for and returns the player's status.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Remote`] with `PLAYER_NOT_FOUND` for an unknown
    /// player or game, or a transport error.
    pub fn get_status(&self, name: &str, game_id: GameId) -> Result<GameStatus, TransportError> {
        let request = Request::GetStatus {
            name: name.to_owned(),
            game_id: i64::try_from(game_id).unwrap_or(-1),
        };
        Self::expect_status(self.call(&request)?)
    }

    /// Sends a move.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Remote`] when the server refuses, or a
    /// transport error.
    pub fn player_move(
        &self,
        name: &str,
        game_id: GameId,
        action: Action,
    ) -> Result<GameStatus, TransportError> {
        let request = Request::PlayerMove {
            name: name.to_owned(),
            game_id: i64::try_from(game_id).unwrap_or(-1),
            action,
        };
        Self::expect_status(self.call(&request)?)
    }

    /// Sends one request and reads one response.
    ///
    /// Error responses are turned into [`TransportError::Remote`].
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails, the peer closes before
    /// answering, the response is malformed, or the server reports an error.
    pub fn call(&self, request: &Request) -> Result<Response, TransportError> {
        let mut stream = TcpStream::connect(self.addrs.as_slice())?;
        stream.write_all(wire::encode_line(request)?.as_bytes())?;
        stream.flush()?;

        let mut line = String::new();
        if BufReader::new(&stream).read_line(&mut line)? == 0 {
            return Err(TransportError::Closed);
        }

        match wire::decode_response(&line)? {
            Response::Error { code, message } => Err(TransportError::Remote { code, message }),
            response => Ok(response),
        }
    }

    fn expect_status(response: Response) -> Result<GameStatus, TransportError> {
        match response {
            Response::Status {
                code,
                message,
                hand,
            } => Ok(GameStatus {
                code,
                message,
                hand,
            }),
            _ => Err(TransportError::UnexpectedResponse),
        }
    }
}
