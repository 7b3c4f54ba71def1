//! Service configuration: command-line flags with environment fallbacks.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use conway::prelude::{BoardConfig, DEFAULT_DIM};
use thiserror::Error;
use tracing::Level;

/// Listen address used when none is given.
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

/// Request body limit used when none is given (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1 << 20;

/// Errors detected during [`ServerConfig::validate()`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The board dimension is out of range.
    #[error(transparent)]
    Board(#[from] conway::engine::ConfigError),
    /// The body limit cannot hold even an all-dead board.
    #[error("max body size of {limit} bytes cannot hold a {dim}x{dim} board ({needed} bytes)")]
    BodyLimitTooSmall {
        /// Configured limit.
        limit: usize,
        /// Configured board dimension.
        dim: u32,
        /// Compact JSON size of an all-dead board of that dimension.
        needed: usize,
    },
}

/// Advance a toroidal Game of Life board one generation per request.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "conway-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "CONWAY_BIND", default_value_t = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Side length of the boards this instance accepts.
    #[arg(long, env = "CONWAY_BOARD_DIM", default_value_t = DEFAULT_DIM)]
    pub board_dim: u32,

    /// Largest request body accepted, in bytes.
    #[arg(long, env = "CONWAY_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Maximum log level (trace, debug, info, warn, error).
    #[arg(long, env = "CONWAY_LOG", default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            board_dim: DEFAULT_DIM,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_level: Level::INFO,
        }
    }
}

impl ServerConfig {
    /// The board shape requests are admitted against.
    pub fn board(&self) -> BoardConfig {
        BoardConfig {
            dim: self.board_dim,
        }
    }

    /// Check the board dimension, then that the body limit fits one board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board().validate()?;
        let needed = min_body_bytes(self.board_dim);
        if self.max_body_bytes < needed {
            return Err(ConfigError::BodyLimitTooSmall {
                limit: self.max_body_bytes,
                dim: self.board_dim,
                needed,
            });
        }
        Ok(())
    }
}

/// Compact JSON size of an all-dead `dim`×`dim` board: `6·N² + 2·N + 1`.
///
/// Each row is `[` + N × `false` + N−1 commas + `]`; rows are joined by
/// N−1 commas inside the outer brackets.
pub fn min_body_bytes(dim: u32) -> usize {
    let n = dim as usize;
    n.saturating_mul(n)
        .saturating_mul(6)
        .saturating_add(n.saturating_mul(2))
        .saturating_add(1)
}
