use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("terminal is {have_w}x{have_h}, the board needs at least {need_w}x{need_h}")]
    TerminalTooSmall { have_w: u16, have_h: u16, need_w: u16, need_h: u16 },
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),
    #[error("could not open log file: {0}")]
    LogFile(#[source] std::io::Error),
}
