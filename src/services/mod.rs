pub mod board_services;
pub mod ids;

pub use board_services::{BoardError, BoardService};
pub use ids::{Clock, IdGenerator, SystemClock, UuidGenerator};
