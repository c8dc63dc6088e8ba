pub mod game;

pub use game::{RoundState, SessionSnapshot, UsedWord};
