// Game engine modules

pub mod scorer;
pub mod session;
pub mod validator;

pub use scorer::Scorer;
pub use session::{GameError, GameSession};
pub use validator::{Outcome, Rejection, WordValidator};
