pub mod auth;
pub mod engine;
pub mod error;
pub mod my_events;
pub mod session;
pub mod user;

pub use auth::{authenticate, Identity};
pub use engine::{register, register_at};
pub use error::{AuthError, ErrorKind, RegistrationError};
pub use my_events::{my_events, MyEvents, RegisteredEvent};
pub use session::{SessionStore, SessionToken};
pub use user::{Registration, RegistrationMode, User, UserId};
