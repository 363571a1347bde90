//! Session module running one game behind an async actor.
//!
//! This module implements:
//! - GameSession: game state, question provider, strike flash and event
//!   log owned together
//! - SessionActor: async actor serializing every operation on a session
//! - SessionHandle: cloneable front end talking to the actor over tokio
//!   channels
//!
//! ## Architecture
//!
//! Each session runs in its own Tokio task with an mpsc inbox. Every
//! message carries a oneshot reply channel. Because the actor handles one
//! message at a time, a second "next round" can't start while a question is
//! still being fetched.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use survey_says::{provider::QuestionService, session::SessionActor};
//!
//! # async fn example() -> Result<(), survey_says::GameError> {
//! let (actor, handle) = SessionActor::new(Arc::new(QuestionService::offline()));
//! tokio::spawn(actor.run());
//!
//! let state = handle.start_game(2, vec!["Alfa".into(), "Beta".into()]).await?;
//! assert_eq!(state.round_number(), 1);
//! handle.close().await;
//! # Ok(())
//! # }
//! ```

pub mod actor;
pub mod game;
pub mod messages;

pub use actor::{SessionActor, SessionHandle};
pub use game::GameSession;
pub use messages::SessionMessage;
