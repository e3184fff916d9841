//! # mailscope-backend
//!
//! The asynchronous backend boundary for the Mailscope mail client.
//!
//! There is no real mail transport behind this crate. It defines the
//! [`Gateway`] contract the presentation layer calls for sends, suggested
//! actions, and AI requests, plus [`StubGateway`], which resolves every call
//! with a canned response after a fixed simulated delay. A production
//! replacement implements the same trait against a real service and maps
//! failures into [`GatewayError`].
//!
//! Gateway calls are the only suspension points in the system; everything in
//! `mailscope-core` is synchronous. A call suspends only its originating
//! handler and cannot be cancelled once issued.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod gateway;
mod stub;

pub use gateway::{
    ActionReceipt, ActionStatus, AiResponse, Gateway, GatewayError, Result, SendReceipt,
};
pub use stub::{ACTION_DELAY, AI_DELAY, SEND_DELAY, StubGateway};
