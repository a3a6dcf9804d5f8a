//! `el-balking` — the queue's impatience model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`policy`]  | `BalkingPolicy` trait, `policy_for(strategy)`                   |
//! | [`noop`]    | `NoBalking` — nobody ever leaves the queue                      |
//! | [`default`] | `DefaultBalking` — per-destination chance to take the stairs    |
//! | [`table`]   | `BalkingTable` — probability of balking per destination floor   |
//! | [`error`]   | `BalkingError`, `BalkingResult<T>`                              |
//!
//! # When balking happens
//!
//! The driver consults the policy once per duty cycle, right before loading,
//! and only when somebody is already waiting.  Balkers are marked
//! `TookStairs` at the current time and removed from the queue; everyone
//! else keeps their place.

pub mod default;
pub mod error;
pub mod noop;
pub mod policy;
pub mod table;


pub use default::DefaultBalking;
pub use error::{BalkingError, BalkingResult};
pub use noop::NoBalking;
pub use policy::{BalkingPolicy, policy_for};
pub use table::BalkingTable;
