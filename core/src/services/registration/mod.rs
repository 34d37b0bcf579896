//! SMS method registration flow
//!
//! `SETUP -> CODE_SENT -> REGISTERED`. Any failed step restarts at `SETUP`,
//! which clears the pending session slots.

mod flow;


pub use flow::RegistrationFlow;
