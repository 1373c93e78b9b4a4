//! Startup sequence of the gabinete service.
//!
//! Each step is an [`init_chain::traits::InitHandler`]; the chain runs them in
//! order and stops at the first failure.

pub mod init_chain;
