//! Alert delivery over ntfy.
//!
//! [`NtfySender`] posts the alert body to `{url}/{topic}` with the title in
//! a `Title` header. When no topic is configured the caller should use
//! [`LogSender`], which only logs the alert.

pub mod error;
mod sender;

pub use error::NotifyError;
pub use sender::{LogSender, NtfySender};
