//! Resolved identities and console pages.

mod error;
mod identity;
mod page;

pub use error::AccessDomainError;
pub use identity::Identity;
pub use page::Page;
