//! Console pages an identity may be granted.

use super::AccessDomainError;
use std::fmt;
use std::str::FromStr;

/// A console page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    /// Repair dashboard.
    Dashboard,
    /// New repair request.
    Indent,
    /// Dispatch to vendor.
    SentMachine,
    /// Verification on return.
    CheckMachine,
    /// Storage.
    StoreIn,
    /// Vendor payment.
    MakePayment,
    /// New service ticket.
    ServiceIndent,
    /// External parts.
    ExternalParts,
    /// Payment approval.
    PaymentApproval,
    /// Tally entry.
    TallyEntry,
}

impl Page {
    /// Every page in menu order.
    pub const ALL: [Self; 10] = [
        Self::Dashboard,
        Self::Indent,
        Self::SentMachine,
        Self::CheckMachine,
        Self::StoreIn,
        Self::MakePayment,
        Self::ServiceIndent,
        Self::ExternalParts,
        Self::PaymentApproval,
        Self::TallyEntry,
    ];

    /// Returns the page slug used in access lists.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Indent => "indent",
            Self::SentMachine => "sent-machine",
            Self::CheckMachine => "check-machine",
            Self::StoreIn => "store-in",
            Self::MakePayment => "make-payment",
            Self::ServiceIndent => "service-indent",
            Self::ExternalParts => "external-parts",
            Self::PaymentApproval => "payment-approval",
            Self::TallyEntry => "tally-entry",
        }
    }
}

impl FromStr for Page {
    type Err = AccessDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().trim_start_matches('/').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == normalized)
            .ok_or_else(|| AccessDomainError::UnknownPage(value.trim().to_owned()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
