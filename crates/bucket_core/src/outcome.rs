use std::fmt;

/// Result of one probe. Transient: consumed by counters and the result channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success,
    Failure(FailureReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The target answered with a status other than the found status.
    Status(u16),
    /// The target could not be reached.
    Transport(TransportKind),
    /// The run was cancelled while the probe was in flight.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    InvalidUrl,
    Timeout,
    Connect,
    RedirectLimitExceeded,
    Network,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Status(code) => write!(f, "http status {code}"),
            FailureReason::Transport(kind) => write!(f, "{kind}"),
            FailureReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::InvalidUrl => write!(f, "invalid url"),
            TransportKind::Timeout => write!(f, "timeout"),
            TransportKind::Connect => write!(f, "connection failed"),
            TransportKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            TransportKind::Network => write!(f, "network error"),
        }
    }
}
