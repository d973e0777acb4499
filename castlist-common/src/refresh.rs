/// Identifies one refresh attempt. Issued in strictly increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// What the caller should do with a finished refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// The ticket is the latest one issued, apply its result
    Apply,
    /// A newer refresh was started after this one, drop the result
    Stale,
}

/// Orders overlapping refreshes.
///
/// Refreshes are not serialized: a new one may start while an older one is
/// still in flight, and they can finish in any order. Only the result of the
/// most recently *issued* ticket is allowed to touch state, so the displayed
/// data always reflects the latest attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSequence {
    issued: u64,
    settled: Option<u64>,
}

impl RefreshSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt, superseding every ticket issued before it.
    pub fn begin(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// Record that `ticket` finished.
    pub fn settle(&mut self, ticket: RefreshTicket) -> Settle {
        if ticket.0 != self.issued || self.settled == Some(ticket.0) {
            return Settle::Stale;
        }
        self.settled = Some(ticket.0);
        Settle::Apply
    }

    /// True while the latest issued ticket has not settled yet.
    pub fn in_flight(&self) -> bool {
        self.issued > 0 && self.settled != Some(self.issued)
    }

    /// The most recently issued ticket, if any.
    pub fn latest(&self) -> Option<RefreshTicket> {
        (self.issued > 0).then_some(RefreshTicket(self.issued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut seq = RefreshSequence::new();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
        assert_eq!(seq.latest(), Some(b));
    }

    #[test]
    fn test_single_refresh_applies() {
        let mut seq = RefreshSequence::new();
        let t = seq.begin();
        assert!(seq.in_flight());
        assert_eq!(seq.settle(t), Settle::Apply);
        assert!(!seq.in_flight());
    }

    #[test]
    fn test_older_ticket_finishing_last_is_stale() {
        let mut seq = RefreshSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert_eq!(seq.settle(second), Settle::Apply);
        assert_eq!(seq.settle(first), Settle::Stale);
        assert!(!seq.in_flight());
    }

    #[test]
    fn test_older_ticket_finishing_first_keeps_latest_in_flight() {
        let mut seq = RefreshSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert_eq!(seq.settle(first), Settle::Stale);
        assert!(seq.in_flight());
        assert_eq!(seq.settle(second), Settle::Apply);
        assert!(!seq.in_flight());
    }

    #[test]
    fn test_settling_twice_is_stale() {
        let mut seq = RefreshSequence::new();
        let t = seq.begin();
        assert_eq!(seq.settle(t), Settle::Apply);
        assert_eq!(seq.settle(t), Settle::Stale);
    }

    #[test]
    fn test_nothing_in_flight_initially() {
        let seq = RefreshSequence::new();
        assert!(!seq.in_flight());
        assert_eq!(seq.latest(), None);
    }
}
