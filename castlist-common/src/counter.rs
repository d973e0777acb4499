/// Placed between the baseline title and the count.
pub const TITLE_SEPARATOR: &str = "--";

/// Emitted once per count change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountChanged {
    pub count: u32,
}

/// Click counter. Only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: u32,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Increment by one and report the new value.
    pub fn activate(&mut self) -> CountChanged {
        self.count = self.count.saturating_add(1);
        CountChanged { count: self.count }
    }
}

/// Button text for a given count.
pub fn counter_label(count: u32) -> String {
    if count == 0 {
        "Click".to_string()
    } else {
        format!("{count} times")
    }
}

/// Receives label writes (the document title in the browser).
pub trait LabelSink {
    fn set_label(&mut self, label: &str);
}

/// Mirrors a nonzero count into an external label as `{baseline}--{count}`.
///
/// The label is never written for a zero count, so it is not restored to the
/// baseline either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMirror {
    baseline: String,
}

impl TitleMirror {
    pub fn new(baseline: impl Into<String>) -> Self {
        Self {
            baseline: baseline.into(),
        }
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// The label for `count`, or `None` when the label should be left alone.
    pub fn label_for(&self, count: u32) -> Option<String> {
        (count > 0).then(|| format!("{}{TITLE_SEPARATOR}{count}", self.baseline))
    }

    /// Write the label for `change` into `sink`. Returns whether anything was written.
    pub fn apply(&self, sink: &mut dyn LabelSink, change: CountChanged) -> bool {
        match self.label_for(change.count) {
            Some(label) => {
                sink.set_label(&label);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<String>,
    }

    impl LabelSink for RecordingSink {
        fn set_label(&mut self, label: &str) {
            self.writes.push(label.to_string());
        }
    }

    #[test]
    fn test_zero_label_has_no_suffix() {
        assert_eq!(counter_label(0), "Click");
    }

    #[test]
    fn test_activate_increments_by_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.activate(), CountChanged { count: 1 });
        assert_eq!(counter.activate(), CountChanged { count: 2 });
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_label_and_title_follow_count() {
        let mut counter = Counter::new();
        let mirror = TitleMirror::new("Cast");
        let mut sink = RecordingSink::default();

        let change = counter.activate();
        assert_eq!(counter_label(change.count), "1 times");
        assert!(mirror.apply(&mut sink, change));
        assert_eq!(sink.writes.last().map(String::as_str), Some("Cast--1"));

        let change = counter.activate();
        assert_eq!(counter_label(change.count), "2 times");
        mirror.apply(&mut sink, change);
        assert_eq!(sink.writes, vec!["Cast--1", "Cast--2"]);
    }

    #[test]
    fn test_zero_count_leaves_label_alone() {
        let mirror = TitleMirror::new("Cast");
        let mut sink = RecordingSink::default();
        assert!(!mirror.apply(&mut sink, CountChanged { count: 0 }));
        assert!(sink.writes.is_empty());
    }

    #[test]
    fn test_activate_saturates() {
        let mut counter = Counter { count: u32::MAX };
        assert_eq!(counter.activate().count, u32::MAX);
    }
}
