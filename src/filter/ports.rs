//! Seams between the engine and whatever hosts it.
//!
//! The engine never reaches into its environment: inputs come in through
//! [`ValueSource`] bindings and results leave through a [`VisibilitySink`].
//! The in-memory implementations here back the CLI and the tests; a UI
//! host would supply its own.

/// Live, string-valued input binding.
///
/// Reading never fails. A source with nothing to report returns an empty
/// string, which downstream means "no constraint".
pub trait ValueSource {
    /// Current value of the bound input.
    fn value(&self) -> String;
}

/// Receiver for the results of a filter pass.
pub trait VisibilitySink {
    /// Record whether the card at `index` is visible.
    fn set_visible(&mut self, index: usize, visible: bool);

    /// Record the total number of visible cards.
    fn set_count(&mut self, count: usize);
}

/// Source that always reports the same value.
///
/// Covers inputs that are fixed for the lifetime of the engine, such as
/// CLI flags.
#[derive(Debug, Clone)]
pub struct FixedValue(String);

impl FixedValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl ValueSource for FixedValue {
    fn value(&self) -> String {
        self.0.clone()
    }
}

/// Sink that keeps every write in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    visibility: Vec<bool>,
    count: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visibility flags as last written, indexed by card position.
    pub fn visibility(&self) -> &[bool] {
        &self.visibility
    }

    /// Last count written, or `None` if the engine never reported one.
    pub fn count(&self) -> Option<usize> {
        self.count
    }
}

impl VisibilitySink for RecordingSink {
    fn set_visible(&mut self, index: usize, visible: bool) {
        if index >= self.visibility.len() {
            self.visibility.resize(index + 1, false);
        }
        self.visibility[index] = visible;
    }

    fn set_count(&mut self, count: usize) {
        self.count = Some(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_value_reports_its_value() {
        assert_eq!(FixedValue::new("cafe").value(), "cafe");
    }

    #[test]
    fn recording_sink_grows_on_demand() {
        let mut sink = RecordingSink::new();
        sink.set_visible(2, true);
        assert_eq!(sink.visibility(), &[false, false, true]);
    }

    #[test]
    fn recording_sink_remembers_last_count() {
        let mut sink = RecordingSink::new();
        assert_eq!(sink.count(), None);
        sink.set_count(4);
        sink.set_count(2);
        assert_eq!(sink.count(), Some(2));
    }
}
