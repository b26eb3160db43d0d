//! The engine wired to live inputs and an output sink.

use super::card::Card;
use super::engine::{self, FilterOutcome};
use super::ports::{ValueSource, VisibilitySink};
use super::state::FilterState;

/// A card collection bound to its filter inputs and visibility sink.
///
/// Construction is fully explicit: the engine holds exactly the cards,
/// sources and sink it was handed and looks nothing up from the
/// environment. Any input left unattached reads as an empty string, so a
/// partially wired engine still works; it just never constrains on that
/// dimension.
///
/// There is one recompute path, [`refresh`](Self::refresh): the host calls
/// it whenever any input changes, and [`attach`](Self::attach) calls it
/// once up front so the sink is populated before the first change ever
/// arrives.
pub struct FilterEngine<S: VisibilitySink> {
    cards: Vec<Card>,
    query: Option<Box<dyn ValueSource>>,
    status: Option<Box<dyn ValueSource>>,
    category: Option<Box<dyn ValueSource>>,
    sink: S,
}

impl<S: VisibilitySink> FilterEngine<S> {
    /// Engine over `cards` reporting into `sink`, with no inputs attached.
    pub fn new(cards: Vec<Card>, sink: S) -> Self {
        Self {
            cards,
            query: None,
            status: None,
            category: None,
            sink,
        }
    }

    pub fn with_query(mut self, source: impl ValueSource + 'static) -> Self {
        self.query = Some(Box::new(source));
        self
    }

    pub fn with_status(mut self, source: impl ValueSource + 'static) -> Self {
        self.status = Some(Box::new(source));
        self
    }

    pub fn with_category(mut self, source: impl ValueSource + 'static) -> Self {
        self.category = Some(Box::new(source));
        self
    }

    /// Finish wiring and run the eager initial pass.
    pub fn attach(mut self) -> Self {
        self.refresh();
        self
    }

    /// Read the current inputs, re-evaluate every card and push the
    /// results to the sink.
    ///
    /// Every call is a full recompute over all cards; the outcome is also
    /// returned for hosts that want it directly.
    pub fn refresh(&mut self) -> FilterOutcome {
        let state = self.state();
        let outcome = engine::apply_all(&self.cards, &state);
        for (index, visible) in outcome.visibility.iter().enumerate() {
            self.sink.set_visible(index, *visible);
        }
        self.sink.set_count(outcome.visible_count);
        outcome
    }

    /// Snapshot of the current input values. Absent sources read empty.
    pub fn state(&self) -> FilterState {
        FilterState::new(
            read(&self.query),
            read(&self.status),
            read(&self.category),
        )
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Tear down the wiring and keep the sink, typically to read out what
    /// a [`RecordingSink`](super::RecordingSink) captured.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn read(source: &Option<Box<dyn ValueSource>>) -> String {
    source.as_ref().map(|s| s.value()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ports::{FixedValue, RecordingSink};

    fn cards() -> Vec<Card> {
        vec![
            Card::new("Blue Cafe", "12 Main St", "Cafe", "wifi", "Open"),
            Card::new("Red Diner", "9 Side Ave", "Diner", "parking", "Closed"),
        ]
    }

    #[test]
    fn attach_runs_the_initial_pass() {
        let engine = FilterEngine::new(cards(), RecordingSink::new()).attach();
        assert_eq!(engine.sink().visibility(), &[true, true]);
        assert_eq!(engine.sink().count(), Some(2));
    }

    #[test]
    fn unattached_inputs_read_as_empty() {
        let engine = FilterEngine::new(cards(), RecordingSink::new())
            .with_status(FixedValue::new("Closed"));
        assert_eq!(engine.state(), FilterState::new("", "Closed", ""));
    }

    #[test]
    fn refresh_pushes_results_through_the_sink() {
        let mut engine = FilterEngine::new(cards(), RecordingSink::new())
            .with_query(FixedValue::new("diner"));
        let outcome = engine.refresh();
        assert_eq!(outcome.visible_count, 1);
        assert_eq!(engine.sink().visibility(), &[false, true]);
        assert_eq!(engine.sink().count(), Some(1));
    }

    #[test]
    fn refresh_is_a_full_recompute() {
        let mut engine = FilterEngine::new(cards(), RecordingSink::new())
            .with_query(FixedValue::new(""))
            .attach();
        let first = engine.refresh();
        let second = engine.refresh();
        assert_eq!(first, second);
        assert_eq!(engine.sink().count(), Some(2));
    }

    #[test]
    fn engine_without_cards_reports_zero() {
        let sink = FilterEngine::new(Vec::new(), RecordingSink::new())
            .attach()
            .into_sink();
        assert!(sink.visibility().is_empty());
        assert_eq!(sink.count(), Some(0));
    }
}
