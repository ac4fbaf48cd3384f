//! Reveal-on-scroll state machine
//!
//! A [`RevealController`] owns one content block's visibility flag and the
//! observer watching it. The first qualifying intersection reveals the block
//! and stops observation; nothing after that can hide it again.

/// Fraction of the block that must be visible before it is revealed
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Delay added per item when a list of blocks animates in
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Slack when comparing a reported ratio against the threshold
const RATIO_TOLERANCE: f64 = 1e-3;

/// Capability to watch a single element's viewport intersection
pub trait VisibilityObserver {
    fn observe(&mut self);
    fn unobserve(&mut self);
    fn disconnect(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            delay_ms: 0,
        }
    }
}

impl RevealOptions {
    /// Options for the `index`th item of a staggered list
    pub fn staggered(index: usize) -> Self {
        Self {
            delay_ms: stagger_delay(index),
            ..Self::default()
        }
    }

    /// Inline style carrying the transition delay, if any
    pub fn transition_style(&self) -> Option<String> {
        (self.delay_ms > 0).then(|| format!("transition-delay: {}ms", self.delay_ms))
    }
}

pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(REVEAL_STAGGER_MS)
}

/// One intersection report for the observed element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    Revealed,
    Unchanged,
}

pub struct RevealController<O: VisibilityObserver> {
    observer: O,
    options: RevealOptions,
    revealed: bool,
    observing: bool,
    connected: bool,
}

impl<O: VisibilityObserver> RevealController<O> {
    pub fn new(observer: O, options: RevealOptions) -> Self {
        Self {
            observer,
            options,
            revealed: false,
            observing: false,
            connected: true,
        }
    }

    /// Begin observing; no-op once revealed or torn down
    pub fn start(&mut self) {
        if self.revealed || self.observing || !self.connected {
            return;
        }
        self.observer.observe();
        self.observing = true;
    }

    pub fn on_intersection(&mut self, sample: IntersectionSample) -> RevealTransition {
        if self.revealed || !self.connected || !sample.is_intersecting {
            return RevealTransition::Unchanged;
        }
        // false for a NaN ratio
        let crossed = sample.ratio + RATIO_TOLERANCE >= self.options.threshold;
        if !crossed {
            return RevealTransition::Unchanged;
        }

        self.revealed = true;
        if self.observing {
            self.observer.unobserve();
            self.observing = false;
        }
        tracing::trace!(ratio = sample.ratio, "content block revealed");
        RevealTransition::Revealed
    }

    /// Release the observer; safe to call any number of times
    pub fn teardown(&mut self) {
        if !self.connected {
            return;
        }
        self.observer.disconnect();
        self.observing = false;
        self.connected = false;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::VisibilityObserver;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ObserverCall {
        Observe,
        Unobserve,
        Disconnect,
    }

    /// Observer that records every call made on it
    #[derive(Debug, Default)]
    pub struct RecordingObserver {
        pub calls: Vec<ObserverCall>,
    }

    impl VisibilityObserver for RecordingObserver {
        fn observe(&mut self) {
            self.calls.push(ObserverCall::Observe);
        }

        fn unobserve(&mut self) {
            self.calls.push(ObserverCall::Unobserve);
        }

        fn disconnect(&mut self) {
            self.calls.push(ObserverCall::Disconnect);
        }
    }

    impl<O: VisibilityObserver> super::RevealController<O> {
        pub fn observer(&self) -> &O {
            &self.observer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{ObserverCall, RecordingObserver};
    use super::*;

    fn enter(ratio: f64) -> IntersectionSample {
        IntersectionSample {
            is_intersecting: true,
            ratio,
        }
    }

    const LEAVE: IntersectionSample = IntersectionSample {
        is_intersecting: false,
        ratio: 0.0,
    };

    fn started() -> RevealController<RecordingObserver> {
        let mut controller =
            RevealController::new(RecordingObserver::default(), RevealOptions::default());
        controller.start();
        controller
    }

    #[test]
    fn test_starts_hidden_and_observing() {
        let controller = started();
        assert!(!controller.is_revealed());
        assert!(controller.is_observing());
        assert_eq!(controller.observer().calls, vec![ObserverCall::Observe]);
    }

    #[test]
    fn test_reveals_once_and_unobserves() {
        let mut controller = started();
        assert_eq!(controller.on_intersection(enter(0.5)), RevealTransition::Revealed);
        assert!(controller.is_revealed());
        assert!(!controller.is_observing());

        assert_eq!(controller.on_intersection(LEAVE), RevealTransition::Unchanged);
        assert_eq!(controller.on_intersection(enter(1.0)), RevealTransition::Unchanged);
        assert!(controller.is_revealed());
        assert_eq!(
            controller.observer().calls,
            vec![ObserverCall::Observe, ObserverCall::Unobserve]
        );
    }

    #[test]
    fn test_below_threshold_is_ignored() {
        let mut controller = started();
        assert_eq!(controller.on_intersection(enter(0.05)), RevealTransition::Unchanged);
        assert_eq!(controller.on_intersection(LEAVE), RevealTransition::Unchanged);
        assert!(!controller.is_revealed());
        assert!(controller.is_observing());
    }

    #[test]
    fn test_threshold_ratio_reveals() {
        // Browsers report ratios like 0.0999999 for a 0.1 threshold crossing
        let mut controller = started();
        assert_eq!(
            controller.on_intersection(enter(0.099_999_9)),
            RevealTransition::Revealed
        );
    }

    #[test]
    fn test_teardown_before_reveal() {
        let mut controller = started();
        controller.teardown();
        controller.teardown();
        assert!(!controller.is_revealed());
        assert_eq!(
            controller.observer().calls,
            vec![ObserverCall::Observe, ObserverCall::Disconnect]
        );
    }

    #[test]
    fn test_teardown_after_reveal() {
        let mut controller = started();
        controller.on_intersection(enter(0.3));
        controller.teardown();
        assert!(controller.is_revealed());
        assert_eq!(
            controller.observer().calls,
            vec![
                ObserverCall::Observe,
                ObserverCall::Unobserve,
                ObserverCall::Disconnect
            ]
        );
    }

    #[test]
    fn test_samples_after_teardown_are_ignored() {
        let mut controller = started();
        controller.teardown();
        assert_eq!(controller.on_intersection(enter(1.0)), RevealTransition::Unchanged);
        assert!(!controller.is_revealed());
        assert_eq!(
            controller.observer().calls,
            vec![ObserverCall::Observe, ObserverCall::Disconnect]
        );
    }

    #[test]
    fn test_nan_ratio_does_not_reveal() {
        let mut controller = started();
        assert_eq!(controller.on_intersection(enter(f64::NAN)), RevealTransition::Unchanged);
        assert!(!controller.is_revealed());
        assert!(controller.is_observing());
    }

    #[test]
    fn test_start_after_teardown_is_noop() {
        let mut controller =
            RevealController::new(RecordingObserver::default(), RevealOptions::default());
        controller.teardown();
        controller.start();
        assert!(!controller.is_observing());
        assert_eq!(controller.observer().calls, vec![ObserverCall::Disconnect]);
    }

    #[test]
    fn test_staggered_options() {
        assert_eq!(RevealOptions::staggered(0).transition_style(), None);
        let third = RevealOptions::staggered(2);
        assert_eq!(third.delay_ms, 200);
        assert_eq!(third.threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(
            third.transition_style().as_deref(),
            Some("transition-delay: 200ms")
        );
    }
}
