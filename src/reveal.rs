use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::schedule::{Scheduler, TaskGroup};

/// One-way latch for entrance animations.
///
/// Flips to revealed the first time an observed intersection ratio reaches the
/// threshold and never flips back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection ratio. Returns `true` only for the observation
    /// that flips the latch.
    ///
    /// A ratio of zero means the element is entirely outside the viewport and
    /// never reveals, even with a zero threshold.
    pub fn observe(&mut self, ratio: f64) -> bool {
        self.flip_at(ratio, self.threshold)
    }

    /// Like [`RevealLatch::observe`], for a target `target_height` tall inside
    /// a viewport `root_height` tall.
    ///
    /// A target taller than the viewport can never show more than
    /// `root_height / target_height` of itself, so the threshold is scaled by
    /// that fraction: the target reveals once it fills `threshold` of the
    /// viewport instead.
    pub fn observe_sized(&mut self, ratio: f64, target_height: f64, root_height: f64) -> bool {
        self.flip_at(ratio, self.threshold_for(target_height, root_height))
    }

    /// Threshold that applies to a target of the given size.
    pub fn threshold_for(&self, target_height: f64, root_height: f64) -> f64 {
        if root_height > 0.0 && target_height > root_height {
            self.threshold * (root_height / target_height)
        } else {
            self.threshold
        }
    }

    fn flip_at(&mut self, ratio: f64, threshold: f64) -> bool {
        if self.revealed || ratio.is_nan() || ratio <= 0.0 {
            return false;
        }
        if ratio >= threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// Ratios at which the observer should report: every 5% up to `threshold`,
/// then `threshold` itself.
///
/// The intermediate steps let a target taller than the viewport report the
/// smaller ratios it can actually reach.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let threshold = RevealLatch::new(threshold).threshold();
    let mut steps: Vec<f64> = (1..20)
        .map(|i| f64::from(i) * 0.05)
        .take_while(|step| *step < threshold)
        .collect();
    steps.push(threshold);
    steps
}

/// Per-item delay plan: item `i` is due `base + i * step` after the parent reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub base: Duration,
    pub step: Duration,
}

impl Stagger {
    pub const fn new(base: Duration, step: Duration) -> Self {
        Self { base, step }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base.saturating_add(self.step.saturating_mul(index))
    }

    /// `delay_for` as a CSS time value, for staggering done purely in styles.
    pub fn css_delay(&self, index: usize) -> String {
        format!("{}ms", self.delay_for(index).as_millis())
    }
}

/// Indices of child items that have been revealed. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: BTreeSet<usize>,
}

impl RevealSet {
    /// Returns `true` if `index` was not revealed before.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Reveals `count` child items one by one once their parent has been revealed.
#[derive(Clone)]
pub struct StaggeredReveal<S: Scheduler> {
    tasks: TaskGroup<S>,
    stagger: Stagger,
    started: Arc<AtomicBool>,
}

impl<S: Scheduler> StaggeredReveal<S> {
    pub fn new(scheduler: S, stagger: Stagger) -> Self {
        Self {
            tasks: TaskGroup::new(scheduler),
            stagger,
            started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Schedules `on_reveal(i)` for every index below `count`.
    ///
    /// Only the first call schedules anything; returns whether it did.
    pub fn start<F>(&self, count: usize, on_reveal: F) -> bool
    where
        F: Fn(usize) + Clone + 'static,
    {
        if !self.tasks.is_live() || self.started.swap(true, Ordering::AcqRel) {
            return false;
        }
        log::debug!("staggering {count} items every {:?}", self.stagger.step);
        for index in 0..count {
            let on_reveal = on_reveal.clone();
            self.tasks
                .spawn_after(self.stagger.delay_for(index), move || on_reveal(index));
        }
        true
    }

    /// Discards every reveal that has not fired yet.
    pub fn cancel(&self) {
        self.tasks.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_latch_reveals_at_threshold() {
        let mut latch = RevealLatch::new(0.3);
        assert!(!latch.observe(0.1));
        assert!(!latch.observe(0.29));
        assert!(!latch.is_revealed());
        assert!(latch.observe(0.3));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_is_monotonic() {
        let mut latch = RevealLatch::new(0.5);
        assert!(latch.observe(0.9));
        // scrolling back out never hides the section again
        for ratio in [0.0, 0.1, 0.49, 1.0, 0.0] {
            assert!(!latch.observe(ratio));
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn test_latch_flag_matches_history() {
        for threshold in [0.0, 0.2, 0.3, 0.5, 1.0] {
            let ratios = [0.0, 0.05, 0.15, 0.25, 0.4, 0.6, 0.1, 1.0, 0.0];
            let mut latch = RevealLatch::new(threshold);
            let mut seen = false;
            let mut flips = 0;
            for ratio in ratios {
                seen |= ratio > 0.0 && ratio >= threshold;
                if latch.observe(ratio) {
                    flips += 1;
                }
                assert_eq!(latch.is_revealed(), seen, "threshold {threshold}, ratio {ratio}");
            }
            assert_eq!(flips, 1);
        }
    }

    #[test]
    fn test_latch_ignores_degenerate_input() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(f64::NAN));
        assert!(latch.observe(0.01));

        assert_eq!(RevealLatch::new(4.0).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealLatch::new(f64::NAN).threshold(), 0.0);
    }

    /// Ratio of a `height` tall element at document offset `top` visible in a
    /// viewport scrolled to `scroll`.
    fn visible_ratio(top: f64, height: f64, scroll: f64, viewport: f64) -> f64 {
        let overlap = (top + height).min(scroll + viewport) - top.max(scroll);
        overlap.max(0.0) / height
    }

    #[test]
    fn test_tall_section_reveals_while_scrolling_through() {
        let (top, height, viewport) = (1000.0, 2500.0, 700.0);
        let mut plain = RevealLatch::new(0.3);
        let mut sized = RevealLatch::new(0.3);
        let mut max_ratio: f64 = 0.0;
        let mut revealed_at = None;

        let mut scroll = 0.0;
        while scroll <= top + height {
            let ratio = visible_ratio(top, height, scroll, viewport);
            max_ratio = max_ratio.max(ratio);
            plain.observe(ratio);
            if sized.observe_sized(ratio, height, viewport) {
                revealed_at = Some(scroll);
            }
            scroll += 10.0;
        }

        // the raw ratio never gets near the threshold
        assert!(max_ratio < 0.3);
        assert!(!plain.is_revealed());
        assert!(sized.is_revealed());
        // about 30% of the viewport (210px) of the section is on screen
        let at = revealed_at.expect("tall section should reveal");
        assert!((at - (top - viewport + 210.0)).abs() <= 10.0, "revealed at {at}");
    }

    #[test]
    fn test_threshold_for_short_and_tall_targets() {
        let latch = RevealLatch::new(0.3);
        assert_eq!(latch.threshold_for(500.0, 700.0), 0.3);
        assert_eq!(latch.threshold_for(700.0, 700.0), 0.3);
        assert!((latch.threshold_for(1400.0, 700.0) - 0.15).abs() < 1e-12);
        assert_eq!(latch.threshold_for(1400.0, 0.0), 0.3);
        assert_eq!(latch.threshold_for(f64::NAN, 700.0), 0.3);

        let mut short = RevealLatch::new(0.3);
        assert!(!short.observe_sized(0.2, 500.0, 700.0));
        assert!(short.observe_sized(0.3, 500.0, 700.0));
    }

    #[test]
    fn test_observer_thresholds() {
        let steps = observer_thresholds(0.3);
        assert_eq!(steps.len(), 6);
        assert_eq!(steps.last(), Some(&0.3));
        assert!(steps.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(observer_thresholds(0.0), vec![0.0]);
        assert_eq!(observer_thresholds(1.0).len(), 20);
    }

    #[test]
    fn test_stagger_delays() {
        let stagger = Stagger::new(ms(300), ms(200));
        assert_eq!(stagger.delay_for(0), ms(300));
        assert_eq!(stagger.delay_for(3), ms(900));
        assert_eq!(stagger.css_delay(1), "500ms");
        assert_eq!(
            Stagger::new(Duration::MAX, ms(1)).delay_for(usize::MAX),
            Duration::MAX
        );
    }

    #[test]
    fn test_reveal_set() {
        let mut set = RevealSet::default();
        assert!(set.is_empty());
        assert!(set.reveal(2));
        assert!(!set.reveal(2));
        assert!(set.is_revealed(2));
        assert!(!set.is_revealed(0));
        assert_eq!(set.len(), 1);
    }

    fn recorder() -> (Rc<RefCell<RevealSet>>, impl Fn(usize) + Clone + 'static) {
        let set = Rc::new(RefCell::new(RevealSet::default()));
        let handle = Rc::clone(&set);
        (set, move |i| {
            handle.borrow_mut().reveal(i);
        })
    }

    #[test]
    fn test_staggered_items_reveal_on_schedule() {
        let clock = ManualScheduler::default();
        let stagger = StaggeredReveal::new(clock.clone(), Stagger::new(Duration::ZERO, ms(200)));
        let (set, on_reveal) = recorder();

        assert!(stagger.start(4, on_reveal.clone()));
        assert!(!stagger.start(4, on_reveal));
        assert_eq!(clock.pending(), 4);

        clock.advance(Duration::ZERO);
        assert!(set.borrow().is_revealed(0));
        assert!(!set.borrow().is_revealed(1));

        clock.advance(ms(399));
        assert!(set.borrow().is_revealed(1));
        assert!(!set.borrow().is_revealed(2));

        clock.advance(ms(1));
        assert!(set.borrow().is_revealed(2));
        clock.advance(ms(200));
        assert_eq!(set.borrow().len(), 4);
    }

    #[test]
    fn test_teardown_mid_stagger_discards_pending() {
        let clock = ManualScheduler::default();
        let stagger = StaggeredReveal::new(clock.clone(), Stagger::new(Duration::ZERO, ms(100)));
        let (set, on_reveal) = recorder();

        stagger.start(5, on_reveal.clone());
        clock.advance(ms(150));
        assert_eq!(set.borrow().len(), 2);

        stagger.cancel();
        clock.advance(ms(1000));
        assert_eq!(set.borrow().len(), 2);
        assert!(!set.borrow().is_revealed(2));
        assert!(!stagger.start(5, on_reveal));
    }

    /// Handle type that is deliberately not `Clone`.
    struct Ticket(u64);

    #[derive(Clone, Default)]
    struct TicketScheduler(ManualScheduler);

    impl Scheduler for TicketScheduler {
        type Handle = Ticket;

        fn schedule(&self, delay: Duration, task: crate::schedule::Task) -> Option<Ticket> {
            self.0.schedule(delay, task).map(Ticket)
        }

        fn cancel(&self, handle: Ticket) {
            self.0.cancel(handle.0);
        }
    }

    #[test]
    fn test_clones_share_one_plan() {
        let clock = TicketScheduler::default();
        let stagger = StaggeredReveal::new(clock.clone(), Stagger::new(ms(100), ms(100)));
        let copy = stagger.clone();
        let (set, on_reveal) = recorder();

        assert!(copy.start(3, on_reveal.clone()));
        assert!(!stagger.start(3, on_reveal));
        clock.0.advance(ms(100));
        assert_eq!(set.borrow().len(), 1);

        stagger.cancel();
        assert_eq!(clock.0.pending(), 0);
        clock.0.advance(ms(1000));
        assert_eq!(set.borrow().len(), 1);
    }

    #[test]
    fn test_equal_delays_reveal_together() {
        let clock = ManualScheduler::default();
        let stagger = StaggeredReveal::new(clock.clone(), Stagger::new(ms(50), Duration::ZERO));
        let (set, on_reveal) = recorder();

        stagger.start(3, on_reveal);
        clock.advance(ms(49));
        assert!(set.borrow().is_empty());
        clock.advance(ms(1));
        assert_eq!(set.borrow().len(), 3);
    }
}
