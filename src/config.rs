use std::time::Duration;

use crate::reveal::Stagger;

/// Intersection ratio each section needs before its entrance animation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealThresholds {
    pub about: f64,
    pub skills: f64,
    pub projects: f64,
    pub quote: f64,
    pub experience: f64,
    pub contact: f64,
}

impl Default for RevealThresholds {
    fn default() -> Self {
        Self {
            about: 0.3,
            skills: 0.3,
            projects: 0.2,
            quote: 0.5,
            experience: 0.2,
            contact: 0.2,
        }
    }
}

/// Behaviour constants shared by the page components.
///
/// Provided to the component tree as context by `App`; components read it with
/// `use_page_config` and fall back to [`PageConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    /// Added to the scroll offset before the containment test, roughly the
    /// height of the fixed navigation bar.
    pub lookahead_offset: f64,
    /// Scroll offset past which the navigation bar gets its solid background.
    pub scrolled_threshold: f64,
    pub thresholds: RevealThresholds,
    pub skills_stagger: Stagger,
    pub projects_stagger: Stagger,
    pub experience_stagger: Stagger,
    pub submit_delay: Duration,
    pub toast_duration: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lookahead_offset: 100.0,
            scrolled_threshold: 50.0,
            thresholds: RevealThresholds::default(),
            skills_stagger: Stagger::new(Duration::ZERO, Duration::from_millis(100)),
            projects_stagger: Stagger::new(Duration::from_millis(300), Duration::from_millis(200)),
            experience_stagger: Stagger::new(Duration::ZERO, Duration::from_millis(200)),
            submit_delay: Duration::from_millis(1000),
            toast_duration: Duration::from_millis(5000),
        }
    }
}
