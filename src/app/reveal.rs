use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{observer_thresholds, RevealLatch, RevealSet, Stagger, StaggeredReveal};
use crate::schedule::BrowserScheduler;

/// Becomes `true` the first time at least `threshold` of the section is in the
/// viewport, and stays `true`. A section taller than the viewport only needs
/// to fill `threshold` of the viewport.
///
/// The observer is disconnected once the latch flips and is released with the
/// owning component.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    let latch = StoredValue::new(RevealLatch::new(threshold));

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                let ratio = entry.intersection_ratio();
                let height = entry.bounding_client_rect().height();
                let viewport = entry
                    .root_bounds()
                    .map(|root| root.height())
                    .or_else(|| window().inner_height().ok()?.as_f64())
                    .unwrap_or(0.0);
                let flipped = latch
                    .try_update_value(|latch| latch.observe_sized(ratio, height, viewport))
                    .unwrap_or(false);
                if flipped {
                    log::debug!("revealed {} at ratio {ratio:.2}", entry.target().id());
                    set_revealed.try_set(true);
                    observer.disconnect();
                    break;
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(observer_thresholds(threshold)),
    );

    revealed.into()
}

/// Reveals `count` child items one after another once `parent` turns `true`.
///
/// Reveals still pending when the owning component is torn down are dropped.
pub fn use_staggered_reveal(
    parent: Signal<bool>,
    count: usize,
    stagger: Stagger,
) -> ReadSignal<RevealSet> {
    let (items, set_items) = signal(RevealSet::default());
    let plan = StaggeredReveal::new(BrowserScheduler, stagger);

    on_cleanup({
        let plan = plan.clone();
        move || plan.cancel()
    });

    Effect::new(move |_| {
        if parent.get() {
            plan.start(count, move |index| {
                set_items.try_update(|items| items.reveal(index));
            });
        }
    });

    items
}

/// Class string for an element that fades in with `animation` once `visible`.
/// Before that only `base` applies, so the server-rendered page is readable.
pub fn reveal_class(
    visible: Signal<bool>,
    base: &'static str,
    animation: &'static str,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || {
        if visible.get() {
            format!("{base} {animation}")
        } else {
            base.to_string()
        }
    }
}
