use std::sync::Arc;

use leptos::{html, prelude::*, web_sys::HtmlElement};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use wasm_bindgen::JsCast;

use crate::{
    motion::{RevealLatch, REVEAL_THRESHOLD},
    sections::{ActiveSectionTracker, Section, SectionExtent},
};

/// Smooth-scrolls to the section; a section missing from the page is ignored.
pub fn scroll_to_section(section: Section) {
    if let Some(el) = document().get_element_by_id(section.id()) {
        el.scroll_into_view();
    }
}

fn measure_section(section: Section) -> Option<SectionExtent> {
    let el = document()
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionExtent::new(
        el.offset_top().into(),
        el.offset_height().into(),
    ))
}

/// Section under the scroll probe, recomputed at mount and on every window scroll.
pub fn use_active_section() -> ReadSignal<Section> {
    let (active, set_active) = signal(Section::default());
    let tracker = StoredValue::new(ActiveSectionTracker::new());
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let next = tracker
            .try_update_value(|t| t.on_scroll(y, measure_section))
            .unwrap_or_default();
        if next != active.get_untracked() {
            log::debug!("active section: {}", next.id());
            set_active(next);
        }
    });

    active
}

/// False until `target` first crosses the reveal threshold, then true for good. The observer
/// disconnects after that first reveal.
pub fn use_reveal_once(target: NodeRef<html::Div>, name: &'static str) -> ReadSignal<bool> {
    let latch = StoredValue::new(RevealLatch::default());
    let stop_observer = StoredValue::new(None::<Arc<dyn Fn() + Send + Sync>>);
    let (revealed, set_revealed) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            let revealed_now = latch
                .try_update_value(|l| l.observe(intersecting))
                .unwrap_or(false);
            if revealed_now {
                log::debug!("revealing {name}");
                set_revealed(true);
                // the latch never changes again, so stop watching
                stop_observer.with_value(|stop| {
                    if let Some(stop) = stop {
                        stop();
                    }
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );
    stop_observer.set_value(Some(Arc::new(stop)));

    revealed
}

/// Flips to true once the component is mounted in the browser. Stays false on the server,
/// so server-rendered markup starts in the hidden pose.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted(true));
    mounted
}
