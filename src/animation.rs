//! Declarative entrance and scroll-reveal transitions.
//!
//! The tables here describe every visual transition on the page as
//! `{target, from, to, timing, trigger}` records; the interpreter at the
//! bottom plays them with plain CSS transitions. The browser's transition
//! engine and `IntersectionObserver` do the actual animation work — this
//! module contains no animation math beyond the timeline schedule.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// A snapshot of the animatable properties of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    pub scale: f64,
}

impl VisualState {
    /// Where every transition ends: fully visible, in place.
    pub const RESTING: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden_y(y: f64) -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y,
            scale: 1.0,
        }
    }

    pub const fn hidden_x(x: f64) -> Self {
        Self {
            opacity: 0.0,
            x,
            y: 0.0,
            scale: 1.0,
        }
    }

    pub const fn hidden_scale(scale: f64) -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale,
        }
    }

    /// CSS `transform` value for this state.
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }
}

/// Easing curves used on the page, as CSS timing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Power2Out,
    Power3Out,
    BackOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Ease::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// When a transition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Plays once on page load. `overlap_ms` pulls the start earlier so
    /// the stage overlaps the previous one in its timeline.
    Mount { overlap_ms: u32 },
    /// Plays once when the trigger element's top crosses `viewport_pct`
    /// percent down the viewport. `anchor: None` makes every target
    /// element its own trigger.
    Viewport {
        anchor: Option<&'static str>,
        viewport_pct: u8,
    },
}

/// One hand-authored transition: elements matching `target` move
/// `from` → `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub target: &'static str,
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: u32,
    /// Extra delay per target element, in DOM order.
    pub stagger_ms: u32,
    pub ease: Ease,
    pub trigger: Trigger,
}

/// Hero entrance timeline, in play order: greeting, description,
/// staggered social icons, then the portrait scaling in. Stages overlap
/// the previous one by their `overlap_ms`.
pub const HERO_TIMELINE: &[Transition] = &[
    Transition {
        target: ".hero-greeting",
        from: VisualState::hidden_y(30.0),
        to: VisualState::RESTING,
        duration_ms: 800,
        stagger_ms: 0,
        ease: Ease::Power3Out,
        trigger: Trigger::Mount { overlap_ms: 0 },
    },
    Transition {
        target: ".hero-description",
        from: VisualState::hidden_y(20.0),
        to: VisualState::RESTING,
        duration_ms: 600,
        stagger_ms: 0,
        ease: Ease::Power3Out,
        trigger: Trigger::Mount { overlap_ms: 400 },
    },
    Transition {
        target: ".hero-socials > *",
        from: VisualState::hidden_y(20.0),
        to: VisualState::RESTING,
        duration_ms: 500,
        stagger_ms: 100,
        ease: Ease::Power3Out,
        trigger: Trigger::Mount { overlap_ms: 300 },
    },
    Transition {
        target: ".hero-image",
        from: VisualState::hidden_scale(0.8),
        to: VisualState::RESTING,
        duration_ms: 800,
        stagger_ms: 0,
        ease: Ease::BackOut,
        trigger: Trigger::Mount { overlap_ms: 600 },
    },
];

/// Nav items drop in on load, independent of the hero timeline.
pub const NAV_INTRO: &[Transition] = &[Transition {
    target: ".nav-item",
    from: VisualState::hidden_y(-20.0),
    to: VisualState::RESTING,
    duration_ms: 500,
    stagger_ms: 100,
    ease: Ease::Power2Out,
    trigger: Trigger::Mount { overlap_ms: 0 },
}];

/// One-shot viewport reveals. Each fires the first time its trigger
/// element scrolls into view and never reverses or replays.
pub const SCROLL_REVEALS: &[Transition] = &[
    Transition {
        target: ".project-card",
        from: VisualState::hidden_y(50.0),
        to: VisualState::RESTING,
        duration_ms: 600,
        stagger_ms: 150,
        ease: Ease::Power3Out,
        trigger: Trigger::Viewport {
            anchor: Some("#projects"),
            viewport_pct: 85,
        },
    },
    Transition {
        target: ".section-title",
        from: VisualState::hidden_y(30.0),
        to: VisualState::RESTING,
        duration_ms: 600,
        stagger_ms: 0,
        ease: Ease::Power3Out,
        trigger: Trigger::Viewport {
            anchor: None,
            viewport_pct: 90,
        },
    },
    Transition {
        target: ".about-text",
        from: VisualState::hidden_y(40.0),
        to: VisualState::RESTING,
        duration_ms: 700,
        stagger_ms: 200,
        ease: Ease::Power3Out,
        trigger: Trigger::Viewport {
            anchor: Some("#about"),
            viewport_pct: 80,
        },
    },
    Transition {
        target: ".tech-item",
        from: VisualState::hidden_x(-20.0),
        to: VisualState::RESTING,
        duration_ms: 400,
        stagger_ms: 80,
        ease: Ease::Power2Out,
        trigger: Trigger::Viewport {
            anchor: Some(".tech-list"),
            viewport_pct: 85,
        },
    },
    Transition {
        target: ".experience-item",
        from: VisualState::hidden_y(30.0),
        to: VisualState::RESTING,
        duration_ms: 600,
        stagger_ms: 200,
        ease: Ease::Power3Out,
        trigger: Trigger::Viewport {
            anchor: Some(".experience-section"),
            viewport_pct: 80,
        },
    },
    Transition {
        target: ".contact-content",
        from: VisualState::hidden_y(30.0),
        to: VisualState::RESTING,
        duration_ms: 600,
        stagger_ms: 0,
        ease: Ease::Power3Out,
        trigger: Trigger::Viewport {
            anchor: Some("#contact"),
            viewport_pct: 85,
        },
    },
];

/// Absolute start offset of each `Mount` stage in a timeline: a stage
/// begins `overlap_ms` before the previous stage ends, floored at zero.
pub fn mount_schedule(stages: &[Transition]) -> Vec<u32> {
    let mut starts = Vec::with_capacity(stages.len());
    let mut prev_end = 0u32;
    for stage in stages {
        let overlap = match stage.trigger {
            Trigger::Mount { overlap_ms } => overlap_ms,
            Trigger::Viewport { .. } => 0,
        };
        let start = prev_end.saturating_sub(overlap);
        prev_end = start + stage.duration_ms;
        starts.push(start);
    }
    starts
}

/// `IntersectionObserver` root margin that fires when an element's top
/// crosses `viewport_pct` percent down the viewport.
pub fn root_margin(viewport_pct: u8) -> String {
    format!("0px 0px -{}% 0px", 100 - i32::from(viewport_pct.min(100)))
}

fn targets_of(selector: &str) -> Vec<HtmlElement> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn set_state(el: &HtmlElement, state: &VisualState) {
    let style = el.style();
    let _ = style.set_property("opacity", &state.opacity.to_string());
    let _ = style.set_property("transform", &state.transform());
}

/// Move `el` from the transition's hidden state to its resting state with
/// a CSS transition that starts after `delay_ms`.
fn play(el: &HtmlElement, transition: &Transition, delay_ms: u32) {
    set_state(el, &transition.from);
    // Force a style flush so the transition animates from the hidden state
    // instead of snapping straight to the resting one.
    let _ = el.offset_height();
    let timing = format!(
        "opacity {d}ms {ease} {delay_ms}ms, transform {d}ms {ease} {delay_ms}ms",
        d = transition.duration_ms,
        ease = transition.ease.css(),
    );
    let _ = el.style().set_property("transition", &timing);
    set_state(el, &transition.to);
}

/// Play a `Mount` timeline once. Stage offsets come from
/// [`mount_schedule`]; staggered targets add their per-element delay on
/// top. A selector with no matches simply skips that stage.
pub fn play_mount(stages: &'static [Transition]) {
    let starts = mount_schedule(stages);
    for (stage, start) in stages.iter().zip(starts) {
        for (i, el) in targets_of(stage.target).into_iter().enumerate() {
            play(&el, stage, start + i as u32 * stage.stagger_ms);
        }
    }
}

/// Observe `el` and run `action` the first time it intersects, then stop
/// observing. The closure is leaked; reveals live for the page lifetime.
fn observe_once(el: &HtmlElement, margin: &str, action: impl Fn() + 'static) {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let fired = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if fired {
                action();
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(margin);
    if let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        observer.observe(el);
    }
    callback.forget();
}

/// Arm one-shot viewport reveals: hide every target now, release each
/// group the first time its trigger crosses its threshold. A missing
/// trigger or target means that reveal never fires; there are no error
/// states.
pub fn arm_reveals(stages: &'static [Transition]) {
    for stage in stages {
        let Trigger::Viewport {
            anchor,
            viewport_pct,
        } = stage.trigger
        else {
            continue;
        };
        let margin = root_margin(viewport_pct);

        match anchor {
            Some(anchor_selector) => {
                let targets = targets_of(stage.target);
                if targets.is_empty() {
                    continue;
                }
                for el in &targets {
                    set_state(el, &stage.from);
                }
                let Some(trigger_el) = targets_of(anchor_selector).into_iter().next() else {
                    continue;
                };
                observe_once(&trigger_el, &margin, move || {
                    for (i, el) in targets_of(stage.target).into_iter().enumerate() {
                        play(&el, stage, i as u32 * stage.stagger_ms);
                    }
                });
            }
            None => {
                for el in targets_of(stage.target) {
                    set_state(&el, &stage.from);
                    let revealed = el.clone();
                    observe_once(&el, &margin, move || play(&revealed, stage, 0));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_schedule_overlaps_each_stage_with_the_previous() {
        // 800ms greeting; description starts 400ms early; socials 300ms
        // before that chain ends; portrait 600ms before the socials end.
        assert_eq!(mount_schedule(HERO_TIMELINE), vec![0, 400, 700, 600]);
    }

    #[test]
    fn overlap_longer_than_elapsed_time_floors_at_zero() {
        let stages = [
            Transition {
                target: ".a",
                from: VisualState::hidden_y(10.0),
                to: VisualState::RESTING,
                duration_ms: 300,
                stagger_ms: 0,
                ease: Ease::Power2Out,
                trigger: Trigger::Mount { overlap_ms: 0 },
            },
            Transition {
                target: ".b",
                from: VisualState::hidden_y(10.0),
                to: VisualState::RESTING,
                duration_ms: 300,
                stagger_ms: 0,
                ease: Ease::Power2Out,
                trigger: Trigger::Mount { overlap_ms: 1_000 },
            },
        ];
        assert_eq!(mount_schedule(&stages), vec![0, 0]);
    }

    #[test]
    fn root_margin_pulls_the_bottom_edge_up_by_the_remainder() {
        assert_eq!(root_margin(85), "0px 0px -15% 0px");
        assert_eq!(root_margin(90), "0px 0px -10% 0px");
        assert_eq!(root_margin(100), "0px 0px 0% 0px");
        // Out-of-range percentages clamp instead of inverting the margin.
        assert_eq!(root_margin(120), "0px 0px 0% 0px");
    }

    #[test]
    fn transform_covers_translation_and_scale() {
        assert_eq!(
            VisualState::hidden_y(30.0).transform(),
            "translate(0px, 30px) scale(1)"
        );
        assert_eq!(
            VisualState::hidden_scale(0.8).transform(),
            "translate(0px, 0px) scale(0.8)"
        );
        assert_eq!(
            VisualState::RESTING.transform(),
            "translate(0px, 0px) scale(1)"
        );
    }

    #[test]
    fn reveal_tables_only_hold_viewport_triggers() {
        for stage in SCROLL_REVEALS {
            assert!(matches!(stage.trigger, Trigger::Viewport { .. }));
            if let Trigger::Viewport { viewport_pct, .. } = stage.trigger {
                assert!((50..=100).contains(&viewport_pct));
            }
        }
        for stage in HERO_TIMELINE.iter().chain(NAV_INTRO) {
            assert!(matches!(stage.trigger, Trigger::Mount { .. }));
        }
    }
}
