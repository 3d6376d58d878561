//! Browser drivers for the motion model in [`crate::core::motion`].
//!
//! Every hook hands back plain signals. On the server they keep their initial
//! values, so the HTML ships in the hidden start state and the hydrated client
//! plays the animations from there. Browser resources (observers, timers,
//! frame callbacks) live in local stored values owned by the calling
//! component and are released when it unmounts.

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::content::ChatMessage;
use crate::core::interaction::ChatFeed;
use crate::core::motion::{
    CountUp, MotionConfig, RevealPhase, Ticker, TickerConfig, Timeline, TriggerConfig, TypewriterConfig,
};

#[cfg(not(feature = "ssr"))]
use {
    crate::core::motion::{Cancel, RevealTrigger, TimerScope, Typewriter},
    gloo_timers::callback::Timeout,
    std::cell::{Cell, RefCell},
    std::rc::Rc,
    std::time::Duration,
    wasm_bindgen::closure::Closure,
};

/// Make the page's motion tuning available to every section
pub fn provide_motion_context(config: MotionConfig) {
    provide_context(config);
}

/// Motion tuning from context, or the defaults when none was provided
pub fn use_motion_config() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}

/// A timeline bound to the signal that plays it.
///
/// Once the last tween has had time to finish, the plan moves to
/// [`RevealPhase::Rested`] and drops its inline transition.
#[derive(Clone)]
pub struct RevealPlan {
    timeline: Timeline,
    phase: Signal<RevealPhase>,
}

impl RevealPlan {
    pub fn new(timeline: Timeline, revealed: impl Into<Signal<bool>>) -> Self {
        let revealed = revealed.into();
        let (rested, set_rested) = signal(false);

        #[cfg(not(feature = "ssr"))]
        {
            let rest_timer = StoredValue::new_local(None::<Timeout>);
            let millis = (timeline.end() * 1000.0).ceil() as u32;
            Effect::new(move |_| {
                if !revealed.get() || rest_timer.with_value(Option::is_some) {
                    return;
                }
                let handle = Timeout::new(millis, move || {
                    let _ = set_rested.try_set(true);
                });
                rest_timer.set_value(Some(handle));
            });
        }

        #[cfg(feature = "ssr")]
        let _ = set_rested;

        let phase = Signal::derive(move || {
            if rested.get() {
                RevealPhase::Rested
            } else if revealed.get() {
                RevealPhase::Playing
            } else {
                RevealPhase::Hidden
            }
        });

        Self { timeline, phase }
    }

    /// Reactive inline style for tween `index`
    pub fn style(&self, index: usize) -> impl Fn() -> String + Clone + Send + Sync + 'static + use<> {
        let hidden = self.timeline.style(index, RevealPhase::Hidden);
        let playing = self.timeline.style(index, RevealPhase::Playing);
        let rested = self.timeline.style(index, RevealPhase::Rested);
        let phase = self.phase;
        move || match phase.get() {
            RevealPhase::Hidden => hidden.clone(),
            RevealPhase::Playing => playing.clone(),
            RevealPhase::Rested => rested.clone(),
        }
    }
}

/// One-shot scroll trigger on `target`.
///
/// The returned signal flips to `true` once, the first time the element's top
/// edge crosses `trigger.start` of the viewport height, and never flips back.
/// A missing element skips registration.
pub fn use_reveal<E>(target: NodeRef<E>, trigger: TriggerConfig) -> ReadSignal<bool>
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let (revealed, set_revealed) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        let watcher = StoredValue::new_local(None::<ViewportObserver>);
        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if revealed.get_untracked() || watcher.with_value(Option::is_some) {
                return;
            }
            let element: web_sys::Element = element.unchecked_into();
            let fire = move || {
                let _ = set_revealed.try_set(true);
            };
            match ViewportObserver::watch(&element, trigger, fire) {
                Ok(observer) => watcher.set_value(observer),
                Err(err) => leptos::logging::warn!("reveal trigger skipped: {err:?}"),
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (target, trigger, set_revealed);

    revealed
}

/// Reveal that plays right after hydration instead of on scroll
pub fn use_reveal_on_mount() -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        // Two frames so the hidden state is painted before transitions start
        request_animation_frame(move || {
            request_animation_frame(move || {
                let _ = set_revealed.try_set(true);
            });
        });
    });

    #[cfg(feature = "ssr")]
    let _ = set_revealed;

    revealed
}

/// Text and caret state of a typewriter cycling through `lines`
pub fn use_typewriter(
    lines: &'static [&'static str],
    config: TypewriterConfig,
) -> (ReadSignal<String>, ReadSignal<bool>) {
    let (text, set_text) = signal(String::new());
    let (started, set_started) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        let timers = StoredValue::new_local(TimerScope::<Timeout>::new());
        Effect::new(move |_| {
            let machine = Rc::new(RefCell::new(Typewriter::new(lines, config)));
            let first = machine.borrow().start();
            if let Some(delay) = first {
                schedule_typewriter(timers, machine, delay, set_text, set_started);
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (lines, config, set_text, set_started);

    (text, started)
}

/// Chat messages revealed one by one at their scripted delays
pub fn use_chat_feed(messages: &'static [ChatMessage]) -> ReadSignal<ChatFeed> {
    let (feed, set_feed) = signal(ChatFeed::new());

    #[cfg(not(feature = "ssr"))]
    {
        let timers = StoredValue::new_local(TimerScope::<Timeout>::new());
        Effect::new(move |_| {
            let Some(liveness) = timers.try_with_value(TimerScope::liveness) else {
                return;
            };
            for message in messages.iter().copied() {
                let liveness = liveness.clone();
                let handle = Timeout::new(message.delay_ms, move || {
                    if liveness.is_alive() {
                        set_feed.try_update(|feed| feed.push(message));
                    }
                });
                timers.update_value(|scope| scope.track(message.id, handle));
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (messages, set_feed);

    feed
}

/// Inline style of a looping ticker container holding `item_count` rows
pub fn use_ticker(config: TickerConfig, item_count: usize) -> ReadSignal<String> {
    let ticker = Ticker::new(config, item_count);
    let (style, set_style) = signal(ticker.style_at(0.0));

    #[cfg(not(feature = "ssr"))]
    {
        let frames = StoredValue::new_local(None::<FrameLoop>);
        let delay = StoredValue::new_local(None::<Timeout>);
        Effect::new(move |_| {
            let start = Timeout::new(config.start_delay_ms, move || {
                let frame_loop = FrameLoop::start(move |elapsed| {
                    set_style.try_set(ticker.style_at(elapsed)).is_none()
                });
                let _ = frames.try_update_value(|slot| *slot = frame_loop);
            });
            delay.set_value(Some(start));
        });
    }

    #[cfg(feature = "ssr")]
    let _ = set_style;

    style
}

/// Label counting up to `count.target` once `revealed` turns true
pub fn use_count_up(count: CountUp, revealed: ReadSignal<bool>) -> ReadSignal<String> {
    let (label, set_label) = signal(count.initial_label());

    #[cfg(not(feature = "ssr"))]
    {
        let frames = StoredValue::new_local(None::<FrameLoop>);
        Effect::new(move |_| {
            if !revealed.get() || frames.with_value(Option::is_some) {
                return;
            }
            let frame_loop = FrameLoop::start(move |elapsed| {
                let mounted = set_label.try_set(count.label_at(elapsed)).is_none();
                mounted && !count.is_finished(elapsed)
            });
            frames.set_value(frame_loop);
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (revealed, set_label);

    label
}

// ============================================================================
// Browser resources
// ============================================================================

#[cfg(not(feature = "ssr"))]
impl Cancel for Timeout {
    fn cancel(self) {
        // Dropping clears the pending timeout
        drop(self);
    }
}

#[cfg(not(feature = "ssr"))]
const TYPEWRITER_TIMER: u32 = 0;

#[cfg(not(feature = "ssr"))]
fn schedule_typewriter(
    timers: StoredValue<TimerScope<Timeout>, LocalStorage>,
    machine: Rc<RefCell<Typewriter>>,
    wait: Duration,
    set_text: WriteSignal<String>,
    set_started: WriteSignal<bool>,
) {
    let Some(liveness) = timers.try_with_value(TimerScope::liveness) else {
        return;
    };
    let millis = u32::try_from(wait.as_millis()).unwrap_or(u32::MAX);
    let handle = Timeout::new(millis, move || {
        if !liveness.is_alive() {
            return;
        }
        let next = machine.borrow_mut().step();
        let (shown, has_started) = {
            let machine = machine.borrow();
            (machine.text().to_string(), machine.has_started())
        };
        let _ = set_text.try_set(shown);
        let _ = set_started.try_set(has_started);
        if let Some(wait) = next {
            schedule_typewriter(timers, machine, wait, set_text, set_started);
        }
    });
    let _ = timers.try_update_value(|scope| scope.track(TYPEWRITER_TIMER, handle));
}

#[cfg(not(feature = "ssr"))]
fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// IntersectionObserver feeding a [`RevealTrigger`]; disconnects on drop
#[cfg(not(feature = "ssr"))]
struct ViewportObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(not(feature = "ssr"))]
impl ViewportObserver {
    /// Start watching `element`. Returns `Ok(None)` when the element is
    /// already past the start line, in which case `fire` has already run.
    fn watch(
        element: &web_sys::Element,
        config: TriggerConfig,
        fire: impl Fn() + 'static,
    ) -> Result<Option<Self>, wasm_bindgen::JsValue> {
        let mut trigger = RevealTrigger::new(config);
        if trigger.observe(element.get_bounding_client_rect().top(), viewport_height()) {
            fire();
            return Ok(None);
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let height = viewport_height();
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if trigger.observe(entry.bounding_client_rect().top(), height) {
                        fire();
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(&config.root_margin());
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.0));
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(element);

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// requestAnimationFrame loop calling `tick(seconds_since_first_frame)`
/// until it returns `false` or the loop is dropped
#[cfg(not(feature = "ssr"))]
struct FrameLoop {
    request: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

#[cfg(not(feature = "ssr"))]
impl FrameLoop {
    fn start(mut tick: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let request = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let next_request = request.clone();
        let next_callback = callback.clone();
        let mut origin = None;
        let closure = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            next_request.set(None);
            let start = *origin.get_or_insert(now);
            if !tick((now - start) / 1000.0) {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Ok(slot) = next_callback.try_borrow() {
                if let Some(cb) = slot.as_ref() {
                    next_request.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }
        });

        request.set(window.request_animation_frame(closure.as_ref().unchecked_ref()).ok());
        *callback.borrow_mut() = Some(closure);
        Some(Self { request, callback })
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.request.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        // The closure holds a handle to its own slot
        if let Ok(mut slot) = self.callback.try_borrow_mut() {
            slot.take();
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::motion::{Ease, Position, VisualState};

    #[test]
    fn test_motion_config_falls_back_to_default() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_motion_config(), MotionConfig::default());

            let mut tuned = MotionConfig::default();
            tuned.count_up = 3.5;
            provide_motion_context(tuned);
            assert_eq!(use_motion_config().count_up, 3.5);
        });
    }

    #[test]
    fn test_reveal_plan_switches_styles() {
        let owner = Owner::new();
        owner.with(|| {
            let timeline = Timeline::new().add(VisualState::below(40.0), 1.0, Ease::Power3Out, Position::End);
            let (revealed, set_revealed) = signal(false);
            let plan = RevealPlan::new(timeline.clone(), revealed);
            let style = plan.style(0);

            assert_eq!(style(), timeline.style(0, RevealPhase::Hidden));
            set_revealed.set(true);
            assert_eq!(style(), timeline.style(0, RevealPhase::Playing));
            assert_eq!(plan.style(5)(), "");
        });
    }

    #[test]
    fn test_reveal_styles_outlive_their_plan() {
        let owner = Owner::new();
        owner.with(|| {
            let (revealed, set_revealed) = signal(false);
            let style = {
                let plan = RevealPlan::new(
                    Timeline::new().add(VisualState::below(30.0), 0.5, Ease::Power3Out, Position::End),
                    revealed,
                );
                plan.style(0)
            };
            assert!(style().contains("transition: none;"));
            set_revealed.set(true);
            assert!(style().contains("transition: opacity"));
        });
    }

    #[test]
    fn test_server_hooks_stay_in_initial_state() {
        let owner = Owner::new();
        owner.with(|| {
            let revealed = use_reveal_on_mount();
            assert!(!revealed.get_untracked());

            let (text, started) = use_typewriter(&["hello"], TypewriterConfig::default());
            assert_eq!(text.get_untracked(), "");
            assert!(!started.get_untracked());

            let count = use_count_up(CountUp::new(95, true), revealed);
            assert_eq!(count.get_untracked(), "0%");

            let style = use_ticker(TickerConfig::default(), 6);
            assert!(style.get_untracked().contains("translate3d(0, 0px, 0)"));
        });
    }
}
