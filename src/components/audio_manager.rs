//! Audio Manager - owns the single media element and feeds its events back
//! into the shared player outside of the render cycle.

use crate::components::SharedPlayer;
use crate::error::Result;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_channel::mpsc::unbounded;
use futures_util::StreamExt;

#[cfg(target_arch = "wasm32")]
use crate::error::PlayerError;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use futures_channel::mpsc::UnboundedSender;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, KeyboardEvent};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "shared-player-audio";

/// Media element clock, kept apart from the player record so progress
/// updates do not churn the persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AudioState {
    /// Seconds; 0 until metadata is loaded.
    pub duration: f64,
}

/// Something the media element or the page reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    TimeUpdate { time: f64, duration: f64 },
    MetadataLoaded { duration: f64 },
    Ended,
    SaveTick,
    Shortcut(Shortcut),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlay,
    Next,
    Previous,
}

/// Get the page's audio element, creating it on first use.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
pub fn load_source(src: &str) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_src(src);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_source(_src: &str) {}

/// Ask the media element to start. Resolves once the browser accepted or
/// refused (autoplay policy, unsupported source).
#[cfg(target_arch = "wasm32")]
pub async fn start_playback() -> Result<()> {
    let audio = get_or_create_audio_element()
        .ok_or_else(|| PlayerError::Playback("no audio element".to_string()))?;
    let promise = audio
        .play()
        .map_err(|e| PlayerError::Playback(format!("{e:?}")))?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| PlayerError::Playback(format!("{e:?}")))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn start_playback() -> Result<()> {
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn pause_playback() {
    if let Some(audio) = get_or_create_audio_element() {
        let _ = audio.pause();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn pause_playback() {}

#[cfg(target_arch = "wasm32")]
pub fn seek_to(position: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(position);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(_position: f64) {}

#[cfg(target_arch = "wasm32")]
pub fn apply_volume(volume: f64, muted: bool) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_volume(volume.clamp(0.0, 1.0));
        audio.set_muted(muted);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_volume(_volume: f64, _muted: bool) {}

#[cfg(target_arch = "wasm32")]
fn known_duration(audio: &HtmlAudioElement) -> Option<f64> {
    let duration = audio.duration();
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

#[cfg(target_arch = "wasm32")]
fn is_editable_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element
            .get_attribute("contenteditable")
            .is_some_and(|v| !v.eq_ignore_ascii_case("false"))
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn shortcut_from_key(event: &KeyboardEvent) -> Option<Shortcut> {
    if event.default_prevented() || event.is_composing() || is_editable_target(event) {
        return None;
    }

    match event.key().as_str() {
        "MediaTrackNext" | "MediaNextTrack" => Some(Shortcut::Next),
        "MediaTrackPrevious" | "MediaPreviousTrack" => Some(Shortcut::Previous),
        "MediaPlayPause" => Some(Shortcut::TogglePlay),
        " " | "Spacebar" if !event.meta_key() && !event.ctrl_key() && !event.alt_key() => {
            Some(Shortcut::TogglePlay)
        }
        _ => None,
    }
}

/// Wire media element and page listeners to `events`.
#[cfg(target_arch = "wasm32")]
fn attach_listeners(player: SharedPlayer, events: UnboundedSender<MediaEvent>) {
    let Some(audio) = get_or_create_audio_element() else {
        return;
    };

    let tx = events.clone();
    let time_cb = Closure::wrap(Box::new(move || {
        if let Some(audio) = get_or_create_audio_element() {
            if let Some(duration) = known_duration(&audio) {
                let _ = tx.unbounded_send(MediaEvent::TimeUpdate {
                    time: audio.current_time(),
                    duration,
                });
            }
        }
    }) as Box<dyn FnMut()>);
    audio.set_ontimeupdate(Some(time_cb.as_ref().unchecked_ref()));
    time_cb.forget();

    let tx = events.clone();
    let meta_cb = Closure::wrap(Box::new(move || {
        if let Some(duration) = get_or_create_audio_element().and_then(|a| known_duration(&a)) {
            let _ = tx.unbounded_send(MediaEvent::MetadataLoaded { duration });
        }
    }) as Box<dyn FnMut()>);
    audio.set_onloadedmetadata(Some(meta_cb.as_ref().unchecked_ref()));
    meta_cb.forget();

    let tx = events.clone();
    let end_cb = Closure::wrap(Box::new(move || {
        let _ = tx.unbounded_send(MediaEvent::Ended);
    }) as Box<dyn FnMut()>);
    audio.set_onended(Some(end_cb.as_ref().unchecked_ref()));
    end_cb.forget();

    let Some(win) = window() else {
        return;
    };

    let tx = events;
    let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if let Some(shortcut) = shortcut_from_key(&e) {
            e.prevent_default();
            let _ = tx.unbounded_send(MediaEvent::Shortcut(shortcut));
        }
    }) as Box<dyn FnMut(_)>);
    let _ = win.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
    key_cb.forget();

    // The page may be gone before any task runs again, so this save is synchronous.
    let runtime = Runtime::current();
    let unload_cb = Closure::wrap(Box::new(move || {
        let _guard = RuntimeGuard::new(runtime.clone());
        player.persist();
    }) as Box<dyn FnMut()>);
    let _ =
        win.add_event_listener_with_callback("beforeunload", unload_cb.as_ref().unchecked_ref());
    unload_cb.forget();
}

#[cfg(target_arch = "wasm32")]
fn spawn_save_timer(interval_ms: u32, events: UnboundedSender<MediaEvent>) {
    spawn(async move {
        let mut ticks = gloo_timers::future::IntervalStream::new(interval_ms);
        while ticks.next().await.is_some() {
            if events.unbounded_send(MediaEvent::SaveTick).is_err() {
                break;
            }
        }
    });
}

/// Mounts once per page: rehydrates the session, attaches listeners and
/// drains media events into the shared player.
#[component]
pub fn AudioController() -> Element {
    let player = use_context::<SharedPlayer>();

    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    let events = use_hook(move || {
        let (tx, mut rx) = unbounded::<MediaEvent>();
        spawn(async move {
            while let Some(event) = rx.next().await {
                player.handle_media_event(event);
            }
        });
        tx
    });

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            attach_listeners(player, events.clone());
            spawn_save_timer(player.config().save_interval_ms, events.clone());
        }

        {
            let state = player.state.peek();
            apply_volume(state.volume(), state.is_muted());
        }
        player.restore();
        debug!("audio controller mounted");
    });

    rsx! {}
}
