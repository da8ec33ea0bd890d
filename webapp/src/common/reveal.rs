use std::{cell::Cell, rc::Rc};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::{
    COUNTER_HIGHLIGHT_MS, COUNTER_START_DELAY_MS,
    counter::{CounterFrame, CounterTarget},
    viewport::{Reveal, RevealState, ScrollState},
};

use crate::common::dom;

const FRAME_MS: u32 = 16;

// use_reveal
//
// flips to true once the element with `id` has been mostly visible.  the check reruns on
// every published scroll state until it fires, then never again
pub fn use_reveal(id: String, reveal: Reveal, index: usize) -> ReadOnlySignal<bool> {
    let scroll = use_context::<Signal<ScrollState>>();
    let mut revealed = use_signal(|| false);
    let state = use_hook(|| Rc::new(Cell::new(RevealState::new(reveal, index))));

    use_effect(move || {
        let viewport_height = scroll.read().viewport_height;

        let mut current = state.get();
        if current.fired() {
            return;
        }

        let Some(rect) = dom::element_rect(&id) else {
            return;
        };

        let delay = current.poll(&rect, viewport_height);
        state.set(current);

        if let Some(delay) = delay {
            spawn(async move {
                if delay > 0 {
                    TimeoutFuture::new(delay).await;
                }
                revealed.set(true);
            });
        }
    });

    revealed.into()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterDisplay {
    pub frame: CounterFrame,
    pub highlighted: bool,
}

// use_counter
//
// counts a "250+" style stat up from zero the first time it is revealed.  text that is not
// a counter target is shown unchanged
pub fn use_counter(id: String, text: String) -> ReadOnlySignal<CounterDisplay> {
    let target = CounterTarget::parse(&text);
    let revealed = use_reveal(id, Reveal::DEFAULT, 0);

    let initial = match &target {
        Some(_) => CounterTarget::initial_text().to_owned(),
        None => text,
    };
    let mut display = use_signal(move || CounterDisplay {
        frame: CounterFrame {
            text: initial,
            scale: 1.0,
            done: false,
        },
        highlighted: false,
    });
    let started = use_hook(|| Rc::new(Cell::new(false)));

    use_effect(move || {
        if !revealed() || started.get() {
            return;
        }
        started.set(true);

        let Some(target) = target.clone() else {
            return;
        };

        spawn(async move {
            TimeoutFuture::new(COUNTER_START_DELAY_MS).await;
            display.write().highlighted = true;
            spawn(async move {
                TimeoutFuture::new(COUNTER_HIGHLIGHT_MS).await;
                display.write().highlighted = false;
            });

            let start = dom::now();
            loop {
                let frame = target.frame(dom::now() - start);
                let done = frame.done;
                display.write().frame = frame;

                if done {
                    break;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    });

    display.into()
}
