use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::{
    LIGHTBOX_CLOSE_DELAY_MS, LIGHTBOX_OPEN_DELAY_MS,
    lightbox::{Lightbox, LightboxContent},
};

// LIGHTBOX
//
// every section opens its enlarged view through here.  the overlay itself is rendered once,
// by LightboxHost at the top of the app
pub static LIGHTBOX: GlobalSignal<Lightbox> = Signal::global(Lightbox::new);

pub fn open_lightbox(content: LightboxContent) {
    let generation = LIGHTBOX.write().open(content);

    spawn(async move {
        TimeoutFuture::new(LIGHTBOX_OPEN_DELAY_MS).await;
        LIGHTBOX.write().reveal(generation);
    });
}

pub fn close_lightbox() {
    let Some(generation) = LIGHTBOX.write().close() else {
        return;
    };

    spawn(async move {
        TimeoutFuture::new(LIGHTBOX_CLOSE_DELAY_MS).await;
        LIGHTBOX.write().remove(generation);
    });
}
