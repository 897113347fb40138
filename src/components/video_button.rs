use yew::prelude::*;

use crate::hooks::overlay::OverlayHandle;

#[derive(Properties, PartialEq)]
pub struct VideoButtonProps {
    pub overlay: OverlayHandle,
}

/// Play button opening the presentation video overlay.
#[function_component(VideoButton)]
pub fn video_button(props: &VideoButtonProps) -> Html {
    html! {
        <button
            class="video-button"
            onclick={props.overlay.open()}
            aria-label="Voir la vidéo de présentation"
        >
            <svg xmlns="http://www.w3.org/2000/svg" height="24px" viewBox="0 -960 960 960" width="24px" fill="currentColor" aria-hidden="true">
                <path d="M320-200v-560l440 280-440 280Z"/>
            </svg>
            <span>{"Voir la vidéo"}</span>
        </button>
    }
}
