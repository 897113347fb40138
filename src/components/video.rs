use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct VideoProps {
    /// Fired once the first frame of the background video is decoded.
    #[prop_or_default]
    pub on_ready: Callback<Event>,
}

/// Looping background video of the villa. Muted so autoplay is allowed.
#[function_component(Video)]
pub fn video(props: &VideoProps) -> Html {
    html! {
        <video
            class="background-video"
            src={config::asset_url("videos/website.mp4")}
            autoplay=true
            muted=true
            loop=true
            playsinline=true
            onloadeddata={props.on_ready.clone()}
            aria-label="Vidéo de présentation de la Villa des K'ribean montrant l'extérieur et les environs"
        />
    }
}
