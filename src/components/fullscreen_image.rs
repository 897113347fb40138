use web_sys::EventTarget;
use yew::prelude::*;

use crate::config;
use crate::hooks::overlay::OverlayHandle;

#[derive(Properties, PartialEq)]
pub struct FullScreenImageProps {
    pub overlay: OverlayHandle,
    /// Image currently on display. Which image that is lives with the
    /// parent; the overlay only renders what it is given.
    pub image: AttrValue,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

/// Full-screen photo viewer. Same closing contract as the video overlay,
/// with previous/next arrows forwarded verbatim to the parent. Clicking the
/// photo itself advances to the next one.
#[function_component(FullScreenImage)]
pub fn full_screen_image(props: &FullScreenImageProps) -> Html {
    let backdrop = use_node_ref();

    let on_backdrop_click = {
        let backdrop = backdrop.clone();
        let close = props.overlay.close();
        Callback::from(move |event: MouseEvent| {
            let hit_backdrop = match (event.target(), backdrop.get()) {
                (Some(target), Some(node)) => target == EventTarget::from(node),
                _ => false,
            };
            if hit_backdrop {
                close.emit(event);
            }
        })
    };

    html! {
        <div class="full-screen-image" ref={backdrop} onclick={on_backdrop_click}>
            <div class="full-screen-image-content">
                <div class="screen-close">
                    <button onclick={props.overlay.close()} aria-label="Fermer">
                        <img src={config::asset_url("images/close.svg")} alt="Fermer" />
                    </button>
                </div>
                <button
                    class="arrow-btn arrow-left"
                    onclick={props.on_prev.clone()}
                    aria-label="Précédent"
                >
                    <svg width="30" height="30" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                        <path d="M15 18l-6-6 6-6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                    </svg>
                </button>
                <img
                    src={props.image.clone()}
                    alt="Photo de la villa en plein écran"
                    class="full-screen-image-img"
                    onclick={props.on_next.clone()}
                />
                <button
                    class="arrow-btn arrow-right"
                    onclick={props.on_next.clone()}
                    aria-label="Suivant"
                >
                    <svg width="30" height="30" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                        <path d="M9 6l6 6-6 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                    </svg>
                </button>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::hooks::overlay::use_overlay;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const GALLERY: [&str; 3] = ["/a.jpg", "/b.jpg", "/c.jpg"];

    #[function_component(Harness)]
    fn harness() -> Html {
        let overlay = use_overlay();
        let index = use_state(|| 0usize);

        let on_prev = {
            let index = index.clone();
            Callback::from(move |_| index.set((*index + GALLERY.len() - 1) % GALLERY.len()))
        };
        let on_next = {
            let index = index.clone();
            Callback::from(move |_| index.set((*index + 1) % GALLERY.len()))
        };

        html! {
            <div>
                <button id="show" onclick={overlay.open()}>{"show"}</button>
                if overlay.is_open() {
                    <FullScreenImage
                        overlay={overlay.clone()}
                        image={GALLERY[*index]}
                        {on_prev}
                        {on_next}
                    />
                }
            </div>
        }
    }

    async fn mount() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Harness>::with_root(root.clone()).render();
        gloo_timers::future::TimeoutFuture::new(20).await;
        root
    }

    async fn click(root: &web_sys::Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .unchecked_into::<HtmlElement>()
            .click();
        gloo_timers::future::TimeoutFuture::new(20).await;
    }

    fn shown_image(root: &web_sys::Element) -> String {
        root.query_selector(".full-screen-image-img")
            .unwrap()
            .unwrap()
            .get_attribute("src")
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn navigation_is_forwarded_to_the_parent() {
        let root = mount().await;
        click(&root, "#show").await;
        assert_eq!(shown_image(&root), "/a.jpg");

        click(&root, ".arrow-right").await;
        assert_eq!(shown_image(&root), "/b.jpg");

        click(&root, ".arrow-left").await;
        assert_eq!(shown_image(&root), "/a.jpg");

        // wrap-around lives in the parent, the overlay just forwards
        click(&root, ".arrow-left").await;
        assert_eq!(shown_image(&root), "/c.jpg");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn arrow_clicks_do_not_close_the_overlay() {
        let root = mount().await;
        click(&root, "#show").await;
        click(&root, ".arrow-right").await;
        assert!(root.query_selector(".full-screen-image").unwrap().is_some());

        click(&root, ".full-screen-image").await;
        assert!(root.query_selector(".full-screen-image").unwrap().is_none());
        root.remove();
    }
}
