use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AroundCardProps {
    #[prop_or_default]
    pub link: AttrValue,
    #[prop_or_default]
    pub image: AttrValue,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub text: AttrValue,
    #[prop_or_default]
    pub distance: AttrValue,
}

/// Card pointing at a place of interest near the villa. Pure function of its
/// props; a missing prop renders empty rather than failing.
#[function_component(AroundCard)]
pub fn around_card(props: &AroundCardProps) -> Html {
    html! {
        <a href={props.link.clone()}>
            <div class="around-card">
                <div class="around-card-image">
                    <img src={props.image.clone()} alt={props.title.clone()} />
                </div>
                <div class="around-card-content">
                    <div class="around-card-title">
                        <h4>{ props.title.clone() }</h4>
                    </div>
                    <div class="around-text">
                        <p>{ props.text.clone() }</p>
                    </div>
                    <div class="around-distance">
                        <p>{ props.distance.clone() }</p>
                    </div>
                </div>
            </div>
        </a>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn mount(props: AroundCardProps) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<AroundCard>::with_root_and_props(root.clone(), props).render();
        gloo_timers::future::TimeoutFuture::new(20).await;
        root
    }

    #[wasm_bindgen_test]
    async fn renders_props_verbatim() {
        let root = mount(AroundCardProps {
            link: "https://example.com/plage".into(),
            image: "/assets/images/plage.jpg".into(),
            title: "Plage de l'Autre Bord".into(),
            text: "Sable doré bordé de cocotiers".into(),
            distance: "à 5 min".into(),
        })
        .await;

        let anchor = root.query_selector("a").unwrap().unwrap();
        assert_eq!(
            anchor.get_attribute("href").unwrap(),
            "https://example.com/plage"
        );

        let text = root.text_content().unwrap();
        assert!(text.contains("Plage de l'Autre Bord"));
        assert!(text.contains("Sable doré bordé de cocotiers"));
        assert!(text.contains("à 5 min"));
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn missing_props_render_empty() {
        let root = mount(AroundCardProps::default()).await;
        let title = root.query_selector("h4").unwrap().unwrap();
        assert_eq!(title.text_content().unwrap(), "");
        root.remove();
    }
}
