use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::config;
use crate::i18n::{translate, Locale};
use crate::screen::SizeClass;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroTypography {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl IntroTypography {
    pub fn for_size_class(size_class: SizeClass) -> Self {
        match size_class {
            SizeClass::Mobile => Self {
                title: "2rem",
                subtitle: "1rem",
            },
            SizeClass::Tablet => Self {
                title: "3rem",
                subtitle: "1.25rem",
            },
            SizeClass::Desktop => Self {
                title: "4rem",
                subtitle: "1.5rem",
            },
        }
    }
}

/// The `muted` attribute only mutes parser-created media, so a script-built
/// video has to be muted through the property before autoplay will run.
fn start_muted_playback(video: &HtmlMediaElement) {
    video.set_muted(true);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::warn!("Intro video did not start: {:?}", err);
            }
        }),
        Err(err) => log::warn!("Intro video did not start: {:?}", err),
    }
}

#[derive(Properties, PartialEq)]
pub struct IntroProps {
    pub size_class: SizeClass,
    pub locale: Locale,
}

#[function_component(Intro)]
pub fn intro(props: &IntroProps) -> Html {
    let typography = IntroTypography::for_size_class(props.size_class);
    let locale = props.locale;
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                match video_ref.cast::<HtmlMediaElement>() {
                    Some(video) => start_muted_playback(&video),
                    None => log::warn!("Intro video element missing"),
                }
                || ()
            },
            (),
        );
    }

    html! {
        <section id="intro" class="intro">
            <style>
                {r#"
                    .intro {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        color: #fff;
                        text-align: center;
                    }
                    .intro-video {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        overflow: hidden;
                        z-index: -3;
                        filter: brightness(0.85);
                    }
                    .intro-video video {
                        object-fit: cover;
                        width: 100%;
                        height: 100%;
                    }
                    .intro-content {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 24px;
                        box-sizing: border-box;
                        max-width: 1200px;
                        height: 100%;
                        margin: 0 auto;
                        padding: 25vh 16px 0;
                    }
                    .intro-title {
                        margin: 0;
                        font-weight: bold;
                        text-shadow: 0 0 16px var(--off-black);
                    }
                    .intro-subtitle {
                        margin: 0;
                        letter-spacing: 2px;
                        font-weight: 200;
                        text-shadow: 0 0 16px var(--off-black);
                    }
                "#}
            </style>
            <div class="intro-video">
                <video ref={video_ref} autoplay=true loop=true muted=true playsinline=true>
                    <source src={config::INTRO_VIDEO_SRC} type={config::INTRO_VIDEO_TYPE} />
                    {translate(locale, "intro.noVideo")}
                </video>
            </div>
            <div class="intro-content">
                <h1 class="intro-title" style={format!("font-size: {};", typography.title)}>
                    {translate(locale, "intro.title")}
                </h1>
                <p class="intro-subtitle" style={format!("font-size: {};", typography.subtitle)}>
                    {translate(locale, "intro.subtitle")}
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_scales_by_size_class() {
        let mobile = IntroTypography::for_size_class(SizeClass::Mobile);
        let tablet = IntroTypography::for_size_class(SizeClass::Tablet);
        let desktop = IntroTypography::for_size_class(SizeClass::Desktop);
        assert_eq!((mobile.title, mobile.subtitle), ("2rem", "1rem"));
        assert_eq!((tablet.title, tablet.subtitle), ("3rem", "1.25rem"));
        assert_eq!((desktop.title, desktop.subtitle), ("4rem", "1.5rem"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn script_created_video_ends_up_muted() {
        let document = web_sys::window().unwrap().document().unwrap();
        let video: HtmlMediaElement = document
            .create_element("video")
            .unwrap()
            .dyn_into()
            .unwrap();
        video.set_attribute("muted", "").unwrap();
        assert!(!video.muted());

        start_muted_playback(&video);
        assert!(video.muted());
    }
}
