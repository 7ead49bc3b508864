//! # Camera scanner — the decode source feeding the scan session
//!
//! The component owns the camera for its lifetime: `getUserMedia` with the
//! rear-facing camera preferred, frames sampled off the live video onto an
//! offscreen canvas, grayscale conversion, and `rqrr` decoding. The first
//! decoded payload fires `on_decode` and ends the loop; a camera acquisition
//! failure fires `on_error` with the opaque detail. The scan session applies
//! its own first-wins and cycle rules on top of these events.
//!
//! Media tracks are stopped when the component unmounts, which also tears
//! down the frame loop. On native targets there is no camera backend and the
//! component reports failure immediately.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
        MediaStreamConstraints, MediaStreamTrack, MediaTrackConstraints,
    };

    pub const VIDEO_ID: &str = "scanner-video";
    pub const FRAME_INTERVAL_MS: u64 = 150;

    pub async fn acquire_camera() -> Result<MediaStream, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let devices = window.navigator().media_devices()?;

        let track = MediaTrackConstraints::new();
        track.set_facing_mode(&JsValue::from_str("environment"));
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&track.into());

        let promise = devices.get_user_media_with_constraints(&constraints)?;
        let stream = wasm_bindgen_futures::JsFuture::from(promise).await?;
        stream
            .dyn_into::<MediaStream>()
            .map_err(|_| JsValue::from_str("unexpected getUserMedia result"))
    }

    pub fn video_element() -> Option<HtmlVideoElement> {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(VIDEO_ID)?.dyn_into().ok()
    }

    pub fn make_canvas() -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement =
            document.create_element("canvas").ok()?.dyn_into().ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some((canvas, ctx))
    }

    /// Sample the current video frame and try to decode a QR code from it.
    pub fn decode_frame(
        video: &HtmlVideoElement,
        canvas: &HtmlCanvasElement,
        ctx: &CanvasRenderingContext2d,
    ) -> Option<String> {
        let width = video.video_width();
        let height = video.video_height();
        if width == 0 || height == 0 {
            // Stream not delivering frames yet
            return None;
        }

        canvas.set_width(width);
        canvas.set_height(height);
        ctx.draw_image_with_html_video_element(video, 0.0, 0.0).ok()?;
        let frame = ctx
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .ok()?;
        let rgba = frame.data();

        let (width, height) = (width as usize, height as usize);
        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| {
                let i = (y * width + x) * 4;
                let r = rgba[i] as u32;
                let g = rgba[i + 1] as u32;
                let b = rgba[i + 2] as u32;
                ((r * 299 + g * 587 + b * 114) / 1000) as u8
            });

        let grids = prepared.detect_grids();
        let grid = grids.first()?;
        match grid.decode() {
            Ok((_, content)) if !content.is_empty() => Some(content),
            Ok(_) => None,
            Err(err) => {
                tracing::trace!("frame decode failed: {err:?}");
                None
            }
        }
    }

    pub fn stop_tracks(stream: &MediaStream) {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

/// Live camera view that reports the first decoded QR payload.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn CameraScanner(
    on_decode: EventHandler<String>,
    on_error: EventHandler<String>,
) -> Element {
    let mut stream = use_signal(|| None::<web_sys::MediaStream>);

    use_future(move || async move {
        let media = match web::acquire_camera().await {
            Ok(media) => media,
            Err(err) => {
                tracing::debug!("camera acquisition failed: {err:?}");
                on_error.call(format!("{err:?}"));
                return;
            }
        };

        let Some(video) = web::video_element() else {
            web::stop_tracks(&media);
            on_error.call("scanner video element missing".to_string());
            return;
        };
        video.set_src_object(Some(&media));
        let _ = video.play();
        stream.set(Some(media));

        let Some((canvas, ctx)) = web::make_canvas() else {
            on_error.call("canvas 2d context unavailable".to_string());
            return;
        };

        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(
                web::FRAME_INTERVAL_MS,
            ))
            .await;
            if let Some(raw) = web::decode_frame(&video, &canvas, &ctx) {
                on_decode.call(raw);
                break;
            }
        }
    });

    use_drop(move || {
        if let Some(media) = stream() {
            web::stop_tracks(&media);
        }
    });

    rsx! {
        video {
            id: web::VIDEO_ID,
            class: "scanner-video",
            autoplay: true,
            muted: true,
            "playsinline": "true",
        }
    }
}

/// Native build of the scanner: there is no camera backend, so the scan
/// session hears about it as a scanner failure right away.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn CameraScanner(
    on_decode: EventHandler<String>,
    on_error: EventHandler<String>,
) -> Element {
    let _ = on_decode;
    use_effect(move || {
        on_error.call("camera capture is only available in the browser".to_string())
    });

    rsx! {
        div { class: "scanner-video scanner-placeholder" }
    }
}
