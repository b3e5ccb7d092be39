//! Camera QR scanner backed by html5-qrcode (see `js/interop.js`).

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub const CAMERA_DENIED: &str = "Camera access denied. Please enable camera permissions.";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = startQrScanner, catch)]
    fn start_qr_scanner(
        element_id: &str,
        on_decode: &Closure<dyn FnMut(String)>,
        on_error: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = stopQrScanner)]
    fn stop_qr_scanner(element_id: &str);
}

type ScannerClosures = (Closure<dyn FnMut(String)>, Closure<dyn FnMut(JsValue)>);

/// Square camera viewport; every decoded payload goes to `on_decode`.
#[component]
pub fn QrScanner(
    /// DOM id of the viewport, unique per mounted scanner
    element_id: &'static str,
    on_decode: Callback<String>,
    /// Set when the camera cannot be started
    camera_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let closures = StoredValue::new_local(None::<ScannerClosures>);

    Effect::new(move |_| {
        if node_ref.get().is_none() || closures.with_value(Option::is_some) {
            return;
        }
        let decode = Closure::<dyn FnMut(String)>::new(move |raw: String| on_decode.run(raw));
        let error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            log::error!("Camera error: {:?}", err);
            camera_error.set(Some(CAMERA_DENIED.to_string()));
        });
        if let Err(err) = start_qr_scanner(element_id, &decode, &error) {
            log::error!("Failed to start scanner: {:?}", err);
            camera_error.set(Some(CAMERA_DENIED.to_string()));
        }
        closures.set_value(Some((decode, error)));
    });

    on_cleanup(move || stop_qr_scanner(element_id));

    view! { <div class="qr-scanner" id=element_id node_ref=node_ref></div> }
}
