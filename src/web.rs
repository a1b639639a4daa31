//! Punto de entrada de la versión web (wasm32).

use crate::QuizApp;
use crate::config::QuizConfig;
use crate::data::read_questions_embedded;
use crate::fullscreen::DomFullscreen;
use crate::session::QuizSession;
use crate::store::{LocalStorageBackend, ProgressStore};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "the_canvas_id";

#[wasm_bindgen(start)]
pub fn start() {
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            log::error!("no se pudo arrancar el quiz: {e:?}");
        }
    });
}

async fn run() -> Result<(), JsValue> {
    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .ok_or_else(|| JsValue::from_str("no se encontró el canvas"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let questions =
        read_questions_embedded().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = QuizConfig::from_env();
    let session = QuizSession::new(
        questions,
        ProgressStore::new(LocalStorageBackend, config.storage_key),
    );

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |_cc| {
                Ok(Box::new(QuizApp::new(
                    session,
                    Box::new(DomFullscreen::new()),
                )))
            }),
        )
        .await
}
