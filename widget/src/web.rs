//! Entry point for the browser: set up logging, then fill in the cards once.
use log::MakeConsoleWriter;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::{dom::DomPage, reading::predict::PredictApi, Dashboard, Settings};

#[wasm_bindgen(start)]
fn run() {
    tracing_subscriber::fmt::fmt()
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .init();

    let dashboard: Dashboard = Settings::default().into();
    spawn_local(async move {
        let mut page = match DomPage::new() {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("cannot show AQI cards: {e}");
                return;
            }
        };
        let source = PredictApi::new(dashboard.settings().base_url.as_str());
        dashboard.refresh(&mut page, &source).await;
    });
}

mod log {
    //! Log output to the browser console.
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Writes each formatted event as one console line.
    pub struct MakeConsoleWriter;

    impl MakeWriter<'_> for MakeConsoleWriter {
        type Writer = MakeConsoleWriter;

        fn make_writer(&'_ self) -> Self::Writer {
            MakeConsoleWriter
        }
    }

    impl std::io::Write for MakeConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let s = core::str::from_utf8(buf)
                .map(|s| JsValue::from_str(s.trim_end()))
                .unwrap_or_else(|_| {
                    JsValue::from_str(&format!("non-string log message: {:?}", buf))
                });
            web_sys::console::log_1(&s);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
