// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search widget.
//!
//! This is the browser-facing API. The page owns the DOM; it hands us a host
//! object with a handful of methods over its three mount points (input box,
//! results list, widget root) and forwards events to us.
//!
//! # Usage
//!
//! ```js
//! const host = {
//!     clearResults: () => { resList.innerHTML = ''; },
//!     appendResult: (html, entry) => resList.insertAdjacentHTML('beforeend', html),
//!     setFocusMarker: (i) => markFocused(resList, i),      // i undefined = none
//!     focusInput: () => sInput.focus(),
//!     focusLink: (i) => resList.children[i].querySelector('a').focus(),
//!     activateLink: (i) => resList.children[i].querySelector('a').click(),
//!     clearInput: () => { sInput.value = ''; },
//!     focusWithinWidget: () => searchbox.contains(document.activeElement),
//! };
//!
//! const widget = new FastSearch(host, params, window.location.href);
//! widget.load();                                       // fire and forget
//! sInput.onkeyup = () => widget.onInput(sInput.value);
//! sInput.addEventListener('search', () => widget.onSearch(sInput.value));
//! document.onkeydown = (e) => { if (widget.onKeydown(e.key)) e.preventDefault(); };
//! ```
//!
//! # Host callbacks
//!
//! Page updates are queued while the widget runs and replayed on the host
//! after it has released its state, and `focusWithinWidget` is asked before
//! the widget runs. A host method may therefore call back into the widget,
//! e.g. an `activateLink` that dispatches a synthetic keydown. A call that
//! still finds the widget busy is ignored: `onInput` returns 0 and
//! `onKeydown` returns false.

use crate::config::WidgetConfig;
use crate::controller::SearchController;
use crate::loader::{self, CorpusSource};
use crate::types::{CorpusDocument, Key};
use crate::view::{QueuedView, ViewOp};
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::RefCell;
use std::rc::Rc;
use url::Url;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Page-side object that owns the widget's DOM mount points.
    pub type SearchHost;

    #[wasm_bindgen(method, js_name = clearResults)]
    fn clear_results(this: &SearchHost);

    #[wasm_bindgen(method, js_name = appendResult)]
    fn append_result(this: &SearchHost, html: &str, entry: JsValue);

    #[wasm_bindgen(method, js_name = setFocusMarker)]
    fn set_focus_marker(this: &SearchHost, index: Option<u32>);

    #[wasm_bindgen(method, js_name = focusInput)]
    fn focus_input(this: &SearchHost);

    #[wasm_bindgen(method, js_name = focusLink)]
    fn focus_link(this: &SearchHost, index: u32);

    #[wasm_bindgen(method, js_name = activateLink)]
    fn activate_link(this: &SearchHost, index: u32);

    #[wasm_bindgen(method, js_name = clearInput)]
    fn clear_input(this: &SearchHost);

    #[wasm_bindgen(method, js_name = focusWithinWidget)]
    fn focus_within_widget(this: &SearchHost) -> bool;

    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(message: &str);
}

/// Replay queued updates against the page.
fn apply(host: &SearchHost, ops: Vec<ViewOp>) {
    for op in ops {
        match op {
            ViewOp::ClearResults => host.clear_results(),
            ViewOp::AppendResult(entry) => {
                let js_entry = to_value(&entry).unwrap_or(JsValue::UNDEFINED);
                host.append_result(&entry.to_html(), js_entry);
            }
            ViewOp::SetFocusMarker(index) => host.set_focus_marker(index.map(|i| i as u32)),
            ViewOp::FocusInput => host.focus_input(),
            ViewOp::FocusLink(index) => host.focus_link(index as u32),
            ViewOp::ActivateLink(index) => host.activate_link(index as u32),
            ViewOp::ClearInput => host.clear_input(),
        }
    }
}

/// The search widget, one per page.
#[wasm_bindgen]
pub struct FastSearch {
    host: SearchHost,
    controller: Rc<RefCell<SearchController<QueuedView>>>,
    config: WidgetConfig,
    page_url: Option<Url>,
}

#[wasm_bindgen]
impl FastSearch {
    /// Create the widget.
    ///
    /// - `params`: `{ indexUrl?, fuseOpts? }`; `undefined` for defaults
    /// - `page_url`: base for resolving a relative `indexUrl`
    #[wasm_bindgen(constructor)]
    pub fn new(
        host: SearchHost,
        params: JsValue,
        page_url: Option<String>,
    ) -> Result<FastSearch, JsValue> {
        let config: WidgetConfig = if params.is_undefined() || params.is_null() {
            WidgetConfig::default()
        } else {
            from_value(params).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let page_url = page_url
            .map(|u| Url::parse(&u))
            .transpose()
            .map_err(|e| JsValue::from_str(&format!("Invalid page URL: {}", e)))?;

        Ok(FastSearch {
            host,
            controller: Rc::new(RefCell::new(SearchController::new(QueuedView::new()))),
            config,
            page_url,
        })
    }

    /// Fetch the corpus and build the index.
    ///
    /// Resolves to `true` once searchable. A failed load is logged to the
    /// console and resolves to `false`; the widget then stays empty.
    pub fn load(&self) -> js_sys::Promise {
        let controller = Rc::clone(&self.controller);
        let options = self.config.fuse_opts.clone();
        let source = CorpusSource::resolve(&self.config.index_url, self.page_url.as_ref());

        wasm_bindgen_futures::future_to_promise(async move {
            let corpus = match source {
                Ok(source) => loader::load(&source).await,
                Err(e) => Err(e),
            };
            match corpus {
                Ok(corpus) => {
                    let Ok(mut state) = controller.try_borrow_mut() else {
                        console_log("FastSearch is busy; corpus dropped");
                        return Ok(JsValue::FALSE);
                    };
                    state.init(corpus, options.as_ref());
                    Ok(JsValue::TRUE)
                }
                Err(e) => {
                    console_log(&e.to_string());
                    Ok(JsValue::FALSE)
                }
            }
        })
    }

    /// Build the index from a corpus the page already has.
    #[wasm_bindgen(js_name = initWithCorpus)]
    pub fn init_with_corpus(&self, corpus: JsValue) -> Result<(), JsValue> {
        let corpus: Vec<CorpusDocument> =
            from_value(corpus).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("FastSearch is busy"))?;
        controller.init(corpus, self.config.fuse_opts.as_ref());
        Ok(())
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.controller
            .try_borrow()
            .map(|c| c.is_ready())
            .unwrap_or(false)
    }

    /// Keystroke in the search box. Returns the number of results shown.
    #[wasm_bindgen(js_name = onInput)]
    pub fn on_input(&self, text: &str) -> usize {
        self.dispatch(|c| c.on_input(text).len()).unwrap_or(0)
    }

    /// The input's native `search` event (clear button).
    #[wasm_bindgen(js_name = onSearch)]
    pub fn on_search(&self, value: &str) {
        self.dispatch(|c| c.on_search_cleared(value));
    }

    /// Document keydown. Returns whether to call `preventDefault()`.
    #[wasm_bindgen(js_name = onKeydown)]
    pub fn on_keydown(&self, key: &str) -> bool {
        let key = Key::from_dom(key);
        let within = self.host.focus_within_widget();
        self.dispatch(|c| {
            c.view_mut().set_focus_within(within);
            c.on_keydown(key)
        })
        .unwrap_or(false)
    }

    pub fn reset(&self) {
        self.dispatch(|c| c.reset());
    }

    /// Current focus as `{kind: "input"}` or `{kind: "resultLink", index}`.
    #[wasm_bindgen(js_name = focusState)]
    pub fn focus_state(&self) -> Result<JsValue, JsValue> {
        let focus = self
            .controller
            .try_borrow()
            .map_err(|_| JsValue::from_str("FastSearch is busy"))?
            .focus();
        to_value(&focus).map_err(|e| e.to_string().into())
    }
}

impl FastSearch {
    /// Run `f` on the controller, then replay its page updates once the
    /// borrow is released. Yields `None` if the controller is already
    /// borrowed.
    fn dispatch<T>(&self, f: impl FnOnce(&mut SearchController<QueuedView>) -> T) -> Option<T> {
        let (out, ops) = {
            let mut controller = self.controller.try_borrow_mut().ok()?;
            let out = f(&mut *controller);
            (out, controller.view_mut().take())
        };
        apply(&self.host, ops);
        Some(out)
    }
}
