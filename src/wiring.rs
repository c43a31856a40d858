//! Browser entry points and event registration.
//!
//! DESIGN
//! ======
//! The toggle is wired with a `click` listener on the switch's button; the
//! page markup carries no inline handlers and no toggle function is
//! exported. The initial switch sync runs once on `DOMContentLoaded`, or
//! immediately when the document has already been parsed by the time the
//! module starts. Listeners live for the whole page, so their closures are
//! leaked.
//!
//! ERROR HANDLING
//! ==============
//! Errors inside listeners have no caller to return to and are logged.
//! Errors during `start` are thrown to the host script. The page is claimed
//! before any listener is added, so a failed start is not retried.

use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::dom::{DomPage, dom_error};
use crate::error::ThemeError;
use crate::startup::{StartGuard, sync_now};
use crate::theme::controller::ThemeController;

thread_local! {
    static STARTED: StartGuard = const { StartGuard::new() };
}

fn run_toggle(controller: &ThemeController) {
    let result = DomPage::current().and_then(|page| controller.toggle(&page));
    if let Err(err) = result {
        error!("theme toggle failed: {err}");
    }
}

fn run_sync(controller: &ThemeController) {
    let result = DomPage::current().and_then(|page| controller.sync_initial(&page));
    if let Err(err) = result {
        error!("initial theme sync failed: {err}");
    }
}

fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), ThemeError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error("addEventListener"))?;
    closure.forget();
    Ok(())
}

fn install(config: ThemeConfig) -> Result<(), ThemeError> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if !STARTED.with(StartGuard::claim) {
        warn!("theme switch already started; ignoring second start");
        return Ok(());
    }

    let controller = Rc::new(ThemeController::new(config));
    let page = DomPage::current()?;
    let document = page.document();

    if sync_now(&document.ready_state()) {
        run_sync(&controller);
    } else {
        let for_ready = Rc::clone(&controller);
        listen(document, "DOMContentLoaded", move |_| run_sync(&for_ready))?;
    }

    let button_selector = format!("#{} button", controller.config().switch_id);
    match document
        .query_selector(&button_selector)
        .map_err(dom_error("querySelector"))?
    {
        Some(button) => {
            let for_click = Rc::clone(&controller);
            listen(&button, "click", move |_| run_toggle(&for_click))?;
        }
        None => warn!("no switch button at {button_selector}; toggle not wired"),
    }

    info!("theme switch started");
    Ok(())
}

/// Start the theme switch with the page defaults.
///
/// # Errors
///
/// Throws when no document is available or a listener cannot be added.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    install(ThemeConfig::default()).map_err(JsValue::from)
}

/// Start the theme switch with a (partial) JSON config.
///
/// # Errors
///
/// Throws on an invalid config, or as [`start`] does.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(config_json)?;
    install(config).map_err(JsValue::from)
}
