pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod theme;
pub mod utils;
pub mod viewer;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    let loaded = config::load();
    let cfg = config::get();
    logging::init(cfg.level());
    log::info!("Starting catalog page scripts (wasm)");
    if let Err(err) = loaded {
        log::warn!("ignoring window.{}: {}", config::GLOBAL_KEY, err);
    }

    if let Err(err) = web::boot(cfg) {
        log::warn!("page behaviours disabled: {}", err);
    }
}
