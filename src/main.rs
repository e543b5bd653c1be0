#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // .env is optional; the bundled config.env covers the rest
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!("no .env loaded: {err}");
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    // dioxus installs its own logger at launch if this one is absent
    let _ = tracing_subscriber::fmt().try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    init_tracing();
    load_dotenv();
    dioxus::launch(medichat::ui::App);
}
