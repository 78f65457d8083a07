//! Browser entry point: mounts [`medreviews::app::App`] on `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            leptos::logging::warn!("console logger unavailable: {e}");
        }
        leptos::mount::mount_to_body(medreviews::app::App);
    }
}
