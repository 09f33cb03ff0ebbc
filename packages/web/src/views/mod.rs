mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod home;
pub use home::Home;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod update_password;
pub use update_password::UpdatePassword;

/// Send the browser to `path`, replacing the SPA location.
pub(crate) fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}
