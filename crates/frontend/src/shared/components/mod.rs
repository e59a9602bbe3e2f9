pub mod loading_button;

pub use loading_button::{LoadingButton, TextLoadingButton};
