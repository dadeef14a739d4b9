mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod user_renderer;

pub use app_state::App;
pub use user_renderer::UserRenderer;
