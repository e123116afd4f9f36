mod batch;
mod data_window;
mod window_resolver;
mod window_resolver_config;

pub use batch::resolve_visible_windows;
pub use data_window::expand_visible_window;
pub use window_resolver::WindowResolver;
pub use window_resolver_config::WindowResolverConfig;
