pub mod filter_view;
pub mod form_binding;

// Re-export public API
pub use filter_view::{matches, view};
pub use form_binding::FormBinding;
