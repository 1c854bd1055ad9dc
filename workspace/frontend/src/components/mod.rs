pub mod modal;
pub mod nav;
pub mod payment_panel;
pub mod session_guard;
