//! Reusable view components
//!
//! Each component is an independent view over borrowed state; none of them
//! talk to each other.

mod debug_panel;
mod sales_welcome;
mod session_status;
mod shopping_welcome;
mod start_button;
mod welcome;

pub use debug_panel::DebugPanel;
pub use sales_welcome::SalesWelcomeView;
pub use session_status::SessionStatusView;
pub use shopping_welcome::ShoppingWelcomeView;
pub use start_button::StartButton;
pub use welcome::WelcomeView;
