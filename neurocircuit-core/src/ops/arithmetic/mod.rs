// Export foundational arithmetic gates directly
pub mod add;
pub mod mul;

pub use add::AddGate;
pub use mul::MultiplyGate;
