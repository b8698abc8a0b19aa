mod finite_difference;
mod gradient_ascent;
mod objective;
mod optimizer;

pub use finite_difference::FiniteDifference;
pub use gradient_ascent::GradientAscent;
pub use objective::Objective;
pub use optimizer::Optimizer;
