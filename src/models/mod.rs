pub mod feedback;
pub mod order;
