pub mod feedback;
pub mod health;
pub mod orders;
