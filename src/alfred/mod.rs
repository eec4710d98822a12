pub mod feedback;
pub mod protocol;
