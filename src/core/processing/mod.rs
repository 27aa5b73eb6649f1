pub mod pipeline;
pub mod quadrants;
pub mod resize;
pub mod square;
