// Presentation layer - Selection input
pub mod selection_input;
