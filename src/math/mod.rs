pub mod delta;
pub mod wcag;
