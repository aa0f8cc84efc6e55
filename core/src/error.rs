use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds { x: u32, y: u32, size: u32 },
    InvalidId { value: String },
    InvalidNumber { value: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y, size } => {
                write!(f, "tile {x},{y} is outside the {size}x{size} grid")
            }
            GridError::InvalidId { value } => {
                write!(f, "invalid tile id '{value}', expected x-y or x,y")
            }
            GridError::InvalidNumber { value } => {
                write!(f, "invalid number '{value}'")
            }
        }
    }
}

impl std::error::Error for GridError {}
