use std::fmt;

/// Host configuration the voice core cannot run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    SampleRate { expected: u32, actual: u32 },
    Geometry { expected: u32, actual: u32 },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::SampleRate { expected, actual } => {
                write!(f, "Unsupported sample rate {actual} Hz, expected {expected} Hz")
            }
            InitError::Geometry { expected, actual } => {
                write!(f, "Unsupported output geometry: {actual} channels, expected {expected}")
            }
        }
    }
}

impl std::error::Error for InitError {}

/// Failure to deliver an event from the control thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// The render thread has not drained the event queue yet.
    QueueFull,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::QueueFull => write!(f, "Control queue is full"),
        }
    }
}

impl std::error::Error for ControlError {}
