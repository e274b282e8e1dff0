pub mod style;

pub use style::{PromptLabels, PromptStyle, DEFAULT_FOREGROUND, PENDING_FOREGROUND};
