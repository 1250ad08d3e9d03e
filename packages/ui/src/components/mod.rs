//! Form and feedback primitives shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{FieldError, FormField, Input, Label};

mod feedback;
pub use feedback::{ErrorBanner, ModalOverlay, Spinner};
