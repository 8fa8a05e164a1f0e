//! Anwendungsschicht: Session-Zustand, Hit-Testing, Intents und Controller.

pub mod controller;
pub mod events;
pub mod pick;
pub mod state;

pub use controller::SessionController;
pub use events::EditorIntent;
pub use pick::{pick_target, PickTarget};
pub use state::EditorSession;
