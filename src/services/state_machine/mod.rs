// Page state machine
// Pure transitions over the widget state and the view derived from it

mod machine;
mod view;

pub use machine::PageStateMachine;
pub use view::PageView;
