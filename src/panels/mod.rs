mod central_panel;
mod solution_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use solution_panel::solution_panel;
pub use tools_panel::tools_panel;
