pub mod result_panel;
pub mod waiver_request;
pub mod waiver_response;

pub use result_panel::*;
pub use waiver_request::*;
pub use waiver_response::*;
