use crate::resource::Submission;
use crate::router::Route;

/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// A dialog was confirmed. The values are drafts and are only logged.
    Submitted { route: Route, submission: Submission },
    GenerateShareLink,
}
