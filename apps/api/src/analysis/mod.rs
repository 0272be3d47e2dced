// Analysis API: glues extraction → scoring → report for HTTP callers.
// Scoring itself is synchronous and cheap; it runs inline on the request task.

pub mod handlers;
