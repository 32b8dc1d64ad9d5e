//! Backend commands queued from UI to backend worker.

use shared::protocol::QuoteRequest;

pub enum BackendCommand {
    Predict { request: QuoteRequest },
}
