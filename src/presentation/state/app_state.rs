use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{JobRepository, ProfileResolver};
use crate::application::services::{GenerationMessage, JobStore};
use crate::presentation::config::Settings;

/// Shared handler state. Every port is dyn-dispatched so the same
/// router serves the Postgres wiring, scaffold mode, and tests.
#[derive(Clone)]
pub struct AppState {
    pub job_store: JobStore,
    pub job_repository: Arc<dyn JobRepository>,
    pub profile_resolver: Arc<dyn ProfileResolver>,
    pub generation_sender: mpsc::Sender<GenerationMessage>,
    pub providers_configured: bool,
    pub settings: Settings,
}
