use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::domain::{CourseRequest, Job};

use super::course_generator::CourseGenerator;

pub struct GenerationMessage {
    pub job: Job,
    pub request: CourseRequest,
}

/// Receives enqueued jobs and spawns one detached task per job. Jobs do
/// not wait on each other; the channel is only the handoff from the HTTP
/// handler, never a throughput bound.
pub struct GenerationWorker {
    receiver: mpsc::Receiver<GenerationMessage>,
    generator: Arc<CourseGenerator>,
}

impl GenerationWorker {
    pub fn new(receiver: mpsc::Receiver<GenerationMessage>, generator: Arc<CourseGenerator>) -> Self {
        Self {
            receiver,
            generator,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Generation worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "generation_job",
                job_id = %msg.job.id.as_uuid(),
                topic = %msg.request.topic,
            );
            let generator = Arc::clone(&self.generator);
            tokio::spawn(
                async move {
                    generator.process_job(msg).await;
                }
                .instrument(span),
            );
        }
        tracing::info!("Generation worker stopped: channel closed");
    }
}
