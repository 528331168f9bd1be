use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use coursegen::application::ports::{
    CourseRepository, JobRepository, ProfileResolver, TextGenerator,
};
use coursegen::application::services::{
    CourseAssembler, CourseGenerator, GenerationWorker, JobStore,
};
use coursegen::infrastructure::llm::{
    ChatCompletionsClient, FallbackTextGenerator, MockTextGenerator,
};
use coursegen::infrastructure::observability::init_tracing;
use coursegen::infrastructure::persistence::{
    create_pool, InMemoryCourseRepository, InMemoryJobRepository, NullProfileResolver,
    PgCourseRepository, PgJobRepository, PgProfileResolver,
};
use coursegen::presentation::{create_router, AppState, Environment, ScaffoldConfig, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;
    init_tracing(&settings.logging, settings.server.port);

    tracing::info!(environment = %environment, "Starting course-generation service");

    let scaffold_config = ScaffoldConfig::default();

    let (job_repository, course_repository, profile_resolver, generator, providers_configured): (
        Arc<dyn JobRepository>,
        Arc<dyn CourseRepository>,
        Arc<dyn ProfileResolver>,
        Arc<dyn TextGenerator>,
        bool,
    ) = if scaffold_config.enabled {
        tracing::warn!("Scaffold mode enabled: using in-memory stores and a canned provider");
        (
            Arc::new(InMemoryJobRepository::new()),
            Arc::new(InMemoryCourseRepository::new()),
            Arc::new(NullProfileResolver),
            Arc::new(MockTextGenerator::new(Duration::from_millis(
                scaffold_config.mock_response_delay_ms,
            ))),
            true,
        )
    } else {
        let pool = create_pool(&settings.database)
            .await
            .map_err(|e| anyhow::anyhow!("database unavailable: {}", e))?;

        tracing::info!("Running database migrations");
        sqlx::migrate!().run(&pool).await?;

        let primary = ChatCompletionsClient::from_settings(&settings.providers.primary);
        let secondary = ChatCompletionsClient::from_settings(&settings.providers.secondary);
        let fallback = FallbackTextGenerator::new(
            Arc::new(primary),
            settings.providers.primary.name.clone(),
            Arc::new(secondary),
            settings.providers.secondary.name.clone(),
        );

        (
            Arc::new(PgJobRepository::new(pool.clone())),
            Arc::new(PgCourseRepository::new(pool.clone())),
            Arc::new(PgProfileResolver::new(pool)),
            Arc::new(fallback),
            settings.providers.any_configured(),
        )
    };

    if !providers_configured {
        tracing::warn!(
            "No provider credentials configured: generation requests will be refused with 503"
        );
    }

    let job_store = JobStore::new(Arc::clone(&job_repository));
    let assembler = CourseAssembler::new(Arc::clone(&course_repository));
    let course_generator = Arc::new(CourseGenerator::new(
        generator,
        assembler,
        job_store.clone(),
        settings.generation.temperature,
    ));

    let (generation_sender, generation_receiver) =
        mpsc::channel(settings.generation.queue_capacity);
    let worker = GenerationWorker::new(generation_receiver, course_generator);
    tokio::spawn(worker.run());

    let state = AppState {
        job_store,
        job_repository,
        profile_resolver,
        generation_sender,
        providers_configured,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
