use lambda_http::{run, service_fn, Error, Request};
use microroute::dispatcher::Dispatcher;
use microroute::router::Router;
use microroute::server::AppService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        // CloudWatch stamps ingestion time and the module path is noise
        // in function logs.
        .without_time()
        .with_target(false)
        .init();

    let mut router = Router::new();
    let mut dispatcher = Dispatcher::new();
    microroute::handlers::register_all(&mut router, &mut dispatcher)?;

    let service = AppService::new(router, dispatcher);
    run(service_fn(move |event: Request| {
        let service = service.clone();
        async move { Ok::<_, Error>(service.handle(event)) }
    }))
    .await
}
