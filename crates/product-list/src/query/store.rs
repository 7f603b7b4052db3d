use crate::{
    abstract_trait::{DynProductDataSource, DynProductMutation, ProductDataSource, ProductMutation},
    domain::fetch_state::QuerySnapshot,
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::ClientError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::{sync::watch, time::Instant};
use tracing::{debug, error, info};

/// Owns the product collection the list renders from. Deletes go through
/// here so a successful one invalidates and refetches the collection; the
/// list itself never edits it.
pub struct ProductQuery {
    source: DynProductDataSource,
    remote: DynProductMutation,
    state: watch::Sender<QuerySnapshot>,
    generation: AtomicU64,
    metrics: Metrics,
}

impl std::fmt::Debug for ProductQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductQuery")
            .field("source", &"DynProductDataSource")
            .field("remote", &"DynProductMutation")
            .field("state", &*self.state.borrow())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

impl ProductQuery {
    pub fn new(
        source: DynProductDataSource,
        remote: DynProductMutation,
        registry: &mut Registry,
    ) -> Self {
        let (state, _) = watch::channel(QuerySnapshot::loading());

        let metrics = Metrics::new();
        metrics.register(registry, "product_list_query", "ProductQuery");

        Self {
            source,
            remote,
            state,
            generation: AtomicU64::new(0),
            metrics,
        }
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<QuerySnapshot> {
        self.state.subscribe()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Marks the query as loading, then replaces the collection with a fresh
    /// fetch. A failed fetch leaves no collection behind. When refetches
    /// overlap only the most recently started one is published.
    pub async fn refetch(&self) {
        let mut generation = 0;
        self.state.send_modify(|snapshot| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            snapshot.is_loading = true;
        });

        let method = Method::Get;
        let tracing_ctx = self.start_tracing(
            "FetchProducts",
            vec![
                KeyValue::new("component", "product_list"),
                KeyValue::new("operation", "fetch"),
                KeyValue::new("query.generation", generation.to_string()),
            ],
        );

        let next = match self.source.fetch_products().await {
            Ok(response) => {
                let products = response.data.unwrap_or_default();
                self.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    &format!("Product query loaded {} products", products.len()),
                );
                QuerySnapshot {
                    is_loading: false,
                    data: Some(Arc::new(products)),
                }
            }
            Err(err) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Product query failed: {err}"),
                );
                QuerySnapshot {
                    is_loading: false,
                    data: None,
                }
            }
        };

        // the generation is read under the channel lock so a refetch started
        // after this point always publishes after us
        self.state.send_if_modified(|snapshot| {
            if self.generation.load(Ordering::SeqCst) != generation {
                debug!("Dropping stale product query result #{generation}");
                return false;
            }
            *snapshot = next;
            true
        });
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("product-list-query")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Client)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", if is_success { "SUCCESS" } else { "ERROR" }),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ {message}");
        } else {
            error!("❌ {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[async_trait]
impl ProductMutation for ProductQuery {
    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ClientError> {
        let response = self.remote.delete_product(id).await?;

        info!("Product ID={id} deleted, invalidating product query");
        self.refetch().await;

        Ok(response)
    }
}
