use crate::{
    abstract_trait::{DynConfirmationGate, DynNotifier, DynProductMutation, DynTranslator},
    client::HttpProductClient,
    i18n::StaticTranslator,
    query::ProductQuery,
    service::{ListMutationController, ListMutationControllerDeps},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::Config;
use std::{fmt, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct DependenciesInject {
    pub query: Arc<ProductQuery>,
    pub controller: Arc<ListMutationController>,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("query", &"ProductQuery")
            .field("controller", &"ListMutationController")
            .finish()
    }
}

/// Host-side collaborators the container cannot build itself.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub confirmation: DynConfirmationGate,
    pub notifier: DynNotifier,
}

impl DependenciesInject {
    pub fn new(
        config: &Config,
        deps: DependenciesInjectDeps,
        registry: &mut Registry,
    ) -> Result<Self> {
        let DependenciesInjectDeps {
            confirmation,
            notifier,
        } = deps;

        let client = Arc::new(
            HttpProductClient::new(
                config.api_url.clone(),
                Duration::from_secs(config.request_timeout_secs),
            )
            .context("failed initialize product http client")?,
        );

        let query = Arc::new(ProductQuery::new(client.clone(), client, registry));

        let translator: DynTranslator = Arc::new(StaticTranslator::new(&config.locale));
        let mutation: DynProductMutation = query.clone();

        let controller = Arc::new(ListMutationController::new(
            ListMutationControllerDeps {
                translator,
                mutation,
                confirmation,
                notifier,
            },
            registry,
        ));

        Ok(Self { query, controller })
    }
}
