// --- File: crates/services/detailify_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! This module provides an implementation of the ServiceFactory trait for
//! the backend service. Collaborators are initialized from configuration
//! and compiled features; anything unavailable simply stays `None` and the
//! depending routes degrade.
use detailify_common::services::{BoxedError, NotificationService, ServiceFactory};
use detailify_config::AppConfig;
use std::sync::Arc;
#[cfg(feature = "mailer")]
use tracing::info;

#[cfg(feature = "mailer")]
use detailify_common::is_feature_enabled;
#[cfg(feature = "mailer")]
use detailify_common::services::{BoxFuture, NotificationResult};
#[cfg(feature = "mailer")]
use detailify_mailer::HttpMailerService;

/// Service factory for the Detailify backend.
pub struct DetailifyServiceFactory {
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    #[cfg(feature = "mailer")]
    notification_service: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
}

impl DetailifyServiceFactory {
    /// Create a new service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        #[allow(unused_mut)]
        let mut factory = Self {
            config: config.clone(),
            #[cfg(feature = "mailer")]
            notification_service: None,
        };

        #[cfg(feature = "mailer")]
        {
            if is_feature_enabled(&config, config.use_mailer, config.mailer.as_ref()) {
                info!("ℹ️ Initializing mailer notification service...");

                // Wrapper that converts MailerError to BoxedError
                struct BoxedNotificationService {
                    inner: HttpMailerService,
                }

                impl NotificationService for BoxedNotificationService {
                    type Error = BoxedError;

                    fn send_email(
                        &self,
                        to: &str,
                        subject: &str,
                        body: &str,
                        is_html: bool,
                    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
                        let to = to.to_string();
                        let subject = subject.to_string();
                        let body = body.to_string();
                        let inner = &self.inner;

                        Box::pin(async move {
                            inner
                                .send_email(&to, &subject, &body, is_html)
                                .await
                                .map_err(|e| BoxedError(Box::new(e)))
                        })
                    }
                }

                let service = HttpMailerService::new(config.clone());
                factory.notification_service =
                    Some(Arc::new(BoxedNotificationService { inner: service }));
                info!("✅ Mailer notification service initialized.");
            } else {
                info!("ℹ️ Mailer feature compiled, but disabled via runtime config or missing mailer config section.");
            }
        }

        factory
    }
}

impl ServiceFactory for DetailifyServiceFactory {
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>> {
        #[cfg(feature = "mailer")]
        {
            if let Some(service) = self.notification_service.clone() {
                return Some(service);
            }
        }

        None
    }
}
