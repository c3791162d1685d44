#[cfg(test)]
mod tests {
    use crate::service::{HttpMailerService, MailerError};
    use detailify_common::services::NotificationService;
    use detailify_config::{AppConfig, BookingConfig, MailerConfig, ServerConfig};
    use httpmock::prelude::*;
    use std::sync::Arc;

    fn config_for(base_url: &str) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8086,
            },
            use_mailer: true,
            booking: BookingConfig::default(),
            mailer: Some(MailerConfig {
                api_base_url: base_url.to_string(),
                from_address: "bookings@example.test".to_string(),
                inbox_address: "inbox@example.test".to_string(),
            }),
        })
    }

    #[tokio::test]
    async fn send_email_posts_json_with_bearer_auth() {
        std::env::set_var("MAILER_API_KEY", "test-key");
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/send")
                    .header("authorization", "Bearer test-key")
                    .json_body_partial(
                        r#"{
                            "from": "bookings@example.test",
                            "to": ["inbox@example.test"],
                            "subject": "Afspraakaanvraag: Rik Mulder"
                        }"#,
                    );
                then.status(200).json_body(serde_json::json!({"id": "msg-42"}));
            })
            .await;

        let service = HttpMailerService::new(config_for(&server.base_url()));
        let result = service
            .send_email(
                "inbox@example.test",
                "Afspraakaanvraag: Rik Mulder",
                "Nieuwe afspraakaanvraag via de website",
                false,
            )
            .await
            .expect("send should succeed");

        mock.assert_async().await;
        assert_eq!(result.id, "msg-42");
        assert_eq!(result.status, "sent");
    }

    #[tokio::test]
    async fn non_success_status_maps_to_api_error() {
        std::env::set_var("MAILER_API_KEY", "test-key");
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/send");
                then.status(422).body("unverified sender domain");
            })
            .await;

        let service = HttpMailerService::new(config_for(&server.base_url()));
        let err = service
            .send_email("inbox@example.test", "subject", "body", false)
            .await
            .expect_err("send should fail");

        match err {
            MailerError::ApiError {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 422);
                assert!(message.contains("unverified"));
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_mailer_section_is_a_config_error() {
        std::env::set_var("MAILER_API_KEY", "test-key");
        let mut config = config_for("https://mail.example");
        Arc::make_mut(&mut config).mailer = None;

        let service = HttpMailerService::new(config);
        let err = service
            .send_email("inbox@example.test", "subject", "body", false)
            .await
            .expect_err("send should fail");
        assert!(matches!(err, MailerError::ConfigError));
    }
}
