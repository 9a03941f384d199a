use crate::{
    api::{employee, health::health},
    config::Config,
    error::AppError,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::Condition, web};

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-client-IP limiter for the API scope. `None` when limiting is switched off.
///
/// Built once and shared by every worker, so the budget is per process, not per worker.
pub fn build_limiter(requests_per_min: u32) -> Option<RateLimit> {
    if requests_per_min == 0 {
        return None;
    }
    let per_ms = (60_000 / u64::from(requests_per_min)).max(1);
    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: Option<&RateLimit>) {
    // Decoding failures share the error body of every other failure
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::malformed(format!("Malformed request body: {err}")).into()
    }));

    let governor = match limiter {
        Some(limiter) => Governor::new(limiter),
        None => Governor::new(&RateLimit::default()),
    };

    // Public routes
    cfg.service(web::resource("/health").route(web::get().to(health)));

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Condition::new(limiter.is_some(), governor)) // rate limiting
            .service(
                web::scope("/employee")
                    // /employee
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employee/{uuid}
                    .service(
                        web::resource("/{uuid}").route(web::get().to(employee::get_employee)),
                    ),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{service::EmployeeService, store::EmployeeStore};
    use actix_web::{App, http::StatusCode, test};
    use std::sync::Arc;

    #[actix_web::test]
    async fn zero_disables_limiter() {
        assert!(build_limiter(0).is_none());
        assert!(build_limiter(1).is_some());
        assert!(build_limiter(1_000_000).is_some());
    }

    #[actix_web::test]
    async fn limiter_rejects_past_burst() {
        let config = Config::default();
        let limiter = build_limiter(2).unwrap();
        let service = web::Data::new(EmployeeService::new(Arc::new(EmployeeStore::seeded())));
        let app = test::init_service(
            App::new()
                .app_data(service)
                .configure(|cfg| configure(cfg, &config, Some(&limiter))),
        )
        .await;

        let mut statuses = Vec::new();
        for _ in 0..3 {
            let req = test::TestRequest::get()
                .uri("/api/v1/employee")
                .peer_addr("10.0.0.1:4000".parse().unwrap())
                .to_request();
            let status = match test::try_call_service(&app, req).await {
                Ok(resp) => resp.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            statuses.push(status);
        }

        assert_eq!(
            statuses,
            [StatusCode::OK, StatusCode::OK, StatusCode::TOO_MANY_REQUESTS]
        );
    }

    #[actix_web::test]
    async fn prefix_is_configurable() {
        let config = Config {
            api_prefix: "/hr".to_string(),
            ..Config::default()
        };
        let service = web::Data::new(EmployeeService::new(Arc::new(EmployeeStore::seeded())));
        let app = test::init_service(
            App::new()
                .app_data(service)
                .configure(|cfg| configure(cfg, &config, None)),
        )
        .await;

        let req = test::TestRequest::get().uri("/hr/employee").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/v1/employee").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
