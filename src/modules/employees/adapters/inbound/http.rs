use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::employees::application::errors::ApplicationError;
use crate::modules::employees::core::employee::InternalEmployee;
use crate::shared::core::primitives::{CourseId, EmployeeId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternalEmployeeBody {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveRaiseBody {
    pub raise_amount: Decimal,
}

#[derive(Serialize)]
pub struct PromotionResponse {
    pub promoted: bool,
    pub employee: InternalEmployee,
}

fn error_response(err: ApplicationError) -> Response {
    let status = match &err {
        ApplicationError::InvalidRaise { .. } => StatusCode::BAD_REQUEST,
        ApplicationError::EmployeeNotFound(_) | ApplicationError::CourseNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        ApplicationError::PromotionEligibility { .. } => StatusCode::BAD_GATEWAY,
        ApplicationError::Repository { .. } | ApplicationError::Lookup { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    if status.is_server_error() {
        error!(error = %err, "request failed");
    }
    (status, err.to_string()).into_response()
}

async fn load_employee(
    state: &AppState,
    employee_id: EmployeeId,
) -> Result<InternalEmployee, ApplicationError> {
    state
        .employee_service
        .fetch_internal_employee(employee_id)
        .await?
        .ok_or(ApplicationError::EmployeeNotFound(employee_id))
}

pub async fn list_internal_employees(State(state): State<AppState>) -> Response {
    match state.employee_service.fetch_internal_employees().await {
        Ok(employees) => Json(employees).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn get_internal_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
) -> Response {
    match load_employee(&state, employee_id).await {
        Ok(employee) => Json(employee).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn create_internal_employee(
    State(state): State<AppState>,
    body: Result<Json<CreateInternalEmployeeBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let (first_name, last_name) = (body.first_name.trim(), body.last_name.trim());
    if first_name.is_empty() || last_name.is_empty() {
        return (StatusCode::BAD_REQUEST, "firstName and lastName are required").into_response();
    }

    match state
        .employee_service
        .create_internal_employee(first_name, last_name)
        .await
    {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn attend_course(
    State(state): State<AppState>,
    Path((employee_id, course_id)): Path<(EmployeeId, CourseId)>,
) -> Response {
    let result = async {
        let mut employee = load_employee(&state, employee_id).await?;
        let course = state
            .employee_service
            .fetch_course(course_id)
            .await?
            .ok_or(ApplicationError::CourseNotFound(course_id))?;
        state
            .employee_service
            .attend_course(&mut employee, course)
            .await?;
        Ok::<_, ApplicationError>(employee)
    }
    .await;

    match result {
        Ok(employee) => Json(employee).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn give_raise(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
    body: Result<Json<GiveRaiseBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let result = async {
        let mut employee = load_employee(&state, employee_id).await?;
        state
            .employee_service
            .give_raise(&mut employee, body.raise_amount)
            .await?;
        Ok::<_, ApplicationError>(employee)
    }
    .await;

    match result {
        Ok(employee) => Json(employee).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn promote_internal_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
) -> Response {
    let result = async {
        let mut employee = load_employee(&state, employee_id).await?;
        let promoted = state
            .promotion_service
            .promote_internal_employee(&mut employee)
            .await?;
        Ok::<_, ApplicationError>(PromotionResponse { promoted, employee })
    }
    .await;

    match result {
        Ok(response) => Json(response).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn notify_of_absence(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
) -> Response {
    match load_employee(&state, employee_id).await {
        Ok(employee) => {
            state.employee_service.notify_of_absence(&employee);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => error_response(err),
    }
}

#[cfg(test)]
mod internal_employees_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use rstest::{fixture, rstest};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    use crate::modules::employees::adapters::outbound::employee_repository_in_memory::{
        DEALING_WITH_CUSTOMERS_101_ID, InMemoryEmployeeRepository, MEGAN_JONES_ID,
    };
    use crate::modules::employees::core::ports::{
        EmployeeRepository, PromotionEligibility, PromotionEligibilityCheckError,
    };
    use crate::shared::core::primitives::{CourseId, EmployeeId};
    use crate::shell::config::AppConfig;
    use crate::shell::http::router;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::promotion_eligibility::{
        FailingPromotionEligibility, FixedPromotionEligibility,
    };

    fn make_state(
        repository: InMemoryEmployeeRepository,
        eligibility: Arc<dyn PromotionEligibility>,
    ) -> AppState {
        let config = AppConfig::from_lookup(|key| (key == "EMPLOYEES_SALARY_SEED").then(|| "7".into()))
            .unwrap();
        let repository: Arc<dyn EmployeeRepository> = Arc::new(repository);
        AppState::new(&config, repository, eligibility)
    }

    #[fixture]
    fn state() -> AppState {
        make_state(
            InMemoryEmployeeRepository::with_seed_data(),
            Arc::new(FixedPromotionEligibility::new(true)),
        )
    }

    fn app(state: AppState) -> Router {
        router(state)
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_the_seeded_employees(state: AppState) {
        let response = app(state)
            .oneshot(
                Request::get("/api/internalemployees")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json.as_array().unwrap().len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_one_employee_by_id(state: AppState) {
        let response = app(state)
            .oneshot(
                Request::get(format!("/api/internalemployees/{MEGAN_JONES_ID}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["firstName"], "Megan");
        assert_eq!(json["jobLevel"], 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_employee(state: AppState) {
        let response = app(state)
            .oneshot(
                Request::get(format!("/api/internalemployees/{}", EmployeeId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_201_with_obligatory_courses_on_create(state: AppState) {
        let response = app(state)
            .oneshot(post_json(
                "/api/internalemployees",
                r#"{"firstName":"Brooklyn","lastName":"Cannon"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = json_body(response).await;
        assert_eq!(json["lastName"], "Cannon");
        assert_eq!(json["jobLevel"], 1);
        assert_eq!(json["attendedCourses"].as_array().unwrap().len(), 2);
    }

    #[rstest]
    #[case(r#"{"firstName":"","lastName":""}"#)]
    #[case(r#"{"firstName":"Brooklyn","lastName":""}"#)]
    #[case(r#"{"firstName":"   ","lastName":"Cannon"}"#)]
    #[tokio::test]
    async fn it_should_return_400_and_store_nothing_when_a_name_is_blank(
        state: AppState,
        #[case] body: &str,
    ) {
        let response = app(state.clone())
            .oneshot(post_json("/api/internalemployees", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let employees = state.employee_service.fetch_internal_employees().await.unwrap();
        assert_eq!(employees.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_when_the_raise_overflows_the_salary(state: AppState) {
        let response = app(state.clone())
            .oneshot(post_json(
                &format!("/api/internalemployees/{MEGAN_JONES_ID}/raise"),
                r#"{"raiseAmount":"79228162514264337593543950335"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let megan = state
            .employee_service
            .fetch_internal_employee(MEGAN_JONES_ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(megan.salary, rust_decimal::Decimal::from(3000));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_422_on_invalid_json(state: AppState) {
        let response = app(state)
            .oneshot(post_json("/api/internalemployees", "not-json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_recalculate_the_bonus_when_attending_a_course(state: AppState) {
        let response = app(state)
            .oneshot(post_json(
                &format!(
                    "/api/internalemployees/{MEGAN_JONES_ID}/courses/{DEALING_WITH_CUSTOMERS_101_ID}"
                ),
                "",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["attendedCourses"].as_array().unwrap().len(), 3);
        assert_eq!(json["suggestedBonus"], "600");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_course(state: AppState) {
        let response = app(state)
            .oneshot(post_json(
                &format!(
                    "/api/internalemployees/{MEGAN_JONES_ID}/courses/{}",
                    CourseId::new()
                ),
                "",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case(r#"{"raiseAmount":250}"#, StatusCode::OK)]
    #[case(r#"{"raiseAmount":"100"}"#, StatusCode::OK)]
    #[case(r#"{"raiseAmount":50}"#, StatusCode::BAD_REQUEST)]
    #[case(r#"{"raise":50}"#, StatusCode::UNPROCESSABLE_ENTITY)]
    #[tokio::test]
    async fn it_should_map_raise_outcomes_to_status_codes(
        state: AppState,
        #[case] body: &str,
        #[case] expected: StatusCode,
    ) {
        let response = app(state)
            .oneshot(post_json(
                &format!("/api/internalemployees/{MEGAN_JONES_ID}/raise"),
                body,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_promote_an_eligible_employee(state: AppState) {
        let response = app(state)
            .oneshot(post_json(
                &format!("/api/internalemployees/{MEGAN_JONES_ID}/promotion"),
                "",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["promoted"], true);
        assert_eq!(json["employee"]["jobLevel"], 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_502_when_the_eligibility_service_fails() {
        let state = make_state(
            InMemoryEmployeeRepository::with_seed_data(),
            Arc::new(FailingPromotionEligibility(
                PromotionEligibilityCheckError::UnexpectedStatus(503),
            )),
        );

        let response = app(state)
            .oneshot(post_json(
                &format!("/api/internalemployees/{MEGAN_JONES_ID}/promotion"),
                "",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_500_when_the_repository_is_offline() {
        let mut repository = InMemoryEmployeeRepository::with_seed_data();
        repository.toggle_offline();
        let state = make_state(repository, Arc::new(FixedPromotionEligibility::new(true)));

        let response = app(state)
            .oneshot(
                Request::get("/api/internalemployees")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_204_and_notify_absence_listeners(state: AppState) {
        let absent = Arc::new(Mutex::new(Vec::new()));
        let sink = absent.clone();
        state
            .employee_service
            .subscribe_to_absence(move |_, event| sink.lock().unwrap().push(event.employee_id));

        let response = app(state)
            .oneshot(post_json(
                &format!("/api/internalemployees/{MEGAN_JONES_ID}/absence"),
                "",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(*absent.lock().unwrap(), vec![MEGAN_JONES_ID]);
    }
}
