use crate::data::{AssignmentOutput, AssignmentRequest};
use axum::{Json, Router, routing::post};
use log::info;

async fn assign_handler(
    Json(request): Json<AssignmentRequest>,
) -> Result<Json<AssignmentOutput>, (axum::http::StatusCode, String)> {
    match crate::assign(&request.ranks, &request.capacities) {
        Ok(output) => {
            report(&output);
            Ok(Json(output))
        }
        Err(e) => Err((axum::http::StatusCode::BAD_REQUEST, e.to_string())),
    }
}

// human-readable reporting stays out of the core; the library returns data only
fn report(output: &AssignmentOutput) {
    for (doctor, &hospital) in output.assignments.iter().enumerate() {
        if hospital >= 0 {
            info!("Doctor {doctor} is matched to hospital {hospital}");
        } else {
            info!("Doctor {doctor} was not assigned to a hospital");
        }
    }
}

pub async fn run_server() {
    let app = Router::new().route("/v1/assignment/solve", post(assign_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .unwrap();

    println!("Server running at http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
