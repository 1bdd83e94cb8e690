use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::jobs as job_db;
use crate::error::ServiceError;
use crate::models::jobs::{CreateJob, JobListQuery, JobResponse, UpdateJob};

/// POST /api/jobs — post a new job (requires authentication).
pub async fn create_job(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateJob>,
) -> Result<HttpResponse, ServiceError> {
    let job = job_db::insert_job(db.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(JobResponse::from(job)))
}

/// GET /api/jobs — list jobs, narrowed by `search`, `filter` and `sort`
/// query parameters. Public.
pub async fn list_jobs(
    db: web::Data<DatabaseConnection>,
    query: web::Query<JobListQuery>,
) -> Result<HttpResponse, ServiceError> {
    let jobs = job_db::list_jobs(db.get_ref(), &query.into_inner()).await?;

    let jobs: Vec<JobResponse> = jobs.into_iter().map(JobResponse::from).collect();
    Ok(HttpResponse::Ok().json(jobs))
}

/// GET /api/jobs/{id} — get a single job. Public.
pub async fn get_job(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();

    let job = job_db::get_job_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Job {id} not found")))?;

    Ok(HttpResponse::Ok().json(JobResponse::from(job)))
}

/// GET /api/jobs/buyer/{email} — jobs the given buyer posted. Callers can
/// only read their own listing.
pub async fn get_jobs_by_buyer(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let email = path.into_inner();

    if user.0.email != email {
        return Err(ServiceError::forbidden(
            "You can only view your own posted jobs",
        ));
    }

    let jobs = job_db::get_jobs_by_buyer_email(db.get_ref(), &email).await?;

    let jobs: Vec<JobResponse> = jobs.into_iter().map(JobResponse::from).collect();
    Ok(HttpResponse::Ok().json(jobs))
}

/// PUT /api/jobs/{id} — replace a job's mutable fields.
///
/// Upsert: an unknown id creates the record under that id rather than
/// failing, which is the behavior existing clients were built against.
pub async fn update_job(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateJob>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();

    let job = job_db::replace_or_insert_job(db.get_ref(), id, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(JobResponse::from(job)))
}

/// DELETE /api/jobs/{id} — remove a job. Idempotent: deleting an unknown id
/// reports zero rows removed instead of failing.
pub async fn delete_job(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();

    let result = job_db::delete_job(db.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "deleted": result.rows_affected,
    })))
}
