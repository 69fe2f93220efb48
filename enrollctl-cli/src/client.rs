//! HTTP client for a running enrollctl server

use enrollctl_core::{Course, Student};
use enrollctl_server::http::routes::{
    CourseResponse, CourseStudentsResponse, EnrollRequest, EnrollResponse, HealthResponse,
    StudentCoursesResponse, StudentResponse,
};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Client-side view of a failed call
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid server URL '{0}'")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered 404
    #[error("not found: {0}")]
    NotFound(String),

    /// Server answered 409
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("server returned {status}: {message}")]
    Unexpected { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct EnrollmentClient {
    base_url: Url,
    http: reqwest::Client,
}

impl EnrollmentClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let url = Url::parse(base_url).map_err(|_| ClientError::InvalidUrl(base_url.to_owned()))?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_owned()));
        }

        Ok(Self {
            base_url: url,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_owned(),
        };
        tracing::debug!(status = status.as_u16(), %message, "request rejected");

        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::CONFLICT => ClientError::Conflict(message),
            _ => ClientError::Unexpected {
                status: status.as_u16(),
                message,
            },
        })
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.send(self.http.get(self.endpoint(&["health"]))).await
    }

    pub async fn register_student(&self, student: &Student) -> Result<Student, ClientError> {
        let response: StudentResponse = self
            .send(self.http.post(self.endpoint(&["students"])).json(student))
            .await?;
        Ok(response.student)
    }

    pub async fn register_course(&self, course: &Course) -> Result<Course, ClientError> {
        let response: CourseResponse = self
            .send(self.http.post(self.endpoint(&["courses"])).json(course))
            .await?;
        Ok(response.course)
    }

    pub async fn enroll(&self, ci: &str, code: &str) -> Result<EnrollResponse, ClientError> {
        let body = EnrollRequest {
            ci: ci.to_owned(),
            code: code.to_owned(),
        };
        self.send(self.http.post(self.endpoint(&["enrollments"])).json(&body))
            .await
    }

    pub async fn courses_for_student(&self, ci: &str) -> Result<Vec<Course>, ClientError> {
        let response: StudentCoursesResponse = self
            .send(self.http.get(self.endpoint(&["students", ci, "courses"])))
            .await?;
        Ok(response.courses)
    }

    pub async fn students_for_course(&self, code: &str) -> Result<Vec<Student>, ClientError> {
        let response: CourseStudentsResponse = self
            .send(self.http.get(self.endpoint(&["courses", code, "students"])))
            .await?;
        Ok(response.students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_urls() {
        assert!(matches!(
            EnrollmentClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            EnrollmentClient::new("mailto:someone@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn endpoint_encodes_segments() {
        let client = EnrollmentClient::new("http://127.0.0.1:50051").unwrap();
        assert_eq!(
            client.endpoint(&["students", "10 01", "courses"]).as_str(),
            "http://127.0.0.1:50051/students/10%2001/courses"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let client = EnrollmentClient::new("http://proxy.local/enroll/").unwrap();
        assert_eq!(
            client.endpoint(&["health"]).as_str(),
            "http://proxy.local/enroll/health"
        );
    }
}
