use diesel::result::Error as DieselError;
use image::ImageError;
use tokio::task::JoinError;
use validator::ValidationErrors;
use crate::data::models::AppError;

impl From<DieselError> for AppError {
    fn from(err: DieselError) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::PoolError(err)
    }
}

impl From<ImageError> for AppError {
    fn from(err: ImageError) -> Self {
        AppError::RenderError(err)
    }
}

impl From<JoinError> for AppError {
    fn from(err: JoinError) -> Self {
        AppError::TaskError(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        AppError::InvalidParameter(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Paging {
        #[validate(range(min = 1, message = "page must be a positive integer"))]
        page: i64,
    }

    #[test]
    fn validation_messages_are_kept() {
        let err: AppError = Paging { page: 0 }.validate().unwrap_err().into();
        match err {
            AppError::InvalidParameter(msg) => assert_eq!(msg, "page must be a positive integer"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
