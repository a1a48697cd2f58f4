mod prediction_service;
mod validator;

pub use prediction_service::IPredictionService;
pub use validator::IValidator;
