/// Listener port used when `SERVER_PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;
/// Listener host used when `SERVER_HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Stage name of a developer machine.
pub const LOCALDEV: &str = "localdev";
/// Service name used when `SERVICE_NAME` is not set.
pub const DEFAULT_SERVICE_NAME: &str = "slref";
/// Mount point of AWS Lambda layers.
pub const DEFAULT_LAYERS_DIR: &str = "/opt";
/// Environment variable the Lambda runtime sets for its Runtime API endpoint.
pub const LAMBDA_RUNTIME_API_ENV: &str = "AWS_LAMBDA_RUNTIME_API";
